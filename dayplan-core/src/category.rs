//! Task categories and the analytics category filter

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{CoreError, Result};

/// Severity tag attached to every task
///
/// Doubles as the grouping dimension for analytics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Success,
    Warning,
    Error,
    #[default]
    Info,
}

impl Category {
    /// All categories in display order
    pub const ALL: [Category; 4] = [
        Category::Success,
        Category::Warning,
        Category::Error,
        Category::Info,
    ];

    /// Lowercase identifier, as used in config files
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Success => "success",
            Category::Warning => "warning",
            Category::Error => "error",
            Category::Info => "info",
        }
    }

    /// Capitalized label for selectors and charts
    pub fn label(&self) -> &'static str {
        match self {
            Category::Success => "Success",
            Category::Warning => "Warning",
            Category::Error => "Error",
            Category::Info => "Info",
        }
    }

    /// Upper-case tag shown next to task titles
    pub fn tag(&self) -> &'static str {
        match self {
            Category::Success => "SUCCESS",
            Category::Warning => "WARNING",
            Category::Error => "ERROR",
            Category::Info => "INFO",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Category::Success => "✔",
            Category::Warning => "⚠",
            Category::Error => "✖",
            Category::Info => "ℹ",
        }
    }

    /// Position in [`Category::ALL`]
    pub fn index(&self) -> usize {
        match self {
            Category::Success => 0,
            Category::Warning => 1,
            Category::Error => 2,
            Category::Info => 3,
        }
    }

    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "success" => Ok(Category::Success),
            "warning" => Ok(Category::Warning),
            "error" => Ok(Category::Error),
            "info" => Ok(Category::Info),
            other => Err(CoreError::validation(
                "category",
                format!("Invalid category '{}'", other),
            )),
        }
    }
}

/// Category restriction applied by the analytics panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(c) => *c == category,
        }
    }

    /// All -> Success -> Warning -> Error -> Info -> All
    pub fn next(&self) -> Self {
        match self {
            CategoryFilter::All => CategoryFilter::Only(Category::ALL[0]),
            CategoryFilter::Only(Category::Info) => CategoryFilter::All,
            CategoryFilter::Only(c) => CategoryFilter::Only(c.next()),
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            CategoryFilter::All => CategoryFilter::Only(Category::Info),
            CategoryFilter::Only(Category::Success) => CategoryFilter::All,
            CategoryFilter::Only(c) => CategoryFilter::Only(c.prev()),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CategoryFilter::All => "All Categories",
            CategoryFilter::Only(c) => c.label(),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(CategoryFilter::All)
        } else {
            s.parse().map(CategoryFilter::Only)
        }
    }
}
