//! User configuration
//!
//! Loaded through confy from the platform config dir (or `--config`). A
//! missing file is created with the defaults below.

use std::path::{Path, PathBuf};

use chrono::Weekday;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use dayplan_core::Category;
use dayplan_core::calendar::parse_week_start;

use crate::error::{AppError, Result};

pub const APP_NAME: &str = "dayplan";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub calendar: CalendarSettings,
    pub analytics: AnalyticsSettings,
    pub form: FormSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarSettings {
    /// "monday" or "sunday"
    pub week_start: String,
    /// Marker glyphs drawn per day cell before collapsing into "+N"
    pub max_markers: usize,
}

impl Default for CalendarSettings {
    fn default() -> Self {
        Self {
            week_start: "monday".to_string(),
            max_markers: 3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyticsSettings {
    /// Completion rate (percent) at or above which the rate is shown as healthy
    pub completion_threshold: u32,
}

impl Default for AnalyticsSettings {
    fn default() -> Self {
        Self {
            completion_threshold: 70,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormSettings {
    /// Category preselected when adding a task
    pub default_category: Category,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    pub level: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}

impl AppConfig {
    /// Load from `path`, or from confy's default location when None
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config: AppConfig = match path {
            Some(p) => confy::load_path(p)?,
            None => confy::load(APP_NAME, None)?,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.analytics.completion_threshold > 100 {
            return Err(AppError::config(format!(
                "analytics.completion_threshold must be between 0 and 100, got {}",
                self.analytics.completion_threshold
            )));
        }
        if self.calendar.max_markers == 0 {
            return Err(AppError::config("calendar.max_markers must be at least 1"));
        }
        Ok(())
    }

    pub fn week_start(&self) -> Weekday {
        parse_week_start(&self.calendar.week_start)
    }

    /// Configured log file, else `dayplan.log` in the platform data dir
    pub fn log_file(&self) -> PathBuf {
        self.logging.file.clone().unwrap_or_else(default_log_file)
    }
}

fn default_log_file() -> PathBuf {
    ProjectDirs::from("", "", APP_NAME)
        .map(|dirs| dirs.data_local_dir().join("dayplan.log"))
        .unwrap_or_else(|| std::env::temp_dir().join("dayplan.log"))
}
