//! Aggregate task statistics
//!
//! Derived on every render from the full task list, optionally restricted to
//! one category.

use crate::category::{Category, CategoryFilter};
use crate::task::Task;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TaskStats {
    /// Task count per category, indexed by [`Category::index`]
    pub by_category: [usize; 4],
    pub completed: usize,
    pub pending: usize,
}

impl TaskStats {
    /// Count the tasks matching `filter`
    pub fn compute<'a>(tasks: impl IntoIterator<Item = &'a Task>, filter: CategoryFilter) -> Self {
        let mut stats = Self::default();
        for task in tasks.into_iter().filter(|t| filter.matches(t.category)) {
            stats.by_category[task.category.index()] += 1;
            if task.completed {
                stats.completed += 1;
            } else {
                stats.pending += 1;
            }
        }
        stats
    }

    pub fn total(&self) -> usize {
        self.completed + self.pending
    }

    pub fn count(&self, category: Category) -> usize {
        self.by_category[category.index()]
    }

    /// Per-category counts paired with their category, in display order
    pub fn category_counts(&self) -> [(Category, usize); 4] {
        Category::ALL.map(|c| (c, self.count(c)))
    }

    /// Completed share as a whole percentage, halves rounding up
    ///
    /// Zero tasks yields 0.
    pub fn completion_rate(&self) -> u32 {
        percent(self.completed, self.total())
    }

    pub fn pending_rate(&self) -> u32 {
        percent(self.pending, self.total())
    }
}

fn percent(part: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((part * 200 + total) / (total * 2)) as u32
}
