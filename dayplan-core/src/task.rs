//! Task domain model
//!
//! Pure domain logic for task records with no I/O operations.

use chrono::{DateTime, Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::category::Category;

/// Newtype wrapper for task IDs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TaskId(pub u64);

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single task scheduled on a calendar day
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub description: Option<String>,
    pub date: NaiveDate,
    pub category: Category,
    pub completed: bool,
    pub created_at: DateTime<Local>,
}

impl Task {
    /// Toggle completion status
    pub fn toggle_complete(&mut self) {
        self.completed = !self.completed;
    }

    /// Check if the task is scheduled on the given day
    pub fn is_on(&self, date: NaiveDate) -> bool {
        self.date == date
    }
}

/// Fields supplied when creating a task
///
/// The store fills in `id`, `created_at` and `completed`.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTask {
    pub title: String,
    pub description: Option<String>,
    pub date: NaiveDate,
    pub category: Category,
}

impl NewTask {
    /// Create a new task payload with the given title and date
    pub fn new(title: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            title: title.into(),
            description: None,
            date,
            category: Category::default(),
        }
    }

    /// Builder method to set the description
    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    /// Builder method to set the category
    pub fn with_category(mut self, category: Category) -> Self {
        self.category = category;
        self
    }

    /// Materialize into a task record
    pub fn into_task(self, id: TaskId, created_at: DateTime<Local>) -> Task {
        Task {
            id,
            title: self.title,
            description: self.description,
            date: self.date,
            category: self.category,
            completed: false,
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_new_task_defaults() {
        let payload = NewTask::new("Buy milk", day(2024, 1, 5));
        assert_eq!(payload.category, Category::Info);
        assert!(payload.description.is_none());
    }

    #[test]
    fn test_into_task_starts_incomplete() {
        let now = Local::now();
        let task = NewTask::new("Buy milk", day(2024, 1, 5))
            .with_category(Category::Warning)
            .with_description(Some("2 litres".to_string()))
            .into_task(TaskId(7), now);

        assert_eq!(task.id, TaskId(7));
        assert_eq!(task.created_at, now);
        assert!(!task.completed);
        assert_eq!(task.category, Category::Warning);
        assert!(task.is_on(day(2024, 1, 5)));
    }

    #[test]
    fn test_task_toggle() {
        let mut task = NewTask::new("Test", day(2024, 1, 5)).into_task(TaskId(1), Local::now());
        assert!(!task.completed);

        task.toggle_complete();
        assert!(task.completed);

        task.toggle_complete();
        assert!(!task.completed);
    }

    #[test]
    fn test_task_serializes_date_as_iso() {
        let task = NewTask::new("Test", day(2024, 1, 5)).into_task(TaskId(1), Local::now());
        let value = serde_json::to_value(&task).unwrap();
        assert_eq!(value["date"], "2024-01-05");
        assert_eq!(value["category"], "info");
    }
}
