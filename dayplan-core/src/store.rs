//! In-memory task store
//!
//! Holds the task list plus two pieces of view state (selected date and
//! analytics filter). Every mutation is a total, synchronous function of the
//! current state; nothing here can fail.

use chrono::{Local, NaiveDate};
use tracing::debug;

use crate::calendar;
use crate::category::CategoryFilter;
use crate::task::{NewTask, Task, TaskId};

/// A single mutation applied through [`TaskStore::dispatch`]
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Add(NewTask),
    Update(Task),
    Delete(TaskId),
    ToggleComplete(TaskId),
    SetSelectedDate(NaiveDate),
    SetFilterCategory(CategoryFilter),
}

#[derive(Debug, Clone)]
pub struct TaskStore {
    tasks: Vec<Task>,
    selected_date: NaiveDate,
    filter_category: CategoryFilter,
    next_id: u64,
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::new(Local::now().date_naive())
    }
}

impl TaskStore {
    /// Create an empty store with the given day selected
    pub fn new(selected_date: NaiveDate) -> Self {
        Self {
            tasks: Vec::new(),
            selected_date,
            filter_category: CategoryFilter::All,
            next_id: 1,
        }
    }

    /// Apply an action
    ///
    /// Returns the id of the task the action created or changed, or None when
    /// it touched no task (unknown id, or a view-state action).
    pub fn dispatch(&mut self, action: Action) -> Option<TaskId> {
        debug!(?action, "dispatch");
        match action {
            Action::Add(fields) => Some(self.add(fields)),
            Action::Update(task) => {
                let id = task.id;
                self.update(task).then_some(id)
            }
            Action::Delete(id) => self.delete(id).map(|t| t.id),
            Action::ToggleComplete(id) => self.toggle_complete(id).map(|_| id),
            Action::SetSelectedDate(date) => {
                self.set_selected_date(date);
                None
            }
            Action::SetFilterCategory(filter) => {
                self.set_filter_category(filter);
                None
            }
        }
    }

    /// Append a new task with a fresh id and creation timestamp
    pub fn add(&mut self, fields: NewTask) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        self.tasks.push(fields.into_task(id, Local::now()));
        id
    }

    /// Replace the stored record with the same id
    ///
    /// The stored `id` and `created_at` win over whatever the caller passed.
    /// Returns false when no record matches.
    pub fn update(&mut self, task: Task) -> bool {
        match self.tasks.iter_mut().find(|t| t.id == task.id) {
            Some(slot) => {
                let created_at = slot.created_at;
                *slot = Task { created_at, ..task };
                true
            }
            None => false,
        }
    }

    /// Remove the task with the given id, if present
    pub fn delete(&mut self, id: TaskId) -> Option<Task> {
        let pos = self.tasks.iter().position(|t| t.id == id)?;
        Some(self.tasks.remove(pos))
    }

    /// Flip the completion flag. Returns the new value, or None if absent.
    pub fn toggle_complete(&mut self, id: TaskId) -> Option<bool> {
        let task = self.tasks.iter_mut().find(|t| t.id == id)?;
        task.toggle_complete();
        Some(task.completed)
    }

    pub fn set_selected_date(&mut self, date: NaiveDate) {
        self.selected_date = date;
    }

    pub fn set_filter_category(&mut self, filter: CategoryFilter) {
        self.filter_category = filter;
    }

    pub fn selected_date(&self) -> NaiveDate {
        self.selected_date
    }

    pub fn filter_category(&self) -> CategoryFilter {
        self.filter_category
    }

    /// All tasks in insertion order
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Tasks scheduled on the given day, in insertion order
    pub fn tasks_on(&self, date: NaiveDate) -> Vec<&Task> {
        calendar::tasks_on(&self.tasks, date)
    }

    /// Tasks scheduled on the currently selected day
    pub fn selected_tasks(&self) -> Vec<&Task> {
        self.tasks_on(self.selected_date)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::Category;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    fn store_with(titles: &[&str]) -> TaskStore {
        let mut store = TaskStore::new(day(5));
        for title in titles {
            store.add(NewTask::new(*title, day(5)));
        }
        store
    }

    #[test]
    fn test_add_assigns_unique_ids() {
        let mut store = TaskStore::new(day(5));
        let id1 = store.add(NewTask::new("Task 1", day(5)));
        let id2 = store.add(NewTask::new("Task 2", day(6)));

        assert_ne!(id1, id2);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_ids_not_reused_after_delete() {
        let mut store = store_with(&["Task 1", "Task 2"]);
        let last = store.tasks()[1].id;
        store.delete(last);

        let fresh = store.add(NewTask::new("Task 3", day(5)));
        assert_ne!(fresh, last);
    }

    #[test]
    fn test_update_preserves_created_at() {
        let mut store = store_with(&["Task 1"]);
        let original = store.tasks()[0].clone();

        let mut edited = original.clone();
        edited.title = "Renamed".to_string();
        edited.category = Category::Error;
        edited.created_at = original.created_at - chrono::Duration::days(3);

        assert!(store.update(edited));
        let stored = store.get(original.id).unwrap();
        assert_eq!(stored.title, "Renamed");
        assert_eq!(stored.category, Category::Error);
        assert_eq!(stored.created_at, original.created_at);
    }

    #[test]
    fn test_update_unknown_id_is_noop() {
        let mut store = store_with(&["Task 1"]);
        let before = store.tasks().to_vec();

        let mut ghost = before[0].clone();
        ghost.id = TaskId(999);
        ghost.title = "Ghost".to_string();

        assert!(!store.update(ghost));
        assert_eq!(store.tasks(), before.as_slice());
    }

    #[test]
    fn test_delete_missing_is_noop() {
        let mut store = store_with(&["Task 1"]);
        assert!(store.delete(TaskId(42)).is_none());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_toggle_missing_returns_none() {
        let mut store = TaskStore::new(day(5));
        assert_eq!(store.toggle_complete(TaskId(1)), None);
    }

    #[test]
    fn test_tasks_on_keeps_insertion_order() {
        let mut store = TaskStore::new(day(5));
        store.add(NewTask::new("b", day(5)));
        store.add(NewTask::new("other day", day(6)));
        store.add(NewTask::new("a", day(5)));

        let titles: Vec<&str> = store.tasks_on(day(5)).iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["b", "a"]);
    }

    #[test]
    fn test_dispatch_view_state() {
        let mut store = TaskStore::new(day(5));
        store.dispatch(Action::SetSelectedDate(day(9)));
        store.dispatch(Action::SetFilterCategory(CategoryFilter::Only(Category::Warning)));

        assert_eq!(store.selected_date(), day(9));
        assert_eq!(store.filter_category(), CategoryFilter::Only(Category::Warning));
        assert!(store.is_empty());
    }

    #[test]
    fn test_dispatch_returns_touched_id() {
        let mut store = TaskStore::new(day(5));
        let id = store
            .dispatch(Action::Add(NewTask::new("Task", day(5))))
            .unwrap();

        assert_eq!(store.dispatch(Action::ToggleComplete(id)), Some(id));
        assert!(store.get(id).unwrap().completed);
        assert_eq!(store.dispatch(Action::ToggleComplete(TaskId(99))), None);
        assert_eq!(store.dispatch(Action::SetSelectedDate(day(6))), None);

        assert_eq!(store.dispatch(Action::Delete(id)), Some(id));
        assert_eq!(store.dispatch(Action::Delete(id)), None);
    }
}
