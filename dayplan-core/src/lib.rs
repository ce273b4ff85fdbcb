//! Dayplan Core - Pure domain logic for the task calendar
//!
//! This crate contains no I/O operations. Rendering and terminal
//! handling live in the `dayplan` binary.

pub mod analytics;
pub mod calendar;
pub mod category;
pub mod date;
pub mod error;
pub mod form;
pub mod store;
pub mod task;

pub use analytics::TaskStats;
pub use calendar::{DayCell, MonthGrid};
pub use category::{Category, CategoryFilter};
pub use error::{CoreError, Result};
pub use form::{FieldErrors, FormField, FormMode, TaskForm};
pub use store::{Action, TaskStore};
pub use task::{NewTask, Task, TaskId};
