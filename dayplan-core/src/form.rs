//! Task form state and validation
//!
//! The form is a plain value object. Validation is a pure function over its
//! values returning field-keyed messages; the UI only reflects the result.

use chrono::NaiveDate;
use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;

use crate::category::Category;
use crate::date::{format_iso, parse_date_from};
use crate::store::{Action, TaskStore};
use crate::task::{NewTask, Task, TaskId};

pub const TITLE_MIN_CHARS: usize = 3;
pub const TITLE_MAX_CHARS: usize = 100;
pub const DESCRIPTION_MAX_CHARS: usize = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FormField {
    Title,
    Description,
    Date,
    Category,
}

impl FormField {
    pub const ALL: [FormField; 4] = [
        FormField::Title,
        FormField::Description,
        FormField::Date,
        FormField::Category,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FormField::Title => "Title",
            FormField::Description => "Description",
            FormField::Date => "Date",
            FormField::Category => "Category",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            FormField::Title => FormField::Description,
            FormField::Description => FormField::Date,
            FormField::Date => FormField::Category,
            FormField::Category => FormField::Title,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            FormField::Title => FormField::Category,
            FormField::Description => FormField::Title,
            FormField::Date => FormField::Description,
            FormField::Category => FormField::Date,
        }
    }
}

/// Validation messages keyed by field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<FormField, String>);

impl FieldErrors {
    pub fn get(&self, field: FormField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: FormField) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    fn insert(&mut self, field: FormField, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }
}

/// Raw field contents as typed by the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormValues {
    pub title: String,
    pub description: String,
    pub date: String,
    pub category: Category,
}

/// Check every field. `today` anchors relative dates like "tomorrow".
pub fn validate(values: &FormValues, today: NaiveDate) -> FieldErrors {
    let mut errors = FieldErrors::default();

    let title_len = values.title.trim().chars().count();
    if title_len == 0 {
        errors.insert(FormField::Title, "Title is required");
    } else if title_len < TITLE_MIN_CHARS {
        errors.insert(FormField::Title, "Title must be at least 3 characters");
    } else if title_len > TITLE_MAX_CHARS {
        errors.insert(FormField::Title, "Title must not exceed 100 characters");
    }

    if values.description.trim().chars().count() > DESCRIPTION_MAX_CHARS {
        errors.insert(
            FormField::Description,
            "Description must not exceed 500 characters",
        );
    }

    if values.date.trim().is_empty() {
        errors.insert(FormField::Date, "Date is required");
    } else if parse_date_from(&values.date, today).is_err() {
        errors.insert(FormField::Date, "Date must be a valid date");
    }

    errors
}

#[derive(Debug, Clone, PartialEq)]
pub enum FormMode {
    Create,
    /// Editing keeps the original record so untouched fields survive the merge
    Edit(Task),
}

#[derive(Debug, Clone)]
pub struct TaskForm {
    pub mode: FormMode,
    pub values: FormValues,
    pub focus: FormField,
    touched: BTreeSet<FormField>,
    today: NaiveDate,
}

impl TaskForm {
    /// Empty form for a new task on `date`
    pub fn create(date: NaiveDate, category: Category, today: NaiveDate) -> Self {
        Self {
            mode: FormMode::Create,
            values: FormValues {
                title: String::new(),
                description: String::new(),
                date: format_iso(date),
                category,
            },
            focus: FormField::Title,
            touched: BTreeSet::new(),
            today,
        }
    }

    /// Form prefilled from an existing task
    pub fn edit(task: &Task, today: NaiveDate) -> Self {
        Self {
            mode: FormMode::Edit(task.clone()),
            values: FormValues {
                title: task.title.clone(),
                description: task.description.clone().unwrap_or_default(),
                date: format_iso(task.date),
                category: task.category,
            },
            focus: FormField::Title,
            touched: BTreeSet::new(),
            today,
        }
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode, FormMode::Edit(_))
    }

    pub fn title(&self) -> &'static str {
        if self.is_editing() { "Edit Task" } else { "Add New Task" }
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_editing() { "Update" } else { "Add" }
    }

    /// Current validation state of every field, touched or not
    pub fn errors(&self) -> FieldErrors {
        validate(&self.values, self.today)
    }

    /// Error to display next to `field`; hidden until the field is touched
    pub fn visible_error(&self, field: FormField) -> Option<String> {
        if !self.touched.contains(&field) {
            return None;
        }
        self.errors().get(field).map(str::to_string)
    }

    pub fn is_touched(&self, field: FormField) -> bool {
        self.touched.contains(&field)
    }

    /// Leaving a field marks it touched
    pub fn focus_next(&mut self) {
        self.touched.insert(self.focus);
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.touched.insert(self.focus);
        self.focus = self.focus.prev();
    }

    /// Type into the focused field. Category ignores text input.
    pub fn input_char(&mut self, c: char) {
        if let Some(buf) = self.focused_text_mut() {
            buf.push(c);
            self.touched.insert(self.focus);
        }
    }

    pub fn backspace(&mut self) {
        if let Some(buf) = self.focused_text_mut() {
            buf.pop();
            self.touched.insert(self.focus);
        }
    }

    pub fn cycle_category(&mut self, forward: bool) {
        self.values.category = if forward {
            self.values.category.next()
        } else {
            self.values.category.prev()
        };
        self.touched.insert(FormField::Category);
    }

    fn focused_text_mut(&mut self) -> Option<&mut String> {
        match self.focus {
            FormField::Title => Some(&mut self.values.title),
            FormField::Description => Some(&mut self.values.description),
            FormField::Date => Some(&mut self.values.date),
            FormField::Category => None,
        }
    }

    /// Validate and, when clean, dispatch `Add` or `Update` to the store
    ///
    /// Submitting touches every field so all errors become visible.
    pub fn submit(&mut self, store: &mut TaskStore) -> Result<TaskId, FieldErrors> {
        self.touched.extend(FormField::ALL);

        let errors = self.errors();
        if !errors.is_empty() {
            debug!(fields = errors.len(), "form submission rejected");
            return Err(errors);
        }

        // validate() already proved the date parses
        let date = parse_date_from(&self.values.date, self.today).map_err(|_| {
            let mut errors = FieldErrors::default();
            errors.insert(FormField::Date, "Date must be a valid date");
            errors
        })?;
        let title = self.values.title.trim().to_string();
        let description = Some(self.values.description.trim())
            .filter(|d| !d.is_empty())
            .map(str::to_string);

        let action = match &self.mode {
            FormMode::Create => Action::Add(
                NewTask::new(title, date)
                    .with_description(description)
                    .with_category(self.values.category),
            ),
            FormMode::Edit(original) => Action::Update(Task {
                title,
                description,
                date,
                category: self.values.category,
                ..original.clone()
            }),
        };

        store.dispatch(action).ok_or_else(|| {
            let mut errors = FieldErrors::default();
            errors.insert(FormField::Title, "Task no longer exists");
            errors
        })
    }
}
