//! TUI application state and event handling

use std::io;

use chrono::{Local, NaiveDate, Weekday};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{debug, info};

use dayplan_core::calendar::{shift_days, shift_month};
use dayplan_core::{
    Action, Category, CategoryFilter, FormField, Task, TaskForm, TaskId, TaskStats, TaskStore,
};

use crate::config::AppConfig;
use crate::error::{AppError, Result};
use crate::ui;

/// Which pane receives navigation keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Calendar,
    Tasks,
    Analytics,
}

impl Focus {
    pub fn next(&self) -> Self {
        match self {
            Focus::Calendar => Focus::Tasks,
            Focus::Tasks => Focus::Analytics,
            Focus::Analytics => Focus::Calendar,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Focus::Calendar => Focus::Analytics,
            Focus::Tasks => Focus::Calendar,
            Focus::Analytics => Focus::Tasks,
        }
    }
}

#[derive(Debug, Clone)]
pub enum DialogMode {
    None,
    Form(Box<TaskForm>),
    DeleteConfirm { id: TaskId },
    Help,
}

impl DialogMode {
    pub fn is_open(&self) -> bool {
        !matches!(self, DialogMode::None)
    }
}

/// Settings the UI reads on every frame
#[derive(Debug, Clone, Copy)]
pub struct ViewSettings {
    pub week_start: Weekday,
    pub max_markers: usize,
    pub completion_threshold: u32,
    pub default_category: Category,
}

impl From<&AppConfig> for ViewSettings {
    fn from(config: &AppConfig) -> Self {
        Self {
            week_start: config.week_start(),
            max_markers: config.calendar.max_markers,
            completion_threshold: config.analytics.completion_threshold,
            default_category: config.form.default_category,
        }
    }
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self::from(&AppConfig::default())
    }
}

pub struct App {
    pub store: TaskStore,
    pub settings: ViewSettings,
    pub focus: Focus,
    pub selected_index: usize,
    pub dialog: DialogMode,
    pub should_quit: bool,
    pub status_message: Option<String>,
    pub today: NaiveDate,
}

impl App {
    pub fn new(settings: ViewSettings, selected_date: NaiveDate, today: NaiveDate) -> Self {
        Self {
            store: TaskStore::new(selected_date),
            settings,
            focus: Focus::Calendar,
            selected_index: 0,
            dialog: DialogMode::None,
            should_quit: false,
            status_message: None,
            today,
        }
    }

    pub fn selected_date(&self) -> NaiveDate {
        self.store.selected_date()
    }

    /// Tasks on the selected day, in the order they were added
    pub fn visible_tasks(&self) -> Vec<&Task> {
        self.store.selected_tasks()
    }

    pub fn selected_task(&self) -> Option<&Task> {
        self.visible_tasks().get(self.selected_index).copied()
    }

    pub fn selected_task_id(&self) -> Option<TaskId> {
        self.selected_task().map(|t| t.id)
    }

    /// Analytics over every task, restricted by the store's filter
    pub fn stats(&self) -> TaskStats {
        TaskStats::compute(self.store.tasks(), self.store.filter_category())
    }

    pub fn move_selection(&mut self, delta: i32) {
        let len = self.visible_tasks().len();
        if len == 0 {
            return;
        }

        self.selected_index = if delta < 0 {
            self.selected_index.saturating_sub(delta.unsigned_abs() as usize)
        } else {
            (self.selected_index + delta as usize).min(len - 1)
        };
    }

    fn clamp_selection(&mut self) {
        let len = self.visible_tasks().len();
        if self.selected_index >= len {
            self.selected_index = len.saturating_sub(1);
        }
    }

    pub fn select_date(&mut self, date: NaiveDate) {
        if date != self.selected_date() {
            self.store.dispatch(Action::SetSelectedDate(date));
            self.selected_index = 0;
        }
    }

    pub fn move_calendar_days(&mut self, days: i64) {
        self.select_date(shift_days(self.selected_date(), days));
    }

    pub fn move_calendar_months(&mut self, months: i32) {
        self.select_date(shift_month(self.selected_date(), months));
    }

    pub fn jump_to_today(&mut self) {
        self.select_date(self.today);
    }

    pub fn toggle_selected(&mut self) {
        if let Some(id) = self.selected_task_id() {
            self.store.dispatch(Action::ToggleComplete(id));
        }
    }

    pub fn open_add_form(&mut self) {
        let form = TaskForm::create(
            self.selected_date(),
            self.settings.default_category,
            self.today,
        );
        self.dialog = DialogMode::Form(Box::new(form));
    }

    pub fn open_edit_form(&mut self) {
        if let Some(task) = self.selected_task() {
            let form = TaskForm::edit(task, self.today);
            self.dialog = DialogMode::Form(Box::new(form));
        }
    }

    pub fn request_delete(&mut self) {
        if let Some(id) = self.selected_task_id() {
            self.dialog = DialogMode::DeleteConfirm { id };
        }
    }

    pub fn confirm_delete(&mut self, id: TaskId) {
        self.store.dispatch(Action::Delete(id));
        info!(%id, "task deleted");
        self.clamp_selection();
        self.status_message = Some("Task deleted".to_string());
        self.dialog = DialogMode::None;
    }

    /// Drop the open dialog; form edits are discarded with it
    pub fn cancel_dialog(&mut self) {
        self.dialog = DialogMode::None;
    }

    /// Submit the open form. Invalid forms stay open with their errors shown.
    pub fn submit_form(&mut self) {
        let DialogMode::Form(form) = &mut self.dialog else {
            return;
        };

        let editing = form.is_editing();
        match form.submit(&mut self.store) {
            Ok(id) => {
                let message = if editing {
                    info!(%id, "task updated");
                    "Task updated successfully!"
                } else {
                    info!(%id, "task added");
                    "Task added successfully!"
                };
                self.status_message = Some(message.to_string());
                self.dialog = DialogMode::None;
                self.clamp_selection();
            }
            Err(errors) => {
                debug!(?errors, "form has errors");
            }
        }
    }

    pub fn cycle_filter(&mut self, forward: bool) {
        let current = self.store.filter_category();
        let next = if forward { current.next() } else { current.prev() };
        self.store.dispatch(Action::SetFilterCategory(next));
    }

    pub fn reset_filter(&mut self) {
        self.store.dispatch(Action::SetFilterCategory(CategoryFilter::All));
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        self.status_message = None;

        if self.dialog.is_open() {
            self.handle_dialog_key(key);
            return;
        }

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
                return;
            }
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
                return;
            }
            KeyCode::Tab => {
                self.focus = self.focus.next();
                return;
            }
            KeyCode::BackTab => {
                self.focus = self.focus.prev();
                return;
            }
            KeyCode::Char('?') => {
                self.dialog = DialogMode::Help;
                return;
            }
            KeyCode::Char('a') => {
                self.open_add_form();
                return;
            }
            KeyCode::Char('t') => {
                self.jump_to_today();
                return;
            }
            KeyCode::Char('f') => {
                self.cycle_filter(true);
                return;
            }
            KeyCode::Char('F') => {
                self.cycle_filter(false);
                return;
            }
            KeyCode::Char('r') => {
                self.reset_filter();
                return;
            }
            _ => {}
        }

        match self.focus {
            Focus::Calendar => self.handle_calendar_key(key.code),
            Focus::Tasks => self.handle_tasks_key(key.code),
            Focus::Analytics => self.handle_analytics_key(key.code),
        }
    }

    fn handle_calendar_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Left | KeyCode::Char('h') => self.move_calendar_days(-1),
            KeyCode::Right | KeyCode::Char('l') => self.move_calendar_days(1),
            KeyCode::Up | KeyCode::Char('k') => self.move_calendar_days(-7),
            KeyCode::Down | KeyCode::Char('j') => self.move_calendar_days(7),
            KeyCode::PageUp | KeyCode::Char('<') => self.move_calendar_months(-1),
            KeyCode::PageDown | KeyCode::Char('>') => self.move_calendar_months(1),
            KeyCode::Enter => self.focus = Focus::Tasks,
            _ => {}
        }
    }

    fn handle_tasks_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Up | KeyCode::Char('k') => self.move_selection(-1),
            KeyCode::Down | KeyCode::Char('j') => self.move_selection(1),
            KeyCode::Char('g') | KeyCode::Home => self.selected_index = 0,
            KeyCode::Char('G') | KeyCode::End => {
                self.selected_index = self.visible_tasks().len().saturating_sub(1);
            }
            KeyCode::Char(' ') | KeyCode::Enter | KeyCode::Char('x') => self.toggle_selected(),
            KeyCode::Char('e') => self.open_edit_form(),
            KeyCode::Char('d') | KeyCode::Delete => self.request_delete(),
            _ => {}
        }
    }

    fn handle_analytics_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Right | KeyCode::Char('l') => self.cycle_filter(true),
            KeyCode::Left | KeyCode::Char('h') => self.cycle_filter(false),
            _ => {}
        }
    }

    fn handle_dialog_key(&mut self, key: KeyEvent) {
        match &mut self.dialog {
            DialogMode::Form(form) => match key.code {
                KeyCode::Esc => self.cancel_dialog(),
                KeyCode::Enter => self.submit_form(),
                KeyCode::Tab | KeyCode::Down => form.focus_next(),
                KeyCode::BackTab | KeyCode::Up => form.focus_prev(),
                KeyCode::Left if form.focus == FormField::Category => form.cycle_category(false),
                KeyCode::Right if form.focus == FormField::Category => form.cycle_category(true),
                KeyCode::Char(' ') if form.focus == FormField::Category => {
                    form.cycle_category(true)
                }
                KeyCode::Backspace => form.backspace(),
                KeyCode::Char(c) => form.input_char(c),
                _ => {}
            },
            DialogMode::DeleteConfirm { id } => match key.code {
                KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                    let id = *id;
                    self.confirm_delete(id);
                }
                KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => self.cancel_dialog(),
                _ => {}
            },
            DialogMode::Help => match key.code {
                KeyCode::Esc | KeyCode::Char('?') | KeyCode::Enter | KeyCode::Char('q') => {
                    self.cancel_dialog();
                }
                _ => {}
            },
            DialogMode::None => {}
        }
    }
}

pub fn run_tui(settings: ViewSettings, selected_date: NaiveDate, filter: CategoryFilter) -> Result<()> {
    enable_raw_mode().map_err(|e| AppError::terminal("Failed to enable raw mode", e))?;
    let mut terminal = setup_or_restore(
        || {
            let mut stdout = io::stdout();
            execute!(stdout, EnterAlternateScreen)
                .map_err(|e| AppError::terminal("Failed to setup terminal", e))?;
            Terminal::new(CrosstermBackend::new(stdout))
                .map_err(|e| AppError::terminal("Failed to create terminal", e))
        },
        || {
            disable_raw_mode().ok();
            execute!(io::stdout(), LeaveAlternateScreen).ok();
        },
    )?;

    let mut app = App::new(settings, selected_date, Local::now().date_naive());
    app.store.dispatch(Action::SetFilterCategory(filter));
    info!(%selected_date, filter = filter.label(), "tui started");

    let result = run_app(&mut terminal, &mut app);

    // Restore terminal even when the loop failed
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();

    info!(tasks = app.store.len(), "tui stopped");
    result
}

/// Run a setup step, undoing raw mode through `restore` if it fails
fn setup_or_restore<T>(setup: impl FnOnce() -> Result<T>, restore: impl FnOnce()) -> Result<T> {
    setup().inspect_err(|_| restore())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        terminal
            .draw(|f| ui::draw(f, app))
            .map_err(|e| AppError::terminal("Failed to draw", e))?;

        if let Event::Key(key) =
            event::read().map_err(|e| AppError::terminal("Failed to read event", e))?
        {
            // Windows reports releases too
            if key.kind == KeyEventKind::Press {
                app.handle_key(key);
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jan(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    fn app() -> App {
        App::new(ViewSettings::default(), jan(5), jan(5))
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn add_task(app: &mut App, title: &str) {
        press(app, KeyCode::Char('a'));
        type_str(app, title);
        press(app, KeyCode::Enter);
    }

    #[test]
    fn test_add_through_form() {
        let mut app = app();
        add_task(&mut app, "Buy milk");

        assert!(!app.dialog.is_open());
        assert_eq!(app.status_message.as_deref(), Some("Task added successfully!"));
        let tasks = app.visible_tasks();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].title, "Buy milk");
        assert_eq!(tasks[0].category, Category::Info);
        assert_eq!(tasks[0].date, jan(5));
    }

    #[test]
    fn test_invalid_form_stays_open() {
        let mut app = app();
        add_task(&mut app, "ab");

        let DialogMode::Form(form) = &app.dialog else {
            panic!("form should still be open");
        };
        assert!(form.visible_error(FormField::Title).is_some());
        assert!(app.store.is_empty());
    }

    #[test]
    fn test_cancel_form_discards_input() {
        let mut app = app();
        press(&mut app, KeyCode::Char('a'));
        type_str(&mut app, "Never saved");
        press(&mut app, KeyCode::Esc);

        assert!(!app.dialog.is_open());
        assert!(app.store.is_empty());
        assert!(!app.should_quit);
    }

    #[test]
    fn test_form_category_and_date_fields() {
        let mut app = app();
        press(&mut app, KeyCode::Char('a'));
        type_str(&mut app, "Pay rent");
        press(&mut app, KeyCode::Tab); // description
        press(&mut app, KeyCode::Tab); // date
        for _ in 0.."2024-01-05".len() {
            press(&mut app, KeyCode::Backspace);
        }
        type_str(&mut app, "2024-01-08");
        press(&mut app, KeyCode::Tab); // category
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Enter);

        assert!(app.visible_tasks().is_empty());
        let tasks = app.store.tasks_on(jan(8));
        assert_eq!(tasks[0].category, Category::Success);
    }

    #[test]
    fn test_toggle_and_delete_with_confirmation() {
        let mut app = app();
        add_task(&mut app, "First");
        add_task(&mut app, "Second");
        app.focus = Focus::Tasks;

        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Char(' '));
        assert!(app.visible_tasks()[1].completed);

        press(&mut app, KeyCode::Char('d'));
        assert!(matches!(app.dialog, DialogMode::DeleteConfirm { .. }));
        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.store.len(), 2);

        press(&mut app, KeyCode::Char('d'));
        press(&mut app, KeyCode::Char('y'));
        let titles: Vec<&str> = app.visible_tasks().iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["First"]);
        assert_eq!(app.selected_index, 0);
    }

    #[test]
    fn test_edit_prefills_and_updates() {
        let mut app = app();
        add_task(&mut app, "Draft");
        app.focus = Focus::Tasks;

        press(&mut app, KeyCode::Char('e'));
        type_str(&mut app, " v2");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.status_message.as_deref(), Some("Task updated successfully!"));
        assert_eq!(app.visible_tasks()[0].title, "Draft v2");
        assert_eq!(app.store.len(), 1);
    }

    #[test]
    fn test_calendar_navigation_selects_date() {
        let mut app = app();
        add_task(&mut app, "On the fifth");
        app.focus = Focus::Tasks;
        press(&mut app, KeyCode::Down);

        app.focus = Focus::Calendar;
        press(&mut app, KeyCode::Right);
        assert_eq!(app.selected_date(), jan(6));
        assert_eq!(app.selected_index, 0);
        assert!(app.visible_tasks().is_empty());

        press(&mut app, KeyCode::Down);
        assert_eq!(app.selected_date(), jan(13));
        press(&mut app, KeyCode::PageDown);
        assert_eq!(app.selected_date(), NaiveDate::from_ymd_opt(2024, 2, 13).unwrap());
        press(&mut app, KeyCode::Char('t'));
        assert_eq!(app.selected_date(), jan(5));
    }

    #[test]
    fn test_filter_cycle_and_reset() {
        let mut app = app();
        press(&mut app, KeyCode::Char('f'));
        assert_eq!(
            app.store.filter_category(),
            CategoryFilter::Only(Category::Success)
        );
        press(&mut app, KeyCode::Char('F'));
        assert_eq!(app.store.filter_category(), CategoryFilter::All);

        app.focus = Focus::Analytics;
        press(&mut app, KeyCode::Left);
        assert_eq!(app.store.filter_category(), CategoryFilter::Only(Category::Info));
        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.store.filter_category(), CategoryFilter::All);
    }

    #[test]
    fn test_stats_follow_filter() {
        let mut app = app();
        add_task(&mut app, "Done");
        add_task(&mut app, "Not yet");
        app.focus = Focus::Tasks;
        press(&mut app, KeyCode::Char(' '));

        assert_eq!(app.stats().completion_rate(), 50);
        app.store.dispatch(Action::SetFilterCategory(CategoryFilter::Only(Category::Error)));
        assert_eq!(app.stats().total(), 0);
        assert_eq!(app.stats().completion_rate(), 0);
    }

    #[test]
    fn test_quit_and_ctrl_c() {
        let mut app = app();
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);

        let mut app = self::app();
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }

    #[test]
    fn test_cancel_edit_keeps_stored_task() {
        let mut app = app();
        add_task(&mut app, "Original");
        app.focus = Focus::Tasks;
        let before = app.visible_tasks()[0].clone();

        press(&mut app, KeyCode::Char('e'));
        type_str(&mut app, " changed");
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Esc);

        assert!(!app.dialog.is_open());
        assert!(app.status_message.is_none());
        assert_eq!(app.store.len(), 1);
        assert_eq!(app.store.get(before.id), Some(&before));
    }

    #[test]
    fn test_failed_setup_restores_terminal() {
        let mut restored = false;
        let result: Result<()> = setup_or_restore(
            || Err(AppError::terminal("Failed to setup terminal", io::Error::other("no tty"))),
            || restored = true,
        );
        assert!(matches!(result, Err(AppError::Terminal { .. })));
        assert!(restored);

        let mut restored = false;
        let value = setup_or_restore(|| Ok(7), || restored = true).unwrap();
        assert_eq!(value, 7);
        assert!(!restored);
    }

    #[test]
    fn test_help_dialog_swallows_keys() {
        let mut app = app();
        press(&mut app, KeyCode::Char('?'));
        assert!(matches!(app.dialog, DialogMode::Help));
        press(&mut app, KeyCode::Char('a'));
        assert!(matches!(app.dialog, DialogMode::Help));
        press(&mut app, KeyCode::Esc);
        assert!(!app.dialog.is_open());
        assert!(!app.should_quit);
    }
}
