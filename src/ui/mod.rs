//! Terminal UI rendering

pub mod analytics;
pub mod calendar;
pub mod dialogs;
pub mod form;
pub mod task_list;
pub mod theme;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::{App, DialogMode, Focus};

pub fn draw(f: &mut Frame, app: &App) {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Min(10),   // Panes
            Constraint::Length(1), // Status line
            Constraint::Length(3), // Controls
        ])
        .split(f.area());

    let pane_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(main_chunks[0]);

    let left_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(calendar::GRID_HEIGHT + 2),
            Constraint::Min(5),
        ])
        .split(pane_chunks[0]);

    calendar::render(f, left_chunks[0], app);
    task_list::render(f, left_chunks[1], app);
    analytics::render(f, pane_chunks[1], app);

    draw_status_line(f, app, main_chunks[1]);
    draw_controls(f, app, main_chunks[2]);

    match &app.dialog {
        DialogMode::None => {}
        DialogMode::Form(task_form) => form::render(f, task_form),
        DialogMode::DeleteConfirm { id } => {
            if let Some(task) = app.store.get(*id) {
                dialogs::draw_confirm_dialog(f, "Delete task?", &task.title);
            }
        }
        DialogMode::Help => dialogs::draw_help_dialog(f),
    }
}

fn draw_status_line(f: &mut Frame, app: &App, area: Rect) {
    let line = match &app.status_message {
        Some(msg) => Line::from(Span::styled(
            format!(" {}", msg),
            Style::default().fg(theme::GOOD),
        )),
        None => {
            let day_tasks = app.visible_tasks();
            let mut spans = vec![
                Span::raw(" "),
                Span::styled(format!("{} tasks", app.store.len()), theme::bold()),
                Span::styled(format!(" | {} on this day", day_tasks.len()), theme::dimmed()),
            ];
            // Calendar cells only have room for markers, so name the day's tasks here
            if !day_tasks.is_empty() {
                let titles: Vec<&str> = day_tasks.iter().map(|t| t.title.as_str()).collect();
                spans.push(Span::styled(format!(": {}", titles.join(", ")), theme::dimmed()));
            }
            Line::from(spans)
        }
    };

    f.render_widget(Paragraph::new(line), area);
}

fn key_hint(key: &'static str, action: &'static str) -> [Span<'static>; 2] {
    [
        Span::styled(key, Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(action),
    ]
}

fn draw_controls(f: &mut Frame, app: &App, area: Rect) {
    let hints: &[(&'static str, &'static str)] = match app.focus {
        Focus::Calendar => &[
            ("←→↑↓", ":Day/Week "),
            ("PgUp/PgDn", ":Month "),
            ("t", ":Today "),
        ],
        Focus::Tasks => &[
            ("↑↓", ":Nav "),
            ("Space", ":Toggle "),
            ("e", ":Edit "),
            ("d", ":Del "),
        ],
        Focus::Analytics => &[("←→", ":Filter "), ("r", ":Reset ")],
    };

    let common: &[(&'static str, &'static str)] = &[
        ("a", ":Add "),
        ("Tab", ":Pane "),
        ("?", ":Help "),
        ("q", ":Quit"),
    ];

    let spans: Vec<Span> = hints
        .iter()
        .chain(common)
        .flat_map(|&(key, action)| key_hint(key, action))
        .collect();

    let paragraph = Paragraph::new(Line::from(spans))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Controls ")
                .border_style(theme::dimmed()),
        )
        .alignment(Alignment::Center);

    f.render_widget(paragraph, area);
}

pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
