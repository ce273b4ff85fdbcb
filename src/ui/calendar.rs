//! Month grid pane

use chrono::{Datelike, NaiveDate};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use dayplan_core::calendar::tasks_on;
use dayplan_core::{DayCell, MonthGrid, Task};

use super::theme;
use crate::app::{App, Focus};

/// Rows drawn inside the border: weekday header plus six weeks
pub const GRID_HEIGHT: u16 = 7;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let selected = app.selected_date();
    let grid = MonthGrid::new(selected, app.settings.week_start);
    let max_markers = app.settings.max_markers;
    let width = cell_width(max_markers);

    let mut lines = Vec::with_capacity(grid.weeks.len() + 1);
    lines.push(Line::from(
        grid.weekday_labels()
            .iter()
            .map(|label| Span::styled(pad(format!(" {:>2}", label), width), theme::bold()))
            .collect::<Vec<_>>(),
    ));

    for week in &grid.weeks {
        let mut spans = Vec::new();
        for cell in week {
            let tasks = tasks_on(app.store.tasks(), cell.date);
            spans.extend(day_spans(cell, &tasks, selected, app.today, max_markers));
        }
        lines.push(Line::from(spans));
    }

    let block = Block::default()
        .title(format!(" {} ", grid.title()))
        .borders(Borders::ALL)
        .border_style(theme::border(app.focus == Focus::Calendar));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Space, two-digit day, markers and room for a "+NN" overflow
fn cell_width(max_markers: usize) -> usize {
    3 + max_markers + 3
}

fn pad(mut text: String, width: usize) -> String {
    let len = text.chars().count();
    if len < width {
        text.push_str(&" ".repeat(width - len));
    }
    text
}

/// Marker glyphs to draw and how many tasks are left over for "+k"
fn marker_counts(tasks: usize, max_markers: usize) -> (usize, usize) {
    let shown = tasks.min(max_markers);
    (shown, tasks - shown)
}

fn day_spans(
    cell: &DayCell,
    tasks: &[&Task],
    selected: NaiveDate,
    today: NaiveDate,
    max_markers: usize,
) -> Vec<Span<'static>> {
    let mut day_style = if cell.in_month {
        Style::default()
    } else {
        theme::dimmed()
    };
    if cell.date == today {
        day_style = day_style.fg(theme::FOCUSED).add_modifier(Modifier::BOLD);
    }
    if cell.date == selected {
        day_style = day_style.add_modifier(Modifier::REVERSED);
    }

    let mut spans = vec![
        Span::raw(" "),
        Span::styled(format!("{:>2}", cell.date.day()), day_style),
    ];
    let mut used = 3;

    let (shown, overflow) = marker_counts(tasks.len(), max_markers);
    for task in &tasks[..shown] {
        spans.push(Span::styled(
            "•",
            Style::default().fg(theme::category_color(task.category)),
        ));
        used += 1;
    }
    if overflow > 0 {
        let more = format!("+{}", overflow);
        used += more.chars().count();
        spans.push(Span::styled(more, theme::dimmed()));
    }

    let width = cell_width(max_markers);
    if used < width {
        spans.push(Span::raw(" ".repeat(width - used)));
    }
    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_counts_overflow() {
        assert_eq!(marker_counts(0, 3), (0, 0));
        assert_eq!(marker_counts(3, 3), (3, 0));
        assert_eq!(marker_counts(5, 3), (3, 2));
    }

    #[test]
    fn test_pad_to_cell_width() {
        assert_eq!(pad(" Mo".to_string(), cell_width(3)), " Mo      ");
        assert_eq!(pad("longer than cell".to_string(), 4), "longer than cell");
    }
}
