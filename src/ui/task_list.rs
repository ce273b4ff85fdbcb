//! Per-day task list pane

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};

use dayplan_core::Task;
use dayplan_core::date::{format_created, format_long};

use super::theme;
use crate::app::{App, Focus};

pub const EMPTY_MESSAGE: &str = "No tasks for this date. Press 'a' to add one!";

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let focused = app.focus == Focus::Tasks;
    let block = Block::default()
        .title(format!(" Tasks for {} ", format_long(app.selected_date())))
        .title_alignment(Alignment::Left)
        .borders(Borders::ALL)
        .border_style(theme::border(focused));

    let tasks = app.visible_tasks();
    if tasks.is_empty() {
        let empty = Paragraph::new(EMPTY_MESSAGE)
            .style(theme::dimmed())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = tasks.iter().map(|task| task_item(task)).collect();

    let highlight = if focused {
        Style::default().bg(theme::MUTED)
    } else {
        Style::default()
    };
    let list = List::new(items).block(block).highlight_style(highlight);

    let mut state = ListState::default().with_selected(Some(app.selected_index));
    frame.render_stateful_widget(list, area, &mut state);
}

fn task_item(task: &Task) -> ListItem<'static> {
    let checkbox = if task.completed { "[✓]" } else { "[ ]" };
    let color = theme::category_color(task.category);

    let title_style = if task.completed {
        Style::default()
            .fg(theme::GOOD)
            .add_modifier(Modifier::CROSSED_OUT)
    } else {
        theme::bold()
    };

    let mut lines = vec![Line::from(vec![
        Span::styled(
            format!("{} ", checkbox),
            if task.completed {
                Style::default().fg(theme::GOOD)
            } else {
                Style::default()
            },
        ),
        Span::styled(task.title.clone(), title_style),
        Span::raw(" "),
        Span::styled(
            format!("{} {}", task.category.icon(), task.category.tag()),
            Style::default().fg(color),
        ),
    ])];

    if let Some(description) = &task.description {
        lines.push(Line::from(Span::raw(format!("    {}", description))));
    }

    lines.push(Line::from(Span::styled(
        format!("    Created: {}", format_created(&task.created_at)),
        theme::dimmed(),
    )));

    ListItem::new(lines)
}
