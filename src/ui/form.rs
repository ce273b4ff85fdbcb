//! Add/edit task dialog

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use dayplan_core::form::{DESCRIPTION_MAX_CHARS, TITLE_MAX_CHARS};
use dayplan_core::{Category, FormField, TaskForm};

use super::{centered_rect, theme};

pub fn render(frame: &mut Frame, form: &TaskForm) {
    let area = centered_rect(60, 70, frame.area());

    frame.render_widget(Clear, area);

    let border = if form.is_editing() {
        theme::FOCUSED
    } else {
        theme::GOOD
    };
    let block = Block::default()
        .title(format!(" {} ", form.title()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(1),
        ])
        .split(inner);

    for (field, chunk) in FormField::ALL.iter().zip(chunks.iter()) {
        draw_field(frame, *chunk, form, *field);
    }

    let hint = Paragraph::new(format!(
        "Enter to {}, Esc to cancel, Tab to switch field",
        form.submit_label().to_lowercase()
    ))
    .style(theme::dimmed())
    .alignment(Alignment::Center);

    frame.render_widget(hint, chunks[4]);
}

fn draw_field(frame: &mut Frame, area: Rect, form: &TaskForm, field: FormField) {
    let focused = form.focus == field;
    let label_style = if focused {
        theme::bold().fg(theme::FOCUSED)
    } else {
        theme::bold()
    };
    let required = matches!(field, FormField::Title | FormField::Date | FormField::Category);

    let mut label = vec![Span::styled(field.label(), label_style)];
    if required {
        label.push(Span::styled(" *", Style::default().fg(theme::ERROR)));
    }
    let limit = match field {
        FormField::Title => Some((&form.values.title, TITLE_MAX_CHARS)),
        FormField::Description => Some((&form.values.description, DESCRIPTION_MAX_CHARS)),
        FormField::Date | FormField::Category => None,
    };
    if let Some((text, max)) = limit {
        label.push(Span::styled(
            format!(" ({}/{})", text.trim().chars().count(), max),
            theme::dimmed(),
        ));
    }

    let width = usize::from(area.width);
    let value = match field {
        FormField::Title => text_value(&form.values.title, focused, width),
        FormField::Description => text_value(&form.values.description, focused, width),
        FormField::Date => text_value(&form.values.date, focused, width),
        FormField::Category => category_value(form.values.category, focused),
    };

    let mut lines = vec![Line::from(label), value];
    if let Some(error) = form.visible_error(field) {
        lines.push(Line::from(Span::styled(
            format!("  {}", error),
            Style::default().fg(theme::ERROR),
        )));
    }

    // No wrapping: the value stays on one row so the error row is never pushed out
    frame.render_widget(Paragraph::new(lines), area);
}

/// One-row view of a text value, scrolled to keep the end of the input visible
fn text_value(text: &str, focused: bool, width: usize) -> Line<'static> {
    let cursor = if focused { "_" } else { "" };
    // Two columns of indent plus the cursor
    let room = width.saturating_sub(3);
    let count = text.chars().count();
    let shown = if count > room {
        let tail: String = text.chars().skip(count - room + 1).collect();
        format!("…{}", tail)
    } else {
        text.to_string()
    };
    Line::from(format!("  {}{}", shown, cursor))
}

fn category_value(category: Category, focused: bool) -> Line<'static> {
    let styled = Span::styled(
        format!("{} {}", category.icon(), category.label()),
        Style::default().fg(theme::category_color(category)),
    );
    if focused {
        Line::from(vec![Span::raw("  < "), styled, Span::raw(" >")])
    } else {
        Line::from(vec![Span::raw("  "), styled])
    }
}
