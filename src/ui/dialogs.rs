//! Confirmation and help popups

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use super::{centered_rect, theme};

pub fn draw_confirm_dialog(frame: &mut Frame, title: &str, message: &str) {
    let area = centered_rect(40, 25, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::ERROR));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([Constraint::Length(2), Constraint::Length(2)])
        .split(inner);

    let msg = Paragraph::new(message)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    frame.render_widget(msg, chunks[0]);

    let hint = Paragraph::new("Y to confirm, N/Esc to cancel")
        .style(theme::dimmed())
        .alignment(Alignment::Center);

    frame.render_widget(hint, chunks[1]);
}

fn section(title: &'static str) -> Line<'static> {
    Line::from(Span::styled(title, theme::bold()))
}

pub fn draw_help_dialog(frame: &mut Frame) {
    let area = centered_rect(65, 80, frame.area());

    frame.render_widget(Clear, area);

    let help_text = vec![
        section("Calendar"),
        Line::from("  ←/→ or h/l      Previous/next day"),
        Line::from("  ↑/↓ or k/j      Previous/next week"),
        Line::from("  PgUp/PgDn </>   Previous/next month"),
        Line::from("  t               Jump to today"),
        Line::from(""),
        section("Tasks"),
        Line::from("  ↑/↓ or j/k      Move selection"),
        Line::from("  Space/Enter     Toggle completion"),
        Line::from("  a               Add task on the selected day"),
        Line::from("  e               Edit selected task"),
        Line::from("  d/Delete        Delete selected task"),
        Line::from(""),
        section("Form"),
        Line::from("  Tab/Shift-Tab   Next/previous field"),
        Line::from("  ←/→             Change category"),
        Line::from("  Enter / Esc     Submit / cancel"),
        Line::from(""),
        section("Analytics"),
        Line::from("  f/F             Next/previous category filter"),
        Line::from("  r               Show all categories"),
        Line::from(""),
        section("General"),
        Line::from("  Tab             Switch pane"),
        Line::from("  ?               Toggle this help"),
        Line::from("  q/Esc/Ctrl-C    Quit"),
        Line::from(""),
        Line::from(Span::styled("Press Esc to close", theme::dimmed())),
    ];

    let paragraph = Paragraph::new(help_text)
        .block(
            Block::default()
                .title(" Help ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme::UNFOCUSED)),
        )
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}
