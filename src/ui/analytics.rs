//! Analytics pane: summary numbers, filter and two bar charts

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph},
};

use dayplan_core::TaskStats;

use super::theme;
use crate::app::{App, Focus};

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Analytics ")
        .borders(Borders::ALL)
        .border_style(theme::border(app.focus == Focus::Analytics));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6), // Filter + summary
            Constraint::Min(6),    // By category
            Constraint::Min(6),    // Completion status
        ])
        .split(inner);

    let stats = app.stats();
    draw_summary(frame, chunks[0], app, &stats);
    draw_category_chart(frame, chunks[1], &stats);
    draw_status_chart(frame, chunks[2], &stats);
}

fn draw_summary(frame: &mut Frame, area: Rect, app: &App, stats: &TaskStats) {
    let rate = stats.completion_rate();
    let rate_color = if rate >= app.settings.completion_threshold {
        theme::GOOD
    } else {
        theme::BELOW_TARGET
    };

    let lines = vec![
        Line::from(vec![
            Span::raw(" Filter: "),
            Span::styled(app.store.filter_category().label(), theme::bold()),
            Span::styled("  (f/F cycle, r reset)", theme::dimmed()),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::raw(" Total: "),
            Span::styled(stats.total().to_string(), theme::bold()),
            Span::raw("   Completed: "),
            Span::styled(stats.completed.to_string(), Style::default().fg(theme::GOOD)),
            Span::raw("   Pending: "),
            Span::styled(stats.pending.to_string(), Style::default().fg(theme::BELOW_TARGET)),
        ]),
        Line::from(vec![
            Span::raw(" Completion Rate: "),
            Span::styled(format!("{}%", rate), theme::bold().fg(rate_color)),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines), area);
}

fn draw_category_chart(frame: &mut Frame, area: Rect, stats: &TaskStats) {
    let bars: Vec<Bar> = stats
        .category_counts()
        .iter()
        .map(|(category, count)| {
            Bar::default()
                .value(*count as u64)
                .label(Line::from(category.label()))
                .text_value(count.to_string())
                .style(Style::default().fg(theme::category_color(*category)))
        })
        .collect();

    let chart = BarChart::default()
        .block(
            Block::default()
                .title(" Tasks by Category ")
                .borders(Borders::TOP)
                .border_style(theme::dimmed()),
        )
        .data(BarGroup::default().bars(&bars))
        .bar_width(7)
        .bar_gap(2);

    frame.render_widget(chart, area);
}

fn draw_status_chart(frame: &mut Frame, area: Rect, stats: &TaskStats) {
    let bars = [
        Bar::default()
            .value(stats.completed as u64)
            .label(Line::from("Completed"))
            .text_value(format!("{} ({}%)", stats.completed, stats.completion_rate()))
            .style(Style::default().fg(theme::GOOD)),
        Bar::default()
            .value(stats.pending as u64)
            .label(Line::from("Pending"))
            .text_value(format!("{} ({}%)", stats.pending, stats.pending_rate()))
            .style(Style::default().fg(theme::BELOW_TARGET)),
    ];

    let chart = BarChart::default()
        .block(
            Block::default()
                .title(" Completion Status ")
                .borders(Borders::TOP)
                .border_style(theme::dimmed()),
        )
        .data(BarGroup::default().bars(&bars))
        .bar_width(11)
        .bar_gap(3);

    frame.render_widget(chart, area);
}
