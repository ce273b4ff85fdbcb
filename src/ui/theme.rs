//! Colors and styles shared by the panes

use ratatui::style::{Color, Modifier, Style};

use dayplan_core::Category;

/// Border of the pane that receives keys
pub const FOCUSED: Color = Color::Yellow;

/// Border of the other panes
pub const UNFOCUSED: Color = Color::Cyan;

pub const MUTED: Color = Color::DarkGray;

pub const GOOD: Color = Color::Green;

pub const BELOW_TARGET: Color = Color::Yellow;

pub const ERROR: Color = Color::Red;

pub fn category_color(category: Category) -> Color {
    match category {
        Category::Success => Color::Green,
        Category::Warning => Color::Yellow,
        Category::Error => Color::Red,
        Category::Info => Color::Blue,
    }
}

pub fn bold() -> Style {
    Style::default().add_modifier(Modifier::BOLD)
}

pub fn dimmed() -> Style {
    Style::default().fg(MUTED)
}

pub fn border(focused: bool) -> Style {
    Style::default().fg(if focused { FOCUSED } else { UNFOCUSED })
}
