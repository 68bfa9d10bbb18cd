//! Shared colors and small styled fragments

use crate::model::dashboard::{AlertLevel, Severity};
use crate::model::product::ConfidenceLevel;
use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
};

pub const ORANGE: Color = Color::Rgb(255, 140, 0);
pub const ACCENT: Color = Color::Cyan;

pub fn confidence_color(level: ConfidenceLevel) -> Color {
    match level {
        ConfidenceLevel::Critical => Color::Red,
        ConfidenceLevel::High => ORANGE,
        ConfidenceLevel::Moderate => Color::Yellow,
    }
}

pub fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Low => Color::Green,
        Severity::Medium => Color::Yellow,
        Severity::High => ORANGE,
        Severity::Critical => Color::Red,
    }
}

pub fn alert_color(level: AlertLevel) -> Color {
    match level {
        AlertLevel::Critical => Color::Red,
        AlertLevel::Warning => Color::Yellow,
        AlertLevel::Info => Color::Blue,
    }
}

/// Inverted badge such as ` 95% ` or ` CRITICAL `
pub fn badge(text: impl Into<String>, color: Color) -> Span<'static> {
    Span::styled(
        format!(" {} ", text.into()),
        Style::default()
            .fg(Color::Black)
            .bg(color)
            .add_modifier(Modifier::BOLD),
    )
}

/// Arrow plus delta, green when the movement is good news
pub fn trend_span(text: impl Into<String>, up: bool, good: bool) -> Span<'static> {
    let arrow = if up { "↑" } else { "↓" };
    let color = if good { Color::Green } else { Color::Red };
    Span::styled(format!("{} {}", arrow, text.into()), Style::default().fg(color))
}

/// Key hint for help bars: ` key ` followed by a label
pub fn key_hint(key: &str, label: &str, color: Color) -> [Span<'static>; 2] {
    [
        Span::styled(
            format!(" {} ", key),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!("{} ", label)),
    ]
}

pub fn title_style(color: Color) -> Style {
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}
