//! Splash screen component
//!
//! Shows the shield logo briefly before the login form.

use crate::action::Action;
use crate::component::Component;
use crate::components::theme::ACCENT;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph},
    Frame,
};
use std::time::{Duration, Instant};

const LOGO: [&str; 11] = [
    "    ▄▄████████▄▄    ",
    "  ████████████████  ",
    "  ██████████████ ▀█ ",
    "  ████████████▀  ██ ",
    "  ██▀ ▀█████▀  ▄███ ",
    "  ███▄  ▀█▀  ▄█████ ",
    "  █████▄   ▄███████ ",
    "   ███████████████  ",
    "    ▀███████████▀   ",
    "      ▀███████▀     ",
    "         ▀▀         ",
];

pub struct SplashComponent {
    start_time: Option<Instant>,
    duration: Duration,
}

impl Default for SplashComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl SplashComponent {
    pub fn new() -> Self {
        Self {
            start_time: None,
            duration: Duration::from_millis(1500),
        }
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Whether the splash has been shown for its full duration at `now`
    pub fn is_complete_at(&self, now: Instant) -> bool {
        self.start_time
            .map(|t| now.saturating_duration_since(t) >= self.duration)
            .unwrap_or(false)
    }
}

impl Component for SplashComponent {
    fn init(&mut self) -> Result<()> {
        self.start_time = Some(Instant::now());
        Ok(())
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        // Any key skips the splash
        match key.code {
            KeyCode::Char('q') => Ok(Some(Action::ForceQuit)),
            _ => Ok(Some(Action::SplashComplete)),
        }
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        if action == Action::Tick && self.is_complete_at(Instant::now()) {
            return Ok(Some(Action::SplashComplete));
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let bg = Color::Rgb(0, 0, 0);

        frame.render_widget(Clear, area);
        frame.render_widget(Block::default().style(Style::default().bg(bg)), area);

        let logo_height = LOGO.len() as u16;
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(area.height.saturating_sub(logo_height + 5) / 2),
                Constraint::Length(logo_height),
                Constraint::Length(2),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .split(area);

        let logo: Vec<Line> = LOGO
            .iter()
            .map(|l| Line::from(Span::styled(*l, Style::default().fg(ACCENT).bg(bg))))
            .collect();
        frame.render_widget(Paragraph::new(logo).alignment(Alignment::Center), chunks[1]);

        let title = Line::from(vec![
            Span::styled(
                "Compliance ",
                Style::default().fg(ACCENT).bg(bg).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                "Checker",
                Style::default()
                    .fg(Color::White)
                    .bg(bg)
                    .add_modifier(Modifier::BOLD),
            ),
        ]);
        frame.render_widget(Paragraph::new(title).alignment(Alignment::Center), chunks[3]);

        let subtitle = Line::from(Span::styled(
            "E-commerce listing compliance monitoring",
            Style::default().fg(Color::DarkGray).bg(bg),
        ));
        frame.render_widget(Paragraph::new(subtitle).alignment(Alignment::Center), chunks[4]);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    #[test]
    fn test_splash_completes_after_duration() {
        let mut splash = SplashComponent::new().with_duration(Duration::from_millis(100));
        assert!(!splash.is_complete_at(Instant::now()));
        splash.init().unwrap();
        let start = Instant::now();
        assert!(splash.is_complete_at(start + Duration::from_millis(200)));
    }

    #[test]
    fn test_any_key_skips() {
        let mut splash = SplashComponent::new();
        let action = splash
            .handle_key_event(KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE))
            .unwrap();
        assert_eq!(action, Some(Action::SplashComplete));
    }
}
