//! Help dialog component
//!
//! Displays all keyboard shortcuts available in the application.

use crate::action::Action;
use crate::component::Component;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

/// Help dialog showing all keyboard shortcuts
#[derive(Default)]
pub struct HelpDialog;

impl Component for HelpDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') => Some(Action::CloseModal),
            KeyCode::Char('j') | KeyCode::Down => Some(Action::ScrollDown),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::ScrollUp),
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, _frame: &mut Frame, _area: Rect) -> Result<()> {
        Ok(())
    }
}

/// Render the dialog; `scroll_offset` lives on the modal entry
pub fn draw_help_dialog(frame: &mut Frame, area: Rect, scroll_offset: &mut usize) {
    let margin = 4;
    let dialog_area = Rect::new(
        area.x + margin,
        area.y + margin,
        area.width.saturating_sub(margin * 2),
        area.height.saturating_sub(margin * 2),
    );
    frame.render_widget(Clear, dialog_area);

    let content = build_help_content();
    let total = content.len();
    let visible_height = dialog_area.height.saturating_sub(2) as usize;

    // Clamp scroll offset
    let max_scroll = total.saturating_sub(visible_height);
    if *scroll_offset > max_scroll {
        *scroll_offset = max_scroll;
    }

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Keyboard Shortcuts ")
                .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .scroll((*scroll_offset as u16, 0));

    frame.render_widget(paragraph, dialog_area);

    if total > visible_height {
        let mut scrollbar_state = ScrollbarState::new(max_scroll).position(*scroll_offset);

        frame.render_stateful_widget(
            Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .begin_symbol(Some("↑"))
                .end_symbol(Some("↓")),
            dialog_area.inner(Margin {
                vertical: 1,
                horizontal: 0,
            }),
            &mut scrollbar_state,
        );
    }
}

fn build_help_content() -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    let add_section = |lines: &mut Vec<Line<'static>>, title: &str| {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("  {} ", title),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            format!("  {}", "─".repeat(title.len() + 2)),
            Style::default().fg(Color::DarkGray),
        )));
    };

    let add_shortcut = |lines: &mut Vec<Line<'static>>, key: &str, description: &str| {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {:12}", key),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::styled(description.to_string(), Style::default().fg(Color::White)),
        ]));
    };

    add_section(&mut lines, "Pages");
    add_shortcut(&mut lines, "1-5", "Dashboard / Violations / Reports / Trends / Settings");
    add_shortcut(&mut lines, "Tab", "Next page");
    add_shortcut(&mut lines, "Shift+Tab", "Previous page");
    add_shortcut(&mut lines, "b", "Toggle sidebar");

    add_section(&mut lines, "Lists");
    add_shortcut(&mut lines, "j / ↓", "Move to next item");
    add_shortcut(&mut lines, "k / ↑", "Move to previous item");
    add_shortcut(&mut lines, "g / G", "Jump to first / last violation");

    add_section(&mut lines, "Violations");
    add_shortcut(&mut lines, "/", "Search by product, seller or violation");
    add_shortcut(&mut lines, "p", "Filter by platform");
    add_shortcut(&mut lines, "v", "Filter by violation type");
    add_shortcut(&mut lines, "x", "Clear all filters");
    add_shortcut(&mut lines, "Enter", "Open product details");
    add_shortcut(&mut lines, "E", "Export filtered violations to CSV");

    add_section(&mut lines, "Reports");
    add_shortcut(&mut lines, "p / f / t", "Cycle period / platform / category");
    add_shortcut(&mut lines, "c / Enter", "Generate CSV report");
    add_shortcut(&mut lines, "J", "Generate JSON report");

    add_section(&mut lines, "Trends");
    add_shortcut(&mut lines, "t", "Cycle timeframe");

    add_section(&mut lines, "Settings");
    add_shortcut(&mut lines, "Space", "Toggle setting / cycle interval");
    add_shortcut(&mut lines, "+ / -", "Adjust confidence threshold");
    add_shortcut(&mut lines, "s", "Save settings");

    add_section(&mut lines, "Session");
    add_shortcut(&mut lines, "O", "Log out");
    add_shortcut(&mut lines, "?", "Show this help");
    add_shortcut(&mut lines, "q", "Quit / Close dialog");
    add_shortcut(&mut lines, "Ctrl+c", "Quit immediately");

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  Press q, Esc, or ? to close",
        Style::default().fg(Color::DarkGray),
    )));

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_help_lists_page_shortcuts() {
        let text: Vec<String> = build_help_content().iter().map(|l| l.to_string()).collect();
        assert!(text.iter().any(|l| l.contains("Filter by platform")));
        assert!(text.iter().any(|l| l.contains("Log out")));
    }

    #[test]
    fn test_scroll_is_clamped_to_content() {
        let backend = TestBackend::new(80, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut offset = usize::MAX;
        terminal
            .draw(|f| draw_help_dialog(f, f.area(), &mut offset))
            .unwrap();
        let visible = 20 - 8 - 2;
        assert_eq!(offset, build_help_content().len() - visible);
    }

    #[test]
    fn test_question_mark_closes() {
        let mut dialog = HelpDialog;
        let action = dialog
            .handle_key_event(KeyEvent::new(KeyCode::Char('?'), KeyModifiers::NONE))
            .unwrap();
        assert_eq!(action, Some(Action::CloseModal));
    }
}
