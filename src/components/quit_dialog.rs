//! Quit confirmation dialog component

use crate::action::Action;
use crate::component::Component;
use crate::components::layout::centered_popup;
use crate::components::theme::title_style;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Asks before leaving the dashboard; `o` logs out instead
#[derive(Default)]
pub struct QuitDialog;

impl Component for QuitDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => Some(Action::ConfirmModal),
            KeyCode::Char('o') | KeyCode::Char('O') => Some(Action::Logout),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc | KeyCode::Char('q') => {
                Some(Action::CloseModal)
            }
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let popup_area = centered_popup(area, 46, 7);

        frame.render_widget(Clear, popup_area);

        let content = vec![
            Line::from(""),
            Line::from(Span::styled(
                "Leave the compliance dashboard?",
                title_style(Color::White),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled(" y ", title_style(Color::Green)),
                Span::raw("Quit  "),
                Span::styled(" o ", title_style(Color::Cyan)),
                Span::raw("Log out  "),
                Span::styled(" n/Esc ", title_style(Color::Red)),
                Span::raw("Cancel"),
            ]),
        ];

        let paragraph = Paragraph::new(content)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Yellow))
                    .title(" Quit? ")
                    .title_style(title_style(Color::Yellow)),
            )
            .alignment(Alignment::Center);

        frame.render_widget(paragraph, popup_area);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn press(code: KeyCode) -> Option<Action> {
        QuitDialog
            .handle_key_event(KeyEvent::new(code, KeyModifiers::NONE))
            .unwrap()
    }

    #[test]
    fn test_quit_dialog_keys() {
        assert_eq!(press(KeyCode::Char('y')), Some(Action::ConfirmModal));
        assert_eq!(press(KeyCode::Char('o')), Some(Action::Logout));
        assert_eq!(press(KeyCode::Esc), Some(Action::CloseModal));
        assert_eq!(press(KeyCode::Char('x')), None);
    }
}
