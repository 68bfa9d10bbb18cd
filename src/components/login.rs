//! Officer login screen

use crate::action::Action;
use crate::component::Component;
use crate::components::layout::centered_popup;
use crate::components::theme::{key_hint, title_style, ACCENT};
use crate::model::ui::{LoginField, LoginForm};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

#[derive(Default)]
pub struct LoginComponent {
    pub form: LoginForm,
}

impl LoginComponent {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Component for LoginComponent {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Esc => Some(Action::ForceQuit),
            KeyCode::Enter => Some(Action::LoginSubmit),
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
                self.form.toggle_focus();
                None
            }
            KeyCode::Backspace => {
                self.form.backspace();
                None
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.form.input(c);
                None
            }
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        frame.render_widget(Clear, area);
        let popup = centered_popup(area, 52, 15);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Officer Login ")
            .title_style(title_style(ACCENT))
            .border_style(Style::default().fg(ACCENT));
        let inner = block.inner(popup);
        frame.render_widget(block, popup);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // Heading
                Constraint::Length(3), // Officer ID
                Constraint::Length(3), // Password
                Constraint::Length(2), // Error
                Constraint::Min(1),    // Hints
            ])
            .split(inner);

        let heading = Paragraph::new(vec![
            Line::from(Span::styled("Compliance Checker", title_style(Color::White))),
            Line::from(Span::styled(
                "Ministry of Commerce",
                Style::default().fg(Color::DarkGray),
            )),
        ])
        .alignment(Alignment::Center);
        frame.render_widget(heading, rows[0]);

        let masked = "•".repeat(self.form.password.chars().count());
        render_field(
            frame,
            rows[1],
            "Officer ID",
            &self.form.officer_id,
            self.form.focus == LoginField::OfficerId,
        );
        render_field(
            frame,
            rows[2],
            "Password",
            &masked,
            self.form.focus == LoginField::Password,
        );

        if let Some(error) = &self.form.error {
            let error = Paragraph::new(Line::from(Span::styled(
                error.clone(),
                Style::default().fg(Color::Red),
            )))
            .alignment(Alignment::Center);
            frame.render_widget(error, rows[3]);
        }

        let mut hints = Vec::new();
        hints.extend(key_hint("Tab", "Switch field", Color::Cyan));
        hints.extend(key_hint("Enter", "Sign in", Color::Green));
        hints.extend(key_hint("Esc", "Quit", Color::Red));
        frame.render_widget(
            Paragraph::new(Line::from(hints)).alignment(Alignment::Center),
            rows[4],
        );

        Ok(())
    }
}

fn render_field(frame: &mut Frame, area: Rect, label: &str, value: &str, focused: bool) {
    let border = if focused { Color::Yellow } else { Color::DarkGray };
    let cursor = if focused { "█" } else { "" };
    let field = Paragraph::new(Line::from(vec![
        Span::raw(value.to_string()),
        Span::styled(cursor, Style::default().fg(Color::Yellow)),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", label))
            .border_style(Style::default().fg(border)),
    );
    frame.render_widget(field, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn press(comp: &mut LoginComponent, code: KeyCode) -> Option<Action> {
        comp.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE))
            .unwrap()
    }

    #[test]
    fn test_typing_fills_focused_field() {
        let mut comp = LoginComponent::new();
        press(&mut comp, KeyCode::Char('a'));
        press(&mut comp, KeyCode::Tab);
        press(&mut comp, KeyCode::Char('b'));
        press(&mut comp, KeyCode::Char('c'));
        press(&mut comp, KeyCode::Backspace);
        assert_eq!(comp.form.officer_id, "a");
        assert_eq!(comp.form.password, "b");
        assert_eq!(press(&mut comp, KeyCode::Enter), Some(Action::LoginSubmit));
    }

    #[test]
    fn test_password_is_masked() {
        let mut comp = LoginComponent::new();
        comp.form.officer_id = "OFF-1".to_string();
        comp.form.password = "hunter2".to_string();
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| comp.draw(f, f.area()).unwrap()).unwrap();
        let content: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(content.contains("OFF-1"));
        assert!(!content.contains("hunter2"));
        assert!(content.contains("•••••••"));
    }
}
