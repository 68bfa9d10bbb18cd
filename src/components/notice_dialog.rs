//! Confirmation shown after a report or export is written

use crate::action::Action;
use crate::component::Component;
use crate::components::layout::centered_popup;
use crate::components::text::truncate;
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
use std::path::Path;

#[derive(Default)]
pub struct NoticeDialog;

impl Component for NoticeDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') | KeyCode::Char(' ') => {
                Some(Action::CloseModal)
            }
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, _frame: &mut Frame, _area: Rect) -> Result<()> {
        Ok(())
    }
}

pub fn draw_report_written(frame: &mut Frame, area: Rect, path: &Path) {
    let width = 70u16.min(area.width.saturating_sub(4));
    let popup_area = centered_popup(area, width, 8);
    frame.render_widget(Clear, popup_area);

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let shown_path = truncate(&path.display().to_string(), width.saturating_sub(4) as usize);

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(file_name, title_style(Color::White))),
        Line::from(Span::styled(shown_path, Style::default().fg(Color::DarkGray))),
        Line::from(""),
        Line::from(vec![
            Span::styled(" Enter/Esc ", title_style(Color::Yellow)),
            Span::raw("Close"),
        ]),
    ];

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Green))
                .title(" Report Generated ")
                .title_style(title_style(Color::Green)),
        )
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, popup_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};
    use std::path::PathBuf;

    #[test]
    fn test_notice_shows_file_name() {
        let backend = TestBackend::new(80, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        let path = PathBuf::from("/tmp/reports/compliance-summary-20240101-120000.csv");
        terminal
            .draw(|f| draw_report_written(f, f.area(), &path))
            .unwrap();
        let content: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(content.contains("compliance-summary-20240101-120000.csv"));
        assert!(content.contains("Report Generated"));
    }
}
