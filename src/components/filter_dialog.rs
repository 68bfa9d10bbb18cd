//! Filter picker dialog
//!
//! Modal list for the platform or violation-type criterion. The first
//! entry is always the "All" option.

use crate::action::Action;
use crate::component::Component;
use crate::components::layout::centered_popup;
use crate::model::catalog::{PLATFORMS, VIOLATION_TYPES};
use crate::model::filter::Selector;
use crate::model::modal::FilterKind;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};

pub struct FilterDialog {
    pub kind: FilterKind,
    /// Concrete options, without the leading "All" entry
    pub options: Vec<&'static str>,
    pub selected_index: usize,
    pub list_state: ListState,
    /// Selector active when the dialog was opened
    pub current: Selector,
}

impl Default for FilterDialog {
    fn default() -> Self {
        Self::new()
    }
}

impl FilterDialog {
    pub fn new() -> Self {
        Self {
            kind: FilterKind::Platform,
            options: PLATFORMS.to_vec(),
            selected_index: 0,
            list_state: ListState::default().with_selected(Some(0)),
            current: Selector::All,
        }
    }

    /// Prepare the dialog for `kind`, highlighting the active selector
    pub fn open(&mut self, kind: FilterKind, current: &Selector) {
        self.kind = kind;
        self.options = match kind {
            FilterKind::Platform => PLATFORMS.to_vec(),
            FilterKind::ViolationType => VIOLATION_TYPES.to_vec(),
        };
        self.current = current.clone();
        self.selected_index = current
            .value()
            .and_then(|v| self.options.iter().position(|o| *o == v))
            .map(|i| i + 1)
            .unwrap_or(0);
        self.list_state.select(Some(self.selected_index));
    }

    /// Selector for the highlighted entry; index 0 is "All"
    pub fn selected(&self) -> Selector {
        match self.selected_index {
            0 => Selector::All,
            i => self
                .options
                .get(i - 1)
                .map(|o| Selector::only(*o))
                .unwrap_or(Selector::All),
        }
    }

    fn select_next(&mut self) {
        if self.selected_index < self.options.len() {
            self.selected_index += 1;
            self.list_state.select(Some(self.selected_index));
        }
    }

    fn select_prev(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
            self.list_state.select(Some(self.selected_index));
        }
    }
}

impl Component for FilterDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Esc | KeyCode::Char('q') => Some(Action::CloseModal),
            KeyCode::Enter => Some(Action::SetFilter(self.kind, self.selected())),
            KeyCode::Up | KeyCode::Char('k') => {
                self.select_prev();
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.select_next();
                None
            }
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let popup_height = (self.options.len() as u16 + 9).min(area.height.saturating_sub(2));
        let popup_area = centered_popup(area, 50, popup_height);
        frame.render_widget(Clear, popup_area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(3),    // Options
                Constraint::Length(3), // Help bar
            ])
            .split(popup_area);

        let header = Paragraph::new(Line::from(Span::styled(
            format!("Current: {}", self.current.value().unwrap_or(self.kind.all_label())),
            Style::default().fg(Color::Cyan),
        )))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" Filter by {} ", self.kind.title()))
                .title_style(
                    Style::default()
                        .fg(Color::Magenta)
                        .add_modifier(Modifier::BOLD),
                ),
        );
        frame.render_widget(header, chunks[0]);

        let marker = |active: bool| {
            Span::styled(if active { "● " } else { "  " }, Style::default().fg(Color::Green))
        };
        let mut items = vec![ListItem::new(Line::from(vec![
            marker(self.current.is_all()),
            Span::styled(self.kind.all_label(), Style::default().fg(Color::DarkGray)),
        ]))];
        for option in &self.options {
            let is_current = self.current.value() == Some(*option);
            let style = if is_current {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            items.push(ListItem::new(Line::from(vec![
                marker(is_current),
                Span::styled(*option, style),
            ])));
        }

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .highlight_style(
                Style::default()
                    .bg(Color::Blue)
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("▶ ");
        frame.render_stateful_widget(list, chunks[1], &mut self.list_state);

        let help = Paragraph::new(Line::from(vec![
            Span::styled(" Enter ", Style::default().fg(Color::Yellow)),
            Span::raw("Select  "),
            Span::styled(" j/k ", Style::default().fg(Color::Cyan)),
            Span::raw("Navigate  "),
            Span::styled(" Esc ", Style::default().fg(Color::Yellow)),
            Span::raw("Cancel"),
        ]))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, chunks[2]);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn press(dialog: &mut FilterDialog, code: KeyCode) -> Option<Action> {
        dialog
            .handle_key_event(KeyEvent::new(code, KeyModifiers::NONE))
            .unwrap()
    }

    #[test]
    fn test_first_entry_is_all() {
        let mut dialog = FilterDialog::new();
        dialog.open(FilterKind::Platform, &Selector::All);
        assert_eq!(dialog.selected_index, 0);
        assert_eq!(
            press(&mut dialog, KeyCode::Enter),
            Some(Action::SetFilter(FilterKind::Platform, Selector::All))
        );
    }

    #[test]
    fn test_open_highlights_active_selector() {
        let mut dialog = FilterDialog::new();
        dialog.open(FilterKind::ViolationType, &Selector::only("No Safety Age Warning"));
        assert_eq!(dialog.selected_index, VIOLATION_TYPES.len());
        assert_eq!(dialog.selected(), Selector::only("No Safety Age Warning"));
    }

    #[test]
    fn test_navigation_stays_in_bounds() {
        let mut dialog = FilterDialog::new();
        dialog.open(FilterKind::Platform, &Selector::All);
        press(&mut dialog, KeyCode::Char('k'));
        assert_eq!(dialog.selected_index, 0);
        for _ in 0..10 {
            press(&mut dialog, KeyCode::Char('j'));
        }
        assert_eq!(dialog.selected_index, PLATFORMS.len());
        assert_eq!(
            press(&mut dialog, KeyCode::Enter),
            Some(Action::SetFilter(FilterKind::Platform, Selector::only("Nykaa")))
        );
    }
}
