//! Settings page - profile, notification and scanning preferences, integrations

use crate::action::Action;
use crate::component::Component;
use crate::components::theme::{badge, key_hint, title_style, ACCENT};
use crate::config::{Config, SettingItem};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

const SYSTEM_STATUS: [(&str, &str); 4] = [
    ("OCR Service", "Active"),
    ("API Gateway", "Active"),
    ("Database", "Warning"),
    ("Backup Service", "Active"),
];

#[derive(Default)]
pub struct SettingsComponent {
    pub selected: usize,
}

impl SettingsComponent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected_item(&self, config: &Config) -> Option<SettingItem> {
        config.setting_items().get(self.selected).copied()
    }

    pub fn next(&mut self, config: &Config) {
        let len = config.setting_items().len();
        if len > 0 {
            self.selected = (self.selected + 1) % len;
        }
    }

    pub fn previous(&mut self, config: &Config) {
        let len = config.setting_items().len();
        if len > 0 {
            self.selected = (self.selected + len - 1) % len;
        }
    }
}

impl Component for SettingsComponent {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Char('j') | KeyCode::Down => Some(Action::NextItem),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::PrevItem),
            KeyCode::Char(' ') | KeyCode::Enter => Some(Action::ToggleSetting),
            KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Right => {
                Some(Action::IncreaseThreshold)
            }
            KeyCode::Char('-') | KeyCode::Left => Some(Action::DecreaseThreshold),
            KeyCode::Char('s') => Some(Action::SaveSettings),
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, _frame: &mut Frame, _area: Rect) -> Result<()> {
        Ok(())
    }
}

pub fn draw_settings_page(frame: &mut Frame, area: Rect, comp: &SettingsComponent, config: &Config) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    render_settings_list(frame, columns[0], comp, config);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7),
            Constraint::Length(6),
            Constraint::Min(5),
        ])
        .split(columns[1]);
    render_profile(frame, right[0], config);
    render_system_status(frame, right[1]);
    render_data_management(frame, right[2]);
}

fn section_for(item: SettingItem) -> &'static str {
    match item {
        SettingItem::EmailAlerts
        | SettingItem::SmsAlerts
        | SettingItem::WebPush
        | SettingItem::WeeklyReports
        | SettingItem::CriticalOnly => "Notifications",
        SettingItem::AutoScan
        | SettingItem::ScanInterval
        | SettingItem::DeepScan
        | SettingItem::ConfidenceThreshold => "Scanning",
        SettingItem::Platform(_) => "Platform Integrations",
    }
}

fn render_settings_list(frame: &mut Frame, area: Rect, comp: &SettingsComponent, config: &Config) {
    let mut last_section = "";
    let items: Vec<ListItem> = config
        .setting_items()
        .into_iter()
        .map(|item| {
            let section = section_for(item);
            let mut lines = Vec::new();
            if section != last_section {
                lines.push(Line::from(Span::styled(
                    section.to_string(),
                    title_style(Color::Yellow),
                )));
                last_section = section;
            }

            let mut spans = vec![
                Span::raw(format!("  {:<24}", config.label(item))),
                Span::styled(config.value_label(item), title_style(Color::White)),
            ];
            if let SettingItem::Platform(i) = item {
                if let Some(p) = config.platforms.get(i) {
                    let color = if p.enabled { Color::Green } else { Color::DarkGray };
                    spans.push(Span::raw(" "));
                    spans.push(badge(p.status.clone(), color));
                    spans.push(Span::styled(
                        format!(" synced {}", p.last_sync),
                        Style::default().fg(Color::DarkGray),
                    ));
                }
            }
            lines.push(Line::from(spans));
            ListItem::new(lines)
        })
        .collect();

    let mut state = ListState::default().with_selected(Some(comp.selected));
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Preferences ")
                .title_style(title_style(ACCENT))
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .highlight_style(Style::default().bg(Color::Blue).add_modifier(Modifier::BOLD));

    frame.render_stateful_widget(list, area, &mut state);
}

fn render_profile(frame: &mut Frame, area: Rect, config: &Config) {
    let profile = &config.profile;
    let field = |label: &str, value: String| {
        Line::from(vec![
            Span::styled(format!("{:<12}", label), Style::default().fg(Color::DarkGray)),
            Span::raw(value),
        ])
    };
    let lines = vec![
        Line::from(Span::styled(profile.full_name(), title_style(Color::White))),
        field("Email", profile.email.clone()),
        field("Phone", profile.phone.clone()),
        field("Department", profile.department.clone()),
    ];
    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Profile ")
            .title_style(title_style(ACCENT))
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(paragraph, area);
}

fn render_system_status(frame: &mut Frame, area: Rect) {
    let lines: Vec<Line> = SYSTEM_STATUS
        .iter()
        .map(|(service, status)| {
            let color = if *status == "Active" { Color::Green } else { Color::Yellow };
            Line::from(vec![
                Span::styled("● ", Style::default().fg(color)),
                Span::raw(format!("{:<16}", service)),
                Span::styled(*status, Style::default().fg(color)),
            ])
        })
        .collect();
    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" System Status ")
            .title_style(title_style(ACCENT))
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(paragraph, area);
}

fn render_data_management(frame: &mut Frame, area: Rect) {
    let dim = Style::default().fg(Color::DarkGray);
    let lines = vec![
        Line::from(Span::styled("Last backup: 2 hours ago", dim)),
        Line::from(Span::styled("Storage used: 2.4 GB / 10 GB", dim)),
        Line::from(vec![
            Span::raw("Export violations from the Violations page with "),
            Span::styled("E", title_style(Color::Magenta)),
        ]),
    ];
    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Data Management ")
            .title_style(title_style(ACCENT))
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(paragraph, area);
}

pub fn help_spans() -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    spans.extend(key_hint("j/k", "Move", Color::Cyan));
    spans.extend(key_hint("Space", "Toggle", Color::Green));
    spans.extend(key_hint("+/-", "Threshold", Color::Cyan));
    spans.extend(key_hint("s", "Save", Color::Magenta));
    spans
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_cursor_wraps_over_setting_rows() {
        let config = Config::default();
        let mut comp = SettingsComponent::new();
        comp.previous(&config);
        assert_eq!(comp.selected_item(&config), Some(SettingItem::Platform(4)));
        comp.next(&config);
        assert_eq!(comp.selected_item(&config), Some(SettingItem::EmailAlerts));
    }

    #[test]
    fn test_threshold_keys() {
        let mut comp = SettingsComponent::new();
        let plus = comp
            .handle_key_event(KeyEvent::new(KeyCode::Char('+'), KeyModifiers::NONE))
            .unwrap();
        assert!(matches!(plus, Some(Action::IncreaseThreshold)));
        let minus = comp
            .handle_key_event(KeyEvent::new(KeyCode::Char('-'), KeyModifiers::NONE))
            .unwrap();
        assert!(matches!(minus, Some(Action::DecreaseThreshold)));
    }

    #[test]
    fn test_page_renders_profile_and_status() {
        let backend = TestBackend::new(120, 40);
        let mut terminal = Terminal::new(backend).unwrap();
        let comp = SettingsComponent::new();
        let config = Config::default();
        terminal
            .draw(|f| draw_settings_page(f, f.area(), &comp, &config))
            .unwrap();
        let content: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(content.contains("Rajesh Kumar"));
        assert!(content.contains("OCR Service"));
        assert!(content.contains("Amazon India"));
    }
}
