//! Reports page - report configuration, report cards and summary figures

use crate::action::Action;
use crate::component::Component;
use crate::components::theme::{key_hint, title_style, ACCENT};
use crate::model::dashboard::OverviewStats;
use crate::model::reports::{ReportFormat, ReportKind, ReportsState};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

#[derive(Default)]
pub struct ReportsComponent {
    pub state: ReportsState,
}

impl ReportsComponent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected_kind(&self) -> ReportKind {
        self.state.selected_kind()
    }
}

impl Component for ReportsComponent {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Char('j') | KeyCode::Down => Some(Action::NextItem),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::PrevItem),
            KeyCode::Char('p') => Some(Action::CycleReportPeriod),
            KeyCode::Char('f') => Some(Action::CycleReportPlatform),
            KeyCode::Char('t') => Some(Action::CycleReportCategory),
            KeyCode::Char('c') | KeyCode::Enter => Some(Action::GenerateReport(ReportFormat::Csv)),
            KeyCode::Char('J') => Some(Action::GenerateReport(ReportFormat::Json)),
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, _frame: &mut Frame, _area: Rect) -> Result<()> {
        Ok(())
    }
}

pub fn draw_reports_page(frame: &mut Frame, area: Rect, comp: &ReportsComponent, stats: &OverviewStats) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),
            Constraint::Min(6),
            Constraint::Length(4),
        ])
        .split(area);

    render_config(frame, rows[0], &comp.state);
    render_report_list(frame, rows[1], &comp.state);
    render_summary(frame, rows[2], &comp.state, stats);
}

fn render_config(frame: &mut Frame, area: Rect, state: &ReportsState) {
    let config = &state.config;
    let value = |s: String| Span::styled(s, title_style(Color::White));
    let lines = vec![
        Line::from(vec![
            Span::styled("Time Period  ", Style::default().fg(Color::DarkGray)),
            value(config.period.label().to_string()),
            Span::styled("  (p)", Style::default().fg(Color::DarkGray)),
        ]),
        Line::from(vec![
            Span::styled("Platform     ", Style::default().fg(Color::DarkGray)),
            value(config.platform.value().unwrap_or("All Platforms").to_string()),
            Span::styled("  (f)", Style::default().fg(Color::DarkGray)),
        ]),
        Line::from(vec![
            Span::styled("Category     ", Style::default().fg(Color::DarkGray)),
            value(config.category.value().unwrap_or("All Categories").to_string()),
            Span::styled("  (t)", Style::default().fg(Color::DarkGray)),
        ]),
    ];

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Report Configuration ")
            .title_style(title_style(ACCENT))
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(paragraph, area);
}

fn render_report_list(frame: &mut Frame, area: Rect, state: &ReportsState) {
    let items: Vec<ListItem> = ReportKind::all()
        .iter()
        .map(|kind| {
            ListItem::new(vec![
                Line::from(Span::styled(kind.title(), title_style(Color::White))),
                Line::from(Span::raw(format!("  {}", kind.description()))),
                Line::from(Span::styled(
                    format!("  Last generated: {} · {}", kind.last_generated(), kind.size()),
                    Style::default().fg(Color::DarkGray),
                )),
            ])
        })
        .collect();

    let mut list_state = ListState::default().with_selected(Some(state.selected));
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Available Reports ")
                .title_style(title_style(ACCENT))
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .highlight_style(
            Style::default()
                .bg(Color::Blue)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    frame.render_stateful_widget(list, area, &mut list_state);
}

fn render_summary(frame: &mut Frame, area: Rect, state: &ReportsState, stats: &OverviewStats) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Report Summary Statistics ")
        .title_style(title_style(ACCENT))
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let figures = [
        (format!("{}", stats.violations_found), "Total Violations", Color::Blue),
        (format!("{}", stats.products_scanned), "Products Scanned", Color::Green),
        (format!("{:.1}%", stats.compliance_score), "Compliance Score", Color::Yellow),
        (state.reports_generated.to_string(), "Reports Generated", Color::Magenta),
    ];

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(inner);

    for (i, (value, label, color)) in figures.into_iter().enumerate() {
        let paragraph = Paragraph::new(vec![
            Line::from(Span::styled(value, title_style(color))),
            Line::from(Span::styled(label, Style::default().fg(Color::DarkGray))),
        ])
        .alignment(Alignment::Center);
        frame.render_widget(paragraph, columns[i]);
    }
}

pub fn help_spans() -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    spans.extend(key_hint("j/k", "Move", Color::Cyan));
    spans.extend(key_hint("p/f/t", "Period/Platform/Category", Color::Cyan));
    spans.extend(key_hint("c", "CSV", Color::Green));
    spans.extend(key_hint("J", "JSON", Color::Green));
    spans
}
