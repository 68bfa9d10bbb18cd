//! Dashboard page - overview cards, charts, heatmap and alerts

use crate::action::Action;
use crate::component::Component;
use crate::components::text::truncate;
use crate::components::theme::{
    alert_color, badge, confidence_color, severity_color, title_style, trend_span, ACCENT,
};
use crate::model::catalog::Catalog;
use crate::model::dashboard::{
    DashboardState, Severity, CATEGORY_COMPLIANCE, RECENT_ALERTS, RECENT_VIOLATIONS,
    STATE_VIOLATIONS, WEEKLY_TRENDS,
};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{
        Axis, Bar, BarChart, BarGroup, Block, Borders, Chart, Dataset, Gauge, GraphType, List,
        ListItem, ListState, Paragraph,
    },
    Frame,
};
use std::time::Instant;

/// Key handling for the dashboard; state lives in `DashboardState`
#[derive(Default)]
pub struct DashboardComponent;

impl Component for DashboardComponent {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Char('j') | KeyCode::Down => Some(Action::NextItem),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::PrevItem),
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, _frame: &mut Frame, _area: Rect) -> Result<()> {
        Ok(())
    }
}

pub fn draw_dashboard_page(
    frame: &mut Frame,
    area: Rect,
    state: &DashboardState,
    catalog: &Catalog,
    now: Instant,
) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),
            Constraint::Percentage(45),
            Constraint::Min(8),
        ])
        .split(area);

    render_overview_cards(frame, rows[0], state, now);

    let charts = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[1]);
    render_category_chart(frame, charts[0]);
    render_weekly_chart(frame, charts[1]);

    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .split(rows[2]);
    render_heatmap(frame, bottom[0], state);
    render_alerts(frame, bottom[1]);
    render_recent_violations(frame, bottom[2], catalog);
}

fn render_overview_cards(frame: &mut Frame, area: Rect, state: &DashboardState, now: Instant) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(area);

    for (i, card) in state.cards.iter().enumerate() {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", card.title))
            .title_style(Style::default().fg(Color::DarkGray))
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(columns[i]);
        frame.render_widget(block, columns[i]);

        // The compliance score (first card) also gets a gauge
        if i == 0 && inner.height >= 3 {
            let parts = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(2), Constraint::Length(1)])
                .split(inner);
            render_card_value(frame, parts[0], card.display_value(now), card.trend, card.trend_positive);
            let ratio = (card.counter.value_at(now) / 100.0).clamp(0.0, 1.0);
            let gauge = Gauge::default()
                .gauge_style(Style::default().fg(Color::Green).bg(Color::DarkGray))
                .ratio(ratio)
                .label("");
            frame.render_widget(gauge, parts[1]);
        } else {
            render_card_value(frame, inner, card.display_value(now), card.trend, card.trend_positive);
        }
    }
}

fn render_card_value(frame: &mut Frame, area: Rect, value: String, trend: f64, positive: bool) {
    let paragraph = Paragraph::new(vec![
        Line::from(Span::styled(value, title_style(Color::White))),
        Line::from(vec![
            trend_span(format!("{:.1}%", trend.abs()), trend >= 0.0, positive),
            Span::styled(" vs last month", Style::default().fg(Color::DarkGray)),
        ]),
    ]);
    frame.render_widget(paragraph, area);
}

fn render_category_chart(frame: &mut Frame, area: Rect) {
    let bars: Vec<Bar> = CATEGORY_COMPLIANCE
        .iter()
        .map(|c| {
            let rate = c.compliant * 100 / c.total().max(1);
            let label: String = c.category.chars().take(6).collect();
            Bar::default()
                .value(rate)
                .label(Line::from(label))
                .text_value(format!("{}%", rate))
                .style(Style::default().fg(if rate >= 85 { Color::Green } else { Color::Yellow }))
        })
        .collect();

    let chart = BarChart::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Compliance by Category ")
                .title_style(title_style(ACCENT))
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .data(BarGroup::default().bars(&bars))
        .bar_width(6)
        .bar_gap(2)
        .max(100);

    frame.render_widget(chart, area);
}

fn render_weekly_chart(frame: &mut Frame, area: Rect) {
    let violations: Vec<(f64, f64)> = WEEKLY_TRENDS
        .iter()
        .enumerate()
        .map(|(i, w)| (i as f64, w.violations as f64))
        .collect();
    // Scanned counts are shown per hundred so both series share one axis
    let scanned: Vec<(f64, f64)> = WEEKLY_TRENDS
        .iter()
        .enumerate()
        .map(|(i, w)| (i as f64, w.scanned as f64 / 100.0 * 5.0))
        .collect();

    let datasets = vec![
        Dataset::default()
            .name("Violations")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Red))
            .data(&violations),
        Dataset::default()
            .name("Scanned (÷20)")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Blue))
            .data(&scanned),
    ];

    let last = (WEEKLY_TRENDS.len() - 1) as f64;
    let x_labels = vec![
        Span::raw(WEEKLY_TRENDS[0].date),
        Span::raw(WEEKLY_TRENDS[WEEKLY_TRENDS.len() / 2].date),
        Span::raw(WEEKLY_TRENDS[WEEKLY_TRENDS.len() - 1].date),
    ];
    let y_labels = vec![Span::raw("0"), Span::raw("40"), Span::raw("80")];

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Weekly Violation Trends ")
                .title_style(title_style(ACCENT))
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .x_axis(
            Axis::default()
                .style(Style::default().fg(Color::DarkGray))
                .bounds([0.0, last])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .style(Style::default().fg(Color::DarkGray))
                .bounds([0.0, 80.0])
                .labels(y_labels),
        );

    frame.render_widget(chart, area);
}

fn render_heatmap(frame: &mut Frame, area: Rect, state: &DashboardState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(3)])
        .split(area);

    let items: Vec<ListItem> = STATE_VIOLATIONS
        .iter()
        .map(|s| {
            let color = severity_color(s.severity);
            ListItem::new(Line::from(vec![
                Span::styled("■ ", Style::default().fg(color)),
                Span::raw(format!("{:<14}", s.state)),
                Span::styled(format!("{:>4}", s.violations), Style::default().fg(color)),
            ]))
        })
        .collect();

    let mut list_state = ListState::default().with_selected(state.selected_state);
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" State Heatmap ")
                .title_style(title_style(ACCENT))
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));
    frame.render_stateful_widget(list, chunks[0], &mut list_state);

    let detail = match state.selected_state() {
        Some(s) => Line::from(vec![
            Span::styled(s.state, title_style(Color::White)),
            Span::raw(format!(": {} violations ", s.violations)),
            badge(s.severity.label(), severity_color(s.severity)),
        ]),
        None => {
            let legend: Vec<Span> = [Severity::Low, Severity::Medium, Severity::High, Severity::Critical]
                .iter()
                .flat_map(|sev| {
                    [
                        Span::styled("■ ", Style::default().fg(severity_color(*sev))),
                        Span::styled(
                            format!("{}  ", sev.legend()),
                            Style::default().fg(Color::DarkGray),
                        ),
                    ]
                })
                .collect();
            Line::from(legend)
        }
    };
    let detail = Paragraph::new(detail).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(detail, chunks[1]);
}

fn render_alerts(frame: &mut Frame, area: Rect) {
    let width = area.width.saturating_sub(4) as usize;
    let mut lines = Vec::new();
    for alert in RECENT_ALERTS.iter() {
        let color = alert_color(alert.level);
        lines.push(Line::from(vec![
            Span::styled("● ", Style::default().fg(color)),
            Span::raw(truncate(alert.message, width.saturating_sub(2))),
        ]));
        lines.push(Line::from(Span::styled(
            format!("  {} · {} items", alert.time, alert.count),
            Style::default().fg(Color::DarkGray),
        )));
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Recent Alerts ")
            .title_style(title_style(ACCENT))
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(paragraph, area);
}

fn render_recent_violations(frame: &mut Frame, area: Rect, catalog: &Catalog) {
    let width = area.width.saturating_sub(4) as usize;
    let mut lines = Vec::new();
    for (id, when) in RECENT_VIOLATIONS.iter() {
        let Some(product) = catalog.get(id) else {
            continue;
        };
        lines.push(Line::from(vec![
            badge(
                format!("{}%", product.confidence_score),
                confidence_color(product.confidence_level()),
            ),
            Span::raw(" "),
            Span::raw(truncate(&product.title, width.saturating_sub(7))),
        ]));
        lines.push(Line::from(Span::styled(
            format!("  {} · {} · {}", product.platform, product.violation_type, when),
            Style::default().fg(Color::DarkGray),
        )));
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Recent Violations ")
            .title_style(title_style(ACCENT))
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(paragraph, area);
}
