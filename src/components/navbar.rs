//! Top bar: product name, active page and signed-in officer

use crate::components::theme::{badge, title_style, ACCENT};
use crate::model::dashboard::RECENT_ALERTS;
use crate::model::router::Page;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render_navbar(frame: &mut Frame, area: Rect, page: Page, officer: Option<&str>) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(inner);

    let left = Paragraph::new(vec![
        Line::from(vec![
            Span::styled("Compliance Checker", title_style(ACCENT)),
            Span::styled("  Monitoring Dashboard", Style::default().fg(Color::DarkGray)),
        ]),
        Line::from(vec![
            Span::styled(format!("{} ", page.icon()), Style::default().fg(Color::Yellow)),
            Span::styled(page.name(), title_style(Color::White)),
        ]),
    ]);
    frame.render_widget(left, columns[0]);

    let right = Paragraph::new(vec![
        Line::from(vec![
            Span::styled(
                officer.unwrap_or("Regulatory Officer").to_string(),
                title_style(Color::White),
            ),
            Span::raw(" "),
            badge(format!("{} alerts", RECENT_ALERTS.len()), Color::Red),
        ]),
        Line::from(Span::styled(
            "Ministry of Commerce",
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .alignment(Alignment::Right);
    frame.render_widget(right, columns[1]);
}
