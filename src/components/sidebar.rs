//! Sidebar navigation

use crate::components::theme::{badge, ACCENT};
use crate::model::router::{Page, ViewRouter};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

/// Render the page list; `violation_count` feeds the Violations badge
pub fn render_sidebar(frame: &mut Frame, area: Rect, router: &ViewRouter, violation_count: usize) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(4)])
        .split(area);

    let items: Vec<ListItem> = Page::all()
        .iter()
        .enumerate()
        .map(|(i, page)| {
            let mut spans = vec![
                Span::styled(format!("{} ", i + 1), Style::default().fg(Color::DarkGray)),
                Span::styled(format!("{} ", page.icon()), Style::default().fg(Color::Yellow)),
                Span::raw(page.name()),
            ];
            if *page == Page::Violations {
                spans.push(Span::raw(" "));
                spans.push(badge(violation_count.to_string(), Color::Red));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();

    let selected = Page::all().iter().position(|p| *p == router.current);
    let mut state = ListState::default().with_selected(selected);

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Navigation ")
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .highlight_style(
            Style::default()
                .bg(Color::Blue)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    frame.render_stateful_widget(list, chunks[0], &mut state);

    let footer = Paragraph::new(vec![
        Line::from(Span::styled("Compliance Checker v2.1", Style::default().fg(ACCENT))),
        Line::from(Span::styled(
            "© 2024 Government of India",
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(footer, chunks[1]);
}
