//! Product detail overlay
//!
//! Shows the full record of the selected violation. The scroll offset lives
//! on the modal stack entry so the overlay itself is stateless.

use crate::action::Action;
use crate::component::Component;
use crate::components::layout::centered_popup_percent;
use crate::components::text::wrapped_height;
use crate::components::theme::{badge, confidence_color, title_style, ACCENT};
use crate::model::product::Product;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Margin, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{
        Block, Borders, Clear, Gauge, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState,
        Wrap,
    },
    Frame,
};

const ASSESSMENT: &str = "This product has been flagged for non-compliance with regulatory \
requirements. The missing fields identified above are mandatory for this product category. \
Immediate action is required to ensure compliance.";

#[derive(Default)]
pub struct ProductDetailDialog;

impl Component for ProductDetailDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Enter => Some(Action::CloseModal),
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

fn section(title: &str) -> Line<'static> {
    Line::from(Span::styled(title.to_string(), title_style(Color::Yellow)))
}

fn build_detail_content(product: &Product) -> Vec<Line<'static>> {
    let dim = Style::default().fg(Color::DarkGray);
    let mut lines = vec![
        Line::from(vec![
            Span::styled("Platform:       ", dim),
            Span::raw(product.platform.clone()),
        ]),
        Line::from(vec![
            Span::styled("Seller:         ", dim),
            Span::raw(product.seller.clone()),
        ]),
        Line::from(vec![
            Span::styled("Violation Type: ", dim),
            badge(product.violation_type.clone(), Color::Red),
        ]),
        Line::from(vec![
            Span::styled("Category:       ", dim),
            Span::raw(product.category()),
        ]),
        Line::from(vec![
            Span::styled("Image:          ", dim),
            Span::styled(product.image.clone(), Style::default().fg(Color::Blue)),
        ]),
        Line::from(""),
        section("Extracted Text (OCR)"),
    ];

    for text_line in product.extracted_text.lines() {
        lines.push(Line::from(Span::styled(
            format!("  {}", text_line),
            Style::default().fg(Color::White),
        )));
    }

    lines.push(Line::from(""));
    lines.push(section("Missing Required Fields"));
    if product.missing_fields.is_empty() {
        lines.push(Line::from(Span::styled("  None", dim)));
    }
    for field in &product.missing_fields {
        lines.push(Line::from(vec![
            Span::styled("  ✗ ", Style::default().fg(Color::Red)),
            Span::raw(field.clone()),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(section("Compliance Assessment"));
    lines.push(Line::from(Span::raw(ASSESSMENT)));
    lines
}

/// Render the overlay; `scroll_offset` is clamped to the content height
pub fn draw_product_detail(frame: &mut Frame, area: Rect, product: &Product, scroll_offset: &mut usize) {
    let popup = centered_popup_percent(area, 80, 80);
    frame.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", product.title))
        .title_style(title_style(ACCENT))
        .border_style(Style::default().fg(ACCENT))
        .title_bottom(Line::from(vec![
            Span::styled(" j/k ", title_style(Color::Cyan)),
            Span::raw("Scroll "),
            Span::styled(" Esc ", title_style(Color::Yellow)),
            Span::raw("Close "),
        ]));
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(1)])
        .split(inner);

    let color = confidence_color(product.confidence_level());
    let gauge = Gauge::default()
        .block(Block::default().title(Span::styled("Confidence Score", title_style(Color::White))))
        .gauge_style(Style::default().fg(color).bg(Color::DarkGray))
        .percent(u16::from(product.confidence_score.min(100)))
        .label(format!("{}%", product.confidence_score));
    frame.render_widget(gauge, chunks[0]);

    let content = build_detail_content(product);
    let body = chunks[1];
    let width = body.width.max(1) as usize;
    let total: usize = content
        .iter()
        .map(|l| wrapped_height(&l.to_string(), width))
        .sum();
    let visible_height = body.height as usize;

    let max_scroll = total.saturating_sub(visible_height);
    if *scroll_offset > max_scroll {
        *scroll_offset = max_scroll;
    }

    let paragraph = Paragraph::new(content)
        .wrap(Wrap { trim: false })
        .scroll((*scroll_offset as u16, 0));
    frame.render_widget(paragraph, body);

    if total > visible_height {
        let mut scrollbar_state = ScrollbarState::new(max_scroll).position(*scroll_offset);
        frame.render_stateful_widget(
            Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .begin_symbol(Some("↑"))
                .end_symbol(Some("↓")),
            popup.inner(Margin {
                vertical: 1,
                horizontal: 0,
            }),
            &mut scrollbar_state,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::catalog::Catalog;
    use crossterm::event::KeyModifiers;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_content_lists_missing_fields() {
        let catalog = Catalog::seeded();
        let content = build_detail_content(&catalog.products()[0]);
        let text: Vec<String> = content.iter().map(|l| l.to_string()).collect();
        assert!(text.iter().any(|l| l.contains("BIS Registration Number")));
        assert!(text.iter().any(|l| l.contains("Warranty Terms")));
        assert!(text.iter().any(|l| l.contains("TechWorld Store")));
    }

    #[test]
    fn test_scroll_offset_is_clamped() {
        let catalog = Catalog::seeded();
        let backend = TestBackend::new(100, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut offset = 500;
        terminal
            .draw(|f| draw_product_detail(f, f.area(), &catalog.products()[0], &mut offset))
            .unwrap();
        assert!(offset < 500);
    }

    #[test]
    fn test_max_scroll_reaches_assessment_on_narrow_terminals() {
        let catalog = Catalog::seeded();
        for (w, h) in [(40, 20), (50, 22), (60, 24), (100, 30)] {
            let mut terminal = Terminal::new(TestBackend::new(w, h)).unwrap();
            let mut offset = 10_000;
            terminal
                .draw(|f| draw_product_detail(f, f.area(), &catalog.products()[0], &mut offset))
                .unwrap();
            let content: String = terminal
                .backend()
                .buffer()
                .content()
                .iter()
                .map(|c| c.symbol())
                .collect();
            assert!(
                content.contains("compliance."),
                "assessment end hidden at {}x{} (offset {})",
                w,
                h,
                offset
            );
        }
    }

    #[test]
    fn test_keys() {
        let mut dialog = ProductDetailDialog;
        let esc = dialog
            .handle_key_event(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE))
            .unwrap();
        assert!(matches!(esc, Some(Action::CloseModal)));
        let down = dialog
            .handle_key_event(KeyEvent::new(KeyCode::Char('j'), KeyModifiers::NONE))
            .unwrap();
        assert!(matches!(down, Some(Action::ScrollDown)));
    }
}
