//! Violations page - filterable table of flagged listings
//!
//! Owns the filter criteria and the table cursor. The visible rows are
//! recomputed from the catalog whenever they are needed, and the cursor
//! returns to the first row on every criteria change.

use crate::action::Action;
use crate::component::Component;
use crate::components::text::truncate;
use crate::components::theme::{badge, confidence_color, key_hint, title_style, ACCENT};
use crate::model::catalog::Catalog;
use crate::model::filter::{FilterCriteria, Selector};
use crate::model::modal::FilterKind;
use crate::model::product::Product;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

pub struct ViolationsComponent {
    pub criteria: FilterCriteria,
    pub table_state: TableState,
    pub search_mode: bool,
}

impl Default for ViolationsComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl ViolationsComponent {
    pub fn new() -> Self {
        Self {
            criteria: FilterCriteria::default(),
            table_state: TableState::default().with_selected(Some(0)),
            search_mode: false,
        }
    }

    pub fn visible<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Product> {
        self.criteria.apply(catalog.products())
    }

    /// The product under the cursor, if any row is visible
    pub fn selected_product<'a>(&self, catalog: &'a Catalog) -> Option<&'a Product> {
        let index = self.table_state.selected()?;
        self.visible(catalog).get(index).copied()
    }

    pub fn selector(&self, kind: FilterKind) -> &Selector {
        match kind {
            FilterKind::Platform => &self.criteria.platform,
            FilterKind::ViolationType => &self.criteria.violation_type,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────────────────────

    pub fn next(&mut self, catalog: &Catalog) {
        let len = self.visible(catalog).len();
        if len == 0 {
            return;
        }
        let next = match self.table_state.selected() {
            Some(i) if i + 1 < len => i + 1,
            _ => 0,
        };
        self.table_state.select(Some(next));
    }

    pub fn previous(&mut self, catalog: &Catalog) {
        let len = self.visible(catalog).len();
        if len == 0 {
            return;
        }
        let prev = match self.table_state.selected() {
            Some(i) if i > 0 && i < len => i - 1,
            _ => len - 1,
        };
        self.table_state.select(Some(prev));
    }

    pub fn select_first(&mut self, catalog: &Catalog) {
        if self.visible(catalog).is_empty() {
            self.table_state.select(None);
        } else {
            self.table_state.select(Some(0));
        }
    }

    pub fn select_last(&mut self, catalog: &Catalog) {
        let len = self.visible(catalog).len();
        self.table_state.select(len.checked_sub(1));
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Filter criteria
    // ─────────────────────────────────────────────────────────────────────────

    pub fn enter_search_mode(&mut self) {
        self.search_mode = true;
    }

    pub fn exit_search_mode(&mut self) {
        self.search_mode = false;
    }

    pub fn search_input(&mut self, c: char, catalog: &Catalog) {
        self.criteria.query.push(c);
        self.select_first(catalog);
    }

    pub fn search_backspace(&mut self, catalog: &Catalog) {
        self.criteria.query.pop();
        self.select_first(catalog);
    }

    pub fn set_filter(&mut self, kind: FilterKind, selector: Selector, catalog: &Catalog) {
        match kind {
            FilterKind::Platform => self.criteria.platform = selector,
            FilterKind::ViolationType => self.criteria.violation_type = selector,
        }
        self.select_first(catalog);
    }

    pub fn clear_filters(&mut self, catalog: &Catalog) {
        self.criteria.clear();
        self.select_first(catalog);
    }
}

impl Component for ViolationsComponent {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Char('j') | KeyCode::Down => Some(Action::NextItem),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::PrevItem),
            KeyCode::Char('g') | KeyCode::Home => Some(Action::FirstItem),
            KeyCode::Char('G') | KeyCode::End => Some(Action::LastItem),
            KeyCode::Char('/') => Some(Action::EnterSearchMode),
            KeyCode::Char('p') => Some(Action::OpenFilterPicker(FilterKind::Platform)),
            KeyCode::Char('v') => Some(Action::OpenFilterPicker(FilterKind::ViolationType)),
            KeyCode::Char('x') => Some(Action::ClearFilters),
            KeyCode::Char('E') => Some(Action::ExportViolations),
            KeyCode::Enter => Some(Action::OpenProductDetail),
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, _frame: &mut Frame, _area: Rect) -> Result<()> {
        // Drawing goes through draw_violations_page, which needs the catalog
        Ok(())
    }
}

/// Title line of the table, e.g. `3 violations found`
pub fn violations_found_label(count: usize) -> String {
    format!("{} violations found", count)
}

pub fn draw_violations_page(
    frame: &mut Frame,
    area: Rect,
    violations: &mut ViolationsComponent,
    catalog: &Catalog,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    render_filter_bar(frame, chunks[0], violations);
    render_table(frame, chunks[1], violations, catalog);
}

fn render_filter_bar(frame: &mut Frame, area: Rect, violations: &ViolationsComponent) {
    let criteria = &violations.criteria;
    let cursor = if violations.search_mode { "_" } else { "" };
    let query_style = if violations.search_mode {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::White)
    };
    let selector_label = |selector: &Selector, kind: FilterKind| match selector.value() {
        Some(v) => v.to_string(),
        None => kind.all_label().to_string(),
    };

    let line = Line::from(vec![
        Span::styled("Search: ", Style::default().fg(Color::DarkGray)),
        Span::styled(format!("{}{}", criteria.query, cursor), query_style),
        Span::raw("   "),
        Span::styled("Platform: ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            selector_label(&criteria.platform, FilterKind::Platform),
            Style::default().fg(ACCENT),
        ),
        Span::raw("   "),
        Span::styled("Type: ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            selector_label(&criteria.violation_type, FilterKind::ViolationType),
            Style::default().fg(ACCENT),
        ),
    ]);

    let border = if violations.search_mode { Color::Yellow } else { Color::DarkGray };
    let paragraph = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Filters ")
            .border_style(Style::default().fg(border)),
    );
    frame.render_widget(paragraph, area);
}

fn render_table(
    frame: &mut Frame,
    area: Rect,
    violations: &mut ViolationsComponent,
    catalog: &Catalog,
) {
    let visible = violations.visible(catalog);

    // Column budget: title gets whatever the fixed columns leave
    let fixed = 10 + 30 + 8 + 9 + 6;
    let title_width = (area.width as usize).saturating_sub(fixed + 4).max(12);

    let header = Row::new(vec!["Product", "Platform", "Violation", "Score", "Missing"])
        .style(title_style(ACCENT))
        .bottom_margin(1);

    let rows: Vec<Row> = visible
        .iter()
        .map(|p| {
            let color = confidence_color(p.confidence_level());
            Row::new(vec![
                Cell::from(Line::from(vec![
                    Span::styled(truncate(&p.title, title_width), Style::default().fg(Color::White)),
                ])),
                Cell::from(p.platform.clone()),
                Cell::from(truncate(&p.violation_type, 30)),
                Cell::from(Line::from(badge(format!("{}%", p.confidence_score), color))),
                Cell::from(p.missing_fields.len().to_string()),
            ])
        })
        .collect();

    let widths = [
        Constraint::Min(12),
        Constraint::Length(10),
        Constraint::Length(30),
        Constraint::Length(8),
        Constraint::Length(7),
    ];

    let footer_hint = if visible.is_empty() && !violations.criteria.is_unrestricted() {
        " x clears filters "
    } else {
        ""
    };

    let table = Table::new(rows, widths)
        .header(header)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", violations_found_label(visible.len())))
                .title_bottom(footer_hint)
                .title_style(title_style(Color::White))
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .highlight_style(
            Style::default()
                .bg(Color::Blue)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    frame.render_stateful_widget(table, area, &mut violations.table_state);
}

/// Help bar spans for the violations page
pub fn help_spans(search_mode: bool) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    if search_mode {
        spans.extend(key_hint("Esc/Enter", "Done", Color::Yellow));
        spans.extend(key_hint("Backspace", "Delete", Color::Cyan));
        return spans;
    }
    spans.extend(key_hint("j/k", "Move", Color::Cyan));
    spans.extend(key_hint("Enter", "Details", Color::Green));
    spans.extend(key_hint("/", "Search", Color::Cyan));
    spans.extend(key_hint("p", "Platform", Color::Cyan));
    spans.extend(key_hint("v", "Type", Color::Cyan));
    spans.extend(key_hint("x", "Clear", Color::Yellow));
    spans.extend(key_hint("E", "Export CSV", Color::Magenta));
    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selected_id(v: &ViolationsComponent, catalog: &Catalog) -> Option<String> {
        v.selected_product(catalog).map(|p| p.id.clone())
    }

    #[test]
    fn test_cursor_wraps_over_visible_rows() {
        let catalog = Catalog::seeded();
        let mut v = ViolationsComponent::new();
        v.previous(&catalog);
        assert_eq!(selected_id(&v, &catalog), Some("5".to_string()));
        v.next(&catalog);
        assert_eq!(selected_id(&v, &catalog), Some("1".to_string()));
    }

    #[test]
    fn test_search_resets_cursor_to_first_match() {
        let catalog = Catalog::seeded();
        let mut v = ViolationsComponent::new();
        v.select_last(&catalog);
        for c in "blood".chars() {
            v.search_input(c, &catalog);
        }
        assert_eq!(v.table_state.selected(), Some(0));
        assert_eq!(selected_id(&v, &catalog), Some("4".to_string()));
    }

    #[test]
    fn test_no_match_clears_cursor() {
        let catalog = Catalog::seeded();
        let mut v = ViolationsComponent::new();
        for c in "nonexistent-xyz".chars() {
            v.search_input(c, &catalog);
        }
        assert!(v.visible(&catalog).is_empty());
        assert_eq!(v.table_state.selected(), None);
        assert!(v.selected_product(&catalog).is_none());

        v.next(&catalog);
        assert_eq!(v.table_state.selected(), None);
    }

    #[test]
    fn test_set_and_clear_filters() {
        let catalog = Catalog::seeded();
        let mut v = ViolationsComponent::new();
        v.set_filter(FilterKind::Platform, Selector::only("Amazon"), &catalog);
        assert_eq!(v.visible(&catalog).len(), 3);
        v.set_filter(
            FilterKind::ViolationType,
            Selector::only("No Safety Age Warning"),
            &catalog,
        );
        assert_eq!(selected_id(&v, &catalog), Some("5".to_string()));

        v.clear_filters(&catalog);
        assert!(v.criteria.is_unrestricted());
        assert_eq!(v.visible(&catalog).len(), 5);
    }

    #[test]
    fn test_found_label() {
        assert_eq!(violations_found_label(0), "0 violations found");
    }
}
