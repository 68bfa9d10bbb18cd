//! Trends page - monthly series, platform growth and regional breakdown

use crate::action::Action;
use crate::component::Component;
use crate::components::theme::{key_hint, title_style, trend_span, ACCENT, ORANGE};
use crate::model::trends::{
    MonthlyTrend, Timeframe, MONTHLY_TRENDS, PLATFORM_TRENDS, REGION_STATS, TREND_SUMMARIES,
    VIOLATION_SHARES,
};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    symbols,
    text::{Line, Span},
    widgets::{
        Axis, Bar, BarChart, BarGroup, Block, Borders, Chart, Dataset, Gauge, GraphType, Paragraph,
    },
    Frame,
};

const SHARE_COLORS: [Color; 5] = [Color::Red, ORANGE, Color::Yellow, Color::Green, Color::Blue];

#[derive(Default)]
pub struct TrendsComponent {
    pub timeframe: Timeframe,
}

impl TrendsComponent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cycle_timeframe(&mut self) {
        self.timeframe = self.timeframe.next();
    }
}

impl Component for TrendsComponent {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        match key.code {
            KeyCode::Char('t') => Ok(Some(Action::CycleTimeframe)),
            _ => Ok(None),
        }
    }

    fn draw(&mut self, _frame: &mut Frame, _area: Rect) -> Result<()> {
        Ok(())
    }
}

pub fn draw_trends_page(frame: &mut Frame, area: Rect, comp: &TrendsComponent) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Percentage(50),
            Constraint::Min(7),
        ])
        .split(area);

    render_summaries(frame, rows[0], comp.timeframe);
    render_monthly_chart(frame, rows[1]);

    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .split(rows[2]);
    render_violation_shares(frame, bottom[0]);
    render_platform_trends(frame, bottom[1]);
    render_regions(frame, bottom[2]);
}

fn render_summaries(frame: &mut Frame, area: Rect, timeframe: Timeframe) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(area);

    for (i, summary) in TREND_SUMMARIES.iter().enumerate() {
        let mut block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", summary.title))
            .title_style(Style::default().fg(Color::DarkGray))
            .border_style(Style::default().fg(Color::DarkGray));
        if i == 0 {
            block = block.title_bottom(Line::from(Span::styled(
                format!(" {} ", timeframe.label()),
                Style::default().fg(ACCENT),
            )));
        }
        let paragraph = Paragraph::new(Line::from(vec![
            Span::styled(summary.value, title_style(Color::White)),
            Span::raw("  "),
            trend_span(summary.change, summary.up, summary.up),
        ]))
        .block(block);
        frame.render_widget(paragraph, columns[i]);
    }
}

fn render_monthly_chart(frame: &mut Frame, area: Rect) {
    let violations = monthly_series(|m| m.violations);
    let resolved = monthly_series(|m| m.resolved);
    let pending = monthly_series(|m| m.pending);

    let datasets = vec![
        Dataset::default()
            .name("Violations")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Red))
            .data(&violations),
        Dataset::default()
            .name("Resolved")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Green))
            .data(&resolved),
        Dataset::default()
            .name("Pending")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Yellow))
            .data(&pending),
    ];

    let x_labels: Vec<Span> = MONTHLY_TRENDS
        .iter()
        .step_by(3)
        .map(|m| Span::raw(m.month))
        .collect();

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Violation Trends Over Time ")
                .title_style(title_style(ACCENT))
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .x_axis(
            Axis::default()
                .style(Style::default().fg(Color::DarkGray))
                .bounds([0.0, (MONTHLY_TRENDS.len() - 1) as f64])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .style(Style::default().fg(Color::DarkGray))
                .bounds([0.0, 500.0])
                .labels(vec![Span::raw("0"), Span::raw("250"), Span::raw("500")]),
        );

    frame.render_widget(chart, area);
}

fn monthly_series(value: impl Fn(&MonthlyTrend) -> u64) -> Vec<(f64, f64)> {
    MONTHLY_TRENDS
        .iter()
        .enumerate()
        .map(|(i, m)| (i as f64, value(m) as f64))
        .collect()
}

fn render_violation_shares(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Violation Types ")
        .title_style(title_style(ACCENT))
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1); 5])
        .split(inner);

    for (i, share) in VIOLATION_SHARES.iter().enumerate() {
        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(SHARE_COLORS[i]).bg(Color::Black))
            .percent(share.value)
            .label(format!("{} {}%", share.name, share.value));
        frame.render_widget(gauge, rows[i]);
    }
}

fn render_platform_trends(frame: &mut Frame, area: Rect) {
    let lines: Vec<Line> = PLATFORM_TRENDS
        .iter()
        .map(|p| {
            // Growth in violations is bad news
            Line::from(vec![
                Span::raw(format!("{:<10}", p.platform)),
                Span::styled(format!("{:>6} ", p.violations), title_style(Color::White)),
                trend_span(format!("{}%", p.growth.abs()), p.growth >= 0, p.growth < 0),
            ])
        })
        .collect();

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Platform Trends ")
            .title_style(title_style(ACCENT))
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(paragraph, area);
}

fn render_regions(frame: &mut Frame, area: Rect) {
    let bars: Vec<Bar> = REGION_STATS
        .iter()
        .map(|r| {
            let label: String = r.region.split_whitespace().next().unwrap_or(r.region).to_string();
            let color = if r.change >= 0.0 { Color::Red } else { Color::Green };
            Bar::default()
                .value(r.violations)
                .label(Line::from(label))
                .text_value(format!("{:+.1}%", r.change))
                .style(Style::default().fg(color))
        })
        .collect();

    let chart = BarChart::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Regional Analysis ")
                .title_style(title_style(ACCENT))
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .data(BarGroup::default().bars(&bars))
        .bar_width(7)
        .bar_gap(1);

    frame.render_widget(chart, area);
}

pub fn help_spans() -> Vec<Span<'static>> {
    key_hint("t", "timeframe", Color::Yellow).to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_t_cycles_timeframe() {
        let mut comp = TrendsComponent::new();
        let action = comp
            .handle_key_event(KeyEvent::new(KeyCode::Char('t'), KeyModifiers::NONE))
            .unwrap();
        assert!(matches!(action, Some(Action::CycleTimeframe)));
        comp.cycle_timeframe();
        assert_eq!(comp.timeframe, Timeframe::SevenDays);
    }

    #[test]
    fn test_page_renders_timeframe_label() {
        let backend = TestBackend::new(140, 40);
        let mut terminal = Terminal::new(backend).unwrap();
        let comp = TrendsComponent::new();
        terminal
            .draw(|f| draw_trends_page(f, f.area(), &comp))
            .unwrap();
        let content: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(content.contains("Last 12 Months"));
        assert!(content.contains("Platform Trends"));
    }
}
