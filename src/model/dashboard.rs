//! Static datasets behind the dashboard overview

use super::counter::AnimatedCounter;
use std::time::{Duration, Instant};

/// Headline figures shown on the overview cards
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverviewStats {
    pub compliance_score: f64,
    pub products_scanned: f64,
    pub violations_found: f64,
    pub violation_percentage: f64,
}

impl Default for OverviewStats {
    fn default() -> Self {
        Self {
            compliance_score: 87.5,
            products_scanned: 15420.0,
            violations_found: 1203.0,
            violation_percentage: 7.8,
        }
    }
}

/// One overview card with its animated value
#[derive(Debug, Clone)]
pub struct OverviewCard {
    pub title: &'static str,
    pub counter: AnimatedCounter,
    pub suffix: &'static str,
    pub decimals: usize,
    /// Trend delta in percent
    pub trend: f64,
    pub trend_positive: bool,
}

impl OverviewCard {
    pub fn display_value(&self, now: Instant) -> String {
        format!(
            "{:.*}{}",
            self.decimals,
            self.counter.value_at(now),
            self.suffix
        )
    }
}

/// Build the four overview cards; each animates 200ms longer than the last
pub fn overview_cards(stats: &OverviewStats) -> Vec<OverviewCard> {
    let specs = [
        ("Compliance Score", stats.compliance_score, "%", 1, 2.3, true),
        ("Products Scanned", stats.products_scanned, "", 0, 12.5, true),
        ("Violations Found", stats.violations_found, "", 0, 5.2, false),
        ("Violation Rate", stats.violation_percentage, "%", 1, 1.8, false),
    ];
    specs
        .iter()
        .enumerate()
        .map(|(i, &(title, value, suffix, decimals, trend, positive))| OverviewCard {
            title,
            counter: AnimatedCounter::new(value, Duration::from_millis(1500 + 200 * i as u64)),
            suffix,
            decimals,
            trend,
            trend_positive: positive,
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryCompliance {
    pub category: &'static str,
    pub compliant: u64,
    pub violations: u64,
}

impl CategoryCompliance {
    pub fn total(&self) -> u64 {
        self.compliant + self.violations
    }
}

pub const CATEGORY_COMPLIANCE: [CategoryCompliance; 6] = [
    CategoryCompliance { category: "Electronics", compliant: 850, violations: 120 },
    CategoryCompliance { category: "Food & Beverages", compliant: 1200, violations: 80 },
    CategoryCompliance { category: "Pharmaceuticals", compliant: 650, violations: 45 },
    CategoryCompliance { category: "Textiles", compliant: 920, violations: 180 },
    CategoryCompliance { category: "Cosmetics", compliant: 540, violations: 95 },
    CategoryCompliance { category: "Toys", compliant: 380, violations: 75 },
];

/// Weekly detection counts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeeklyTrend {
    pub date: &'static str,
    pub violations: u64,
    pub scanned: u64,
}

pub const WEEKLY_TRENDS: [WeeklyTrend; 12] = [
    WeeklyTrend { date: "Jan 1", violations: 45, scanned: 1200 },
    WeeklyTrend { date: "Jan 8", violations: 52, scanned: 1350 },
    WeeklyTrend { date: "Jan 15", violations: 38, scanned: 1180 },
    WeeklyTrend { date: "Jan 22", violations: 65, scanned: 1420 },
    WeeklyTrend { date: "Jan 29", violations: 43, scanned: 1300 },
    WeeklyTrend { date: "Feb 5", violations: 58, scanned: 1380 },
    WeeklyTrend { date: "Feb 12", violations: 41, scanned: 1250 },
    WeeklyTrend { date: "Feb 19", violations: 69, scanned: 1480 },
    WeeklyTrend { date: "Feb 26", violations: 47, scanned: 1320 },
    WeeklyTrend { date: "Mar 5", violations: 55, scanned: 1400 },
    WeeklyTrend { date: "Mar 12", violations: 39, scanned: 1280 },
    WeeklyTrend { date: "Mar 19", violations: 72, scanned: 1520 },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Low => "LOW",
            Severity::Medium => "MEDIUM",
            Severity::High => "HIGH",
            Severity::Critical => "CRITICAL",
        }
    }

    /// Legend range shown under the heatmap
    pub fn legend(&self) -> &'static str {
        match self {
            Severity::Low => "Low (0-100)",
            Severity::Medium => "Medium (101-200)",
            Severity::High => "High (201-250)",
            Severity::Critical => "Critical (250+)",
        }
    }
}

/// Violation count for one state on the heatmap
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateViolations {
    pub state: &'static str,
    pub violations: u64,
    pub severity: Severity,
}

pub const STATE_VIOLATIONS: [StateViolations; 10] = [
    StateViolations { state: "Maharashtra", violations: 245, severity: Severity::High },
    StateViolations { state: "Delhi", violations: 189, severity: Severity::High },
    StateViolations { state: "Karnataka", violations: 156, severity: Severity::Medium },
    StateViolations { state: "Tamil Nadu", violations: 134, severity: Severity::Medium },
    StateViolations { state: "Gujarat", violations: 178, severity: Severity::High },
    StateViolations { state: "Uttar Pradesh", violations: 298, severity: Severity::Critical },
    StateViolations { state: "West Bengal", violations: 167, severity: Severity::Medium },
    StateViolations { state: "Rajasthan", violations: 123, severity: Severity::Medium },
    StateViolations { state: "Telangana", violations: 89, severity: Severity::Low },
    StateViolations { state: "Kerala", violations: 67, severity: Severity::Low },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertLevel {
    Critical,
    Warning,
    Info,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Alert {
    pub level: AlertLevel,
    pub message: &'static str,
    pub time: &'static str,
    pub count: u32,
}

pub const RECENT_ALERTS: [Alert; 3] = [
    Alert {
        level: AlertLevel::Critical,
        message: "Missing BIS certification on electronics category",
        time: "2 minutes ago",
        count: 45,
    },
    Alert {
        level: AlertLevel::Warning,
        message: "Incomplete nutrition labels detected",
        time: "15 minutes ago",
        count: 23,
    },
    Alert {
        level: AlertLevel::Info,
        message: "Weekly compliance report generated",
        time: "1 hour ago",
        count: 1,
    },
];

/// Catalog ids of the most recent detections with their age labels
pub const RECENT_VIOLATIONS: [(&str, &str); 3] = [
    ("1", "2 hours ago"),
    ("2", "4 hours ago"),
    ("3", "6 hours ago"),
];

/// Dashboard presentation state: animated cards and heatmap selection
#[derive(Debug, Clone)]
pub struct DashboardState {
    pub stats: OverviewStats,
    pub cards: Vec<OverviewCard>,
    /// Index into `STATE_VIOLATIONS`
    pub selected_state: Option<usize>,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardState {
    pub fn new() -> Self {
        let stats = OverviewStats::default();
        Self {
            cards: overview_cards(&stats),
            stats,
            selected_state: None,
        }
    }

    /// Restart the card animations from zero
    pub fn start_counters(&mut self, now: Instant) {
        for card in &mut self.cards {
            card.counter.start(now);
        }
    }

    pub fn finish_counters(&mut self) {
        for card in &mut self.cards {
            card.counter.finish();
        }
    }

    pub fn select_next_state(&mut self) {
        let len = STATE_VIOLATIONS.len();
        self.selected_state = Some(match self.selected_state {
            Some(i) => (i + 1) % len,
            None => 0,
        });
    }

    pub fn select_prev_state(&mut self) {
        let len = STATE_VIOLATIONS.len();
        self.selected_state = Some(match self.selected_state {
            Some(0) | None => len - 1,
            Some(i) => i - 1,
        });
    }

    pub fn selected_state(&self) -> Option<&StateViolations> {
        self.selected_state.and_then(|i| STATE_VIOLATIONS.get(i))
    }
}
