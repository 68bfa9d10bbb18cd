//! Report catalogue and report configuration

use super::catalog::{CATEGORIES, PLATFORMS};
use super::filter::Selector;
use super::product::Product;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReportKind {
    ComplianceSummary,
    ViolationDetails,
    CategoryAnalysis,
    TrendsForecast,
}

impl ReportKind {
    pub fn all() -> [ReportKind; 4] {
        [
            ReportKind::ComplianceSummary,
            ReportKind::ViolationDetails,
            ReportKind::CategoryAnalysis,
            ReportKind::TrendsForecast,
        ]
    }

    /// Stable identifier used in file names
    pub fn id(&self) -> &'static str {
        match self {
            ReportKind::ComplianceSummary => "compliance-summary",
            ReportKind::ViolationDetails => "violation-details",
            ReportKind::CategoryAnalysis => "category-analysis",
            ReportKind::TrendsForecast => "trends-report",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ReportKind::ComplianceSummary => "Compliance Summary Report",
            ReportKind::ViolationDetails => "Detailed Violation Report",
            ReportKind::CategoryAnalysis => "Category-wise Analysis",
            ReportKind::TrendsForecast => "Trends & Forecasting",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ReportKind::ComplianceSummary => "Overall compliance statistics and trends",
            ReportKind::ViolationDetails => "Comprehensive list of all violations with evidence",
            ReportKind::CategoryAnalysis => "Breakdown of violations by product categories",
            ReportKind::TrendsForecast => "Compliance trends and predictive analysis",
        }
    }

    pub fn last_generated(&self) -> &'static str {
        match self {
            ReportKind::ComplianceSummary => "2 hours ago",
            ReportKind::ViolationDetails => "6 hours ago",
            ReportKind::CategoryAnalysis => "1 day ago",
            ReportKind::TrendsForecast => "3 days ago",
        }
    }

    pub fn size(&self) -> &'static str {
        match self {
            ReportKind::ComplianceSummary => "2.4 MB",
            ReportKind::ViolationDetails => "8.7 MB",
            ReportKind::CategoryAnalysis => "1.8 MB",
            ReportKind::TrendsForecast => "3.2 MB",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Csv,
    Json,
}

impl ReportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ReportFormat::Csv => "csv",
            ReportFormat::Json => "json",
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.extension().to_uppercase())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReportPeriod {
    Last7Days,
    #[default]
    Last30Days,
    Last3Months,
    LastYear,
}

impl ReportPeriod {
    pub fn label(&self) -> &'static str {
        match self {
            ReportPeriod::Last7Days => "Last 7 days",
            ReportPeriod::Last30Days => "Last 30 days",
            ReportPeriod::Last3Months => "Last 3 months",
            ReportPeriod::LastYear => "Last year",
        }
    }

    pub fn next(&self) -> ReportPeriod {
        match self {
            ReportPeriod::Last7Days => ReportPeriod::Last30Days,
            ReportPeriod::Last30Days => ReportPeriod::Last3Months,
            ReportPeriod::Last3Months => ReportPeriod::LastYear,
            ReportPeriod::LastYear => ReportPeriod::Last7Days,
        }
    }
}

/// Scope applied when generating a report
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReportConfig {
    pub period: ReportPeriod,
    pub platform: Selector,
    pub category: Selector,
}

impl ReportConfig {
    pub fn cycle_period(&mut self) {
        self.period = self.period.next();
    }

    pub fn cycle_platform(&mut self) {
        self.platform = self.platform.cycle(&PLATFORMS);
    }

    pub fn cycle_category(&mut self) {
        self.category = self.category.cycle(&CATEGORIES);
    }

    /// Whether a product falls inside the report's platform and category scope
    pub fn includes(&self, product: &Product) -> bool {
        self.platform.matches(&product.platform) && self.category.matches(product.category())
    }
}

/// Presentation state of the reports page
#[derive(Debug, Clone)]
pub struct ReportsState {
    pub selected: usize,
    pub config: ReportConfig,
    pub reports_generated: u32,
}

impl Default for ReportsState {
    fn default() -> Self {
        Self {
            selected: 0,
            config: ReportConfig::default(),
            reports_generated: 45,
        }
    }
}

impl ReportsState {
    pub fn selected_kind(&self) -> ReportKind {
        let kinds = ReportKind::all();
        kinds[self.selected.min(kinds.len() - 1)]
    }

    pub fn next(&mut self) {
        self.selected = (self.selected + 1) % ReportKind::all().len();
    }

    pub fn previous(&mut self) {
        let len = ReportKind::all().len();
        self.selected = (self.selected + len - 1) % len;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::catalog::Catalog;

    #[test]
    fn test_report_config_scope() {
        let catalog = Catalog::seeded();
        let mut config = ReportConfig::default();
        assert!(catalog.products().iter().all(|p| config.includes(p)));

        config.category = Selector::only("Toys");
        let ids: Vec<&str> = catalog
            .products()
            .iter()
            .filter(|p| config.includes(p))
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(ids, vec!["5"]);

        config.platform = Selector::only("Flipkart");
        assert!(!catalog.products().iter().any(|p| config.includes(p)));
    }

    #[test]
    fn test_cycle_platform_starts_with_first_option() {
        let mut config = ReportConfig::default();
        config.cycle_platform();
        assert_eq!(config.platform, Selector::only("Amazon"));
    }

    #[test]
    fn test_selected_kind_wraps() {
        let mut state = ReportsState::default();
        state.previous();
        assert_eq!(state.selected_kind(), ReportKind::TrendsForecast);
        state.next();
        assert_eq!(state.selected_kind(), ReportKind::ComplianceSummary);
    }
}
