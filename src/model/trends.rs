//! Static datasets behind the trends page

/// Timeframe selector; only changes the page label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Timeframe {
    SevenDays,
    ThirtyDays,
    ThreeMonths,
    #[default]
    TwelveMonths,
}

impl Timeframe {
    pub fn label(&self) -> &'static str {
        match self {
            Timeframe::SevenDays => "Last 7 Days",
            Timeframe::ThirtyDays => "Last 30 Days",
            Timeframe::ThreeMonths => "Last 3 Months",
            Timeframe::TwelveMonths => "Last 12 Months",
        }
    }

    pub fn next(&self) -> Timeframe {
        match self {
            Timeframe::SevenDays => Timeframe::ThirtyDays,
            Timeframe::ThirtyDays => Timeframe::ThreeMonths,
            Timeframe::ThreeMonths => Timeframe::TwelveMonths,
            Timeframe::TwelveMonths => Timeframe::SevenDays,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthlyTrend {
    pub month: &'static str,
    pub violations: u64,
    pub resolved: u64,
    pub pending: u64,
}

impl MonthlyTrend {
    /// Share of the month's violations that were resolved, in percent
    pub fn resolution_rate(&self) -> f64 {
        if self.violations == 0 {
            return 0.0;
        }
        self.resolved as f64 * 100.0 / self.violations as f64
    }
}

pub const MONTHLY_TRENDS: [MonthlyTrend; 12] = [
    MonthlyTrend { month: "Jan", violations: 245, resolved: 220, pending: 25 },
    MonthlyTrend { month: "Feb", violations: 312, resolved: 298, pending: 14 },
    MonthlyTrend { month: "Mar", violations: 189, resolved: 175, pending: 14 },
    MonthlyTrend { month: "Apr", violations: 267, resolved: 251, pending: 16 },
    MonthlyTrend { month: "May", violations: 334, resolved: 310, pending: 24 },
    MonthlyTrend { month: "Jun", violations: 298, resolved: 278, pending: 20 },
    MonthlyTrend { month: "Jul", violations: 423, resolved: 395, pending: 28 },
    MonthlyTrend { month: "Aug", violations: 378, resolved: 356, pending: 22 },
    MonthlyTrend { month: "Sep", violations: 445, resolved: 418, pending: 27 },
    MonthlyTrend { month: "Oct", violations: 356, resolved: 334, pending: 22 },
    MonthlyTrend { month: "Nov", violations: 289, resolved: 271, pending: 18 },
    MonthlyTrend { month: "Dec", violations: 234, resolved: 219, pending: 15 },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlatformTrend {
    pub platform: &'static str,
    pub violations: u64,
    /// Growth in percent; negative means fewer violations
    pub growth: i32,
}

pub const PLATFORM_TRENDS: [PlatformTrend; 5] = [
    PlatformTrend { platform: "Amazon", violations: 1245, growth: 12 },
    PlatformTrend { platform: "Flipkart", violations: 987, growth: -8 },
    PlatformTrend { platform: "Myntra", violations: 654, growth: 23 },
    PlatformTrend { platform: "Nykaa", violations: 432, growth: 15 },
    PlatformTrend { platform: "Snapdeal", violations: 321, growth: -12 },
];

/// Share of one violation category, in percent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViolationShare {
    pub name: &'static str,
    pub value: u16,
}

pub const VIOLATION_SHARES: [ViolationShare; 5] = [
    ViolationShare { name: "Misleading Claims", value: 35 },
    ViolationShare { name: "Missing Ingredients", value: 28 },
    ViolationShare { name: "Price Violations", value: 20 },
    ViolationShare { name: "Quality Issues", value: 12 },
    ViolationShare { name: "Labeling Errors", value: 5 },
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegionStat {
    pub region: &'static str,
    pub violations: u64,
    pub change: f64,
}

pub const REGION_STATS: [RegionStat; 5] = [
    RegionStat { region: "North India", violations: 1245, change: 8.2 },
    RegionStat { region: "South India", violations: 987, change: -3.1 },
    RegionStat { region: "West India", violations: 856, change: 12.5 },
    RegionStat { region: "East India", violations: 543, change: 5.7 },
    RegionStat { region: "Northeast", violations: 234, change: -1.2 },
];

/// Summary card on top of the trends page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrendSummary {
    pub title: &'static str,
    pub value: &'static str,
    pub change: &'static str,
    pub up: bool,
}

pub const TREND_SUMMARIES: [TrendSummary; 4] = [
    TrendSummary { title: "Total Violations", value: "4,267", change: "+12.3%", up: true },
    TrendSummary { title: "Resolved Issues", value: "3,935", change: "+15.2%", up: true },
    TrendSummary { title: "Avg. Resolution Time", value: "2.4 days", change: "-8.1%", up: false },
    TrendSummary { title: "Platform Coverage", value: "847", change: "+5.7%", up: true },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeframe_cycle_returns_to_start() {
        let start = Timeframe::default();
        let mut t = start;
        for _ in 0..4 {
            t = t.next();
        }
        assert_eq!(t, start);
        assert_eq!(start.next().label(), "Last 7 Days");
    }

    #[test]
    fn test_monthly_rows_balance() {
        for m in MONTHLY_TRENDS {
            assert_eq!(m.resolved + m.pending, m.violations, "{}", m.month);
        }
    }

    #[test]
    fn test_violation_shares_sum_to_hundred() {
        let total: u16 = VIOLATION_SHARES.iter().map(|s| s.value).sum();
        assert_eq!(total, 100);
    }

    #[test]
    fn test_resolution_rate() {
        let m = MonthlyTrend { month: "X", violations: 200, resolved: 150, pending: 50 };
        assert!((m.resolution_rate() - 75.0).abs() < f64::EPSILON);
        let empty = MonthlyTrend { month: "Y", violations: 0, resolved: 0, pending: 0 };
        assert_eq!(empty.resolution_rate(), 0.0);
    }
}
