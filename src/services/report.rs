//! Report and export file writers

use crate::error::{DashboardError, DashboardResult};
use crate::model::catalog::Catalog;
use crate::model::dashboard::{OverviewStats, CATEGORY_COMPLIANCE};
use crate::model::product::Product;
use crate::model::reports::{ReportConfig, ReportFormat, ReportKind};
use crate::model::trends::MONTHLY_TRENDS;
use chrono::{DateTime, Local};
use serde::Serialize;
use std::fs::{self, File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// A row that can be written both as CSV and as JSON
trait ReportRow: Serialize {
    const HEADERS: &'static [&'static str];
    fn record(&self) -> Vec<String>;
}

#[derive(Debug, Serialize)]
struct MetricRow {
    metric: &'static str,
    value: String,
}

impl ReportRow for MetricRow {
    const HEADERS: &'static [&'static str] = &["metric", "value"];

    fn record(&self) -> Vec<String> {
        vec![self.metric.to_string(), self.value.clone()]
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ViolationRow<'a> {
    id: &'a str,
    title: &'a str,
    platform: &'a str,
    seller: &'a str,
    violation_type: &'a str,
    category: &'static str,
    confidence_score: u8,
    missing_fields: Vec<&'a str>,
    extracted_text: &'a str,
}

impl<'a> From<&'a Product> for ViolationRow<'a> {
    fn from(p: &'a Product) -> Self {
        Self {
            id: &p.id,
            title: &p.title,
            platform: &p.platform,
            seller: &p.seller,
            violation_type: &p.violation_type,
            category: p.category(),
            confidence_score: p.confidence_score,
            missing_fields: p.missing_fields.iter().map(String::as_str).collect(),
            extracted_text: &p.extracted_text,
        }
    }
}

impl ReportRow for ViolationRow<'_> {
    const HEADERS: &'static [&'static str] = &[
        "id",
        "title",
        "platform",
        "seller",
        "violation_type",
        "category",
        "confidence_score",
        "missing_fields",
        "extracted_text",
    ];

    fn record(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.title.to_string(),
            self.platform.to_string(),
            self.seller.to_string(),
            self.violation_type.to_string(),
            self.category.to_string(),
            self.confidence_score.to_string(),
            self.missing_fields.join("; "),
            self.extracted_text.to_string(),
        ]
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CategoryRow {
    category: &'static str,
    compliant: u64,
    violations: u64,
    total: u64,
    compliance_rate: f64,
}

impl ReportRow for CategoryRow {
    const HEADERS: &'static [&'static str] =
        &["category", "compliant", "violations", "total", "compliance_rate"];

    fn record(&self) -> Vec<String> {
        vec![
            self.category.to_string(),
            self.compliant.to_string(),
            self.violations.to_string(),
            self.total.to_string(),
            format!("{:.1}", self.compliance_rate),
        ]
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct MonthRow {
    month: &'static str,
    violations: u64,
    resolved: u64,
    pending: u64,
    resolution_rate: f64,
}

impl ReportRow for MonthRow {
    const HEADERS: &'static [&'static str] =
        &["month", "violations", "resolved", "pending", "resolution_rate"];

    fn record(&self) -> Vec<String> {
        vec![
            self.month.to_string(),
            self.violations.to_string(),
            self.resolved.to_string(),
            self.pending.to_string(),
            format!("{:.1}", self.resolution_rate),
        ]
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ReportDocument<'a, R: Serialize> {
    report: &'static str,
    title: &'static str,
    generated_at: String,
    period: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    platform: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    category: Option<String>,
    rows: &'a [R],
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// `<stem>-<YYYYmmdd-HHMMSS>.<ext>`
pub fn report_file_name(stem: &str, format: ReportFormat, now: DateTime<Local>) -> String {
    format!("{}-{}.{}", stem, now.format("%Y%m%d-%H%M%S"), format.extension())
}

fn numbered_file_name(stem: &str, format: ReportFormat, now: DateTime<Local>, n: u32) -> String {
    if n <= 1 {
        return report_file_name(stem, format, now);
    }
    format!(
        "{}-{}-{}.{}",
        stem,
        now.format("%Y%m%d-%H%M%S"),
        n,
        format.extension()
    )
}

/// Create a new file in `dir`; a name already taken within the same second
/// gets a `-2`, `-3`, ... suffix instead of being overwritten
fn create_report_file(
    dir: &Path,
    stem: &str,
    format: ReportFormat,
    now: DateTime<Local>,
) -> DashboardResult<(File, PathBuf)> {
    let mut n = 1;
    loop {
        let path = dir.join(numbered_file_name(stem, format, now, n));
        match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(file) => return Ok((file, path)),
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => n += 1,
            Err(e) => return Err(DashboardError::io(&path, e)),
        }
    }
}

fn write_csv<R: ReportRow>(file: File, path: &Path, rows: &[R]) -> DashboardResult<()> {
    let mut writer = csv::Writer::from_writer(file);
    writer.write_record(R::HEADERS)?;
    for row in rows {
        writer.write_record(row.record())?;
    }
    writer.flush().map_err(|e| DashboardError::io(path, e))?;
    Ok(())
}

fn write_json<R: ReportRow>(
    file: File,
    path: &Path,
    document: &ReportDocument<'_, R>,
) -> DashboardResult<()> {
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, document)?;
    writer.flush().map_err(|e| DashboardError::io(path, e))?;
    Ok(())
}

/// Scope fields the rows of `kind` actually honor
fn applied_scope(kind: ReportKind, config: &ReportConfig) -> (Option<String>, Option<String>) {
    match kind {
        ReportKind::ComplianceSummary | ReportKind::ViolationDetails => (
            Some(config.platform.to_string()),
            Some(config.category.to_string()),
        ),
        ReportKind::CategoryAnalysis => (None, Some(config.category.to_string())),
        ReportKind::TrendsForecast => (None, None),
    }
}

fn write_rows<R: ReportRow>(
    kind: ReportKind,
    format: ReportFormat,
    config: &ReportConfig,
    (file, path): (File, &Path),
    now: DateTime<Local>,
    rows: &[R],
) -> DashboardResult<()> {
    match format {
        ReportFormat::Csv => write_csv(file, path, rows),
        ReportFormat::Json => {
            let (platform, category) = applied_scope(kind, config);
            write_json(
                file,
                path,
                &ReportDocument {
                    report: kind.id(),
                    title: kind.title(),
                    generated_at: now.to_rfc3339(),
                    period: config.period.label(),
                    platform,
                    category,
                    rows,
                },
            )
        }
    }
}

fn ensure_dir(dir: &Path) -> DashboardResult<()> {
    fs::create_dir_all(dir).map_err(|e| DashboardError::io(dir, e))
}

/// Generate one report into `dir`, returning the written path
pub fn write_report(
    kind: ReportKind,
    format: ReportFormat,
    config: &ReportConfig,
    catalog: &Catalog,
    dir: &Path,
    now: DateTime<Local>,
) -> DashboardResult<PathBuf> {
    ensure_dir(dir)?;
    let (file, path) = create_report_file(dir, kind.id(), format, now)?;
    let out = (file, path.as_path());
    let in_scope: Vec<&Product> = catalog
        .products()
        .iter()
        .filter(|p| config.includes(p))
        .collect();

    match kind {
        ReportKind::ComplianceSummary => {
            // Platform-wide figures; only the last row is narrowed by the scope
            let stats = OverviewStats::default();
            let rows = vec![
                MetricRow { metric: "overall_compliance_score", value: stats.compliance_score.to_string() },
                MetricRow { metric: "overall_products_scanned", value: stats.products_scanned.to_string() },
                MetricRow { metric: "overall_violations_found", value: stats.violations_found.to_string() },
                MetricRow { metric: "overall_violation_rate", value: stats.violation_percentage.to_string() },
                MetricRow { metric: "violations_in_scope", value: in_scope.len().to_string() },
            ];
            write_rows(kind, format, config, out, now, &rows)?;
        }
        ReportKind::ViolationDetails => {
            let rows: Vec<ViolationRow> = in_scope.iter().map(|p| ViolationRow::from(*p)).collect();
            write_rows(kind, format, config, out, now, &rows)?;
        }
        ReportKind::CategoryAnalysis => {
            let rows: Vec<CategoryRow> = CATEGORY_COMPLIANCE
                .iter()
                .filter(|c| config.category.matches(c.category))
                .map(|c| CategoryRow {
                    category: c.category,
                    compliant: c.compliant,
                    violations: c.violations,
                    total: c.total(),
                    compliance_rate: round1(c.compliant as f64 * 100.0 / c.total() as f64),
                })
                .collect();
            write_rows(kind, format, config, out, now, &rows)?;
        }
        ReportKind::TrendsForecast => {
            let rows: Vec<MonthRow> = MONTHLY_TRENDS
                .iter()
                .map(|m| MonthRow {
                    month: m.month,
                    violations: m.violations,
                    resolved: m.resolved,
                    pending: m.pending,
                    resolution_rate: round1(m.resolution_rate()),
                })
                .collect();
            write_rows(kind, format, config, out, now, &rows)?;
        }
    }

    tracing::info!("Wrote {} report to {}", kind.id(), path.display());
    Ok(path)
}

/// Export the given (already filtered) violations as CSV
pub fn export_violations(
    products: &[&Product],
    dir: &Path,
    now: DateTime<Local>,
) -> DashboardResult<PathBuf> {
    ensure_dir(dir)?;
    let (file, path) = create_report_file(dir, "violations", ReportFormat::Csv, now)?;
    let rows: Vec<ViolationRow> = products.iter().map(|p| ViolationRow::from(*p)).collect();
    write_csv(file, &path, &rows)?;
    tracing::info!("Exported {} violations to {}", rows.len(), path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::filter::{FilterCriteria, Selector};
    use chrono::TimeZone;
    use tempfile::TempDir;

    fn fixed_now() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 3, 1, 9, 30, 5).unwrap()
    }

    fn read_lines(path: &Path) -> Vec<String> {
        fs::read_to_string(path)
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn test_file_name_format() {
        assert_eq!(
            report_file_name("trends-report", ReportFormat::Json, fixed_now()),
            "trends-report-20240301-093005.json"
        );
    }

    #[test]
    fn test_violation_details_csv_respects_scope() {
        let dir = TempDir::new().unwrap();
        let config = ReportConfig {
            platform: Selector::only("Amazon"),
            ..ReportConfig::default()
        };
        let path = write_report(
            ReportKind::ViolationDetails,
            ReportFormat::Csv,
            &config,
            &Catalog::seeded(),
            dir.path(),
            fixed_now(),
        )
        .unwrap();

        assert_eq!(
            path.file_name().and_then(|n| n.to_str()),
            Some("violation-details-20240301-093005.csv")
        );
        let lines = read_lines(&path);
        assert_eq!(
            lines[0],
            "id,title,platform,seller,violation_type,category,confidence_score,missing_fields,extracted_text"
        );
        assert_eq!(lines.len(), 4);
        assert!(lines[1].starts_with("1,"));
        assert!(lines[1].contains("BIS Registration Number; Importer Details; Warranty Terms"));
    }

    #[test]
    fn test_empty_scope_still_writes_header() {
        let dir = TempDir::new().unwrap();
        let config = ReportConfig {
            platform: Selector::only("Flipkart"),
            category: Selector::only("Toys"),
            ..ReportConfig::default()
        };
        let path = write_report(
            ReportKind::ViolationDetails,
            ReportFormat::Csv,
            &config,
            &Catalog::seeded(),
            dir.path(),
            fixed_now(),
        )
        .unwrap();
        assert_eq!(read_lines(&path).len(), 1);
    }

    #[test]
    fn test_category_analysis_json() {
        let dir = TempDir::new().unwrap();
        let config = ReportConfig {
            category: Selector::only("Electronics"),
            ..ReportConfig::default()
        };
        let path = write_report(
            ReportKind::CategoryAnalysis,
            ReportFormat::Json,
            &config,
            &Catalog::seeded(),
            dir.path(),
            fixed_now(),
        )
        .unwrap();

        let doc: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(doc["report"], "category-analysis");
        assert_eq!(doc["period"], "Last 30 days");
        assert_eq!(doc["category"], "Electronics");
        let rows = doc["rows"].as_array().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["total"], 970);
        assert_eq!(rows[0]["complianceRate"], 87.6);
    }

    #[test]
    fn test_summary_and_trends_csv() {
        let dir = TempDir::new().unwrap();
        let catalog = Catalog::seeded();
        let config = ReportConfig::default();

        let summary = write_report(
            ReportKind::ComplianceSummary,
            ReportFormat::Csv,
            &config,
            &catalog,
            dir.path(),
            fixed_now(),
        )
        .unwrap();
        let lines = read_lines(&summary);
        assert_eq!(lines[0], "metric,value");
        assert!(lines.contains(&"violations_in_scope,5".to_string()));

        let trends = write_report(
            ReportKind::TrendsForecast,
            ReportFormat::Csv,
            &config,
            &catalog,
            dir.path(),
            fixed_now(),
        )
        .unwrap();
        let lines = read_lines(&trends);
        assert_eq!(lines.len(), 13);
        assert_eq!(lines[1], "Jan,245,220,25,89.8");
    }

    #[test]
    fn test_same_second_reports_get_distinct_files() {
        let dir = TempDir::new().unwrap();
        let catalog = Catalog::seeded();
        let config = ReportConfig::default();
        let paths: Vec<PathBuf> = (0..3)
            .map(|_| {
                write_report(
                    ReportKind::ComplianceSummary,
                    ReportFormat::Csv,
                    &config,
                    &catalog,
                    dir.path(),
                    fixed_now(),
                )
                .unwrap()
            })
            .collect();

        let names: Vec<&str> = paths
            .iter()
            .filter_map(|p| p.file_name().and_then(|n| n.to_str()))
            .collect();
        assert_eq!(
            names,
            vec![
                "compliance-summary-20240301-093005.csv",
                "compliance-summary-20240301-093005-2.csv",
                "compliance-summary-20240301-093005-3.csv",
            ]
        );
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 3);
        for path in &paths {
            assert_eq!(read_lines(path)[0], "metric,value");
        }
    }

    #[test]
    fn test_json_scope_only_lists_applied_criteria() {
        let dir = TempDir::new().unwrap();
        let catalog = Catalog::seeded();
        let config = ReportConfig {
            platform: Selector::only("Amazon"),
            category: Selector::only("Electronics"),
            ..ReportConfig::default()
        };
        let read = |kind| {
            let path = write_report(kind, ReportFormat::Json, &config, &catalog, dir.path(), fixed_now())
                .unwrap();
            serde_json::from_str::<serde_json::Value>(&fs::read_to_string(path).unwrap()).unwrap()
        };

        let trends = read(ReportKind::TrendsForecast);
        assert!(trends.get("platform").is_none());
        assert!(trends.get("category").is_none());

        let categories = read(ReportKind::CategoryAnalysis);
        assert!(categories.get("platform").is_none());
        assert_eq!(categories["category"], "Electronics");

        let details = read(ReportKind::ViolationDetails);
        assert_eq!(details["platform"], "Amazon");
        assert_eq!(details["category"], "Electronics");
    }

    #[test]
    fn test_export_honors_filter() {
        let dir = TempDir::new().unwrap();
        let catalog = Catalog::seeded();
        let criteria = FilterCriteria::new("samsung", Selector::All, Selector::All);
        let visible = criteria.apply(catalog.products());

        let path = export_violations(&visible, &dir.path().join("out"), fixed_now()).unwrap();
        let lines = read_lines(&path);
        assert_eq!(lines.len(), 2);
        assert!(lines[1].starts_with("1,Samsung"));
    }
}
