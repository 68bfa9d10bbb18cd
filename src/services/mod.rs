//! File-producing services
//!
//! - Report generation (CSV / JSON)
//! - Export of the filtered violations list

pub mod report;

pub use report::{export_violations, write_report};
