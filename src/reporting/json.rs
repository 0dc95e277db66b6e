//! JSON rendering for machine consumers.

use crate::error::Result;
use crate::types::{AnalysisReport, ScanReport};

/// Serializes a single report.
///
/// # Errors
/// Returns error if serialization fails.
pub fn format_analysis(report: &AnalysisReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Serializes a multi-file scan.
///
/// # Errors
/// Returns error if serialization fails.
pub fn format_scan(report: &ScanReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}
