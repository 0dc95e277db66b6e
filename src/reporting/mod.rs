//! Presentation of analysis results. Nothing here re-computes a scan.

pub mod console;
pub mod json;

mod guidance;
mod shared;

use crate::config::OutputFormat;
use crate::error::Result;
use crate::types::{AnalysisReport, ScanReport};

/// Prints a single report in the requested format.
///
/// # Errors
/// Returns error if JSON serialization fails.
pub fn print_analysis(report: &AnalysisReport, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => console::print_analysis(report),
        OutputFormat::Json => println!("{}", json::format_analysis(report)?),
    }
    Ok(())
}

/// Prints a multi-file scan in the requested format.
///
/// # Errors
/// Returns error if JSON serialization fails.
pub fn print_scan(report: &ScanReport, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => console::print_scan(report),
        OutputFormat::Json => println!("{}", json::format_scan(report)?),
    }
    Ok(())
}
