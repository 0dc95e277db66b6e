//! Console output formatting for analysis results.
//!
//! Each report renders as three sections: counts, diagnostics (or the
//! "no errors" sentinel), suggestions (or the "looks efficient" sentinel).

use super::guidance::get_guidance;
use super::shared::{duration, pluralize};
use crate::types::{
    AnalysisReport, Diagnostic, DiagnosticKind, FileReport, ScanReport, SkipReason,
};
use colored::Colorize;
use std::collections::HashSet;
use std::fmt::Write;

pub const NO_ERRORS: &str = "No syntax errors detected.";
pub const LOOKS_EFFICIENT: &str = "Code looks efficient.";

/// Prints a single report to stdout.
pub fn print_analysis(report: &AnalysisReport) {
    print!("{}", render_analysis(report));
}

/// Prints every file report followed by a summary line.
pub fn print_scan(report: &ScanReport) {
    for file in &report.files {
        print!("{}", render_file(file));
    }
    println!("{}", render_summary(report));
}

#[must_use]
pub fn render_analysis(report: &AnalysisReport) -> String {
    let mut out = String::new();
    write_counts(&mut out, report);
    write_diagnostics(&mut out, &report.diagnostics);
    write_suggestions(&mut out, report);
    out
}

fn write_counts(out: &mut String, report: &AnalysisReport) {
    let c = &report.counters;
    let _ = writeln!(out, "{}", "Structure".cyan().bold());
    let _ = writeln!(out, "  Loops:        {}", c.loop_count);
    let _ = writeln!(out, "  Nested loops: {}", c.nested_loop_count);
    let _ = writeln!(out, "  Functions:    {}", c.function_count);
    let _ = writeln!(
        out,
        "  Complexity:   {}",
        report.complexity.label().yellow().bold()
    );
}

fn write_diagnostics(out: &mut String, diagnostics: &[Diagnostic]) {
    let _ = writeln!(out, "{}", "Diagnostics".cyan().bold());
    if diagnostics.is_empty() {
        let _ = writeln!(out, "  {}", NO_ERRORS.green());
        return;
    }
    let mut shown: HashSet<DiagnosticKind> = HashSet::new();
    for d in diagnostics {
        let location = d.line.map_or_else(String::new, |l| format!("line {l}: "));
        let _ = writeln!(
            out,
            "  {} {location}{}",
            format!("[{}]", d.kind.label()).red().bold(),
            d.message
        );
        // Guidance once per kind; repeats stay one line.
        if shown.insert(d.kind) {
            let g = get_guidance(d.kind);
            let _ = writeln!(out, "    {} {} {}", "=".blue(), "WHY:".cyan(), g.why);
            let _ = writeln!(out, "    {} {} {}", "=".blue(), "FIX:".green(), g.fix);
        }
    }
}

fn write_suggestions(out: &mut String, report: &AnalysisReport) {
    let _ = writeln!(out, "{}", "Suggestions".cyan().bold());
    if report.suggestions.is_empty() {
        let _ = writeln!(out, "  {}", LOOKS_EFFICIENT.green());
        return;
    }
    for s in &report.suggestions {
        let _ = writeln!(out, "  {} {}", "-".blue(), s.message);
    }
}

#[must_use]
pub fn render_file(file: &FileReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} {}", "==>".blue().bold(), file.path.display());
    match (&file.report, &file.skipped) {
        (Some(report), _) => out.push_str(&render_analysis(report)),
        (None, Some(reason)) => {
            let _ = writeln!(out, "  {}", skip_message(reason).dimmed());
        }
        (None, None) => {}
    }
    out.push('\n');
    out
}

fn skip_message(reason: &SkipReason) -> String {
    match reason {
        SkipReason::IgnoreDirective => "skipped (cscan:ignore)".to_string(),
        SkipReason::TooLarge { size, limit } => {
            format!("skipped: {size} bytes exceeds limit of {limit}")
        }
        SkipReason::Unreadable { error } => format!("skipped: {error}"),
    }
}

#[must_use]
pub fn render_summary(report: &ScanReport) -> String {
    let analyzed = report.analyzed_count();
    let skipped = report.skipped_count();
    let elapsed = duration(report);
    let mut line = format!("{analyzed} {} analyzed", pluralize("file", analyzed));
    if skipped > 0 {
        let _ = write!(line, ", {skipped} skipped");
    }
    let _ = write!(line, " in {elapsed:?}");

    if report.has_errors() {
        let n = report.total_diagnostics;
        let found = format!("{n} {} found", pluralize("diagnostic", n));
        format!("{} ({line})", found.red().bold())
    } else {
        format!("{} ({line})", "All clear.".green().bold())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{analyze, sample::SAMPLE_PROGRAM};
    use std::path::PathBuf;

    fn analyzed(path: &str, code: &str) -> FileReport {
        FileReport {
            path: PathBuf::from(path),
            report: Some(analyze(code)),
            skipped: None,
        }
    }

    fn skipped(path: &str, reason: SkipReason) -> FileReport {
        FileReport {
            path: PathBuf::from(path),
            report: None,
            skipped: Some(reason),
        }
    }

    fn scan_report(files: Vec<FileReport>) -> ScanReport {
        let total_diagnostics = files.iter().map(FileReport::diagnostic_count).sum();
        ScanReport {
            files,
            total_diagnostics,
            duration_ms: 3,
        }
    }

    #[test]
    fn test_clean_report_shows_no_errors_sentinel() {
        let out = render_analysis(&analyze(SAMPLE_PROGRAM));
        assert!(out.contains(NO_ERRORS));
        assert!(out.contains("O(n)"));
        assert!(out.contains("printf inside a loop"));
        assert!(!out.contains(LOOKS_EFFICIENT));
    }

    #[test]
    fn test_efficient_sentinel_when_nothing_fires() {
        let out = render_analysis(&analyze("int f() { for(i=0;i<n;i++) { x++; } }"));
        assert!(out.contains(LOOKS_EFFICIENT));
    }

    #[test]
    fn test_guidance_printed_once_per_kind() {
        let out = render_analysis(&analyze("a = 1\nb = 2\n"));
        assert_eq!(out.matches("WHY:").count(), 1);
        assert!(out.contains("line 1: "));
        assert!(out.contains("line 2: "));
    }

    #[test]
    fn test_summary_with_dirty_and_skipped_files() {
        let report = scan_report(vec![
            analyzed("src/clean.c", "int f() { for(i=0;i<n;i++) { x++; } }"),
            analyzed("src/dirty.c", "{\n"),
            skipped("src/big.c", SkipReason::TooLarge { size: 600, limit: 10 }),
        ]);
        let summary = render_summary(&report);
        assert!(summary.contains("1 diagnostic found"), "{summary}");
        assert!(summary.contains("2 files analyzed, 1 skipped"), "{summary}");
        assert!(!summary.contains("All clear."));
    }

    #[test]
    fn test_summary_all_clear() {
        let report = scan_report(vec![analyzed("a.c", SAMPLE_PROGRAM)]);
        let summary = render_summary(&report);
        assert!(summary.contains("All clear."));
        assert!(summary.contains("1 file analyzed in"));
        assert!(!summary.contains("skipped"));
    }

    #[test]
    fn test_render_file_sections_and_skip_reasons() {
        let out = render_file(&analyzed("src/dirty.c", "{\n"));
        assert!(out.contains("src/dirty.c"));
        assert!(out.contains("[mismatched-braces]"));

        let big = render_file(&skipped("big.c", SkipReason::TooLarge { size: 600, limit: 10 }));
        assert!(big.contains("skipped: 600 bytes exceeds limit of 10"));
        assert!(!big.contains("Structure"));

        let ignored = render_file(&skipped("gen.c", SkipReason::IgnoreDirective));
        assert!(ignored.contains("skipped (cscan:ignore)"));

        let unreadable = render_file(&skipped(
            "gone.c",
            SkipReason::Unreadable {
                error: "permission denied".to_string(),
            },
        ));
        assert!(unreadable.contains("skipped: permission denied"));
    }
}
