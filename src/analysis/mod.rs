// src/analysis/mod.rs
//! Core analysis: scan, classify, report.
//!
//! [`analyze`] is pure and total over any `&str`. [`Engine`] adds the file
//! handling around it (size limits, ignore directive, lossy decoding) and runs
//! files in parallel.

pub mod classifier;
pub mod sample;
pub mod scanner;
pub mod terminators;

use crate::config::Config;
use crate::types::{AnalysisReport, FileReport, ScanReport, SkipReason};
use rayon::prelude::*;
use std::path::{Path, PathBuf};

const IGNORE_DIRECTIVE: &str = "cscan:ignore";

/// Runs every scan over `text` and derives the complete report.
#[must_use]
pub fn analyze(text: &str) -> AnalysisReport {
    let scan = scanner::scan(text);
    AnalysisReport {
        complexity: classifier::classify(&scan.counters),
        diagnostics: classifier::diagnostics(&scan),
        suggestions: classifier::suggestions(&scan),
        counters: scan.counters,
        braces: scan.braces,
        parens: scan.parens,
    }
}

pub struct Engine {
    config: Config,
}

impl Engine {
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    #[must_use]
    #[allow(clippy::needless_pass_by_value)]
    pub fn scan(&self, files: Vec<PathBuf>) -> ScanReport {
        let start = std::time::Instant::now();

        let mut results: Vec<FileReport> = files
            .par_iter()
            .map(|path| self.analyze_file(path))
            .collect();
        results.sort_by(|a, b| a.path.cmp(&b.path));

        let total_diagnostics = results.iter().map(FileReport::diagnostic_count).sum();

        ScanReport {
            files: results,
            total_diagnostics,
            duration_ms: start.elapsed().as_millis(),
        }
    }

    /// Analyzes in-memory bytes under a display name (used for stdin).
    #[must_use]
    pub fn analyze_bytes(&self, name: &Path, bytes: &[u8]) -> FileReport {
        let size = bytes.len() as u64;
        if size > self.config.limits.max_input_bytes {
            return skipped(
                name,
                SkipReason::TooLarge {
                    size,
                    limit: self.config.limits.max_input_bytes,
                },
            );
        }

        let source = String::from_utf8_lossy(bytes);
        if has_ignore_directive(&source) {
            return skipped(name, SkipReason::IgnoreDirective);
        }

        FileReport {
            path: name.to_path_buf(),
            report: Some(analyze(&source)),
            skipped: None,
        }
    }

    fn analyze_file(&self, path: &Path) -> FileReport {
        if let Ok(meta) = std::fs::metadata(path) {
            let limit = self.config.limits.max_input_bytes;
            if meta.len() > limit {
                if self.config.verbose {
                    eprintln!("WARN: skipping {} ({} bytes)", path.display(), meta.len());
                }
                return skipped(path, SkipReason::TooLarge { size: meta.len(), limit });
            }
        }

        match std::fs::read(path) {
            Ok(bytes) => self.analyze_bytes(path, &bytes),
            Err(e) => skipped(path, SkipReason::Unreadable { error: e.to_string() }),
        }
    }
}

fn skipped(path: &Path, reason: SkipReason) -> FileReport {
    FileReport {
        path: path.to_path_buf(),
        report: None,
        skipped: Some(reason),
    }
}

fn has_ignore_directive(source: &str) -> bool {
    source
        .lines()
        .take(5)
        .any(|line| line.contains(IGNORE_DIRECTIVE))
}
