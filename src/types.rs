// src/types.rs
use serde::Serialize;
use std::path::PathBuf;

/// Structural counts extracted from a single source text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ScanCounters {
    pub loop_count: usize,
    pub nested_loop_count: usize,
    pub function_count: usize,
}

/// Raw open/close character counts for one delimiter pair.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Balance {
    pub open: usize,
    pub close: usize,
}

impl Balance {
    #[must_use]
    pub fn is_balanced(self) -> bool {
        self.open == self.close
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    MismatchedBraces,
    MismatchedParens,
    MissingTerminator,
    InfiniteLoopSuspected,
}

impl DiagnosticKind {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::MismatchedBraces => "mismatched-braces",
            Self::MismatchedParens => "mismatched-parens",
            Self::MissingTerminator => "missing-terminator",
            Self::InfiniteLoopSuspected => "infinite-loop",
        }
    }
}

/// A likely syntax defect. Only `MissingTerminator` carries a 1-based line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
    pub message: String,
}

impl Diagnostic {
    #[must_use]
    pub fn new(kind: DiagnosticKind, message: String) -> Self {
        Self {
            kind,
            line: None,
            message,
        }
    }

    #[must_use]
    pub fn at_line(kind: DiagnosticKind, line: usize, message: String) -> Self {
        Self {
            kind,
            line: Some(line),
            message,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionKind {
    PrintfInLoop,
    NestedLoopOptimization,
    ConstantTime,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    pub kind: SuggestionKind,
    pub message: String,
}

/// Coarse, rule-derived time complexity label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ComplexityClass {
    #[serde(rename = "O(1)")]
    Constant,
    #[serde(rename = "O(n)")]
    Linear,
    #[serde(rename = "O(n^k)")]
    Polynomial,
    #[serde(rename = "O(n^2)-or-higher")]
    QuadraticOrHigher,
}

impl ComplexityClass {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Constant => "O(1)",
            Self::Linear => "O(n)",
            Self::Polynomial => "O(n^k)",
            Self::QuadraticOrHigher => "O(n^2)-or-higher",
        }
    }
}

/// Everything one analysis call produces. Built once, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisReport {
    pub counters: ScanCounters,
    pub braces: Balance,
    pub parens: Balance,
    pub diagnostics: Vec<Diagnostic>,
    pub suggestions: Vec<Suggestion>,
    pub complexity: ComplexityClass,
}

impl AnalysisReport {
    /// Returns true if no diagnostics were produced.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    #[must_use]
    pub fn has(&self, kind: DiagnosticKind) -> bool {
        self.diagnostics.iter().any(|d| d.kind == kind)
    }

    #[must_use]
    pub fn suggests(&self, kind: SuggestionKind) -> bool {
        self.suggestions.iter().any(|s| s.kind == kind)
    }
}

/// Why a discovered file produced no report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "reason")]
pub enum SkipReason {
    IgnoreDirective,
    TooLarge { size: u64, limit: u64 },
    Unreadable { error: String },
}

/// Analysis results for a single file.
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    pub path: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<AnalysisReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skipped: Option<SkipReason>,
}

impl FileReport {
    #[must_use]
    pub fn diagnostic_count(&self) -> usize {
        self.report.as_ref().map_or(0, |r| r.diagnostics.len())
    }
}

/// Aggregated results from scanning multiple files.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ScanReport {
    pub files: Vec<FileReport>,
    pub total_diagnostics: usize,
    pub duration_ms: u128,
}

impl ScanReport {
    /// Returns true if any diagnostics were found.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.total_diagnostics > 0
    }

    #[must_use]
    pub fn analyzed_count(&self) -> usize {
        self.files.iter().filter(|f| f.report.is_some()).count()
    }

    #[must_use]
    pub fn skipped_count(&self) -> usize {
        self.files.iter().filter(|f| f.skipped.is_some()).count()
    }
}
