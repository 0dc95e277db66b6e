// src/analysis/classifier.rs
//! Rule tables that turn raw scans into a complexity class, diagnostics and
//! suggestions.

use super::scanner::Scan;
use crate::types::{
    ComplexityClass, Diagnostic, DiagnosticKind, ScanCounters, Suggestion, SuggestionKind,
};

#[cfg(test)]
#[path = "classifier_test.rs"]
mod tests;

/// First matching rule wins: nesting, then exactly one loop, then several.
#[must_use]
pub fn classify(counters: &ScanCounters) -> ComplexityClass {
    if counters.nested_loop_count > 0 {
        ComplexityClass::QuadraticOrHigher
    } else if counters.loop_count == 1 {
        ComplexityClass::Linear
    } else if counters.loop_count > 1 {
        ComplexityClass::Polynomial
    } else {
        ComplexityClass::Constant
    }
}

/// Ordered: braces, parens, each missing terminator by line, infinite loop.
#[must_use]
pub fn diagnostics(scan: &Scan) -> Vec<Diagnostic> {
    let braces = (!scan.braces.is_balanced()).then(|| {
        Diagnostic::new(
            DiagnosticKind::MismatchedBraces,
            format!(
                "Mismatched braces: {} '{{' vs {} '}}'",
                scan.braces.open, scan.braces.close
            ),
        )
    });
    let parens = (!scan.parens.is_balanced()).then(|| {
        Diagnostic::new(
            DiagnosticKind::MismatchedParens,
            format!(
                "Mismatched parentheses: {} '(' vs {} ')'",
                scan.parens.open, scan.parens.close
            ),
        )
    });
    let terminators = scan.terminators.iter().map(|c| {
        Diagnostic::at_line(
            DiagnosticKind::MissingTerminator,
            c.line,
            format!("Possible missing semicolon: `{}`", c.text),
        )
    });
    let infinite = scan.infinite_loop.then(|| {
        Diagnostic::new(
            DiagnosticKind::InfiniteLoopSuspected,
            "Possible infinite loop: `while(1)` or `for(;;)` with no visible exit".to_string(),
        )
    });

    braces
        .into_iter()
        .chain(parens)
        .chain(terminators)
        .chain(infinite)
        .collect()
}

/// Independent rules; any subset may fire.
#[must_use]
pub fn suggestions(scan: &Scan) -> Vec<Suggestion> {
    let c = &scan.counters;
    let rules = [
        (
            scan.formatted_print && c.loop_count > 0,
            SuggestionKind::PrintfInLoop,
            "printf inside a loop is slow; buffer the output and print once after the loop",
        ),
        (
            c.nested_loop_count > 0,
            SuggestionKind::NestedLoopOptimization,
            "Nested loops detected; a lookup table or a single pass may avoid O(n^2) work",
        ),
        (
            c.loop_count == 0,
            SuggestionKind::ConstantTime,
            "No loops; runs in constant time",
        ),
    ];

    rules
        .into_iter()
        .filter(|(fires, _, _)| *fires)
        .map(|(_, kind, message)| Suggestion {
            kind,
            message: message.to_string(),
        })
        .collect()
}
