// src/analysis/scanner.rs
//! Independent lexical scans over raw source text.
//!
//! # Heuristic Contract
//!
//! Every scan here is a regex or character count over the raw text. Nothing
//! tokenizes, so braces, parentheses and keywords inside string literals or
//! comments are counted like any other. Known blind spots:
//!
//! - Nesting is only recognized for `for` directly inside `for`, with no
//!   other brace between the two headers. `while`/`do` nesting is invisible.
//! - Function definitions are only recognized for the return types `int`,
//!   `float`, `double`, `char` and `void`, and only when the parameter list
//!   contains no nested parentheses.
//!
//! These are accepted limits, not bugs. Every scan is total: text that matches
//! nothing yields zero.

use super::terminators::{self, TerminatorCandidate};
use crate::types::{Balance, ScanCounters};
use regex::Regex;
use std::sync::LazyLock;

#[cfg(test)]
#[path = "scanner_test.rs"]
mod tests;

static LOOP_KEYWORD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:for|while|do)\b").unwrap_or_else(|_| panic!("Invalid Regex"))
});
static NESTED_FOR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\bfor\s*\([^{}]*?\)\s*\{[^{}]*\bfor\s*\(")
        .unwrap_or_else(|_| panic!("Invalid Regex"))
});
static FUNCTION_DEF_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:int|float|double|char|void)\s+\w+\s*\([^)]*\)\s*\{")
        .unwrap_or_else(|_| panic!("Invalid Regex"))
});
static WHILE_ONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"while\s*\(1\)").unwrap_or_else(|_| panic!("Invalid Regex")));
static FOR_EVER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"for\s*\(\s*;\s*;\s*\)").unwrap_or_else(|_| panic!("Invalid Regex"))
});

const FORMATTED_PRINT: &str = "printf";

/// Raw results of every scan over one source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scan {
    pub counters: ScanCounters,
    pub braces: Balance,
    pub parens: Balance,
    pub terminators: Vec<TerminatorCandidate>,
    pub infinite_loop: bool,
    pub formatted_print: bool,
}

/// Runs every scan over `text`. No scan reads another's result.
#[must_use]
pub fn scan(text: &str) -> Scan {
    Scan {
        counters: ScanCounters {
            loop_count: count_loop_keywords(text),
            nested_loop_count: count_nested_loops(text),
            function_count: count_function_definitions(text),
        },
        braces: brace_balance(text),
        parens: paren_balance(text),
        terminators: terminators::scan_missing_terminators(text),
        infinite_loop: detect_infinite_loop(text),
        formatted_print: mentions_formatted_print(text),
    }
}

/// Whole-word occurrences of `for`, `while` and `do`.
#[must_use]
pub fn count_loop_keywords(text: &str) -> usize {
    LOOP_KEYWORD_RE.find_iter(text).count()
}

/// A `for (...) {` header whose block reaches another `for (` before any
/// `{` or `}`. The header may hold calls and casts but never a brace.
#[must_use]
pub fn count_nested_loops(text: &str) -> usize {
    NESTED_FOR_RE.find_iter(text).count()
}

/// `<type> name(params) {` where `<type>` is one of the five fixed keywords.
/// Declarations and calls don't match because they lack the opening brace.
#[must_use]
pub fn count_function_definitions(text: &str) -> usize {
    FUNCTION_DEF_RE.find_iter(text).count()
}

#[must_use]
pub fn brace_balance(text: &str) -> Balance {
    balance(text, '{', '}')
}

#[must_use]
pub fn paren_balance(text: &str) -> Balance {
    balance(text, '(', ')')
}

fn balance(text: &str, open: char, close: char) -> Balance {
    text.chars().fold(Balance::default(), |mut acc, c| {
        if c == open {
            acc.open += 1;
        } else if c == close {
            acc.close += 1;
        }
        acc
    })
}

/// `while(1)` or `for(;;)`, whitespace allowed around the parts.
#[must_use]
pub fn detect_infinite_loop(text: &str) -> bool {
    WHILE_ONE_RE.is_match(text) || FOR_EVER_RE.is_match(text)
}

#[must_use]
pub fn mentions_formatted_print(text: &str) -> bool {
    text.contains(FORMATTED_PRINT)
}
