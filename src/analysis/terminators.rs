// src/analysis/terminators.rs
//! Missing statement terminator heuristic.
//!
//! A line is a candidate when, trimmed, it is non-empty, is not a
//! preprocessor directive or `//` comment, does not end in `;`, `{` or `}`,
//! and contains no parenthesis at all. The parenthesis rule exempts every
//! call, declaration and control header, so a line like `foo()` is never
//! flagged. Statements split across lines, lines inside `/* */` blocks and
//! string literals are all treated as plain lines.

use serde::Serialize;

/// A line that looks like a statement missing its `;`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TerminatorCandidate {
    /// 1-based line number.
    pub line: usize,
    /// The trimmed line text.
    pub text: String,
}

#[must_use]
pub fn scan_missing_terminators(text: &str) -> Vec<TerminatorCandidate> {
    text.lines()
        .enumerate()
        .filter_map(|(idx, raw)| {
            let line = raw.trim();
            is_candidate(line).then(|| TerminatorCandidate {
                line: idx + 1,
                text: line.to_string(),
            })
        })
        .collect()
}

fn is_candidate(line: &str) -> bool {
    if line.is_empty() || line.starts_with('#') || line.starts_with("//") {
        return false;
    }
    if line.ends_with([';', '{', '}']) {
        return false;
    }
    !line.contains(['(', ')'])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flagged(code: &str) -> Vec<usize> {
        scan_missing_terminators(code).into_iter().map(|c| c.line).collect()
    }

    #[test]
    fn test_bare_statement_flagged() {
        let found = scan_missing_terminators("return 0");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].line, 1);
        assert_eq!(found[0].text, "return 0");
    }

    #[test]
    fn test_parens_exempt_line() {
        assert!(flagged("foo()").is_empty());
        assert!(flagged("if (x > 0)").is_empty());
    }

    #[test]
    fn test_terminated_lines_pass() {
        assert!(flagged("x = 1;").is_empty());
        assert!(flagged("else {").is_empty());
        assert!(flagged("  }  ").is_empty());
    }

    #[test]
    fn test_directives_comments_and_blanks_skipped() {
        assert!(flagged("#include <stdio.h>\n// note here\n\n   \n").is_empty());
    }

    #[test]
    fn test_line_numbers_are_one_based() {
        let code = "int a;\nint b\n\nb = 2\n";
        assert_eq!(flagged(code), vec![2, 4]);
    }

    #[test]
    fn test_block_comment_lines_not_exempt() {
        let code = "/* a comment\n   spanning lines */";
        assert_eq!(flagged(code), vec![1, 2]);
    }

    #[test]
    fn test_crlf_lines() {
        assert_eq!(flagged("x = 1;\r\ny = 2\r\n"), vec![2]);
    }
}
