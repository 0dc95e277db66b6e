//! Static guidance per diagnostic kind.

use crate::types::DiagnosticKind;

pub(crate) struct Guidance {
    pub(crate) why: &'static str,
    pub(crate) fix: &'static str,
}

pub(crate) fn get_guidance(kind: DiagnosticKind) -> Guidance {
    match kind {
        DiagnosticKind::MismatchedBraces => Guidance {
            why: "Every '{' needs a matching '}'. Braces inside strings and comments are counted too.",
            fix: "Check the end of each block, especially after edits near the bottom of a function.",
        },
        DiagnosticKind::MismatchedParens => Guidance {
            why: "An unclosed '(' usually means a truncated call or condition.",
            fix: "Match every call and control header against its closing ')'.",
        },
        DiagnosticKind::MissingTerminator => Guidance {
            why: "Statements end in ';'. Lines containing parentheses are never checked.",
            fix: "Add the ';', or ignore the hint if the statement continues on the next line.",
        },
        DiagnosticKind::InfiniteLoopSuspected => Guidance {
            why: "`while(1)` and `for(;;)` only terminate through break, return or exit.",
            fix: "Make sure the body has a reachable exit, or write the real loop condition.",
        },
    }
}
