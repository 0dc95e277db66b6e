// src/analysis/scanner_test.rs

use super::*;

#[test]
fn test_loop_keywords_whole_words_only() {
    assert_eq!(count_loop_keywords("for(;;){} while(x){} do{}while(y);"), 4);
    assert_eq!(count_loop_keywords("int format = forward + done + whiled;"), 0);
    assert_eq!(count_loop_keywords("double d; float f;"), 0);
}

#[test]
fn test_nested_for_detected() {
    let code = "for(i=0;i<n;i++){ for(j=0;j<n;j++){ s += i*j; } }";
    assert_eq!(count_nested_loops(code), 1);
}

#[test]
fn test_sequential_fors_not_nested() {
    let code = "for(i=0;i<n;i++){ a(); } for(j=0;j<n;j++){ b(); }";
    assert_eq!(count_nested_loops(code), 0);
}

#[test]
fn test_nesting_behind_inner_brace_is_missed() {
    let code = "for(i=0;i<n;i++){ if(x){ y(); } for(j=0;j<n;j++){ } }";
    assert_eq!(count_nested_loops(code), 0);
}

#[test]
fn test_while_nesting_is_invisible() {
    let code = "while(a){ while(b){ } }";
    assert_eq!(count_nested_loops(code), 0);
}

#[test]
fn test_function_definitions() {
    let code = "int main() {\n}\nvoid helper(int a, char *b)\n{\n}\nfloat decl(int);\n";
    assert_eq!(count_function_definitions(code), 2);
}

#[test]
fn test_unknown_return_type_not_counted() {
    assert_eq!(count_function_definitions("long f(void) { return 0; }"), 0);
    assert_eq!(count_function_definitions("x = max(a, b);"), 0);
}

#[test]
fn test_balance_counts_everything() {
    let b = brace_balance("{ \"}\" }");
    assert_eq!(b, Balance { open: 1, close: 2 });
    assert!(!b.is_balanced());
    assert!(paren_balance("(a,b)").is_balanced());
    assert!(brace_balance("{ }").is_balanced());
}

#[test]
fn test_infinite_loop_forms() {
    assert!(detect_infinite_loop("while(1){}"));
    assert!(detect_infinite_loop("while (1) { }"));
    assert!(detect_infinite_loop("for(;;){}"));
    assert!(detect_infinite_loop("for ( ; ; ) {}"));
    assert!(!detect_infinite_loop("for(i=0;i<10;i++){}"));
    assert!(!detect_infinite_loop("while(10){}"));
}

#[test]
fn test_empty_text_yields_zeroes() {
    let s = scan("");
    assert_eq!(s.counters, ScanCounters::default());
    assert!(s.braces.is_balanced());
    assert!(s.parens.is_balanced());
    assert!(s.terminators.is_empty());
    assert!(!s.infinite_loop);
    assert!(!s.formatted_print);
}

#[test]
fn test_garbage_is_total() {
    let s = scan("\u{0}\u{fffd}((}}\t\n\r\n;;;{{{");
    assert_eq!(s.counters.loop_count, 0);
    assert_eq!(s.parens, Balance { open: 2, close: 0 });
    assert_eq!(s.braces, Balance { open: 3, close: 2 });
}

#[test]
fn test_nested_for_with_call_in_header() {
    let code = "for (i = 0; i < strlen(s); i++) {\n  for (j = 0; j < n; j++) {\n    x++;\n  }\n}\n";
    assert_eq!(count_nested_loops(code), 1);
    assert_eq!(count_nested_loops("for(k=0;k<(int)n*sizeof(a);k++){ for(;;){} }"), 1);
}
