// src/analysis/sample.rs
//! Reference program used by `cscan demo` and the end-to-end tests.

pub const SAMPLE_PROGRAM: &str = r#"#include<stdio.h>
int main() {
    int i;
    for(i = 0; i < 10; i++) {
        printf("%d\n", i);
    }
    return 0;
}
"#;
