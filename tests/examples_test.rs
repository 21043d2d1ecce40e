//! End-to-end tests through the public `headify()` entry point.

use headify::{headify, HeadifyError, Options, Output};
use pretty_assertions::assert_eq;

fn run(unit: &str, source: &str) -> Output {
    headify(unit, source, &Options::default()).unwrap()
}

/// Header lines between the include guard.
fn header_body(output: &Output) -> Vec<&str> {
    let lines: Vec<&str> = output.header.lines().collect();
    lines[2..lines.len() - 1].to_vec()
}

#[test]
fn test_public_function() {
    let output = run("demo", "*int f(int a, int b) { return a + b; }");
    assert_eq!(header_body(&output), vec!["int f(int a, int b);"]);
    assert_eq!(output.implementation, "int f(int a, int b) { return a + b; }");
}

#[test]
fn test_private_variable() {
    let output = run("demo", "int x = 5;");
    assert!(header_body(&output).is_empty());
    assert_eq!(output.implementation, "static int x = 5;");
}

#[test]
fn test_public_variable() {
    let output = run("demo", "*int x;");
    assert_eq!(header_body(&output), vec!["extern int x;"]);
    assert_eq!(output.implementation, "int x;");
}

#[test]
fn test_unterminated_string() {
    let source = "\"unterminated";
    let err = headify("demo", source, &Options::default()).unwrap_err();
    assert!(matches!(err, HeadifyError::Scan(_)));
    assert_eq!(err.location(source).line, 1);
    assert_eq!(err.report("demo", source), "demo:1: unterminated string literal");
}

#[test]
fn test_public_struct() {
    let output = run("demo", "*struct Point { int x; int y; };\nint z;\n");
    assert_eq!(header_body(&output), vec!["struct Point { int x; int y; };"]);
    assert_eq!(output.implementation, "\nstatic int z;\n");
}

#[test]
fn test_complete_unit() {
    let source = "\
/* counters */
#include <stdio.h>

*typedef struct {
    int count;
} Counter;

*Counter* counter_new(void);
static int total = 0;
int bump(Counter* c) {
    return ++c->count;
}

*void counter_reset(Counter* c) // resets
{
    c->count = 0;
}

int main(void) {
    return 0;
}
";

    let output = run("counter", source);

    assert_eq!(
        output.header,
        "\
#ifndef COUNTER_H_INCLUDED
#define COUNTER_H_INCLUDED
typedef struct {
    int count;
} Counter;
Counter* counter_new(void);
void counter_reset(Counter* c);
#endif
"
    );

    assert_eq!(
        output.implementation,
        "\
/* counters */
#include <stdio.h>





Counter* counter_new(void);
static int total = 0;
static int bump(Counter* c) {
    return ++c->count;
}

void counter_reset(Counter* c) // resets
{
    c->count = 0;
}

int main(void) {
    return 0;
}
"
    );
    assert_eq!(output.implementation.lines().count(), source.lines().count());
}

#[test]
fn test_structural_error_reports_line() {
    let source = "int a;\nint b;\n\nint f(int x) y;\n";
    let err = headify("broken", source, &Options::default()).unwrap_err();
    assert!(matches!(err, HeadifyError::Phrase { .. }));
    assert_eq!(err.report("broken", source), "broken:4: unexpected token 'y'");
}

#[test]
fn test_mismatched_braces_report_closer() {
    let source = "int f(void) {\n    return (1];\n}\n";
    let err = headify("demo", source, &Options::default()).unwrap_err();
    assert_eq!(err.report("demo", source), "demo:2: braces do not match");
}

#[test]
fn test_crlf_input() {
    let output = run("demo", "*int x;\r\nint y;\r\n");
    assert_eq!(header_body(&output), vec!["extern int x;"]);
    assert_eq!(output.implementation, "int x;\r\nstatic int y;\r\n");
}

#[test]
fn test_crlf_multi_line_macro() {
    let lf = "*#define SUM 1 + \\\n    2\nint x;\n";
    let crlf = lf.replace('\n', "\r\n");

    let from_lf = run("demo", lf);
    let from_crlf = run("demo", &crlf);

    assert_eq!(from_lf.implementation, "\n\nstatic int x;\n");
    assert_eq!(from_crlf.implementation, "\n\nstatic int x;\r\n");
    assert_eq!(header_body(&from_lf), vec!["#define SUM 1 + \\", "    2"]);
    assert_eq!(from_crlf.header.replace('\r', ""), from_lf.header);
}

#[test]
fn test_custom_entry_point() {
    let options = Options::default().with_entry_point("start");
    let output = headify("demo", "int start(void) { return 0; }\nint main(void) { return 0; }", &options)
        .unwrap();
    assert_eq!(
        output.implementation,
        "int start(void) { return 0; }\nstatic int main(void) { return 0; }"
    );
}
