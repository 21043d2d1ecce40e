//! Tests for the `headify` binary: file naming, all-or-nothing output and
//! the debug listings.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use pretty_assertions::assert_eq;
use tempfile::tempdir;

fn headify(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_headify"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run headify")
}

fn path_arg(path: &Path) -> &str {
    path.to_str().expect("temp path is not UTF-8")
}

const VECTOR: &str = "\
#include <stdlib.h>

*typedef struct {
    int count;
} Vector;

*int vector_count(Vector* v) {
    return v->count; }

int main(void) {
    return 0; }
";

#[test]
fn test_marked_unit_writes_plain_names() {
    let dir = tempdir().unwrap();
    let source = dir.path().join("vector.hy.c");
    fs::write(&source, VECTOR).unwrap();

    let output = headify(&[path_arg(&source)]);
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let header = fs::read_to_string(dir.path().join("vector.h")).unwrap();
    assert_eq!(
        header,
        "#ifndef VECTOR_H_INCLUDED\n#define VECTOR_H_INCLUDED\n\
         typedef struct {\n    int count;\n} Vector;\n\
         int vector_count(Vector* v);\n#endif\n"
    );

    let implementation = fs::read_to_string(dir.path().join("vector.c")).unwrap();
    assert_eq!(implementation.lines().count(), VECTOR.lines().count());
    assert!(implementation.contains("\nint vector_count(Vector* v) {"));
    assert!(implementation.contains("\nint main(void) {"));
}

#[test]
fn test_plain_unit_gets_suffix() {
    let dir = tempdir().unwrap();
    let source = dir.path().join("account.c");
    fs::write(&source, "*int balance;\nint fee = 2;\n").unwrap();

    let output = headify(&[path_arg(&source)]);
    assert!(output.status.success());
    assert!(dir.path().join("account_generated.h").exists());
    assert_eq!(
        fs::read_to_string(dir.path().join("account_generated.c")).unwrap(),
        "int balance;\nstatic int fee = 2;\n"
    );

    let output = headify(&[path_arg(&source), "--suffix", "_out"]);
    assert!(output.status.success());
    assert!(dir.path().join("account_out.h").exists());
    assert!(dir.path().join("account_out.c").exists());
}

#[test]
fn test_out_dir() {
    let dir = tempdir().unwrap();
    let source = dir.path().join("waitlist.hy.c");
    fs::write(&source, "*int waiting;\n").unwrap();
    let out_dir = dir.path().join("build").join("gen");

    let output = headify(&[path_arg(&source), "-o", path_arg(&out_dir)]);
    assert!(output.status.success());
    assert!(out_dir.join("waitlist.h").exists());
    assert!(out_dir.join("waitlist.c").exists());
    assert!(!dir.path().join("waitlist.h").exists());
}

#[test]
fn test_error_writes_nothing() {
    let dir = tempdir().unwrap();
    let source = dir.path().join("broken.c");
    fs::write(&source, "*int ok;\n\nint bad = 1\n").unwrap();

    let output = headify(&[path_arg(&source)]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("broken:4: unexpected end of source"), "{}", stderr);
    assert!(!dir.path().join("broken_generated.h").exists());
    assert!(!dir.path().join("broken_generated.c").exists());
}

#[test]
fn test_scan_error_writes_nothing() {
    let dir = tempdir().unwrap();
    let source = dir.path().join("quote.hy.c");
    fs::write(&source, "int x;\nchar* s = \"open;\n").unwrap();

    let output = headify(&[path_arg(&source)]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("quote:2: unterminated string literal"), "{}", stderr);
    assert!(!dir.path().join("quote.h").exists());
}

#[test]
fn test_missing_file() {
    let dir = tempdir().unwrap();
    let source = dir.path().join("missing.c");
    let output = headify(&[path_arg(&source)]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("failed to read"));
}

#[test]
fn test_stdout() {
    let dir = tempdir().unwrap();
    let source = dir.path().join("tiny.hy.c");
    fs::write(&source, "*int x;\n").unwrap();

    let output = headify(&[path_arg(&source), "--stdout"]);
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "#ifndef TINY_H_INCLUDED\n#define TINY_H_INCLUDED\nextern int x;\n#endif\nint x;\n"
    );
    assert!(!dir.path().join("tiny.h").exists());
}

#[test]
fn test_dump_listings() {
    let dir = tempdir().unwrap();
    let source = dir.path().join("dump.c");
    fs::write(&source, "*int x;").unwrap();

    let output = headify(&[path_arg(&source), "--dump", "elements"]);
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "pub: *\ntok: int\nwhi:  \ntok: x\nsem: ;\neos: \n"
    );

    let output = headify(&[path_arg(&source), "--dump", "phrases"]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "[*var_dec:*int x;]\n");
    assert!(!dir.path().join("dump_generated.h").exists());
}

#[test]
fn test_verbose_logs_phrase_summary() {
    let dir = tempdir().unwrap();
    let source = dir.path().join("tiny.hy.c");
    fs::write(&source, "*int x;\nint f(void) { return x; }\n").unwrap();

    let output = headify(&[path_arg(&source), "-v", "--stdout"]);
    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("tiny: fun_def=1, var_dec=1"), "{}", stderr);
}
