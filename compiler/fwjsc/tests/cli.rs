#![allow(clippy::unwrap_used, clippy::expect_used)]

//! The `fwjs` binary and the file-based commands.

use std::io::Write;
use std::process::{Command, Output};

use fwjsc::{dump_tokens, dump_tree, run_file, CommandError, RunOptions};
use pretty_assertions::assert_eq;
use tempfile::NamedTempFile;

fn program(source: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(source.as_bytes()).unwrap();
    file
}

fn fwjs(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_fwjs"))
        .args(args)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn run_file_reports_success() {
    let file = program("var x = 3; var y = 4; print(x + y);");
    let ok = run_file(file.path().to_str().unwrap(), &RunOptions::default()).unwrap();
    assert!(ok);
}

#[test]
fn run_file_reports_runtime_failure() {
    let file = program("print(1 / 0);");
    let ok = run_file(file.path().to_str().unwrap(), &RunOptions::default()).unwrap();
    assert!(!ok);
}

#[test]
fn run_file_missing_path() {
    let err = run_file("/no/such/file.fwjs", &RunOptions::default()).unwrap_err();
    assert!(matches!(err, CommandError::Io { ref path, .. } if path == "/no/such/file.fwjs"));
}

#[test]
fn binary_runs_factorial() {
    let file = program(
        "function f(n) { if (n <= 1) { 1 } else { n * f(n-1) } };\nprint(f(5));\n",
    );
    let output = fwjs(&["run", file.path().to_str().unwrap()]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "120\n");
    assert_eq!(stderr(&output), "");
}

#[test]
fn binary_shows_result() {
    let file = program("var x = 1; while (x < 5) { x = x + 1; }; x;");
    let output = fwjs(&["run", "--show-result", file.path().to_str().unwrap()]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "=> 5\n");
}

#[test]
fn binary_reports_diagnostic_and_fails() {
    let file = program("var x = 1;\nvar x = 2;\n");
    let path = file.path().to_str().unwrap();
    let output = fwjs(&["run", path]);

    assert!(!output.status.success());
    let err = stderr(&output);
    assert!(err.starts_with("error[E6020]: `x` is already declared in this scope\n"));
    assert!(err.contains(&format!("--> {path}:2:1")));
}

#[test]
fn binary_strict_arity() {
    let file = program("function f(a, b) { a }; print(f(1));");
    let path = file.path().to_str().unwrap();

    let lenient = fwjs(&["run", path]);
    assert_eq!(stdout(&lenient), "1\n");

    let strict = fwjs(&["run", "--strict-arity", path]);
    assert!(!strict.status.success());
    assert!(stderr(&strict).contains("error[E6030]"));
}

#[test]
fn binary_rejects_unknown_option() {
    let output = fwjs(&["run", "--turbo", "x.fwjs"]);
    assert!(!output.status.success());
    assert!(stderr(&output).starts_with("error: unknown option `--turbo`"));
}

#[test]
fn binary_unknown_command() {
    let output = fwjs(&["frobnicate"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("unknown command `frobnicate`"));
}

#[test]
fn binary_parse_dump() {
    let file = program("var x = 1; print(x + 2);");
    let output = fwjs(&["parse", file.path().to_str().unwrap()]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "(seq (var x 1) (print (+ x 2)))\n");
}

#[test]
fn dump_tokens_names_identifiers() {
    let dumped = dump_tokens("print(abc);").unwrap();
    assert_eq!(
        dumped,
        "Print @ 0..5\nLParen @ 5..6\nIdent(abc) @ 6..9\nRParen @ 9..10\nSemicolon @ 10..11\nEof @ 11..11\n"
    );
}

#[test]
fn dump_tree_reports_parse_errors() {
    let diagnostics = dump_tree("print(1").unwrap_err();
    assert_eq!(diagnostics.len(), 1);
    assert!(diagnostics[0].code.is_parser_error());
}
