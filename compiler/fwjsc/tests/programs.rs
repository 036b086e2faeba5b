#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Whole programs through the driver pipeline, with printing captured.

use fwjs_diagnostic::ErrorCode;
use fwjsc::{evaluate_source, EvalOutput, RunOptions, Value};
use pretty_assertions::assert_eq;

fn run(source: &str) -> EvalOutput {
    evaluate_source(source, &RunOptions::default())
}

fn assert_runs(source: &str, printed: &[&str], value: Value) {
    let out = run(source);
    assert!(out.diagnostics.is_empty(), "{:?}", out.diagnostics);
    assert_eq!(out.printed, printed);
    assert_eq!(out.value, Some(value));
}

#[test]
fn sum_of_two_variables() {
    assert_runs("var x = 3; var y = 4; print(x + y);", &["7"], Value::Int(7));
}

#[test]
fn recursive_factorial() {
    assert_runs(
        "function f(n) { if (n <= 1) { 1 } else { n * f(n-1) } }; print(f(5));",
        &["120"],
        Value::Int(120),
    );
}

#[test]
fn while_counts_to_five() {
    assert_runs(
        "var x = 1; while (x < 5) { x = x + 1; }; print(x);",
        &["5"],
        Value::Int(5),
    );
}

#[test]
fn counter_closure_shares_state() {
    let source = "
        function makeCounter() {
            var count = 0;
            function() { count = count + 1; count }
        };
        var c = makeCounter();
        c(); c();
        print(c());
        var d = makeCounter();
        print(d());
    ";
    assert_runs(source, &["3", "1"], Value::Int(1));
}

#[test]
fn closure_sees_later_assignment() {
    let source = "
        var x = 1;
        var get = function() { x };
        x = 10;
        print(get());
    ";
    assert_runs(source, &["10"], Value::Int(10));
}

#[test]
fn higher_order_functions() {
    let source = "
        function twice(f, v) { f(f(v)) };
        function inc(n) { n + 1 };
        print(twice(inc, 5));
        print(twice(function(n) { n * n }, 3));
    ";
    assert_runs(source, &["7", "81"], Value::Int(81));
}

#[test]
fn fibonacci_by_loop() {
    let source = "
        var a = 0; var b = 1; var i = 0;
        while (i < 10) {
            var t = a + b;
            a = b; b = t; i = i + 1;
        };
        print(a);
    ";
    // Blocks do not open a scope, so `t` is redeclared on the second pass.
    let out = run(source);
    assert_eq!(out.diagnostics[0].code, ErrorCode::E6020);
}

#[test]
fn fibonacci_with_assignment_only() {
    let source = "
        var a = 0; var b = 1; var i = 0; var t = 0;
        while (i < 10) {
            t = a + b;
            a = b; b = t; i = i + 1;
        };
        print(a);
    ";
    assert_runs(source, &["55"], Value::Int(55));
}

#[test]
fn printing_booleans_null_and_functions() {
    let out = run("print(1 < 2); print(null); print(function(a, b) { a });");
    assert_eq!(out.printed, vec!["true", "null", "<function/2>"]);
    assert_eq!(out.value.map(|v| v.type_name()), Some("function"));
}

#[test]
fn comments_are_ignored() {
    assert_runs(
        "// leading\nvar x = /* inline */ 2;\nprint(x * 21); // trailing",
        &["42"],
        Value::Int(42),
    );
}

#[test]
fn unbound_name_reads_as_null() {
    assert_runs("print(missing);", &["null"], Value::Null);
}

#[test]
fn non_boolean_condition_is_an_error() {
    let out = run("if (1) { print(1) };");
    assert!(out.printed.is_empty());
    assert_eq!(out.diagnostics[0].code, ErrorCode::E6001);
}

#[test]
fn calling_an_integer_is_an_error() {
    let out = run("var x = 3; x(1);");
    assert_eq!(out.diagnostics[0].code, ErrorCode::E6003);
}

#[test]
fn adding_a_boolean_is_an_error() {
    let out = run("print(1 + true);");
    assert_eq!(out.diagnostics[0].code, ErrorCode::E6002);
    assert_eq!(
        out.diagnostics[0].message,
        "operator `+` expects two integers, found integer and boolean"
    );
}

#[test]
fn overflow_is_an_error() {
    let out = run("var big = 9223372036854775807; print(big + 1);");
    assert_eq!(out.diagnostics[0].code, ErrorCode::E6012);
}

#[test]
fn modulo_by_zero_is_an_error() {
    let out = run("print(5 % 0);");
    assert_eq!(out.diagnostics[0].code, ErrorCode::E6011);
}

#[test]
fn empty_program_is_null() {
    assert_runs("", &[], Value::Null);
    assert_runs("// nothing here\n", &[], Value::Null);
}
