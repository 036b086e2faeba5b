use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_messages() {
    assert_eq!(division_by_zero().message, "division by zero");
    assert_eq!(
        operand_not_integer("+", &Value::Int(1), &Value::Bool(true)).message,
        "operator `+` expects two integers, found integer and boolean"
    );
    assert_eq!(
        condition_not_boolean(&Value::Null).to_string(),
        "condition must be a boolean, found null"
    );
    assert_eq!(
        arity_mismatch(2, 1).message,
        "function takes 2 parameters but 1 arguments were supplied"
    );
}

#[test]
fn test_categories() {
    assert_eq!(not_callable(&Value::Int(1)).category(), ErrorCategory::Type);
    assert_eq!(modulo_by_zero().category(), ErrorCategory::Arithmetic);
    assert_eq!(integer_overflow("addition").category(), ErrorCategory::Arithmetic);
    assert_eq!(already_declared("x").category(), ErrorCategory::Scope);
    assert_eq!(arity_mismatch(1, 0).category(), ErrorCategory::Arity);
    assert_eq!(stack_overflow(10).category(), ErrorCategory::Resource);
}

#[test]
fn test_with_span_sets_span() {
    let span = Span::new(10, 20);
    let err = division_by_zero().with_span(span);
    assert_eq!(err.span, Some(span));
}

#[test]
fn test_to_diagnostic() {
    let diag = already_declared("x")
        .with_span(Span::new(11, 20))
        .to_diagnostic();
    assert_eq!(diag.code, ErrorCode::E6020);
    assert_eq!(diag.message, "`x` is already declared in this scope");
    assert_eq!(diag.primary_span(), Some(Span::new(11, 20)));
    assert_eq!(
        diag.notes,
        vec!["use `x = ...` to assign to the existing binding".to_string()]
    );
}

#[test]
fn test_diagnostic_without_span_has_no_label() {
    let diag = stack_overflow(3).to_diagnostic();
    assert_eq!(diag.code, ErrorCode::E6040);
    assert!(diag.labels.is_empty());
}
