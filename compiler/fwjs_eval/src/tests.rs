//! Whole-program properties.

use crate::{buffer_handler, EvalResult, InterpreterBuilder, Value};
use fwjs_ir::StringInterner;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn eval_program(source: &str) -> EvalResult {
    let interner = StringInterner::new();
    let lexed = fwjs_lexer::lex(source, &interner);
    let parsed = fwjs_parse::parse(&lexed.tokens, &interner);
    assert!(parsed.errors.is_empty(), "parse errors: {:?}", parsed.errors);
    InterpreterBuilder::new(&parsed.arena, &interner)
        .print_handler(buffer_handler())
        .build()
        .eval(parsed.root)
}

/// Source for `n`; the grammar has no negative literals.
fn int_source(n: i64) -> String {
    if n < 0 {
        format!("(0 - {})", n.unsigned_abs())
    } else {
        n.to_string()
    }
}

#[test]
fn test_end_to_end_sum() {
    assert_eq!(
        eval_program("var x = 3; var y = 4; print(x + y);"),
        Ok(Value::Int(7))
    );
}

proptest! {
    #[test]
    fn prop_division_truncates(
        a in -1_000_000_000i64..1_000_000_000,
        b in (-100_000i64..100_000).prop_filter("non-zero", |b| *b != 0),
    ) {
        let (a_src, b_src) = (int_source(a), int_source(b));
        prop_assert_eq!(eval_program(&format!("{a_src} / {b_src};")), Ok(Value::Int(a / b)));
        prop_assert_eq!(eval_program(&format!("{a_src} % {b_src};")), Ok(Value::Int(a % b)));
    }

    #[test]
    fn prop_declared_value_is_read_back(n in 0i64..=i64::MAX) {
        prop_assert_eq!(eval_program(&format!("var v = {n}; v;")), Ok(Value::Int(n)));
    }

    #[test]
    fn prop_while_returns_last_iteration(n in 0i64..50) {
        let expected = if n == 0 { Value::Null } else { Value::Int(n * 2) };
        prop_assert_eq!(
            eval_program(&format!("var i = 0; while (i < {n}) {{ i = i + 1; i * 2 }}")),
            Ok(expected)
        );
    }
}
