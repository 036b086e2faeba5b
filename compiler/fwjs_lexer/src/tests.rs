use super::*;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn kinds(source: &str) -> (Vec<TokenKind>, StringInterner) {
    let interner = StringInterner::new();
    let output = lex(source, &interner);
    assert!(output.errors.is_empty(), "unexpected errors: {:?}", output.errors);
    let kinds = output.tokens.iter().map(|t| t.kind).collect();
    (kinds, interner)
}

#[test]
fn test_var_declaration() {
    let (kinds, interner) = kinds("var x = 3;");
    let x = interner.intern("x");
    assert_eq!(
        kinds,
        vec![
            TokenKind::Var,
            TokenKind::Ident(x),
            TokenKind::Eq,
            TokenKind::Int(3),
            TokenKind::Semicolon,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_operators_prefer_longest_match() {
    let (kinds, _) = kinds("== = <= < >= > + - * / %");
    assert_eq!(
        kinds,
        vec![
            TokenKind::EqEq,
            TokenKind::Eq,
            TokenKind::LtEq,
            TokenKind::Lt,
            TokenKind::GtEq,
            TokenKind::Gt,
            TokenKind::Plus,
            TokenKind::Minus,
            TokenKind::Star,
            TokenKind::Slash,
            TokenKind::Percent,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_keywords_and_identifiers() {
    let (kinds, interner) = kinds("if else while function var print true false null iffy nullable");
    assert_eq!(
        kinds,
        vec![
            TokenKind::If,
            TokenKind::Else,
            TokenKind::While,
            TokenKind::Function,
            TokenKind::Var,
            TokenKind::Print,
            TokenKind::True,
            TokenKind::False,
            TokenKind::Null,
            TokenKind::Ident(interner.intern("iffy")),
            TokenKind::Ident(interner.intern("nullable")),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_comments_are_skipped() {
    let (kinds, _) = kinds("// leading\n1 /* inner\n * more */ + 2 // trailing");
    assert_eq!(
        kinds,
        vec![
            TokenKind::Int(1),
            TokenKind::Plus,
            TokenKind::Int(2),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_block_comment_edge_forms() {
    for source in ["/**/ 1", "/* a **/ 1", "/* c */ 1", "/*/ */ 1", "/* one\ntwo\n*/\n1"] {
        let (kinds, _) = kinds(source);
        assert_eq!(kinds, vec![TokenKind::Int(1), TokenKind::Eof], "{source:?}");
    }
}

#[test]
fn test_block_comment_span_and_trailing() {
    let interner = StringInterner::new();
    let output = lex("1 /* a */ 2 /* b */", &interner);
    assert!(output.errors.is_empty());
    let spans: Vec<_> = output.tokens.iter().map(|t| t.span).collect();
    assert_eq!(
        spans,
        vec![Span::new(0, 1), Span::new(10, 11), Span::point(19)]
    );
}

#[test]
fn test_block_comment_does_not_nest() {
    let (kinds, _) = kinds("/* /* */ 1");
    assert_eq!(kinds, vec![TokenKind::Int(1), TokenKind::Eof]);
}

#[test]
fn test_spans() {
    let interner = StringInterner::new();
    let output = lex("print(42);", &interner);
    let spans: Vec<_> = output.tokens.iter().map(|t| t.span).collect();
    assert_eq!(
        spans,
        vec![
            Span::new(0, 5),
            Span::new(5, 6),
            Span::new(6, 8),
            Span::new(8, 9),
            Span::new(9, 10),
            Span::point(10),
        ]
    );
}

#[test]
fn test_empty_source_is_just_eof() {
    let (kinds, _) = kinds("   \n\t ");
    assert_eq!(kinds, vec![TokenKind::Eof]);
}

#[test]
fn test_invalid_char_recorded() {
    let interner = StringInterner::new();
    let output = lex("var $x = 1;", &interner);
    assert_eq!(
        output.errors,
        vec![LexError::InvalidChar {
            found: '$',
            span: Span::new(4, 5),
        }]
    );
    assert_eq!(output.tokens.get(1).map(|t| t.kind), Some(TokenKind::Error));
}

#[test]
fn test_int_overflow_recorded() {
    let interner = StringInterner::new();
    let output = lex("9223372036854775808", &interner);
    assert_eq!(
        output.errors,
        vec![LexError::IntOutOfRange {
            literal: "9223372036854775808".into(),
            span: Span::new(0, 19),
        }]
    );
}

#[test]
fn test_max_int_fits() {
    let (kinds, _) = kinds("9223372036854775807");
    assert_eq!(kinds, vec![TokenKind::Int(i64::MAX), TokenKind::Eof]);
}

#[test]
fn test_unterminated_block_comment() {
    let interner = StringInterner::new();
    let output = lex("1; /* never closed", &interner);
    assert_eq!(
        output.errors,
        vec![LexError::UnterminatedBlockComment {
            span: Span::new(3, 5),
        }]
    );
    let kinds: Vec<_> = output.tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![TokenKind::Int(1), TokenKind::Semicolon, TokenKind::Eof]
    );
}

proptest! {
    #[test]
    fn prop_non_negative_ints_lex_to_themselves(n in 0i64..=i64::MAX) {
        let interner = StringInterner::new();
        let output = lex(&n.to_string(), &interner);
        prop_assert!(output.errors.is_empty());
        prop_assert_eq!(output.tokens.get(0).map(|t| t.kind), Some(TokenKind::Int(n)));
    }

    #[test]
    fn prop_output_always_ends_with_eof(source in "[ -~\n]{0,64}") {
        let interner = StringInterner::new();
        let output = lex(&source, &interner);
        let last = output.tokens.as_slice().last().map(|t| t.kind);
        prop_assert_eq!(last, Some(TokenKind::Eof));
    }
}
