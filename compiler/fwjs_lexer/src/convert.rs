//! Converts raw logos tokens to final `TokenKind`, interning identifiers.

use fwjs_ir::{Span, StringInterner, TokenKind};

use crate::{LexError, RawToken};

/// A conversion failure that still needs its span.
pub(crate) enum ConvertError {
    IntOutOfRange(String),
}

impl ConvertError {
    pub(crate) fn with_span(self, span: Span) -> LexError {
        match self {
            ConvertError::IntOutOfRange(literal) => LexError::IntOutOfRange { literal, span },
        }
    }
}

pub(crate) fn convert_token(
    raw: RawToken,
    slice: &str,
    interner: &StringInterner,
) -> Result<TokenKind, ConvertError> {
    let kind = match raw {
        RawToken::Int => match slice.parse::<i64>() {
            Ok(n) => TokenKind::Int(n),
            Err(_) => return Err(ConvertError::IntOutOfRange(slice.to_owned())),
        },
        RawToken::Ident => TokenKind::Ident(interner.intern(slice)),

        RawToken::If => TokenKind::If,
        RawToken::Else => TokenKind::Else,
        RawToken::While => TokenKind::While,
        RawToken::Function => TokenKind::Function,
        RawToken::Var => TokenKind::Var,
        RawToken::Print => TokenKind::Print,
        RawToken::True => TokenKind::True,
        RawToken::False => TokenKind::False,
        RawToken::Null => TokenKind::Null,

        RawToken::LParen => TokenKind::LParen,
        RawToken::RParen => TokenKind::RParen,
        RawToken::LBrace => TokenKind::LBrace,
        RawToken::RBrace => TokenKind::RBrace,
        RawToken::Comma => TokenKind::Comma,
        RawToken::Semicolon => TokenKind::Semicolon,

        RawToken::Eq => TokenKind::Eq,
        RawToken::EqEq => TokenKind::EqEq,
        RawToken::Lt => TokenKind::Lt,
        RawToken::LtEq => TokenKind::LtEq,
        RawToken::Gt => TokenKind::Gt,
        RawToken::GtEq => TokenKind::GtEq,
        RawToken::Plus => TokenKind::Plus,
        RawToken::Minus => TokenKind::Minus,
        RawToken::Star => TokenKind::Star,
        RawToken::Slash => TokenKind::Slash,
        RawToken::Percent => TokenKind::Percent,

        // Trivia is filtered before conversion.
        RawToken::LineComment | RawToken::BlockComment(_) => TokenKind::Error,
    };
    Ok(kind)
}
