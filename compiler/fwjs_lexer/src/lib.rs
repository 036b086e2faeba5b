//! Lexer for FWJS using logos with string interning.
//!
//! Whitespace and both comment forms are dropped. Every lexical error is
//! recorded as a [`LexError`] and leaves a [`TokenKind::Error`] in the
//! stream so the parser can report positions past it.

mod convert;
mod lex_error;
mod raw_token;

use fwjs_ir::{Span, StringInterner, Token, TokenKind, TokenList};
use logos::Logos;

use convert::convert_token;
pub use lex_error::LexError;
use raw_token::RawToken;

/// Tokens plus any errors met on the way.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LexOutput {
    pub tokens: TokenList,
    pub errors: Vec<LexError>,
}

impl LexOutput {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Lex source code into a `TokenList` terminated by `Eof`.
///
/// # Panics
/// Panics if the source exceeds `u32::MAX` bytes.
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn lex(source: &str, interner: &StringInterner) -> LexOutput {
    let mut output = LexOutput::default();
    let mut logos = RawToken::lexer(source);

    while let Some(token_result) = logos.next() {
        let span = Span::from_range(logos.span());
        let slice = logos.slice();

        match token_result {
            Ok(RawToken::LineComment | RawToken::BlockComment(true)) => {}
            Ok(RawToken::BlockComment(false)) => {
                // The rest of the file is comment.
                output.errors.push(LexError::UnterminatedBlockComment { span });
                break;
            }
            Ok(raw) => match convert_token(raw, slice, interner) {
                Ok(kind) => output.tokens.push(Token::new(kind, span)),
                Err(error) => {
                    output.errors.push(error.with_span(span));
                    output.tokens.push(Token::new(TokenKind::Error, span));
                }
            },
            Err(()) => {
                let found = slice.chars().next().unwrap_or('\u{FFFD}');
                output.errors.push(LexError::InvalidChar { found, span });
                output.tokens.push(Token::new(TokenKind::Error, span));
            }
        }
    }

    let eof_pos = u32::try_from(source.len())
        .unwrap_or_else(|_| panic!("source file exceeds {} bytes", u32::MAX));
    output
        .tokens
        .push(Token::new(TokenKind::Eof, Span::point(eof_pos)));

    tracing::debug!(
        tokens = output.tokens.len(),
        errors = output.errors.len(),
        "lexed"
    );
    output
}

#[cfg(test)]
mod tests;
