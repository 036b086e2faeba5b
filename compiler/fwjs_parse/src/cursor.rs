//! Token cursor for navigating the token stream.

use std::mem;

use fwjs_ir::{Name, Span, Token, TokenKind, TokenList};

use crate::ParseError;

/// Position in a `TokenList`.
///
/// Invariant: the list ends with `Eof` and the cursor never moves past it,
/// so `current()` always has a token to return.
pub(crate) struct Cursor<'a> {
    tokens: &'a [Token],
    pos: usize,
}

const EOF: Token = Token {
    kind: TokenKind::Eof,
    span: Span::DUMMY,
};

impl<'a> Cursor<'a> {
    pub(crate) fn new(tokens: &'a TokenList) -> Self {
        Cursor {
            tokens: tokens.as_slice(),
            pos: 0,
        }
    }

    #[inline]
    pub(crate) fn current(&self) -> Token {
        self.tokens.get(self.pos).copied().unwrap_or(EOF)
    }

    #[inline]
    pub(crate) fn current_kind(&self) -> TokenKind {
        self.current().kind
    }

    #[inline]
    pub(crate) fn current_span(&self) -> Span {
        self.current().span
    }

    pub(crate) fn previous_span(&self) -> Span {
        self.pos
            .checked_sub(1)
            .and_then(|i| self.tokens.get(i))
            .map_or(Span::DUMMY, |t| t.span)
    }

    /// One-token lookahead.
    pub(crate) fn peek_next_kind(&self) -> TokenKind {
        self.tokens
            .get(self.pos + 1)
            .map_or(TokenKind::Eof, |t| t.kind)
    }

    #[inline]
    pub(crate) fn is_at_end(&self) -> bool {
        matches!(self.current_kind(), TokenKind::Eof)
    }

    /// Compare discriminants only, so `Int(0)` checks against any `Int`.
    #[inline]
    pub(crate) fn check(&self, kind: &TokenKind) -> bool {
        mem::discriminant(&self.current_kind()) == mem::discriminant(kind)
    }

    /// Consume the current token. `Eof` is never consumed.
    pub(crate) fn advance(&mut self) -> Token {
        let token = self.current();
        if !self.is_at_end() {
            self.pos += 1;
        }
        token
    }

    pub(crate) fn eat(&mut self, kind: &TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consume `kind` or fail with `expected` as the description.
    pub(crate) fn expect(
        &mut self,
        kind: &TokenKind,
        expected: &'static str,
    ) -> Result<Span, ParseError> {
        if self.check(kind) {
            Ok(self.advance().span)
        } else {
            let token = self.current();
            Err(ParseError::UnexpectedToken {
                expected,
                found: token.kind,
                span: token.span,
            })
        }
    }

    pub(crate) fn expect_ident(&mut self) -> Result<(Name, Span), ParseError> {
        let token = self.current();
        match token.kind {
            TokenKind::Ident(name) => {
                self.advance();
                Ok((name, token.span))
            }
            found => Err(ParseError::ExpectedIdentifier {
                found,
                span: token.span,
            }),
        }
    }
}
