//! Recursive-descent parser for FWJS.
//!
//! Builds the flat expression tree in an [`ExprArena`]. Statements and
//! blocks have no node of their own: a run of statements becomes a
//! left-leaning chain of `Sequence` nodes, and an empty run becomes a
//! `null` literal.
//!
//! Errors do not stop parsing. Each failed statement is recorded and the
//! parser skips past the next `;` before trying again.

mod cursor;
mod error;
mod grammar;

use fwjs_ir::{ExprArena, ExprId, ExprKind, Literal, Span, StringInterner, TokenKind, TokenList};

use cursor::Cursor;
pub use error::ParseError;

/// Parse result: the arena, the root expression and any errors.
#[derive(Debug)]
pub struct ParseOutput {
    pub arena: ExprArena,
    pub root: ExprId,
    pub errors: Vec<ParseError>,
}

impl ParseOutput {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Parser state: a token cursor plus the arena being filled.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
    arena: ExprArena,
    errors: Vec<ParseError>,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a TokenList) -> Self {
        Parser {
            cursor: Cursor::new(tokens),
            arena: ExprArena::with_capacity(tokens.len() * 4),
            errors: Vec::new(),
        }
    }

    /// Parse a whole program.
    pub fn parse_program(mut self) -> ParseOutput {
        let mut stmts = Vec::new();

        while !self.cursor.is_at_end() {
            match self.parse_stat() {
                Ok(stmt) => stmts.push(stmt),
                Err(error) => {
                    self.recover(error);
                    // A stray `}` has no block to close at top level.
                    if self.cursor.check(&TokenKind::RBrace) {
                        self.cursor.advance();
                    }
                }
            }
        }

        let root = self.sequence(stmts, Span::point(0));
        ParseOutput {
            arena: self.arena,
            root,
            errors: self.errors,
        }
    }

    /// Record `error` and skip to the next statement boundary.
    fn recover(&mut self, error: ParseError) {
        tracing::debug!(%error, "parse error, resynchronizing");
        self.errors.push(error);
        self.synchronize();
    }

    /// Skip to just past the next `;`, or up to a `}` or end of input.
    fn synchronize(&mut self) {
        while !self.cursor.is_at_end() && !self.cursor.check(&TokenKind::RBrace) {
            if self.cursor.advance().kind == TokenKind::Semicolon {
                return;
            }
        }
    }

    /// Chain statements left to right: `s1; s2; s3` is `((s1 s2) s3)`.
    ///
    /// An empty list is a `null` literal at `empty_span`.
    fn sequence(&mut self, stmts: Vec<ExprId>, empty_span: Span) -> ExprId {
        let mut iter = stmts.into_iter();
        let Some(mut acc) = iter.next() else {
            return self
                .arena
                .alloc_expr(ExprKind::Literal(Literal::Null), empty_span);
        };
        for second in iter {
            let span = self.span_of(acc).merge(self.span_of(second));
            acc = self.arena.alloc_expr(
                ExprKind::Sequence {
                    first: acc,
                    second,
                },
                span,
            );
        }
        acc
    }

    #[inline]
    fn span_of(&self, id: ExprId) -> Span {
        self.arena.get_expr(id).span
    }
}

/// Parse a token list into an expression tree.
///
/// The interner is only consulted for trace output; identifiers arrive
/// already interned.
#[tracing::instrument(level = "debug", skip_all, fields(tokens = tokens.len()))]
pub fn parse(tokens: &TokenList, interner: &StringInterner) -> ParseOutput {
    let output = Parser::new(tokens).parse_program();
    tracing::trace!(
        tree = %fwjs_ir::dump::dump_expr(&output.arena, interner, output.root),
        "parsed"
    );
    output
}
