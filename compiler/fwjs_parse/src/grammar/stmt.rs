//! Statements and blocks.

use fwjs_ir::{ExprId, ExprKind, Literal, TokenKind};
use fwjs_stack::ensure_sufficient_stack;

use crate::{ParseError, Parser};

impl Parser<'_> {
    pub(crate) fn parse_stat(&mut self) -> Result<ExprId, ParseError> {
        ensure_sufficient_stack(|| self.parse_stat_inner())
    }

    fn parse_stat_inner(&mut self) -> Result<ExprId, ParseError> {
        tracing::trace!(token = ?self.cursor.current_kind(), "statement");

        match self.cursor.current_kind() {
            TokenKind::If => self.parse_if(),
            TokenKind::While => self.parse_while(),
            TokenKind::Print => self.parse_print(),
            TokenKind::Semicolon => {
                let span = self.cursor.advance().span;
                Ok(self
                    .arena
                    .alloc_expr(ExprKind::Literal(Literal::Null), span))
            }
            _ => {
                let expr = self.parse_expr()?;
                self.expect_terminator()?;
                Ok(expr)
            }
        }
    }

    /// `;`, or nothing when a block or the file ends right here.
    fn expect_terminator(&mut self) -> Result<(), ParseError> {
        match self.cursor.current_kind() {
            TokenKind::Semicolon => {
                self.cursor.advance();
                Ok(())
            }
            TokenKind::RBrace | TokenKind::Eof => Ok(()),
            found => Err(ParseError::UnexpectedToken {
                expected: "`;`",
                found,
                span: self.cursor.current_span(),
            }),
        }
    }

    /// `'{' stat* '}'` or a single statement.
    pub(crate) fn parse_block(&mut self) -> Result<ExprId, ParseError> {
        if !self.cursor.check(&TokenKind::LBrace) {
            return self.parse_stat();
        }

        let open = self.cursor.advance().span;
        let mut stmts = Vec::new();
        while !self.cursor.check(&TokenKind::RBrace) && !self.cursor.is_at_end() {
            match self.parse_stat() {
                Ok(stmt) => stmts.push(stmt),
                Err(error) => self.recover(error),
            }
        }
        let close = self.cursor.expect(&TokenKind::RBrace, "`}`")?;

        Ok(self.sequence(stmts, open.merge(close)))
    }

    fn parse_if(&mut self) -> Result<ExprId, ParseError> {
        let start = self.cursor.advance().span;
        let cond = self.parse_condition()?;
        let then_branch = self.parse_block()?;

        let else_branch = if self.cursor.eat(&TokenKind::Else) {
            Some(self.parse_block()?)
        } else {
            None
        };

        let span = start.merge(self.cursor.previous_span());
        Ok(self.arena.alloc_expr(
            ExprKind::If {
                cond,
                then_branch,
                else_branch,
            },
            span,
        ))
    }

    fn parse_while(&mut self) -> Result<ExprId, ParseError> {
        let start = self.cursor.advance().span;
        let cond = self.parse_condition()?;
        let body = self.parse_block()?;

        let span = start.merge(self.cursor.previous_span());
        Ok(self.arena.alloc_expr(ExprKind::While { cond, body }, span))
    }

    fn parse_print(&mut self) -> Result<ExprId, ParseError> {
        let start = self.cursor.advance().span;
        self.cursor.expect(&TokenKind::LParen, "`(`")?;
        let inner = self.parse_expr()?;
        let close = self.cursor.expect(&TokenKind::RParen, "`)`")?;
        self.expect_terminator()?;

        Ok(self
            .arena
            .alloc_expr(ExprKind::Print(inner), start.merge(close)))
    }

    /// `'(' expr ')'` after `if` or `while`.
    fn parse_condition(&mut self) -> Result<ExprId, ParseError> {
        self.cursor.expect(&TokenKind::LParen, "`(`")?;
        let cond = self.parse_expr()?;
        self.cursor.expect(&TokenKind::RParen, "`)`")?;
        Ok(cond)
    }
}
