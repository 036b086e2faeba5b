//! Expressions: declaration, assignment and binary operators.
//!
//! Precedence, loosest first: comparison, additive, multiplicative.
//! All binary levels are left-associative.

use fwjs_ir::{BinaryOp, ExprId, ExprKind, TokenKind};
use fwjs_stack::ensure_sufficient_stack;

use crate::{ParseError, Parser};

impl Parser<'_> {
    pub(crate) fn parse_expr(&mut self) -> Result<ExprId, ParseError> {
        ensure_sufficient_stack(|| self.parse_expr_inner())
    }

    fn parse_expr_inner(&mut self) -> Result<ExprId, ParseError> {
        match self.cursor.current_kind() {
            TokenKind::Var => {
                let start = self.cursor.advance().span;
                let (name, _) = self.cursor.expect_ident()?;
                self.cursor.expect(&TokenKind::Eq, "`=`")?;
                let init = self.parse_expr()?;
                let span = start.merge(self.span_of(init));
                Ok(self.arena.alloc_expr(ExprKind::VarDecl { name, init }, span))
            }
            TokenKind::Ident(name) if self.cursor.peek_next_kind() == TokenKind::Eq => {
                let start = self.cursor.advance().span;
                self.cursor.advance();
                let value = self.parse_expr()?;
                let span = start.merge(self.span_of(value));
                Ok(self.arena.alloc_expr(ExprKind::Assign { name, value }, span))
            }
            _ => self.parse_comparison(),
        }
    }

    fn parse_comparison(&mut self) -> Result<ExprId, ParseError> {
        self.parse_binary_level(Self::parse_additive, Self::match_comparison_op)
    }

    fn parse_additive(&mut self) -> Result<ExprId, ParseError> {
        self.parse_binary_level(Self::parse_multiplicative, Self::match_additive_op)
    }

    fn parse_multiplicative(&mut self) -> Result<ExprId, ParseError> {
        self.parse_binary_level(Self::parse_postfix, Self::match_multiplicative_op)
    }

    /// `operand (op operand)*`, folded to the left.
    fn parse_binary_level(
        &mut self,
        operand: fn(&mut Self) -> Result<ExprId, ParseError>,
        match_op: fn(&Self) -> Option<BinaryOp>,
    ) -> Result<ExprId, ParseError> {
        let mut left = operand(self)?;

        while let Some(op) = match_op(self) {
            self.cursor.advance();
            let right = operand(self)?;

            let span = self.span_of(left).merge(self.span_of(right));
            left = self
                .arena
                .alloc_expr(ExprKind::Binary { op, left, right }, span);
        }

        Ok(left)
    }

    fn match_comparison_op(&self) -> Option<BinaryOp> {
        match self.cursor.current_kind() {
            TokenKind::EqEq => Some(BinaryOp::Eq),
            TokenKind::Lt => Some(BinaryOp::Lt),
            TokenKind::LtEq => Some(BinaryOp::LtEq),
            TokenKind::Gt => Some(BinaryOp::Gt),
            TokenKind::GtEq => Some(BinaryOp::GtEq),
            _ => None,
        }
    }

    fn match_additive_op(&self) -> Option<BinaryOp> {
        match self.cursor.current_kind() {
            TokenKind::Plus => Some(BinaryOp::Add),
            TokenKind::Minus => Some(BinaryOp::Sub),
            _ => None,
        }
    }

    fn match_multiplicative_op(&self) -> Option<BinaryOp> {
        match self.cursor.current_kind() {
            TokenKind::Star => Some(BinaryOp::Mul),
            TokenKind::Slash => Some(BinaryOp::Div),
            TokenKind::Percent => Some(BinaryOp::Mod),
            _ => None,
        }
    }
}
