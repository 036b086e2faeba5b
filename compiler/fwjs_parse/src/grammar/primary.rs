//! Primary expressions and call suffixes.

use fwjs_ir::{ExprId, ExprKind, Literal, TokenKind};

use crate::{ParseError, Parser};

impl Parser<'_> {
    /// A primary followed by any number of `(args)` suffixes.
    pub(crate) fn parse_postfix(&mut self) -> Result<ExprId, ParseError> {
        let mut expr = self.parse_primary()?;

        while self.cursor.eat(&TokenKind::LParen) {
            let mut args = Vec::new();
            if !self.cursor.check(&TokenKind::RParen) {
                loop {
                    args.push(self.parse_expr()?);
                    if !self.cursor.eat(&TokenKind::Comma) {
                        break;
                    }
                }
            }
            let close = self.cursor.expect(&TokenKind::RParen, "`)` or `,`")?;

            let span = self.span_of(expr).merge(close);
            let args = self.arena.alloc_expr_list(args);
            expr = self
                .arena
                .alloc_expr(ExprKind::FunctionApp { callee: expr, args }, span);
        }

        Ok(expr)
    }

    fn parse_primary(&mut self) -> Result<ExprId, ParseError> {
        let token = self.cursor.current();
        let kind = match token.kind {
            TokenKind::Int(n) => ExprKind::Literal(Literal::Int(n)),
            TokenKind::True => ExprKind::Literal(Literal::Bool(true)),
            TokenKind::False => ExprKind::Literal(Literal::Bool(false)),
            TokenKind::Null => ExprKind::Literal(Literal::Null),
            TokenKind::Ident(name) => ExprKind::Var(name),
            TokenKind::LParen => {
                self.cursor.advance();
                let inner = self.parse_expr()?;
                self.cursor.expect(&TokenKind::RParen, "`)`")?;
                return Ok(inner);
            }
            TokenKind::Function => return self.parse_function(),
            found => {
                return Err(ParseError::ExpectedExpression {
                    found,
                    span: token.span,
                })
            }
        };

        self.cursor.advance();
        Ok(self.arena.alloc_expr(kind, token.span))
    }

    /// `function name? (params) block`.
    ///
    /// A named function is sugar for `var name = function (params) block`.
    fn parse_function(&mut self) -> Result<ExprId, ParseError> {
        let start = self.cursor.advance().span;

        let name = match self.cursor.current_kind() {
            TokenKind::Ident(name) => {
                self.cursor.advance();
                Some(name)
            }
            _ => None,
        };

        self.cursor.expect(&TokenKind::LParen, "`(`")?;
        let mut params = Vec::new();
        if !self.cursor.check(&TokenKind::RParen) {
            loop {
                let (param, _) = self.cursor.expect_ident()?;
                params.push(param);
                if !self.cursor.eat(&TokenKind::Comma) {
                    break;
                }
            }
        }
        self.cursor.expect(&TokenKind::RParen, "`)` or `,`")?;

        let body = self.parse_block()?;
        let span = start.merge(self.cursor.previous_span());
        let params = self.arena.alloc_params(params);
        let func = self
            .arena
            .alloc_expr(ExprKind::FunctionDecl { params, body }, span);

        Ok(match name {
            Some(name) => self
                .arena
                .alloc_expr(ExprKind::VarDecl { name, init: func }, span),
            None => func,
        })
    }
}
