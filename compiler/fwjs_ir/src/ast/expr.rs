//! Expression nodes.
//!
//! One variant per language construct. Every construct is an expression and
//! produces a value, including `if`, `while` and sequencing.

use std::fmt;

use super::operators::BinaryOp;
use crate::{ExprId, ExprRange, Name, ParamRange, Span};

/// Expression node: a kind plus the source span it was parsed from.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

impl Expr {
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Expr { kind, span }
    }
}

impl fmt::Debug for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {:?}", self.kind, self.span)
    }
}

/// Constant embedded in the tree.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Literal {
    Int(i64),
    Bool(bool),
    Null,
}

/// Expression variants.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ExprKind {
    /// Constant value.
    Literal(Literal),

    /// Variable reference; unbound names read as `null`.
    Var(Name),

    /// `print(expr)`: emits the value and evaluates to it.
    Print(ExprId),

    /// `left op right`, both sides always evaluated left to right.
    Binary {
        op: BinaryOp,
        left: ExprId,
        right: ExprId,
    },

    /// `if (cond) then else`; without an else branch a false condition yields `null`.
    If {
        cond: ExprId,
        then_branch: ExprId,
        else_branch: Option<ExprId>,
    },

    /// `while (cond) body`; yields the last body value or `null`.
    While { cond: ExprId, body: ExprId },

    /// `first; second`; yields `second`.
    Sequence { first: ExprId, second: ExprId },

    /// `var name = init`: declares in the current scope.
    VarDecl { name: Name, init: ExprId },

    /// `name = value`: updates an existing binding or declares a new one.
    Assign { name: Name, value: ExprId },

    /// `function (params) body`: evaluates to a closure.
    FunctionDecl { params: ParamRange, body: ExprId },

    /// `callee(args)`.
    FunctionApp { callee: ExprId, args: ExprRange },
}
