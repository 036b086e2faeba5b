//! Expression tree node types.

mod expr;
mod operators;

pub use expr::{Expr, ExprKind, Literal};
pub use operators::BinaryOp;
