//! S-expression rendering of an expression tree.
//!
//! ```text
//! var x = 1; print(x + 2);
//! => (seq (var x 1) (print (+ x 2)))
//! ```

use std::fmt::{self, Write};

use crate::{ExprArena, ExprId, ExprKind, Literal, StringInterner};

/// Render the tree rooted at `root` as a single-line S-expression.
pub fn dump_expr(arena: &ExprArena, interner: &StringInterner, root: ExprId) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_expr(&mut out, arena, interner, root);
    out
}

fn write_expr(
    out: &mut String,
    arena: &ExprArena,
    interner: &StringInterner,
    id: ExprId,
) -> fmt::Result {
    match arena.get_expr(id).kind {
        ExprKind::Literal(Literal::Int(n)) => write!(out, "{n}"),
        ExprKind::Literal(Literal::Bool(b)) => write!(out, "{b}"),
        ExprKind::Literal(Literal::Null) => out.write_str("null"),
        ExprKind::Var(name) => out.write_str(interner.lookup(name)),
        ExprKind::Print(inner) => {
            out.write_str("(print ")?;
            write_expr(out, arena, interner, inner)?;
            out.write_char(')')
        }
        ExprKind::Binary { op, left, right } => {
            write!(out, "({} ", op.as_symbol())?;
            write_expr(out, arena, interner, left)?;
            out.write_char(' ')?;
            write_expr(out, arena, interner, right)?;
            out.write_char(')')
        }
        ExprKind::If {
            cond,
            then_branch,
            else_branch,
        } => {
            out.write_str("(if ")?;
            write_expr(out, arena, interner, cond)?;
            out.write_char(' ')?;
            write_expr(out, arena, interner, then_branch)?;
            if let Some(else_branch) = else_branch {
                out.write_char(' ')?;
                write_expr(out, arena, interner, else_branch)?;
            }
            out.write_char(')')
        }
        ExprKind::While { cond, body } => {
            out.write_str("(while ")?;
            write_expr(out, arena, interner, cond)?;
            out.write_char(' ')?;
            write_expr(out, arena, interner, body)?;
            out.write_char(')')
        }
        ExprKind::Sequence { first, second } => {
            out.write_str("(seq ")?;
            write_expr(out, arena, interner, first)?;
            out.write_char(' ')?;
            write_expr(out, arena, interner, second)?;
            out.write_char(')')
        }
        ExprKind::VarDecl { name, init } => {
            write!(out, "(var {} ", interner.lookup(name))?;
            write_expr(out, arena, interner, init)?;
            out.write_char(')')
        }
        ExprKind::Assign { name, value } => {
            write!(out, "(= {} ", interner.lookup(name))?;
            write_expr(out, arena, interner, value)?;
            out.write_char(')')
        }
        ExprKind::FunctionDecl { params, body } => {
            out.write_str("(function (")?;
            for (i, param) in arena.get_params(params).iter().enumerate() {
                if i > 0 {
                    out.write_char(' ')?;
                }
                out.write_str(interner.lookup(*param))?;
            }
            out.write_str(") ")?;
            write_expr(out, arena, interner, body)?;
            out.write_char(')')
        }
        ExprKind::FunctionApp { callee, args } => {
            out.write_str("(call ")?;
            write_expr(out, arena, interner, callee)?;
            for arg in arena.get_expr_list(args) {
                out.write_char(' ')?;
                write_expr(out, arena, interner, *arg)?;
            }
            out.write_char(')')
        }
    }
}
