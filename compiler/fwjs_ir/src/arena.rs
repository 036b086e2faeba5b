//! Arena allocation for the flat expression tree.
//!
//! - Contiguous storage for all expressions of one program
//! - Child references use `ExprId` indices
//! - Call arguments and parameter lists are ranges into side tables

use crate::{Expr, ExprId, ExprKind, ExprRange, Name, ParamRange, Span};

/// Contiguous storage for every expression of a program.
///
/// Built once by the parser and only read afterwards; closures keep
/// `ExprId`s into it, so it must outlive evaluation.
#[derive(Clone, Default, PartialEq, Eq, Debug)]
pub struct ExprArena {
    /// All expressions (indexed by `ExprId`).
    exprs: Vec<Expr>,

    /// Flattened call argument lists.
    expr_lists: Vec<ExprId>,

    /// Flattened function parameter lists.
    params: Vec<Name>,
}

fn to_u32(len: usize, what: &str) -> u32 {
    u32::try_from(len).unwrap_or_else(|_| panic!("{what} table exceeds u32::MAX entries"))
}

impl ExprArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with capacity estimated from source size.
    /// Heuristic: ~1 expression per 4 bytes of source.
    pub fn with_capacity(source_len: usize) -> Self {
        ExprArena {
            exprs: Vec::with_capacity(source_len / 4),
            expr_lists: Vec::new(),
            params: Vec::new(),
        }
    }

    // ===== Expression allocation =====

    /// Allocate an expression, returning its ID.
    #[inline]
    pub fn alloc_expr(&mut self, kind: ExprKind, span: Span) -> ExprId {
        let id = ExprId::new(to_u32(self.exprs.len(), "expression"));
        self.exprs.push(Expr::new(kind, span));
        id
    }

    /// Get an expression by ID.
    ///
    /// # Panics
    /// Panics if `id` did not come from this arena.
    #[inline]
    #[track_caller]
    pub fn get_expr(&self, id: ExprId) -> &Expr {
        &self.exprs[id.index()]
    }

    /// Number of allocated expressions.
    #[inline]
    pub fn expr_count(&self) -> usize {
        self.exprs.len()
    }

    // ===== Lists =====

    /// Store an argument list, returning its range.
    pub fn alloc_expr_list(&mut self, ids: impl IntoIterator<Item = ExprId>) -> ExprRange {
        let start = to_u32(self.expr_lists.len(), "argument");
        self.expr_lists.extend(ids);
        let len = to_u32(self.expr_lists.len(), "argument") - start;
        ExprRange::new(start, len)
    }

    #[inline]
    #[track_caller]
    pub fn get_expr_list(&self, range: ExprRange) -> &[ExprId] {
        &self.expr_lists[range.to_range()]
    }

    /// Store a parameter list, returning its range.
    pub fn alloc_params(&mut self, names: impl IntoIterator<Item = Name>) -> ParamRange {
        let start = to_u32(self.params.len(), "parameter");
        self.params.extend(names);
        let len = to_u32(self.params.len(), "parameter") - start;
        ParamRange::new(start, len)
    }

    #[inline]
    #[track_caller]
    pub fn get_params(&self, range: ParamRange) -> &[Name] {
        &self.params[range.to_range()]
    }
}
