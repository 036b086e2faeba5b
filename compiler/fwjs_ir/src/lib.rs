//! FWJS IR - shared data types for every interpreter phase.
//!
//! # Contents
//!
//! - [`Name`] / [`StringInterner`]: interned identifiers
//! - [`Span`]: byte ranges into the source text
//! - [`Token`] / [`TokenKind`] / [`TokenList`]: lexer output
//! - [`Expr`] / [`ExprKind`] / [`ExprArena`]: the flat expression tree the
//!   parser builds and the evaluator walks
//! - [`dump`]: S-expression rendering of a tree (used by `fwjs parse`)
//!
//! The tree is immutable once built. Children are referenced by [`ExprId`]
//! indices into the arena rather than boxed pointers.

mod arena;
mod ast;
pub mod dump;
mod expr_id;
mod interner;
mod name;
mod span;
mod token;

pub use arena::ExprArena;
pub use ast::{BinaryOp, Expr, ExprKind, Literal};
pub use expr_id::{ExprId, ExprRange, ParamRange};
pub use interner::{InternError, SharedInterner, StringInterner};
pub use name::Name;
pub use span::{Span, SpanError};
pub use token::{Token, TokenKind, TokenList};
