//! Diagnostic system for error reporting.
//!
//! Every phase (lexer, parser, evaluator) converts its typed errors into a
//! [`Diagnostic`]: an error code for searchability, a message saying what
//! went wrong, and a primary label saying where.

mod diagnostic;
pub mod emitter;
mod error_code;
pub mod span_utils;

pub use diagnostic::{Diagnostic, Label, Severity};
pub use error_code::ErrorCode;
