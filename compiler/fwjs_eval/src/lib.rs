//! Tree-walking evaluator for FWJS.
//!
//! # Architecture
//!
//! - [`Value`]: integers, booleans, `null` and closures
//! - [`Environment`]: the lexical scope chain, shared by closures
//! - [`Interpreter`]: evaluates an [`ExprArena`](fwjs_ir::ExprArena) tree
//!   against an environment, applying closures as it goes
//! - [`print_handler`]: where `print` output goes (stdout or a buffer)
//!
//! Evaluation is single-threaded and strictly left to right. Every failure
//! is an [`EvalError`] that aborts the run; reading an unbound variable is
//! not a failure and yields `null`.

mod environment;
pub mod errors;
mod interpreter;
mod operators;
pub mod print_handler;
mod value;

pub use environment::{AlreadyDeclared, Environment, LocalScope, Scope};
pub use errors::{ErrorCategory, EvalError, EvalErrorKind, EvalResult};
pub use interpreter::{ArityPolicy, Interpreter, InterpreterBuilder, DEFAULT_MAX_CALL_DEPTH};
pub use operators::evaluate_binary;
pub use print_handler::{
    buffer_handler, stdout_handler, BufferPrintHandler, PrintHandlerImpl, SharedPrintHandler,
    StdoutPrintHandler,
};
pub use value::{Closure, Value};

#[cfg(test)]
mod tests;
