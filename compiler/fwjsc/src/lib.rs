//! FWJS driver: runs source text through lexer, parser and evaluator, and
//! reports failures as diagnostics.
//!
//! The `fwjs` binary in `main.rs` is a thin argument parser over
//! [`commands`].

pub mod commands;
pub mod reporting;
pub mod tracing_setup;

pub use commands::{
    dump_tokens, dump_tree, evaluate_source, lex_file, parse_file, run_file, CommandError,
    EvalOutput, RunOptions,
};
pub use fwjs_eval::{ArityPolicy, Value};
