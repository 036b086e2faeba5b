//! The `run` command: lex, parse and evaluate one program.

use std::time::Instant;

use fwjs_diagnostic::Diagnostic;
use fwjs_eval::{
    buffer_handler, stdout_handler, InterpreterBuilder, SharedPrintHandler, Value,
};
use fwjs_ir::StringInterner;

use super::{read_file, CommandError, RunOptions};
use crate::reporting::report_diagnostics;

/// Everything one evaluation produced.
#[derive(Debug)]
pub struct EvalOutput {
    /// Lines written by `print`, in order. Empty when printing went to stdout.
    pub printed: Vec<String>,
    /// The program's value; `None` if any phase failed.
    pub value: Option<Value>,
    pub diagnostics: Vec<Diagnostic>,
}

impl EvalOutput {
    pub fn is_ok(&self) -> bool {
        self.value.is_some() && !self.diagnostics.iter().any(Diagnostic::is_error)
    }
}

/// Evaluate `source` with printing captured into [`EvalOutput::printed`].
pub fn evaluate_source(source: &str, options: &RunOptions) -> EvalOutput {
    let handler = buffer_handler();
    let (value, diagnostics) = run_pipeline(source, options, handler.clone());
    EvalOutput {
        printed: handler.lines(),
        value,
        diagnostics,
    }
}

/// Run the program at `path`, printing to stdout and reporting diagnostics
/// to stderr. Returns whether it ran to completion.
pub fn run_file(path: &str, options: &RunOptions) -> Result<bool, CommandError> {
    let source = read_file(path)?;
    let (value, diagnostics) = run_pipeline(&source, options, stdout_handler());

    report_diagnostics(path, &source, &diagnostics);

    match value {
        Some(value) => {
            if options.show_result {
                println!("=> {value}");
            }
            Ok(true)
        }
        None => Ok(false),
    }
}

/// Lex errors stop the pipeline before parsing; parse errors before
/// evaluation. Evaluation stops at the first runtime error.
fn run_pipeline(
    source: &str,
    options: &RunOptions,
    print_handler: SharedPrintHandler,
) -> (Option<Value>, Vec<Diagnostic>) {
    let interner = StringInterner::new();

    let start = Instant::now();
    let lexed = fwjs_lexer::lex(source, &interner);
    tracing::debug!(tokens = lexed.tokens.len(), elapsed = ?start.elapsed(), "lexed");
    if lexed.has_errors() {
        let diagnostics = lexed.errors.iter().map(|e| e.to_diagnostic()).collect();
        return (None, diagnostics);
    }

    let start = Instant::now();
    let parsed = fwjs_parse::parse(&lexed.tokens, &interner);
    tracing::debug!(exprs = parsed.arena.expr_count(), elapsed = ?start.elapsed(), "parsed");
    if parsed.has_errors() {
        let diagnostics = parsed.errors.iter().map(|e| e.to_diagnostic()).collect();
        return (None, diagnostics);
    }

    let mut interpreter = InterpreterBuilder::new(&parsed.arena, &interner)
        .print_handler(print_handler)
        .max_call_depth(options.max_call_depth)
        .arity_policy(options.arity_policy)
        .build();

    let start = Instant::now();
    let result = interpreter.eval(parsed.root);
    tracing::debug!(elapsed = ?start.elapsed(), ok = result.is_ok(), "evaluated");

    match result {
        Ok(value) => (Some(value), Vec::new()),
        Err(err) => (None, vec![err.to_diagnostic()]),
    }
}
