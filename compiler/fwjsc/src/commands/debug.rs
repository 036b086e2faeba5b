//! `lex` and `parse` commands: dump intermediate forms for inspection.

use std::fmt::Write as _;

use fwjs_diagnostic::Diagnostic;
use fwjs_ir::{dump::dump_expr, StringInterner, TokenKind};

use super::{read_file, CommandError};
use crate::reporting::report_diagnostics;

/// One token per line as `kind @ start..end`, identifiers shown by name.
pub fn dump_tokens(source: &str) -> Result<String, Vec<Diagnostic>> {
    let interner = StringInterner::new();
    let lexed = fwjs_lexer::lex(source, &interner);
    if lexed.has_errors() {
        return Err(lexed.errors.iter().map(|e| e.to_diagnostic()).collect());
    }

    let mut out = String::new();
    for token in &lexed.tokens {
        // Writing to a String cannot fail.
        let _ = match token.kind {
            TokenKind::Ident(name) => {
                writeln!(out, "Ident({}) @ {}", interner.lookup(name), token.span)
            }
            kind => writeln!(out, "{kind:?} @ {}", token.span),
        };
    }
    Ok(out)
}

/// The parsed program as an S-expression.
pub fn dump_tree(source: &str) -> Result<String, Vec<Diagnostic>> {
    let interner = StringInterner::new();
    let lexed = fwjs_lexer::lex(source, &interner);
    if lexed.has_errors() {
        return Err(lexed.errors.iter().map(|e| e.to_diagnostic()).collect());
    }

    let parsed = fwjs_parse::parse(&lexed.tokens, &interner);
    if parsed.has_errors() {
        return Err(parsed.errors.iter().map(|e| e.to_diagnostic()).collect());
    }
    Ok(dump_expr(&parsed.arena, &interner, parsed.root))
}

pub fn lex_file(path: &str) -> Result<bool, CommandError> {
    let source = read_file(path)?;
    Ok(print_or_report(path, &source, dump_tokens(&source)))
}

pub fn parse_file(path: &str) -> Result<bool, CommandError> {
    let source = read_file(path)?;
    Ok(print_or_report(path, &source, dump_tree(&source)))
}

fn print_or_report(path: &str, source: &str, dumped: Result<String, Vec<Diagnostic>>) -> bool {
    match dumped {
        Ok(text) => {
            print!("{text}");
            if !text.ends_with('\n') {
                println!();
            }
            true
        }
        Err(diagnostics) => {
            report_diagnostics(path, source, &diagnostics);
            false
        }
    }
}
