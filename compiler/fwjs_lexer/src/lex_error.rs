//! Lexer errors and their conversion to diagnostics.

use fwjs_diagnostic::{Diagnostic, ErrorCode};
use fwjs_ir::Span;

#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
pub enum LexError {
    #[error("invalid character `{found}`")]
    InvalidChar { found: char, span: Span },

    #[error("integer literal `{literal}` does not fit in 64 bits")]
    IntOutOfRange { literal: String, span: Span },

    #[error("unterminated block comment")]
    UnterminatedBlockComment { span: Span },
}

impl LexError {
    pub fn span(&self) -> Span {
        match self {
            LexError::InvalidChar { span, .. }
            | LexError::IntOutOfRange { span, .. }
            | LexError::UnterminatedBlockComment { span } => *span,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            LexError::InvalidChar { .. } => ErrorCode::E0001,
            LexError::IntOutOfRange { .. } => ErrorCode::E0002,
            LexError::UnterminatedBlockComment { .. } => ErrorCode::E0003,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(self.code()).with_message(self.to_string());
        match self {
            LexError::InvalidChar { span, .. } => diag.with_label(*span, "not valid here"),
            LexError::IntOutOfRange { span, .. } => diag
                .with_label(*span, "literal out of range")
                .with_note(format!("the largest integer is {}", i64::MAX)),
            LexError::UnterminatedBlockComment { span } => diag
                .with_label(*span, "comment starts here")
                .with_note("add `*/` to close the comment"),
        }
    }
}
