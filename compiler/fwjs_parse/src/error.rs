//! Parse error types.

use fwjs_diagnostic::{Diagnostic, ErrorCode};
use fwjs_ir::{Span, TokenKind};

#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
pub enum ParseError {
    /// A specific token was required here.
    #[error("expected {expected}, found {}", .found.display_name())]
    UnexpectedToken {
        expected: &'static str,
        found: TokenKind,
        span: Span,
    },

    #[error("expected expression, found {}", .found.display_name())]
    ExpectedExpression { found: TokenKind, span: Span },

    #[error("expected identifier, found {}", .found.display_name())]
    ExpectedIdentifier { found: TokenKind, span: Span },
}

impl ParseError {
    pub fn span(&self) -> Span {
        match self {
            ParseError::UnexpectedToken { span, .. }
            | ParseError::ExpectedExpression { span, .. }
            | ParseError::ExpectedIdentifier { span, .. } => *span,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            ParseError::UnexpectedToken { .. } => ErrorCode::E1001,
            ParseError::ExpectedExpression { .. } => ErrorCode::E1002,
            ParseError::ExpectedIdentifier { .. } => ErrorCode::E1003,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let label = match self {
            ParseError::UnexpectedToken { expected, .. } => format!("expected {expected} here"),
            ParseError::ExpectedExpression { .. } => "expected expression".to_string(),
            ParseError::ExpectedIdentifier { .. } => "expected a name".to_string(),
        };
        let diag = Diagnostic::error(self.code())
            .with_message(self.to_string())
            .with_label(self.span(), label);

        match self {
            ParseError::UnexpectedToken {
                expected: "`;`", ..
            } => diag.with_note("statements end with `;` unless they close a block"),
            _ => diag,
        }
    }
}
