//! Evaluation errors.
//!
//! Every failure aborts the run. Factory functions build the error without
//! a span; the interpreter attaches the span of the node that failed.

use fwjs_diagnostic::{Diagnostic, ErrorCode};
use fwjs_ir::Span;

use crate::Value;

/// Result of evaluating an expression.
pub type EvalResult = Result<Value, EvalError>;

/// Broad failure class.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// A value of the wrong kind reached an operation.
    Type,
    /// Division or remainder by zero, or overflow.
    Arithmetic,
    /// A name declared twice in one scope.
    Scope,
    /// Too few arguments under the strict arity policy.
    Arity,
    /// The call depth limit was hit.
    Resource,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EvalErrorKind {
    #[error("condition must be a boolean, found {found}")]
    ConditionNotBoolean { found: &'static str },

    #[error("operator `{op}` expects two integers, found {left} and {right}")]
    OperandNotInteger {
        op: &'static str,
        left: &'static str,
        right: &'static str,
    },

    #[error("{found} is not a function")]
    NotCallable { found: &'static str },

    #[error("division by zero")]
    DivisionByZero,

    #[error("modulo by zero")]
    ModuloByZero,

    #[error("integer overflow in {operation}")]
    IntegerOverflow { operation: &'static str },

    #[error("`{name}` is already declared in this scope")]
    AlreadyDeclared { name: String },

    #[error("function takes {expected} parameters but {got} arguments were supplied")]
    ArityMismatch { expected: usize, got: usize },

    #[error("maximum call depth of {limit} exceeded")]
    StackOverflow { limit: usize },
}

impl EvalErrorKind {
    pub fn category(&self) -> ErrorCategory {
        match self {
            EvalErrorKind::ConditionNotBoolean { .. }
            | EvalErrorKind::OperandNotInteger { .. }
            | EvalErrorKind::NotCallable { .. } => ErrorCategory::Type,
            EvalErrorKind::DivisionByZero
            | EvalErrorKind::ModuloByZero
            | EvalErrorKind::IntegerOverflow { .. } => ErrorCategory::Arithmetic,
            EvalErrorKind::AlreadyDeclared { .. } => ErrorCategory::Scope,
            EvalErrorKind::ArityMismatch { .. } => ErrorCategory::Arity,
            EvalErrorKind::StackOverflow { .. } => ErrorCategory::Resource,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            EvalErrorKind::ConditionNotBoolean { .. } => ErrorCode::E6001,
            EvalErrorKind::OperandNotInteger { .. } => ErrorCode::E6002,
            EvalErrorKind::NotCallable { .. } => ErrorCode::E6003,
            EvalErrorKind::DivisionByZero => ErrorCode::E6010,
            EvalErrorKind::ModuloByZero => ErrorCode::E6011,
            EvalErrorKind::IntegerOverflow { .. } => ErrorCode::E6012,
            EvalErrorKind::AlreadyDeclared { .. } => ErrorCode::E6020,
            EvalErrorKind::ArityMismatch { .. } => ErrorCode::E6030,
            EvalErrorKind::StackOverflow { .. } => ErrorCode::E6040,
        }
    }

    fn label(&self) -> &'static str {
        match self {
            EvalErrorKind::ConditionNotBoolean { .. } => "this condition",
            EvalErrorKind::OperandNotInteger { .. } => "in this operation",
            EvalErrorKind::NotCallable { .. } => "called here",
            EvalErrorKind::DivisionByZero | EvalErrorKind::ModuloByZero => "divisor is zero",
            EvalErrorKind::IntegerOverflow { .. } => "result does not fit in 64 bits",
            EvalErrorKind::AlreadyDeclared { .. } => "declared again here",
            EvalErrorKind::ArityMismatch { .. } => "in this call",
            EvalErrorKind::StackOverflow { .. } => "while making this call",
        }
    }
}

/// Evaluation error.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct EvalError {
    pub kind: EvalErrorKind,
    /// Equals `kind.to_string()` for factory-built errors.
    pub message: String,
    /// Node that failed, if known.
    pub span: Option<Span>,
}

impl EvalError {
    fn from_kind(kind: EvalErrorKind) -> Self {
        let message = kind.to_string();
        EvalError {
            kind,
            message,
            span: None,
        }
    }

    #[must_use]
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }

    pub fn category(&self) -> ErrorCategory {
        self.kind.category()
    }

    pub fn code(&self) -> ErrorCode {
        self.kind.code()
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let mut diag = Diagnostic::error(self.code()).with_message(self.message.clone());
        if let Some(span) = self.span {
            diag = diag.with_label(span, self.kind.label());
        }
        match &self.kind {
            EvalErrorKind::AlreadyDeclared { name } => {
                diag.with_note(format!("use `{name} = ...` to assign to the existing binding"))
            }
            EvalErrorKind::StackOverflow { .. } => {
                diag.with_note("recursion went deeper than the configured call depth limit")
            }
            _ => diag,
        }
    }
}

#[cold]
pub fn condition_not_boolean(found: &Value) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ConditionNotBoolean {
        found: found.type_name(),
    })
}

#[cold]
pub fn operand_not_integer(op: &'static str, left: &Value, right: &Value) -> EvalError {
    EvalError::from_kind(EvalErrorKind::OperandNotInteger {
        op,
        left: left.type_name(),
        right: right.type_name(),
    })
}

#[cold]
pub fn not_callable(found: &Value) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NotCallable {
        found: found.type_name(),
    })
}

#[cold]
pub fn division_by_zero() -> EvalError {
    EvalError::from_kind(EvalErrorKind::DivisionByZero)
}

#[cold]
pub fn modulo_by_zero() -> EvalError {
    EvalError::from_kind(EvalErrorKind::ModuloByZero)
}

#[cold]
pub fn integer_overflow(operation: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::IntegerOverflow { operation })
}

#[cold]
pub fn already_declared(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::AlreadyDeclared {
        name: name.to_string(),
    })
}

#[cold]
pub fn arity_mismatch(expected: usize, got: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ArityMismatch { expected, got })
}

#[cold]
pub fn stack_overflow(limit: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::StackOverflow { limit })
}

#[cfg(test)]
mod tests;
