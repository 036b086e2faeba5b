//! Runtime values.

#![expect(
    clippy::disallowed_types,
    reason = "Rc is the implementation of shared closures"
)]

use std::fmt;
use std::rc::Rc;

use fwjs_ir::{ExprId, Literal, ParamRange};

use crate::Environment;

/// A runtime value.
///
/// Cloning is cheap: closures are reference counted.
#[derive(Clone)]
pub enum Value {
    Int(i64),
    Bool(bool),
    /// Result of unbound reads and of control flow that took no branch.
    Null,
    Closure(Rc<Closure>),
}

/// A function value: parameters and body in the tree, plus the
/// environment that was current when the function expression ran.
///
/// The environment is shared, not copied. Later assignments in the
/// declaring scope are visible when the closure is applied.
pub struct Closure {
    pub params: ParamRange,
    pub body: ExprId,
    pub env: Environment,
}

impl Value {
    pub fn closure(params: ParamRange, body: ExprId, env: Environment) -> Self {
        Value::Closure(Rc::new(Closure { params, body, env }))
    }

    /// Kind name used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "integer",
            Value::Bool(_) => "boolean",
            Value::Null => "null",
            Value::Closure(_) => "function",
        }
    }

    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl From<Literal> for Value {
    fn from(literal: Literal) -> Self {
        match literal {
            Literal::Int(n) => Value::Int(n),
            Literal::Bool(b) => Value::Bool(b),
            Literal::Null => Value::Null,
        }
    }
}

/// Closures are equal only to themselves.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Null, Value::Null) => true,
            (Value::Closure(a), Value::Closure(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{n}"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Null => f.write_str("null"),
            Value::Closure(c) => write!(f, "<function/{}>", c.params.len()),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "Int({n})"),
            Value::Bool(b) => write!(f, "Bool({b})"),
            Value::Null => f.write_str("Null"),
            Value::Closure(c) => c.fmt(f),
        }
    }
}

// The captured environment may contain this closure; never print it.
impl fmt::Debug for Closure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Closure")
            .field("params", &self.params)
            .field("body", &self.body)
            .finish_non_exhaustive()
    }
}
