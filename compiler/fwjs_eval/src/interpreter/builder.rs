//! `InterpreterBuilder` for creating configured `Interpreter` instances.

use fwjs_ir::{ExprArena, StringInterner};

use super::{ArityPolicy, Interpreter, DEFAULT_MAX_CALL_DEPTH};
use crate::{stdout_handler, Environment, SharedPrintHandler};

/// Builder for [`Interpreter`].
///
/// Defaults: a fresh global environment, stdout printing,
/// [`DEFAULT_MAX_CALL_DEPTH`] and [`ArityPolicy::BindNull`].
pub struct InterpreterBuilder<'a> {
    arena: &'a ExprArena,
    interner: &'a StringInterner,
    env: Option<Environment>,
    print_handler: Option<SharedPrintHandler>,
    max_call_depth: usize,
    arity_policy: ArityPolicy,
}

impl<'a> InterpreterBuilder<'a> {
    pub fn new(arena: &'a ExprArena, interner: &'a StringInterner) -> Self {
        Self {
            arena,
            interner,
            env: None,
            print_handler: None,
            max_call_depth: DEFAULT_MAX_CALL_DEPTH,
            arity_policy: ArityPolicy::default(),
        }
    }

    /// Evaluate in an existing environment instead of a fresh one.
    #[must_use]
    pub fn env(mut self, env: Environment) -> Self {
        self.env = Some(env);
        self
    }

    #[must_use]
    pub fn print_handler(mut self, handler: SharedPrintHandler) -> Self {
        self.print_handler = Some(handler);
        self
    }

    /// Nested applications beyond `depth` fail with a stack overflow error.
    #[must_use]
    pub fn max_call_depth(mut self, depth: usize) -> Self {
        self.max_call_depth = depth;
        self
    }

    #[must_use]
    pub fn arity_policy(mut self, policy: ArityPolicy) -> Self {
        self.arity_policy = policy;
        self
    }

    pub fn build(self) -> Interpreter<'a> {
        Interpreter {
            arena: self.arena,
            interner: self.interner,
            env: self.env.unwrap_or_else(Environment::global),
            print_handler: self.print_handler.unwrap_or_else(stdout_handler),
            max_call_depth: self.max_call_depth,
            arity_policy: self.arity_policy,
            call_depth: 0,
        }
    }
}
