//! The tree-walking evaluator.
//!
//! `eval_in(id, env)` is the whole engine: one match over [`ExprKind`],
//! recursing into children left to right. Closure application lives in
//! `function_call.rs`, configuration in `builder.rs`.

mod builder;
mod function_call;

pub use builder::InterpreterBuilder;

use fwjs_ir::{ExprArena, ExprId, ExprKind, Name, Span, StringInterner};
use fwjs_stack::ensure_sufficient_stack;

use crate::errors::{already_declared, condition_not_boolean, EvalError};
use crate::{evaluate_binary, Environment, EvalResult, SharedPrintHandler, Value};

/// Default limit on nested closure applications.
pub const DEFAULT_MAX_CALL_DEPTH: usize = 10_000;

/// What happens when a call supplies fewer arguments than parameters.
///
/// Extra arguments are ignored under either policy.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum ArityPolicy {
    /// Unsupplied parameters are bound to `null`.
    #[default]
    BindNull,
    /// Too few arguments is an arity error.
    Strict,
}

/// Evaluates one expression tree.
///
/// Borrows the arena and interner; owns the global environment handle and
/// the print handler.
pub struct Interpreter<'a> {
    arena: &'a ExprArena,
    interner: &'a StringInterner,
    env: Environment,
    print_handler: SharedPrintHandler,
    max_call_depth: usize,
    arity_policy: ArityPolicy,
    call_depth: usize,
}

impl<'a> Interpreter<'a> {
    /// Interpreter with a fresh global environment and stdout printing.
    pub fn new(arena: &'a ExprArena, interner: &'a StringInterner) -> Self {
        InterpreterBuilder::new(arena, interner).build()
    }

    /// The environment `eval` runs in.
    pub fn env(&self) -> &Environment {
        &self.env
    }

    /// Current closure nesting depth; zero outside any call.
    #[cfg(test)]
    pub(crate) fn call_depth(&self) -> usize {
        self.call_depth
    }

    /// Evaluate `id` in the interpreter's own environment.
    pub fn eval(&mut self, id: ExprId) -> EvalResult {
        let env = self.env.clone();
        self.eval_in(id, &env)
    }

    /// Evaluate `id` against `env`.
    pub fn eval_in(&mut self, id: ExprId, env: &Environment) -> EvalResult {
        ensure_sufficient_stack(|| self.eval_inner(id, env))
    }

    fn eval_inner(&mut self, id: ExprId, env: &Environment) -> EvalResult {
        let expr = *self.arena.get_expr(id);

        match expr.kind {
            ExprKind::Literal(literal) => Ok(Value::from(literal)),

            ExprKind::Var(name) => Ok(env.resolve_var(name)),

            ExprKind::Print(inner) => {
                let value = self.eval_in(inner, env)?;
                self.print_handler.println(&value.to_string());
                Ok(value)
            }

            ExprKind::Binary { op, left, right } => {
                let left = self.eval_in(left, env)?;
                let right = self.eval_in(right, env)?;
                evaluate_binary(&left, &right, op).map_err(|e| e.with_span(expr.span))
            }

            ExprKind::If {
                cond,
                then_branch,
                else_branch,
            } => {
                if self.eval_condition(cond, env)? {
                    self.eval_in(then_branch, env)
                } else if let Some(else_branch) = else_branch {
                    self.eval_in(else_branch, env)
                } else {
                    Ok(Value::Null)
                }
            }

            ExprKind::While { cond, body } => {
                let mut last = Value::Null;
                while self.eval_condition(cond, env)? {
                    last = self.eval_in(body, env)?;
                }
                Ok(last)
            }

            ExprKind::Sequence { first, second } => {
                self.eval_in(first, env)?;
                self.eval_in(second, env)
            }

            ExprKind::VarDecl { name, init } => {
                let value = self.eval_in(init, env)?;
                self.declare(env, name, value.clone(), expr.span)?;
                Ok(value)
            }

            ExprKind::Assign { name, value } => {
                let value = self.eval_in(value, env)?;
                self.assign(env, name, value.clone(), expr.span)?;
                Ok(value)
            }

            ExprKind::FunctionDecl { params, body } => {
                Ok(Value::closure(params, body, env.clone()))
            }

            ExprKind::FunctionApp { callee, args } => {
                self.eval_function_app(callee, args, env, expr.span)
            }
        }
    }

    /// Evaluate a loop or branch condition, which must be a boolean.
    fn eval_condition(&mut self, cond: ExprId, env: &Environment) -> Result<bool, EvalError> {
        match self.eval_in(cond, env)? {
            Value::Bool(b) => Ok(b),
            other => {
                let span = self.arena.get_expr(cond).span;
                Err(condition_not_boolean(&other).with_span(span))
            }
        }
    }

    fn declare(
        &self,
        env: &Environment,
        name: Name,
        value: Value,
        span: Span,
    ) -> Result<(), EvalError> {
        env.create_var(name, value)
            .map_err(|e| already_declared(self.interner.lookup(e.name)).with_span(span))
    }

    /// Assignment updates a binding that currently holds a non-null value.
    /// Otherwise it declares the name in the current scope, unlike
    /// `update_var`, whose own fallback is the global scope.
    fn assign(
        &self,
        env: &Environment,
        name: Name,
        value: Value,
        span: Span,
    ) -> Result<(), EvalError> {
        // A local binding holding null is overwritten, not redeclared.
        if !env.resolve_var(name).is_null() || env.has_local(name) {
            env.update_var(name, value);
            Ok(())
        } else {
            self.declare(env, name, value, span)
        }
    }
}
