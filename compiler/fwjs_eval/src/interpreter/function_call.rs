//! Closure application.

use fwjs_ir::{ExprId, ExprRange, Span};
use fwjs_stack::ensure_sufficient_stack;
use smallvec::SmallVec;

use super::{ArityPolicy, Interpreter};
use crate::errors::{already_declared, arity_mismatch, not_callable, stack_overflow};
use crate::{Closure, Environment, EvalResult, Value};

/// Call arguments; most calls take few enough to stay inline.
type Args = SmallVec<[Value; 4]>;

impl Interpreter<'_> {
    /// `callee(args)`: the callee first, then each argument in order, all
    /// in the caller's environment.
    pub(super) fn eval_function_app(
        &mut self,
        callee: ExprId,
        args: ExprRange,
        env: &Environment,
        span: Span,
    ) -> EvalResult {
        let arena = self.arena;

        let closure = match self.eval_in(callee, env)? {
            Value::Closure(closure) => closure,
            other => return Err(not_callable(&other).with_span(arena.get_expr(callee).span)),
        };

        let arg_ids = arena.get_expr_list(args);
        let mut values = Args::with_capacity(arg_ids.len());
        for &arg in arg_ids {
            values.push(self.eval_in(arg, env)?);
        }

        self.apply_closure(&closure, values, span)
    }

    /// Apply a function value from host code.
    pub fn call(&mut self, func: &Value, args: Vec<Value>) -> EvalResult {
        match func {
            Value::Closure(closure) => {
                self.apply_closure(closure, args.into_iter().collect(), Span::DUMMY)
            }
            other => Err(not_callable(other)),
        }
    }

    /// Bind parameters in a fresh scope under the captured environment and
    /// evaluate the body there.
    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(depth = self.call_depth, params = closure.params.len(), args = args.len())
    )]
    fn apply_closure(&mut self, closure: &Closure, args: Args, span: Span) -> EvalResult {
        if self.call_depth >= self.max_call_depth {
            return Err(stack_overflow(self.max_call_depth).with_span(span));
        }

        let arena = self.arena;
        let params = arena.get_params(closure.params);
        if args.len() < params.len() && self.arity_policy == ArityPolicy::Strict {
            return Err(arity_mismatch(params.len(), args.len()).with_span(span));
        }

        let call_env = Environment::enclosed(&closure.env);
        let mut args = args.into_iter();
        for &param in params {
            let value = args.next().unwrap_or(Value::Null);
            call_env.create_var(param, value).map_err(|e| {
                already_declared(self.interner.lookup(e.name)).with_span(span)
            })?;
        }

        self.call_depth += 1;
        let result = ensure_sufficient_stack(|| self.eval_in(closure.body, &call_env));
        self.call_depth -= 1;
        result
    }
}
