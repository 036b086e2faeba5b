//! Binary operator evaluation.
//!
//! Every operator requires two integers. Arithmetic is checked; `/` and `%`
//! truncate toward zero.

use fwjs_ir::BinaryOp;

use crate::errors::{
    division_by_zero, integer_overflow, modulo_by_zero, operand_not_integer, EvalResult,
};
use crate::Value;

pub fn evaluate_binary(left: &Value, right: &Value, op: BinaryOp) -> EvalResult {
    let (Value::Int(a), Value::Int(b)) = (left, right) else {
        return Err(operand_not_integer(op.as_symbol(), left, right));
    };
    let (a, b) = (*a, *b);

    match op {
        BinaryOp::Add => checked(a.checked_add(b), "addition"),
        BinaryOp::Sub => checked(a.checked_sub(b), "subtraction"),
        BinaryOp::Mul => checked(a.checked_mul(b), "multiplication"),
        BinaryOp::Div => {
            if b == 0 {
                Err(division_by_zero())
            } else {
                checked(a.checked_div(b), "division")
            }
        }
        BinaryOp::Mod => {
            if b == 0 {
                Err(modulo_by_zero())
            } else {
                // i64::MIN % -1 is 0; only the quotient overflows.
                Ok(Value::Int(a.wrapping_rem(b)))
            }
        }
        BinaryOp::Gt => Ok(Value::Bool(a > b)),
        BinaryOp::GtEq => Ok(Value::Bool(a >= b)),
        BinaryOp::Lt => Ok(Value::Bool(a < b)),
        BinaryOp::LtEq => Ok(Value::Bool(a <= b)),
        BinaryOp::Eq => Ok(Value::Bool(a == b)),
    }
}

fn checked(result: Option<i64>, operation: &'static str) -> EvalResult {
    result.map(Value::Int).ok_or_else(|| integer_overflow(operation))
}
