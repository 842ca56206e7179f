use std::rc::Rc;

use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Evaluates a binary operation between two values.
///
/// The operand-kind matrix:
/// - integer × integer supports the full operator set, with comparisons
///   producing booleans;
/// - boolean × boolean supports only `==` and `!=`;
/// - string × string supports only `+`, which concatenates;
/// - operands of different kinds report `type mismatch`;
/// - any other same-kind pairing reports `unknown operator`.
///
/// # Example
/// ```
/// use moss::{
///     ast::BinaryOperator,
///     interpreter::{evaluator::binary::eval_binary, value::core::Value},
/// };
///
/// let sum = eval_binary(BinaryOperator::Add, &Value::Integer(3), &Value::Integer(4));
/// assert_eq!(sum.unwrap(), Value::Integer(7));
///
/// let cmp = eval_binary(BinaryOperator::Less, &Value::Integer(3), &Value::Integer(4));
/// assert_eq!(cmp.unwrap(), Value::Bool(true));
/// ```
pub fn eval_binary(op: BinaryOperator, left: &Value, right: &Value) -> EvalResult<Value> {
    use BinaryOperator::{Add, Equal, NotEqual};

    match (left, right) {
        (Value::Integer(l), Value::Integer(r)) => eval_integer_binary(op, *l, *r),

        (Value::Bool(l), Value::Bool(r)) => match op {
            Equal => Ok(Value::Bool(l == r)),
            NotEqual => Ok(Value::Bool(l != r)),
            _ => Err(unknown_operator(left, op, right)),
        },

        (Value::Str(l), Value::Str(r)) => match op {
            Add => Ok(Value::Str(Rc::new(format!("{l}{r}")))),
            _ => Err(unknown_operator(left, op, right)),
        },

        _ if left.kind() != right.kind() => {
            Err(RuntimeError::TypeMismatch { left:     left.kind(),
                                             operator: op,
                                             right:    right.kind(), })
        },

        _ => Err(unknown_operator(left, op, right)),
    }
}

/// Integer arithmetic and comparison. Arithmetic wraps on overflow;
/// division by zero is the one reported failure.
fn eval_integer_binary(op: BinaryOperator, left: i64, right: i64) -> EvalResult<Value> {
    use BinaryOperator::{Add, Div, Equal, Greater, Less, Mul, NotEqual, Sub};

    match op {
        Add => Ok(Value::Integer(left.wrapping_add(right))),
        Sub => Ok(Value::Integer(left.wrapping_sub(right))),
        Mul => Ok(Value::Integer(left.wrapping_mul(right))),
        Div => {
            if right == 0 {
                Err(RuntimeError::DivisionByZero)
            } else {
                Ok(Value::Integer(left.wrapping_div(right)))
            }
        },
        Less => Ok(Value::Bool(left < right)),
        Greater => Ok(Value::Bool(left > right)),
        Equal => Ok(Value::Bool(left == right)),
        NotEqual => Ok(Value::Bool(left != right)),
    }
}

const fn unknown_operator(left: &Value, op: BinaryOperator, right: &Value) -> RuntimeError {
    RuntimeError::UnknownBinaryOperator { left:     left.kind(),
                                          operator: op,
                                          right:    right.kind(), }
}
