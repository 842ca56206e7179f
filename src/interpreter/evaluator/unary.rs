use crate::{
    ast::UnaryOperator,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Evaluates a unary operation on a value.
///
/// Supported operators:
/// - `Not`: truthiness negation. `!true` is `false`, `!null` is `true`,
///   and any other value, including `0`, negates to `false`.
/// - `Negate`: integer negation only; any other operand kind reports
///   `unknown operator`.
///
/// # Example
/// ```
/// use moss::{
///     ast::UnaryOperator,
///     interpreter::{evaluator::unary::eval_unary, value::core::Value},
/// };
///
/// let negated = eval_unary(UnaryOperator::Negate, &Value::Integer(5)).unwrap();
/// assert_eq!(negated, Value::Integer(-5));
///
/// let truthy = eval_unary(UnaryOperator::Not, &Value::Null).unwrap();
/// assert_eq!(truthy, Value::Bool(true));
/// ```
pub fn eval_unary(op: UnaryOperator, value: &Value) -> EvalResult<Value> {
    match op {
        UnaryOperator::Not => Ok(Value::Bool(!value.is_truthy())),
        UnaryOperator::Negate => match value {
            Value::Integer(n) => Ok(Value::Integer(n.wrapping_neg())),
            other => Err(RuntimeError::UnknownUnaryOperator { operator: op,
                                                             operand:  other.kind(), }),
        },
    }
}
