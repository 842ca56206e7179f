use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Sums an array of integers. The empty array sums to `0`; integer
/// overflow wraps, matching the evaluator's arithmetic.
pub(super) fn sum(args: &[Value]) -> EvalResult<Value> {
    let elements = super::as_array("sum", &args[0])?;

    let mut total: i64 = 0;
    for element in elements {
        total = total.wrapping_add(integer_element(element)?);
    }

    Ok(Value::Integer(total))
}

/// Shared handler for `max` and `min` over an array of integers. The
/// empty array yields `null`.
pub(super) fn min_max(name: &'static str, args: &[Value]) -> EvalResult<Value> {
    let elements = super::as_array(name, &args[0])?;

    let Some((head, tail)) = elements.split_first() else {
        return Ok(Value::Null);
    };

    let mut extremum = integer_element(head)?;
    for element in tail {
        let candidate = integer_element(element)?;
        let better = if name == "max" { candidate > extremum } else { candidate < extremum };

        if better {
            extremum = candidate;
        }
    }

    Ok(Value::Integer(extremum))
}

fn integer_element(value: &Value) -> EvalResult<i64> {
    match value {
        Value::Integer(n) => Ok(*n),
        other => Err(RuntimeError::ElementsMustBe { expected: "INTEGER",
                                                    got:      other.kind(), }),
    }
}
