use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Returns the element count of an array or the byte length of a string.
/// Any other argument kind is unsupported.
#[allow(clippy::cast_possible_wrap)]
pub(super) fn len(args: &[Value]) -> EvalResult<Value> {
    match &args[0] {
        Value::Array(elements) => Ok(Value::Integer(elements.len() as i64)),
        Value::Str(text) => Ok(Value::Integer(text.len() as i64)),
        other => Err(RuntimeError::ArgumentNotSupported { function: "len",
                                                         got:      other.kind(), }),
    }
}

/// Returns the first element of an array, or `null` when it is empty.
pub(super) fn first(args: &[Value]) -> EvalResult<Value> {
    let elements = super::as_array("first", &args[0])?;

    Ok(elements.first().cloned().unwrap_or(Value::Null))
}

/// Returns the last element of an array, or `null` when it is empty.
pub(super) fn last(args: &[Value]) -> EvalResult<Value> {
    let elements = super::as_array("last", &args[0])?;

    Ok(elements.last().cloned().unwrap_or(Value::Null))
}

/// Returns a new array with everything but the head, or `null` when the
/// input is empty. The input array is untouched.
pub(super) fn rest(args: &[Value]) -> EvalResult<Value> {
    let elements = super::as_array("rest", &args[0])?;

    if elements.is_empty() {
        return Ok(Value::Null);
    }

    Ok(Value::from(elements[1..].to_vec()))
}

/// Returns a new array with the second argument appended. The input array
/// is untouched.
pub(super) fn push(args: &[Value]) -> EvalResult<Value> {
    let elements = super::as_array("push", &args[0])?;

    let mut extended = elements.to_vec();
    extended.push(args[1].clone());

    Ok(Value::from(extended))
}

/// Returns the last element of a non-empty array. The element is not
/// removed; the input array keeps its length.
pub(super) fn pop(args: &[Value]) -> EvalResult<Value> {
    let elements = super::as_array("pop", &args[0])?;

    elements.last().cloned().ok_or(RuntimeError::PopFromEmptyArray)
}
