use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Joins an array's elements into one string with the given delimiter.
/// Non-string elements contribute their inspect rendering.
pub(super) fn join(args: &[Value]) -> EvalResult<Value> {
    let elements = super::as_array("join", &args[0])?;
    let delimiter = as_string("join", &args[1])?;

    let parts: Vec<String> = elements.iter().map(ToString::to_string).collect();

    Ok(Value::from(parts.join(delimiter).as_str()))
}

/// Splits a string around a delimiter into an array of strings. An empty
/// delimiter splits into single characters.
pub(super) fn split(args: &[Value]) -> EvalResult<Value> {
    let text = as_string("split", &args[0])?;
    let delimiter = as_string("split", &args[1])?;

    let parts: Vec<Value> = if delimiter.is_empty() {
        text.chars().map(|c| Value::from(c.to_string().as_str())).collect()
    } else {
        text.split(delimiter).map(Value::from).collect()
    };

    Ok(Value::from(parts))
}

/// Shared handler for `upper` and `lower`.
pub(super) fn convert_case(name: &'static str, args: &[Value]) -> EvalResult<Value> {
    let text = as_string(name, &args[0])?;

    let converted = if name == "upper" { text.to_uppercase() } else { text.to_lowercase() };

    Ok(Value::from(converted.as_str()))
}

fn as_string<'a>(function: &'static str, value: &'a Value) -> EvalResult<&'a str> {
    match value {
        Value::Str(text) => Ok(text.as_str()),
        other => Err(RuntimeError::ArgumentMustBe { function,
                                                    expected: "STRING",
                                                    got: other.kind(), }),
    }
}
