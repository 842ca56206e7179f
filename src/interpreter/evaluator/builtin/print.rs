use crate::interpreter::{evaluator::core::EvalResult, value::core::Value};

/// Prints every argument's inspect rendering, space separated, followed by
/// a newline. Accepts any number of arguments and returns `null`.
#[allow(clippy::unnecessary_wraps)]
pub(super) fn puts(args: &[Value]) -> EvalResult<Value> {
    let line = args.iter().map(ToString::to_string).collect::<Vec<_>>().join(" ");
    println!("{line}");

    Ok(Value::Null)
}
