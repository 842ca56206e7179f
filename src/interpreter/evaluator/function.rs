use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        environment::{EnvRef, Environment},
        evaluator::core::{EvalResult, eval_block, eval_expression},
        value::core::Value,
    },
};

/// Evaluates a call expression.
///
/// The callee is evaluated first, then the arguments left to right; the
/// first argument that fails discards the rest. The evaluated callee must
/// be a user function or a builtin.
pub(crate) fn eval_call(callee: &Expr, arguments: &[Expr], env: &EnvRef) -> EvalResult<Value> {
    let function = eval_expression(callee, env)?;

    let mut args = Vec::with_capacity(arguments.len());
    for argument in arguments {
        args.push(eval_expression(argument, env)?);
    }

    apply_function(&function, args)
}

/// Applies a function value to already evaluated arguments.
///
/// User functions run their body in a fresh environment enclosed by the
/// environment captured at the literal, with parameters bound
/// positionally. No arity check is made: extra arguments are dropped and
/// missing parameters stay unbound, surfacing later as unresolved
/// identifiers. A `Return` from the body is unwrapped exactly once, here
/// at the call boundary.
pub fn apply_function(function: &Value, args: Vec<Value>) -> EvalResult<Value> {
    match function {
        Value::Function(function) => {
            let extended = Environment::new_enclosed(&function.env);

            for (parameter, argument) in function.parameters.iter().zip(args) {
                extended.borrow_mut().set(parameter.clone(), argument);
            }

            let result = eval_block(&function.body, &extended)?;

            Ok(match result {
                Some(Value::Return(value)) => *value,
                Some(value) => value,
                None => Value::Null,
            })
        },
        Value::Builtin(builtin) => builtin.apply(&args),
        other => Err(RuntimeError::NotAFunction { kind: other.kind(), }),
    }
}
