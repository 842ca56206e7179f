use std::rc::Rc;

use crate::{
    ast::{Block, Expr, Program, Statement},
    error::RuntimeError,
    interpreter::{
        environment::EnvRef,
        evaluator::builtin,
        value::core::{FunctionValue, Value},
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure. Errors propagate with `?`, so
/// the first failure anywhere in a program becomes its result.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Evaluates a whole program against the given environment.
///
/// The result is the value of the final statement, or `None` when that
/// statement produces no value (a `let` binding). A `return` encountered
/// at any nesting depth short-circuits the remaining statements and its
/// inner value becomes the program result.
///
/// # Errors
/// Returns the first `RuntimeError` raised while evaluating.
///
/// # Example
/// ```
/// use moss::{
///     interpreter::{environment::Environment, evaluator::core::eval, value::core::Value},
///     parse,
/// };
///
/// let program = parse("let a = 5; let b = a; a + b").unwrap();
/// let env = Environment::new().into_ref();
///
/// let result = eval(&program, &env).unwrap();
/// assert_eq!(result, Some(Value::Integer(10)));
/// ```
pub fn eval(program: &Program, env: &EnvRef) -> EvalResult<Option<Value>> {
    let mut result = None;

    for statement in &program.statements {
        result = eval_statement(statement, env)?;

        if let Some(Value::Return(value)) = result {
            return Ok(Some(*value));
        }
    }

    Ok(result)
}

/// Evaluates a single statement.
///
/// `let` bindings extend the environment and produce no value. `return`
/// wraps its operand in the transient `Return` value so enclosing blocks
/// keep unwinding. Expression statements produce their expression's value.
pub(crate) fn eval_statement(statement: &Statement, env: &EnvRef) -> EvalResult<Option<Value>> {
    match statement {
        Statement::Let { name, value } => {
            let value = eval_expression(value, env)?;
            env.borrow_mut().set(name.clone(), value);
            Ok(None)
        },
        Statement::Return { value } => {
            let value = eval_expression(value, env)?;
            Ok(Some(Value::Return(Box::new(value))))
        },
        Statement::Expression { expr } => eval_expression(expr, env).map(Some),
    }
}

/// Evaluates the statements of a block, in the block's own environment's
/// enclosing scope. Blocks do not open scopes of their own; only function
/// calls do, so a `let` inside an `if` branch binds in the surrounding
/// environment.
///
/// A `Return` value stays wrapped here so that every enclosing block also
/// stops; only the program root and call boundaries unwrap it.
pub(crate) fn eval_block(block: &Block, env: &EnvRef) -> EvalResult<Option<Value>> {
    let mut result = None;

    for statement in &block.statements {
        result = eval_statement(statement, env)?;

        if matches!(result, Some(Value::Return(_))) {
            return Ok(result);
        }
    }

    Ok(result)
}

/// Evaluates one expression to a value.
///
/// Expressions are total: every variant either produces a `Value` or
/// raises a `RuntimeError`. An `if` whose taken branch has no value (or
/// whose condition is falsy with no alternative) yields `Null`.
pub(crate) fn eval_expression(expr: &Expr, env: &EnvRef) -> EvalResult<Value> {
    match expr {
        Expr::Literal { value } => Ok(Value::from(value)),
        Expr::Identifier { name } => eval_identifier(name, env),
        Expr::UnaryOp { op, expr } => {
            let value = eval_expression(expr, env)?;
            super::unary::eval_unary(*op, &value)
        },
        Expr::BinaryOp { left, op, right } => {
            let left = eval_expression(left, env)?;
            let right = eval_expression(right, env)?;
            super::binary::eval_binary(*op, &left, &right)
        },
        Expr::If { condition,
                   then_branch,
                   else_branch, } => eval_if(condition, then_branch, else_branch.as_ref(), env),
        Expr::Function { parameters, body } => {
            Ok(Value::Function(Rc::new(FunctionValue { parameters: parameters.clone(),
                                                       body:       body.clone(),
                                                       env:        Rc::clone(env), })))
        },
        Expr::Call { callee, arguments } => super::function::eval_call(callee, arguments, env),
    }
}

/// Resolves a name: the environment chain first, then the builtin table.
/// User bindings therefore shadow builtins of the same name.
fn eval_identifier(name: &str, env: &EnvRef) -> EvalResult<Value> {
    if let Some(value) = env.borrow().get(name) {
        return Ok(value);
    }
    if let Some(builtin) = builtin::lookup(name) {
        return Ok(Value::Builtin(builtin));
    }
    Err(RuntimeError::IdentifierNotFound { name: name.to_string(), })
}

/// Evaluates an `if` expression. Exactly one branch runs; a falsy
/// condition with no alternative yields `Null`.
fn eval_if(condition: &Expr,
           then_branch: &Block,
           else_branch: Option<&Block>,
           env: &EnvRef)
           -> EvalResult<Value> {
    let condition = eval_expression(condition, env)?;

    let result = if condition.is_truthy() {
        eval_block(then_branch, env)?
    } else if let Some(alternative) = else_branch {
        eval_block(alternative, env)?
    } else {
        None
    };

    Ok(result.unwrap_or(Value::Null))
}
