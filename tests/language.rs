use moss::{
    error::RuntimeError,
    interpreter::{
        environment::{EnvRef, Environment},
        evaluator::core::eval,
        value::core::Value,
    },
    parse,
};

fn run_in(source: &str, env: &EnvRef) -> Result<Option<Value>, RuntimeError> {
    let program =
        parse(source).unwrap_or_else(|errors| panic!("parse failed for {source:?}: {errors:?}"));
    eval(&program, env)
}

fn run(source: &str) -> Result<Option<Value>, RuntimeError> {
    run_in(source, &Environment::new().into_ref())
}

fn eval_value(source: &str) -> Value {
    run(source).expect("evaluation failed").expect("no value produced")
}

fn eval_value_in(source: &str, env: &EnvRef) -> Value {
    run_in(source, env).expect("evaluation failed").expect("no value produced")
}

fn assert_int(source: &str, expected: i64) {
    assert_eq!(eval_value(source), Value::Integer(expected), "source: {source}");
}

fn assert_bool(source: &str, expected: bool) {
    assert_eq!(eval_value(source), Value::Bool(expected), "source: {source}");
}

fn assert_null(source: &str) {
    assert_eq!(eval_value(source), Value::Null, "source: {source}");
}

fn assert_error(source: &str, message: &str) {
    assert_error_in(source, &Environment::new().into_ref(), message);
}

fn assert_error_in(source: &str, env: &EnvRef, message: &str) {
    match run_in(source, env) {
        Err(error) => assert_eq!(error.to_string(), message, "source: {source}"),
        Ok(value) => panic!("expected error for {source:?}, got {value:?}"),
    }
}

/// An environment pre-seeded with string and array values, which have no
/// literal syntax in the language itself.
fn seeded_env() -> EnvRef {
    let env = Environment::new().into_ref();
    {
        let mut env = env.borrow_mut();
        env.set("greeting".to_string(), Value::from("hello"));
        env.set("shout".to_string(), Value::from("HELLO"));
        env.set("csv".to_string(), Value::from("a,b,c"));
        env.set("comma".to_string(), Value::from(","));
        env.set("blank".to_string(), Value::from(""));
        env.set("xs".to_string(),
                Value::from(vec![Value::Integer(1), Value::Integer(2), Value::Integer(3)]));
        env.set("empty".to_string(), Value::from(Vec::new()));
        env.set("mixed".to_string(), Value::from(vec![Value::Integer(1), Value::Bool(true)]));
    }
    env
}

#[test]
fn literal_expressions() {
    assert_int("5", 5);
    assert_int("10;", 10);
    assert_bool("true", true);
    assert_bool("false", false);
}

#[test]
fn unary_operators() {
    assert_bool("!true", false);
    assert_bool("!false", true);
    assert_bool("!5", false);
    assert_bool("!!5", true);
    assert_bool("!0", false);
    assert_int("-10", -10);
    assert_int("-0", 0);
}

#[test]
fn integer_arithmetic() {
    assert_int("5 + 5 + 5 + 5 - 10", 10);
    assert_int("2 * 2 * 2 * 2 * 2", 32);
    assert_int("(1 + 2) * 3", 9);
    assert_int("50 / 2 * 2 + 10", 60);
    assert_int("3 * (3 * 3) + 10", 37);
    assert_int("-50 + 100 + -50", 0);
}

#[test]
fn comparisons() {
    assert_bool("1 < 2", true);
    assert_bool("1 > 2", false);
    assert_bool("1 == 1", true);
    assert_bool("1 != 1", false);
    assert_bool("5 < 10 == true", true);
    assert_bool("true == true", true);
    assert_bool("false != true", true);
}

#[test]
fn division_by_zero_is_an_error() {
    assert_error("5 / 0", "division by zero");
    assert_error("5 / (2 - 2)", "division by zero");
}

#[test]
fn let_bindings() {
    assert_int("let a = 5; a;", 5);
    assert_int("let a = 5; let b = a; let c = a + b + 5; c", 15);
    assert_int("let a = 1; let a = 2; a", 2);
}

#[test]
fn let_produces_no_value() {
    assert_eq!(run("let a = 5;"), Ok(None));
    assert_eq!(run(""), Ok(None));
}

#[test]
fn if_expressions() {
    assert_int("if (true) { 10 }", 10);
    assert_null("if (false) { 10 }");
    assert_int("if (1) { 10 }", 10);
    assert_int("if (0) { 10 }", 10);
    assert_int("if (1 < 2) { 10 } else { 20 }", 10);
    assert_int("if (1 > 2) { 10 } else { 20 }", 20);
}

#[test]
fn blocks_share_the_enclosing_scope() {
    // Only calls open a new scope, so a binding made inside an `if`
    // branch is visible afterwards.
    assert_int("if (true) { let x = 5; } x", 5);
}

#[test]
fn early_return() {
    assert_int("return 10; 9;", 10);
    assert_int("9; return 2 * 5; 9;", 10);
    assert_int("if (10 > 1) { if (10 > 1) { return 10; } return 1; }", 10);
}

#[test]
fn function_application() {
    assert_int("let identity = fn(x) { x; }; identity(5);", 5);
    assert_int("let double = fn(x) { x * 2; }; double(5);", 10);
    assert_int("let add = fn(x, y) { x + y; }; add(5 + 5, add(5, 5));", 20);
    assert_int("fn(x) { x; }(5)", 5);
    assert_null("fn() { }()");
}

#[test]
fn closures() {
    assert_int("let newAdder = fn(x) { fn(y) { x + y } }; let addTwo = newAdder(2); addTwo(2);",
               4);
    assert_int("let compose = fn(f, g) { fn(x) { g(f(x)) } };
                let inc = fn(x) { x + 1 };
                let double = fn(x) { x * 2 };
                compose(inc, double)(5)",
               12);
}

#[test]
fn recursion_through_the_defining_scope() {
    assert_int("let fib = fn(n) { if (n < 2) { n } else { fib(n - 1) + fib(n - 2) } }; fib(10)",
               55);
}

#[test]
fn parameters_bind_positionally_without_arity_checks() {
    assert_int("let f = fn(x, y) { x }; f(1)", 1);
    assert_int("let f = fn(x) { x }; f(1, 2)", 1);
    assert_error("let f = fn(x, y) { y }; f(1)", "identifier not found: y");

    // Duplicate parameters are allowed; the last binding wins.
    assert_int("let f = fn(x, x) { x }; f(1, 2)", 2);
}

#[test]
fn errors_propagate_and_short_circuit() {
    assert_error("5 + true;", "type mismatch: INTEGER + BOOLEAN");
    assert_error("5 + true; 5;", "type mismatch: INTEGER + BOOLEAN");
    assert_error("-true", "unknown operator: -BOOLEAN");
    assert_error("true + false;", "unknown operator: BOOLEAN + BOOLEAN");
    assert_error("5; true + false; 5", "unknown operator: BOOLEAN + BOOLEAN");
    assert_error("if (10 > 1) { true + false; }", "unknown operator: BOOLEAN + BOOLEAN");
    assert_error("if (10 > 1) { if (10 > 1) { return true + false; } return 1; }",
                 "unknown operator: BOOLEAN + BOOLEAN");
    assert_error("foobar", "identifier not found: foobar");
}

#[test]
fn calling_a_non_function_is_an_error() {
    assert_error("5(3)", "not a function: INTEGER");
    assert_error("let x = 5; x(1)", "not a function: INTEGER");
    assert_error("true(1)", "not a function: BOOLEAN");
}

#[test]
fn argument_errors_discard_the_call() {
    assert_error("let f = fn(x) { x }; f(missing)", "identifier not found: missing");
}

#[test]
fn function_values_render_their_source_shape() {
    assert_eq!(eval_value("fn(x) { x }").to_string(), "fn(x) { x }");
    assert_eq!(eval_value("fn(x, y) { x + y }").to_string(), "fn(x, y) { (x + y) }");
    assert_eq!(eval_value("fn(x) { x }").kind(), "FUNCTION");
}

#[test]
fn string_operations() {
    let env = seeded_env();

    assert_eq!(eval_value_in("greeting", &env), Value::from("hello"));
    assert_eq!(eval_value_in("greeting", &env).kind(), "STRING");
    assert_eq!(eval_value_in("greeting + greeting", &env), Value::from("hellohello"));

    assert_error_in("greeting - greeting", &env, "unknown operator: STRING - STRING");
    assert_error_in("greeting + 1", &env, "type mismatch: STRING + INTEGER");
    assert_error_in("greeting == 5", &env, "type mismatch: STRING == INTEGER");
}

#[test]
fn string_builtins() {
    let env = seeded_env();

    assert_eq!(eval_value_in("len(greeting)", &env), Value::Integer(5));
    assert_eq!(eval_value_in("upper(greeting)", &env), Value::from("HELLO"));
    assert_eq!(eval_value_in("lower(shout)", &env), Value::from("hello"));

    assert_eq!(eval_value_in("split(csv, comma)", &env),
               Value::from(vec![Value::from("a"), Value::from("b"), Value::from("c")]));
    assert_eq!(eval_value_in("join(split(csv, comma), comma)", &env), Value::from("a,b,c"));
    assert_eq!(eval_value_in("join(xs, comma)", &env), Value::from("1,2,3"));

    // Splitting on the empty string yields single characters.
    assert_eq!(eval_value_in("len(split(greeting, blank))", &env), Value::Integer(5));
    assert_eq!(eval_value_in("first(split(greeting, blank))", &env), Value::from("h"));
}

#[test]
fn array_builtins() {
    let env = seeded_env();

    assert_eq!(eval_value_in("len(xs)", &env), Value::Integer(3));
    assert_eq!(eval_value_in("first(xs)", &env), Value::Integer(1));
    assert_eq!(eval_value_in("last(xs)", &env), Value::Integer(3));
    assert_eq!(eval_value_in("rest(xs)", &env),
               Value::from(vec![Value::Integer(2), Value::Integer(3)]));
    assert_eq!(eval_value_in("push(xs, 4)", &env),
               Value::from(vec![Value::Integer(1),
                                Value::Integer(2),
                                Value::Integer(3),
                                Value::Integer(4)]));

    // push and rest return fresh arrays; the input is untouched.
    assert_eq!(eval_value_in("let ys = push(xs, 4); len(xs)", &env), Value::Integer(3));
    assert_eq!(eval_value_in("len(ys)", &env), Value::Integer(4));
}

#[test]
fn pop_returns_without_removing() {
    let env = seeded_env();

    assert_eq!(eval_value_in("pop(xs)", &env), Value::Integer(3));
    assert_eq!(eval_value_in("len(xs)", &env), Value::Integer(3));
    assert_error_in("pop(empty)", &env, "cannot pop from empty array");
}

#[test]
fn array_reductions() {
    let env = seeded_env();

    assert_eq!(eval_value_in("sum(xs)", &env), Value::Integer(6));
    assert_eq!(eval_value_in("max(xs)", &env), Value::Integer(3));
    assert_eq!(eval_value_in("min(xs)", &env), Value::Integer(1));

    assert_eq!(eval_value_in("sum(empty)", &env), Value::Integer(0));
    assert_eq!(eval_value_in("max(empty)", &env), Value::Null);
    assert_eq!(eval_value_in("min(empty)", &env), Value::Null);

    assert_error_in("sum(mixed)", &env, "array elements must be INTEGER, got BOOLEAN");
}

#[test]
fn empty_array_edge_cases() {
    let env = seeded_env();

    assert_eq!(eval_value_in("first(empty)", &env), Value::Null);
    assert_eq!(eval_value_in("last(empty)", &env), Value::Null);
    assert_eq!(eval_value_in("rest(empty)", &env), Value::Null);
}

#[test]
fn builtin_argument_errors() {
    let env = seeded_env();

    assert_error("len(1)", "argument to `len` not supported, got INTEGER");
    assert_error("first(1)", "argument to `first` must be ARRAY, got INTEGER");
    assert_error_in("split(xs, xs)", &env, "argument to `split` must be STRING, got ARRAY");
    assert_error_in("len(xs, xs)", &env, "wrong number of arguments. got=2, want=1");
    assert_error_in("push(xs)", &env, "wrong number of arguments. got=1, want=2");
}

#[test]
fn builtins_are_values_and_can_be_shadowed() {
    assert_eq!(eval_value("len").to_string(), "builtin function");
    assert_eq!(eval_value("len").kind(), "BUILTIN");

    // A user binding takes precedence over the builtin of the same name.
    assert_int("let first = fn(x) { 42 }; first(0)", 42);
}

#[test]
fn puts_returns_null() {
    assert_null("puts(1, 2, true)");
    assert_null("puts()");
}
