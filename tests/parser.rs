use moss::{
    ast::{Expr, LiteralValue, Program, Statement},
    interpreter::{lexer::Lexer, parser::core::Parser},
    parse,
};

fn parse_program(source: &str) -> Program {
    parse(source).unwrap_or_else(|errors| panic!("parse failed for {source:?}: {errors:?}"))
}

fn parse_errors(source: &str) -> Vec<String> {
    let mut parser = Parser::new(Lexer::new(source));
    parser.parse_program();

    parser.errors().iter().map(ToString::to_string).collect()
}

#[test]
fn operator_precedence() {
    let cases = [("-a * b", "((-a) * b)"),
                 ("!-a", "(!(-a))"),
                 ("a + b + c", "((a + b) + c)"),
                 ("a + b - c", "((a + b) - c)"),
                 ("a * b * c", "((a * b) * c)"),
                 ("a * b / c", "((a * b) / c)"),
                 ("a + b / c", "(a + (b / c))"),
                 ("a + b * c + d / e - f", "(((a + (b * c)) + (d / e)) - f)"),
                 ("3 + 4; -5 * 5", "(3 + 4)((-5) * 5)"),
                 ("5 > 4 == 3 < 4", "((5 > 4) == (3 < 4))"),
                 ("a == b < c", "(a == (b < c))"),
                 ("3 + 4 * 5 == 3 * 1 + 4 * 5", "((3 + (4 * 5)) == ((3 * 1) + (4 * 5)))"),
                 ("3 > 5 == false", "((3 > 5) == false)"),
                 ("(5 + 5) * 2", "((5 + 5) * 2)"),
                 ("2 / (5 + 5)", "(2 / (5 + 5))"),
                 ("-(5 + 5)", "(-(5 + 5))"),
                 ("!(true == true)", "(!(true == true))"),
                 ("a + add(b * c) + d", "((a + add((b * c))) + d)"),
                 ("add(a, b, 1, 2 * 3, 4 + 5, add(6, 7 * 8))",
                  "add(a, b, 1, (2 * 3), (4 + 5), add(6, (7 * 8)))"),
                 ("add(a + b + c * d / f + g)", "add((((a + b) + ((c * d) / f)) + g))")];

    for (source, expected) in cases {
        assert_eq!(parse_program(source).to_string(), expected, "source: {source}");
    }
}

#[test]
fn canonical_printing_round_trips() {
    let sources = ["let x = 5;",
                   "let x = 1 + 2 * 3;",
                   "return 1 + 2;",
                   "if (x < y) { x }",
                   "if (x < y) { x } else { y }",
                   "fn() { }",
                   "fn(x, y) { x + y; }",
                   "let apply = fn(f, x) { f(x) };",
                   "!-a",
                   "fn(x) { x }(5)"];

    for source in sources {
        let once = parse_program(source);
        let twice = parse_program(&once.to_string());

        assert_eq!(once, twice, "source: {source}");
        assert_eq!(once.to_string(), twice.to_string(), "source: {source}");
    }
}

#[test]
fn let_statements() {
    let program = parse_program("let x = 5; let y = true; let foobar = y;");

    assert_eq!(program.statements,
               vec![Statement::Let { name:  "x".to_string(),
                                     value: Expr::Literal { value: LiteralValue::Integer(5), }, },
                    Statement::Let { name:  "y".to_string(),
                                     value: Expr::Literal { value: LiteralValue::Bool(true), }, },
                    Statement::Let { name:  "foobar".to_string(),
                                     value: Expr::Identifier { name: "y".to_string(), }, }]);
}

#[test]
fn return_statements() {
    let program = parse_program("return 5; return x;");

    assert_eq!(program.statements,
               vec![Statement::Return { value: Expr::Literal { value:
                                                                   LiteralValue::Integer(5), }, },
                    Statement::Return { value: Expr::Identifier { name: "x".to_string(), }, }]);
}

#[test]
fn semicolons_are_optional_separators() {
    assert_eq!(parse_program("let x = 5").to_string(), "let x = 5;");
    assert_eq!(parse_program("return x").to_string(), "return x;");
    assert_eq!(parse_program("a + b").to_string(), "(a + b)");
}

#[test]
fn if_expression_structure() {
    let program = parse_program("if (x < y) { x }");

    let [Statement::Expression { expr: Expr::If { else_branch, then_branch, .. }, }] =
        program.statements.as_slice()
    else {
        panic!("expected a single if expression, got {program:?}");
    };

    assert_eq!(then_branch.statements.len(), 1);
    assert!(else_branch.is_none());

    let program = parse_program("if (x < y) { x } else { y }");

    let [Statement::Expression { expr: Expr::If { else_branch, .. }, }] =
        program.statements.as_slice()
    else {
        panic!("expected a single if expression, got {program:?}");
    };

    assert!(else_branch.is_some());
}

#[test]
fn function_literal_parameters() {
    let cases: [(&str, &[&str]); 3] =
        [("fn() {}", &[]), ("fn(x) {}", &["x"]), ("fn(x, y, z) {}", &["x", "y", "z"])];

    for (source, expected) in cases {
        let program = parse_program(source);

        let [Statement::Expression { expr: Expr::Function { parameters, body }, }] =
            program.statements.as_slice()
        else {
            panic!("expected a single function literal, got {program:?}");
        };

        assert_eq!(parameters, expected, "source: {source}");
        assert!(body.statements.is_empty(), "source: {source}");
    }
}

#[test]
fn call_expression_arguments() {
    let program = parse_program("add(1, 2 * 3, 4 + 5);");

    let [Statement::Expression { expr: Expr::Call { callee, arguments }, }] =
        program.statements.as_slice()
    else {
        panic!("expected a single call expression, got {program:?}");
    };

    assert_eq!(**callee, Expr::Identifier { name: "add".to_string(), });
    assert_eq!(arguments.len(), 3);
}

#[test]
fn integer_literals_detect_their_base() {
    for (source, expected) in [("42", 42), ("0x2a", 42), ("0X2A", 42), ("0o52", 42), ("0O52", 42)]
    {
        assert_eq!(parse_program(source).statements,
                   vec![Statement::Expression { expr: Expr::Literal { value:
                                                                          LiteralValue::Integer(expected), }, }],
                   "source: {source}");
    }
}

#[test]
fn expectation_errors_name_both_kinds() {
    assert_eq!(parse_errors("let x 5;"),
               vec!["expected next token to be =, got INT instead"]);

    assert_eq!(parse_errors("let = 5;"),
               vec!["expected next token to be IDENT, got = instead",
                    "no prefix parse function for = found"]);

    assert_eq!(parse_errors("let"),
               vec!["expected next token to be IDENT, got EOF instead"]);

    // Parsing resumes after the failed statement, so the stray block
    // tokens cascade into further diagnostics, exactly as recorded.
    assert_eq!(parse_errors("if (x { 1 }"),
               vec!["expected next token to be ), got { instead",
                    "no prefix parse function for { found",
                    "no prefix parse function for } found"]);
}

#[test]
fn errors_inside_blocks_do_not_abort_the_enclosing_statement() {
    let mut parser = Parser::new(Lexer::new("if (x) { let = 5; } 10"));
    let program = parser.parse_program();

    let errors: Vec<String> = parser.errors().iter().map(ToString::to_string).collect();
    assert_eq!(errors,
               vec!["expected next token to be IDENT, got = instead",
                    "no prefix parse function for = found"]);

    // The if-expression keeps the salvageable part of its block, and
    // parsing continues after it; nothing past the block is re-read as
    // stray top-level tokens.
    let [Statement::Expression { expr: Expr::If { then_branch, .. }, }, trailing] =
        program.statements.as_slice()
    else {
        panic!("expected an if expression and a trailing statement, got {program:?}");
    };

    assert_eq!(then_branch.statements,
               vec![Statement::Expression { expr: Expr::Literal { value:
                                                                      LiteralValue::Integer(5), }, }]);
    assert_eq!(*trailing,
               Statement::Expression { expr: Expr::Literal { value: LiteralValue::Integer(10), }, });

    // The same recovery applies to function bodies.
    let mut parser = Parser::new(Lexer::new("let f = fn(x) { let = 1; x }; f(2)"));
    let program = parser.parse_program();

    assert_eq!(parser.errors().len(), 2);
    assert_eq!(program.statements.len(), 2);
}

#[test]
fn tokens_without_a_prefix_rule_are_reported() {
    assert_eq!(parse_errors("@"), vec!["no prefix parse function for ILLEGAL found"]);
    assert_eq!(parse_errors("1.5"), vec!["no prefix parse function for FLOAT found"]);
}

#[test]
fn unparseable_integers_are_reported() {
    assert_eq!(parse_errors("99999999999999999999"),
               vec!["could not parse \"99999999999999999999\" as integer"]);
    assert_eq!(parse_errors("0x"), vec!["could not parse \"0x\" as integer"]);
}

#[test]
fn unterminated_blocks_end_at_eof() {
    // The closing brace is missing; the block ends defensively at EOF
    // instead of looping.
    let program = parse_program("if (x) { 1");

    let [Statement::Expression { expr: Expr::If { then_branch, .. }, }] =
        program.statements.as_slice()
    else {
        panic!("expected a single if expression, got {program:?}");
    };

    assert_eq!(then_branch.statements.len(), 1);
}
