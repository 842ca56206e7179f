//! # moss
//!
//! moss is a small, dynamically typed, expression-oriented scripting
//! language. Source text is lexed into tokens, parsed into an abstract
//! syntax tree by a top-down operator-precedence parser, and executed by a
//! tree-walking evaluator with first-class functions and closures.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    ast::Program,
    error::ParseError,
    interpreter::{
        environment::EnvRef,
        evaluator::core::eval,
        lexer::Lexer,
        parser::core::Parser,
        value::core::Value,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Statement` and `Expr` enums that represent
/// the syntactic structure of source code as a tree. The AST is built by
/// the parser and traversed by the evaluator. Every node renders to a
/// canonical textual form that parses back to the same tree.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while lexing,
/// parsing, or evaluating code. Parse errors are accumulated as a list so
/// one pass reports everything it can; runtime errors short-circuit
/// evaluation and become the program's result.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, value
/// representation and scoping to provide a complete runtime for source
/// code evaluation.
pub mod interpreter;
/// The interactive shell.
///
/// Reads one line at a time, evaluates it against a session-long
/// environment, and prints results and diagnostics.
pub mod repl;

/// Parses source text into a [`Program`].
///
/// # Errors
/// Returns every diagnostic the parser recorded, in source order, when the
/// input does not parse cleanly.
///
/// # Examples
/// ```
/// use moss::parse;
///
/// let program = parse("let x = 1 + 2;").unwrap();
/// assert_eq!(program.statements.len(), 1);
///
/// let errors = parse("let = 5;").unwrap_err();
/// assert_eq!(errors[0].to_string(),
///            "expected next token to be IDENT, got = instead");
/// ```
pub fn parse(source: &str) -> Result<Program, Vec<ParseError>> {
    let lexer = Lexer::new(source);
    let mut parser = Parser::new(lexer);

    let program = parser.parse_program();

    if parser.errors().is_empty() {
        Ok(program)
    } else {
        Err(parser.into_errors())
    }
}

/// Parses and evaluates source text against the given environment.
///
/// This is the one-call embedding surface used by the file runner and
/// tests. The result is the value of the final statement, or `None` when
/// it produces no value (a `let` binding).
///
/// # Errors
/// Returns the first parse error when the input does not parse, or the
/// runtime error that stopped evaluation.
///
/// # Examples
/// ```
/// use moss::{interpreter::environment::Environment, run_source};
///
/// let env = Environment::new().into_ref();
///
/// let result = run_source("let answer = 6 * 7; answer", &env).unwrap();
/// assert_eq!(result.unwrap().to_string(), "42");
///
/// // 'y' is not defined, so evaluation fails.
/// let result = run_source("let x = y + 1", &env);
/// assert!(result.is_err());
/// ```
pub fn run_source(source: &str,
                  env: &EnvRef)
                  -> Result<Option<Value>, Box<dyn std::error::Error>> {
    let program = match parse(source) {
        Ok(program) => program,
        Err(mut errors) => return Err(Box::new(errors.swap_remove(0))),
    };

    eval(&program, env).map_err(Into::into)
}
