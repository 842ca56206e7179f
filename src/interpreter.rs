/// The environment module implements lexical scoping.
///
/// An environment maps names to values and chains to an optional enclosing
/// environment. Closures keep a shared handle to the environment that was
/// active when their literal was evaluated.
///
/// # Responsibilities
/// - Name lookup through the chain of enclosing scopes.
/// - Binding creation in the innermost scope only.
/// - Shared ownership so several closures can extend one captured scope.
pub mod environment;
/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator walks the AST, evaluates expressions and statements,
/// applies operators and functions, and propagates `return` values and
/// runtime errors. It is the core execution engine of the interpreter.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Implements closures, calls, and the builtin function table.
/// - Reports runtime errors such as type mismatches or unbound names.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a stream of tokens,
/// each corresponding to a meaningful language element such as a number,
/// identifier, operator, delimiter, or keyword. This is the first stage of
/// interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens.
/// - Handles numeric literals, identifiers, operators and keywords.
/// - Surfaces unrecognized input as `ILLEGAL` tokens without stopping.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and
/// constructs an AST that represents the syntactic structure of statements
/// and expressions, using top-down operator precedence for the latter.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes.
/// - Enforces the grammar, accumulating diagnostics without aborting.
/// - Implements the operator precedence table.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares all the value types produced during execution,
/// such as integers, booleans, strings, arrays, functions and the null
/// value, together with their kind names and inspect rendering.
pub mod value;
