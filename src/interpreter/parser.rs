/// Core parsing machinery.
///
/// Contains the `Parser` itself, the operator precedence table, and the
/// top-down operator-precedence (Pratt) expression loop.
pub mod core;

/// Infix position parsing.
///
/// Handles binary operator expressions and call expressions, which attach
/// to an already parsed left-hand side.
pub mod infix;

/// Prefix position parsing.
///
/// Handles everything that can start an expression: literals, identifiers,
/// unary operators, grouping, conditionals and function literals.
pub mod prefix;

/// Statement parsing.
///
/// Dispatches `let`, `return` and expression statements, and parses
/// brace-delimited blocks.
pub mod statement;
