/// Core evaluation logic.
///
/// Contains the main dispatch over programs, statements, blocks and
/// expressions, plus identifier resolution and return propagation.
pub mod core;

/// Unary operator evaluation.
///
/// Handles logical NOT with its truthiness rules and arithmetic negation.
pub mod unary;

/// Binary operator evaluation.
///
/// Implements the operand-kind matrix for arithmetic, comparisons and
/// string concatenation, including the type-mismatch diagnostics.
pub mod binary;

/// Function evaluation.
///
/// Handles call expressions: closure application over an enclosed
/// environment, builtin dispatch, and return-value unwrapping.
pub mod function;

/// Built-in functions.
///
/// The fixed table of host-provided functions and its per-concern handler
/// modules.
pub mod builtin;
