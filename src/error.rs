/// Parsing errors.
///
/// Defines all error types that can occur while turning tokens into an
/// abstract syntax tree. Parse errors include unexpected tokens, tokens
/// with no parse rule, and invalid integer literals.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation, such as
/// unbound identifiers, operator type mismatches, division by zero, and
/// builtin argument failures.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
