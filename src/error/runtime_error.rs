use crate::ast::{BinaryOperator, UnaryOperator};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can be raised during evaluation.
///
/// Evaluation short-circuits on the first of these; the error then becomes
/// the result of the whole program.
pub enum RuntimeError {
    /// Looked up a name with no binding and no builtin of that name.
    IdentifierNotFound {
        /// The name that failed to resolve.
        name: String,
    },
    /// A unary operator was applied to an operand it does not support.
    UnknownUnaryOperator {
        /// The operator.
        operator: UnaryOperator,
        /// The kind of the operand.
        operand:  &'static str,
    },
    /// A binary operator was applied to same-kind operands it does not
    /// support.
    UnknownBinaryOperator {
        /// The kind of the left operand.
        left:     &'static str,
        /// The operator.
        operator: BinaryOperator,
        /// The kind of the right operand.
        right:    &'static str,
    },
    /// A binary operator was applied to operands of different kinds.
    TypeMismatch {
        /// The kind of the left operand.
        left:     &'static str,
        /// The operator.
        operator: BinaryOperator,
        /// The kind of the right operand.
        right:    &'static str,
    },
    /// The callee of a call expression is not callable.
    NotAFunction {
        /// The kind of the value that was called.
        kind: &'static str,
    },
    /// Attempted integer division by zero.
    DivisionByZero,
    /// A builtin was called with the wrong number of arguments.
    WrongArgumentCount {
        /// How many arguments were supplied.
        got:  usize,
        /// How many the builtin requires.
        want: usize,
    },
    /// A builtin argument had the wrong kind.
    ArgumentMustBe {
        /// The builtin's name.
        function: &'static str,
        /// The kind the builtin requires.
        expected: &'static str,
        /// The kind actually supplied.
        got:      &'static str,
    },
    /// A builtin has no behavior for this argument kind at all.
    ArgumentNotSupported {
        /// The builtin's name.
        function: &'static str,
        /// The kind actually supplied.
        got:      &'static str,
    },
    /// An array reduction met an element of the wrong kind.
    ElementsMustBe {
        /// The kind every element must have.
        expected: &'static str,
        /// The kind actually found.
        got:      &'static str,
    },
    /// `pop` was applied to an empty array.
    PopFromEmptyArray,
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IdentifierNotFound { name } => {
                write!(f, "identifier not found: {name}")
            },
            Self::UnknownUnaryOperator { operator, operand } => {
                write!(f, "unknown operator: {operator}{operand}")
            },
            Self::UnknownBinaryOperator { left,
                                          operator,
                                          right, } => {
                write!(f, "unknown operator: {left} {operator} {right}")
            },
            Self::TypeMismatch { left,
                                 operator,
                                 right, } => {
                write!(f, "type mismatch: {left} {operator} {right}")
            },
            Self::NotAFunction { kind } => write!(f, "not a function: {kind}"),
            Self::DivisionByZero => write!(f, "division by zero"),
            Self::WrongArgumentCount { got, want } => {
                write!(f, "wrong number of arguments. got={got}, want={want}")
            },
            Self::ArgumentMustBe { function,
                                   expected,
                                   got, } => {
                write!(f, "argument to `{function}` must be {expected}, got {got}")
            },
            Self::ArgumentNotSupported { function, got } => {
                write!(f, "argument to `{function}` not supported, got {got}")
            },
            Self::ElementsMustBe { expected, got } => {
                write!(f, "array elements must be {expected}, got {got}")
            },
            Self::PopFromEmptyArray => write!(f, "cannot pop from empty array"),
        }
    }
}

impl std::error::Error for RuntimeError {}
