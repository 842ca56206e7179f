use std::rc::Rc;

use crate::{
    ast::{Block, LiteralValue},
    interpreter::{environment::EnvRef, evaluator::builtin::BuiltinDef},
};

/// Represents a runtime value in the interpreter.
///
/// This enum models all the types that can appear as the result of
/// evaluating an expression, statement or program.
#[derive(Debug, Clone)]
pub enum Value {
    /// A 64-bit integer value.
    Integer(i64),
    /// A boolean value (`true` or `false`).
    Bool(bool),
    /// A string value. Strings have no literal syntax; they enter programs
    /// through builtins, concatenation, or pre-seeded environments.
    Str(Rc<String>),
    /// An array of `Value` elements. Arrays are immutable; builtins that
    /// "modify" them return fresh arrays.
    Array(Rc<Vec<Self>>),
    /// The distinguished absent value.
    Null,
    /// The transient wrapper carrying a `return` result up through nested
    /// blocks. Unwrapped at program and call boundaries; user code never
    /// observes it.
    Return(Box<Self>),
    /// A user-defined function together with its captured environment.
    Function(Rc<FunctionValue>),
    /// A host-provided builtin function.
    Builtin(&'static BuiltinDef),
}

/// A function value: parameter names, body, and the environment captured
/// where the literal was evaluated.
#[derive(Clone)]
pub struct FunctionValue {
    /// The parameter names, in declaration order.
    pub parameters: Vec<String>,
    /// The function body.
    pub body:       Block,
    /// The defining environment. Calls extend this with a fresh child.
    pub env:        EnvRef,
}

impl std::fmt::Debug for FunctionValue {
    // The captured environment is omitted: the environment graph may be
    // cyclic when a function is bound into its own defining scope.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FunctionValue")
         .field("parameters", &self.parameters)
         .field("body", &self.body)
         .finish_non_exhaustive()
    }
}

impl Value {
    /// Returns the kind name of this value, as used in diagnostics.
    ///
    /// # Example
    /// ```
    /// use moss::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::Integer(1).kind(), "INTEGER");
    /// assert_eq!(Value::Null.kind(), "NULL");
    /// ```
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Integer(_) => "INTEGER",
            Self::Bool(_) => "BOOLEAN",
            Self::Str(_) => "STRING",
            Self::Array(_) => "ARRAY",
            Self::Null => "NULL",
            Self::Return(_) => "RETURN_VALUE",
            Self::Function(_) => "FUNCTION",
            Self::Builtin(_) => "BUILTIN",
        }
    }

    /// Whether this value counts as true in a condition.
    ///
    /// Only `false` and the null value are falsy; every other value,
    /// including `0`, is truthy.
    ///
    /// # Example
    /// ```
    /// use moss::interpreter::value::core::Value;
    ///
    /// assert!(Value::Integer(0).is_truthy());
    /// assert!(!Value::Bool(false).is_truthy());
    /// assert!(!Value::Null.is_truthy());
    /// ```
    #[must_use]
    pub const fn is_truthy(&self) -> bool {
        !matches!(self, Self::Bool(false) | Self::Null)
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Integer(a), Self::Integer(b)) => a == b,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Str(a), Self::Str(b)) => a == b,
            (Self::Array(a), Self::Array(b)) => a == b,
            (Self::Null, Self::Null) => true,
            (Self::Return(a), Self::Return(b)) => a == b,
            (Self::Function(a), Self::Function(b)) => Rc::ptr_eq(a, b),
            (Self::Builtin(a), Self::Builtin(b)) => std::ptr::eq(*a, *b),
            _ => false,
        }
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Str(Rc::new(value.to_string()))
    }
}

impl From<Vec<Self>> for Value {
    fn from(value: Vec<Self>) -> Self {
        Self::Array(Rc::new(value))
    }
}

impl From<&LiteralValue> for Value {
    fn from(literal: &LiteralValue) -> Self {
        match literal {
            LiteralValue::Integer(value) => (*value).into(),
            LiteralValue::Bool(value) => (*value).into(),
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "{value}"),
            Self::Bool(value) => write!(f, "{value}"),
            Self::Str(value) => write!(f, "{value}"),
            Self::Array(elements) => {
                write!(f, "[")?;

                for (index, value) in elements.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }

                    write!(f, "{value}")?;
                }

                write!(f, "]")
            },
            Self::Null => write!(f, "null"),
            Self::Return(value) => write!(f, "{value}"),
            Self::Function(function) => {
                write!(f, "fn({}) {}", function.parameters.join(", "), function.body)
            },
            Self::Builtin(_) => write!(f, "builtin function"),
        }
    }
}
