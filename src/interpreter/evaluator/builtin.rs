use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Array builtins: `len`, `first`, `last`, `rest`, `push`, `pop`.
pub mod array;
/// The `puts` builtin.
pub mod print;
/// Array reductions: `sum`, `max`, `min`.
pub mod reduce;
/// String builtins: `join`, `split`, `upper`, `lower`.
pub mod string;

/// Type alias for builtin function handlers.
///
/// A builtin receives the already evaluated argument values and returns
/// the call result. Arity has been checked before the handler runs.
type BuiltinFn = fn(&[Value]) -> EvalResult<Value>;

/// Specifies the allowed number of arguments for a builtin.
#[derive(Clone, Copy)]
enum Arity {
    /// The builtin must receive exactly this many arguments.
    Exact(usize),
    /// The builtin accepts any number of arguments.
    Variadic,
}

/// A builtin table entry: a name, an arity constraint, and the handler.
///
/// Entries live for the whole process, so a `Value::Builtin` is just a
/// reference into the table.
pub struct BuiltinDef {
    /// The name the builtin is looked up by.
    pub name: &'static str,
    arity:    Arity,
    func:     BuiltinFn,
}

/// Defines the builtin lookup table.
///
/// Each entry provides a string name, an arity specification, and a
/// function pointer implementing the builtin.
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { name: $name, arity: $arity, func: $func },
            )*
        ];
    };
}

builtin_functions! {
    "len"   => { arity: Arity::Exact(1), func: array::len },
    "first" => { arity: Arity::Exact(1), func: array::first },
    "last"  => { arity: Arity::Exact(1), func: array::last },
    "rest"  => { arity: Arity::Exact(1), func: array::rest },
    "push"  => { arity: Arity::Exact(2), func: array::push },
    "pop"   => { arity: Arity::Exact(1), func: array::pop },
    "puts"  => { arity: Arity::Variadic, func: print::puts },
    "sum"   => { arity: Arity::Exact(1), func: reduce::sum },
    "max"   => { arity: Arity::Exact(1), func: |args| reduce::min_max("max", args) },
    "min"   => { arity: Arity::Exact(1), func: |args| reduce::min_max("min", args) },
    "join"  => { arity: Arity::Exact(2), func: string::join },
    "split" => { arity: Arity::Exact(2), func: string::split },
    "upper" => { arity: Arity::Exact(1), func: |args| string::convert_case("upper", args) },
    "lower" => { arity: Arity::Exact(1), func: |args| string::convert_case("lower", args) },
}

/// Finds a builtin by name. Consulted only after environment lookup
/// misses, so user bindings shadow builtins.
#[must_use]
pub fn lookup(name: &str) -> Option<&'static BuiltinDef> {
    BUILTIN_TABLE.iter().find(|builtin| builtin.name == name)
}

impl BuiltinDef {
    /// Checks the arity constraint and runs the handler.
    ///
    /// # Errors
    /// `wrong number of arguments` when an exact arity is violated, plus
    /// whatever the handler itself reports.
    pub fn apply(&self, args: &[Value]) -> EvalResult<Value> {
        if let Arity::Exact(want) = self.arity
           && args.len() != want
        {
            return Err(RuntimeError::WrongArgumentCount { got: args.len(),
                                                          want });
        }
        (self.func)(args)
    }
}

impl std::fmt::Debug for BuiltinDef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BuiltinDef").field("name", &self.name).finish_non_exhaustive()
    }
}

/// Coerces a builtin argument to an array, naming the builtin in the
/// diagnostic when the kind does not match.
fn as_array<'a>(function: &'static str, value: &'a Value) -> EvalResult<&'a [Value]> {
    match value {
        Value::Array(elements) => Ok(elements),
        other => Err(RuntimeError::ArgumentMustBe { function,
                                                    expected: "ARRAY",
                                                    got: other.kind(), }),
    }
}
