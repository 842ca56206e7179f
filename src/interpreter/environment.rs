use std::{cell::RefCell, collections::HashMap, rc::Rc};

use crate::interpreter::value::core::Value;

/// A shared, mutable handle to an [`Environment`].
///
/// Closures hold one of these, so several function values can extend the
/// same captured scope. Environments bound into themselves (a function
/// stored in its own defining scope) form reference cycles; those are left
/// to leak, which is acceptable for script and REPL lifetimes.
pub type EnvRef = Rc<RefCell<Environment>>;

/// A lexically chained mapping from names to values.
///
/// Lookup walks the `outer` chain toward the global scope; bindings are
/// only ever created in the innermost environment, by `let` and by
/// parameter binding on call.
#[derive(Debug, Default)]
pub struct Environment {
    store: HashMap<String, Value>,
    outer: Option<EnvRef>,
}

impl Environment {
    /// Creates an empty top-level environment.
    ///
    /// # Example
    /// ```
    /// use moss::interpreter::{environment::Environment, value::core::Value};
    ///
    /// let env = Environment::new().into_ref();
    /// env.borrow_mut().set("x".to_string(), Value::Integer(5));
    ///
    /// assert_eq!(env.borrow().get("x"), Some(Value::Integer(5)));
    /// assert_eq!(env.borrow().get("y"), None);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self { store: HashMap::new(),
               outer: None, }
    }

    /// Wraps this environment in a shared handle.
    #[must_use]
    pub fn into_ref(self) -> EnvRef {
        Rc::new(RefCell::new(self))
    }

    /// Creates an environment enclosed by `outer`.
    ///
    /// Lookups that miss the new environment continue in `outer`; new
    /// bindings never touch it.
    ///
    /// # Example
    /// ```
    /// use moss::interpreter::{environment::Environment, value::core::Value};
    ///
    /// let outer = Environment::new().into_ref();
    /// outer.borrow_mut().set("x".to_string(), Value::Integer(1));
    ///
    /// let inner = Environment::new_enclosed(&outer);
    /// inner.borrow_mut().set("y".to_string(), Value::Integer(2));
    ///
    /// assert_eq!(inner.borrow().get("x"), Some(Value::Integer(1)));
    /// assert_eq!(outer.borrow().get("y"), None);
    /// ```
    #[must_use]
    pub fn new_enclosed(outer: &EnvRef) -> EnvRef {
        Rc::new(RefCell::new(Self { store: HashMap::new(),
                                    outer: Some(Rc::clone(outer)), }))
    }

    /// Looks up a name, walking the chain of enclosing environments.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Value> {
        if let Some(value) = self.store.get(name) {
            return Some(value.clone());
        }
        self.outer.as_ref().and_then(|outer| outer.borrow().get(name))
    }

    /// Binds a name in this environment. Rebinding an existing name
    /// overwrites it here, never in an enclosing scope.
    pub fn set(&mut self, name: String, value: Value) {
        self.store.insert(name, value);
    }
}
