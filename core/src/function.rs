//! Callable host values.

use crate::Value;
use std::fmt;
use std::rc::Rc;

type Callable = dyn Fn(&Value, &[Value]) -> Value;

/// A shared callable taking a receiver (`this`) and positional arguments.
#[derive(Clone)]
pub struct Function {
    call: Rc<Callable>,
    name: Option<Rc<str>>,
}

impl Function {
    /// Create an anonymous function.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&Value, &[Value]) -> Value + 'static,
    {
        Self {
            call: Rc::new(f),
            name: None,
        }
    }

    /// Create a named function. The name is only used for display.
    pub fn named<F>(name: &str, f: F) -> Self
    where
        F: Fn(&Value, &[Value]) -> Value + 'static,
    {
        Self {
            call: Rc::new(f),
            name: Some(Rc::from(name)),
        }
    }

    /// Invoke with the given receiver and arguments.
    pub fn call(&self, this: &Value, args: &[Value]) -> Value {
        (self.call)(this, args)
    }

    /// Return a function that always invokes `self` with `this` as receiver,
    /// ignoring the receiver it is called with.
    pub fn bind(&self, this: Value) -> Function {
        let inner = self.clone();
        Function {
            call: Rc::new(move |_, args| inner.call(&this, args)),
            name: self.name.clone(),
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns true if both handles refer to the same function.
    pub fn ptr_eq(&self, other: &Function) -> bool {
        Rc::ptr_eq(&self.call, &other.call)
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Function").field("name", &self.name).finish()
    }
}
