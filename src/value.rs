use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::callable::{Callable, Function, NativeFunction};
use crate::class::{Class, Instance, NativeModule};

/// Every value a script can produce.
#[derive(Debug, Clone)]
pub enum Value {
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Function(Rc<Function>),
    Native(Rc<NativeFunction>),
    Class(Rc<Class>),
    Instance(Rc<RefCell<Instance>>),
    Module(Rc<NativeModule>),
}

impl Value {
    /// `null` is falsy, booleans are themselves, strings are truthy when
    /// non-empty and numbers only when strictly positive.  Everything else is
    /// truthy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::String(s) => !s.is_empty(),
            Value::Number(n) => *n > 0.0,
            _ => true,
        }
    }

    /// Equality used by `==` and `!=`: value equality for primitives,
    /// identity for functions, classes, instances and modules.
    pub fn is_equal(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Null, _) | (_, Value::Null) => false,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Function(a), Value::Function(b)) => Rc::ptr_eq(a, b),
            (Value::Native(a), Value::Native(b)) => Rc::ptr_eq(a, b),
            (Value::Class(a), Value::Class(b)) => Rc::ptr_eq(a, b),
            (Value::Instance(a), Value::Instance(b)) => Rc::ptr_eq(a, b),
            (Value::Module(a), Value::Module(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }

    /// The callable behind this value, if it can be invoked with `(...)`.
    pub fn as_callable(&self) -> Option<&dyn Callable> {
        let callable: &dyn Callable = match self {
            Value::Function(function) => &**function,
            Value::Native(native) => &**native,
            Value::Class(class) => class,
            _ => return None,
        };

        Some(callable)
    }
}

/// Render a number the way scripts see it: integral values without a
/// fractional part, non-finite values by their JavaScript names.
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string()
    } else if n.fract() == 0.0 && n.abs() < 1e15 {
        let mut buf: itoa::Buffer = itoa::Buffer::new();
        buf.format(n as i64).to_string()
    } else {
        n.to_string()
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),

            Value::Bool(b) => write!(f, "{}", b),

            Value::Number(n) => write!(f, "{}", format_number(*n)),

            Value::String(s) => write!(f, "{}", s),

            Value::Function(function) => write!(f, "{}", function),

            Value::Native(_) => write!(f, "<native fn>"),

            Value::Class(class) => write!(f, "{}", class.name),

            Value::Instance(instance) => write!(f, "{} instance", instance.borrow().class.name),

            Value::Module(module) => write!(f, "<native module {}>", module.name),
        }
    }
}
