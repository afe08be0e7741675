use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use crate::callable::{Callable, Function};
use crate::environment::Environment;
use crate::error::RuntimeError;
use crate::interpreter::Interpreter;
use crate::token::Token;
use crate::value::Value;

/// Name of the method run when a class is called.
pub const CONSTRUCTOR: &str = "constructor";

/// A class: its own method table and an optional superclass link.
pub struct Class {
    pub name: String,
    pub superclass: Option<Rc<Class>>,
    pub methods: HashMap<String, Rc<Function>>,
}

impl Class {
    pub fn new(
        name: String,
        superclass: Option<Rc<Class>>,
        methods: HashMap<String, Rc<Function>>,
    ) -> Self {
        Self {
            name,
            superclass,
            methods,
        }
    }

    /// Search this class, then each superclass in turn.
    pub fn find_method(&self, name: &str) -> Option<Rc<Function>> {
        self.methods.get(name).cloned().or_else(|| {
            self.superclass
                .as_ref()
                .and_then(|superclass| superclass.find_method(name))
        })
    }
}

impl fmt::Debug for Class {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Class")
            .field("name", &self.name)
            .field(
                "superclass",
                &self.superclass.as_ref().map(|c| c.name.clone()),
            )
            .field("methods", &self.methods.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// Calling a class builds an instance and runs its constructor, if any.
impl Callable for Rc<Class> {
    fn arity(&self) -> usize {
        self.find_method(CONSTRUCTOR)
            .map(|constructor| constructor.arity())
            .unwrap_or(0)
    }

    fn call(
        &self,
        interpreter: &mut Interpreter,
        arguments: Vec<Value>,
        call_site: &Token,
    ) -> Result<Value, RuntimeError> {
        let instance = Rc::new(RefCell::new(Instance::new(Rc::clone(self))));

        if let Some(constructor) = self.find_method(CONSTRUCTOR) {
            constructor
                .bind(&instance)
                .call(interpreter, arguments, call_site)?;
        }

        Ok(Value::Instance(instance))
    }
}

/// An object: a link to its class and lazily created fields.
pub struct Instance {
    pub class: Rc<Class>,
    fields: HashMap<String, Value>,
}

impl Instance {
    pub fn new(class: Rc<Class>) -> Self {
        Self {
            class,
            fields: HashMap::new(),
        }
    }

    /// Fields shadow methods; methods come back bound to `instance`.
    pub fn get(instance: &Rc<RefCell<Instance>>, name: &Token) -> Result<Value, RuntimeError> {
        let this = instance.borrow();

        if let Some(value) = this.fields.get(&name.lexeme) {
            return Ok(value.clone());
        }

        if let Some(method) = this.class.find_method(&name.lexeme) {
            return Ok(Value::Function(Rc::new(method.bind(instance))));
        }

        Err(RuntimeError::new(
            name,
            format!("Undefined property '{}'.", name.lexeme),
        ))
    }

    pub fn set(&mut self, name: &Token, value: Value) {
        self.fields.insert(name.lexeme.clone(), value);
    }
}

impl fmt::Debug for Instance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Instance")
            .field("class", &self.class.name)
            .field("fields", &self.fields.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// A read-only namespace of native callables, such as `console`.
#[derive(Debug)]
pub struct NativeModule {
    pub name: &'static str,
    body: Environment,
}

impl NativeModule {
    pub fn new(name: &'static str, body: Environment) -> Self {
        Self { name, body }
    }

    pub fn get(&self, name: &Token) -> Result<Value, RuntimeError> {
        self.body.lookup(&name.lexeme).ok_or_else(|| {
            RuntimeError::new(name, format!("Undefined property '{}'.", name.lexeme))
        })
    }
}
