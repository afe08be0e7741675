use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use log::debug;

use crate::ast::FunctionDecl;
use crate::class::Instance;
use crate::environment::{EnvRef, Environment};
use crate::error::RuntimeError;
use crate::interpreter::{Flow, Interpreter};
use crate::token::Token;
use crate::value::Value;

/// Anything that can be invoked with `(...)`: user functions, classes and
/// native functions.
pub trait Callable {
    /// Exact number of arguments the callee accepts.
    fn arity(&self) -> usize;

    /// Invoke with already-evaluated arguments.  The interpreter has checked
    /// the arity; `call_site` is the closing parenthesis, for error reports.
    fn call(
        &self,
        interpreter: &mut Interpreter,
        arguments: Vec<Value>,
        call_site: &Token,
    ) -> Result<Value, RuntimeError>;
}

/// A user-defined function or method: its declaration plus the frame that was
/// active when it was declared.
#[derive(Clone)]
pub struct Function {
    pub declaration: Rc<FunctionDecl>,
    pub closure: EnvRef,
}

impl Function {
    pub fn new(declaration: Rc<FunctionDecl>, closure: EnvRef) -> Self {
        Self {
            declaration,
            closure,
        }
    }

    pub fn name(&self) -> &str {
        &self.declaration.name.lexeme
    }

    /// A copy of this function whose closure has one extra frame binding
    /// `this` to `instance`.  `self` is left untouched.
    pub fn bind(&self, instance: &Rc<RefCell<Instance>>) -> Function {
        let mut frame = Environment::with_enclosing(Rc::clone(&self.closure));
        frame.define("this", Value::Instance(Rc::clone(instance)));

        Function::new(Rc::clone(&self.declaration), frame.into_ref())
    }
}

impl Callable for Function {
    fn arity(&self) -> usize {
        self.declaration.params.len()
    }

    fn call(
        &self,
        interpreter: &mut Interpreter,
        arguments: Vec<Value>,
        _call_site: &Token,
    ) -> Result<Value, RuntimeError> {
        debug!("Calling function '{}'", self.name());

        let mut frame = Environment::with_enclosing(Rc::clone(&self.closure));
        for (param, argument) in self.declaration.params.iter().zip(arguments) {
            frame.define(&param.lexeme, argument);
        }

        match interpreter.execute_block(&self.declaration.body, frame.into_ref())? {
            Flow::Return(value) => Ok(value),
            Flow::Normal => Ok(Value::Null),
        }
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<fn {}>", self.name())
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Function")
            .field("name", &self.name())
            .field("arity", &self.arity())
            .field("closure", &self.closure.as_ptr())
            .finish()
    }
}

/// Host implementation behind a native callable.  Errors are plain messages;
/// the interpreter attaches the call site.
pub type NativeFn = fn(&mut Interpreter, &[Value]) -> Result<Value, String>;

/// A callable implemented in Rust and exposed through a native module.
#[derive(Debug)]
pub struct NativeFunction {
    pub name: &'static str,
    pub arity: usize,
    pub func: NativeFn,
}

impl Callable for NativeFunction {
    fn arity(&self) -> usize {
        self.arity
    }

    fn call(
        &self,
        interpreter: &mut Interpreter,
        arguments: Vec<Value>,
        call_site: &Token,
    ) -> Result<Value, RuntimeError> {
        debug!("Calling native function '{}'", self.name);

        (self.func)(interpreter, &arguments).map_err(|msg| RuntimeError::new(call_site, msg))
    }
}
