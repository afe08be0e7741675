use crate::error::RuntimeError;
use crate::token::Token;
use crate::value::Value;
use log::debug;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Shared, mutable handle to one scope frame.  Closures and nested frames
/// hold these, so a frame lives as long as anything still refers to it.
pub type EnvRef = Rc<RefCell<Environment>>;

/// One frame of the scope chain: bindings plus an optional link to the
/// enclosing frame.  The global frame has no enclosing link.
#[derive(Debug, Clone, Default)]
pub struct Environment {
    values: HashMap<String, Value>,
    enclosing: Option<EnvRef>,
}

impl Environment {
    pub fn new() -> Self {
        Environment {
            values: HashMap::new(),
            enclosing: None,
        }
    }

    pub fn with_enclosing(enclosing: EnvRef) -> Self {
        Environment {
            values: HashMap::new(),
            enclosing: Some(enclosing),
        }
    }

    /// Wrap a frame into a shareable handle.
    pub fn into_ref(self) -> EnvRef {
        Rc::new(RefCell::new(self))
    }

    /// Bind `name` in this frame, replacing any previous binding here.
    pub fn define(&mut self, name: &str, value: Value) {
        self.values.insert(name.to_string(), value);
    }

    /// Look `name` up along the chain without raising an error.
    pub fn lookup(&self, name: &str) -> Option<Value> {
        if let Some(value) = self.values.get(name) {
            Some(value.clone())
        } else if let Some(enclosing) = &self.enclosing {
            enclosing.borrow().lookup(name)
        } else {
            None
        }
    }

    /// Dynamic lookup by name along the chain (used for globals).
    pub fn get(&self, name: &Token) -> Result<Value, RuntimeError> {
        self.lookup(&name.lexeme).ok_or_else(|| undefined(name))
    }

    /// Dynamic assignment by name; the binding must already exist somewhere
    /// along the chain.
    pub fn assign(&mut self, name: &Token, value: Value) -> Result<(), RuntimeError> {
        if let Some(slot) = self.values.get_mut(&name.lexeme) {
            *slot = value;
            Ok(())
        } else if let Some(enclosing) = &self.enclosing {
            enclosing.borrow_mut().assign(name, value)
        } else {
            Err(undefined(name))
        }
    }

    /// The frame `distance` enclosing links away from `env` (0 is `env`).
    pub fn ancestor(env: &EnvRef, distance: usize) -> Option<EnvRef> {
        let mut frame: EnvRef = Rc::clone(env);

        for _ in 0..distance {
            let next: EnvRef = frame.borrow().enclosing.clone()?;
            frame = next;
        }

        Some(frame)
    }

    /// Read a binding at a resolver-computed hop distance.
    pub fn get_at(env: &EnvRef, distance: usize, name: &Token) -> Result<Value, RuntimeError> {
        debug!("get_at '{}' distance {}", name.lexeme, distance);

        let frame: EnvRef = Self::ancestor(env, distance).ok_or_else(|| undefined(name))?;
        let value: Option<Value> = frame.borrow().values.get(&name.lexeme).cloned();

        value.ok_or_else(|| undefined(name))
    }

    /// Write a binding at a resolver-computed hop distance.
    pub fn assign_at(
        env: &EnvRef,
        distance: usize,
        name: &Token,
        value: Value,
    ) -> Result<(), RuntimeError> {
        debug!("assign_at '{}' distance {}", name.lexeme, distance);

        let frame: EnvRef = Self::ancestor(env, distance).ok_or_else(|| undefined(name))?;
        frame.borrow_mut().define(&name.lexeme, value);

        Ok(())
    }
}

fn undefined(name: &Token) -> RuntimeError {
    RuntimeError::new(name, format!("Undefined variable '{}'.", name.lexeme))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::TokenType;

    fn ident(name: &str) -> Token {
        Token::new(TokenType::IDENTIFIER, name, 1)
    }

    #[test]
    fn get_at_skips_shadowing_frames() {
        let outer: EnvRef = Environment::new().into_ref();
        outer.borrow_mut().define("a", Value::Number(1.0));

        let inner: EnvRef = Environment::with_enclosing(Rc::clone(&outer)).into_ref();
        inner.borrow_mut().define("a", Value::Number(2.0));

        let a = ident("a");
        assert!(matches!(Environment::get_at(&inner, 0, &a), Ok(Value::Number(n)) if n == 2.0));
        assert!(matches!(Environment::get_at(&inner, 1, &a), Ok(Value::Number(n)) if n == 1.0));
        assert!(Environment::get_at(&inner, 2, &a).is_err());
    }

    #[test]
    fn assign_walks_the_chain_and_rejects_unknown_names() {
        let outer: EnvRef = Environment::new().into_ref();
        outer.borrow_mut().define("a", Value::Null);
        let inner: EnvRef = Environment::with_enclosing(Rc::clone(&outer)).into_ref();

        inner
            .borrow_mut()
            .assign(&ident("a"), Value::Bool(true))
            .expect("a is defined in the outer frame");
        assert!(matches!(outer.borrow().lookup("a"), Some(Value::Bool(true))));

        let err = inner
            .borrow_mut()
            .assign(&ident("missing"), Value::Null)
            .unwrap_err();
        assert_eq!(err.message, "Undefined variable 'missing'.");
    }
}
