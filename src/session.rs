//! One interpreter plus its diagnostics, fed source text a chunk at a time.
//!
//! A script file is a single [`Session::run`]; the REPL calls it once per
//! line, so globals, functions and classes survive from one line to the next.

use std::cell::RefCell;
use std::io::Write;
use std::rc::Rc;

use log::info;

use crate::diagnostics::Diagnostics;
use crate::interpreter::Interpreter;
use crate::parser::Parser;
use crate::resolver::Resolver;
use crate::scanner;

/// How a single [`Session::run`] ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Completed,
    /// Lexing, parsing or resolution reported at least one error; nothing ran.
    CompileError,
    /// Execution started and stopped on a run-time error.
    RuntimeError,
}

pub struct Session {
    interpreter: Interpreter,
    diagnostics: Diagnostics,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Program output to stdout, diagnostics echoed to stderr.
    pub fn new() -> Self {
        Self {
            interpreter: Interpreter::new(),
            diagnostics: Diagnostics::stderr(),
        }
    }

    /// Program output to `out`, diagnostics only collected.
    pub fn with_output(out: Rc<RefCell<dyn Write>>) -> Self {
        Self {
            interpreter: Interpreter::with_output(out),
            diagnostics: Diagnostics::new(),
        }
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    /// Scan, parse, resolve and execute `source`.  Compile-time errors from
    /// earlier runs do not block this one.
    pub fn run(&mut self, source: &str) -> Outcome {
        let before: usize = self.diagnostics.error_count();

        let tokens = scanner::scan(source, &mut self.diagnostics);
        let statements = Parser::new(&tokens, &mut self.diagnostics).parse();

        if self.diagnostics.error_count() > before {
            info!("Skipping resolution after syntax errors");
            return Outcome::CompileError;
        }

        Resolver::new(&mut self.interpreter, &mut self.diagnostics).resolve(&statements);

        if self.diagnostics.error_count() > before {
            info!("Skipping execution after resolution errors");
            return Outcome::CompileError;
        }

        if self.interpreter.interpret(&statements, &mut self.diagnostics) {
            Outcome::Completed
        } else {
            Outcome::RuntimeError
        }
    }
}
