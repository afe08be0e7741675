//! Shared diagnostic sink.
//!
//! Every pipeline stage reports through [`DiagnosticSink`] instead of
//! returning on the first failure, so a single run can surface several
//! independent problems.  The sink keeps two sticky flags the entry point
//! uses to pick the process exit code.

use log::debug;

use crate::error::{RuntimeError, ScriptError};

/// Receiver for compile-time and run-time error reports.
pub trait DiagnosticSink {
    /// Report a lexical, syntax or resolution error.  `location` is either
    /// empty, `" at 'lexeme'"` or `" at end"`.
    fn report_compile_error(&mut self, line: usize, location: &str, message: &str);

    /// Report an error raised while executing the program.
    fn report_runtime_error(&mut self, line: usize, lexeme: &str, message: &str);

    /// Route a [`ScriptError`] to the matching report method.
    fn report(&mut self, error: &ScriptError) {
        match error {
            ScriptError::Lex { message, line } => self.report_compile_error(*line, "", message),

            ScriptError::Parse {
                message,
                location,
                line,
            }
            | ScriptError::Resolve {
                message,
                location,
                line,
            } => self.report_compile_error(*line, location, message),

            ScriptError::Runtime(RuntimeError {
                line,
                lexeme,
                message,
            }) => self.report_runtime_error(*line, lexeme, message),
        }
    }
}

/// Standard sink: renders `"[line L] Error<where>: message"` lines, keeps
/// them for inspection and optionally echoes them to stderr as they arrive.
#[derive(Debug, Default)]
pub struct Diagnostics {
    reports: Vec<String>,
    had_compile_error: bool,
    had_runtime_error: bool,
    echo: bool,
}

impl Diagnostics {
    /// A sink that only collects reports.
    pub fn new() -> Self {
        Self::default()
    }

    /// A sink that also writes every report to stderr immediately.
    pub fn stderr() -> Self {
        Self {
            echo: true,
            ..Self::default()
        }
    }

    pub fn had_compile_error(&self) -> bool {
        self.had_compile_error
    }

    pub fn had_runtime_error(&self) -> bool {
        self.had_runtime_error
    }

    /// Every rendered report, oldest first.
    pub fn reports(&self) -> &[String] {
        &self.reports
    }

    pub fn error_count(&self) -> usize {
        self.reports.len()
    }

    fn push(&mut self, rendered: String) {
        debug!("Diagnostic: {}", rendered);

        if self.echo {
            eprintln!("{}", rendered);
        }

        self.reports.push(rendered);
    }
}

impl DiagnosticSink for Diagnostics {
    fn report_compile_error(&mut self, line: usize, location: &str, message: &str) {
        self.had_compile_error = true;
        self.push(format!("[line {}] Error{}: {}", line, location, message));
    }

    fn report_runtime_error(&mut self, line: usize, lexeme: &str, message: &str) {
        self.had_runtime_error = true;
        self.push(format!("[line {}] Error at '{}': {}", line, lexeme, message));
    }
}
