//! Centralised error hierarchy for the interpreter.
//!
//! The scanner, parser and resolver produce *compile-time* errors which are
//! reported through a [`DiagnosticSink`](crate::diagnostics::DiagnosticSink)
//! and never stop their stage.  The interpreter produces [`RuntimeError`]s,
//! which unwind evaluation with `?` until the top-level `interpret` call.
//!
//! The module **does not** print diagnostics itself.

use thiserror::Error;

use log::info;

use crate::token::{Token, TokenType};

/// A failure raised while executing a program.
///
/// Carries the line and lexeme of the token that caused it so the report can
/// point at the offending operator, name or parenthesis.
#[derive(Debug, Clone, Error, PartialEq)]
#[error("[line {line}] Error at '{lexeme}': {message}")]
pub struct RuntimeError {
    /// 1‑based line where the error occurred.
    pub line: usize,

    /// Lexeme of the offending token.
    pub lexeme: String,

    /// Human‑readable description.
    pub message: String,
}

impl RuntimeError {
    pub fn new<S: Into<String>>(token: &Token, msg: S) -> Self {
        let message: String = msg.into();

        info!(
            "Creating Runtime error: line={}, lexeme={}, msg={}",
            token.line, token.lexeme, message
        );

        RuntimeError {
            line: token.line,
            lexeme: token.lexeme.clone(),
            message,
        }
    }
}

/// Canonical error type used throughout the interpreter.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ScriptError {
    /// Lexical (scanner) error with source line information.
    #[error("[line {line}] Error: {message}")]
    Lex {
        /// Human‑readable description.
        message: String,

        /// 1‑based line where the error occurred.
        line: usize,
    },

    /// Syntactic (parser) error.
    #[error("[line {line}] Error{location}: {message}")]
    Parse {
        message: String,
        /// Either `" at 'lexeme'"` or `" at end"`.
        location: String,
        line: usize,
    },

    /// Static‑analysis failure (scoping and class-context rules).
    #[error("[line {line}] Error{location}: {message}")]
    Resolve {
        message: String,
        location: String,
        line: usize,
    },

    /// Runtime evaluation error.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

impl ScriptError {
    /// Helper constructor for the **scanner**.
    pub fn lex<S: Into<String>>(line: usize, msg: S) -> Self {
        let message: String = msg.into();

        info!("Creating Lex error: line={}, msg={}", line, message);

        ScriptError::Lex { message, line }
    }

    /// Helper constructor for the **parser**.
    pub fn parse<S: Into<String>>(token: &Token, msg: S) -> Self {
        let message: String = msg.into();

        info!("Creating Parse error: line={}, msg={}", token.line, message);

        ScriptError::Parse {
            message,
            location: location_of(token),
            line: token.line,
        }
    }

    /// Helper constructor for the **resolver**.
    pub fn resolve<S: Into<String>>(token: &Token, msg: S) -> Self {
        let message: String = msg.into();

        info!("Creating Resolve error: line={}, msg={}", token.line, message);

        ScriptError::Resolve {
            message,
            location: location_of(token),
            line: token.line,
        }
    }
}

/// Describe where a compile-time error happened, for the `Error<where>` part
/// of a report.
pub fn location_of(token: &Token) -> String {
    if token.token_type == TokenType::EOF {
        " at end".to_string()
    } else {
        format!(" at '{}'", token.lexeme)
    }
}

/// Crate‑wide `Result` alias.
pub type Result<T> = std::result::Result<T, ScriptError>;
