//! Module `scanner` implements a one‑pass, streaming lexer for the scripting
//! language.
//!
//! It transforms source text into a sequence of [`Token`]s, skipping
//! whitespace and comments, and emitting exactly one `EOF` token at the end.
//! Designed as a `FusedIterator`, it can be chained safely with other iterator
//! adapters.
//!
//! # Public API
//!
//! - `Scanner::new(src: &'a str) -> Scanner<'a>`
//!   Create a new lexer over the input text.
//!
//! - `impl Iterator for Scanner<'a>`
//!   Yields `Result<Token, ScriptError>` on each `.next()`.  An `Err` reports a
//!   lexing error with line information; scanning resumes with the next
//!   character.
//!
//! - `scan(src, sink) -> Vec<Token>`
//!   Drain a scanner, routing every error to a [`DiagnosticSink`].
//!
//! # Token Recognition
//!
//! - Single‑character tokens: `(`, `)`, `{`, `}`, `,`, `.`, `-`, `+`, `;`, `*`.
//! - One‑or‑two‑character operators: `!`/`!=`, `=`/`==`, `<`/`<=`, `>`/`>=`,
//!   `&`/`&&`, `|`/`||`.
//! - String literals: `"` … `"`, multi‑line, no escape sequences.
//! - Numeric literals: integer with an optional fractional part.
//! - Identifiers/keywords resolved via a perfect‑hash `KEYWORDS` map.
//!
//! # Example
//!
//! ```rust
//! use jslox::scanner::Scanner;
//!
//! let mut scanner = Scanner::new("console.log(123); // example");
//! for result in &mut scanner {
//!     match result {
//!         Ok(token) => println!("{}", token),
//!         Err(err) => eprintln!("{}", err),
//!     }
//! }
//! ```

use crate::diagnostics::DiagnosticSink;
use crate::error::{Result, ScriptError};
use crate::token::{Token, TokenType};
use log::{debug, info};
use memchr::memchr;
use phf::phf_map;
use std::iter::FusedIterator;

// ─────────────────────────────────────────────────────────────────────────────
// Static keyword map (compile‑time perfect hash)
// ─────────────────────────────────────────────────────────────────────────────

static KEYWORDS: phf::Map<&'static [u8], TokenType> = phf_map! {
    b"class"      => TokenType::CLASS,
    b"const"      => TokenType::CONST,
    b"else"       => TokenType::ELSE,
    b"false"      => TokenType::FALSE,
    b"for"        => TokenType::FOR,
    b"function"   => TokenType::FUNCTION,
    b"if"         => TokenType::IF,
    b"null"       => TokenType::NULL,
    b"new"        => TokenType::NEW,
    b"return"     => TokenType::RETURN,
    b"undefined"  => TokenType::UNDEFINED,
    b"super"      => TokenType::SUPER,
    b"this"       => TokenType::THIS,
    b"true"       => TokenType::TRUE,
    b"let"        => TokenType::LET,
    b"while"      => TokenType::WHILE,
    b"module"     => TokenType::MODULE,
    b"using"      => TokenType::USING,
    b"extends"    => TokenType::EXTENDS,
    b"implements" => TokenType::IMPLEMENTS,
};

/// A single pass **scanner / lexer** that converts source text into a
/// sequence of [`Token`]s.
pub struct Scanner<'a> {
    text: &'a str,              // entire source text
    src: &'a [u8],              // same text viewed as bytes
    start: usize,               // index of the *first* byte of the current lexeme
    curr: usize,                // index *one past* the last byte examined
    line: usize,                // 1‑based line counter (\n increments)
    pending: Option<TokenType>, // recognised token kind waiting to be emitted
}

impl<'a> Scanner<'a> {
    /// Create a new lexer over `text`.
    #[inline]
    pub fn new(text: &'a str) -> Self {
        info!("Scanner created over {} bytes", text.len());

        Self {
            text,
            src: text.as_bytes(),
            start: 0,
            curr: 0,
            line: 1,
            pending: None,
        }
    }

    // ───────────────────────────── primitive helpers ────────────────────────

    #[inline(always)]
    const fn len(&self) -> usize {
        self.src.len()
    }

    #[inline(always)]
    fn is_at_end(&self) -> bool {
        self.curr >= self.len()
    }

    /// Advance one byte and return it.  Callers guard with [`is_at_end`].
    #[inline(always)]
    fn advance(&mut self) -> u8 {
        let b = self.src[self.curr];
        self.curr += 1;
        b
    }

    /// Peek at the current byte without consuming it.  Returns `0` past EOF.
    #[inline(always)]
    fn peek(&self) -> u8 {
        if self.is_at_end() {
            0
        } else {
            self.src[self.curr]
        }
    }

    #[inline(always)]
    fn peek_next(&self) -> u8 {
        if self.curr + 1 >= self.len() {
            0
        } else {
            self.src[self.curr + 1]
        }
    }

    /// Conditionally consume a byte **iff** it matches `expected`.
    #[inline(always)]
    fn match_byte(&mut self, expected: u8) -> bool {
        if !self.is_at_end() && self.peek() == expected {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Pick between a two-byte operator and its one-byte prefix.
    #[inline(always)]
    fn either(&mut self, second: u8, double: TokenType, single: TokenType) -> TokenType {
        if self.match_byte(second) {
            double
        } else {
            single
        }
    }

    // ───────────────────────────── core lexing ─────────────────────────────

    /// Scan a *single* lexeme starting at `self.curr`.  Real tokens are stored
    /// in `self.pending`; whitespace and comments leave it `None`.
    fn scan_token(&mut self) -> Result<()> {
        let b = self.advance();

        let tt: TokenType = match b {
            // ── single‑character punctuators ──────────────────────────────
            b'(' => TokenType::LEFT_PAREN,
            b')' => TokenType::RIGHT_PAREN,
            b'{' => TokenType::LEFT_BRACE,
            b'}' => TokenType::RIGHT_BRACE,
            b',' => TokenType::COMMA,
            b'.' => TokenType::DOT,
            b'-' => TokenType::MINUS,
            b'+' => TokenType::PLUS,
            b';' => TokenType::SEMICOLON,
            b'*' => TokenType::STAR,

            // ── one‑or‑two‑character operators ───────────────────────────
            b'!' => self.either(b'=', TokenType::BANG_EQUAL, TokenType::BANG),
            b'=' => self.either(b'=', TokenType::EQUAL_EQUAL, TokenType::EQUAL),
            b'<' => self.either(b'=', TokenType::LESS_EQUAL, TokenType::LESS),
            b'>' => self.either(b'=', TokenType::GREATER_EQUAL, TokenType::GREATER),
            b'&' => self.either(b'&', TokenType::AMPERSAND_AMPERSAND, TokenType::AMPERSAND),
            b'|' => self.either(b'|', TokenType::PIPE_PIPE, TokenType::PIPE),

            // ── whitespace / newline ─────────────────────────────────────
            b' ' | b'\r' | b'\t' => return Ok(()),

            b'\n' => {
                self.line += 1;
                return Ok(());
            }

            // ── comments (// … until newline) ────────────────────────────
            b'/' => {
                if self.match_byte(b'/') {
                    // The newline itself is left for the main loop to count.
                    if let Some(pos) = memchr(b'\n', &self.src[self.curr..]) {
                        self.curr += pos;
                    } else {
                        self.curr = self.len();
                    }

                    return Ok(());
                }

                TokenType::SLASH
            }

            b'"' => return self.parse_string(),

            b'0'..=b'9' => self.parse_number(),

            b'a'..=b'z' | b'A'..=b'Z' | b'_' => self.parse_identifier(),

            // ── unexpected character ─────────────────────────────────────
            _ => {
                // Report whole characters, not stray UTF‑8 continuation bytes.
                let ch: char = self
                    .text
                    .get(self.start..)
                    .and_then(|rest| rest.chars().next())
                    .unwrap_or(b as char);
                self.curr = self.start + ch.len_utf8();

                return Err(ScriptError::lex(
                    self.line,
                    format!("Unexpected character '{}'.", ch),
                ));
            }
        };

        self.pending = Some(tt);

        Ok(())
    }

    /// Parse a double‑quoted string literal.
    ///
    /// * `self.start` still points to the opening `"`.
    /// * When we return, `self.curr` points **past** the closing `"`.
    fn parse_string(&mut self) -> Result<()> {
        while !self.is_at_end() && self.peek() != b'"' {
            if self.advance() == b'\n' {
                self.line += 1;
            }
        }

        if self.is_at_end() {
            return Err(ScriptError::lex(self.line, "Unterminated string."));
        }

        self.advance(); // closing quote

        let value: &str = &self.text[self.start + 1..self.curr - 1];
        self.pending = Some(TokenType::STRING(value.to_owned()));

        Ok(())
    }

    /// Parse a numeric literal (`123`, `3.14`).  Fractions are optional.
    fn parse_number(&mut self) -> TokenType {
        while self.peek().is_ascii_digit() {
            self.advance();
        }

        if self.peek() == b'.' && self.peek_next().is_ascii_digit() {
            self.advance(); // "."

            while self.peek().is_ascii_digit() {
                self.advance();
            }
        }

        let s: &str = &self.text[self.start..self.curr];
        let n: f64 = s.parse::<f64>().unwrap_or(0.0); // only digits and one '.'

        TokenType::NUMBER(n)
    }

    /// Parse an identifier and decide if it is a **keyword** or a generic
    /// `IDENTIFIER` token.
    fn parse_identifier(&mut self) -> TokenType {
        while {
            let c: u8 = self.peek();
            c.is_ascii_alphanumeric() || c == b'_'
        } {
            self.advance();
        }

        let slice: &[u8] = &self.src[self.start..self.curr];

        KEYWORDS
            .get(slice)
            .cloned()
            .unwrap_or(TokenType::IDENTIFIER)
    }
}

// ───────────────────────── Iterator implementation ─────────────────────────

impl<'a> Iterator for Scanner<'a> {
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.curr <= self.len() {
            // Emit exactly one EOF then terminate.
            if self.curr == self.len() {
                self.curr += 1;
                return Some(Ok(Token::new(TokenType::EOF, "", self.line)));
            }

            self.start = self.curr;
            self.pending = None;

            if let Err(e) = self.scan_token() {
                return Some(Err(e));
            }

            if let Some(tt) = self.pending.take() {
                let lexeme: &str = &self.text[self.start..self.curr];
                debug!("Scanned token ({:?}) on line {}", tt, self.line);

                return Some(Ok(Token::new(tt, lexeme, self.line)));
            }
        }

        None
    }
}

impl<'a> FusedIterator for Scanner<'a> {}

/// Scan a whole source text, reporting lexical errors to `sink` and keeping
/// every successfully scanned token.  The result always ends with `EOF`.
pub fn scan(source: &str, sink: &mut dyn DiagnosticSink) -> Vec<Token> {
    let mut tokens: Vec<Token> = Vec::new();

    for result in Scanner::new(source) {
        match result {
            Ok(token) => tokens.push(token),
            Err(e) => sink.report(&e),
        }
    }

    info!("Scanned {} tokens", tokens.len());

    tokens
}
