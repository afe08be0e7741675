//! Abstract syntax tree produced by the [`Parser`](crate::parser::Parser).
//!
//! Nodes are immutable once built and own their children.  Expressions that
//! refer to a binding carry an [`ExprId`]; the resolver records scope
//! distances against that id so the tree itself never has to be annotated.

use std::rc::Rc;
use std::sync::atomic::{AtomicUsize, Ordering};

use serde::Serialize;

use crate::token::Token;

static NEXT_EXPR_ID: AtomicUsize = AtomicUsize::new(0);

/// Stable identity of a binding reference, unique for the whole process so
/// side tables from several parses (one per REPL line) never collide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ExprId(usize);

impl ExprId {
    /// Hand out the next unused id.
    pub fn fresh() -> Self {
        ExprId(NEXT_EXPR_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// A **literal constant** that appears directly in the source code.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    /// Numeric literal ‑ stored as IEEE‑754 `f64`.
    Number(f64),

    /// String literal without surrounding quotes.
    Str(String),

    True,

    False,

    /// `null` (and `undefined`, which is parsed as the same value).
    Null,
}

/// **Abstract‑Syntax‑Tree node** representing every kind of *expression*.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Literal(LiteralValue),

    /// Prefix unary operator expression
    /// *Example:* `!isReady` or `-42`
    Unary {
        operator: Token,
        right: Box<Expr>,
    },

    /// Infix arithmetic, comparison or equality expression
    /// *Example:* `a + b`, `x <= y`
    Binary {
        left: Box<Expr>,
        operator: Token,
        right: Box<Expr>,
    },

    /// Short‑circuiting `&&` / `||`.
    Logical {
        left: Box<Expr>,
        operator: Token, // `AMPERSAND_AMPERSAND` or `PIPE_PIPE`
        right: Box<Expr>,
    },

    /// Parenthesised sub‑expression: `"(" expression ")"`.
    Grouping(Box<Expr>),

    /// Variable access.
    Variable { id: ExprId, name: Token },

    /// Assignment expression: `identifier "=" expression`
    Assign {
        id: ExprId,
        name: Token,
        value: Box<Expr>,
    },

    /// Function‑, method‑ or class‑call expression
    /// *Example:* `Date.now()` or `add(1, 2)`
    Call {
        callee: Box<Expr>,
        /// The closing `)` token ‑ retained for error reporting.
        paren: Token,
        arguments: Vec<Expr>,
    },

    /// object.property
    Get { object: Box<Expr>, name: Token },

    /// object.property = value
    Set {
        object: Box<Expr>,
        name: Token,
        value: Box<Expr>,
    },

    /// The `this` keyword inside a method.
    This { id: ExprId, keyword: Token },

    /// `super.method`
    Super {
        id: ExprId,
        keyword: Token,
        method: Token,
    },
}

/// `function name(params) { body }`, also used for class methods.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDecl {
    pub name: Token,

    /// Parameter name tokens (arity ≤ 255).
    pub params: Vec<Token>,

    pub body: Vec<Stmt>,
}

/// Reference to the class named after `extends`.
#[derive(Debug, Clone, PartialEq)]
pub struct Superclass {
    pub id: ExprId,
    pub name: Token,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClassDecl {
    pub name: Token,
    pub superclass: Option<Superclass>,
    /// `implements` clause; recorded but plays no part in dispatch.
    pub interface: Option<Token>,
    pub methods: Vec<Rc<FunctionDecl>>,
}

/// **Abstract‑Syntax‑Tree node** for *statements*.  A program is a sequence of
/// these nodes returned by [`Parser::parse`](crate::parser::Parser::parse).
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    /// Stand‑alone expression terminated by a semicolon.
    Expression(Expr),

    /// Variable declaration: `"let" IDENT ("=" initializer)? ";"`.
    Let {
        name: Token,
        initializer: Option<Expr>,
    },

    /// Braced scope containing zero or more declarations/statements.
    Block(Vec<Stmt>),

    If {
        condition: Expr,
        then_branch: Box<Stmt>,
        else_branch: Option<Box<Stmt>>,
    },

    /// `while` loop.  `for` loops are desugared into this form.
    While { condition: Expr, body: Box<Stmt> },

    /// Function declaration ‑ becomes a first‑class callable value.  Shared so
    /// function values can keep their declaration alive.
    Function(Rc<FunctionDecl>),

    Return {
        /// The `return` keyword token (for error locations).
        keyword: Token,

        /// Absent ⇒ `null` is returned.
        value: Option<Expr>,
    },

    Class(ClassDecl),
}
