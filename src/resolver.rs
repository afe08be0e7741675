//! Static resolver pass.
//!
//! One walk over the AST that does three things:
//! 1. Build lexical scopes (stack of `HashMap<String, bool>` tracking declared/defined).
//! 2. Report static errors (redeclaration, read in own initializer, misplaced
//!    `return`, `this` and `super`).
//! 3. Tell the interpreter, for *each* local reference, how many frames out its
//!    binding lives.  References found in no scope are left to the globals.
//!
//! Errors go to the diagnostic sink and the walk carries on, so one pass can
//! report every problem in a program.

use std::collections::HashMap;

use log::{debug, info};

use crate::ast::{ClassDecl, Expr, ExprId, FunctionDecl, Stmt};
use crate::class::CONSTRUCTOR;
use crate::diagnostics::DiagnosticSink;
use crate::error::ScriptError;
use crate::interpreter::Interpreter;
use crate::token::Token;

/// What kind of function body we are in.  Used to validate `return`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum FunctionType {
    None,
    Function,
    Constructor,
    Method,
}

/// What kind of class body we are in.  Used to validate `this` and `super`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum ClassType {
    None,
    Class,
    Subclass,
}

/// Resolver: tracks scopes, enforces static rules, and records binding
/// distances by calling back into the interpreter.
pub struct Resolver<'i, 's> {
    interpreter: &'i mut Interpreter,
    sink: &'s mut dyn DiagnosticSink,
    scopes: Vec<HashMap<String, bool>>, // false=declared, true=defined
    current_function: FunctionType,
    current_class: ClassType,
}

impl<'i, 's> Resolver<'i, 's> {
    pub fn new(interpreter: &'i mut Interpreter, sink: &'s mut dyn DiagnosticSink) -> Self {
        info!("Resolver instantiated");

        Resolver {
            interpreter,
            sink,
            scopes: Vec::new(),
            current_function: FunctionType::None,
            current_class: ClassType::None,
        }
    }

    /// Walk all top‑level statements.
    pub fn resolve(&mut self, statements: &[Stmt]) {
        info!(
            "Beginning resolve pass over {} statement(s)",
            statements.len()
        );

        for stmt in statements {
            self.resolve_stmt(stmt);
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Statement resolution
    // ─────────────────────────────────────────────────────────────────────────

    fn resolve_stmt(&mut self, stmt: &Stmt) {
        match stmt {
            Stmt::Block(statements) => {
                self.begin_scope();
                for s in statements {
                    self.resolve_stmt(s);
                }
                self.end_scope();
            }

            Stmt::Let { name, initializer } => {
                self.declare(name);
                if let Some(expr) = initializer {
                    self.resolve_expr(expr);
                }
                self.define(name);
            }

            Stmt::Function(declaration) => {
                // the name is visible inside its own body, for recursion
                self.declare(&declaration.name);
                self.define(&declaration.name);
                self.resolve_function(declaration, FunctionType::Function);
            }

            Stmt::Class(declaration) => self.resolve_class(declaration),

            Stmt::Expression(expr) => self.resolve_expr(expr),

            Stmt::If {
                condition,
                then_branch,
                else_branch,
            } => {
                self.resolve_expr(condition);
                self.resolve_stmt(then_branch);
                if let Some(eb) = else_branch.as_deref() {
                    self.resolve_stmt(eb);
                }
            }

            Stmt::While { condition, body } => {
                self.resolve_expr(condition);
                self.resolve_stmt(body);
            }

            Stmt::Return { keyword, value } => {
                match self.current_function {
                    FunctionType::None => self.error(keyword, "Can't return from top-level code."),
                    FunctionType::Constructor if value.is_some() => {
                        self.error(keyword, "Can't return a value from a constructor.")
                    }
                    FunctionType::Constructor => {
                        self.error(keyword, "Can't return from a constructor.")
                    }
                    FunctionType::Function | FunctionType::Method => {}
                }

                if let Some(expr) = value {
                    self.resolve_expr(expr);
                }
            }
        }
    }

    fn resolve_class(&mut self, declaration: &ClassDecl) {
        let enclosing_class = self.current_class;
        self.current_class = ClassType::Class;

        self.declare(&declaration.name);
        self.define(&declaration.name);

        if let Some(superclass) = &declaration.superclass {
            if superclass.name.lexeme == declaration.name.lexeme {
                self.error(&superclass.name, "A class can't inherit from itself.");
            }

            self.current_class = ClassType::Subclass;
            self.resolve_local(superclass.id, &superclass.name);

            self.begin_scope();
            self.define_synthetic("super");
        }

        self.begin_scope();
        self.define_synthetic("this");

        for method in &declaration.methods {
            let kind = if method.name.lexeme == CONSTRUCTOR {
                FunctionType::Constructor
            } else {
                FunctionType::Method
            };
            self.resolve_function(method, kind);
        }

        self.end_scope();

        if declaration.superclass.is_some() {
            self.end_scope();
        }

        self.current_class = enclosing_class;
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Expression resolution
    // ─────────────────────────────────────────────────────────────────────────

    fn resolve_expr(&mut self, expr: &Expr) {
        match expr {
            Expr::Literal(_) => {}

            Expr::Grouping(inner) => self.resolve_expr(inner),

            Expr::Unary { right, .. } => self.resolve_expr(right),

            Expr::Binary { left, right, .. } | Expr::Logical { left, right, .. } => {
                self.resolve_expr(left);
                self.resolve_expr(right);
            }

            Expr::Variable { id, name } => {
                if self.scopes.last().and_then(|scope| scope.get(&name.lexeme)) == Some(&false) {
                    self.error(name, "Can't read local variable in its own initializer.");
                }
                self.resolve_local(*id, name);
            }

            Expr::Assign { id, name, value } => {
                // right-hand side first, then bind the target
                self.resolve_expr(value);
                self.resolve_local(*id, name);
            }

            Expr::Call {
                callee, arguments, ..
            } => {
                self.resolve_expr(callee);
                for arg in arguments {
                    self.resolve_expr(arg);
                }
            }

            Expr::Get { object, .. } => self.resolve_expr(object),

            Expr::Set { object, value, .. } => {
                self.resolve_expr(value);
                self.resolve_expr(object);
            }

            Expr::This { id, keyword } => {
                if self.current_class == ClassType::None {
                    self.error(keyword, "Can't use 'this' outside of a class.");
                    return;
                }
                self.resolve_local(*id, keyword);
            }

            Expr::Super { id, keyword, .. } => {
                match self.current_class {
                    ClassType::None => {
                        self.error(keyword, "Can't use 'super' outside of a class.")
                    }
                    ClassType::Class => {
                        self.error(keyword, "Can't use 'super' in a class with no superclass.")
                    }
                    ClassType::Subclass => {}
                }
                self.resolve_local(*id, keyword);
            }
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Function helper
    // ─────────────────────────────────────────────────────────────────────────

    /// Enter a fresh scope for a function’s parameters + body.
    fn resolve_function(&mut self, declaration: &FunctionDecl, kind: FunctionType) {
        let enclosing = self.current_function;
        self.current_function = kind;

        self.begin_scope();
        for param in &declaration.params {
            self.declare(param);
            self.define(param);
        }
        for stmt in &declaration.body {
            self.resolve_stmt(stmt);
        }
        self.end_scope();

        self.current_function = enclosing;
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Scope management
    // ─────────────────────────────────────────────────────────────────────────

    #[inline]
    fn begin_scope(&mut self) {
        self.scopes.push(HashMap::new());
    }

    #[inline]
    fn end_scope(&mut self) {
        self.scopes.pop();
    }

    fn declare(&mut self, name: &Token) {
        let Some(scope) = self.scopes.last_mut() else {
            return;
        };

        if scope.contains_key(&name.lexeme) {
            self.error(name, "Already a variable with this name in this scope.");
            return;
        }

        scope.insert(name.lexeme.clone(), false);
    }

    fn define(&mut self, name: &Token) {
        if let Some(scope) = self.scopes.last_mut() {
            scope.insert(name.lexeme.clone(), true);
        }
    }

    /// Bind an implicit name (`this`, `super`) in the innermost scope.
    fn define_synthetic(&mut self, name: &str) {
        if let Some(scope) = self.scopes.last_mut() {
            scope.insert(name.to_string(), true);
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Binding‑distance helper
    // ─────────────────────────────────────────────────────────────────────────

    /// Record this reference as a local at depth `d`, or leave it global if no
    /// scope declares it.
    fn resolve_local(&mut self, id: ExprId, name: &Token) {
        for (depth, scope) in self.scopes.iter().rev().enumerate() {
            if scope.contains_key(&name.lexeme) {
                debug!("Resolved '{}' at depth {}", name.lexeme, depth);
                self.interpreter.resolve(id, depth);
                return;
            }
        }

        debug!("Resolved '{}' as global", name.lexeme);
    }

    fn error(&mut self, token: &Token, message: &str) {
        self.sink.report(&ScriptError::resolve(token, message));
    }
}
