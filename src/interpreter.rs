use std::cell::RefCell;
use std::collections::HashMap;
use std::io::{self, Write};
use std::mem;
use std::rc::Rc;

use log::{debug, info};

use crate::ast::{ClassDecl, Expr, ExprId, LiteralValue, Stmt, Superclass};
use crate::callable::{Callable, Function};
use crate::class::{Class, Instance};
use crate::diagnostics::DiagnosticSink;
use crate::environment::{EnvRef, Environment};
use crate::error::{RuntimeError, ScriptError};
use crate::native;
use crate::token::{Token, TokenType};
use crate::value::{format_number, Value};

/// Outcome of executing one statement.  `Return` travels up through enclosing
/// blocks and loops until the function call that owns it.
#[derive(Debug, Clone)]
pub enum Flow {
    Normal,
    Return(Value),
}

/// Convenient alias for evaluation results.
pub type IResult<T> = Result<T, RuntimeError>;

pub struct Interpreter {
    globals: EnvRef,
    environment: EnvRef,
    /// Hop distance for every resolved local reference.  References missing
    /// from the table are globals.
    locals: HashMap<ExprId, usize>,
    out: Rc<RefCell<dyn Write>>,
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

impl Interpreter {
    /// An interpreter printing to stdout, with the native modules installed.
    pub fn new() -> Self {
        Self::with_output(Rc::new(RefCell::new(io::stdout())))
    }

    /// An interpreter whose `console.log` writes to `out`.
    pub fn with_output(out: Rc<RefCell<dyn Write>>) -> Self {
        info!("Initializing Interpreter");

        let mut globals = Environment::new();
        native::install(&mut globals);
        let globals: EnvRef = globals.into_ref();

        Self {
            environment: Rc::clone(&globals),
            globals,
            locals: HashMap::new(),
            out,
        }
    }

    /// Record that the reference `id` lives `depth` frames out from the frame
    /// active when it is evaluated.
    pub fn resolve(&mut self, id: ExprId, depth: usize) {
        debug!("Noting local {:?} at depth {}", id, depth);
        self.locals.insert(id, depth);
    }

    /// Write one line of program output.
    pub fn write_line(&mut self, text: &str) -> io::Result<()> {
        let mut out = self.out.borrow_mut();
        writeln!(out, "{}", text)?;
        out.flush()
    }

    /// Execute a program.  The first run-time error is reported to `sink` and
    /// abandons the remaining statements; globals defined so far are kept.
    /// Returns `false` when execution stopped on an error.
    pub fn interpret(&mut self, statements: &[Stmt], sink: &mut dyn DiagnosticSink) -> bool {
        debug!("Interpreting {} statements", statements.len());

        for stmt in statements {
            if let Err(error) = self.execute(stmt) {
                info!("Interpretation stopped: {}", error);
                sink.report(&ScriptError::from(error));
                self.environment = Rc::clone(&self.globals);
                return false;
            }
        }

        info!("Interpretation completed successfully");
        true
    }

    /// Run `statements` inside `environment`, restoring the current frame
    /// afterwards whether or not they fail.
    pub fn execute_block(&mut self, statements: &[Stmt], environment: EnvRef) -> IResult<Flow> {
        let previous: EnvRef = mem::replace(&mut self.environment, environment);

        let result = self.execute_all(statements);

        self.environment = previous;
        result
    }

    fn execute_all(&mut self, statements: &[Stmt]) -> IResult<Flow> {
        for stmt in statements {
            if let Flow::Return(value) = self.execute(stmt)? {
                return Ok(Flow::Return(value));
            }
        }

        Ok(Flow::Normal)
    }

    fn execute(&mut self, stmt: &Stmt) -> IResult<Flow> {
        match stmt {
            Stmt::Expression(expr) => {
                self.evaluate(expr)?;
                Ok(Flow::Normal)
            }

            Stmt::Let { name, initializer } => {
                let value: Value = match initializer {
                    Some(expr) => self.evaluate(expr)?,
                    None => Value::Null,
                };

                debug!("Defining variable '{}' = {}", name.lexeme, value);
                self.environment.borrow_mut().define(&name.lexeme, value);
                Ok(Flow::Normal)
            }

            Stmt::Block(statements) => {
                let frame = Environment::with_enclosing(Rc::clone(&self.environment));
                self.execute_block(statements, frame.into_ref())
            }

            Stmt::If {
                condition,
                then_branch,
                else_branch,
            } => {
                if self.evaluate(condition)?.is_truthy() {
                    self.execute(then_branch)
                } else if let Some(else_branch) = else_branch {
                    self.execute(else_branch)
                } else {
                    Ok(Flow::Normal)
                }
            }

            Stmt::While { condition, body } => {
                while self.evaluate(condition)?.is_truthy() {
                    if let Flow::Return(value) = self.execute(body)? {
                        return Ok(Flow::Return(value));
                    }
                }
                Ok(Flow::Normal)
            }

            Stmt::Function(declaration) => {
                debug!("Defining function '{}'", declaration.name.lexeme);

                let function = Function::new(Rc::clone(declaration), Rc::clone(&self.environment));
                self.environment
                    .borrow_mut()
                    .define(&declaration.name.lexeme, Value::Function(Rc::new(function)));
                Ok(Flow::Normal)
            }

            Stmt::Return { value, .. } => {
                let value: Value = match value {
                    Some(expr) => self.evaluate(expr)?,
                    None => Value::Null,
                };
                Ok(Flow::Return(value))
            }

            Stmt::Class(declaration) => {
                self.execute_class(declaration)?;
                Ok(Flow::Normal)
            }
        }
    }

    fn execute_class(&mut self, declaration: &ClassDecl) -> IResult<()> {
        debug!("Defining class '{}'", declaration.name.lexeme);

        let superclass: Option<Rc<Class>> = match &declaration.superclass {
            Some(Superclass { id, name }) => match self.lookup_variable(*id, name)? {
                Value::Class(class) => Some(class),
                _ => return Err(RuntimeError::new(name, "Superclass must be a class.")),
            },
            None => None,
        };

        self.environment
            .borrow_mut()
            .define(&declaration.name.lexeme, Value::Null);

        let enclosing: EnvRef = Rc::clone(&self.environment);

        if let Some(superclass) = &superclass {
            let mut frame = Environment::with_enclosing(Rc::clone(&enclosing));
            frame.define("super", Value::Class(Rc::clone(superclass)));
            self.environment = frame.into_ref();
        }

        let methods: HashMap<String, Rc<Function>> = declaration
            .methods
            .iter()
            .map(|method| {
                let function = Function::new(Rc::clone(method), Rc::clone(&self.environment));
                (method.name.lexeme.clone(), Rc::new(function))
            })
            .collect();

        let class = Class::new(declaration.name.lexeme.clone(), superclass, methods);

        self.environment = enclosing;
        self.environment
            .borrow_mut()
            .assign(&declaration.name, Value::Class(Rc::new(class)))
    }

    /// Evaluates an expression and returns a Value.
    pub fn evaluate(&mut self, expr: &Expr) -> IResult<Value> {
        match expr {
            Expr::Literal(literal) => Ok(match literal {
                LiteralValue::Number(n) => Value::Number(*n),
                LiteralValue::Str(s) => Value::String(s.clone()),
                LiteralValue::True => Value::Bool(true),
                LiteralValue::False => Value::Bool(false),
                LiteralValue::Null => Value::Null,
            }),

            Expr::Grouping(inner) => self.evaluate(inner),

            Expr::Unary { operator, right } => {
                let right: Value = self.evaluate(right)?;

                match operator.token_type {
                    TokenType::MINUS => match right {
                        Value::Number(n) => Ok(Value::Number(-n)),
                        _ => Err(RuntimeError::new(operator, "Operand must be a number.")),
                    },
                    TokenType::BANG => Ok(Value::Bool(!right.is_truthy())),
                    _ => Err(RuntimeError::new(operator, "Invalid unary operator.")),
                }
            }

            Expr::Binary {
                left,
                operator,
                right,
            } => {
                let left: Value = self.evaluate(left)?;
                let right: Value = self.evaluate(right)?;
                binary(operator, left, right)
            }

            Expr::Logical {
                left,
                operator,
                right,
            } => {
                let left: Value = self.evaluate(left)?;

                let short_circuits = if operator.token_type == TokenType::PIPE_PIPE {
                    left.is_truthy()
                } else {
                    !left.is_truthy()
                };

                if short_circuits {
                    Ok(left)
                } else {
                    self.evaluate(right)
                }
            }

            Expr::Variable { id, name } => self.lookup_variable(*id, name),

            Expr::Assign { id, name, value } => {
                let value: Value = self.evaluate(value)?;

                match self.locals.get(id) {
                    Some(&distance) => {
                        Environment::assign_at(&self.environment, distance, name, value.clone())?
                    }
                    None => self.globals.borrow_mut().assign(name, value.clone())?,
                }

                Ok(value)
            }

            Expr::Call {
                callee,
                paren,
                arguments,
            } => {
                let callee: Value = self.evaluate(callee)?;

                let mut values: Vec<Value> = Vec::with_capacity(arguments.len());
                for argument in arguments {
                    values.push(self.evaluate(argument)?);
                }

                let callable = callee.as_callable().ok_or_else(|| {
                    RuntimeError::new(paren, "Can only call functions and classes.")
                })?;

                if values.len() != callable.arity() {
                    return Err(RuntimeError::new(
                        paren,
                        format!(
                            "Expected {} arguments but got {}.",
                            callable.arity(),
                            values.len()
                        ),
                    ));
                }

                callable.call(self, values, paren)
            }

            Expr::Get { object, name } => match self.evaluate(object)? {
                Value::Instance(instance) => Instance::get(&instance, name),
                Value::Module(module) => module.get(name),
                _ => Err(RuntimeError::new(name, "Only instances have properties.")),
            },

            Expr::Set {
                object,
                name,
                value,
            } => {
                let Value::Instance(instance) = self.evaluate(object)? else {
                    return Err(RuntimeError::new(name, "Only instances have fields."));
                };

                let value: Value = self.evaluate(value)?;
                instance.borrow_mut().set(name, value.clone());
                Ok(value)
            }

            Expr::This { id, keyword } => self.lookup_variable(*id, keyword),

            Expr::Super {
                id,
                keyword,
                method,
            } => self.evaluate_super(*id, keyword, method),
        }
    }

    fn evaluate_super(&mut self, id: ExprId, keyword: &Token, method: &Token) -> IResult<Value> {
        let distance: usize = self.locals.get(&id).copied().ok_or_else(|| {
            RuntimeError::new(keyword, "Can't use 'super' outside of a class.")
        })?;

        let Value::Class(superclass) = Environment::get_at(&self.environment, distance, keyword)?
        else {
            return Err(RuntimeError::new(keyword, "Superclass must be a class."));
        };

        // `this` always sits in the frame just inside the one holding `super`.
        let this_token = Token::new(TokenType::THIS, "this", keyword.line);
        let Value::Instance(instance) =
            Environment::get_at(&self.environment, distance.saturating_sub(1), &this_token)?
        else {
            return Err(RuntimeError::new(keyword, "Only instances have properties."));
        };

        match superclass.find_method(&method.lexeme) {
            Some(found) => Ok(Value::Function(Rc::new(found.bind(&instance)))),
            None => Err(RuntimeError::new(
                method,
                format!("Undefined property '{}'.", method.lexeme),
            )),
        }
    }

    fn lookup_variable(&self, id: ExprId, name: &Token) -> IResult<Value> {
        match self.locals.get(&id) {
            Some(&distance) => Environment::get_at(&self.environment, distance, name),
            None => self.globals.borrow().get(name),
        }
    }
}

fn binary(operator: &Token, left: Value, right: Value) -> IResult<Value> {
    match operator.token_type {
        TokenType::PLUS => match (left, right) {
            (Value::Number(a), Value::Number(b)) => Ok(Value::Number(a + b)),
            (Value::String(a), Value::String(b)) => Ok(Value::String(a + &b)),
            (Value::Number(a), Value::String(b)) => Ok(Value::String(format_number(a) + &b)),
            (Value::String(a), Value::Number(b)) => Ok(Value::String(a + &format_number(b))),
            _ => Err(RuntimeError::new(
                operator,
                "Operands must be two numbers or two strings.",
            )),
        },

        TokenType::MINUS => {
            let (a, b) = number_operands(operator, &left, &right)?;
            Ok(Value::Number(((a - b) * 100.0).round_ties_even() / 100.0))
        }

        TokenType::STAR => {
            let (a, b) = number_operands(operator, &left, &right)?;
            Ok(Value::Number(a * b))
        }

        TokenType::SLASH => {
            let (a, b) = number_operands(operator, &left, &right)?;
            Ok(Value::Number(a / b))
        }

        TokenType::GREATER => {
            let (a, b) = number_operands(operator, &left, &right)?;
            Ok(Value::Bool(a > b))
        }

        // Unlike `>`, these compare without a type check; anything that is
        // not a number behaves as NaN.
        TokenType::GREATER_EQUAL => Ok(Value::Bool(as_number(&left) >= as_number(&right))),
        TokenType::LESS => Ok(Value::Bool(as_number(&left) < as_number(&right))),
        TokenType::LESS_EQUAL => Ok(Value::Bool(as_number(&left) <= as_number(&right))),

        TokenType::EQUAL_EQUAL => Ok(Value::Bool(left.is_equal(&right))),
        TokenType::BANG_EQUAL => Ok(Value::Bool(!left.is_equal(&right))),

        _ => Err(RuntimeError::new(operator, "Invalid binary operator.")),
    }
}

fn number_operands(operator: &Token, left: &Value, right: &Value) -> IResult<(f64, f64)> {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => Ok((*a, *b)),
        _ => Err(RuntimeError::new(operator, "Operands must be numbers.")),
    }
}

fn as_number(value: &Value) -> f64 {
    match value {
        Value::Number(n) => *n,
        _ => f64::NAN,
    }
}
