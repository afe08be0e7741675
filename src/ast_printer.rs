use crate::ast::{ClassDecl, Expr, FunctionDecl, LiteralValue, Stmt};

/// Renders the tree in parenthesised prefix form, one top-level statement per
/// line.  Used by `--emit ast` and by the parser tests.
pub struct AstPrinter;

impl AstPrinter {
    pub fn print_program(statements: &[Stmt]) -> String {
        statements
            .iter()
            .map(Self::print_stmt)
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn print_stmt(stmt: &Stmt) -> String {
        match stmt {
            Stmt::Expression(expr) => format!("(; {})", Self::print(expr)),

            Stmt::Let { name, initializer } => match initializer {
                Some(expr) => format!("(let {} {})", name.lexeme, Self::print(expr)),
                None => format!("(let {})", name.lexeme),
            },

            Stmt::Block(statements) => Self::list("block", statements.iter().map(Self::print_stmt)),

            Stmt::If {
                condition,
                then_branch,
                else_branch,
            } => match else_branch {
                Some(else_branch) => format!(
                    "(if {} {} {})",
                    Self::print(condition),
                    Self::print_stmt(then_branch),
                    Self::print_stmt(else_branch)
                ),
                None => format!(
                    "(if {} {})",
                    Self::print(condition),
                    Self::print_stmt(then_branch)
                ),
            },

            Stmt::While { condition, body } => format!(
                "(while {} {})",
                Self::print(condition),
                Self::print_stmt(body)
            ),

            Stmt::Function(declaration) => Self::function("function", declaration),

            Stmt::Return { value, .. } => match value {
                Some(expr) => format!("(return {})", Self::print(expr)),
                None => "(return)".into(),
            },

            Stmt::Class(declaration) => Self::class(declaration),
        }
    }

    pub fn print(expr: &Expr) -> String {
        match expr {
            // ── literals ────────────────────────────────────────────────
            Expr::Literal(lit) => match lit {
                LiteralValue::True => "true".into(),

                LiteralValue::False => "false".into(),

                LiteralValue::Null => "null".into(),

                LiteralValue::Str(s) => s.clone(),

                LiteralValue::Number(n) => {
                    if n.fract() == 0.0 {
                        // 3 → 3.0
                        format!("{:.1}", n)
                    } else {
                        n.to_string()
                    }
                }
            },

            Expr::Grouping(inner) => format!("(group {})", Self::print(inner)),

            Expr::Unary { operator, right } => {
                format!("({} {})", operator.lexeme, Self::print(right))
            }

            Expr::Binary {
                left,
                operator,
                right,
            }
            | Expr::Logical {
                left,
                operator,
                right,
            } => format!(
                "({} {} {})",
                operator.lexeme,
                Self::print(left),
                Self::print(right)
            ),

            Expr::Variable { name, .. } => name.lexeme.clone(),

            Expr::Assign { name, value, .. } => {
                format!("(= {} {})", name.lexeme, Self::print(value))
            }

            Expr::Call {
                callee, arguments, ..
            } => {
                let mut s = format!("(call {}", Self::print(callee));
                for arg in arguments {
                    s.push(' ');
                    s.push_str(&Self::print(arg));
                }
                s.push(')');
                s
            }

            Expr::Get { object, name } => format!("(. {} {})", Self::print(object), name.lexeme),

            Expr::Set {
                object,
                name,
                value,
            } => format!(
                "(= (. {} {}) {})",
                Self::print(object),
                name.lexeme,
                Self::print(value)
            ),

            Expr::This { .. } => "this".into(),

            Expr::Super { method, .. } => format!("(super {})", method.lexeme),
        }
    }

    fn function(keyword: &str, declaration: &FunctionDecl) -> String {
        let params: Vec<&str> = declaration
            .params
            .iter()
            .map(|p| p.lexeme.as_str())
            .collect();

        let mut s = format!(
            "({} {} ({})",
            keyword,
            declaration.name.lexeme,
            params.join(" ")
        );
        for stmt in &declaration.body {
            s.push(' ');
            s.push_str(&Self::print_stmt(stmt));
        }
        s.push(')');
        s
    }

    fn class(declaration: &ClassDecl) -> String {
        let mut s = format!("(class {}", declaration.name.lexeme);

        if let Some(superclass) = &declaration.superclass {
            s.push_str(" < ");
            s.push_str(&superclass.name.lexeme);
        }
        if let Some(interface) = &declaration.interface {
            s.push_str(" : ");
            s.push_str(&interface.lexeme);
        }
        for method in &declaration.methods {
            s.push(' ');
            s.push_str(&Self::function("method", method));
        }
        s.push(')');
        s
    }

    fn list(head: &str, items: impl Iterator<Item = String>) -> String {
        let mut s = format!("({}", head);
        for item in items {
            s.push(' ');
            s.push_str(&item);
        }
        s.push(')');
        s
    }
}
