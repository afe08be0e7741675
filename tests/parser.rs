#[cfg(test)]
mod parser_tests {
    use jslox::ast::Stmt;
    use jslox::ast_printer::AstPrinter;
    use jslox::diagnostics::Diagnostics;
    use jslox::parser::Parser;
    use jslox::scanner::scan;
    use jslox::token::{Token, TokenType};
    use pretty_assertions::assert_eq;

    fn parse(source: &str) -> (Vec<Stmt>, Diagnostics) {
        let mut sink = Diagnostics::new();
        let tokens = scan(source, &mut sink);
        let statements = Parser::new(&tokens, &mut sink).parse();
        (statements, sink)
    }

    fn print(source: &str) -> String {
        let (statements, sink) = parse(source);
        assert_eq!(sink.reports(), &[] as &[String], "unexpected syntax errors");
        AstPrinter::print_program(&statements)
    }

    #[test]
    fn test_parser_01_precedence() {
        assert_eq!(print("1 + 2 * 3 - 4;"), "(; (- (+ 1.0 (* 2.0 3.0)) 4.0))");
        assert_eq!(print("-a == !b;"), "(; (== (- a) (! b)))");
        assert_eq!(print("(1 + 2) / 3;"), "(; (/ (group (+ 1.0 2.0)) 3.0))");
        assert_eq!(print("a <= b != c > d;"), "(; (!= (<= a b) (> c d)))");
    }

    #[test]
    fn test_parser_02_logical_operators() {
        assert_eq!(print("a && b || c;"), "(; (|| (&& a b) c))");
        assert_eq!(print("a || b && c;"), "(; (|| a (&& b c)))");
    }

    #[test]
    fn test_parser_03_for_desugars_to_while() {
        assert_eq!(
            print("for (let i = 0; i < 3; i = i + 1) console.log(i);"),
            "(block (let i 0.0) (while (< i 3.0) (block (; (call (. console log) i)) (; (= i (+ i 1.0))))))"
        );
        assert_eq!(print("for (;;) x;"), "(while true (; x))");
    }

    #[test]
    fn test_parser_04_new_and_undefined() {
        assert_eq!(print("new Point(1, 2);"), "(; (call Point 1.0 2.0))");
        assert_eq!(print("let u = undefined;"), "(let u null)");
        assert_eq!(print("let v;"), "(let v)");
    }

    #[test]
    fn test_parser_05_assignment_targets() {
        assert_eq!(print("a = b = 3;"), "(; (= a (= b 3.0)))");
        assert_eq!(print("p.x = 1;"), "(; (= (. p x) 1.0))");
    }

    #[test]
    fn test_parser_06_class_declaration() {
        let source = "class B extends A implements Shape {
            constructor(x) { this.x = x; }
            area() { return super.area(); }
        }";

        assert_eq!(
            print(source),
            "(class B < A : Shape (method constructor (x) (; (= (. this x) x))) (method area () (return (call (super area)))))"
        );
    }

    #[test]
    fn test_parser_07_statements() {
        assert_eq!(
            print("if (a) { b; } else c;"),
            "(if a (block (; b)) (; c))"
        );
        assert_eq!(
            print("function add(a, b) { return a + b; }"),
            "(function add (a b) (return (+ a b)))"
        );
        assert_eq!(print("while (x) return;"), "(while x (return))");
    }

    #[test]
    fn test_parser_08_recovers_after_errors() {
        let (statements, sink) = parse("let = 1;\nlet ok = 2;\n1 +;");

        assert_eq!(
            sink.reports(),
            &[
                "[line 1] Error at '=': Expected variable name.".to_string(),
                "[line 3] Error at ';': Expected expression.".to_string(),
            ]
        );
        assert_eq!(AstPrinter::print_program(&statements), "(let ok 2.0)");
    }

    #[test]
    fn test_parser_09_error_at_end() {
        let (_, sink) = parse("let a = 1");

        assert_eq!(
            sink.reports(),
            &["[line 1] Error at end: Expected ';' after variable declaration.".to_string()]
        );
    }

    #[test]
    fn test_parser_10_invalid_assignment_target_is_not_fatal() {
        let (statements, sink) = parse("1 = 2;\nlet after = 3;");

        assert_eq!(
            sink.reports(),
            &["[line 1] Error at '=': Invalid assignment target.".to_string()]
        );
        assert_eq!(statements.len(), 2);
    }

    #[test]
    fn test_parser_11_constructor_is_not_a_property() {
        let (_, sink) = parse("a.constructor();");

        assert_eq!(
            sink.reports(),
            &["[line 1] Error at 'constructor': Can't call constructor directly on an instance."
                .to_string()]
        );
    }

    #[test]
    fn test_parser_12_single_ampersand_is_not_an_expression() {
        let (statements, sink) = parse("a & b;");

        assert!(sink.had_compile_error());
        assert!(statements.is_empty());
    }

    #[test]
    fn test_parser_13_too_many_parameters() {
        let params: String = (0..256)
            .map(|i| format!("p{}", i))
            .collect::<Vec<_>>()
            .join(", ");
        let (statements, sink) = parse(&format!("function f({}) {{}}\nlet after = 1;", params));

        assert_eq!(
            sink.reports(),
            &["[line 1] Error at 'p255': Can't have more than 255 parameters.".to_string()]
        );
        assert_eq!(statements.len(), 2);
    }

    #[test]
    fn test_parser_14_too_many_arguments() {
        let args: String = (0..256)
            .map(|i| format!("a{}", i))
            .collect::<Vec<_>>()
            .join(", ");
        let (statements, sink) = parse(&format!("f({});\nlet after = 1;", args));

        assert_eq!(
            sink.reports(),
            &["[line 1] Error at 'a255': Can't have more than 255 arguments.".to_string()]
        );
        assert_eq!(statements.len(), 2);
    }

    #[test]
    fn test_parser_15_token_slice_without_eof() {
        let tokens: Vec<Token> = vec![Token::new(TokenType::IDENTIFIER, "a", 1)];
        let mut sink = Diagnostics::new();

        let statements = Parser::new(&tokens, &mut sink).parse();

        assert!(statements.is_empty());
        assert_eq!(
            sink.reports(),
            &["[line 1] Error at 'a': Expected ';' after expression.".to_string()]
        );
    }
}
