#[cfg(test)]
mod scanner_tests {
    use jslox::diagnostics::Diagnostics;
    use jslox::scanner::*;
    use jslox::token::*;
    use pretty_assertions::assert_eq;

    fn assert_token_sequence(source: &str, expected: &[(TokenType, &str)]) {
        let scanner = Scanner::new(source);
        let tokens: Vec<_> = scanner.filter_map(Result::ok).collect();

        assert_eq!(tokens.len(), expected.len());

        for (actual, (expected_type, expected_lexeme)) in tokens.iter().zip(expected.iter()) {
            assert_eq!(actual.token_type, *expected_type);
            assert_eq!(actual.lexeme, *expected_lexeme);
        }
    }

    #[test]
    fn test_scanner_01_symbols() {
        assert_token_sequence(
            "({*.,+*})",
            &[
                (TokenType::LEFT_PAREN, "("),
                (TokenType::LEFT_BRACE, "{"),
                (TokenType::STAR, "*"),
                (TokenType::DOT, "."),
                (TokenType::COMMA, ","),
                (TokenType::PLUS, "+"),
                (TokenType::STAR, "*"),
                (TokenType::RIGHT_BRACE, "}"),
                (TokenType::RIGHT_PAREN, ")"),
                (TokenType::EOF, ""),
            ],
        );
    }

    #[test]
    fn test_scanner_02_two_char_operators() {
        assert_token_sequence(
            "!= == <= >= && || & | ! = < >",
            &[
                (TokenType::BANG_EQUAL, "!="),
                (TokenType::EQUAL_EQUAL, "=="),
                (TokenType::LESS_EQUAL, "<="),
                (TokenType::GREATER_EQUAL, ">="),
                (TokenType::AMPERSAND_AMPERSAND, "&&"),
                (TokenType::PIPE_PIPE, "||"),
                (TokenType::AMPERSAND, "&"),
                (TokenType::PIPE, "|"),
                (TokenType::BANG, "!"),
                (TokenType::EQUAL, "="),
                (TokenType::LESS, "<"),
                (TokenType::GREATER, ">"),
                (TokenType::EOF, ""),
            ],
        );
    }

    #[test]
    fn test_scanner_03_keywords_and_identifiers() {
        assert_token_sequence(
            "class extends implements function let const new undefined null foo _bar9",
            &[
                (TokenType::CLASS, "class"),
                (TokenType::EXTENDS, "extends"),
                (TokenType::IMPLEMENTS, "implements"),
                (TokenType::FUNCTION, "function"),
                (TokenType::LET, "let"),
                (TokenType::CONST, "const"),
                (TokenType::NEW, "new"),
                (TokenType::UNDEFINED, "undefined"),
                (TokenType::NULL, "null"),
                (TokenType::IDENTIFIER, "foo"),
                (TokenType::IDENTIFIER, "_bar9"),
                (TokenType::EOF, ""),
            ],
        );
    }

    #[test]
    fn test_scanner_04_comments_are_skipped() {
        assert_token_sequence(
            "a // everything here is ignored ( ) {\n/ b",
            &[
                (TokenType::IDENTIFIER, "a"),
                (TokenType::SLASH, "/"),
                (TokenType::IDENTIFIER, "b"),
                (TokenType::EOF, ""),
            ],
        );
    }

    #[test]
    fn test_scanner_05_literals_carry_values() {
        let tokens: Vec<Token> = Scanner::new("12.5 7 \"hi there\" 3.").filter_map(Result::ok).collect();

        assert!(matches!(tokens[0].token_type, TokenType::NUMBER(n) if n == 12.5));
        assert!(matches!(tokens[1].token_type, TokenType::NUMBER(n) if n == 7.0));
        assert!(matches!(&tokens[2].token_type, TokenType::STRING(s) if s == "hi there"));
        assert_eq!(tokens[2].lexeme, "\"hi there\"");

        // a trailing dot is not part of the number
        assert!(matches!(tokens[3].token_type, TokenType::NUMBER(n) if n == 3.0));
        assert_eq!(tokens[4].token_type, TokenType::DOT);
    }

    #[test]
    fn test_scanner_06_line_numbers() {
        let tokens: Vec<Token> = Scanner::new("a\nb\n\n\"x\ny\" c")
            .filter_map(Result::ok)
            .collect();

        let lines: Vec<usize> = tokens.iter().map(|t| t.line).collect();
        assert_eq!(lines, vec![1, 2, 5, 5, 5]);
    }

    #[test]
    fn test_unexpected_chars_token_sequence() {
        let source = ",.$(#";
        let results: Vec<_> = Scanner::new(source).collect();

        // COMMA, DOT, error for '$', LEFT_PAREN, error for '#', EOF
        assert_eq!(results.len(), 6, "Expected 6 items in result");

        assert_token_matches(&results[0], TokenType::COMMA, ",");
        assert_token_matches(&results[1], TokenType::DOT, ".");
        assert_token_matches(&results[3], TokenType::LEFT_PAREN, "(");
        assert_token_matches(&results[5], TokenType::EOF, "");

        let errors: Vec<String> = results
            .iter()
            .filter_map(|r| r.as_ref().err())
            .map(|e| e.to_string())
            .collect();

        assert_eq!(
            errors,
            vec![
                "[line 1] Error: Unexpected character '$'.".to_string(),
                "[line 1] Error: Unexpected character '#'.".to_string(),
            ]
        );
    }

    #[test]
    fn test_non_ascii_character_reported_once() {
        let results: Vec<_> = Scanner::new("é;").collect();

        assert_eq!(results.len(), 3);
        assert!(results[0].is_err());
        assert_token_matches(&results[1], TokenType::SEMICOLON, ";");
    }

    #[test]
    fn test_unterminated_string_goes_to_sink() {
        let mut sink = Diagnostics::new();
        let tokens = scan("let s = \"open\n", &mut sink);

        assert!(sink.had_compile_error());
        assert_eq!(
            sink.reports(),
            &["[line 2] Error: Unterminated string.".to_string()]
        );
        assert_eq!(tokens.last().map(|t| t.token_type.clone()), Some(TokenType::EOF));
    }

    #[test]
    fn test_token_display() {
        let tokens: Vec<String> = Scanner::new("( 7 \"hi\" 2.5 let")
            .map(|result| match result {
                Ok(token) => token.to_string(),
                Err(e) => panic!("Expected token, got error: {}", e),
            })
            .collect();

        assert_eq!(
            tokens,
            vec![
                "LEFT_PAREN ( null",
                "NUMBER 7 7.0",
                "STRING \"hi\" hi",
                "NUMBER 2.5 2.5",
                "LET let null",
                "EOF  null",
            ]
        );
    }

    fn assert_token_matches(
        result: &Result<Token, jslox::error::ScriptError>,
        expected_type: TokenType,
        expected_lexeme: &str,
    ) {
        match result {
            Ok(token) => {
                assert_eq!(token.token_type, expected_type);
                assert_eq!(token.lexeme, expected_lexeme);
            }
            Err(e) => panic!("Expected token, got error: {}", e),
        }
    }
}
