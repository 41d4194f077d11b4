#[cfg(test)]
mod syntax {
    use css_abbreviation::parsing::{self, ParsingError};

    /// Helper function to check if parsing produces the expected error type
    fn expect_error(content: &str, expected: ParsingError) {
        let result = parsing::parse(content);
        match result {
            Ok(_) => panic!(
                "Expected parsing to fail, but it succeeded for input: {}",
                content
            ),
            Err(error) => {
                if std::mem::discriminant(&error) != std::mem::discriminant(&expected) {
                    panic!(
                        "Expected error type like {:?} but got: {:?} for input '{}'",
                        expected, error, content
                    );
                }
            }
        }
    }

    #[test]
    fn malformed_alpha() {
        expect_error("c#.", ParsingError::MalformedAlpha(0));
        expect_error("c#fc0.", ParsingError::MalformedAlpha(0));
        expect_error("c#fc0.x", ParsingError::MalformedAlpha(0));
    }

    #[test]
    fn unterminated_arguments() {
        expect_error("lg(", ParsingError::UnterminatedArguments(0));
        expect_error("lg(top, red", ParsingError::UnterminatedArguments(0));
        expect_error("lg(rgb(0, 0, 0)", ParsingError::UnterminatedArguments(0));
    }

    #[test]
    fn unterminated_string() {
        expect_error(r#"lg("red, black)"#, ParsingError::UnterminatedString(0));
        expect_error("lg('a)", ParsingError::UnterminatedString(0));
    }

    #[test]
    fn unexpected_character() {
        expect_error("p10?", ParsingError::UnexpectedCharacter(0, ' '));
        expect_error("p10 m5", ParsingError::UnexpectedCharacter(0, ' '));
        expect_error("p10+m5)", ParsingError::UnexpectedCharacter(0, ' '));
    }

    #[test]
    fn expected_separator_or_close() {
        expect_error("lg(a;b)", ParsingError::ExpectedSeparatorOrClose(0, ' '));
        expect_error("lg(a ? b)", ParsingError::ExpectedSeparatorOrClose(0, ' '));
    }

    #[test]
    fn nesting_too_deep() {
        let content = format!("f{}", "(g".repeat(100));
        expect_error(&content, ParsingError::NestingTooDeep(0));
    }

    #[test]
    fn error_positions() {
        assert_eq!(
            parsing::parse("p10?"),
            Err(ParsingError::UnexpectedCharacter(3, '?'))
        );
        assert_eq!(
            parsing::parse("c#fc0."),
            Err(ParsingError::MalformedAlpha(6))
        );
        assert_eq!(
            parsing::parse("p0+lg(top"),
            Err(ParsingError::UnterminatedArguments(5))
        );
        assert_eq!(
            parsing::parse("lg(a, 'b"),
            Err(ParsingError::UnterminatedString(6))
        );
        assert_eq!(
            parsing::parse("lg(a;b)"),
            Err(ParsingError::ExpectedSeparatorOrClose(4, ';'))
        );
    }
}
