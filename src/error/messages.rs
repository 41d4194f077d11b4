use crate::formatting::{Render, Syntax};
use crate::parsing::ParsingError;

/// Generate problem and detail messages for parsing errors. Examples of
/// correct input in the details are styled with the given renderer.
pub fn generate_error_message(error: &ParsingError, renderer: &dyn Render) -> (String, String) {
    match error {
        ParsingError::UnexpectedEndOfInput(_) => (
            "Unexpected end of input".to_string(),
            "The abbreviation ended part way through a value.".to_string(),
        ),
        ParsingError::UnterminatedString(_) => (
            "Unterminated string".to_string(),
            r#"
A string opened with a quote must be closed by the same kind of quote. A
quote inside the string can be escaped with a backslash.
            "#
            .trim_ascii()
            .to_string(),
        ),
        ParsingError::UnterminatedArguments(_) => (
            "Unexpected end of arguments list".to_string(),
            format!(
                r#"
Every '(' that opens a list of arguments must have a corresponding ')'.
Arguments are separated by commas, as in {}.
                "#,
                renderer.style(Syntax::Function, "lg(top, #fc0, #000)")
            )
            .trim_ascii()
            .to_string(),
        ),
        ParsingError::MalformedAlpha(_) => (
            "Unexpected character for alpha value of color".to_string(),
            format!(
                r#"
A '.' following a color introduces its alpha channel and must be followed by
digits, as in {} for half transparent white.
                "#,
                renderer.style(Syntax::Color, "#fff.5")
            )
            .trim_ascii()
            .to_string(),
        ),
        ParsingError::UnexpectedCharacter(_, c) => (
            format!("Unexpected character '{}'", c),
            format!(
                r#"
The abbreviation could not be read any further. Declarations are written as
a property name followed by its values, and several declarations are joined
with '+', as in {}.
                "#,
                renderer.style(Syntax::Property, "p10+m5-a")
            )
            .trim_ascii()
            .to_string(),
        ),
        ParsingError::ExpectedSeparatorOrClose(_, c) => (
            format!("Expected ',' or ')' but found '{}'", c),
            "Each argument must be followed either by a comma and the next argument, or by the closing parenthesis.".to_string(),
        ),
        ParsingError::NestingTooDeep(_) => (
            "Arguments nested too deeply".to_string(),
            format!(
                "Argument lists may be nested at most {} levels deep.",
                crate::parsing::parser::MAX_DEPTH
            ),
        ),
    }
}
