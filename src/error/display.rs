use std::fmt;

use owo_colors::OwoColorize;

use crate::formatting::Render;
use crate::parsing::ParsingError;

use super::generate_error_message;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AbbreviationError<'i> {
    pub problem: String,
    pub details: String,
    pub source: &'i str,
    pub offset: usize,
}

impl<'i> AbbreviationError<'i> {
    pub fn new(error: &ParsingError, source: &'i str, renderer: &dyn Render) -> Self {
        let (problem, details) = generate_error_message(error, renderer);

        AbbreviationError {
            problem,
            details,
            source,
            offset: error
                .offset()
                .min(source.len()),
        }
    }
}

// Verbose detailed explanation
impl<'i> AbbreviationError<'i> {
    pub fn full_details(&self) -> String {
        let i = calculate_line_number(self.source, self.offset);
        let j = calculate_column_number(self.source, self.offset);

        let code = self
            .source
            .lines()
            .nth(i)
            .unwrap_or("");

        let line = i + 1;
        let column = j + 1;

        let width = line
            .to_string()
            .len();
        let width = 3.max(width);

        format!(
            r#"
{}: {}:{} {}

{:width$} {}
{:width$} {} {}
{:width$} {} {:>column$}

{}
            "#,
            "error".bright_red(),
            line,
            column,
            self.problem
                .bold(),
            ' ',
            '|'.bright_blue(),
            line.bright_blue(),
            '|'.bright_blue(),
            code,
            ' ',
            '|'.bright_blue(),
            '^'.bright_red(),
            self.details
        )
        .trim_ascii()
        .to_string()
    }
}

// Concise version for internal use
impl<'i> fmt::Display for AbbreviationError<'i> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let i = calculate_line_number(self.source, self.offset);
        let j = calculate_column_number(self.source, self.offset);

        let line = i + 1;
        let column = j + 1;

        write!(f, "error: {}:{} {}", line, column, self.problem)
    }
}

// This returns a zero-origin result so that it can subsequently be used for
// splitting; for display to humans you'll have to add 1.
fn calculate_line_number(content: &str, offset: usize) -> usize {
    content[..offset]
        .bytes()
        .filter(|&b| b == b'\n')
        .count()
}

// Calculate the column number in characters, also zero-origin for
// consistency.
fn calculate_column_number(content: &str, offset: usize) -> usize {
    let before = &content[..offset];
    match before.rfind('\n') {
        Some(start) => before[start + 1..]
            .chars()
            .count(),
        None => before
            .chars()
            .count(),
    }
}
