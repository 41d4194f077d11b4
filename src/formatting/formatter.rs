//! Formatter turning a parsed abbreviation into tagged text fragments

use crate::formatting::*;
use crate::language::keywords;
use crate::language::*;

/// How values are written out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Options {
    /// Write colors as `#fc0` rather than `#ffcc00` where possible.
    pub short_hex: bool,
    /// Replace shorthand keywords such as `s` with their full form `solid`.
    pub resolve_keywords: bool,
}

/// Convert the tree into (Syntax, String) fragments, one line per property
/// in the form `name(0 => arg, 1 => arg): value;`.
pub fn format_with_renderer(abbreviation: &Abbreviation, options: &Options) -> Vec<(Syntax, String)> {
    let mut output = Formatter::new(options);

    output.format_abbreviation(abbreviation);

    output.fragments
}

struct Formatter<'a> {
    fragments: Vec<(Syntax, String)>,
    options: &'a Options,
}

impl<'a> Formatter<'a> {
    fn new(options: &'a Options) -> Formatter<'a> {
        Formatter {
            fragments: Vec::new(),
            options,
        }
    }

    fn append_fragment(&mut self, syntax: Syntax, content: &str) {
        self.fragments
            .push((syntax, content.to_string()));
    }

    fn format_abbreviation(&mut self, abbreviation: &Abbreviation) {
        for property in &abbreviation.properties {
            self.format_property(property);
            self.append_fragment(Syntax::Neutral, "\n");
        }
    }

    fn format_property(&mut self, property: &Property) {
        if let Some(name) = property.name {
            self.append_fragment(Syntax::Property, name);
        }

        if !property
            .attributes
            .is_empty()
        {
            self.append_fragment(Syntax::Punctuation, "(");
            for (i, attribute) in property
                .attributes
                .iter()
                .enumerate()
            {
                if i > 0 {
                    self.append_fragment(Syntax::Punctuation, ",");
                    self.append_fragment(Syntax::Neutral, " ");
                }
                self.append_fragment(Syntax::Neutral, &attribute.name);
                self.append_fragment(Syntax::Punctuation, " => ");
                self.format_value(&attribute.value);
            }
            self.append_fragment(Syntax::Punctuation, ")");
        }

        if !property
            .value
            .is_empty()
        {
            self.append_fragment(Syntax::Punctuation, ":");
            self.append_fragment(Syntax::Neutral, " ");
            self.format_value(&property.value);
        }

        self.append_fragment(Syntax::Punctuation, ";");
    }

    fn format_value(&mut self, value: &CssValue) {
        for (i, single) in value
            .values()
            .iter()
            .enumerate()
        {
            if i > 0 {
                self.append_fragment(Syntax::Neutral, " ");
            }
            self.format_single(single);
        }
    }

    fn format_single(&mut self, value: &Value) {
        match value {
            Value::Numeric(numeric) => {
                self.append_fragment(Syntax::Numeric, &numeric.to_string());
            }
            Value::Color(color) => {
                let text = color.render(self.options.short_hex);
                self.append_fragment(Syntax::Color, &text);
            }
            Value::Keyword(text) => {
                if text.starts_with('$') || text.starts_with('@') {
                    self.append_fragment(Syntax::Variable, text);
                } else {
                    let text = self.resolve_keyword(text);
                    self.append_fragment(Syntax::Keyword, text);
                }
            }
            Value::String(raw) => self.append_fragment(Syntax::String, raw),
            Value::Function(function) => self.format_function(function),
            Value::Important => self.append_fragment(Syntax::Important, "!"),
        }
    }

    fn format_function(&mut self, function: &FunctionCall) {
        self.append_fragment(Syntax::Function, function.name);
        self.append_fragment(Syntax::Punctuation, "(");
        for (i, argument) in function
            .arguments
            .iter()
            .enumerate()
        {
            if i > 0 {
                self.append_fragment(Syntax::Punctuation, ",");
                self.append_fragment(Syntax::Neutral, " ");
            }
            self.format_value(argument);
        }
        self.append_fragment(Syntax::Punctuation, ")");
    }

    fn resolve_keyword<'t>(&self, text: &'t str) -> &'t str {
        if self
            .options
            .resolve_keywords
        {
            keywords::shorthand(text).unwrap_or(text)
        } else {
            text
        }
    }
}
