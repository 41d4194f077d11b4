use crate::language::*;

/// Limit on how deeply argument lists may nest inside one another.
pub const MAX_DEPTH: usize = 32;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsingError {
    UnexpectedEndOfInput(usize),
    UnterminatedString(usize),
    UnterminatedArguments(usize),
    MalformedAlpha(usize),
    UnexpectedCharacter(usize, char),
    ExpectedSeparatorOrClose(usize, char),
    NestingTooDeep(usize),
}

impl ParsingError {
    pub fn offset(&self) -> usize {
        match self {
            ParsingError::UnexpectedEndOfInput(offset) => *offset,
            ParsingError::UnterminatedString(offset) => *offset,
            ParsingError::UnterminatedArguments(offset) => *offset,
            ParsingError::MalformedAlpha(offset) => *offset,
            ParsingError::UnexpectedCharacter(offset, _) => *offset,
            ParsingError::ExpectedSeparatorOrClose(offset, _) => *offset,
            ParsingError::NestingTooDeep(offset) => *offset,
        }
    }

    pub fn message(&self) -> String {
        match self {
            ParsingError::UnexpectedEndOfInput(_) => "unexpected end of input".to_string(),
            ParsingError::UnterminatedString(_) => "unterminated string".to_string(),
            ParsingError::UnterminatedArguments(_) => "unexpected end of arguments list".to_string(),
            ParsingError::MalformedAlpha(_) => {
                "unexpected character for alpha value of color".to_string()
            }
            ParsingError::UnexpectedCharacter(_, c) => format!("unexpected character '{}'", c),
            ParsingError::ExpectedSeparatorOrClose(_, c) => {
                format!("expected ',' or ')' but found '{}'", c)
            }
            ParsingError::NestingTooDeep(_) => "arguments nested too deeply".to_string(),
        }
    }
}

impl std::fmt::Display for ParsingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at offset {}", self.message(), self.offset())
    }
}

impl std::error::Error for ParsingError {}

/// A cursor over one abbreviation together with the consumers that make up
/// the grammar. Consumers that find nothing to match leave the position
/// where it was.
#[derive(Debug)]
pub struct Parser<'i> {
    original: &'i str,
    source: &'i str,
    offset: usize,
    start: usize,
    depth: usize,
}

impl<'i> Parser<'i> {
    pub fn new() -> Parser<'i> {
        Parser {
            original: "",
            source: "",
            offset: 0,
            start: 0,
            depth: 0,
        }
    }

    pub fn initialize(&mut self, content: &'i str) {
        self.original = content;
        self.source = content;
        self.offset = 0;
        self.start = 0;
        self.depth = 0;
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    fn advance(&mut self, width: usize) {
        // advance the parser position
        self.source = &self.source[width..];
        self.offset += width;
    }

    fn rewind(&mut self, offset: usize) {
        self.source = &self.original[offset..];
        self.offset = offset;
    }

    fn is_finished(&self) -> bool {
        self.source
            .is_empty()
    }

    fn peek_next_char(&self) -> Option<char> {
        self.source
            .chars()
            .next()
    }

    fn peek_char_at(&self, n: usize) -> Option<char> {
        self.source
            .chars()
            .nth(n)
    }

    fn next_char(&mut self) -> Result<char, ParsingError> {
        match self.peek_next_char() {
            Some(c) => {
                self.advance(c.len_utf8());
                Ok(c)
            }
            None => Err(ParsingError::UnexpectedEndOfInput(self.offset)),
        }
    }

    fn eat(&mut self, expected: char) -> bool {
        if self.peek_next_char() == Some(expected) {
            self.advance(expected.len_utf8());
            true
        } else {
            false
        }
    }

    /// Consume characters while they pass the predicate, returning whether
    /// anything was consumed at all.
    fn eat_while<P>(&mut self, predicate: P) -> bool
    where
        P: Fn(char) -> bool,
    {
        let begin = self.offset;
        while let Some(c) = self.peek_next_char() {
            if !predicate(c) {
                break;
            }
            self.advance(c.len_utf8());
        }
        begin < self.offset
    }

    fn mark(&mut self) {
        self.start = self.offset;
    }

    fn current(&self) -> &'i str {
        &self.original[self.start..self.offset]
    }

    fn trim_whitespace(&mut self) {
        self.eat_while(|c| c.is_ascii_whitespace());
    }

    /// Parse `+` separated declarations until the input is exhausted.
    /// Anything left over that could not be consumed is an error; no partial
    /// result is returned.
    pub fn read_abbreviation(&mut self) -> Result<Abbreviation<'i>, ParsingError> {
        let mut abbreviation = Abbreviation::new();

        while !self.is_finished() {
            let property = self.read_property()?;
            abbreviation.append_child(property);

            // declarations cannot be nested, only listed
            if !self.eat('+') {
                break;
            }
        }

        if let Some(c) = self.peek_next_char() {
            return Err(ParsingError::UnexpectedCharacter(self.offset, c));
        }

        Ok(abbreviation)
    }

    pub fn read_property(&mut self) -> Result<Property<'i>, ParsingError> {
        let name = self.read_identifier();
        self.eat(':');

        let mut property = Property::new(name);
        let mut value = self.read_value()?;

        if let Some(arguments) = self.read_arguments()? {
            for (i, argument) in arguments
                .into_iter()
                .enumerate()
            {
                property.set_attribute(i.to_string(), argument);
            }
        }

        if self.eat('!') {
            value.push(Value::Important);
        }

        property.value = value;
        Ok(property)
    }

    /// A property name: an optional `@`, `$` or `!` followed by letters.
    pub fn read_identifier(&mut self) -> Option<&'i str> {
        self.mark();

        let _ = self.eat('@') || self.eat('$') || self.eat('!');
        self.eat_while(is_alpha_word);

        let name = self.current();
        if name.is_empty() {
            None
        } else {
            Some(name)
        }
    }

    /// Compose the values of one declaration. A dash after a unit-less
    /// number or after a color separates values; after a unit it is left
    /// to be read as the sign of whatever follows.
    pub fn read_value(&mut self) -> Result<CssValue<'i>, ParsingError> {
        let mut values = CssValue::new();

        while !self.is_finished() {
            if let Some(value) = self.read_scalar()? {
                values.push(value);
                continue;
            }

            self.eat('-');
            match self.read_keyword(false) {
                Some(text) => values.push(Value::Keyword(text)),
                None => break,
            }
        }

        Ok(values)
    }

    // Numeric value or color, followed by the optional separator dash.
    fn read_scalar(&mut self) -> Result<Option<Value<'i>>, ParsingError> {
        let value = if let Some(numeric) = self.read_numeric() {
            Value::Numeric(numeric)
        } else if let Some(color) = self.read_color()? {
            Value::Color(color)
        } else {
            return Ok(None);
        };

        if !value.has_unit() {
            self.eat('-');
        }

        Ok(Some(value))
    }

    /// A number with optional sign, fraction and unit, where the unit is
    /// either `%` or a run of letters.
    pub fn read_numeric(&mut self) -> Option<Numeric<'i>> {
        let begin = self.offset;
        if !self.eat_number() {
            return None;
        }

        let magnitude = match self.original[begin..self.offset].parse::<f64>() {
            Ok(magnitude) => magnitude,
            Err(_) => {
                self.rewind(begin);
                return None;
            }
        };

        self.mark();
        let _ = self.eat('%') || self.eat_while(is_alpha_word);

        Some(Numeric::new(magnitude, self.current()))
    }

    // A leading dash is only taken if digits follow; otherwise it is left
    // for the caller as a separator or as the sign of the next token.
    fn eat_number(&mut self) -> bool {
        let begin = self.offset;
        self.eat('-');

        let mut dotted = false;
        let mut digits = false;

        while let Some(c) = self.peek_next_char() {
            if c == '.' {
                // a second dot ends the number
                if dotted {
                    break;
                }
                dotted = true;
            } else if is_digit(c) {
                digits = true;
            } else {
                break;
            }
            self.advance(1);
        }

        if !digits {
            self.rewind(begin);
            return false;
        }

        true
    }

    /// A `#` followed by up to six hex digits or the transparent marker `t`,
    /// then an optional `.digits` alpha channel.
    pub fn read_color(&mut self) -> Result<Option<Color<'i>>, ParsingError> {
        if self.peek_next_char() != Some('#') {
            return Ok(None);
        }

        let begin = self.offset;
        self.advance(1);

        if !self.eat('t') {
            let mut count = 0;
            while count < 6 && matches!(self.peek_next_char(), Some(c) if is_hex(c)) {
                self.advance(1);
                count += 1;
            }
        }

        let raw = &self.original[begin..self.offset];

        let alpha = if self.peek_next_char() == Some('.') {
            match self.peek_char_at(1) {
                Some(c) if is_digit(c) => {}
                _ => return Err(ParsingError::MalformedAlpha(self.offset + 1)),
            }
            self.mark();
            self.advance(1);
            self.eat_while(is_digit);
            Some(self.current())
        } else {
            None
        };

        Ok(Some(Color::new(raw, alpha)))
    }

    /// A variable (`$name`, `@name`) or a keyword. In short notation a
    /// keyword is letters only; in full notation, used inside argument
    /// lists, it may also contain digits and dashes.
    pub fn read_keyword(&mut self, full: bool) -> Option<&'i str> {
        self.mark();

        if self.eat('$') || self.eat('@') {
            self.eat_while(is_alphanumeric_word);
        } else if full {
            self.eat_while(is_keyword);
        } else {
            self.eat_while(is_alpha_word);
        }

        let text = self.current();
        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }

    /// A single or double quoted string, returned with its quotes. A
    /// backslash escapes the character after it.
    pub fn read_quoted_string(&mut self) -> Result<Option<&'i str>, ParsingError> {
        let quote = match self.peek_next_char() {
            Some(c @ ('"' | '\'')) => c,
            _ => return Ok(None),
        };

        let begin = self.offset;
        self.advance(1);

        loop {
            match self.next_char() {
                Ok(c) if c == quote => break,
                Ok('\\') => {
                    self.next_char()
                        .map_err(|_| ParsingError::UnterminatedString(begin))?;
                }
                Ok(_) => {}
                Err(_) => return Err(ParsingError::UnterminatedString(begin)),
            }
        }

        Ok(Some(&self.original[begin..self.offset]))
    }

    /// A parenthesized, comma separated list of values. `()` has no
    /// arguments; an empty argument elsewhere is an empty value.
    pub fn read_arguments(&mut self) -> Result<Option<Vec<CssValue<'i>>>, ParsingError> {
        if self.peek_next_char() != Some('(') {
            return Ok(None);
        }

        let begin = self.offset;
        if self.depth >= MAX_DEPTH {
            return Err(ParsingError::NestingTooDeep(begin));
        }

        self.advance(1);
        self.depth += 1;
        let result = self.read_argument_list(begin);
        self.depth -= 1;

        result.map(Some)
    }

    fn read_argument_list(&mut self, begin: usize) -> Result<Vec<CssValue<'i>>, ParsingError> {
        let mut arguments = Vec::new();

        self.trim_whitespace();
        if self.eat(')') {
            return Ok(arguments);
        }

        loop {
            let argument = self.read_argument()?;
            arguments.push(argument);

            self.trim_whitespace();
            match self.peek_next_char() {
                Some(',') => self.advance(1),
                Some(')') => {
                    self.advance(1);
                    return Ok(arguments);
                }
                Some(c) => return Err(ParsingError::ExpectedSeparatorOrClose(self.offset, c)),
                None => return Err(ParsingError::UnterminatedArguments(begin)),
            }
        }
    }

    /// One argument: whitespace separated values, which beyond those of a
    /// declaration may be quoted strings and function calls.
    pub fn read_argument(&mut self) -> Result<CssValue<'i>, ParsingError> {
        let mut values = CssValue::new();

        loop {
            self.trim_whitespace();

            if let Some(raw) = self.read_quoted_string()? {
                values.push(Value::String(raw));
            } else if let Some(value) = self.read_scalar()? {
                values.push(value);
            } else if let Some(name) = self.read_keyword(true) {
                match self.read_arguments()? {
                    Some(arguments) => {
                        values.push(Value::Function(FunctionCall { name, arguments }))
                    }
                    None => values.push(Value::Keyword(name)),
                }
            } else {
                break;
            }
        }

        Ok(values)
    }
}

fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

fn is_alpha_word(c: char) -> bool {
    c == '_' || c.is_ascii_alphabetic()
}

fn is_alphanumeric_word(c: char) -> bool {
    is_digit(c) || is_alpha_word(c)
}

fn is_hex(c: char) -> bool {
    c.is_ascii_hexdigit()
}

fn is_keyword(c: char) -> bool {
    is_alphanumeric_word(c) || c == '-'
}
