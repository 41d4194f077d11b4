//! Types representing the tree produced by parsing an abbreviation

use serde::Serialize;
use std::fmt;

use super::{Color, Numeric};

/// The collaborator receiving finished property nodes. Nodes are only ever
/// handed over once an entire abbreviation has parsed successfully.
pub trait Tree<'i> {
    fn append_child(&mut self, property: Property<'i>);
}

#[derive(Debug, Default, PartialEq, Serialize)]
pub struct Abbreviation<'i> {
    pub properties: Vec<Property<'i>>,
}

impl<'i> Abbreviation<'i> {
    pub fn new() -> Abbreviation<'i> {
        Abbreviation {
            properties: Vec::new(),
        }
    }

    pub fn first_child(&self) -> Option<&Property<'i>> {
        self.properties
            .first()
    }

    pub fn len(&self) -> usize {
        self.properties
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties
            .is_empty()
    }
}

impl<'i> Tree<'i> for Abbreviation<'i> {
    fn append_child(&mut self, property: Property<'i>) {
        self.properties
            .push(property);
    }
}

/// One `+` separated declaration. The name is absent when the declaration
/// starts directly with a value, as in `#fc0`.
#[derive(Debug, PartialEq, Serialize)]
pub struct Property<'i> {
    pub name: Option<&'i str>,
    pub value: CssValue<'i>,
    pub attributes: Vec<Attribute<'i>>,
}

impl<'i> Property<'i> {
    pub fn new(name: Option<&'i str>) -> Property<'i> {
        Property {
            name,
            value: CssValue::new(),
            attributes: Vec::new(),
        }
    }

    pub fn set_attribute(&mut self, name: impl Into<String>, value: CssValue<'i>) {
        let name = name.into();

        match self
            .attributes
            .iter_mut()
            .find(|attribute| attribute.name == name)
        {
            Some(existing) => existing.value = value,
            None => self
                .attributes
                .push(Attribute { name, value }),
        }
    }

    pub fn attribute(&self, name: &str) -> Option<&Attribute<'i>> {
        self.attributes
            .iter()
            .find(|attribute| attribute.name == name)
    }
}

/// Positional argument of a property, named by its zero-based index.
#[derive(Debug, PartialEq, Serialize)]
pub struct Attribute<'i> {
    pub name: String,
    pub value: CssValue<'i>,
}

impl<'i> Attribute<'i> {
    pub fn text(&self) -> String {
        self.value
            .to_string()
            .trim()
            .to_string()
    }
}

/// The right hand side of a declaration: an ordered run of values.
#[derive(Debug, Default, PartialEq, Serialize)]
pub struct CssValue<'i>(pub Vec<Value<'i>>);

impl<'i> CssValue<'i> {
    pub fn new() -> CssValue<'i> {
        CssValue(Vec::new())
    }

    pub fn push(&mut self, value: Value<'i>) {
        self.0
            .push(value);
    }

    pub fn len(&self) -> usize {
        self.0
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.0
            .is_empty()
    }

    pub fn values(&self) -> &[Value<'i>] {
        &self.0
    }
}

impl fmt::Display for CssValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, value) in self
            .0
            .iter()
            .enumerate()
        {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", value)?;
        }
        Ok(())
    }
}

#[derive(Debug, PartialEq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum Value<'i> {
    Numeric(Numeric<'i>),
    Color(Color<'i>),
    Keyword(&'i str),
    String(&'i str),
    Function(FunctionCall<'i>),
    Important,
}

impl<'i> Value<'i> {
    /// Whether the value ends in an explicit unit. Only then does a
    /// following `-` belong to the next token rather than separate it.
    pub fn has_unit(&self) -> bool {
        match self {
            Value::Numeric(numeric) => !numeric
                .unit
                .is_empty(),
            _ => false,
        }
    }
}

impl fmt::Display for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Numeric(numeric) => write!(f, "{}", numeric),
            Value::Color(color) => write!(f, "{}", color),
            Value::Keyword(text) => f.write_str(text),
            Value::String(raw) => f.write_str(raw),
            Value::Function(function) => write!(f, "{}", function),
            Value::Important => f.write_str("!"),
        }
    }
}

#[derive(Debug, PartialEq, Serialize)]
pub struct FunctionCall<'i> {
    pub name: &'i str,
    pub arguments: Vec<CssValue<'i>>,
}

impl fmt::Display for FunctionCall<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.name)?;
        for (i, argument) in self
            .arguments
            .iter()
            .enumerate()
        {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", argument)?;
        }
        f.write_str(")")
    }
}
