//! Parser for compact CSS abbreviations such as `bd1-s#fc0`, producing a
//! tree of property declarations each carrying a typed sequence of values.

pub mod error;
pub mod formatting;
pub mod language;
pub mod parsing;
