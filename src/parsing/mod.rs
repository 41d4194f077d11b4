//! parser for CSS abbreviations

use tracing::debug;

use crate::language::{Abbreviation, Tree};

pub mod parser;

pub use parser::{Parser, ParsingError};

/// Parse an abbreviation into its tree of properties, or return the error
/// that stopped the parse.
pub fn parse(content: &str) -> Result<Abbreviation<'_>, ParsingError> {
    let mut input = Parser::new();
    input.initialize(content);

    match input.read_abbreviation() {
        Ok(abbreviation) => {
            let count = abbreviation.len();
            debug!(
                "Found {} propert{}",
                count,
                if count == 1 { "y" } else { "ies" }
            );
            Ok(abbreviation)
        }
        Err(error) => {
            debug!(?error);
            Err(error)
        }
    }
}

/// Parse an abbreviation and hand each property to the given tree. Nothing
/// is appended unless the whole abbreviation parsed.
pub fn parse_into<'i, T>(content: &'i str, tree: &mut T) -> Result<usize, ParsingError>
where
    T: Tree<'i>,
{
    let abbreviation = parse(content)?;
    let count = abbreviation.len();

    for property in abbreviation.properties {
        tree.append_child(property);
    }

    Ok(count)
}
