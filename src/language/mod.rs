// Types representing a parsed CSS abbreviation

mod color;
pub mod keywords;
mod numeric;
mod types;

// Re-export all public symbols
pub use color::*;
pub use numeric::*;
pub use types::*;
