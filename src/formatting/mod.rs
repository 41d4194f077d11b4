//! Rendering of parsed abbreviations back to text

mod formatter;
mod renderer;
mod syntax;
mod terminal;

// Re-export all public symbols
pub use formatter::*;
pub use renderer::*;
pub use syntax::*;
pub use terminal::*;
