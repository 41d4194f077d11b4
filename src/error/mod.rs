// Presentation of parsing errors against the abbreviation they came from

mod display;
mod messages;

// Re-export all public symbols
pub use display::*;
pub use messages::*;
