//! Numbers with an optional unit, as in `10`, `-.5em` or `50%`

use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Numeric<'i> {
    pub magnitude: f64,
    pub unit: &'i str,
}

impl<'i> Numeric<'i> {
    pub fn new(magnitude: f64, unit: &'i str) -> Numeric<'i> {
        Numeric { magnitude, unit }
    }
}

impl fmt::Display for Numeric<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", format_number(self.magnitude), self.unit)
    }
}

/// Shortest decimal form of a number. Negative zero prints as `0`.
pub fn format_number(number: f64) -> String {
    if number == 0.0 {
        "0".to_string()
    } else {
        number.to_string()
    }
}
