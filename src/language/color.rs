//! Hex colors written in abbreviated form
//!
//! Supported variations:
//!
//! ```text
//! #abc    → #aabbcc
//! #0      → #000000
//! #fff.5  → rgba(255, 255, 255, 0.5)
//! #t      → transparent
//! ```

use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Color<'i> {
    pub raw: &'i str,
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub alpha: f64,
}

impl<'i> Color<'i> {
    /// Expand the raw `#`-prefixed hex run and optional `.digits` alpha
    /// suffix. Characters which are not hex digits read as zero.
    pub fn new(raw: &'i str, alpha: Option<&str>) -> Color<'i> {
        let digits = raw
            .strip_prefix('#')
            .unwrap_or(raw);

        let mut alpha = match alpha {
            Some(text) if !text.is_empty() => text
                .parse::<f64>()
                .unwrap_or(1.0),
            _ => 1.0,
        };

        let expanded = if digits == "t" {
            alpha = 0.0;
            Vec::new()
        } else {
            expand(digits)
        };

        let (r, g, b) = match expanded.as_slice() {
            [r1, r2, g1, g2, b1, b2] => (channel(*r1, *r2), channel(*g1, *g2), channel(*b1, *b2)),
            _ => (0, 0, 0),
        };

        Color {
            raw,
            r,
            g,
            b,
            alpha,
        }
    }

    pub fn is_transparent(&self) -> bool {
        self.r == 0 && self.g == 0 && self.b == 0 && self.alpha == 0.0
    }

    /// Output as a hex value, using the three digit form when `short` is
    /// requested and every channel is a doubled digit.
    pub fn to_hex(&self, short: bool) -> String {
        let channels = [self.r, self.g, self.b];

        if short
            && channels
                .iter()
                .all(|c| c % 17 == 0)
        {
            let mut result = String::from("#");
            for c in channels {
                result.push_str(&format!("{:x}", c >> 4));
            }
            result
        } else {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        }
    }

    pub fn to_rgb(&self) -> String {
        if self.alpha == 1.0 {
            format!("rgb({}, {}, {})", self.r, self.g, self.b)
        } else {
            format!(
                "rgba({}, {}, {}, {})",
                self.r,
                self.g,
                self.b,
                format_alpha(self.alpha)
            )
        }
    }

    pub fn render(&self, short: bool) -> String {
        if self.is_transparent() {
            "transparent".to_string()
        } else if self.alpha == 1.0 {
            self.to_hex(short)
        } else {
            self.to_rgb()
        }
    }
}

impl fmt::Display for Color<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(false))
    }
}

// Turn 0, 1, 2, 3 or 6 hex digits into the six RRGGBB digits. Any other
// length is repeated and cut to six.
fn expand(digits: &str) -> Vec<char> {
    let digits: Vec<char> = digits
        .chars()
        .collect();

    match digits.as_slice() {
        [] => vec!['0'; 6],
        [d] => vec![*d; 6],
        [d1, d2] => vec![*d1, *d2, *d1, *d2, *d1, *d2],
        [r, g, b] => vec![*r, *r, *g, *g, *b, *b],
        _ => digits
            .iter()
            .chain(digits.iter())
            .take(6)
            .copied()
            .collect(),
    }
}

fn channel(high: char, low: char) -> u8 {
    let high = high
        .to_digit(16)
        .unwrap_or(0);
    let low = low
        .to_digit(16)
        .unwrap_or(0);
    (high * 16 + low) as u8
}

// Up to eight decimal places, trailing zeros removed.
fn format_alpha(alpha: f64) -> String {
    let text = format!("{:.8}", alpha);
    if text.contains('.') {
        text.trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    } else {
        text
    }
}
