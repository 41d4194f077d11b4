//! Shorthand forms of common CSS keywords. The parser never consults this
//! table; it is applied when rendering, if asked for.

static SHORTHANDS: &[(&str, &str)] = &[
    ("a", "auto"),
    ("al", "all"),
    ("i", "inherit"),
    ("s", "solid"),
    ("da", "dashed"),
    ("do", "dotted"),
    ("t", "transparent"),
];

/// Look up the full keyword for a shorthand, e.g. `s` → `solid`.
pub fn shorthand(name: &str) -> Option<&'static str> {
    SHORTHANDS
        .iter()
        .find(|(short, _)| *short == name)
        .map(|(_, keyword)| *keyword)
}
