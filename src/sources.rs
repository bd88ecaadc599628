//! Reusable regular-expression source strings.
//!
//! These are source texts, not compiled matchers; feed them to
//! [`crate::compile`] alongside any user-supplied pattern. The name table
//! backs the CLI's `--preset` flag.

use phf::{Map, phf_map};

/// Matches one or more ASCII digits.
pub const DIGITS: &str = r"[0-9]+";

/// Matches sequences of non-alphanumeric characters.
pub const NON_ALPHANUMERIC: &str = r"[^a-zA-Z0-9]+";

/// Matches non-space whitespace characters.
pub const NON_SPACE_WHITESPACE: &str = r"[\f\r\n\t\v]+";

/// Matches nothing on any input: end-of-text can never be followed by a
/// character.
pub const NO_MATCH: &str = r"\z.";

/// Matches a whole word token.
pub const WORD: &str = r"\b\w+\b";

/// Matches one or more non-word characters.
pub const WORD_SEPARATOR: &str = r"\W+";

/// Name table for the sources above, keyed by lower-case name.
static SOURCES: Map<&'static str, &'static str> = phf_map! {
    "digits" => DIGITS,
    "non-alphanumeric" => NON_ALPHANUMERIC,
    "non-space-whitespace" => NON_SPACE_WHITESPACE,
    "no-match" => NO_MATCH,
    "word" => WORD,
    "word-separator" => WORD_SEPARATOR,
};

/// Look up a named source, e.g. `"digits"` or `"word"`.
pub fn lookup(name: &str) -> Option<&'static str> {
    SOURCES.get(name).copied()
}

/// Return all source names in alphabetical order.
pub fn names() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = SOURCES.keys().copied().collect();
    names.sort_unstable();
    names
}
