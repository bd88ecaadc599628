//! Line-oriented pattern matching with overlap-safe match highlighting.
//!
//! Raw pattern strings compile into a [`PatternSet`], an AND-of-OR formula:
//! the set matches a line when every group in it has at least one matching
//! pattern. Matching lines can then be rendered with every matching
//! substring highlighted exactly once, even when several patterns match
//! overlapping or adjacent regions.
//!
//! # Example
//!
//! ```rust
//! use linesift::{ColorSpec, compile, highlight};
//!
//! // Two patterns, both required to match (AND).
//! let set = compile(["cat", "mat"], false).unwrap();
//!
//! let line = "the cat sat on the mat";
//! assert!(set.is_match(line));
//! assert!(!set.is_match("the cat sat"));
//!
//! // The color pair is opaque to the engine; markers work as well as
//! // ANSI escapes.
//! let color = ColorSpec::new(">", "<");
//! assert_eq!(
//!     highlight(line, &set, color).unwrap(),
//!     "the >cat< sat on the >mat<",
//! );
//! ```

mod compiler;
mod highlight;
mod matcher;
mod pattern;
pub mod sources;
mod span;

pub use compiler::{InvalidPattern, combine, compile, compile_groups};
pub use highlight::{ColorSpec, HighlightError, highlight, render};
pub use matcher::find_spans;
pub use pattern::{Pattern, PatternGroup, PatternSet};
pub use span::{Span, merge};
