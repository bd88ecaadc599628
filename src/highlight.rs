//! Highlight rendering: splice color codes around merged match spans.
//!
//! The renderer never alters, reorders, or drops original characters; it
//! only inserts the caller-supplied codes at span boundaries. Stripping
//! those codes from the output reproduces the input line byte-for-byte.

use crate::matcher::find_spans;
use crate::pattern::PatternSet;
use crate::span::{self, Span};

/// A highlight-start / highlight-reset pair of opaque color strings.
///
/// Supplied by the caller and inserted verbatim. The engine never
/// generates, validates, or inspects escape sequences itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorSpec<'a> {
    pub start: &'a str,
    pub reset: &'a str,
}

impl<'a> ColorSpec<'a> {
    /// Create a new color pair.
    pub fn new(start: &'a str, reset: &'a str) -> Self {
        Self { start, reset }
    }
}

/// Errors from rendering with malformed spans.
///
/// Both variants are caller programming errors, not user input errors:
/// spans produced by [`find_spans`](crate::find_spans) and
/// [`merge`](crate::merge) over the same line are always in range and on
/// character boundaries. Malformed spans are
/// rejected rather than clamped, so a span-collection bug cannot hide
/// behind silently corrected output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HighlightError {
    /// A span extends past the end of the line.
    OutOfRange { span: Span, line_len: usize },
    /// A span offset falls inside a multi-byte character.
    NotCharBoundary { offset: usize },
}

impl std::fmt::Display for HighlightError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OutOfRange { span, line_len } => write!(
                f,
                "span {}..{} out of range for line of {line_len} bytes",
                span.start, span.end
            ),
            Self::NotCharBoundary { offset } => {
                write!(f, "span offset {offset} is not a character boundary")
            }
        }
    }
}

impl std::error::Error for HighlightError {}

/// Render the line with each span wrapped in the color pair.
///
/// `spans` must be a merged list (sorted, non-overlapping, no zero-length
/// entries): text strictly before the next span is emitted verbatim, text
/// inside a span becomes `start + substring + reset`, and the tail after
/// the last span is emitted verbatim. An empty list returns the line
/// unchanged.
pub fn render(
    line: &str,
    spans: &[Span],
    color: ColorSpec<'_>,
) -> Result<String, HighlightError> {
    if spans.is_empty() {
        return Ok(line.to_string());
    }

    let overhead = color.start.len() + color.reset.len();
    let mut out = String::with_capacity(line.len() + spans.len() * overhead);
    let mut prev_end = 0;

    for &span in spans {
        if span.end > line.len() {
            return Err(HighlightError::OutOfRange {
                span,
                line_len: line.len(),
            });
        }
        for offset in [span.start, span.end] {
            if !line.is_char_boundary(offset) {
                return Err(HighlightError::NotCharBoundary { offset });
            }
        }
        out.push_str(&line[prev_end..span.start]);
        out.push_str(color.start);
        out.push_str(&line[span.start..span.end]);
        out.push_str(color.reset);
        prev_end = span.end;
    }
    out.push_str(&line[prev_end..]);
    Ok(out)
}

/// Highlight every match of every pattern in the set.
///
/// Collects, merges, and renders in one call, so overlapping and adjacent
/// matches come out as single highlighted blocks. Callers normally test
/// [`PatternSet::is_match`] first and only highlight lines that passed.
pub fn highlight(
    line: &str,
    set: &PatternSet,
    color: ColorSpec<'_>,
) -> Result<String, HighlightError> {
    render(line, &span::merge(find_spans(line, set)), color)
}
