//! Match spans and the overlap/adjacency merge.
//!
//! Spans are per-line values: collected fresh for each line, merged, used to
//! render that line, then discarded. They carry no cross-line state.

use itertools::Itertools;

/// A half-open byte interval `[start, end)` identifying a matched substring
/// within a single line.
///
/// Spans are never empty: `start < end` always. Zero-length regex matches
/// are discarded at collection time, before any span is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    /// Create a new span.
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

/// Coalesce spans into the minimal sorted, non-overlapping covering set.
///
/// Spans are ordered by `(start, end)` and folded left to right: a span
/// starting at or before the current last end extends that end to the
/// larger of the two, anything further away starts a new entry. The `<=`
/// comparison means exactly adjacent spans merge into one block while a gap
/// of even one byte keeps them apart; two back-to-back matches therefore
/// render as a single highlighted region.
///
/// The result satisfies `end_i < start_{i+1}` strictly for every pair of
/// consecutive entries, and re-merging it changes nothing.
///
/// # Panics
///
/// Panics if any input span is zero-length. The collector never produces
/// one, so a zero-length span arriving here is a bug in the caller, not a
/// condition to repair silently.
pub fn merge(mut spans: Vec<Span>) -> Vec<Span> {
    for span in &spans {
        assert!(
            span.start < span.end,
            "zero-length span {span:?} in merge input"
        );
    }
    spans.sort_unstable_by_key(|span| (span.start, span.end));
    spans
        .into_iter()
        .coalesce(|prev, next| {
            if next.start <= prev.end {
                Ok(Span::new(prev.start, prev.end.max(next.end)))
            } else {
                Err((prev, next))
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spans(pairs: &[(usize, usize)]) -> Vec<Span> {
        pairs.iter().map(|&(start, end)| Span::new(start, end)).collect()
    }

    // --- merge rule ---

    #[test]
    fn adjacent_spans_merge() {
        assert_eq!(merge(spans(&[(0, 3), (3, 6)])), spans(&[(0, 6)]));
    }

    #[test]
    fn gap_of_one_keeps_spans_apart() {
        assert_eq!(merge(spans(&[(0, 3), (4, 6)])), spans(&[(0, 3), (4, 6)]));
    }

    #[test]
    fn contained_span_collapses_into_the_larger() {
        assert_eq!(merge(spans(&[(2, 8), (3, 5)])), spans(&[(2, 8)]));
    }

    #[test]
    fn partial_overlap_extends_the_end() {
        assert_eq!(merge(spans(&[(1, 3), (2, 4)])), spans(&[(1, 4)]));
    }

    #[test]
    fn disjoint_spans_stay_separate() {
        assert_eq!(
            merge(spans(&[(0, 2), (5, 7), (10, 12)])),
            spans(&[(0, 2), (5, 7), (10, 12)])
        );
    }

    // --- ordering ---

    #[test]
    fn unsorted_input_is_sorted_first() {
        assert_eq!(merge(spans(&[(5, 7), (0, 2), (6, 9)])), spans(&[(0, 2), (5, 9)]));
    }

    #[test]
    fn identical_starts_merge_deterministically() {
        assert_eq!(merge(spans(&[(2, 5), (2, 3)])), spans(&[(2, 5)]));
        assert_eq!(merge(spans(&[(2, 3), (2, 5)])), spans(&[(2, 5)]));
    }

    // --- invariants ---

    #[test]
    fn merge_is_idempotent() {
        let once = merge(spans(&[(0, 3), (2, 6), (8, 9)]));
        assert_eq!(merge(once.clone()), once);
    }

    #[test]
    fn empty_input_merges_to_empty() {
        assert_eq!(merge(Vec::new()), Vec::new());
    }

    #[test]
    #[should_panic(expected = "zero-length span")]
    fn zero_length_span_panics() {
        merge(spans(&[(3, 3)]));
    }
}
