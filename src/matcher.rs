//! Line predicates and match-span collection over a compiled [`PatternSet`].
//!
//! All positions are **byte** offsets into the line, as reported by the
//! regex engine; offsets produced here always fall on UTF-8 character
//! boundaries. Everything in this module is a pure function of its inputs.

use crate::pattern::{PatternGroup, PatternSet};
use crate::span::Span;

impl PatternGroup {
    /// True when any pattern in the group matches anywhere in the line.
    ///
    /// This is an unanchored containment search, not a full-line match.
    ///
    /// An empty group counts as satisfied. The compiler never produces one
    /// (empty sources are skipped and emptied groups dropped), so this only
    /// matters for hand-built sets; rejecting every line over an upstream
    /// filtering artifact would be the worse failure mode.
    pub fn is_match(&self, line: &str) -> bool {
        self.patterns().is_empty()
            || self.patterns().iter().any(|pattern| pattern.regex().is_match(line))
    }
}

impl PatternSet {
    /// True when every group in the set is satisfied by the line.
    ///
    /// Evaluation short-circuits at the first unsatisfied group. An empty
    /// set imposes no constraints and matches every line.
    pub fn is_match(&self, line: &str) -> bool {
        self.groups().iter().all(|group| group.is_match(line))
    }
}

/// Collect every match span any pattern in the set reports for the line.
///
/// Each pattern contributes its sequential non-overlapping matches, the
/// standard find-all behavior of its own engine; spans from different
/// patterns may overlap freely and are all kept. Every matching substring
/// is a highlight candidate regardless of which group produced it.
/// Zero-length matches are discarded here, the merge step requires
/// `start < end`.
pub fn find_spans(line: &str, set: &PatternSet) -> Vec<Span> {
    set.patterns()
        .flat_map(|pattern| pattern.regex().find_iter(line))
        .filter(|m| !m.is_empty())
        .map(|m| Span::new(m.start(), m.end()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compiler::{compile, compile_groups};
    use crate::pattern::{PatternGroup, PatternSet};

    // --- is_match ---

    #[test]
    fn and_of_or_semantics() {
        let set = compile_groups([vec!["foo", "bar"], vec!["baz"]], false).unwrap();
        assert!(set.is_match("foobaz"));
        assert!(set.is_match("bar then baz"));
        assert!(!set.is_match("foo"));
        assert!(!set.is_match("baz"));
    }

    #[test]
    fn empty_set_matches_every_line() {
        let set = compile(Vec::<&str>::new(), false).unwrap();
        assert!(set.is_match(""));
        assert!(set.is_match("anything at all"));
    }

    #[test]
    fn empty_group_is_vacuously_satisfied() {
        let set = PatternSet::new(vec![PatternGroup::new(Vec::new())], false);
        assert!(set.is_match("any line"));
        assert!(set.is_match(""));
    }

    #[test]
    fn search_is_unanchored_containment() {
        let set = compile(["cat"], false).unwrap();
        assert!(set.is_match("concatenate"));
    }

    // --- find_spans ---

    #[test]
    fn spans_collected_across_all_groups() {
        let set = compile(["cat", "dog"], false).unwrap();
        let spans = find_spans("cat and dog", &set);
        assert_eq!(spans, vec![Span::new(0, 3), Span::new(8, 11)]);
    }

    #[test]
    fn one_span_per_sequential_match() {
        let set = compile(["ab"], false).unwrap();
        assert_eq!(
            find_spans("ab ab", &set),
            vec![Span::new(0, 2), Span::new(3, 5)]
        );
    }

    #[test]
    fn zero_length_matches_are_discarded() {
        let set = compile(["x*"], false).unwrap();
        assert_eq!(find_spans("axa", &set), vec![Span::new(1, 2)]);
    }

    #[test]
    fn overlapping_spans_from_different_patterns_are_kept() {
        let set = compile(["ab", "bc"], false).unwrap();
        assert_eq!(
            find_spans("xabcx", &set),
            vec![Span::new(1, 3), Span::new(2, 4)]
        );
    }

    #[test]
    fn no_match_yields_no_spans() {
        let set = compile(["zebra"], false).unwrap();
        assert!(find_spans("plain line", &set).is_empty());
    }
}
