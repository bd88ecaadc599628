//! Pattern data model: compiled patterns arranged into an AND-of-OR formula.
//!
//! A [`PatternSet`] is built once per invocation by [`crate::compile`] and is
//! read-only afterwards, so it can be shared by reference across any number
//! of lines (or threads) without locking. Per-line state lives entirely in
//! the values produced while processing that line.

use regex::Regex;

/// A single compiled search pattern.
#[derive(Debug, Clone)]
pub struct Pattern {
    regex: Regex,
}

impl Pattern {
    pub(crate) fn new(regex: Regex) -> Self {
        Self { regex }
    }

    /// The source text the pattern was compiled from.
    pub fn source(&self) -> &str {
        self.regex.as_str()
    }

    /// The compiled regular expression.
    pub fn regex(&self) -> &Regex {
        &self.regex
    }
}

/// An ordered collection of patterns combined with OR semantics: a line
/// satisfies the group if any pattern in it matches.
#[derive(Debug, Clone)]
pub struct PatternGroup {
    patterns: Vec<Pattern>,
}

impl PatternGroup {
    pub(crate) fn new(patterns: Vec<Pattern>) -> Self {
        Self { patterns }
    }

    /// The patterns in this group, in the order they were given.
    pub fn patterns(&self) -> &[Pattern] {
        &self.patterns
    }
}

/// An ordered collection of groups combined with AND semantics: a line
/// satisfies the set only if every group has at least one match.
///
/// The case-sensitivity flag the set was compiled under applies uniformly to
/// every group; mixed case-sensitivity within one set is not supported.
#[derive(Debug, Clone)]
pub struct PatternSet {
    groups: Vec<PatternGroup>,
    ignore_case: bool,
}

impl PatternSet {
    pub(crate) fn new(groups: Vec<PatternGroup>, ignore_case: bool) -> Self {
        Self {
            groups,
            ignore_case,
        }
    }

    /// The groups in this set, in the order they were given.
    pub fn groups(&self) -> &[PatternGroup] {
        &self.groups
    }

    /// Whether the set was compiled case-insensitively.
    pub fn ignore_case(&self) -> bool {
        self.ignore_case
    }

    /// True when the set imposes no constraints at all.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Iterate over every pattern in every group.
    pub fn patterns(&self) -> impl Iterator<Item = &Pattern> {
        self.groups.iter().flat_map(|group| group.patterns.iter())
    }
}

#[cfg(test)]
mod tests {
    use crate::compiler::compile;

    #[test]
    fn pattern_remembers_its_source() {
        let set = compile([r"\bcat\b"], false).unwrap();
        assert_eq!(set.groups()[0].patterns()[0].source(), r"\bcat\b");
    }

    #[test]
    fn patterns_iterates_across_groups_in_order() {
        let set = compile(["one", "two", "three"], false).unwrap();
        let sources: Vec<_> = set.patterns().map(|p| p.source()).collect();
        assert_eq!(sources, ["one", "two", "three"]);
    }

    #[test]
    fn set_records_its_case_flag() {
        assert!(compile(["x"], true).unwrap().ignore_case());
        assert!(!compile(["x"], false).unwrap().ignore_case());
    }
}
