//! Compiles raw pattern strings into a [`PatternSet`].
//!
//! Compilation is fail-fast: the first source string that is not a valid
//! regular expression aborts the whole compilation and no set is produced.
//! A malformed filter must never silently narrow or widen the match
//! criteria.

use itertools::Itertools;
use regex::{Regex, RegexBuilder};

use crate::pattern::{Pattern, PatternGroup, PatternSet};

/// Error returned when a raw pattern string is not a valid regular
/// expression under the active case-sensitivity flag.
#[derive(Debug, Clone)]
pub struct InvalidPattern {
    pattern: String,
    cause: regex::Error,
}

impl InvalidPattern {
    /// The offending pattern source text.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}

impl std::fmt::Display for InvalidPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid pattern: {}", self.pattern)
    }
}

impl std::error::Error for InvalidPattern {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.cause)
    }
}

fn compile_one(source: &str, ignore_case: bool) -> Result<Regex, InvalidPattern> {
    RegexBuilder::new(source)
        .case_insensitive(ignore_case)
        .build()
        .map_err(|cause| InvalidPattern {
            pattern: source.to_string(),
            cause,
        })
}

/// Compile raw pattern strings into a [`PatternSet`].
///
/// Each non-empty source becomes its own single-pattern group, so every
/// given pattern must match the line (AND). OR-alternatives within one
/// group come from regex alternation, or from [`compile_groups`]. Empty
/// strings contribute no group.
pub fn compile<I, S>(sources: I, ignore_case: bool) -> Result<PatternSet, InvalidPattern>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut groups = Vec::new();
    for source in sources {
        let source = source.as_ref();
        if source.is_empty() {
            continue;
        }
        let regex = compile_one(source, ignore_case)?;
        groups.push(PatternGroup::new(vec![Pattern::new(regex)]));
    }
    Ok(PatternSet::new(groups, ignore_case))
}

/// Compile pre-grouped sources: one OR-group per inner collection.
///
/// Empty strings are skipped within each group, and a group left with no
/// patterns is dropped rather than kept as an unsatisfiable stub.
pub fn compile_groups<I, G, S>(groups: I, ignore_case: bool) -> Result<PatternSet, InvalidPattern>
where
    I: IntoIterator<Item = G>,
    G: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut compiled = Vec::new();
    for group in groups {
        let mut patterns = Vec::new();
        for source in group {
            let source = source.as_ref();
            if source.is_empty() {
                continue;
            }
            patterns.push(Pattern::new(compile_one(source, ignore_case)?));
        }
        if !patterns.is_empty() {
            compiled.push(PatternGroup::new(patterns));
        }
    }
    Ok(PatternSet::new(compiled, ignore_case))
}

/// Combine every pattern in the set into a single OR-matcher.
///
/// The combination is purely syntactic: the sources are joined with `|`,
/// which leaves each alternative's anchoring and character classes
/// untouched. The result matches a line iff at least one pattern in the set
/// matches it, which makes it useful as a cheap one-pass prefilter.
pub fn combine(set: &PatternSet) -> Result<Regex, InvalidPattern> {
    let joined = set.patterns().map(Pattern::source).join("|");
    compile_one(&joined, set.ignore_case())
}
