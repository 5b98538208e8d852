//! Pattern construction and the compiled matcher set
//!
//! Each tier escapes its terms differently: blocklist and wordlist terms
//! tolerate a single non-alphanumeric character between every pair of term
//! characters, wordlist and exactlist patterns are anchored at word edges,
//! and only the exactlist matches case-sensitively. Every character of a
//! term is escaped for literal matching, so regex metacharacters in user
//! input are inert.

use regex::{Regex, RegexBuilder};

use crate::wordlists::WordLists;

/// Character class for the optional filler between term characters
pub const IGNORE_CLASS: &str = "[^a-zA-Z0-9]";

/// Pattern recognizing the inline suppression directive
const PRAGMA_PATTERN: &str = "blocklint:.*pragma";

/// One term with its compiled search pattern
#[derive(Debug, Clone)]
pub struct Matcher {
    /// The raw term the pattern was built from
    pub term: String,
    /// The compiled pattern
    pub regex: Regex,
}

/// The ordered matcher set for one lint run.
///
/// Iteration order is blocklist terms, then wordlist terms, then exactlist
/// terms, each sorted; that order fixes how overlapping matches on one line
/// are reported.
#[derive(Debug, Clone)]
pub struct MatcherSet {
    matchers: Vec<Matcher>,
    pragma: Regex,
}

impl MatcherSet {
    /// Compile the gathered word lists into matchers.
    ///
    /// Empty terms produce no matcher at all. Compilation cannot fail on
    /// user input (terms are fully escaped); the error covers pattern-size
    /// limits only.
    pub fn compile(lists: &WordLists) -> Result<Self, regex::Error> {
        let mut matchers = Vec::new();

        for term in &lists.blocklist {
            push_matcher(&mut matchers, term, &tolerant_pattern(term), true)?;
        }
        for term in &lists.wordlist {
            push_matcher(&mut matchers, term, &word_bounded(&tolerant_pattern(term)), true)?;
        }
        for term in &lists.exactlist {
            push_matcher(&mut matchers, term, &word_bounded(&regex::escape(term)), false)?;
        }

        Ok(Self {
            matchers,
            pragma: Regex::new(PRAGMA_PATTERN)?,
        })
    }

    /// The matchers in report order.
    #[must_use]
    pub fn matchers(&self) -> &[Matcher] {
        &self.matchers
    }

    /// Whether the line carries the suppression directive.
    #[must_use]
    pub fn is_suppressed(&self, line: &str) -> bool {
        self.pragma.is_match(line)
    }

    /// Number of compiled matchers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.matchers.len()
    }

    /// Whether the set has no matchers at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.matchers.is_empty()
    }
}

fn push_matcher(
    matchers: &mut Vec<Matcher>,
    term: &str,
    pattern: &str,
    ignore_case: bool,
) -> Result<(), regex::Error> {
    if pattern.is_empty() {
        return Ok(());
    }
    let regex = RegexBuilder::new(pattern).case_insensitive(ignore_case).build()?;
    matchers.push(Matcher {
        term: term.to_string(),
        regex,
    });
    Ok(())
}

/// Escape `term` for literal matching, allowing one optional
/// non-alphanumeric character between every pair of consecutive characters.
///
/// This lets `bab` match `b-a_b`, `B.a.b`, camelCase seams, and similar.
#[must_use]
pub fn tolerant_pattern(term: &str) -> String {
    term.chars()
        .map(|c| regex::escape(&c.to_string()))
        .collect::<Vec<_>>()
        .join(&format!("{IGNORE_CLASS}?"))
}

/// Anchor a non-empty pattern with word boundaries on both sides.
#[must_use]
pub fn word_bounded(pattern: &str) -> String {
    if pattern.is_empty() {
        String::new()
    } else {
        format!(r"\b{pattern}\b")
    }
}
