//! Line scanner
//!
//! Applies the compiled matcher set to one line of text and produces
//! ordered match records. A line carrying the suppression directive is
//! exempt from all matching.

use crate::patterns::MatcherSet;

/// One reported match of a blocked term against a line of input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    /// Source label (file path, or `stdin`)
    pub source: String,
    /// 1-based line number
    pub line: usize,
    /// 1-based column of the match's first character
    pub start: usize,
    /// 1-based exclusive end column
    pub end: usize,
    /// The term that matched
    pub term: String,
}

impl Issue {
    /// Format the record for output.
    #[must_use]
    pub fn render(&self, end_pos: bool) -> String {
        if end_pos {
            format!(
                "{}:{}:{}:{}: use of \"{}\"",
                self.source, self.line, self.start, self.end, self.term
            )
        } else {
            format!(
                "{}:{}:{}: use of \"{}\"",
                self.source, self.line, self.start, self.term
            )
        }
    }
}

/// Scan one line against the matcher set.
///
/// Issues come out grouped by matcher, in set order, left to right within
/// each matcher; matches of one term never overlap each other, but matches
/// of different terms may, and all are reported. Columns count characters,
/// not bytes.
#[must_use]
pub fn check_line(
    line: &str,
    checkers: &MatcherSet,
    source: &str,
    line_number: usize,
) -> Vec<Issue> {
    if checkers.is_suppressed(line) {
        return Vec::new();
    }

    let mut issues = Vec::new();
    for matcher in checkers.matchers() {
        for found in matcher.regex.find_iter(line) {
            issues.push(Issue {
                source: source.to_string(),
                line: line_number,
                start: line[..found.start()].chars().count() + 1,
                end: line[..found.end()].chars().count(),
                term: matcher.term.clone(),
            });
        }
    }
    issues
}
