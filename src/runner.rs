//! Run coordinator
//!
//! Drives the scanner over each input source in order, writes issue records
//! as they are produced, and decides the exit disposition against the
//! configured threshold. Sources are processed strictly sequentially;
//! output interleaving across sources follows argument order.

use std::fmt;
use std::fs;
use std::io::{self, Write};

use crate::patterns::MatcherSet;
use crate::scanner;

/// One input source for a lint run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// The standard input stream, labeled `stdin`
    Stdin,
    /// A file path, labeled by the path as given
    File(String),
}

impl Source {
    /// The label used in issue output.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Stdin => "stdin",
            Self::File(path) => path,
        }
    }

    /// Read the source's full contents as text.
    fn read(&self) -> io::Result<String> {
        match self {
            Self::Stdin => io::read_to_string(io::stdin().lock()),
            Self::File(path) => fs::read_to_string(path),
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Aggregate result of one lint run
#[derive(Debug, Clone, Copy, Default)]
pub struct RunReport {
    /// Total issues found across all sources
    pub total_issues: usize,
}

impl RunReport {
    /// Whether the total meets or exceeds the configured threshold.
    ///
    /// With no threshold configured the run always passes, whatever the
    /// count.
    #[must_use]
    pub fn exceeds(self, threshold: Option<usize>) -> bool {
        threshold.is_some_and(|max| self.total_issues >= max)
    }
}

/// Process every source in order, writing formatted issues to `out`.
pub fn run<W: Write>(
    sources: &[Source],
    checkers: &MatcherSet,
    end_pos: bool,
    out: &mut W,
) -> io::Result<RunReport> {
    let mut report = RunReport::default();
    for source in sources {
        report.total_issues += process_source(source, checkers, end_pos, out)?;
    }
    Ok(report)
}

/// Lint one source to completion, returning its issue count.
///
/// A source that cannot be read, or whose bytes are not valid UTF-8, is
/// skipped: it contributes zero issues and produces no output.
pub fn process_source<W: Write>(
    source: &Source,
    checkers: &MatcherSet,
    end_pos: bool,
    out: &mut W,
) -> io::Result<usize> {
    let text = match source.read() {
        Ok(text) => text,
        Err(err) => {
            log::debug!("skipping {source}: {err}");
            return Ok(0);
        },
    };

    let mut matched = 0;
    for (i, line) in text.lines().enumerate() {
        for issue in scanner::check_line(line, checkers, source.label(), i + 1) {
            writeln!(out, "{}", issue.render(end_pos))?;
            matched += 1;
        }
    }
    Ok(matched)
}

/// Apply the threshold check, printing the summary when the run failed.
///
/// Returns `true` when the caller should terminate with a failure status.
pub fn enforce_threshold<W: Write>(
    report: RunReport,
    threshold: Option<usize>,
    out: &mut W,
) -> io::Result<bool> {
    if !report.exceeds(threshold) {
        return Ok(false);
    }
    if let Some(max) = threshold {
        writeln!(
            out,
            "Found {} issues, with maximum set to {max}!",
            report.total_issues
        )?;
    }
    Ok(true)
}
