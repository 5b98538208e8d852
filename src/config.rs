//! Configuration loading and merging
//!
//! Settings come from three layers, lowest precedence first: the user
//! config file, the project config file, and command-line flags. The merged
//! result is the [`Settings`] object the rest of the crate consumes.
//!
//! Config files are lenient by design: a missing file contributes nothing,
//! and an unreadable or malformed file is logged at warn level and skipped.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::paths;

/// Errors raised while reading a single config file
#[derive(Debug, Error)]
pub enum ConfigError {
    /// File could not be read
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// File is not valid TOML of the expected shape
    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Raw settings as they appear in a `.blocklint.toml` file
///
/// Every field is optional; unknown keys are ignored so config files can be
/// shared with other tools.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FileConfig {
    /// Comma-separated blocklist terms, or a path to a term file
    pub blocklist: Option<String>,
    /// Comma-separated wordlist terms, or a path to a term file
    pub wordlist: Option<String>,
    /// Comma-separated exactlist terms, or a path to a term file
    pub exactlist: Option<String>,
    /// Include end columns in issue output
    pub end_pos: Option<bool>,
    /// Read standard input instead of the file list
    pub stdin: Option<bool>,
    /// Fail the run when total issues reach this count
    pub max_issue_threshold: Option<usize>,
    /// Comma- or newline-separated paths to exclude from linting
    pub skip_files: Option<String>,
}

impl FileConfig {
    /// Parse a single config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path)?;
        Ok(toml::from_str(&raw)?)
    }

    /// Load and merge the user and project config files for `dir`.
    #[must_use]
    pub fn discover(dir: &Path) -> Self {
        Self::from_paths(&[paths::user_config(), paths::project_config(dir)])
    }

    /// Merge the config files at `paths`, later entries winning.
    fn from_paths(paths: &[PathBuf]) -> Self {
        let mut merged = Self::default();
        for path in paths {
            if !path.exists() {
                continue;
            }
            match Self::load(path) {
                Ok(cfg) => merged = merged.overridden_by(cfg),
                Err(err) => log::warn!("ignoring config {}: {err}", path.display()),
            }
        }
        merged
    }

    /// Layer `over` on top of `self`, field by field.
    #[must_use]
    pub fn overridden_by(self, over: Self) -> Self {
        Self {
            blocklist: over.blocklist.or(self.blocklist),
            wordlist: over.wordlist.or(self.wordlist),
            exactlist: over.exactlist.or(self.exactlist),
            end_pos: over.end_pos.or(self.end_pos),
            stdin: over.stdin.or(self.stdin),
            max_issue_threshold: over.max_issue_threshold.or(self.max_issue_threshold),
            skip_files: over.skip_files.or(self.skip_files),
        }
    }
}

/// Fully resolved configuration consumed by the linter core
#[derive(Debug, Clone, Default)]
pub struct Settings {
    /// Raw blocklist value (comma-separated terms or a term-file path)
    pub blocklist: Option<String>,
    /// Raw wordlist value
    pub wordlist: Option<String>,
    /// Raw exactlist value
    pub exactlist: Option<String>,
    /// Include end columns in issue output
    pub end_pos: bool,
    /// Read standard input instead of the file list
    pub stdin: bool,
    /// Fail the run when total issues reach this count
    pub max_issue_threshold: Option<usize>,
    /// Exact paths excluded from the expanded file list
    pub skip_files: Option<BTreeSet<String>>,
    /// Files or directories to lint, as given on the command line
    pub files: Vec<String>,
}

/// Split a `skip_files` value into its path set.
///
/// Config files can carry multi-line values, so entries are separated by
/// newlines as well as commas.
#[must_use]
pub fn parse_skip_files(raw: &str) -> BTreeSet<String> {
    raw.lines()
        .flat_map(|line| line.split(','))
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let cfg: FileConfig = toml::from_str(
            r#"
blocklist = "tiger,lion"
wordlist = "cac"
end_pos = true
max_issue_threshold = 3
skip_files = "a.txt,b.txt"
"#,
        )
        .unwrap();

        assert_eq!(cfg.blocklist.as_deref(), Some("tiger,lion"));
        assert_eq!(cfg.wordlist.as_deref(), Some("cac"));
        assert_eq!(cfg.exactlist, None);
        assert_eq!(cfg.end_pos, Some(true));
        assert_eq!(cfg.stdin, None);
        assert_eq!(cfg.max_issue_threshold, Some(3));
        assert_eq!(cfg.skip_files.as_deref(), Some("a.txt,b.txt"));
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let cfg: FileConfig = toml::from_str("blocklist = \"x\"\nfuture_knob = 7\n").unwrap();
        assert_eq!(cfg.blocklist.as_deref(), Some("x"));
    }

    #[test]
    fn test_overridden_by_prefers_project_values() {
        let user: FileConfig = toml::from_str("blocklist = \"a\"\nend_pos = true\n").unwrap();
        let project: FileConfig = toml::from_str("blocklist = \"b\"\nstdin = true\n").unwrap();

        let merged = user.overridden_by(project);
        assert_eq!(merged.blocklist.as_deref(), Some("b"));
        assert_eq!(merged.end_pos, Some(true));
        assert_eq!(merged.stdin, Some(true));
    }

    #[test]
    fn test_from_paths_layers_user_then_project() {
        let temp = tempfile::tempdir().unwrap();
        let user = temp.path().join("user.toml");
        let project = temp.path().join("project.toml");
        fs::write(&user, "blocklist = \"a\"\nend_pos = true\n").unwrap();
        fs::write(&project, "blocklist = \"b\"\nmax_issue_threshold = 1\n").unwrap();

        let cfg = FileConfig::from_paths(&[user, project]);
        assert_eq!(cfg.blocklist.as_deref(), Some("b"));
        assert_eq!(cfg.end_pos, Some(true));
        assert_eq!(cfg.max_issue_threshold, Some(1));
    }

    #[test]
    fn test_from_paths_skips_missing_and_malformed_files() {
        let temp = tempfile::tempdir().unwrap();
        let malformed = temp.path().join("bad.toml");
        fs::write(&malformed, "not toml at all [").unwrap();

        let cfg = FileConfig::from_paths(&[temp.path().join("absent.toml"), malformed]);
        assert!(cfg.blocklist.is_none());
        assert!(cfg.skip_files.is_none());
    }

    #[test]
    fn test_parse_skip_files_commas_and_newlines() {
        let skip = parse_skip_files("a.txt,b.txt\nc/d.txt");
        assert!(skip.contains("a.txt"));
        assert!(skip.contains("b.txt"));
        assert!(skip.contains("c/d.txt"));
        assert_eq!(skip.len(), 3);
    }

    #[test]
    fn test_parse_skip_files_drops_empty_entries() {
        let skip = parse_skip_files("a.txt,\n,b.txt");
        assert_eq!(skip.len(), 2);
    }
}
