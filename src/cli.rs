//! CLI definitions and entry point

use std::io::{self, Write};

use clap::Parser;

use blocklint::config::{self, FileConfig, Settings};
use blocklint::files;
use blocklint::patterns::MatcherSet;
use blocklint::runner::{self, Source};
use blocklint::wordlists::WordLists;

/// blocklint - lint block-listed words
#[derive(Parser, Debug)]
#[command(
    name = "blocklint",
    version,
    about = "Lint block-listed words",
    long_about = "Lint block-listed words in text and source files.\n\n\
                  Terms come in three tiers of increasing strictness:\n\
                  blocklist, wordlist, and exactlist."
)]
pub struct Cli {
    /// Files or directories to lint, default all files in current directory
    pub files: Vec<String>,

    /// Comma separated list of words to lint in any context, with possibly
    /// special characters between, case insensitive; DEFAULT to
    /// master,slave,whitelist,blacklist
    #[arg(long)]
    pub blocklist: Option<String>,

    /// Comma separated list of words to lint as whole words, with possibly
    /// special characters between, case insensitive
    #[arg(long)]
    pub wordlist: Option<String>,

    /// Comma separated list of words to lint as whole words exactly as
    /// entered
    #[arg(long)]
    pub exactlist: Option<String>,

    /// Show the end position of a match in output
    #[arg(short = 'e', long)]
    pub end_pos: bool,

    /// Use stdin as input instead of file list
    #[arg(long)]
    pub stdin: bool,

    /// Cause non-zero exit status if at least this many issues are found
    #[arg(long)]
    pub max_issue_threshold: Option<usize>,

    /// Paths to files that should _not_ be checked by blocklint, even if
    /// within a checked directory
    #[arg(long)]
    pub skip_files: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let cwd = std::env::current_dir()?;
    let settings = resolve_settings(cli, FileConfig::discover(&cwd));

    let lists = WordLists::gather(&settings);
    let checkers = MatcherSet::compile(&lists)?;

    let sources: Vec<Source> = if settings.stdin {
        vec![Source::Stdin]
    } else {
        files::expand_files(&settings.files, settings.skip_files.as_ref())?
            .into_iter()
            .map(Source::File)
            .collect()
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let report = runner::run(&sources, &checkers, settings.end_pos, &mut out)?;

    if runner::enforce_threshold(report, settings.max_issue_threshold, &mut out)? {
        out.flush()?;
        drop(out);
        std::process::exit(1);
    }

    Ok(())
}

/// Layer command-line flags over the merged config files.
fn resolve_settings(cli: Cli, file_cfg: FileConfig) -> Settings {
    Settings {
        blocklist: cli.blocklist.or(file_cfg.blocklist),
        wordlist: cli.wordlist.or(file_cfg.wordlist),
        exactlist: cli.exactlist.or(file_cfg.exactlist),
        end_pos: cli.end_pos || file_cfg.end_pos.unwrap_or(false),
        stdin: cli.stdin || file_cfg.stdin.unwrap_or(false),
        max_issue_threshold: cli.max_issue_threshold.or(file_cfg.max_issue_threshold),
        skip_files: cli
            .skip_files
            .or(file_cfg.skip_files)
            .map(|raw| config::parse_skip_files(&raw)),
        files: cli.files,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args.iter().copied()).unwrap()
    }

    #[test]
    fn test_flags_win_over_config() {
        let cli = parse(&["blocklint", "--blocklist", "flag", "--max-issue-threshold", "2"]);
        let file_cfg: FileConfig =
            toml::from_str("blocklist = \"cfg\"\nwordlist = \"cfg\"\nmax_issue_threshold = 9\n")
                .unwrap();

        let settings = resolve_settings(cli, file_cfg);
        assert_eq!(settings.blocklist.as_deref(), Some("flag"));
        assert_eq!(settings.wordlist.as_deref(), Some("cfg"));
        assert_eq!(settings.max_issue_threshold, Some(2));
    }

    #[test]
    fn test_boolean_flags_merge_by_or() {
        let cli = parse(&["blocklint", "-e"]);
        let file_cfg: FileConfig = toml::from_str("stdin = true\n").unwrap();

        let settings = resolve_settings(cli, file_cfg);
        assert!(settings.end_pos);
        assert!(settings.stdin);
    }

    #[test]
    fn test_skip_files_parsed_from_config_value() {
        let cli = parse(&["blocklint"]);
        let file_cfg: FileConfig = toml::from_str("skip_files = \"a.txt,b.txt\"\n").unwrap();

        let settings = resolve_settings(cli, file_cfg);
        let skip = settings.skip_files.unwrap();
        assert!(skip.contains("a.txt") && skip.contains("b.txt"));
    }
}
