//! Centralized path definitions for blocklint
//!
//! Configuration is looked up in two places, user level first:
//!
//! ```text
//! ~/.blocklint.toml    # user-wide defaults
//! ./.blocklint.toml    # per-project settings (wins over user level)
//! ```

use std::path::{Path, PathBuf};

/// Configuration filename, shared by the user and project levels
pub const CONFIG_FILE: &str = ".blocklint.toml";

/// Get the user-level config file path.
///
/// Returns `~/.blocklint.toml`.
#[must_use]
pub fn user_config() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("~")).join(CONFIG_FILE)
}

/// Get the project config file path under the given directory.
#[must_use]
pub fn project_config(dir: &Path) -> PathBuf {
    dir.join(CONFIG_FILE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_structure() {
        assert!(user_config().ends_with(".blocklint.toml"));

        let project = project_config(Path::new("/repo"));
        assert!(project.starts_with("/repo"));
        assert!(project.ends_with(".blocklint.toml"));
    }
}
