//! File-list expansion
//!
//! Turns the raw `files` argument into the concrete list of paths to lint.
//! Directories expand one level to their regular-file children in listing
//! order; absolute paths are kept even when they are not regular files, so
//! pipes can be linted.

use std::collections::BTreeSet;
use std::env;
use std::io;
use std::path::Path;

use walkdir::WalkDir;

/// Expand files and directories into the concrete list of paths to lint.
///
/// An empty input defaults to the current working directory. Relative paths
/// that name neither a file nor a directory are dropped; entries whose
/// exact string appears in `skip_files` are removed after expansion.
pub fn expand_files(
    files: &[String],
    skip_files: Option<&BTreeSet<String>>,
) -> io::Result<Vec<String>> {
    let defaulted;
    let files = if files.is_empty() {
        defaulted = vec![env::current_dir()?.to_string_lossy().into_owned()];
        &defaulted
    } else {
        files
    };

    let mut expanded = Vec::new();
    for entry in files {
        let path = Path::new(entry);
        if path.is_dir() {
            for child in WalkDir::new(path).min_depth(1).max_depth(1).into_iter().flatten() {
                if child.file_type().is_file() {
                    expanded.push(child.path().to_string_lossy().into_owned());
                }
            }
        } else if path.is_file() || path.is_absolute() {
            // is_absolute keeps pipes and other non-regular inputs
            expanded.push(entry.clone());
        } else {
            log::debug!("dropping {entry}: not a file or directory");
        }
    }

    if let Some(skip) = skip_files {
        expanded.retain(|path| !skip.contains(path));
    }

    Ok(expanded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_directory_expands_one_level_to_regular_files() {
        let temp = tempfile::tempdir().unwrap();
        fs::write(temp.path().join("a.txt"), "x").unwrap();
        fs::write(temp.path().join("b.txt"), "x").unwrap();
        fs::create_dir(temp.path().join("sub")).unwrap();
        fs::write(temp.path().join("sub").join("nested.txt"), "x").unwrap();

        let dir = temp.path().to_string_lossy().into_owned();
        let mut expanded = expand_files(&[dir], None).unwrap();
        expanded.sort();

        let names: Vec<String> = expanded
            .iter()
            .map(|p| Path::new(p).file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, ["a.txt", "b.txt"]);
    }

    #[test]
    fn test_plain_files_kept_as_given() {
        let temp = tempfile::tempdir().unwrap();
        let file = temp.path().join("a.txt");
        fs::write(&file, "x").unwrap();

        let entry = file.to_string_lossy().into_owned();
        let expanded = expand_files(std::slice::from_ref(&entry), None).unwrap();
        assert_eq!(expanded, [entry]);
    }

    #[test]
    fn test_missing_relative_path_dropped_but_absolute_kept() {
        let expanded =
            expand_files(&["missing.txt".into(), "/no/such/pipe".into()], None).unwrap();
        assert_eq!(expanded, ["/no/such/pipe"]);
    }

    #[test]
    fn test_skip_files_filters_expanded_entries() {
        let temp = tempfile::tempdir().unwrap();
        fs::write(temp.path().join("keep.txt"), "x").unwrap();
        fs::write(temp.path().join("skip.txt"), "x").unwrap();

        let dir = temp.path().to_string_lossy().into_owned();
        let skip: BTreeSet<String> =
            BTreeSet::from([temp.path().join("skip.txt").to_string_lossy().into_owned()]);

        let expanded = expand_files(&[dir], Some(&skip)).unwrap();
        assert_eq!(expanded, [temp.path().join("keep.txt").to_string_lossy().into_owned()]);
    }
}
