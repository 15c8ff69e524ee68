//! File discovery for indexing.
//!
//! Lists the plain-text files directly inside an input directory. Subdirectories are
//! not descended into.

use std::path::{self, Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

use crate::IndexError;

/// File extension of indexable documents, compared case-insensitively.
const TEXT_EXTENSION: &str = ".txt";

/// Returns the absolute paths of the `.txt` files directly inside `dir`, sorted.
///
/// Symlinks to regular files are included. Entries that cannot be inspected are
/// skipped.
pub fn discover_text_files(dir: &Path) -> Result<Vec<PathBuf>, IndexError> {
    if !dir.is_dir() {
        return Err(IndexError::InputDirectory(dir.to_path_buf()));
    }
    let root = path::absolute(dir)?;

    let mut files = Vec::new();
    for entry in WalkDir::new(&root)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
    {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                debug!(error = %e, "skipping unreadable directory entry");
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        if !is_text_file(entry.file_name().to_string_lossy().as_ref()) {
            continue;
        }

        files.push(entry.into_path());
    }

    files.sort();
    Ok(files)
}

/// Checks whether a file name carries the text extension.
fn is_text_file(name: &str) -> bool {
    name.to_lowercase().ends_with(TEXT_EXTENSION)
}

#[cfg(test)]
mod test {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn finds_text_files_only() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("a.txt"), "a").unwrap();
        fs::write(temp.path().join("B.TXT"), "b").unwrap();
        fs::write(temp.path().join("notes.md"), "c").unwrap();
        fs::write(temp.path().join("txt"), "d").unwrap();

        let files = discover_text_files(temp.path()).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();

        assert_eq!(names, vec!["B.TXT", "a.txt"]);
    }

    #[test]
    fn does_not_recurse() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("sub")).unwrap();
        fs::write(temp.path().join("sub/nested.txt"), "n").unwrap();
        fs::write(temp.path().join("top.txt"), "t").unwrap();

        let files = discover_text_files(temp.path()).unwrap();
        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("top.txt"));
    }

    #[test]
    fn skips_directories_named_like_text_files() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("folder.txt")).unwrap();

        assert!(discover_text_files(temp.path()).unwrap().is_empty());
    }

    #[test]
    fn returns_absolute_paths() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("a.txt"), "a").unwrap();

        let files = discover_text_files(temp.path()).unwrap();
        assert!(files[0].is_absolute());
    }

    #[test]
    fn missing_directory_is_an_error() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("missing");

        let err = discover_text_files(&missing).unwrap_err();
        assert!(matches!(err, IndexError::InputDirectory(p) if p == missing));
    }

    #[test]
    fn file_is_not_a_directory() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("a.txt");
        fs::write(&file, "a").unwrap();

        assert!(matches!(
            discover_text_files(&file),
            Err(IndexError::InputDirectory(_))
        ));
    }
}
