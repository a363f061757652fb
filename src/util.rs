//! Filesystem predicates.
//!
//! Nonexistent paths answer false; no error is ever raised. Config
//! resolution uses these to probe override-file candidates.

use std::path::Path;

/// True when `path` exists and is a regular file.
pub fn file_exists(path: &Path) -> bool {
    path.is_file()
}

/// True when `path` exists and is a directory.
pub fn dir_exists(path: &Path) -> bool {
    path.is_dir()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predicates_on_tempdir() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("probe.toml");

        assert!(dir_exists(dir.path()));
        assert!(!file_exists(dir.path()));
        assert!(!file_exists(&file));

        std::fs::write(&file, "x = 1\n").unwrap();
        assert!(file_exists(&file));
        assert!(!dir_exists(&file));
    }

    #[test]
    fn test_nonexistent_path_is_false_not_error() {
        let path = Path::new("/definitely/not/a/real/path");
        assert!(!file_exists(path));
        assert!(!dir_exists(path));
    }
}
