//! Input discovery: which files to validate when no paths are given.

use std::path::{Path, PathBuf};

use globset::Glob;

use crate::error::DiscoverError;

pub const DEFAULT_PATTERN: &str = "Gmail*.json";

pub const TRACING_TARGET: &str = "flowcheck::discover";

/// Files (or symlinks to files) directly inside `dir` whose file name
/// matches `pattern`, sorted by path.
pub fn discover(dir: &Path, pattern: &str) -> Result<Vec<PathBuf>, DiscoverError> {
    let matcher = Glob::new(pattern)
        .map_err(|source| DiscoverError::Pattern {
            pattern: pattern.to_string(),
            source,
        })?
        .compile_matcher();

    let read_dir_err = |source| DiscoverError::ReadDir {
        path: dir.to_path_buf(),
        source,
    };

    let mut paths = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(read_dir_err)? {
        let entry = entry.map_err(read_dir_err)?;
        let path = entry.path();
        // `is_file` follows symlinks.
        if matcher.is_match(entry.file_name()) && path.is_file() {
            paths.push(path);
        }
    }
    paths.sort();

    tracing::debug!(
        target: TRACING_TARGET,
        dir = %dir.display(),
        pattern,
        found = paths.len(),
        "discovered workflow files"
    );

    Ok(paths)
}
