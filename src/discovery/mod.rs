//! Test case discovery
//!
//! Lists the input files directly under a category directory. A missing
//! directory yields no cases.

use glob::{MatchOptions, Pattern};
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::error::HarnessError;
use crate::models::{Category, TestCase};

/// Lazily enumerate the cases of one category
///
/// Order follows the directory listing; only regular files named
/// `*.<input_ext>` are yielded. Matching is done on file names, so the
/// directory path itself may be any OS string.
pub fn discover<'a>(
    category: &'a Category,
    tests_dir: &Path,
    input_ext: &'a str,
) -> Result<Box<dyn Iterator<Item = TestCase> + 'a>, HarnessError> {
    let dir = category.input_dir(tests_dir);
    if !dir.is_dir() {
        debug!("No input directory for category {} ({})", category, dir.display());
        return Ok(Box::new(std::iter::empty()));
    }

    let pattern = Pattern::new(&format!("*.{}", Pattern::escape(input_ext))).map_err(|e| {
        HarnessError::Pattern {
            dir: dir.clone(),
            message: e.to_string(),
        }
    })?;
    let options = MatchOptions {
        case_sensitive: true,
        require_literal_separator: true,
        require_literal_leading_dot: false,
    };

    let entries = fs::read_dir(&dir).map_err(|source| HarnessError::ReadDir {
        path: dir.clone(),
        source,
    })?;

    let cases = entries
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry.path()),
            Err(e) => {
                debug!("Skipping unreadable entry: {}", e);
                None
            }
        })
        .filter(move |path| {
            let name_matches = path
                .file_name()
                .and_then(|n| n.to_str())
                .map(|n| pattern.matches_with(n, options))
                .unwrap_or(false);
            name_matches
                && path.is_file()
                && path.extension().map(|e| e == input_ext).unwrap_or(false)
        })
        .filter_map(move |path| TestCase::new(category.clone(), path));

    Ok(Box::new(cases))
}
