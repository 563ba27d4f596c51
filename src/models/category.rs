//! Test category model

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// Category names used when nothing else is configured
pub const DEFAULT_CATEGORIES: &[&str] = &["valid", "invalid"];

/// Named group of test cases sharing an input/report directory pair
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Category(String);

impl Category {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }

    /// Directory holding this category's inputs
    pub fn input_dir(&self, tests_dir: &Path) -> PathBuf {
        tests_dir.join(&self.0)
    }

    /// Directory receiving this category's reports
    pub fn report_dir(&self, reports_dir: &Path) -> PathBuf {
        reports_dir.join(&self.0)
    }

    /// Get the default category set, in run order
    pub fn defaults() -> Vec<Category> {
        DEFAULT_CATEGORIES.iter().map(|c| Category::new(*c)).collect()
    }

    /// Parse a comma-separated list, ignoring blanks
    pub fn parse_list(s: &str) -> Vec<Category> {
        s.split(',')
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(Category::new)
            .collect()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
