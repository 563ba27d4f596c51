//! Configuration module
//!
//! Everything the runner needs to know about the repository layout and the
//! parser lives in [`HarnessConfig`]. Values are layered: built-in defaults,
//! then a config file, then `SLR_HARNESS_*` environment variables, then CLI
//! flags.

mod env;
mod file;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::models::Category;

pub use env::{print_env_help, EnvConfig};
pub use file::ConfigFile;

/// What to do when the parser exits unsuccessfully or times out
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    /// Do not inspect the exit status
    #[default]
    Ignore,
    /// Log a warning and keep going
    Warn,
    /// Stop the batch with an error
    Halt,
}

impl FailurePolicy {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "ignore" | "none" => Some(FailurePolicy::Ignore),
            "warn" | "log" => Some(FailurePolicy::Warn),
            "halt" | "stop" | "fail" => Some(FailurePolicy::Halt),
            _ => None,
        }
    }
}

impl fmt::Display for FailurePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailurePolicy::Ignore => write!(f, "ignore"),
            FailurePolicy::Warn => write!(f, "warn"),
            FailurePolicy::Halt => write!(f, "halt"),
        }
    }
}

/// Harness configuration
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HarnessConfig {
    /// Repository root; other relative paths are resolved against it
    pub root: PathBuf,

    /// Directory holding one input directory per category
    pub tests_dir: PathBuf,

    /// Directory receiving one report directory per category
    pub reports_dir: PathBuf,

    /// Parser executable
    pub parser: PathBuf,

    /// Categories, in run order
    pub categories: Vec<Category>,

    /// Extension identifying test inputs (without the dot)
    pub input_ext: String,

    /// Extension given to reports (without the dot)
    pub output_ext: String,

    /// Kill the parser after this many seconds
    pub timeout_secs: Option<u64>,

    /// Handling of unsuccessful parser runs
    pub on_failure: FailurePolicy,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            tests_dir: PathBuf::from("tests"),
            reports_dir: PathBuf::from("tests/reports"),
            parser: PathBuf::from("build/SLRParser"),
            categories: Category::defaults(),
            input_ext: "popin".to_string(),
            output_ext: "popout".to_string(),
            timeout_secs: None,
            on_failure: FailurePolicy::Ignore,
        }
    }
}

impl HarnessConfig {
    /// Set repository root
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = root.into();
        self
    }

    /// Set parser executable
    pub fn with_parser(mut self, parser: impl Into<PathBuf>) -> Self {
        self.parser = parser.into();
        self
    }

    /// Replace the category list
    pub fn with_categories(mut self, categories: Vec<Category>) -> Self {
        self.categories = categories;
        self
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = Some(secs);
        self
    }

    pub fn with_failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.on_failure = policy;
        self
    }

    /// Make the root absolute against the current directory
    pub fn absolutize(mut self) -> Result<Self> {
        if self.root.is_relative() {
            let cwd = std::env::current_dir().context("Failed to read current directory")?;
            self.root = normalize(&cwd.join(&self.root));
        }
        Ok(self)
    }

    pub fn tests_path(&self) -> PathBuf {
        self.root.join(&self.tests_dir)
    }

    pub fn reports_path(&self) -> PathBuf {
        self.root.join(&self.reports_dir)
    }

    pub fn parser_path(&self) -> PathBuf {
        self.root.join(&self.parser)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.categories.is_empty() {
            anyhow::bail!("At least one test category is required");
        }

        let mut seen = HashSet::new();
        for category in &self.categories {
            let name = category.name();
            if name.is_empty() || name.contains(['/', '\\']) || name == "." || name == ".." {
                anyhow::bail!("Invalid category name: '{}'", name);
            }
            if !seen.insert(name) {
                anyhow::bail!("Duplicate category: '{}'", name);
            }
        }

        for (label, ext) in [("input", &self.input_ext), ("output", &self.output_ext)] {
            if ext.is_empty() {
                anyhow::bail!("The {} extension must not be empty", label);
            }
            // Discovery compares against `Path::extension`, which never contains a dot
            if ext.contains(['.', '/', '\\', '*', '?', '[']) {
                anyhow::bail!("Invalid {} extension: '{}'", label, ext);
            }
        }

        if self.input_ext == self.output_ext {
            anyhow::bail!(
                "Input and output extensions must differ (both '{}')",
                self.input_ext
            );
        }

        if self.timeout_secs == Some(0) {
            anyhow::bail!("Timeout must be at least one second");
        }

        Ok(())
    }
}

/// Drop `.` components so printed paths stay readable
fn normalize(path: &Path) -> PathBuf {
    path.components()
        .filter(|c| !matches!(c, std::path::Component::CurDir))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = HarnessConfig::default();
        assert_eq!(config.input_ext, "popin");
        assert_eq!(config.output_ext, "popout");
        assert_eq!(config.categories, Category::defaults());
        assert_eq!(config.on_failure, FailurePolicy::Ignore);
        assert!(config.timeout_secs.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_paths_resolve_against_root() {
        let config = HarnessConfig::default().with_root("/repo");
        assert_eq!(config.tests_path(), PathBuf::from("/repo/tests"));
        assert_eq!(config.reports_path(), PathBuf::from("/repo/tests/reports"));
        assert_eq!(config.parser_path(), PathBuf::from("/repo/build/SLRParser"));
    }

    #[test]
    fn test_absolute_parser_is_kept() {
        let config = HarnessConfig::default()
            .with_root("/repo")
            .with_parser("/opt/slr/SLRParser");
        assert_eq!(config.parser_path(), PathBuf::from("/opt/slr/SLRParser"));
    }

    #[test]
    fn test_absolutize() {
        let config = HarnessConfig::default().absolutize().unwrap();
        assert!(config.root.is_absolute());
        assert!(!config
            .root
            .components()
            .any(|c| matches!(c, std::path::Component::CurDir)));
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let empty = HarnessConfig::default().with_categories(Vec::new());
        assert!(empty.validate().is_err());

        let duplicate = HarnessConfig::default()
            .with_categories(vec![Category::new("valid"), Category::new("valid")]);
        assert!(duplicate.validate().is_err());

        let nested = HarnessConfig::default().with_categories(vec![Category::new("a/b")]);
        assert!(nested.validate().is_err());

        let same_ext = HarnessConfig {
            output_ext: "popin".to_string(),
            ..Default::default()
        };
        assert!(same_ext.validate().is_err());

        let dotted = HarnessConfig {
            input_ext: ".popin".to_string(),
            ..Default::default()
        };
        assert!(dotted.validate().is_err());

        let zero_timeout = HarnessConfig::default().with_timeout(0);
        assert!(zero_timeout.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_multi_part_extension() {
        let input = HarnessConfig {
            input_ext: "slr.in".to_string(),
            ..Default::default()
        };
        assert!(input.validate().is_err());

        let output = HarnessConfig {
            output_ext: "pop.out".to_string(),
            ..Default::default()
        };
        assert!(output.validate().is_err());
    }

    #[test]
    fn test_failure_policy_from_str() {
        assert_eq!(FailurePolicy::from_str("IGNORE"), Some(FailurePolicy::Ignore));
        assert_eq!(FailurePolicy::from_str("warn"), Some(FailurePolicy::Warn));
        assert_eq!(FailurePolicy::from_str("halt"), Some(FailurePolicy::Halt));
        assert_eq!(FailurePolicy::from_str("explode"), None);
        assert_eq!(FailurePolicy::Warn.to_string(), "warn");
    }
}
