//! Test case model
//!
//! A test case is one input file under a category directory. Its report
//! artifact path is derived from the file stem alone.

use std::fmt;
use std::path::{Path, PathBuf};

use super::Category;

/// One parser input discovered under a category directory
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TestCase {
    pub category: Category,
    pub path: PathBuf,
}

impl TestCase {
    /// Create a test case, rejecting paths without a file stem
    pub fn new(category: Category, path: impl Into<PathBuf>) -> Option<Self> {
        let path = path.into();
        path.file_stem()?;
        Some(Self { category, path })
    }

    /// Case identifier (file name without the input extension)
    pub fn id(&self) -> String {
        self.path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// File name as shown in progress output
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// Report artifact path: `<reports>/<category>/<id>.<output_ext>`
    pub fn report_path(&self, reports_dir: &Path, output_ext: &str) -> PathBuf {
        self.category
            .report_dir(reports_dir)
            .join(format!("{}.{}", self.id(), output_ext))
    }
}

impl fmt::Display for TestCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.category, self.file_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_strips_extension() {
        let case = TestCase::new(Category::new("valid"), "/repo/tests/valid/foo.popin").unwrap();
        assert_eq!(case.id(), "foo");
        assert_eq!(case.file_name(), "foo.popin");
        assert_eq!(case.to_string(), "valid/foo.popin");
    }

    #[test]
    fn test_report_path_mirrors_category() {
        let case = TestCase::new(Category::new("invalid"), "/repo/tests/invalid/bad.popin").unwrap();
        assert_eq!(
            case.report_path(Path::new("/repo/tests/reports"), "popout"),
            PathBuf::from("/repo/tests/reports/invalid/bad.popout")
        );
    }

    #[test]
    fn test_report_path_keeps_inner_dots() {
        let case = TestCase::new(Category::new("valid"), "tests/valid/a.b.popin").unwrap();
        assert_eq!(
            case.report_path(Path::new("tests/reports"), "popout"),
            PathBuf::from("tests/reports/valid/a.b.popout")
        );
    }

    #[test]
    fn test_rejects_empty_path() {
        assert!(TestCase::new(Category::new("valid"), "").is_none());
    }
}
