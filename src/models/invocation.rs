//! Parser invocation model
//!
//! The parser accepts `-i <input>`, `-v` and `-o <output>`; an invocation is
//! that command line for one test case.

use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};

use super::TestCase;

const INPUT_FLAG: &str = "-i";
const VERBOSE_FLAG: &str = "-v";
const OUTPUT_FLAG: &str = "-o";

/// One planned parser execution
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Invocation {
    pub program: PathBuf,
    pub case: TestCase,
    pub report: PathBuf,
}

impl Invocation {
    /// Build the invocation for a case, deriving its report path
    pub fn new(program: &Path, case: TestCase, reports_dir: &Path, output_ext: &str) -> Self {
        let report = case.report_path(reports_dir, output_ext);
        Self {
            program: program.to_path_buf(),
            case,
            report,
        }
    }

    /// Arguments passed after the program path
    pub fn args(&self) -> Vec<OsString> {
        vec![
            INPUT_FLAG.into(),
            self.case.path.clone().into_os_string(),
            VERBOSE_FLAG.into(),
            OUTPUT_FLAG.into(),
            self.report.clone().into_os_string(),
        ]
    }

    /// Report file name as shown in progress output
    pub fn report_name(&self) -> String {
        self.report
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// Build the child process command; stdio is inherited
    pub fn command(&self) -> tokio::process::Command {
        let mut cmd = tokio::process::Command::new(&self.program);
        cmd.args(self.args()).kill_on_drop(true);
        cmd
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {} {}",
            self.program.display(),
            INPUT_FLAG,
            self.case.path.display(),
            VERBOSE_FLAG,
            OUTPUT_FLAG,
            self.report.display()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;

    fn sample() -> Invocation {
        let case = TestCase::new(Category::new("valid"), "tests/valid/foo.popin").unwrap();
        Invocation::new(
            Path::new("SLRParser"),
            case,
            Path::new("tests/reports"),
            "popout",
        )
    }

    #[test]
    fn test_command_line() {
        assert_eq!(
            sample().to_string(),
            "SLRParser -i tests/valid/foo.popin -v -o tests/reports/valid/foo.popout"
        );
    }

    #[test]
    fn test_args_order() {
        let args = sample().args();
        let args: Vec<_> = args.iter().map(|a| a.to_string_lossy().into_owned()).collect();
        assert_eq!(
            args,
            vec![
                "-i",
                "tests/valid/foo.popin",
                "-v",
                "-o",
                "tests/reports/valid/foo.popout"
            ]
        );
    }

    #[test]
    fn test_report_name() {
        assert_eq!(sample().report_name(), "foo.popout");
    }
}
