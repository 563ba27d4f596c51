//! Test execution runner
//!
//! Creates the report tree, walks every category and runs the parser once
//! per test case.

use std::fs;
use tracing::{debug, info, warn};

use super::process::execute;
use crate::config::{FailurePolicy, HarnessConfig};
use crate::discovery::discover;
use crate::error::HarnessError;
use crate::models::{Category, Invocation, TestCase};
use crate::output::{completion_line, progress_line};

/// Number of invocations performed per category
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunStats {
    pub per_category: Vec<(Category, usize)>,
}

impl RunStats {
    pub fn total(&self) -> usize {
        self.per_category.iter().map(|(_, n)| n).sum()
    }
}

/// Test runner for the parser
pub struct TestRunner {
    config: HarnessConfig,
}

impl TestRunner {
    pub fn new(config: HarnessConfig) -> Self {
        Self { config }
    }

    /// Create every category's report directory
    pub fn prepare(&self) -> Result<(), HarnessError> {
        let reports = self.config.reports_path();
        for category in &self.config.categories {
            let path = category.report_dir(&reports);
            fs::create_dir_all(&path).map_err(|source| HarnessError::ReportDir {
                path: path.clone(),
                source,
            })?;
            debug!("Report directory ready: {}", path.display());
        }
        Ok(())
    }

    /// Categories whose input directory exists under the root
    pub fn present_categories(&self) -> Vec<&Category> {
        let tests = self.config.tests_path();
        self.config
            .categories
            .iter()
            .filter(|c| c.input_dir(&tests).is_dir())
            .collect()
    }

    /// Discover the cases of one category
    pub fn cases<'a>(
        &'a self,
        category: &'a Category,
    ) -> Result<Box<dyn Iterator<Item = TestCase> + 'a>, HarnessError> {
        discover(category, &self.config.tests_path(), &self.config.input_ext)
    }

    /// Build the invocation for a case
    pub fn invocation(&self, case: TestCase) -> Invocation {
        Invocation::new(
            &self.config.parser_path(),
            case,
            &self.config.reports_path(),
            &self.config.output_ext,
        )
    }

    /// Every invocation a run would perform, without executing anything
    pub fn plan(&self) -> Result<Vec<Invocation>, HarnessError> {
        let mut plan = Vec::new();
        for category in &self.config.categories {
            for case in self.cases(category)? {
                plan.push(self.invocation(case));
            }
        }
        Ok(plan)
    }

    /// Run the parser on a single case
    pub async fn run_case(&self, case: TestCase) -> Result<(), HarnessError> {
        let invocation = self.invocation(case);
        println!("{}", progress_line(&invocation));

        let outcome = execute(&invocation, self.config.timeout_secs).await?;

        match (outcome.failure(&invocation), self.config.on_failure) {
            (None, _) | (Some(_), FailurePolicy::Ignore) => Ok(()),
            (Some(err), FailurePolicy::Warn) => {
                warn!("{}", err);
                Ok(())
            }
            (Some(err), FailurePolicy::Halt) => Err(err),
        }
    }

    /// Run every case of every category
    pub async fn run_all(&self) -> Result<RunStats, HarnessError> {
        info!(
            "Running {} against {} categories",
            self.config.parser_path().display(),
            self.config.categories.len()
        );

        if self.present_categories().is_empty() {
            warn!(
                "No category directories under {}; is the root correct?",
                self.config.tests_path().display()
            );
        }

        self.prepare()?;

        let mut stats = RunStats::default();

        for category in &self.config.categories {
            let mut count = 0;
            for case in self.cases(category)? {
                self.run_case(case).await?;
                count += 1;
            }
            debug!("Category {}: {} invocations", category, count);
            stats.per_category.push((category.clone(), count));
        }

        println!("{}", completion_line());
        debug!("Invoked parser {} times", stats.total());

        Ok(stats)
    }
}
