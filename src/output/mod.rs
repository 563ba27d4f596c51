//! Output formatting module
//!
//! Console progress lines for runs and listings of planned invocations.

mod formatter;

pub use formatter::{completion_line, progress_line, OutputFormat, PlanFormatter};
