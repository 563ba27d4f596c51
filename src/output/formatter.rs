//! Output formatters
//!
//! The progress and completion lines are the only console output of a run.
//! Listings of the invocation plan come in table or JSON form.

use serde::Serialize;

use crate::models::Invocation;

/// Line printed before each parser invocation
pub fn progress_line(invocation: &Invocation) -> String {
    format!(
        "Running: {} -> {}",
        invocation.case.file_name(),
        invocation.report_name()
    )
}

/// Line printed once every category has been processed
pub fn completion_line() -> &'static str {
    "Done!"
}

/// Output format options
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
    JsonPretty,
}

impl OutputFormat {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "table" => Some(OutputFormat::Table),
            "json" => Some(OutputFormat::Json),
            "json-pretty" | "jsonpretty" => Some(OutputFormat::JsonPretty),
            _ => None,
        }
    }
}

#[derive(Serialize)]
struct PlanEntry<'a> {
    category: &'a str,
    case: String,
    input: String,
    report: String,
    command: String,
}

impl<'a> From<&'a Invocation> for PlanEntry<'a> {
    fn from(inv: &'a Invocation) -> Self {
        Self {
            category: inv.case.category.name(),
            case: inv.case.id(),
            input: inv.case.path.display().to_string(),
            report: inv.report.display().to_string(),
            command: inv.to_string(),
        }
    }
}

/// Formatter for invocation plans
pub struct PlanFormatter {
    format: OutputFormat,
    detailed: bool,
}

impl PlanFormatter {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            detailed: false,
        }
    }

    /// Show full command lines in table output
    pub fn detailed(mut self, detailed: bool) -> Self {
        self.detailed = detailed;
        self
    }

    pub fn format_plan(&self, plan: &[Invocation]) -> String {
        let entries: Vec<PlanEntry<'_>> = plan.iter().map(PlanEntry::from).collect();
        match self.format {
            OutputFormat::Table => self.format_table(plan),
            OutputFormat::Json => serde_json::to_string(&entries).unwrap_or_default(),
            OutputFormat::JsonPretty => serde_json::to_string_pretty(&entries).unwrap_or_default(),
        }
    }

    fn format_table(&self, plan: &[Invocation]) -> String {
        let mut output = String::new();
        let mut current_category = "";

        for inv in plan {
            let category = inv.case.category.name();
            if category != current_category {
                output.push_str(&format!("\n{category}:\n"));
                output.push_str(&"─".repeat(60));
                output.push('\n');
                current_category = category;
            }

            if self.detailed {
                output.push_str(&format!("  {inv}\n"));
            } else {
                output.push_str(&format!(
                    "  {:30} -> {}\n",
                    inv.case.file_name(),
                    inv.report_name()
                ));
            }
        }

        output.push_str(&format!("\n{} invocation(s) planned\n", plan.len()));
        output
    }
}
