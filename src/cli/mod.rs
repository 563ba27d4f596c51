//! CLI argument parsing
//!
//! Defines command-line interface using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::HarnessConfig;
use crate::models::Category;

/// Batch test runner for the SLR parser
#[derive(Parser, Debug)]
#[command(name = "slr-harness")]
#[command(version)]
#[command(about = "Run SLRParser over every test input and collect its reports")]
#[command(long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Configuration file (YAML or JSON)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the parser on every test case (default)
    Run(RunArgs),

    /// List the invocations a run would perform
    List(ListArgs),

    /// Inspect or create configuration
    Config(ConfigArgs),
}

/// Options shared by commands that resolve the test tree
#[derive(clap::Args, Debug, Default, Clone)]
pub struct LayoutArgs {
    /// Repository root (default: current directory)
    #[arg(short, long)]
    pub root: Option<PathBuf>,

    /// Parser executable, relative to the root unless absolute
    #[arg(short, long)]
    pub parser: Option<PathBuf>,

    /// Restrict to these categories (repeatable)
    #[arg(long = "category", value_name = "NAME")]
    pub categories: Vec<String>,
}

impl LayoutArgs {
    /// Overlay the flags that were given onto a config
    pub fn apply(&self, mut config: HarnessConfig) -> HarnessConfig {
        if let Some(root) = &self.root {
            config = config.with_root(root);
        }
        if let Some(parser) = &self.parser {
            config = config.with_parser(parser);
        }
        if !self.categories.is_empty() {
            config = config.with_categories(self.categories.iter().map(Category::new).collect());
        }
        config
    }
}

/// Arguments for run command
#[derive(Parser, Debug, Default)]
pub struct RunArgs {
    #[command(flatten)]
    pub layout: LayoutArgs,

    /// Kill a parser run after this many seconds
    #[arg(short, long)]
    pub timeout: Option<u64>,

    /// Handling of failed parser runs (ignore, warn, halt)
    #[arg(long)]
    pub on_failure: Option<String>,
}

/// Arguments for list command
#[derive(Parser, Debug)]
pub struct ListArgs {
    #[command(flatten)]
    pub layout: LayoutArgs,

    /// Show full command lines
    #[arg(short, long)]
    pub detailed: bool,

    /// Output format (table, json, json-pretty)
    #[arg(short, long, default_value = "table")]
    pub format: String,
}

/// Arguments for config command
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show the effective configuration
    Show {
        /// Print as JSON instead of YAML
        #[arg(long)]
        json: bool,
    },

    /// Write an example configuration file
    Init {
        /// Destination path
        #[arg(default_value = "slr-harness.yaml")]
        path: PathBuf,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Show environment variables
    Env,
}
