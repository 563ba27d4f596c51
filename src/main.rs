//! slr-harness - batch test runner for SLRParser
//!
//! Walks `tests/<category>/*.popin`, runs the parser once per file and lets
//! it write `tests/reports/<category>/<name>.popout`.
//!
//! ## Usage
//!
//! ```bash
//! # Run every test case (same as `slr-harness run`)
//! slr-harness
//!
//! # Only the invalid inputs, stop on the first parser failure
//! slr-harness run --category invalid --on-failure halt
//!
//! # Show what would be executed
//! slr-harness list --detailed
//!
//! # Write an example configuration file
//! slr-harness config init
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use std::path::Path;
use tracing::debug;

mod cli;
mod config;
mod discovery;
mod error;
mod executor;
mod models;
mod output;
mod utils;

use cli::{Args, Command, LayoutArgs, RunArgs};
use config::{print_env_help, ConfigFile, EnvConfig, FailurePolicy, HarnessConfig};
use executor::TestRunner;
use output::{OutputFormat, PlanFormatter};
use utils::{init_logger, LogLevel};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let env = EnvConfig::load()?;

    let verbose = args.verbose || env.verbose.unwrap_or(false);
    init_logger(LogLevel::resolve(args.log_level.as_deref(), verbose)?);

    let command = args
        .command
        .unwrap_or_else(|| Command::Run(RunArgs::default()));
    let config_path = args.config.as_deref();

    match command {
        Command::Run(run_args) => {
            run(config_path, &env, run_args).await?;
        }
        Command::List(list_args) => {
            list(config_path, &env, list_args)?;
        }
        Command::Config(config_args) => {
            manage_config(config_path, &env, config_args)?;
        }
    }

    Ok(())
}

/// Layer defaults, config file, environment and CLI flags
fn resolve_config(
    config_path: Option<&Path>,
    env: &EnvConfig,
    layout: &LayoutArgs,
) -> Result<HarnessConfig> {
    let file = match config_path.or(env.config_file.as_deref()) {
        Some(path) => ConfigFile::load(path)?,
        None => ConfigFile::load_default()?,
    };

    let mut config = file.harness;
    if env.has_any() {
        debug!("Applying SLR_HARNESS_* environment overrides");
    }
    env.apply(&mut config);

    Ok(layout.apply(config))
}

async fn run(config_path: Option<&Path>, env: &EnvConfig, args: RunArgs) -> Result<()> {
    let mut config = resolve_config(config_path, env, &args.layout)?;

    if let Some(secs) = args.timeout {
        config = config.with_timeout(secs);
    }
    if let Some(policy) = args.on_failure.as_deref() {
        let policy = FailurePolicy::from_str(policy)
            .ok_or_else(|| anyhow::anyhow!("Unknown failure policy: {policy}"))?;
        config = config.with_failure_policy(policy);
    }

    config.validate()?;
    let config = config.absolutize()?;

    debug!(
        "Tests: {}, reports: {}, policy: {}",
        config.tests_path().display(),
        config.reports_path().display(),
        config.on_failure
    );

    TestRunner::new(config).run_all().await?;
    Ok(())
}

fn list(config_path: Option<&Path>, env: &EnvConfig, args: cli::ListArgs) -> Result<()> {
    let config = resolve_config(config_path, env, &args.layout)?;
    config.validate()?;
    let config = config.absolutize()?;

    let format = OutputFormat::from_str(&args.format)
        .ok_or_else(|| anyhow::anyhow!("Unknown output format: {}", args.format))?;

    let plan = TestRunner::new(config)
        .plan()
        .context("Failed to discover test cases")?;

    let formatter = PlanFormatter::new(format).detailed(args.detailed);
    println!("{}", formatter.format_plan(&plan));
    Ok(())
}

fn manage_config(config_path: Option<&Path>, env: &EnvConfig, args: cli::ConfigArgs) -> Result<()> {
    match args.action {
        cli::ConfigAction::Show { json } => {
            let config = resolve_config(config_path, env, &LayoutArgs::default())?;
            let file = ConfigFile {
                harness: config,
                ..ConfigFile::default()
            };
            print!("{}", file.render(!json)?);
            if json {
                println!();
            }
        }

        cli::ConfigAction::Init { path, force } => {
            if path.exists() && !force {
                anyhow::bail!(
                    "{} already exists (use --force to overwrite)",
                    path.display()
                );
            }
            ConfigFile::example().save(&path)?;
            println!("✓ Wrote example configuration to {}", path.display());
        }

        cli::ConfigAction::Env => {
            print_env_help();
            println!();
            env.print_summary();
        }
    }

    Ok(())
}
