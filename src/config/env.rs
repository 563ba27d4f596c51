//! Environment variable configuration
//!
//! Provides environment variable overrides for configuration.

use anyhow::Result;
use std::env;
use std::path::PathBuf;

use super::{FailurePolicy, HarnessConfig};
use crate::models::Category;

/// Environment variable prefix
const ENV_PREFIX: &str = "SLR_HARNESS";

/// Environment configuration from environment variables
#[derive(Clone, Debug, Default)]
pub struct EnvConfig {
    /// Root from SLR_HARNESS_ROOT
    pub root: Option<PathBuf>,
    /// Parser from SLR_HARNESS_PARSER
    pub parser: Option<PathBuf>,
    /// Categories from SLR_HARNESS_CATEGORIES (comma-separated)
    pub categories: Option<Vec<Category>>,
    /// Input extension from SLR_HARNESS_INPUT_EXT
    pub input_ext: Option<String>,
    /// Output extension from SLR_HARNESS_OUTPUT_EXT
    pub output_ext: Option<String>,
    /// Timeout from SLR_HARNESS_TIMEOUT
    pub timeout: Option<u64>,
    /// Failure policy from SLR_HARNESS_ON_FAILURE
    pub on_failure: Option<FailurePolicy>,
    /// Config file from SLR_HARNESS_CONFIG
    pub config_file: Option<PathBuf>,
    /// Verbose from SLR_HARNESS_VERBOSE
    pub verbose: Option<bool>,
}

impl EnvConfig {
    /// Load configuration from environment variables
    ///
    /// A variable that is set but cannot be parsed is an error, the same as
    /// the matching CLI flag.
    pub fn load() -> Result<Self> {
        Ok(Self {
            root: get_env("ROOT").map(PathBuf::from),
            parser: get_env("PARSER").map(PathBuf::from),
            categories: get_env("CATEGORIES").map(|v| Category::parse_list(&v)),
            input_ext: get_env("INPUT_EXT"),
            output_ext: get_env("OUTPUT_EXT"),
            timeout: get_env_parse("TIMEOUT")?,
            on_failure: get_env("ON_FAILURE")
                .map(|v| {
                    FailurePolicy::from_str(&v).ok_or_else(|| {
                        anyhow::anyhow!("Unknown failure policy in {ENV_PREFIX}_ON_FAILURE: {v}")
                    })
                })
                .transpose()?,
            config_file: get_env("CONFIG").map(PathBuf::from),
            verbose: get_env_bool("VERBOSE"),
        })
    }

    /// Check if any environment variables are set
    pub fn has_any(&self) -> bool {
        self.root.is_some()
            || self.parser.is_some()
            || self.categories.is_some()
            || self.input_ext.is_some()
            || self.output_ext.is_some()
            || self.timeout.is_some()
            || self.on_failure.is_some()
            || self.config_file.is_some()
            || self.verbose.is_some()
    }

    /// Overlay the values that are set onto a config
    pub fn apply(&self, config: &mut HarnessConfig) {
        if let Some(root) = &self.root {
            config.root = root.clone();
        }
        if let Some(parser) = &self.parser {
            config.parser = parser.clone();
        }
        if let Some(categories) = &self.categories {
            config.categories = categories.clone();
        }
        if let Some(ext) = &self.input_ext {
            config.input_ext = ext.clone();
        }
        if let Some(ext) = &self.output_ext {
            config.output_ext = ext.clone();
        }
        if let Some(timeout) = self.timeout {
            config.timeout_secs = Some(timeout);
        }
        if let Some(policy) = self.on_failure {
            config.on_failure = policy;
        }
    }

    /// Print current environment configuration
    pub fn print_summary(&self) {
        println!("Environment Configuration:");
        println!("  {}_ROOT:        {:?}", ENV_PREFIX, self.root);
        println!("  {}_PARSER:      {:?}", ENV_PREFIX, self.parser);
        println!("  {}_CATEGORIES:  {:?}", ENV_PREFIX, self.categories);
        println!("  {}_INPUT_EXT:   {:?}", ENV_PREFIX, self.input_ext);
        println!("  {}_OUTPUT_EXT:  {:?}", ENV_PREFIX, self.output_ext);
        println!("  {}_TIMEOUT:     {:?}", ENV_PREFIX, self.timeout);
        println!("  {}_ON_FAILURE:  {:?}", ENV_PREFIX, self.on_failure);
        println!("  {}_CONFIG:      {:?}", ENV_PREFIX, self.config_file);
        println!("  {}_VERBOSE:     {:?}", ENV_PREFIX, self.verbose);
    }
}

/// Get environment variable with prefix
fn get_env(name: &str) -> Option<String> {
    env::var(format!("{ENV_PREFIX}_{name}")).ok()
}

/// Get environment variable and parse to type
fn get_env_parse<T: std::str::FromStr>(name: &str) -> Result<Option<T>> {
    get_env(name)
        .map(|v| {
            v.parse()
                .map_err(|_| anyhow::anyhow!("Invalid value for {ENV_PREFIX}_{name}: {v}"))
        })
        .transpose()
}

/// Get environment variable as boolean
fn get_env_bool(name: &str) -> Option<bool> {
    get_env(name).map(|v| {
        matches!(
            v.to_lowercase().as_str(),
            "1" | "true" | "yes" | "on" | "enabled"
        )
    })
}

/// Print all SLR_HARNESS environment variables
pub fn print_env_help() {
    println!("Environment Variables:");
    println!();
    println!("  {ENV_PREFIX}_ROOT         Repository root (default: current directory)");
    println!("  {ENV_PREFIX}_PARSER       Parser executable, relative to the root");
    println!("  {ENV_PREFIX}_CATEGORIES   Comma-separated test categories");
    println!("  {ENV_PREFIX}_INPUT_EXT    Test input extension (default: popin)");
    println!("  {ENV_PREFIX}_OUTPUT_EXT   Report extension (default: popout)");
    println!("  {ENV_PREFIX}_TIMEOUT      Per-invocation timeout in seconds");
    println!("  {ENV_PREFIX}_ON_FAILURE   ignore, warn or halt");
    println!("  {ENV_PREFIX}_CONFIG       Path to configuration file");
    println!("  {ENV_PREFIX}_VERBOSE      Enable debug logging (true/false)");
    println!();
    println!("Example:");
    println!("  export {ENV_PREFIX}_PARSER=build/Release/SLRParser");
    println!("  slr-harness run");
}

/// Builder for setting environment variables in tests
#[cfg(test)]
pub struct EnvBuilder {
    vars: Vec<(String, String)>,
}

#[cfg(test)]
impl EnvBuilder {
    pub fn new() -> Self {
        Self { vars: Vec::new() }
    }

    pub fn var(mut self, name: &str, value: impl Into<String>) -> Self {
        self.vars.push((format!("{ENV_PREFIX}_{name}"), value.into()));
        self
    }

    /// Apply and return guard that restores on drop
    pub fn apply_scoped(self) -> EnvGuard {
        let previous: Vec<_> = self
            .vars
            .iter()
            .map(|(k, _)| (k.clone(), env::var(k).ok()))
            .collect();

        for (key, value) in self.vars {
            env::set_var(key, value);
        }

        EnvGuard { previous }
    }
}

/// Guard that restores environment variables on drop
#[cfg(test)]
pub struct EnvGuard {
    previous: Vec<(String, Option<String>)>,
}

#[cfg(test)]
impl Drop for EnvGuard {
    fn drop(&mut self) {
        for (key, value) in &self.previous {
            match value {
                Some(v) => env::set_var(key, v),
                None => env::remove_var(key),
            }
        }
    }
}
