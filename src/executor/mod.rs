//! Test execution engine
//!
//! Runs the parser once per discovered test case, strictly one at a time.

#[cfg(all(test, unix))]
mod fixture;
mod process;
mod runner;

pub use runner::TestRunner;
