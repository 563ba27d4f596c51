//! Harness error types
//!
//! Distinguishes the ways a single parser invocation can go wrong.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while setting up or executing a test run
#[derive(Error, Debug)]
pub enum HarnessError {
    #[error("Failed to create report directory {path}: {source}")]
    ReportDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to list test directory {path}: {source}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid discovery pattern for {dir}: {message}")]
    Pattern { dir: PathBuf, message: String },

    #[error("Parser executable not found: {0}")]
    ExecutableNotFound(PathBuf),

    #[error("Failed to launch {program}: {source}")]
    Spawn {
        program: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Parser exited with {code} on {case}")]
    NonZeroExit { case: String, code: String },

    #[error("Parser timed out after {secs}s on {case}")]
    TimedOut { case: String, secs: u64 },
}

impl HarnessError {
    /// Map a launch failure to the matching error kind
    pub fn from_spawn(program: impl Into<PathBuf>, source: io::Error) -> Self {
        let program = program.into();
        if source.kind() == io::ErrorKind::NotFound {
            HarnessError::ExecutableNotFound(program)
        } else {
            HarnessError::Spawn { program, source }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_spawn_not_found() {
        let err = HarnessError::from_spawn(
            "build/SLRParser",
            io::Error::new(io::ErrorKind::NotFound, "missing"),
        );
        assert!(matches!(err, HarnessError::ExecutableNotFound(_)));
    }

    #[test]
    fn test_from_spawn_other() {
        let err = HarnessError::from_spawn(
            "build/SLRParser",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(matches!(err, HarnessError::Spawn { .. }));
    }

    #[test]
    fn test_parser_failure_display() {
        let err = HarnessError::NonZeroExit {
            case: "foo.popin".to_string(),
            code: "exit status: 1".to_string(),
        };
        assert_eq!(err.to_string(), "Parser exited with exit status: 1 on foo.popin");
    }
}
