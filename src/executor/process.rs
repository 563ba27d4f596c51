//! Child process execution
//!
//! Launches one parser invocation and waits for it. Standard output and
//! error are inherited so the parser talks to the console directly.

use std::process::ExitStatus;
use std::time::Duration;
use tokio::time::timeout;
use tracing::debug;

use crate::error::HarnessError;
use crate::models::Invocation;

/// How a parser run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Exited(ExitStatus),
    TimedOut(u64),
}

impl Outcome {
    /// Describe an unsuccessful run as an error
    pub fn failure(&self, invocation: &Invocation) -> Option<HarnessError> {
        match self {
            Outcome::Exited(status) if status.success() => None,
            Outcome::Exited(status) => Some(HarnessError::NonZeroExit {
                case: invocation.case.to_string(),
                code: status.to_string(),
            }),
            Outcome::TimedOut(secs) => Some(HarnessError::TimedOut {
                case: invocation.case.to_string(),
                secs: *secs,
            }),
        }
    }
}

/// Run an invocation to completion, optionally bounded by a timeout
pub async fn execute(
    invocation: &Invocation,
    timeout_secs: Option<u64>,
) -> Result<Outcome, HarnessError> {
    debug!("Executing: {}", invocation);

    let mut child = invocation
        .command()
        .spawn()
        .map_err(|e| HarnessError::from_spawn(&invocation.program, e))?;

    let waited = match timeout_secs {
        Some(secs) => match timeout(Duration::from_secs(secs), child.wait()).await {
            Ok(waited) => waited,
            Err(_) => {
                if let Err(e) = child.kill().await {
                    debug!("Failed to kill timed out parser: {}", e);
                }
                return Ok(Outcome::TimedOut(secs));
            }
        },
        None => child.wait().await,
    };

    let status = waited.map_err(|source| HarnessError::Spawn {
        program: invocation.program.clone(),
        source,
    })?;

    debug!("{} finished with {}", invocation.case, status);
    Ok(Outcome::Exited(status))
}
