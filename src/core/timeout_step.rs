//! Step bounded by a deadline

use crate::core::{Executable, PipelineError, Step};
use crate::process::Launcher;
use async_trait::async_trait;
use std::time::Duration;
use tokio::time::timeout;
use tracing::warn;

/// Deadline used when none (or zero) is configured
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// A step that must finish within `timeout`
///
/// When the deadline passes the launch future is dropped, which terminates
/// the child process, and a [`PipelineError::TimedOut`] is returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeoutStep {
    pub step: Step,
    pub timeout: Duration,
}

impl TimeoutStep {
    pub fn new(step: Step, timeout: Duration) -> Self {
        let timeout = if timeout.is_zero() {
            DEFAULT_TIMEOUT
        } else {
            timeout
        };
        Self { step, timeout }
    }
}

#[async_trait]
impl Executable for TimeoutStep {
    fn name(&self) -> &str {
        &self.step.name
    }

    async fn execute(&self, launcher: &dyn Launcher) -> Result<String, PipelineError> {
        let command = self.step.command();

        match timeout(self.timeout, self.step.run_command(launcher, &command)).await {
            Ok(result) => {
                result?;
                Ok(self.step.message.clone())
            }
            Err(_) => {
                warn!(
                    "Step '{}' timed out after {:?}",
                    self.step.name, self.timeout
                );
                Err(PipelineError::TimedOut {
                    step: self.step.name.clone(),
                    timeout: self.timeout,
                })
            }
        }
    }
}
