//! Pipeline error taxonomy

use crate::execution::signals::Signal;
use std::time::Duration;
use thiserror::Error;

/// Every way a pipeline run can fail
///
/// All of them are fatal to the run: the first one observed is returned
/// and no further step is started.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Missing or invalid run configuration, detected before any launch
    #[error("{0}")]
    Config(String),

    /// The command exited non-zero or could not be launched
    #[error("'{step}' failed: {reason}")]
    CommandFailed { step: String, reason: String },

    /// The command exited zero but produced output it must not produce
    #[error("'{step}' failed: {output}")]
    UnexpectedOutput { step: String, output: String },

    /// The command did not finish within its deadline
    #[error("'{step}' failed: time out after {}s", .timeout.as_secs_f64())]
    TimedOut { step: String, timeout: Duration },

    /// The operator asked the process to stop
    #[error("Received signal: {signal}. Exiting")]
    Interrupted { signal: Signal },

    /// A success message could not be written to the output sink
    #[error("failed to write step output: {0}")]
    Write(#[source] std::io::Error),

    /// Signal handlers could not be installed
    #[error("failed to register signal handlers: {0}")]
    SignalSetup(#[source] std::io::Error),

    /// The background worker ended without reporting an outcome
    #[error("pipeline worker stopped unexpectedly: {0}")]
    WorkerLost(String),
}

impl PipelineError {
    /// Name of the step that failed, if the failure belongs to a step
    pub fn step(&self) -> Option<&str> {
        match self {
            PipelineError::CommandFailed { step, .. }
            | PipelineError::UnexpectedOutput { step, .. }
            | PipelineError::TimedOut { step, .. } => Some(step),
            _ => None,
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, PipelineError::TimedOut { .. })
    }

    pub fn is_interrupted(&self) -> bool {
        matches!(self, PipelineError::Interrupted { .. })
    }
}
