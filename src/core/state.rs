//! Run state model

use crate::core::PipelineError;
use std::fmt;

/// Lifecycle of a single pipeline run
///
/// `Idle -> Running -> {Succeeded | Failed | Interrupted}`; the last three
/// are terminal and a run is never re-entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    /// Pipeline built, nothing launched
    Idle,
    /// Worker is executing steps
    Running,
    /// Every step succeeded
    Succeeded,
    /// A step (or the output sink) failed
    Failed,
    /// An operating-system signal ended the run
    Interrupted,
}

impl RunState {
    /// Terminal state for a finished run
    pub fn from_result(result: &Result<(), PipelineError>) -> Self {
        match result {
            Ok(()) => RunState::Succeeded,
            Err(e) if e.is_interrupted() => RunState::Interrupted,
            Err(_) => RunState::Failed,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            RunState::Succeeded | RunState::Failed | RunState::Interrupted
        )
    }
}

impl fmt::Display for RunState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RunState::Idle => "idle",
            RunState::Running => "running",
            RunState::Succeeded => "succeeded",
            RunState::Failed => "failed",
            RunState::Interrupted => "interrupted",
        };
        f.write_str(name)
    }
}
