//! Process result types

use std::fmt;
use thiserror::Error;

/// Error types for launching a process
#[derive(Debug, Error)]
pub enum LaunchError {
    /// The executable could not be started
    #[error("failed to start '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// Waiting on the running process failed
    #[error("failed to wait on '{program}': {source}")]
    Io {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

/// Result of running a process to completion
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessOutput {
    /// Exit code, `None` when the process was ended by a signal
    pub exit_code: Option<i32>,

    /// Captured standard output (empty unless capture was requested)
    pub stdout: Vec<u8>,

    /// Captured standard error
    pub stderr: Vec<u8>,
}

impl ProcessOutput {
    /// Output of a process that exited with the given code
    pub fn exited(code: i32) -> Self {
        Self {
            exit_code: Some(code),
            ..Self::default()
        }
    }

    /// Attach captured standard output
    pub fn with_stdout(mut self, stdout: impl Into<Vec<u8>>) -> Self {
        self.stdout = stdout.into();
        self
    }

    /// Whether the process exited with status 0
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }

    /// Captured standard output as text
    pub fn stdout_lossy(&self) -> String {
        String::from_utf8_lossy(&self.stdout).into_owned()
    }

    /// Describes how the process ended, e.g. `exit status 1`
    pub fn status(&self) -> ExitDescription {
        ExitDescription(self.exit_code)
    }
}

/// Display adapter for a process exit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitDescription(Option<i32>);

impl fmt::Display for ExitDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(code) => write!(f, "exit status {}", code),
            None => write!(f, "terminated by signal"),
        }
    }
}
