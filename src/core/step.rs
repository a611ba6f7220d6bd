//! Step domain model

use crate::core::PipelineError;
use crate::process::{CommandSpec, Launcher, ProcessOutput};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Capability shared by every step kind: run once, report a message or an error
#[async_trait]
pub trait Executable: Send + Sync {
    /// Step name used in error messages
    fn name(&self) -> &str;

    /// Run the step to completion, returning its success message
    async fn execute(&self, launcher: &dyn Launcher) -> Result<String, PipelineError>;
}

/// A single pipeline stage wrapping one external command
///
/// Succeeds when the command exits with status 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    /// Identifier used in error messages
    pub name: String,

    /// Executable to launch
    pub program: String,

    /// Arguments passed to the executable
    pub args: Vec<String>,

    /// Directory the command runs in
    pub working_dir: PathBuf,

    /// Line reported when the step succeeds
    pub message: String,
}

impl Step {
    pub fn new<I, S>(
        name: impl Into<String>,
        program: impl Into<String>,
        message: impl Into<String>,
        working_dir: impl AsRef<Path>,
        args: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
            working_dir: working_dir.as_ref().to_path_buf(),
            message: message.into(),
        }
    }

    /// Command this step launches
    pub fn command(&self) -> CommandSpec {
        CommandSpec::new(&self.program, &self.working_dir).with_args(self.args.iter().cloned())
    }

    /// Launch `command` and map a launch error or non-zero exit onto this step
    pub(crate) async fn run_command(
        &self,
        launcher: &dyn Launcher,
        command: &CommandSpec,
    ) -> Result<ProcessOutput, PipelineError> {
        debug!("Executing step '{}': {}", self.name, command.display());

        let output = launcher
            .launch(command)
            .await
            .map_err(|e| self.failure(e))?;

        if !output.success() {
            return Err(self.failure(output.status()));
        }

        Ok(output)
    }

    pub(crate) fn failure(&self, reason: impl ToString) -> PipelineError {
        PipelineError::CommandFailed {
            step: self.name.clone(),
            reason: reason.to_string(),
        }
    }
}

#[async_trait]
impl Executable for Step {
    fn name(&self) -> &str {
        &self.name
    }

    async fn execute(&self, launcher: &dyn Launcher) -> Result<String, PipelineError> {
        self.run_command(launcher, &self.command()).await?;
        Ok(self.message.clone())
    }
}
