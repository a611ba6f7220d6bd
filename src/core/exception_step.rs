//! Step that must produce no output

use crate::core::{Executable, PipelineError, Step};
use crate::process::Launcher;
use async_trait::async_trait;

/// A step whose command signals problems through its output
///
/// Standard output is captured; the step succeeds only when the command
/// exits with status 0 *and* printed nothing. Formatters that list
/// non-conforming files (`gofmt -l`) are the typical case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExceptionStep {
    pub step: Step,
}

impl ExceptionStep {
    pub fn new(step: Step) -> Self {
        Self { step }
    }
}

#[async_trait]
impl Executable for ExceptionStep {
    fn name(&self) -> &str {
        &self.step.name
    }

    async fn execute(&self, launcher: &dyn Launcher) -> Result<String, PipelineError> {
        let command = self.step.command().capture_stdout();
        let output = self.step.run_command(launcher, &command).await?;

        if !output.stdout.is_empty() {
            return Err(PipelineError::UnexpectedOutput {
                step: self.step.name.clone(),
                output: output.stdout_lossy(),
            });
        }

        Ok(self.step.message.clone())
    }
}
