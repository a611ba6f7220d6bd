//! Pipeline domain model

use crate::core::{ExceptionStep, Executable, PipelineError, Step, TimeoutStep};
use crate::process::Launcher;
use async_trait::async_trait;

/// The closed set of step kinds a pipeline can hold
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineStep {
    /// Succeeds on exit status 0
    Standard(Step),
    /// Succeeds on exit status 0 with no standard output
    Exception(ExceptionStep),
    /// Succeeds on exit status 0 within a deadline
    Timeout(TimeoutStep),
}

impl PipelineStep {
    /// The shared base record
    pub fn base(&self) -> &Step {
        match self {
            PipelineStep::Standard(step) => step,
            PipelineStep::Exception(step) => &step.step,
            PipelineStep::Timeout(step) => &step.step,
        }
    }
}

#[async_trait]
impl Executable for PipelineStep {
    fn name(&self) -> &str {
        &self.base().name
    }

    async fn execute(&self, launcher: &dyn Launcher) -> Result<String, PipelineError> {
        match self {
            PipelineStep::Standard(step) => step.execute(launcher).await,
            PipelineStep::Exception(step) => step.execute(launcher).await,
            PipelineStep::Timeout(step) => step.execute(launcher).await,
        }
    }
}

impl From<Step> for PipelineStep {
    fn from(step: Step) -> Self {
        PipelineStep::Standard(step)
    }
}

impl From<ExceptionStep> for PipelineStep {
    fn from(step: ExceptionStep) -> Self {
        PipelineStep::Exception(step)
    }
}

impl From<TimeoutStep> for PipelineStep {
    fn from(step: TimeoutStep) -> Self {
        PipelineStep::Timeout(step)
    }
}

/// An ordered, fixed sequence of steps for one run
///
/// Order is set at construction; there is no way to add, remove or
/// reorder steps afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pipeline {
    /// Pipeline name
    pub name: String,

    steps: Vec<PipelineStep>,
}

impl Pipeline {
    pub fn new(name: impl Into<String>, steps: Vec<PipelineStep>) -> Self {
        Self {
            name: name.into(),
            steps,
        }
    }

    /// Steps in execution order
    pub fn steps(&self) -> &[PipelineStep] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Step names in execution order
    pub fn step_names(&self) -> Vec<&str> {
        self.steps.iter().map(|s| s.name()).collect()
    }
}

impl IntoIterator for Pipeline {
    type Item = PipelineStep;
    type IntoIter = std::vec::IntoIter<PipelineStep>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.into_iter()
    }
}
