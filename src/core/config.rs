//! Pipeline configuration from YAML

use crate::core::{ExceptionStep, Pipeline, PipelineStep, Step, TimeoutStep};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use std::time::Duration;

/// Pipeline definition, independent of the project it runs against
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Pipeline name
    pub name: String,

    /// Steps, in execution order
    pub steps: Vec<StepConfig>,
}

/// Step configuration as defined in YAML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepConfig {
    /// Step name, used in error messages
    pub name: String,

    /// Executable to launch
    pub program: String,

    /// Arguments for the executable
    #[serde(default)]
    pub args: Vec<String>,

    /// Line printed when the step succeeds
    pub message: String,

    /// How success is judged
    #[serde(default)]
    pub kind: StepKind,

    /// Deadline for `timeout` steps (0 or absent means 30 seconds)
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

/// Success criterion of a configured step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepKind {
    /// Exit status 0
    #[default]
    Standard,
    /// Exit status 0 and no standard output
    Exception,
    /// Exit status 0 before the deadline
    Timeout,
}

impl StepConfig {
    fn new(name: &str, program: &str, args: &[&str], message: &str, kind: StepKind) -> Self {
        Self {
            name: name.to_string(),
            program: program.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
            message: message.to_string(),
            kind,
            timeout_secs: None,
        }
    }

    /// Bind this step to a project directory
    pub fn to_step(&self, project_dir: &Path) -> PipelineStep {
        let step = Step::new(
            &self.name,
            &self.program,
            &self.message,
            project_dir,
            self.args.iter().cloned(),
        );

        match self.kind {
            StepKind::Standard => PipelineStep::Standard(step),
            StepKind::Exception => PipelineStep::Exception(ExceptionStep::new(step)),
            StepKind::Timeout => PipelineStep::Timeout(TimeoutStep::new(
                step,
                Duration::from_secs(self.timeout_secs.unwrap_or(0)),
            )),
        }
    }
}

impl PipelineConfig {
    /// The built-in Go pipeline: build, test, format-check, publish
    pub fn reference() -> Self {
        let mut push = StepConfig::new(
            "git push",
            "git",
            &["push", "origin", "master"],
            "Git Push: SUCCESS",
            StepKind::Timeout,
        );
        push.timeout_secs = Some(10);

        Self {
            name: "goci".to_string(),
            steps: vec![
                StepConfig::new(
                    "go build",
                    "go",
                    &["build", ".", "errors"],
                    "Go Build: SUCCESS",
                    StepKind::Standard,
                ),
                StepConfig::new(
                    "go test",
                    "go",
                    &["test", "-v"],
                    "Go Test: SUCCESS",
                    StepKind::Standard,
                ),
                StepConfig::new(
                    "go fmt",
                    "gofmt",
                    &["-l", "."],
                    "Gofmt: SUCCESS",
                    StepKind::Exception,
                ),
                push,
            ],
        }
    }

    /// Load pipeline configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse pipeline configuration from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: PipelineConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the pipeline configuration
    pub fn validate(&self) -> Result<()> {
        if self.steps.is_empty() {
            anyhow::bail!("Pipeline '{}' has no steps", self.name);
        }

        let mut seen = HashSet::new();
        for step in &self.steps {
            if !seen.insert(&step.name) {
                anyhow::bail!("Duplicate step name: {}", step.name);
            }

            if step.program.trim().is_empty() {
                anyhow::bail!("Step '{}' has no program", step.name);
            }

            if step.timeout_secs.is_some() && step.kind != StepKind::Timeout {
                anyhow::bail!(
                    "Step '{}' sets timeout_secs but is not a timeout step",
                    step.name
                );
            }
        }

        Ok(())
    }

    /// Build the runnable pipeline for one project directory
    pub fn to_pipeline(&self, project_dir: &Path) -> Pipeline {
        Pipeline::new(
            &self.name,
            self.steps.iter().map(|s| s.to_step(project_dir)).collect(),
        )
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self::reference()
    }
}
