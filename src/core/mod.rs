//! Core domain models for the CI pipeline
//!
//! This module defines the step kinds, the ordered pipeline that holds
//! them, their configuration and the errors a run can end with.

pub mod config;
pub mod error;
pub mod exception_step;
pub mod pipeline;
pub mod state;
pub mod step;
pub mod timeout_step;

pub use config::{PipelineConfig, StepConfig, StepKind};
pub use error::PipelineError;
pub use exception_step::ExceptionStep;
pub use pipeline::{Pipeline, PipelineStep};
pub use state::RunState;
pub use step::{Executable, Step};
pub use timeout_step::{TimeoutStep, DEFAULT_TIMEOUT};
