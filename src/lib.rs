//! goci - A local CI pipeline runner

pub mod cli;
pub mod core;
pub mod execution;
pub mod process;

// Re-export commonly used types
pub use crate::core::{Pipeline, PipelineConfig, PipelineError, PipelineStep, RunState, Step};
pub use crate::core::{ExceptionStep, Executable, TimeoutStep};
pub use crate::execution::{PipelineRunner, Signal};
pub use crate::process::{CommandSpec, LaunchError, Launcher, ProcessOutput, SystemLauncher};
