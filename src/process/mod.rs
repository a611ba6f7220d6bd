//! Command launching for pipeline steps

pub mod command;
pub mod output;
pub mod system;

use async_trait::async_trait;
pub use command::{CommandSpec, StdoutMode};
pub use output::{LaunchError, ProcessOutput};
pub use system::SystemLauncher;

/// Trait for starting external commands - allows substituting fake processes
#[async_trait]
pub trait Launcher: Send + Sync {
    /// Run the command to completion and report how it ended
    async fn launch(&self, command: &CommandSpec) -> Result<ProcessOutput, LaunchError>;
}
