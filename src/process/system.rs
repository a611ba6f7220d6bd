//! Launcher backed by real operating-system processes

use crate::process::{CommandSpec, LaunchError, Launcher, ProcessOutput, StdoutMode};
use async_trait::async_trait;
use std::process::Stdio;
use tokio::process::Command;
use tracing::debug;

/// Launches commands as child processes through tokio
///
/// Children are spawned with `kill_on_drop`, so dropping an in-flight
/// [`Launcher::launch`] future (deadline expiry, interrupt) kills the process.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemLauncher;

impl SystemLauncher {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Launcher for SystemLauncher {
    async fn launch(&self, command: &CommandSpec) -> Result<ProcessOutput, LaunchError> {
        debug!(
            "Spawning `{}` in {}",
            command.display(),
            command.working_dir.display()
        );

        let stdout = match command.stdout {
            StdoutMode::Discard => Stdio::null(),
            StdoutMode::Capture => Stdio::piped(),
        };

        let child = Command::new(&command.program)
            .args(&command.args)
            .current_dir(&command.working_dir)
            .stdin(Stdio::null())
            .stdout(stdout)
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| LaunchError::Spawn {
                program: command.program.clone(),
                source,
            })?;

        let output = child
            .wait_with_output()
            .await
            .map_err(|source| LaunchError::Io {
                program: command.program.clone(),
                source,
            })?;

        if !output.stderr.is_empty() {
            debug!(
                "`{}` stderr: {}",
                command.program,
                String::from_utf8_lossy(&output.stderr).trim()
            );
        }

        debug!(
            "`{}` exited with {:?} ({} bytes of stdout)",
            command.program,
            output.status.code(),
            output.stdout.len()
        );

        Ok(ProcessOutput {
            exit_code: output.status.code(),
            stdout: output.stdout,
            stderr: output.stderr,
        })
    }
}
