//! Description of a command to launch

use std::path::{Path, PathBuf};

/// What to do with a process's standard output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StdoutMode {
    /// Send stdout to the null device
    #[default]
    Discard,
    /// Collect stdout into [`ProcessOutput::stdout`](super::ProcessOutput)
    Capture,
}

/// A command to run: executable, arguments and working directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    /// Executable name or path
    pub program: String,

    /// Arguments, in order
    pub args: Vec<String>,

    /// Directory the process runs in
    pub working_dir: PathBuf,

    /// Standard output handling
    pub stdout: StdoutMode,
}

impl CommandSpec {
    pub fn new(program: impl Into<String>, working_dir: impl AsRef<Path>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            working_dir: working_dir.as_ref().to_path_buf(),
            stdout: StdoutMode::Discard,
        }
    }

    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }

    pub fn capture_stdout(mut self) -> Self {
        self.stdout = StdoutMode::Capture;
        self
    }

    /// Render as a shell-like line for logs
    pub fn display(&self) -> String {
        if self.args.is_empty() {
            self.program.clone()
        } else {
            format!("{} {}", self.program, self.args.join(" "))
        }
    }
}
