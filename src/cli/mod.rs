//! Command-line interface

pub mod output;

use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

/// Run the build, test, format-check and publish steps for a project
#[derive(Debug, Parser, Clone)]
#[command(name = "goci")]
#[command(author = "goci Contributors")]
#[command(version = "0.1.0")]
#[command(about = "A local CI pipeline runner", long_about = None)]
pub struct Cli {
    /// Project directory
    #[arg(short, long)]
    pub project: PathBuf,

    /// Pipeline definition (YAML); the built-in Go pipeline when omitted
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Parse CLI arguments from environment
    pub fn from_args() -> Self {
        Self::parse()
    }

    /// Parse CLI arguments from a slice
    pub fn try_parse_from<I, T>(itr: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        <Self as Parser>::try_parse_from(itr)
    }

    /// Default log filter when `RUST_LOG` is unset
    pub fn log_filter(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else {
            "warn"
        }
    }
}
