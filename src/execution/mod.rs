//! Pipeline execution engine

pub mod engine;
pub mod signals;

pub use engine::PipelineRunner;
pub use signals::{Signal, TerminationSignals};
