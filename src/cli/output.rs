//! CLI output formatting

use console::{Emoji, StyledObject};
use std::fmt::Display;

// Re-export style
pub use console::style;

pub static CROSS: Emoji<'_, '_> = Emoji("❌ ", "✗ ");

/// Style a value for the error stream (colors follow stderr's terminal)
pub fn for_stderr<D>(value: D) -> StyledObject<D> {
    style(value).for_stderr()
}

/// Format a run failure as a single line for stderr
///
/// Multi-line messages (e.g. a formatter listing several files) are joined
/// with `", "`.
pub fn format_failure(error: &dyn Display) -> String {
    let text = error.to_string();
    let line = text
        .lines()
        .map(str::trim_end)
        .filter(|l| !l.is_empty())
        .collect::<Vec<_>>()
        .join(", ");
    format!("{}{}", CROSS, for_stderr(line).red())
}
