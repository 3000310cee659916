//! Environment detection for terminal output.

use std::io::IsTerminal;

use super::mode::OutputMode;

/// Detected terminal traits plus the resolved output mode.
#[derive(Debug, Clone)]
pub struct UiContext {
    /// Whether color output is enabled
    pub color: bool,
    /// Whether unicode symbols are enabled
    pub unicode: bool,
    /// Resolved output mode
    pub mode: OutputMode,
}

impl UiContext {
    /// Build from flags and environment. Color is off for non-TTYs,
    /// `--no-color`, the `NO_COLOR` convention, and `TERM=dumb`.
    pub fn from_env(json: bool, format: Option<&str>, no_color: bool, ascii: bool) -> Self {
        let is_tty = std::io::stdout().is_terminal();
        let term_is_dumb = std::env::var("TERM").map(|v| v == "dumb").unwrap_or(false);
        let color =
            is_tty && !no_color && std::env::var_os("NO_COLOR").is_none() && !term_is_dumb;

        Self {
            color,
            unicode: !ascii,
            mode: OutputMode::resolve(json, format, is_tty, term_is_dumb),
        }
    }
}
