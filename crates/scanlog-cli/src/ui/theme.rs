//! Badges and ANSI styling.

use scanlog_core::entry::Mode;

use super::context::UiContext;

/// Status badge rendered ahead of a message line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Badge {
    Ok,
    Warn,
    Info,
}

impl Badge {
    fn symbol(self, unicode: bool) -> &'static str {
        match (self, unicode) {
            (Self::Ok, true) => "[\u{2713}]",
            (Self::Ok, false) => "[OK]",
            (Self::Warn, true) => "[\u{26A0}]",
            (Self::Warn, false) => "[WARN]",
            (Self::Info, true) => "[\u{2139}]",
            (Self::Info, false) => "[INFO]",
        }
    }

    fn style(self) -> &'static str {
        match self {
            Self::Ok => styles::GREEN,
            Self::Warn => styles::YELLOW,
            Self::Info => styles::CYAN,
        }
    }
}

/// ANSI escape codes used across the CLI.
pub mod styles {
    pub const DIM: &str = "\x1b[2m";
    pub const BOLD: &str = "\x1b[1m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const CYAN: &str = "\x1b[36m";
    pub const RED: &str = "\x1b[31m";
    pub const RESET: &str = "\x1b[0m";
}

/// Wrap `text` in an ANSI style when color is on.
pub fn styled(text: &str, style: &str, color: bool) -> String {
    if color {
        format!("{}{}{}", style, text, styles::RESET)
    } else {
        text.to_string()
    }
}

/// Badge plus message, styled per context.
pub fn badge(ctx: &UiContext, badge: Badge, message: &str) -> String {
    let symbol = styled(badge.symbol(ctx.unicode), badge.style(), ctx.color);
    format!("{} {}", symbol, message)
}

/// Style for a movement direction: inbound green, outbound red.
pub fn mode_style(mode: Mode) -> &'static str {
    match mode {
        Mode::In => styles::GREEN,
        Mode::Out => styles::RED,
    }
}
