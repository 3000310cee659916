//! Terminal output primitives for the scanlog CLI.
//!
//! - **mode**: output mode routing (json, plain, pretty)
//! - **context**: environment detection (TTY, color, unicode)
//! - **theme**: badges and ANSI styling
//! - **format**: small string utilities

mod context;
pub mod format;
mod mode;
pub mod theme;

pub use context::UiContext;
pub use mode::OutputMode;
pub use theme::{badge, styled, styles, Badge};
