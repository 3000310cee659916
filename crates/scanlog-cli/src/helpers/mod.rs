//! Shared helpers for command handlers.

mod parsing;

pub use parsing::{check_format, parse_bool, parse_mode};
