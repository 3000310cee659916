//! Command handlers for the scanlog CLI.

pub mod entries;
pub mod misc;
pub mod settings;
