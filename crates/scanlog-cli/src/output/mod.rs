//! Output formatting for the CLI.
//!
//! JSON shaping lives in `json`, table/plain rendering in `text`.

mod json;
mod text;

pub use json::{entries_json, entry_json};
pub use text::{print_entry, print_entry_list};
