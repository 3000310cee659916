//! Application context wiring CLI flags to configuration and storage.

mod context;

pub use context::AppContext;
