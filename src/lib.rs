// Library surface for headless/integration tests and reuse.
// Keep this lean to avoid coupling to bin-only types in main.rs.
pub mod app_dirs;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod logging;
pub mod mock;
pub mod runtime;
pub mod signal;
pub mod timer;
