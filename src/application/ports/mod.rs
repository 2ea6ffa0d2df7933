//! Port interfaces (traits) for external systems
//!
//! These traits define the boundaries between the application
//! and infrastructure layers.

pub mod attempt_log;
pub mod backend;

// Re-export common types
pub use attempt_log::AttemptLog;
pub use backend::{BackendError, ClipboardBackend};
