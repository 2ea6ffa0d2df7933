//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces,
//! integrating with the OS clipboard APIs and external tools.

pub mod backends;
pub mod logging;

// Re-export adapters
pub use backends::chain_for;
pub use logging::FileAttemptLog;
