//! Application layer - Use cases and port interfaces
//!
//! Contains the fallback driver and trait definitions
//! for external system interactions.

pub mod clear;
pub mod ports;

// Re-export use case
pub use clear::{Attempt, AttemptResult, ClearClipboardUseCase, ClearOutcome};
