//! ClipClear - best-effort system clipboard clearing
//!
//! This crate empties the OS clipboard by walking an ordered chain of
//! platform-specific mechanisms, stopping at the first one that succeeds.
//! Every attempt is appended to a plain-text log file.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Platform detection and value types
//! - **Application**: The fallback driver and port interfaces (traits)
//! - **Infrastructure**: Adapter implementations (Win32, arboard, pbcopy, xsel, etc.)
//! - **CLI**: Command-line interface, argument parsing, and output formatting

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
