//! Domain layer - platform detection and value types

pub mod platform;

pub use platform::Platform;
