//! Host platform detection

use std::fmt;

/// The platform families the clearing chain distinguishes.
///
/// Anything that is neither Windows nor macOS is treated as the generic
/// Unix branch and served by the Linux clipboard tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows,
    MacOs,
    /// Linux and every other Unix-like system
    Unix,
}

impl Platform {
    /// Detect the platform the binary was compiled for.
    pub fn detect() -> Self {
        if cfg!(windows) {
            Platform::Windows
        } else if cfg!(target_os = "macos") {
            Platform::MacOs
        } else {
            Platform::Unix
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Platform::Windows => write!(f, "Windows"),
            Platform::MacOs => write!(f, "macOS"),
            Platform::Unix => write!(f, "Linux"),
        }
    }
}
