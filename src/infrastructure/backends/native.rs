//! Cross-platform clipboard adapter using arboard
//!
//! Works on Windows, macOS, and Linux (X11/Wayland).

use async_trait::async_trait;

use crate::application::ports::{BackendError, ClipboardBackend};

/// Cross-platform clipboard adapter using arboard
pub struct ArboardBackend;

impl ArboardBackend {
    /// Create a new arboard backend
    pub fn new() -> Self {
        Self
    }
}

impl Default for ArboardBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ClipboardBackend for ArboardBackend {
    fn name(&self) -> &str {
        "arboard"
    }

    async fn clear(&self) -> Result<(), BackendError> {
        // arboard operations are blocking, so run in spawn_blocking
        tokio::task::spawn_blocking(move || {
            let mut clipboard = arboard::Clipboard::new()
                .map_err(|e| BackendError::Unavailable(e.to_string()))?;

            clipboard
                .clear()
                .map_err(|e| BackendError::ClearFailed(e.to_string()))
        })
        .await
        .map_err(|e| BackendError::ClearFailed(format!("Task join error: {}", e)))?
    }
}
