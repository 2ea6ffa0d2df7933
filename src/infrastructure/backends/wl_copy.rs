//! wl-copy adapter for Wayland
//!
//! Uses the dedicated `--clear` flag rather than copying an empty string.

use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;

use crate::application::ports::{BackendError, ClipboardBackend};

use super::is_tool_available;

/// Wayland clipboard adapter using wl-copy
pub struct WlCopyBackend;

impl WlCopyBackend {
    /// Create a new wl-copy backend
    pub fn new() -> Self {
        Self
    }
}

impl Default for WlCopyBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ClipboardBackend for WlCopyBackend {
    fn name(&self) -> &str {
        "wl-copy"
    }

    fn label(&self) -> &str {
        "wl-copy (Wayland)"
    }

    async fn available(&self) -> bool {
        is_tool_available("wl-copy").await
    }

    async fn clear(&self) -> Result<(), BackendError> {
        let status = Command::new("wl-copy")
            .arg("--clear")
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    BackendError::ToolNotFound("wl-copy".to_string())
                } else {
                    BackendError::ClearFailed(e.to_string())
                }
            })?;

        if !status.success() {
            return Err(BackendError::ClearFailed(format!(
                "wl-copy exited with status: {}",
                status
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_carries_wayland_qualifier() {
        let backend = WlCopyBackend::new();
        assert_eq!(backend.name(), "wl-copy");
        assert_eq!(backend.label(), "wl-copy (Wayland)");
    }
}

