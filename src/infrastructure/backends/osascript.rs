//! osascript adapter for macOS
//!
//! Sets the clipboard to an empty string through AppleScript. The script
//! is passed as a single argument, never through a shell.

use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;

use crate::application::ports::{BackendError, ClipboardBackend};

/// macOS clipboard adapter using osascript
pub struct OsascriptBackend;

impl OsascriptBackend {
    /// Create a new osascript backend
    pub fn new() -> Self {
        Self
    }
}

impl Default for OsascriptBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ClipboardBackend for OsascriptBackend {
    fn name(&self) -> &str {
        "osascript"
    }

    async fn clear(&self) -> Result<(), BackendError> {
        let status = Command::new("osascript")
            .args(["-e", r#"set the clipboard to """#])
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    BackendError::ToolNotFound("osascript".to_string())
                } else {
                    BackendError::ClearFailed(e.to_string())
                }
            })?;

        if !status.success() {
            return Err(BackendError::ClearFailed(format!(
                "osascript exited with status: {}",
                status
            )));
        }

        Ok(())
    }
}
