//! pbcopy adapter for macOS
//!
//! Feeds pbcopy empty input, which replaces the pasteboard contents
//! with an empty string.

use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;

use crate::application::ports::{BackendError, ClipboardBackend};

/// macOS clipboard adapter using pbcopy
pub struct PbcopyBackend;

impl PbcopyBackend {
    /// Create a new pbcopy backend
    pub fn new() -> Self {
        Self
    }
}

impl Default for PbcopyBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ClipboardBackend for PbcopyBackend {
    fn name(&self) -> &str {
        "pbcopy"
    }

    async fn clear(&self) -> Result<(), BackendError> {
        let status = Command::new("pbcopy")
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    BackendError::ToolNotFound("pbcopy".to_string())
                } else {
                    BackendError::ClearFailed(e.to_string())
                }
            })?;

        if !status.success() {
            return Err(BackendError::ClearFailed(format!(
                "pbcopy exited with status: {}",
                status
            )));
        }

        Ok(())
    }
}
