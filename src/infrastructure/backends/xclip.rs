//! xclip adapter for X11
//!
//! Feeds xclip empty input on the CLIPBOARD selection, replacing its
//! contents with an empty string.

use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;

use crate::application::ports::{BackendError, ClipboardBackend};

use super::is_tool_available;

/// X11 clipboard adapter using xclip
pub struct XclipBackend;

impl XclipBackend {
    /// Create a new xclip backend
    pub fn new() -> Self {
        Self
    }
}

impl Default for XclipBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ClipboardBackend for XclipBackend {
    fn name(&self) -> &str {
        "xclip"
    }

    async fn available(&self) -> bool {
        is_tool_available("xclip").await
    }

    async fn clear(&self) -> Result<(), BackendError> {
        let status = Command::new("xclip")
            .args(["-selection", "clipboard"])
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    BackendError::ToolNotFound("xclip".to_string())
                } else {
                    BackendError::ClearFailed(e.to_string())
                }
            })?;

        if !status.success() {
            return Err(BackendError::ClearFailed(format!(
                "xclip exited with status: {}",
                status
            )));
        }

        Ok(())
    }
}
