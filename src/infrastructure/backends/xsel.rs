//! xsel adapter for X11
//!
//! `xsel -bc` clears the CLIPBOARD selection.

use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;

use crate::application::ports::{BackendError, ClipboardBackend};

use super::is_tool_available;

/// X11 clipboard adapter using xsel
pub struct XselBackend;

impl XselBackend {
    /// Create a new xsel backend
    pub fn new() -> Self {
        Self
    }
}

impl Default for XselBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ClipboardBackend for XselBackend {
    fn name(&self) -> &str {
        "xsel"
    }

    async fn available(&self) -> bool {
        is_tool_available("xsel").await
    }

    async fn clear(&self) -> Result<(), BackendError> {
        let status = Command::new("xsel")
            .arg("-bc")
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    BackendError::ToolNotFound("xsel".to_string())
                } else {
                    BackendError::ClearFailed(e.to_string())
                }
            })?;

        if !status.success() {
            return Err(BackendError::ClearFailed(format!(
                "xsel exited with status: {}",
                status
            )));
        }

        Ok(())
    }
}
