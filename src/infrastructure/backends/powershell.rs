//! PowerShell adapter for Windows
//!
//! Last-resort Windows mechanism: `Set-Clipboard -Value ''` through the
//! scripting shell, with the command passed as an argument array.

use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;

use crate::application::ports::{BackendError, ClipboardBackend};

/// Windows clipboard adapter using PowerShell Set-Clipboard
pub struct PowershellBackend;

impl PowershellBackend {
    /// Create a new PowerShell backend
    pub fn new() -> Self {
        Self
    }
}

impl Default for PowershellBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ClipboardBackend for PowershellBackend {
    fn name(&self) -> &str {
        "powershell"
    }

    async fn clear(&self) -> Result<(), BackendError> {
        let status = Command::new("powershell")
            .args(["-NoProfile", "-Command", "Set-Clipboard -Value ''"])
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    BackendError::ToolNotFound("powershell".to_string())
                } else {
                    BackendError::ClearFailed(e.to_string())
                }
            })?;

        if !status.success() {
            return Err(BackendError::ClearFailed(format!(
                "powershell exited with status: {}",
                status
            )));
        }

        Ok(())
    }
}
