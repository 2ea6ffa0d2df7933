//! Win32 clipboard adapter
//!
//! First Windows mechanism: the raw OpenClipboard / EmptyClipboard /
//! CloseClipboard sequence against the user32 clipboard API.

use async_trait::async_trait;
use windows_sys::Win32::System::DataExchange::{CloseClipboard, EmptyClipboard, OpenClipboard};

use crate::application::ports::{BackendError, ClipboardBackend};

/// Windows clipboard adapter using the Win32 API
pub struct Win32Backend;

impl Win32Backend {
    /// Create a new Win32 backend
    pub fn new() -> Self {
        Self
    }
}

impl Default for Win32Backend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ClipboardBackend for Win32Backend {
    fn name(&self) -> &str {
        "win32"
    }

    async fn clear(&self) -> Result<(), BackendError> {
        // The clipboard API is blocking and tied to no particular thread
        // when opened with a null owner window.
        tokio::task::spawn_blocking(|| unsafe {
            if OpenClipboard(std::ptr::null_mut()) == 0 {
                return Err(BackendError::Unavailable(
                    "OpenClipboard failed".to_string(),
                ));
            }

            let emptied = EmptyClipboard() != 0;
            CloseClipboard();

            if emptied {
                Ok(())
            } else {
                Err(BackendError::ClearFailed("EmptyClipboard failed".to_string()))
            }
        })
        .await
        .map_err(|e| BackendError::ClearFailed(format!("Task join error: {}", e)))?
    }
}
