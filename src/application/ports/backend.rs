//! Clipboard backend port interface

use async_trait::async_trait;
use thiserror::Error;

/// Errors a clipboard-clearing mechanism can report
#[derive(Debug, Clone, Error)]
pub enum BackendError {
    #[error("{0} not found on this system")]
    ToolNotFound(String),

    #[error("Clipboard unavailable: {0}")]
    Unavailable(String),

    #[error("Failed to clear clipboard: {0}")]
    ClearFailed(String),
}

/// Port for one clipboard-clearing mechanism.
///
/// Backends are tried in order by the fallback driver; a failure is never
/// fatal, it only advances the chain to the next backend.
#[async_trait]
pub trait ClipboardBackend: Send + Sync {
    /// Short tool name used in log lines (e.g. "pbcopy", "xsel").
    fn name(&self) -> &str;

    /// Display label for success log lines. Defaults to the tool name;
    /// backends may append a qualifier (e.g. "wl-copy (Wayland)").
    fn label(&self) -> &str {
        self.name()
    }

    /// Presence check run before the backend is invoked.
    ///
    /// Backends wrapping an external binary override this with a `which`
    /// lookup; API-based backends are always considered present.
    async fn available(&self) -> bool {
        true
    }

    /// Empty the system clipboard.
    ///
    /// # Returns
    /// Ok(()) if the clipboard was cleared, error otherwise
    async fn clear(&self) -> Result<(), BackendError>;
}

/// Blanket implementation for boxed backend types
#[async_trait]
impl ClipboardBackend for Box<dyn ClipboardBackend> {
    fn name(&self) -> &str {
        self.as_ref().name()
    }

    fn label(&self) -> &str {
        self.as_ref().label()
    }

    async fn available(&self) -> bool {
        self.as_ref().available().await
    }

    async fn clear(&self) -> Result<(), BackendError> {
        self.as_ref().clear().await
    }
}
