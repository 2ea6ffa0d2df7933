//! Clear clipboard use case - the fallback driver
//!
//! Walks an ordered chain of [`ClipboardBackend`]s for the detected platform,
//! stopping at the first success. Every attempt outcome is recorded through
//! the [`AttemptLog`] port; no backend failure is fatal, and the use case
//! itself never returns an error.

use crate::domain::Platform;

use super::ports::{AttemptLog, ClipboardBackend};

/// How one mechanism attempt ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttemptResult {
    /// The backend reported the clipboard cleared
    Cleared,
    /// The presence check failed; the backend was never invoked
    Skipped,
    /// The backend ran and failed
    Failed(String),
}

/// Record of one mechanism attempt, kept for the caller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attempt {
    /// Tool name of the backend
    pub backend: String,
    pub result: AttemptResult,
}

/// Aggregated result of a run of the fallback chain
#[derive(Debug, Clone)]
pub struct ClearOutcome {
    /// True if any backend reported success
    pub cleared: bool,
    /// Per-backend results, in chain order, up to and including the
    /// first success
    pub attempts: Vec<Attempt>,
}

/// One-shot clipboard clearing use case
pub struct ClearClipboardUseCase<L: AttemptLog> {
    log: L,
}

impl<L: AttemptLog> ClearClipboardUseCase<L> {
    pub fn new(log: L) -> Self {
        Self { log }
    }

    /// Run the fallback chain for `platform`.
    ///
    /// Backends are tried in order. A backend whose presence check fails is
    /// logged and skipped without being invoked. The chain stops at the
    /// first success; exhaustion is logged and reported as `cleared: false`.
    pub async fn execute<B>(&self, platform: Platform, backends: &[B]) -> ClearOutcome
    where
        B: ClipboardBackend,
    {
        self.log.record(&format!(
            "Clipboard clear requested - clipclear {} on {}",
            env!("CARGO_PKG_VERSION"),
            platform
        ));

        let mut attempts = Vec::with_capacity(backends.len());

        for backend in backends {
            let name = backend.name().to_string();

            if !backend.available().await {
                self.log.record(&format!("{} not available", name));
                attempts.push(Attempt {
                    backend: name,
                    result: AttemptResult::Skipped,
                });
                continue;
            }

            match backend.clear().await {
                Ok(()) => {
                    self.log.record(&format!(
                        "Clipboard cleared on {} using {}",
                        platform,
                        backend.label()
                    ));
                    attempts.push(Attempt {
                        backend: name,
                        result: AttemptResult::Cleared,
                    });
                    return ClearOutcome {
                        cleared: true,
                        attempts,
                    };
                }
                Err(e) => {
                    self.log.record(&format!(
                        "Failed to clear clipboard using {}: {}",
                        name, e
                    ));
                    attempts.push(Attempt {
                        backend: name,
                        result: AttemptResult::Failed(e.to_string()),
                    });
                }
            }
        }

        self.log.record(&format!(
            "Failed to clear clipboard on {}: all mechanisms exhausted",
            platform
        ));

        ClearOutcome {
            cleared: false,
            attempts,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Mutex;

    use async_trait::async_trait;

    use crate::application::ports::BackendError;

    use super::*;

    /// Log that records lines in memory
    #[derive(Default)]
    struct RecordingLog {
        lines: Mutex<Vec<String>>,
    }

    impl RecordingLog {
        fn lines(&self) -> Vec<String> {
            self.lines.lock().unwrap().clone()
        }
    }

    impl AttemptLog for &RecordingLog {
        fn record(&self, message: &str) {
            self.lines.lock().unwrap().push(message.to_string());
        }
    }

    /// Backend with scripted availability and outcome
    struct FakeBackend {
        name: &'static str,
        label: Option<&'static str>,
        available: bool,
        succeeds: bool,
        invoked: AtomicBool,
    }

    impl FakeBackend {
        fn new(name: &'static str, available: bool, succeeds: bool) -> Self {
            Self {
                name,
                label: None,
                available,
                succeeds,
                invoked: AtomicBool::new(false),
            }
        }

        fn with_label(name: &'static str, label: &'static str) -> Self {
            Self {
                label: Some(label),
                ..Self::new(name, true, true)
            }
        }

        fn was_invoked(&self) -> bool {
            self.invoked.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl ClipboardBackend for &FakeBackend {
        fn name(&self) -> &str {
            self.name
        }

        fn label(&self) -> &str {
            self.label.unwrap_or(self.name)
        }

        async fn available(&self) -> bool {
            self.available
        }

        async fn clear(&self) -> Result<(), BackendError> {
            self.invoked.store(true, Ordering::SeqCst);
            if self.succeeds {
                Ok(())
            } else {
                Err(BackendError::ClearFailed("simulated".to_string()))
            }
        }
    }

    #[tokio::test]
    async fn stops_at_first_success() {
        let log = RecordingLog::default();
        let first = FakeBackend::new("first", true, false);
        let second = FakeBackend::new("second", true, true);
        let third = FakeBackend::new("third", true, true);

        let use_case = ClearClipboardUseCase::new(&log);
        let outcome = use_case
            .execute(Platform::Unix, &[&first, &second, &third])
            .await;

        assert!(outcome.cleared);
        assert!(first.was_invoked());
        assert!(second.was_invoked());
        assert!(!third.was_invoked());
        assert_eq!(outcome.attempts.len(), 2);
        assert_eq!(outcome.attempts[1].result, AttemptResult::Cleared);
    }

    #[tokio::test]
    async fn all_failures_return_not_cleared() {
        let log = RecordingLog::default();
        let first = FakeBackend::new("first", true, false);
        let second = FakeBackend::new("second", true, false);

        let use_case = ClearClipboardUseCase::new(&log);
        let outcome = use_case.execute(Platform::Unix, &[&first, &second]).await;

        assert!(!outcome.cleared);
        assert_eq!(outcome.attempts.len(), 2);
        let lines = log.lines();
        assert!(lines
            .last()
            .unwrap()
            .contains("all mechanisms exhausted"));
    }

    #[tokio::test]
    async fn unavailable_backend_is_never_invoked() {
        let log = RecordingLog::default();
        let missing = FakeBackend::new("missing", false, true);
        let present = FakeBackend::new("present", true, true);

        let use_case = ClearClipboardUseCase::new(&log);
        let outcome = use_case.execute(Platform::Unix, &[&missing, &present]).await;

        assert!(outcome.cleared);
        assert!(!missing.was_invoked());
        assert!(present.was_invoked());
        assert_eq!(outcome.attempts[0].result, AttemptResult::Skipped);
        assert!(log.lines().iter().any(|l| l == "missing not available"));
    }

    #[tokio::test]
    async fn success_line_uses_backend_label() {
        let log = RecordingLog::default();
        let wayland = FakeBackend::with_label("wl-copy", "wl-copy (Wayland)");

        let use_case = ClearClipboardUseCase::new(&log);
        let outcome = use_case.execute(Platform::Unix, &[&wayland]).await;

        assert!(outcome.cleared);
        // The label qualifies the success line; the attempt record keeps
        // the plain tool name.
        assert_eq!(outcome.attempts[0].backend, "wl-copy");
        assert!(log
            .lines()
            .iter()
            .any(|l| l == "Clipboard cleared on Linux using wl-copy (Wayland)"));
    }

    #[tokio::test]
    async fn empty_chain_is_a_failure() {
        let log = RecordingLog::default();
        let use_case = ClearClipboardUseCase::new(&log);
        let backends: [&FakeBackend; 0] = [];

        let outcome = use_case.execute(Platform::Unix, &backends).await;

        assert!(!outcome.cleared);
        assert!(outcome.attempts.is_empty());
    }

    #[tokio::test]
    async fn every_attempt_produces_one_log_line() {
        let log = RecordingLog::default();
        let first = FakeBackend::new("first", true, false);
        let second = FakeBackend::new("second", false, false);
        let third = FakeBackend::new("third", true, true);

        let use_case = ClearClipboardUseCase::new(&log);
        use_case
            .execute(Platform::MacOs, &[&first, &second, &third])
            .await;

        let lines = log.lines();
        // request line + one per backend
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("Clipboard clear requested"));
        assert!(lines[1].starts_with("Failed to clear clipboard using first"));
        assert_eq!(lines[2], "second not available");
        assert_eq!(lines[3], "Clipboard cleared on macOS using third");
    }
}
