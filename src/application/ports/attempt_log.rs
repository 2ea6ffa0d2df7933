//! Attempt log port interface

/// Port for the append-only diagnostic log.
///
/// One call records one human-readable line. Implementations must never
/// fail the caller; logging problems are swallowed after a best-effort
/// note on stderr.
pub trait AttemptLog: Send + Sync {
    /// Append a single message to the log.
    fn record(&self, message: &str);
}

/// Blanket implementation for boxed log types
impl AttemptLog for Box<dyn AttemptLog> {
    fn record(&self, message: &str) {
        self.as_ref().record(message)
    }
}
