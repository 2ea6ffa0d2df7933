//! Append-only file log adapter
//!
//! Writes one `"<YYYY-MM-DD HH:MM:SS> - <message>"` line per call. The file
//! is opened, appended to, and closed for each message. Write failures never
//! reach the caller; they are reported on stderr and otherwise swallowed.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Local;

use crate::application::ports::AttemptLog;

const LOG_FILE_NAME: &str = "clipboard_clear.log";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// File-backed attempt log
pub struct FileAttemptLog {
    path: PathBuf,
}

impl FileAttemptLog {
    /// Create a log at the default location: a `logs` directory sibling to
    /// the executable's directory, created on demand. Falls back to the
    /// executable's own directory if the `logs` directory cannot be created,
    /// and to the current directory if the executable path is unknown.
    pub fn new() -> Self {
        Self {
            path: default_log_dir().join(LOG_FILE_NAME),
        }
    }

    /// Create with custom path
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location the log is written to
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn append(&self, message: &str) -> std::io::Result<()> {
        let timestamp = Local::now().format(TIMESTAMP_FORMAT);
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{} - {}", timestamp, message)
    }
}

impl Default for FileAttemptLog {
    fn default() -> Self {
        Self::new()
    }
}

impl AttemptLog for FileAttemptLog {
    fn record(&self, message: &str) {
        if let Err(e) = self.append(message) {
            eprintln!("Logging error: {}", e);
        }
    }
}

/// Resolve the default directory log files go into.
fn default_log_dir() -> PathBuf {
    let exe_dir = std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."));

    resolve_log_dir(&exe_dir)
}

/// Resolve the log directory relative to `exe_dir`.
///
/// `<exe_dir>/../logs`, created if missing; `<exe_dir>` itself when the
/// `logs` directory cannot be created.
fn resolve_log_dir(exe_dir: &Path) -> PathBuf {
    let log_dir = exe_dir
        .parent()
        .map(|base| base.join("logs"))
        .unwrap_or_else(|| exe_dir.join("logs"));

    match std::fs::create_dir_all(&log_dir) {
        Ok(()) => log_dir,
        Err(_) => exe_dir.to_path_buf(),
    }
}
