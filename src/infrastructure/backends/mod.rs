//! Clipboard backend adapters
//!
//! One adapter per clearing mechanism. `chain_for` assembles the ordered
//! fallback chain for a platform:
//!
//! - Windows: Win32 API → arboard → PowerShell `Set-Clipboard`
//! - macOS: pbcopy fed empty input → osascript
//! - Linux/other Unix: xsel → xclip → wl-copy, each presence-checked

mod native;
mod osascript;
mod pbcopy;
mod powershell;
#[cfg(windows)]
mod win32;
mod wl_copy;
mod xclip;
mod xsel;

pub use native::ArboardBackend;
pub use osascript::OsascriptBackend;
pub use pbcopy::PbcopyBackend;
pub use powershell::PowershellBackend;
#[cfg(windows)]
pub use win32::Win32Backend;
pub use wl_copy::WlCopyBackend;
pub use xclip::XclipBackend;
pub use xsel::XselBackend;

use std::process::Stdio;

use tokio::process::Command;

use crate::application::ports::ClipboardBackend;
use crate::domain::Platform;

/// Check if a tool binary is available using `which`
pub(crate) async fn is_tool_available(tool: &str) -> bool {
    Command::new("which")
        .arg(tool)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .await
        .map(|s| s.success())
        .unwrap_or(false)
}

/// Build the ordered fallback chain for `platform`.
pub fn chain_for(platform: Platform) -> Vec<Box<dyn ClipboardBackend>> {
    match platform {
        Platform::Windows => {
            #[allow(unused_mut)]
            let mut chain: Vec<Box<dyn ClipboardBackend>> = Vec::new();
            #[cfg(windows)]
            chain.push(Box::new(Win32Backend::new()) as Box<dyn ClipboardBackend>);
            chain.push(Box::new(ArboardBackend::new()));
            chain.push(Box::new(PowershellBackend::new()));
            chain
        }
        Platform::MacOs => vec![
            Box::new(PbcopyBackend::new()),
            Box::new(OsascriptBackend::new()),
        ],
        Platform::Unix => vec![
            Box::new(XselBackend::new()),
            Box::new(XclipBackend::new()),
            Box::new(WlCopyBackend::new()),
        ],
    }
}
