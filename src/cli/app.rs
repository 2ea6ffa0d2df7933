//! Main app runner

use std::process::ExitCode;

use crate::application::ClearClipboardUseCase;
use crate::domain::Platform;
use crate::infrastructure::{chain_for, FileAttemptLog};

use super::args::Cli;
use super::presenter::Presenter;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;

/// Result lines printed to stdout
pub const MSG_SUCCESS: &str = "Clipboard cleared successfully";
pub const MSG_FAILURE: &str = "Failed to clear clipboard";

/// Run the one-shot clipboard clear
pub async fn run(cli: Cli) -> ExitCode {
    let presenter = Presenter::new();

    let log = match cli.log_file {
        Some(path) => FileAttemptLog::with_path(path),
        None => FileAttemptLog::new(),
    };

    let platform = Platform::detect();
    let backends = chain_for(platform);

    let use_case = ClearClipboardUseCase::new(log);
    let outcome = use_case.execute(platform, &backends).await;

    if outcome.cleared {
        presenter.output(MSG_SUCCESS);
        ExitCode::from(EXIT_SUCCESS)
    } else {
        presenter.error(&format!(
            "{} on {}: all mechanisms exhausted",
            MSG_FAILURE, platform
        ));
        presenter.output(MSG_FAILURE);
        ExitCode::from(EXIT_ERROR)
    }
}
