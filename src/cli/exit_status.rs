use std::process::ExitCode;

/// Exit status for CLI commands.
///
/// - `Success` (0): Command completed; for `check`, the tag was found
/// - `Failure` (1): `check` found no tag, or `init` refused to overwrite
/// - `Error` (2): Command failed (unreadable input, invalid config, etc.)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
    Error,
}

impl From<bool> for ExitStatus {
    fn from(success: bool) -> Self {
        if success { Self::Success } else { Self::Failure }
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
