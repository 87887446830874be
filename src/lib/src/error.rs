//! Errors for the anchor library
//!
//! Enumeration for all errors that can occur while producing a report
//!

use derive_more::{Display, Error};
use std::io;
use std::path::Path;

use crate::constants;

pub mod path_buf_error;
pub mod string_error;

pub use crate::error::path_buf_error::PathBufError;
pub use crate::error::string_error::StringError;

pub const ONE_SNAPSHOT_ID: &str = "expected zero or two snapshot IDs, not one";

pub const LATEST_NOT_SUPPORTED: &str =
    "the special snapshot ID `latest` is not supported, pick a concrete ID from:\n\n  restic snapshots\n";

#[derive(Debug, Display, Error)]
pub enum AnchorError {
    // Invocation and environment
    Usage(StringError),

    // Snapshot window
    InsufficientSnapshots(StringError),
    #[display(
        "`{_0}` changed between the snapshots but is missing from the newer snapshot's listing, was the repository modified while this tool ran?"
    )]
    InconsistentSnapshotView(Box<PathBufError>),

    // Talking to restic
    ResticFailed(StringError),
    ResticUnexpected(StringError),
    MalformedStream(StringError),

    // External Library Errors
    IO(io::Error),
    JSON(serde_json::Error),
    Encoding(std::string::FromUtf8Error),

    // Fallback
    Basic(StringError),
}

impl AnchorError {
    pub fn basic_str(s: impl AsRef<str>) -> Self {
        AnchorError::Basic(StringError::from(s.as_ref()))
    }

    pub fn usage(s: impl AsRef<str>) -> Self {
        AnchorError::Usage(StringError::from(s.as_ref()))
    }

    pub fn one_snapshot_id() -> Self {
        AnchorError::usage(ONE_SNAPSHOT_ID)
    }

    pub fn latest_not_supported() -> Self {
        AnchorError::usage(LATEST_NOT_SUPPORTED)
    }

    pub fn missing_restic_env(has_repository: bool, has_password: bool) -> Self {
        let mut msg = String::from("you must define environment variables including");
        if !has_repository {
            msg.push_str(&format!(
                " (either {} or {})",
                constants::RESTIC_REPOSITORY_ENV,
                constants::RESTIC_REPOSITORY_FILE_ENV
            ));
        }
        if !has_repository && !has_password {
            msg.push_str(" and");
        }
        if !has_password {
            msg.push_str(&format!(
                " (either {} or {})",
                constants::RESTIC_PASSWORD_ENV,
                constants::RESTIC_PASSWORD_FILE_ENV
            ));
        }
        msg.push_str(
            ". Other environment variables are also necessary, but which ones depends on how you use Restic. For more details, see ",
        );
        msg.push_str(constants::RESTIC_ENV_DOCS_URL);
        AnchorError::Usage(StringError::from(msg))
    }

    pub fn insufficient_snapshots(found: usize) -> Self {
        let err = format!(
            "comparing snapshots only works when there are at least 2 snapshots, found {found}"
        );
        AnchorError::InsufficientSnapshots(StringError::from(err))
    }

    pub fn inconsistent_snapshot_view(path: impl AsRef<Path>) -> Self {
        AnchorError::InconsistentSnapshotView(Box::new(path.as_ref().into()))
    }

    pub fn restic_failed(message: impl AsRef<str>) -> Self {
        AnchorError::ResticFailed(StringError::from(message.as_ref()))
    }

    pub fn restic_unexpected(s: impl AsRef<str>) -> Self {
        AnchorError::ResticUnexpected(StringError::from(s.as_ref()))
    }

    pub fn restic_not_found(bin: impl AsRef<str>) -> Self {
        let err = format!(
            "could not find `{}`, install restic or point {} at the binary:\n\n  https://restic.readthedocs.io/en/stable/020_installation.html\n",
            bin.as_ref(),
            constants::RESTIC_BIN_ENV
        );
        AnchorError::basic_str(err)
    }

    pub fn malformed_stream(payload: impl AsRef<str>, err: impl std::fmt::Display) -> Self {
        let err = format!(
            "failed to decode restic JSON output: {err}\n\nOffending payload:\n{}",
            payload.as_ref()
        );
        AnchorError::MalformedStream(StringError::from(err))
    }
}

impl From<io::Error> for AnchorError {
    fn from(error: io::Error) -> Self {
        AnchorError::IO(error)
    }
}

impl From<String> for AnchorError {
    fn from(error: String) -> Self {
        AnchorError::Basic(StringError::from(error))
    }
}

impl From<serde_json::Error> for AnchorError {
    fn from(error: serde_json::Error) -> Self {
        AnchorError::JSON(error)
    }
}

impl From<std::string::FromUtf8Error> for AnchorError {
    fn from(error: std::string::FromUtf8Error) -> Self {
        AnchorError::Encoding(error)
    }
}
