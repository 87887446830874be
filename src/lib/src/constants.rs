//! Constants used throughout the codebase
//!

/// Current version of the tool, reported by `restic-anchor --version`
pub const ANCHOR_VERSION: &str = "0.4.1";

// Environment variables restic itself reads to open the repository.
// We only check presence, restic does the rest.
pub const RESTIC_REPOSITORY_ENV: &str = "RESTIC_REPOSITORY";
pub const RESTIC_REPOSITORY_FILE_ENV: &str = "RESTIC_REPOSITORY_FILE";
pub const RESTIC_PASSWORD_ENV: &str = "RESTIC_PASSWORD";
pub const RESTIC_PASSWORD_FILE_ENV: &str = "RESTIC_PASSWORD_FILE";
pub const RESTIC_ENV_DOCS_URL: &str =
    "https://restic.readthedocs.io/en/stable/040_backup.html#environment-variables";

// Which restic binary to spawn
pub const DEFAULT_RESTIC_BIN: &str = "restic";
pub const RESTIC_BIN_ENV: &str = "RESTIC_BIN";

/// Symbolic snapshot ID restic resolves to the newest snapshot. Rejected on
/// our command line so the diff and the listing always observe the same
/// concrete snapshot.
pub const LATEST_SNAPSHOT_ID: &str = "latest";
