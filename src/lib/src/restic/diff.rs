use crate::error::AnchorError;
use crate::restic::process;

/// `restic diff <from> <to> --json` prints one change message per line.
pub fn query(from: &str, to: &str) -> Result<String, AnchorError> {
    process::run(&["diff", from, to, "--json"])
}
