use crate::error::AnchorError;
use crate::restic::process;

/// `restic ls <snapshot> --long --json` prints the snapshot header followed
/// by one node per line.
///
/// Callers pass the concrete resolved snapshot ID, never `latest`, so the
/// listing observes the same snapshot the diff did.
pub fn query(snapshot_id: &str) -> Result<String, AnchorError> {
    process::run(&["ls", snapshot_id, "--long", "--json"])
}
