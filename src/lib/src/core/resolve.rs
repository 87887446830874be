//! Decide which two snapshots to compare
//!

use crate::constants;
use crate::error::AnchorError;
use crate::model::Snapshot;

/// Validate caller supplied IDs: both or neither. `latest` is rejected so
/// the diff and the listing cannot drift onto different snapshots.
pub fn explicit_window(
    snapshot_id_1: Option<&str>,
    snapshot_id_2: Option<&str>,
) -> Result<Option<(String, String)>, AnchorError> {
    match (snapshot_id_1, snapshot_id_2) {
        (None, None) => Ok(None),
        (Some(from), Some(to)) => {
            if from == constants::LATEST_SNAPSHOT_ID || to == constants::LATEST_SNAPSHOT_ID {
                return Err(AnchorError::latest_not_supported());
            }
            Ok(Some((from.to_string(), to.to_string())))
        }
        _ => Err(AnchorError::one_snapshot_id()),
    }
}

/// Pick the two most recent snapshots. Restic lists oldest first, so the
/// window is the last two entries.
pub fn latest_window(snapshots: &[Snapshot]) -> Result<(&Snapshot, &Snapshot), AnchorError> {
    if snapshots.len() < 2 {
        return Err(AnchorError::insufficient_snapshots(snapshots.len()));
    }
    Ok((
        &snapshots[snapshots.len() - 2],
        &snapshots[snapshots.len() - 1],
    ))
}
