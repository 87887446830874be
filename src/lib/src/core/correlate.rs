//! Join changed paths with their sizes in the newer snapshot
//!

use std::path::PathBuf;

use crate::error::AnchorError;
use crate::model::{FileRecord, SizeIndex};

/// Look every changed path up in the size index. A path the diff reported
/// but the listing does not know means the two commands saw different
/// states of the repository, which poisons every number in the report, so
/// it is a hard error.
pub fn correlate(
    changed_paths: Vec<PathBuf>,
    index: &SizeIndex,
) -> Result<Vec<FileRecord>, AnchorError> {
    let mut records: Vec<FileRecord> = Vec::with_capacity(changed_paths.len());
    for path in changed_paths {
        let Some(byte_count) = index.get(&path) else {
            return Err(AnchorError::inconsistent_snapshot_view(path));
        };
        records.push(FileRecord { path, byte_count });
    }
    Ok(records)
}
