//! Turn the `restic ls` stream into a size index
//!

use crate::error::AnchorError;
use crate::model::{ListingEntry, SizeIndex};

/// Index every path in the newer snapshot by its byte count. Lines without a
/// path (the snapshot header, summaries) are skipped, sizeless nodes count
/// as zero.
pub fn build_size_index(ls_stream: &str) -> Result<SizeIndex, AnchorError> {
    let mut index = SizeIndex::new();

    for line in ls_stream.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let entry: ListingEntry =
            serde_json::from_str(line).map_err(|err| AnchorError::malformed_stream(line, err))?;
        let byte_count = entry.byte_count();
        let Some(path) = entry.path else {
            continue;
        };
        index.insert(path, byte_count);
    }

    log::debug!("size index covers {} paths", index.len());
    Ok(index)
}
