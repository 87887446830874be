use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A changed path correlated with its byte count in the newer snapshot.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    pub path: PathBuf,
    pub byte_count: u64,
}

impl FileRecord {
    pub fn new(path: impl Into<PathBuf>, byte_count: u64) -> FileRecord {
        FileRecord {
            path: path.into(),
            byte_count,
        }
    }
}
