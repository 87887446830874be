use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// One line of the newline delimited stream `restic ls --long --json` prints.
///
/// The snapshot header and any summary lines have no `path` and carry no file
/// information. Directories have a `path` but no `size`.
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct ListingEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
}

impl ListingEntry {
    /// Directories and other sizeless nodes count as zero bytes.
    pub fn byte_count(&self) -> u64 {
        self.size.unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use crate::model::ListingEntry;

    #[test]
    fn test_listing_entry_decodes_a_file_node() {
        let line = r#"{"name":"file.txt","type":"file","path":"/home/me/file.txt","size":1234,"mode":420}"#;
        let entry: ListingEntry = serde_json::from_str(line).unwrap();
        assert_eq!(entry.path, Some(PathBuf::from("/home/me/file.txt")));
        assert_eq!(entry.byte_count(), 1234);
    }

    #[test]
    fn test_listing_entry_sizeless_node_counts_zero_bytes() {
        let line = r#"{"name":"me","type":"dir","path":"/home/me","mode":2147484141}"#;
        let entry: ListingEntry = serde_json::from_str(line).unwrap();
        assert_eq!(entry.path, Some(PathBuf::from("/home/me")));
        assert_eq!(entry.byte_count(), 0);
    }

    #[test]
    fn test_listing_entry_header_has_no_path() {
        let line = r#"{"time":"2024-05-01T09:30:00Z","tree":"deadbeef","paths":["/home"],"id":"abc123"}"#;
        let entry: ListingEntry = serde_json::from_str(line).unwrap();
        assert!(entry.path.is_none());
    }
}
