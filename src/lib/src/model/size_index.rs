use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Byte counts for every path in the newer snapshot, directories pinned to 0.
///
/// Built once from the `restic ls` stream and only read afterwards. If the
/// stream ever repeats a path the last size wins.
#[derive(Debug, Clone, Default)]
pub struct SizeIndex {
    sizes: HashMap<PathBuf, u64>,
}

impl SizeIndex {
    pub fn new() -> SizeIndex {
        SizeIndex::default()
    }

    pub fn insert(&mut self, path: PathBuf, byte_count: u64) {
        self.sizes.insert(path, byte_count);
    }

    pub fn get(&self, path: &Path) -> Option<u64> {
        self.sizes.get(path).copied()
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.sizes.contains_key(path)
    }

    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::path::{Path, PathBuf};

    use crate::model::SizeIndex;

    #[test]
    fn test_size_index_last_write_wins() {
        let mut index = SizeIndex::new();
        index.insert(PathBuf::from("/a"), 10);
        index.insert(PathBuf::from("/a"), 20);
        assert_eq!(index.len(), 1);
        assert_eq!(index.get(Path::new("/a")), Some(20));
    }

    #[test]
    fn test_size_index_misses_are_none() {
        let index = SizeIndex::new();
        assert!(index.is_empty());
        assert_eq!(index.get(Path::new("/missing")), None);
        assert!(!index.contains(Path::new("/missing")));
    }
}
