use serde::{Deserialize, Serialize};

/// Single character change codes restic attaches to each diff entry.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq, Hash, Copy)]
pub enum ChangeModifier {
    #[serde(rename = "+")]
    Added,
    #[serde(rename = "-")]
    Removed,
    #[serde(rename = "M")]
    Modified,
    #[serde(rename = "U")]
    MetadataChanged,
    #[serde(rename = "T")]
    TypeChanged,
}

impl ChangeModifier {
    /// Removed entries are the only ones that contribute no bytes to the
    /// newer snapshot.
    pub fn is_removal(&self) -> bool {
        matches!(self, ChangeModifier::Removed)
    }
}

#[cfg(test)]
mod tests {
    use crate::model::ChangeModifier;

    #[test]
    fn test_change_modifier_decodes_restic_codes() {
        assert_eq!(
            serde_json::from_str::<ChangeModifier>("\"+\"").unwrap(),
            ChangeModifier::Added
        );
        assert_eq!(
            serde_json::from_str::<ChangeModifier>("\"-\"").unwrap(),
            ChangeModifier::Removed
        );
        assert_eq!(
            serde_json::from_str::<ChangeModifier>("\"M\"").unwrap(),
            ChangeModifier::Modified
        );
        assert_eq!(
            serde_json::from_str::<ChangeModifier>("\"U\"").unwrap(),
            ChangeModifier::MetadataChanged
        );
        assert_eq!(
            serde_json::from_str::<ChangeModifier>("\"T\"").unwrap(),
            ChangeModifier::TypeChanged
        );
    }

    #[test]
    fn test_change_modifier_rejects_unknown_codes() {
        assert!(serde_json::from_str::<ChangeModifier>("\"?\"").is_err());
        assert!(serde_json::from_str::<ChangeModifier>("\"MT\"").is_err());
    }

    #[test]
    fn test_only_removed_is_a_removal() {
        assert!(ChangeModifier::Removed.is_removal());
        assert!(!ChangeModifier::Added.is_removal());
        assert!(!ChangeModifier::Modified.is_removal());
        assert!(!ChangeModifier::MetadataChanged.is_removal());
        assert!(!ChangeModifier::TypeChanged.is_removal());
    }
}
