//! Extract the paths that grew the backup from the diff stream
//!

use std::collections::HashSet;
use std::path::PathBuf;

use crate::error::AnchorError;
use crate::model::DiffLine;

/// Pull every added or modified path out of the `restic diff --json` stream,
/// in stream order. Removed entries are dropped, they contribute nothing to
/// the newer snapshot. Paths are distinct, the first occurrence wins.
pub fn extract_changed_paths(diff_stream: &str) -> Result<Vec<PathBuf>, AnchorError> {
    let mut paths: Vec<PathBuf> = vec![];
    let mut seen: HashSet<PathBuf> = HashSet::new();

    for line in diff_stream.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let entry: DiffLine =
            serde_json::from_str(line).map_err(|err| AnchorError::malformed_stream(line, err))?;
        let DiffLine::Change(change) = entry else {
            continue;
        };
        if change.modifier.is_removal() {
            continue;
        }
        if seen.insert(change.path.clone()) {
            paths.push(change.path);
        }
    }

    log::debug!("extracted {} added or modified paths", paths.len());
    Ok(paths)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use crate::core::changes;
    use crate::error::AnchorError;
    use crate::model::ChangeModifier;
    use crate::test;

    #[test]
    fn test_extract_keeps_additions_and_modifications_in_order() -> Result<(), AnchorError> {
        let stream = test::ndjson(&[
            test::diff_change_line(ChangeModifier::Added, "/home/me/new.bin")?,
            test::diff_change_line(ChangeModifier::Modified, "/home/me/notes.txt")?,
            test::diff_change_line(ChangeModifier::Removed, "/home/me/gone.tmp")?,
            test::diff_change_line(ChangeModifier::MetadataChanged, "/home/me/touched")?,
            test::diff_statistics_line(),
        ]);
        let paths = changes::extract_changed_paths(&stream)?;
        assert_eq!(
            paths,
            vec![
                PathBuf::from("/home/me/new.bin"),
                PathBuf::from("/home/me/notes.txt"),
                PathBuf::from("/home/me/touched"),
            ]
        );
        Ok(())
    }

    #[test]
    fn test_extract_deduplicates_paths() -> Result<(), AnchorError> {
        let stream = test::ndjson(&[
            test::diff_change_line(ChangeModifier::Added, "/home/me/file")?,
            test::diff_change_line(ChangeModifier::Modified, "/home/me/file")?,
        ]);
        let paths = changes::extract_changed_paths(&stream)?;
        assert_eq!(paths, vec![PathBuf::from("/home/me/file")]);
        Ok(())
    }

    #[test]
    fn test_extract_skips_blank_lines() -> Result<(), AnchorError> {
        let stream = format!(
            "\n{}\n\n  \n{}\n",
            test::diff_change_line(ChangeModifier::Added, "/a")?,
            test::diff_statistics_line()
        );
        let paths = changes::extract_changed_paths(&stream)?;
        assert_eq!(paths, vec![PathBuf::from("/a")]);
        Ok(())
    }

    #[test]
    fn test_extract_empty_stream_is_empty() -> Result<(), AnchorError> {
        assert!(changes::extract_changed_paths("")?.is_empty());
        Ok(())
    }

    #[test]
    fn test_extract_rejects_a_malformed_line() {
        let stream = "{\"message_type\":\"change\",\"path\":";
        let result = changes::extract_changed_paths(stream);
        assert!(matches!(result, Err(AnchorError::MalformedStream(_))));
    }

    #[test]
    fn test_extract_rejects_an_unknown_modifier() {
        let stream = test::ndjson(&[
            r#"{"message_type":"change","path":"/a","modifier":"Z"}"#.to_string()
        ]);
        let result = changes::extract_changed_paths(&stream);
        assert!(matches!(result, Err(AnchorError::MalformedStream(_))));
    }
}
