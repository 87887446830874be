use crate::error::AnchorError;
use crate::model::Snapshot;
use crate::restic::process;

/// `restic snapshots --json` prints one JSON array, oldest snapshot first.
pub fn query() -> Result<String, AnchorError> {
    process::run(&["snapshots", "--json"])
}

/// Decode the snapshot array, surfacing the payload when it does not parse.
pub fn parse_snapshot_list(payload: &str) -> Result<Vec<Snapshot>, AnchorError> {
    serde_json::from_str(payload.trim())
        .map_err(|err| AnchorError::malformed_stream(payload, err))
}

#[cfg(test)]
mod tests {
    use crate::error::AnchorError;
    use crate::restic::snapshots;

    #[test]
    fn test_parse_snapshot_list_keeps_restic_order() -> Result<(), AnchorError> {
        let payload = r#"[
            {"time":"2024-04-01T03:00:00Z","paths":["/home"],"hostname":"a","id":"1111","short_id":"11"},
            {"time":"2024-04-02T03:00:00Z","paths":["/home"],"hostname":"a","id":"2222","short_id":"22"},
            {"time":"2024-04-03T03:00:00Z","paths":["/home"],"hostname":"a","id":"3333","short_id":"33"}
        ]"#;
        let snapshots = snapshots::parse_snapshot_list(payload)?;
        let ids: Vec<&str> = snapshots.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["1111", "2222", "3333"]);
        Ok(())
    }

    #[test]
    fn test_parse_snapshot_list_empty_array() -> Result<(), AnchorError> {
        let snapshots = snapshots::parse_snapshot_list("[]\n")?;
        assert!(snapshots.is_empty());
        Ok(())
    }

    #[test]
    fn test_parse_snapshot_list_bad_payload_is_malformed() {
        let result = snapshots::parse_snapshot_list("null but worse");
        let err = result.unwrap_err();
        assert!(matches!(err, AnchorError::MalformedStream(_)));
        assert!(format!("{err}").contains("null but worse"));
    }
}
