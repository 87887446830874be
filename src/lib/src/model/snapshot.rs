use serde::{Deserialize, Serialize};
use std::fmt;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

/// One entry of the array `restic snapshots --json` prints, oldest first.
///
/// Only the fields the pipeline needs are kept, everything else in restic's
/// payload is ignored.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct Snapshot {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_id: Option<String>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub time: Option<OffsetDateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,
    #[serde(default)]
    pub paths: Vec<String>,
}

impl Snapshot {
    /// The ID restic shows in its own tables, falling back to the full one.
    pub fn display_id(&self) -> &str {
        match &self.short_id {
            Some(short_id) => short_id,
            None => &self.id,
        }
    }
}

impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_id())?;
        if let Some(time) = &self.time {
            if let Ok(formatted) = time.format(&Rfc3339) {
                write!(f, " ({formatted})")?;
            }
        }
        Ok(())
    }
}
