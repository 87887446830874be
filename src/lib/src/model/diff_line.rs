use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::model::ChangeModifier;

/// One line of the newline delimited stream `restic diff --json` prints.
///
/// Change messages carry a path and a modifier. Everything else (restic
/// closes the stream with a statistics message) decodes to [`DiffLine::Other`]
/// and is skipped upstream.
#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(tag = "message_type")]
pub enum DiffLine {
    #[serde(rename = "change")]
    Change(ChangeEntry),
    #[serde(other)]
    Other,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct ChangeEntry {
    pub path: PathBuf,
    pub modifier: ChangeModifier,
}
