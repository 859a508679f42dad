use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::error::SaveError;
use super::SAVE_VERSION;
use crate::roster::Roster;

/// The persisted roster: category labels (suffixed `+` when enabled) mapped
/// to their raw text lines. This is the only shape storage ever sees; the
/// storage collaborator has no semantics beyond keeping the blob.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RosterSave {
    /// Save format version for compatibility checks.
    pub version: u32,

    /// Save timestamp (unix milliseconds).
    pub timestamp: u64,

    /// Category label -> ordered raw lines.
    pub name_lists: BTreeMap<String, Vec<String>>,
}

impl Default for RosterSave {
    fn default() -> Self {
        Self::new()
    }
}

impl RosterSave {
    pub fn new() -> Self {
        Self { version: SAVE_VERSION, timestamp: current_timestamp(), name_lists: BTreeMap::new() }
    }

    pub fn from_roster(roster: &Roster) -> Self {
        Self {
            version: SAVE_VERSION,
            timestamp: current_timestamp(),
            name_lists: roster.to_config(),
        }
    }

    pub fn to_roster(&self) -> Roster {
        Roster::from_config(&self.name_lists)
    }

    pub fn update_timestamp(&mut self) {
        self.timestamp = current_timestamp();
    }

    pub fn validate(&self) -> Result<(), SaveError> {
        if self.version != SAVE_VERSION {
            return Err(SaveError::VersionMismatch { found: self.version, expected: SAVE_VERSION });
        }
        Ok(())
    }
}

/// Encode the save as the flat JSON text blob.
pub fn serialize_save(save: &RosterSave) -> Result<String, SaveError> {
    serde_json::to_string_pretty(save).map_err(SaveError::Serialization)
}

/// Decode a stored blob and check its version.
pub fn deserialize_save(blob: &str) -> Result<RosterSave, SaveError> {
    let save: RosterSave = serde_json::from_str(blob).map_err(SaveError::Deserialization)?;
    save.validate()?;
    Ok(save)
}

/// Unix milliseconds.
pub fn current_timestamp() -> u64 {
    (OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000) as u64
}
