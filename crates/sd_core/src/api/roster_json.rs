use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};
use crate::models::{Category, Participant};
use crate::roster::Roster;
use crate::SCHEMA_VERSION;

#[derive(Debug, Deserialize)]
pub struct RosterRequest {
    pub schema_version: u8,
    /// Category label -> raw text lines, the persisted shape.
    pub name_lists: BTreeMap<String, Vec<String>>,
}

#[derive(Debug, Serialize)]
pub struct RosterResponse {
    pub schema_version: u8,
    pub categories: Vec<Category>,
    pub participants: Vec<Participant>,
}

/// Build a roster snapshot from a name-lists config.
///
/// JSON in, JSON out; the presentation layer never touches core types
/// directly.
pub fn load_roster_json(request: &str) -> Result<String> {
    let request: RosterRequest = serde_json::from_str(request)?;
    if request.schema_version != SCHEMA_VERSION {
        return Err(CoreError::InvalidParameter(format!(
            "unsupported schema_version {}",
            request.schema_version
        )));
    }

    let roster = Roster::from_config(&request.name_lists);
    let response = RosterResponse {
        schema_version: SCHEMA_VERSION,
        categories: roster.categories,
        participants: roster.participants,
    };
    Ok(serde_json::to_string(&response)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_load_roster_roundtrip() {
        let request = json!({
            "schema_version": 1,
            "name_lists": {
                "common+": ["Alice+", "Bob-+", "Carol"],
                "additional": ["Ron"]
            }
        });

        let response = load_roster_json(&request.to_string()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&response).unwrap();

        assert_eq!(parsed["schema_version"], 1);
        assert_eq!(parsed["categories"].as_array().unwrap().len(), 2);
        assert_eq!(parsed["participants"].as_array().unwrap().len(), 4);

        let bob = parsed["participants"]
            .as_array()
            .unwrap()
            .iter()
            .find(|p| p["name"] == "Bob")
            .unwrap();
        assert_eq!(bob["active"], true);
        assert_eq!(bob["spymaster_eligible"], false);
        assert_eq!(bob["visible"], true);
    }

    #[test]
    fn test_wrong_schema_version_rejected() {
        let request = json!({ "schema_version": 9, "name_lists": {} });
        let err = load_roster_json(&request.to_string()).unwrap_err();
        assert!(matches!(err, CoreError::InvalidParameter(_)));
    }

    #[test]
    fn test_malformed_request_rejected() {
        assert!(load_roster_json("{").is_err());

        // Wrong field type is a data error.
        let request = json!({ "schema_version": "one", "name_lists": {} });
        let err = load_roster_json(&request.to_string()).unwrap_err();
        assert!(matches!(err, CoreError::DeserializationError(_)));
    }
}
