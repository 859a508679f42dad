use serde::{Deserialize, Serialize};

use crate::draft::partition;
use crate::error::{CoreError, Result};
use crate::models::{Participant, TeamTable};
use crate::SCHEMA_VERSION;

#[derive(Debug, Deserialize)]
pub struct DraftRequest {
    pub schema_version: u8,
    pub seed: u64,
    pub team_count: usize,
    /// Team label to favor; an unmatched label (e.g. "random") picks a
    /// column from the seeded RNG.
    pub bias: String,
    pub colors: Vec<String>,
    pub participants: Vec<Participant>,
}

#[derive(Debug, Serialize)]
pub struct DraftResponse {
    pub schema_version: u8,
    pub seed: u64,
    /// Column labels actually used, `colors` truncated to `team_count`.
    pub team_labels: Vec<String>,
    pub teams: TeamTable,
}

/// Draft the submitted participants into teams.
///
/// The caller is responsible for clamping `team_count` to
/// `[2, colors.len()]`; out-of-range requests come back as errors.
pub fn draft_teams_json(request: &str) -> Result<String> {
    let request: DraftRequest = serde_json::from_str(request)?;
    if request.schema_version != SCHEMA_VERSION {
        return Err(CoreError::InvalidParameter(format!(
            "unsupported schema_version {}",
            request.schema_version
        )));
    }

    let teams = partition(
        &request.participants,
        request.team_count,
        &request.bias,
        &request.colors,
        request.seed,
    )?;

    let response = DraftResponse {
        schema_version: SCHEMA_VERSION,
        seed: request.seed,
        team_labels: request.colors[..request.team_count].to_vec(),
        teams,
    };
    Ok(serde_json::to_string(&response)?)
}
