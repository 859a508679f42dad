//! Seeded team partitioning.
//!
//! Takes the visible+active participant set, a team count and a color bias,
//! and produces an ordered team table with one spymaster flagged per team
//! where possible. The whole draft is a pure function of its inputs and the
//! seed: same seed, same table.

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DraftError;
use crate::models::{Participant, TeamCell, TeamTable};

/// Fewer than two teams is not a draft.
pub const MIN_TEAM_COUNT: usize = 2;

/// Partition the draftable participants into `team_count` teams.
///
/// Pipeline: filter to `active && visible`, Fisher-Yates shuffle seeded with
/// `seed`, stable-partition spymaster candidates to the front, chunk into
/// rows of `team_count` (last row padded with placeholders), flag row-0
/// spymasters, then apply the bias correction: if the `bias` column's cell in
/// the last row is a placeholder, swap it with the first real cell in that
/// row.
///
/// The bias column is `bias`'s position within `colors[..team_count]`; an
/// unmatched label (e.g. "random") draws the column from the same seeded RNG,
/// keeping the result reproducible.
///
/// `team_count` must already be clamped to `[2, colors.len()]` by the caller;
/// out-of-range values are an error, not a silent adjustment. Zero draftable
/// participants yield an empty table.
pub fn partition(
    participants: &[Participant],
    team_count: usize,
    bias: &str,
    colors: &[String],
    seed: u64,
) -> Result<TeamTable, DraftError> {
    if colors.is_empty() {
        return Err(DraftError::EmptyColorList);
    }
    if team_count < MIN_TEAM_COUNT || team_count > colors.len() {
        return Err(DraftError::InvalidTeamCount {
            min: MIN_TEAM_COUNT,
            max: colors.len(),
            found: team_count,
        });
    }

    let mut pool: Vec<&Participant> = participants.iter().filter(|p| p.draftable()).collect();
    if pool.is_empty() {
        return Ok(TeamTable::default());
    }

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    pool.shuffle(&mut rng);

    // Stable partition, not a resort: spymaster candidates move to the front
    // while both halves keep their relative shuffle order.
    let (mut ordered, rest): (Vec<&Participant>, Vec<&Participant>) =
        pool.into_iter().partition(|p| p.spymaster_eligible);
    ordered.extend(rest);

    let mut rows: Vec<Vec<TeamCell>> = Vec::new();
    for chunk in ordered.chunks(team_count) {
        let mut row: Vec<TeamCell> = chunk.iter().map(|p| TeamCell::from_participant(p)).collect();
        // Placeholder ids come from the seeded RNG so a fixed seed yields a
        // bit-identical table.
        row.resize_with(team_count, || {
            let mut cell = TeamCell::placeholder();
            cell.id = Uuid::from_u128(rng.gen()).to_string();
            cell
        });
        rows.push(row);
    }

    // Candidates were front-loaded, so row 0 holds the strongest spymaster
    // coverage the roster allows. Only row 0 is ever flagged.
    for cell in &mut rows[0] {
        cell.is_spymaster = cell.spymaster_eligible;
    }

    let bias_index = colors[..team_count]
        .iter()
        .position(|c| c == bias)
        .unwrap_or_else(|| rng.gen_range(0..team_count));

    let last = rows.len() - 1;
    if rows[last][bias_index].is_placeholder() {
        if let Some(first_real) = rows[last].iter().position(|c| !c.is_placeholder()) {
            rows[last].swap(bias_index, first_real);
        }
    }

    log::debug!(
        "drafted {} participants into {} teams (seed {})",
        rows.iter().flatten().filter(|c| !c.is_placeholder()).count(),
        team_count,
        seed
    );

    Ok(TeamTable { rows })
}

/// Lifecycle of one draft's randomness.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum DraftPhase {
    /// No roster seen yet.
    Idle,
    /// A seed is chosen; the table is stale or absent.
    Seeded,
    /// The table was computed from the current seed and inputs.
    Partitioned,
}

/// Seed state for recomputing drafts.
///
/// The seed is an explicit stored value, not hidden generator state: freezing
/// means "reuse the stored seed across roster changes", unfreezing means
/// "draw a fresh one on every change". Either way the table itself comes from
/// [`partition`], a pure function of the seed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DraftSession {
    pub seed: u64,
    pub frozen: bool,
    pub phase: DraftPhase,
}

impl Default for DraftSession {
    fn default() -> Self {
        Self::new()
    }
}

impl DraftSession {
    pub fn new() -> Self {
        Self { seed: 0, frozen: false, phase: DraftPhase::Idle }
    }

    /// Start from a known seed, e.g. to replay a published draft.
    pub fn with_seed(seed: u64) -> Self {
        Self { seed, frozen: false, phase: DraftPhase::Seeded }
    }

    /// The participant set changed (edit, toggle, or an explicit re-roll).
    /// Draws a fresh seed unless frozen; a frozen session reuses its seed and
    /// will reproduce the same table for the same roster.
    pub fn roster_changed(&mut self) {
        if !self.frozen {
            self.seed = rand::random();
        }
        self.phase = DraftPhase::Seeded;
    }

    /// Switch the seed source. Does not force a new draw by itself.
    pub fn set_frozen(&mut self, frozen: bool) {
        self.frozen = frozen;
    }

    /// Recompute the table from the stored seed.
    pub fn partition_with(
        &mut self,
        participants: &[Participant],
        team_count: usize,
        bias: &str,
        colors: &[String],
    ) -> Result<TeamTable, DraftError> {
        let table = partition(participants, team_count, bias, colors, self.seed)?;
        self.phase = DraftPhase::Partitioned;
        Ok(table)
    }
}
