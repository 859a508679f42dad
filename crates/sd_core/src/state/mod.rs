//! Application state for one organizer session.
//!
//! Single-threaded and event-driven: every entry point runs to completion,
//! replacing the roster snapshot wholesale before the next event arrives.
//! `AppState` owns the current [`Roster`], the [`DraftSession`] seed state
//! and the draft settings, and converts to and from [`RosterSave`] for
//! persistence.

use serde::{Deserialize, Serialize};

use crate::draft::{DraftSession, MIN_TEAM_COUNT};
use crate::error::Result;
use crate::models::TeamTable;
use crate::roster::Roster;
use crate::save::RosterSave;

/// Team colors offered to the organizer, in column order.
pub const DEFAULT_COLORS: [&str; 7] =
    ["red", "blue", "green", "yellow", "indigo", "purple", "pink"];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppState {
    pub roster: Roster,
    pub draft: DraftSession,
    pub team_count: usize,
    pub bias: String,
    pub colors: Vec<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self {
            roster: Roster::new(),
            draft: DraftSession::new(),
            team_count: MIN_TEAM_COUNT,
            bias: DEFAULT_COLORS[0].to_string(),
            colors: DEFAULT_COLORS.iter().map(|c| c.to_string()).collect(),
        }
    }

    /// Restore a session from the persisted blob.
    pub fn from_save(save: &RosterSave) -> Self {
        let mut state = Self::new();
        state.roster = save.to_roster();
        state.draft.roster_changed();
        state
    }

    /// Snapshot the roster for persistence.
    pub fn to_save(&self) -> RosterSave {
        RosterSave::from_roster(&self.roster)
    }

    // ========================
    // Roster events
    // ========================

    /// One category's textarea content changed.
    pub fn edit_category(&mut self, category_id: &str, text: &str) -> Result<()> {
        let lines: Vec<String> = text.lines().map(str::to_string).collect();
        self.roster = self.roster.reparse_category(category_id, &lines)?;
        self.draft.roster_changed();
        Ok(())
    }

    /// One category's enable checkbox changed.
    pub fn toggle_category(&mut self, category_id: &str, enabled: bool) -> Result<()> {
        self.roster = self.roster.set_category_enabled(category_id, enabled)?;
        self.draft.roster_changed();
        Ok(())
    }

    pub fn add_category(&mut self, display_name: &str) {
        self.roster = self.roster.add_category(display_name);
    }

    pub fn rename_category(&mut self, category_id: &str, display_name: &str) -> Result<()> {
        self.roster = self.roster.rename_category(category_id, display_name)?;
        Ok(())
    }

    pub fn delete_category(&mut self, category_id: &str) -> Result<()> {
        self.roster = self.roster.delete_category(category_id)?;
        self.draft.roster_changed();
        Ok(())
    }

    /// Select-all / select-none over the filtered, visible participants.
    pub fn set_all_active(&mut self, filter: &str, value: bool) {
        let names = self.roster.visible_names_matching(filter);
        self.roster.bulk_set_active(&names, value);
        self.draft.roster_changed();
    }

    /// Toggle one participant's selection.
    pub fn set_active(&mut self, name: &str, value: bool) {
        self.roster.bulk_set_active(&[name.to_string()], value);
        self.draft.roster_changed();
    }

    // ========================
    // Draft settings
    // ========================

    /// Clamped to `[2, colors.len()]`; the partitioner itself rejects
    /// out-of-range counts, this boundary is where clamping belongs.
    pub fn set_team_count(&mut self, team_count: usize) {
        self.team_count = team_count.clamp(MIN_TEAM_COUNT, self.colors.len());
    }

    pub fn set_bias(&mut self, bias: &str) {
        self.bias = bias.to_string();
    }

    /// The organizer clicked re-roll. A frozen session reuses its seed and
    /// reproduces the same table.
    pub fn reroll(&mut self) {
        self.draft.roster_changed();
    }

    pub fn set_frozen(&mut self, frozen: bool) {
        self.draft.set_frozen(frozen);
    }

    /// Recompute the team table for the current roster and settings.
    pub fn current_table(&mut self) -> Result<TeamTable> {
        let squad = self.roster.draftable();
        let table = self.draft.partition_with(&squad, self.team_count, &self.bias, &self.colors)?;
        Ok(table)
    }
}
