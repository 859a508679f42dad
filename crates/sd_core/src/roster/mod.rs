//! Roster synchronization.
//!
//! Converts per-category free-text name lists plus per-category enabled flags
//! into an identity-preserving collection of [`Participant`] records, and
//! derives the inverse free-text representation for display and editing.
//!
//! Every operation except [`Roster::bulk_set_active`] is a pure function from
//! the prior snapshot to a new one; callers replace their state wholesale.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};
use crate::filter;
use crate::models::{Category, ParsedLine, Participant};

/// The full roster snapshot: categories and the participants they own.
///
/// Participants are kept in insertion order: line order of the most recent
/// reparse for the edited category, prior relative order for everyone else.
/// That order is what makes [`Roster::to_text`] deterministic and idempotent
/// through [`Roster::reparse_category`].
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Roster {
    pub categories: Vec<Category>,
    pub participants: Vec<Participant>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a roster from the persisted shape: category label mapped to raw
    /// text lines. Labels ending in `+` load their category enabled.
    pub fn from_config(config: &BTreeMap<String, Vec<String>>) -> Self {
        let mut roster = Self::new();
        for (label, lines) in config {
            let category = Category::from_label(label);
            let id = category.id.clone();
            roster.categories.push(category);
            roster = roster
                .reparse_category(&id, lines)
                .expect("category inserted above is present");
        }
        roster
    }

    /// Inverse of [`Roster::from_config`]: current display names (suffixed
    /// `+` when enabled) mapped to the `to_text` lines. Categories that own
    /// no participants serialize to an empty list.
    pub fn to_config(&self) -> BTreeMap<String, Vec<String>> {
        let mut config = BTreeMap::new();
        for category in &self.categories {
            let lines: Vec<String> = self
                .participants
                .iter()
                .filter(|p| p.category_id == category.id)
                .map(Participant::to_line)
                .collect();
            config.insert(category.to_label(), lines);
        }
        config
    }

    // ========================
    // Lookup
    // ========================

    pub fn get_category(&self, category_id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == category_id)
    }

    pub fn get_participant(&self, name: &str) -> Option<&Participant> {
        self.participants.iter().find(|p| p.name == name)
    }

    /// Participants owned by one category, in record order.
    pub fn participants_of<'a>(
        &'a self,
        category_id: &'a str,
    ) -> impl Iterator<Item = &'a Participant> + 'a {
        self.participants.iter().filter(move |p| p.category_id == category_id)
    }

    fn require_category(&self, category_id: &str) -> Result<&Category> {
        self.get_category(category_id)
            .ok_or_else(|| CoreError::NotFound(format!("category {}", category_id)))
    }

    // ========================
    // Text synchronization
    // ========================

    /// Re-parse one category's text into participant records.
    ///
    /// Non-blank lines are matched back to the prior state by name: a record
    /// with the same name anywhere in the roster keeps its `id` and `active`
    /// and is claimed by this category. `spymaster_eligible` comes from the
    /// line's trailing `-` on every parse; `visible` comes from the live
    /// category-enabled flag. A trailing `+` only sets `active` on first
    /// creation. Participants of other categories carry over unchanged, and
    /// records of this category missing from `lines` are destroyed.
    ///
    /// Duplicate names within `lines` resolve last-write-wins.
    pub fn reparse_category(&self, category_id: &str, lines: &[String]) -> Result<Roster> {
        let enabled = self.require_category(category_id)?.enabled;

        let mut merged: Vec<Participant> = Vec::new();
        for raw in lines {
            let parsed = match ParsedLine::parse(raw) {
                Some(parsed) => parsed,
                None => continue,
            };

            let record = match self.get_participant(&parsed.name) {
                Some(prior) => Participant {
                    name: prior.name.clone(),
                    id: prior.id.clone(),
                    category_id: category_id.to_string(),
                    spymaster_eligible: parsed.spymaster_eligible,
                    active: prior.active,
                    visible: enabled,
                },
                None => {
                    let mut fresh = Participant::new(&parsed.name, category_id);
                    fresh.spymaster_eligible = parsed.spymaster_eligible;
                    fresh.active = parsed.initial_active;
                    fresh.visible = enabled;
                    fresh
                }
            };

            match merged.iter_mut().find(|p| p.name == record.name) {
                Some(slot) => *slot = record,
                None => merged.push(record),
            }
        }

        // Everyone outside the edited category survives untouched, unless a
        // line above claimed their name for this category.
        for other in &self.participants {
            if other.category_id != category_id && !merged.iter().any(|p| p.name == other.name) {
                merged.push(other.clone());
            }
        }

        Ok(Roster { categories: self.categories.clone(), participants: merged })
    }

    /// Render one category's participants back to editable text, one
    /// `name[-][+]` line per record, in record order.
    pub fn to_text(&self, category_id: &str) -> Result<String> {
        self.require_category(category_id)?;
        let lines: Vec<String> = self.participants_of(category_id).map(Participant::to_line).collect();
        Ok(lines.join("\n"))
    }

    // ========================
    // Toggles and selection
    // ========================

    /// Flip a category's enabled flag and recompute `visible` for every
    /// participant it owns. `active` is never touched.
    pub fn set_category_enabled(&self, category_id: &str, enabled: bool) -> Result<Roster> {
        self.require_category(category_id)?;
        let mut next = self.clone();
        for category in &mut next.categories {
            if category.id == category_id {
                category.enabled = enabled;
            }
        }
        for participant in &mut next.participants {
            if participant.category_id == category_id {
                participant.visible = enabled;
            }
        }
        log::debug!("category {} enabled={}", category_id, enabled);
        Ok(next)
    }

    /// Set `active` for exactly the named participants; everyone else is
    /// untouched. In-place: the caller owns this snapshot alone.
    pub fn bulk_set_active(&mut self, names: &[String], value: bool) {
        for participant in &mut self.participants {
            if names.iter().any(|n| n == &participant.name) {
                participant.active = value;
            }
        }
    }

    /// Names of visible participants the filter keeps, feeding the
    /// select-all / select-none actions.
    pub fn visible_names_matching(&self, pattern: &str) -> Vec<String> {
        self.participants
            .iter()
            .filter(|p| p.visible && filter::matches(&p.name, pattern))
            .map(|p| p.name.clone())
            .collect()
    }

    /// Participants eligible for the next draft.
    pub fn draftable(&self) -> Vec<Participant> {
        self.participants.iter().filter(|p| p.draftable()).cloned().collect()
    }

    // ========================
    // Category lifecycle
    // ========================

    /// Create a new, initially enabled category with no participants.
    pub fn add_category(&self, display_name: &str) -> Roster {
        let mut next = self.clone();
        next.categories.push(Category::new(display_name, true));
        next
    }

    /// Rename a category; its id and participants are unchanged.
    pub fn rename_category(&self, category_id: &str, display_name: &str) -> Result<Roster> {
        self.require_category(category_id)?;
        let mut next = self.clone();
        for category in &mut next.categories {
            if category.id == category_id {
                category.display_name = display_name.to_string();
            }
        }
        Ok(next)
    }

    /// Delete a category and every participant it owns.
    pub fn delete_category(&self, category_id: &str) -> Result<Roster> {
        self.require_category(category_id)?;
        let mut next = self.clone();
        next.categories.retain(|c| c.id != category_id);
        next.participants.retain(|p| p.category_id != category_id);
        log::debug!("category {} deleted", category_id);
        Ok(next)
    }
}
