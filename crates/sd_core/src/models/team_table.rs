use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Participant;

/// One slot in the drafted team table.
///
/// Placeholder cells pad the final row to uniform width; they carry an empty
/// name, `active = false` and a fresh id so table renderers can still key on
/// the cell.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TeamCell {
    pub id: String,
    pub name: String,
    pub active: bool,
    pub spymaster_eligible: bool,
    /// Chosen as spymaster for this team in the most recent draft. Only cells
    /// in row 0 ever carry this flag.
    pub is_spymaster: bool,
}

impl TeamCell {
    pub fn from_participant(p: &Participant) -> Self {
        Self {
            id: p.id.clone(),
            name: p.name.clone(),
            active: p.active,
            spymaster_eligible: p.spymaster_eligible,
            is_spymaster: false,
        }
    }

    pub fn placeholder() -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: String::new(),
            active: false,
            spymaster_eligible: false,
            is_spymaster: false,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        !self.active
    }
}

/// Row-major draft result. Every row has exactly `team_count` cells; column
/// `j` of each row belongs to team `j`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TeamTable {
    pub rows: Vec<Vec<TeamCell>>,
}

impl TeamTable {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Uniform row width, or 0 for an empty table.
    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    /// Names of the drafted spymasters, one at most per column.
    pub fn spymasters(&self) -> Vec<&str> {
        self.rows
            .iter()
            .flatten()
            .filter(|c| c.is_spymaster)
            .map(|c| c.name.as_str())
            .collect()
    }

    /// All real (non-placeholder) cells in row-major order.
    pub fn members(&self) -> impl Iterator<Item = &TeamCell> {
        self.rows.iter().flatten().filter(|c| !c.is_placeholder())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_cell() {
        let cell = TeamCell::placeholder();
        assert!(cell.is_placeholder());
        assert!(cell.name.is_empty());
        assert!(!cell.id.is_empty());
        assert!(!cell.is_spymaster);
    }

    #[test]
    fn test_cell_from_participant_keeps_identity() {
        let mut p = Participant::new("Ran", "cat");
        p.active = true;
        let cell = TeamCell::from_participant(&p);
        assert_eq!(cell.id, p.id);
        assert_eq!(cell.name, "Ran");
        assert!(!cell.is_placeholder());
    }

    #[test]
    fn test_empty_table() {
        let table = TeamTable::default();
        assert!(table.is_empty());
        assert_eq!(table.width(), 0);
        assert!(table.spymasters().is_empty());
    }
}
