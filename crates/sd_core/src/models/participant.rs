use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One person in the roster.
///
/// `name` is the natural key: re-parsing a category's text matches lines back
/// to existing records by name, so `id`, `active` and `spymaster_eligible`
/// survive edits as long as the name itself is unchanged.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Participant {
    pub name: String,
    /// Stable identifier, generated once when the record is first created.
    pub id: String,
    /// Owning category.
    pub category_id: String,
    /// Whether this person may ever receive the spymaster role.
    pub spymaster_eligible: bool,
    /// Selected for team assignment.
    pub active: bool,
    /// Derived from the owning category's enabled flag. An invisible
    /// participant is never rendered and never drafted, even when `active`.
    pub visible: bool,
}

impl Participant {
    pub fn new(name: &str, category_id: &str) -> Self {
        Self {
            name: name.to_string(),
            id: Uuid::new_v4().to_string(),
            category_id: category_id.to_string(),
            spymaster_eligible: true,
            active: false,
            visible: false,
        }
    }

    /// Drafted when both dimensions agree: selected and in an enabled category.
    pub fn draftable(&self) -> bool {
        self.active && self.visible
    }

    /// Render the record back to its text-line form: `name`, `-` when not
    /// spymaster-eligible, `+` when active. The `-` always precedes the `+`.
    pub fn to_line(&self) -> String {
        let mut line = self.name.clone();
        if !self.spymaster_eligible {
            line.push('-');
        }
        if self.active {
            line.push('+');
        }
        line
    }
}

/// A raw roster line after whitespace trimming and modifier stripping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLine {
    pub name: String,
    pub spymaster_eligible: bool,
    /// `active` for a freshly created record. Never overrides an existing
    /// record's active state on re-parse.
    pub initial_active: bool,
}

impl ParsedLine {
    /// Parse one text line. Both trailing modifiers are optional and may
    /// appear in either order; each applies at most once.
    ///
    /// Returns `None` for lines that are blank after trimming and stripping.
    pub fn parse(raw: &str) -> Option<Self> {
        let mut name = raw.trim();
        let mut spymaster_eligible = true;
        let mut initial_active = false;

        loop {
            if let Some(rest) = name.strip_suffix('+') {
                if !initial_active {
                    initial_active = true;
                    name = rest;
                    continue;
                }
            }
            if let Some(rest) = name.strip_suffix('-') {
                if spymaster_eligible {
                    spymaster_eligible = false;
                    name = rest;
                    continue;
                }
            }
            break;
        }

        let name = name.trim();
        if name.is_empty() {
            return None;
        }

        Some(Self { name: name.to_string(), spymaster_eligible, initial_active })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_name() {
        let parsed = ParsedLine::parse("Alice").unwrap();
        assert_eq!(parsed.name, "Alice");
        assert!(parsed.spymaster_eligible);
        assert!(!parsed.initial_active);
    }

    #[test]
    fn test_parse_active_modifier() {
        let parsed = ParsedLine::parse("Alice+").unwrap();
        assert_eq!(parsed.name, "Alice");
        assert!(parsed.initial_active);
    }

    #[test]
    fn test_parse_no_spymaster_modifier() {
        let parsed = ParsedLine::parse("Yihezkel-").unwrap();
        assert_eq!(parsed.name, "Yihezkel");
        assert!(!parsed.spymaster_eligible);
        assert!(!parsed.initial_active);
    }

    #[test]
    fn test_parse_both_modifiers_either_order() {
        for raw in ["Bob-+", "Bob+-"] {
            let parsed = ParsedLine::parse(raw).unwrap();
            assert_eq!(parsed.name, "Bob", "raw line: {}", raw);
            assert!(!parsed.spymaster_eligible, "raw line: {}", raw);
            assert!(parsed.initial_active, "raw line: {}", raw);
        }
    }

    #[test]
    fn test_parse_modifier_applies_once() {
        // A second trailing '+' belongs to the name, not the modifier.
        let parsed = ParsedLine::parse("C++").unwrap();
        assert_eq!(parsed.name, "C+");
        assert!(parsed.initial_active);
    }

    #[test]
    fn test_parse_blank_lines_discarded() {
        assert!(ParsedLine::parse("").is_none());
        assert!(ParsedLine::parse("   ").is_none());
        assert!(ParsedLine::parse("+").is_none());
        assert!(ParsedLine::parse("-+").is_none());
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let parsed = ParsedLine::parse("  Keren  ").unwrap();
        assert_eq!(parsed.name, "Keren");
    }

    #[test]
    fn test_line_roundtrip() {
        let mut p = Participant::new("Bob", "cat");
        p.spymaster_eligible = false;
        p.active = true;
        assert_eq!(p.to_line(), "Bob-+");

        let parsed = ParsedLine::parse(&p.to_line()).unwrap();
        assert_eq!(parsed.name, "Bob");
        assert!(!parsed.spymaster_eligible);
        assert!(parsed.initial_active);
    }

    #[test]
    fn test_ids_are_unique() {
        let a = Participant::new("Same", "cat");
        let b = Participant::new("Same", "cat");
        assert_ne!(a.id, b.id);
    }
}
