use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A named, independently toggleable group of participants.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    /// Stable identifier, distinct from the editable display name.
    pub id: String,
    pub display_name: String,
    /// Controls `visible` for every participant this category owns.
    pub enabled: bool,
}

impl Category {
    pub fn new(display_name: &str, enabled: bool) -> Self {
        Self {
            // Display-name prefix keeps ids readable in saved blobs and logs.
            id: format!("{}{}", display_name, Uuid::new_v4()),
            display_name: display_name.to_string(),
            enabled,
        }
    }

    /// Parse a persisted label. A trailing `+` enables the category and is
    /// stripped from the stored display name.
    pub fn from_label(label: &str) -> Self {
        match label.strip_suffix('+') {
            Some(name) => Self::new(name, true),
            None => Self::new(label, false),
        }
    }

    /// Inverse of [`Category::from_label`].
    pub fn to_label(&self) -> String {
        if self.enabled {
            format!("{}+", self.display_name)
        } else {
            self.display_name.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_enables_category() {
        let cat = Category::from_label("common+");
        assert_eq!(cat.display_name, "common");
        assert!(cat.enabled);
    }

    #[test]
    fn test_plain_label_stays_disabled() {
        let cat = Category::from_label("additional");
        assert_eq!(cat.display_name, "additional");
        assert!(!cat.enabled);
    }

    #[test]
    fn test_label_roundtrip() {
        let enabled = Category::from_label("regulars+");
        assert_eq!(enabled.to_label(), "regulars+");

        let disabled = Category::from_label("guests");
        assert_eq!(disabled.to_label(), "guests");
    }

    #[test]
    fn test_id_distinct_from_name() {
        let a = Category::new("guests", false);
        let b = Category::new("guests", false);
        assert_ne!(a.id, b.id);
        assert!(a.id.starts_with("guests"));
    }
}
