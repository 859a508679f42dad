//! Name filtering for the roster view.
//!
//! The filter text is treated as a case-insensitive literal. Whatever the
//! user types, matching degrades gracefully; it never fails past this
//! boundary.

/// A participant name split around the matched filter text, original casing
/// preserved. The UI bolds `hit` between `prefix` and `suffix`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameMatch {
    pub prefix: String,
    pub hit: String,
    pub suffix: String,
}

/// Locate `pattern` in `name`, case-insensitively.
///
/// An empty pattern matches every name with an empty hit. `None` means the
/// name should be hidden from the filtered view.
pub fn match_name(name: &str, pattern: &str) -> Option<NameMatch> {
    if pattern.is_empty() {
        return Some(NameMatch {
            prefix: name.to_string(),
            hit: String::new(),
            suffix: String::new(),
        });
    }

    let lower_name = name.to_lowercase();
    let lower_pattern = pattern.to_lowercase();
    let start = lower_name.find(&lower_pattern)?;
    let end = start + lower_pattern.len();

    // Lowercasing can change byte lengths for non-ASCII input; fall back to
    // a whole-name hit when the located range does not line up with the
    // original string's character boundaries.
    if !name.is_char_boundary(start) || !name.is_char_boundary(end) || end > name.len() {
        return Some(NameMatch {
            prefix: String::new(),
            hit: name.to_string(),
            suffix: String::new(),
        });
    }

    Some(NameMatch {
        prefix: name[..start].to_string(),
        hit: name[start..end].to_string(),
        suffix: name[end..].to_string(),
    })
}

/// True when the name survives the filter.
pub fn matches(name: &str, pattern: &str) -> bool {
    match_name(name, pattern).is_some()
}
