// crates/suggest-core/src/list.rs

use serde::{Deserialize, Serialize};

/// What selecting an entry does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    /// A server suggestion (or a reverse-geocoded city/country). Selecting it
    /// fills the input.
    Suggestion,
    /// The synthetic "Géolocalisation" entry. Selecting it starts a position
    /// lookup and never touches the input.
    Geolocate,
    /// A fixed status line ("no match", "error"). Selecting it fills the
    /// input with its text, as any other line does.
    Message,
}

impl EntryKind {
    pub fn as_str(self) -> &'static str {
        match self {
            EntryKind::Suggestion => "suggestion",
            EntryKind::Geolocate => "geolocate",
            EntryKind::Message => "message",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub label: String,
    pub kind: EntryKind,
}

impl Entry {
    pub fn suggestion(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            kind: EntryKind::Suggestion,
        }
    }

    pub fn geolocate(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            kind: EntryKind::Geolocate,
        }
    }

    pub fn message(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            kind: EntryKind::Message,
        }
    }

    pub fn is_synthetic(&self) -> bool {
        self.kind == EntryKind::Geolocate
    }
}

/// The dropdown under an input. Always rebuilt in full, never patched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SuggestionList {
    entries: Vec<Entry>,
}

impl SuggestionList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: Vec<Entry>) -> Self {
        Self { entries }
    }

    pub fn single(entry: Entry) -> Self {
        Self {
            entries: vec![entry],
        }
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn labels(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.label.as_str()).collect()
    }

    pub fn get(&self, index: usize) -> Option<&Entry> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<'a> IntoIterator for &'a SuggestionList {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_as_a_plain_array() {
        let list = SuggestionList::from_entries(vec![
            Entry::geolocate("Géolocalisation"),
            Entry::suggestion("paris"),
        ]);
        let json = serde_json::to_string(&list).unwrap();
        assert_eq!(
            json,
            r#"[{"label":"Géolocalisation","kind":"geolocate"},{"label":"paris","kind":"suggestion"}]"#
        );
    }

    #[test]
    fn kind_names_match_serde() {
        for kind in [EntryKind::Suggestion, EntryKind::Geolocate, EntryKind::Message] {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.as_str()));
        }
    }

    #[test]
    fn only_geolocate_is_synthetic() {
        assert!(Entry::geolocate("x").is_synthetic());
        assert!(!Entry::suggestion("x").is_synthetic());
        assert!(!Entry::message("x").is_synthetic());
    }
}
