//! Section types produced by the sectionizer.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A titled span of body text extracted from the analysis document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Section title, derived from a heading line (or the default title for
    /// text preceding the first heading).
    pub title: String,

    /// Trimmed body text between this heading and the next.
    pub body: String,
}

impl Section {
    /// Create a section with an empty body.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: String::new(),
        }
    }

    /// Create a section with a body.
    pub fn with_body(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }

    /// True when the body holds no non-whitespace content.
    ///
    /// Empty-bodied sections stay in the model; presentation layers are
    /// expected to skip rendering them.
    pub fn is_blank(&self) -> bool {
        self.body.trim().is_empty()
    }
}

/// Ordered, title-keyed collection of sections.
///
/// Sections keep the order in which each distinct title was first opened.
/// Re-opening an existing title discards the body accumulated under it and
/// the later occurrence wins. This last-write-wins collapse of same-titled
/// sections is deliberate compatibility behavior, carried over from the
/// title-keyed mapping the report format was defined against.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "Vec<Section>", into = "Vec<Section>")]
pub struct SectionList {
    sections: Vec<Section>,
    index: HashMap<String, usize>,
}

impl SectionList {
    /// Create an empty section list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a section under `title` and return its slot.
    ///
    /// A new title is appended at the end; an existing title keeps its
    /// original position but has its body reset to empty.
    pub fn open(&mut self, title: &str) -> usize {
        if let Some(&slot) = self.index.get(title) {
            self.sections[slot].body.clear();
            slot
        } else {
            let slot = self.sections.len();
            self.sections.push(Section::new(title));
            self.index.insert(title.to_string(), slot);
            slot
        }
    }

    /// Append trimmed text to the section at `slot`.
    ///
    /// Appending to an already-populated body concatenates without a
    /// separator, matching the accumulation behavior of the report format.
    pub fn append(&mut self, slot: usize, text: &str) {
        if let Some(section) = self.sections.get_mut(slot) {
            section.body.push_str(text.trim());
        }
    }

    /// Insert a section wholesale: open the title and set its body.
    pub fn insert(&mut self, title: &str, body: &str) {
        let slot = self.open(title);
        self.sections[slot].body = body.to_string();
    }

    /// Get a section by title.
    pub fn get(&self, title: &str) -> Option<&Section> {
        self.index.get(title).map(|&slot| &self.sections[slot])
    }

    /// Get a section by position.
    pub fn at(&self, position: usize) -> Option<&Section> {
        self.sections.get(position)
    }

    /// Iterate sections in first-opened order.
    pub fn iter(&self) -> std::slice::Iter<'_, Section> {
        self.sections.iter()
    }

    /// Number of distinct sections.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// True when no section has been opened.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Titles in first-opened order.
    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.sections.iter().map(|s| s.title.as_str())
    }

    /// Number of sections with non-blank bodies.
    pub fn non_blank_count(&self) -> usize {
        self.sections.iter().filter(|s| !s.is_blank()).count()
    }
}

impl From<Vec<Section>> for SectionList {
    fn from(sections: Vec<Section>) -> Self {
        let mut list = SectionList::new();
        for section in sections {
            list.insert(&section.title, &section.body);
        }
        list
    }
}

impl From<SectionList> for Vec<Section> {
    fn from(list: SectionList) -> Self {
        list.sections
    }
}

impl<'a> IntoIterator for &'a SectionList {
    type Item = &'a Section;
    type IntoIter = std::slice::Iter<'a, Section>;

    fn into_iter(self) -> Self::IntoIter {
        self.sections.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_and_append() {
        let mut list = SectionList::new();
        let intro = list.open("Introduzione");
        list.append(intro, "  intro text \n");

        assert_eq!(list.len(), 1);
        assert_eq!(list.get("Introduzione").unwrap().body, "intro text");
    }

    #[test]
    fn test_reopen_resets_body() {
        let mut list = SectionList::new();
        let first = list.open("Rischi");
        list.append(first, "old body");
        let intro = list.open("Storico");
        list.append(intro, "middle");

        let second = list.open("Rischi");
        list.append(second, "new body");

        // Position is preserved, content is replaced.
        assert_eq!(list.len(), 2);
        assert_eq!(list.at(0).unwrap().title, "Rischi");
        assert_eq!(list.at(0).unwrap().body, "new body");
        assert_eq!(list.at(1).unwrap().body, "middle");
    }

    #[test]
    fn test_append_concatenates_without_separator() {
        let mut list = SectionList::new();
        let slot = list.open("Introduzione");
        list.append(slot, "first ");
        list.append(slot, " second");
        assert_eq!(list.get("Introduzione").unwrap().body, "firstsecond");
    }

    #[test]
    fn test_blank_detection() {
        let mut list = SectionList::new();
        list.open("Vuota");
        list.insert("Piena", "testo");

        assert!(list.get("Vuota").unwrap().is_blank());
        assert!(!list.get("Piena").unwrap().is_blank());
        assert_eq!(list.non_blank_count(), 1);
    }

    #[test]
    fn test_from_vec_applies_last_write_wins() {
        let list: SectionList = vec![
            Section::with_body("A", "one"),
            Section::with_body("B", "two"),
            Section::with_body("A", "three"),
        ]
        .into();

        assert_eq!(list.len(), 2);
        assert_eq!(list.at(0).unwrap().body, "three");
        assert_eq!(list.at(1).unwrap().title, "B");
    }

    #[test]
    fn test_serde_round_trip() {
        let mut list = SectionList::new();
        list.insert("Introduzione", "testo iniziale");
        list.insert("Rischi", "tasse");

        let json = serde_json::to_string(&list).unwrap();
        let back: SectionList = serde_json::from_str(&json).unwrap();

        assert_eq!(back.len(), 2);
        assert_eq!(back.get("Rischi").unwrap().body, "tasse");
        assert_eq!(back.at(0).unwrap().title, "Introduzione");
    }
}
