use serde::{Deserialize, Serialize};

use super::entry::Entry;

/// Ordered set of entries for one (locale, domain) pair.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    #[serde(default)]
    pub locale: String,

    #[serde(default)]
    pub domain: String,

    #[serde(default)]
    pub entries: Vec<Entry>,
}

impl Catalog {
    pub fn new(locale: impl Into<String>, domain: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            domain: domain.into(),
            entries: Vec::new(),
        }
    }

    pub fn with_entry(mut self, entry: Entry) -> Self {
        self.entries.push(entry);
        self
    }

    pub fn find(&self, context: Option<&str>, original: &str) -> Option<&Entry> {
        self.entries
            .iter()
            .find(|e| e.context.as_deref() == context && e.original == original)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
