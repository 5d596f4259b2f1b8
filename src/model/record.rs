use serde::{Deserialize, Serialize};

use super::entry::{Entry, Reference};
use crate::services::fingerprint;

/// Persisted form of an [`Entry`], scoped to its locale and domain.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct MessageRecord {
    pub key: String,

    pub locale: String,
    pub domain: String,

    #[serde(default)]
    pub context: Option<String>,

    #[serde(default)]
    pub original: String,

    #[serde(default)]
    pub original_plural: Option<String>,

    #[serde(default)]
    pub translation: String,

    #[serde(default)]
    pub plural_translations: Vec<String>,

    #[serde(default)]
    pub references: Vec<Reference>,

    #[serde(default)]
    pub comments: Vec<String>,

    #[serde(default)]
    pub extracted_comments: Vec<String>,

    #[serde(default)]
    pub is_disabled: bool,

    #[serde(default)]
    pub has_original_translation: bool,

    #[serde(default)]
    pub requires_translating: bool,
}

impl MessageRecord {
    /// Derived flags start out false; the storage layer sets them.
    pub fn from_entry(locale: &str, domain: &str, entry: &Entry) -> Self {
        Self {
            key: fingerprint::key(locale, domain, entry.context.as_deref(), &entry.original),
            locale: locale.to_string(),
            domain: domain.to_string(),
            context: entry.context.clone(),
            original: entry.original.clone(),
            original_plural: entry.original_plural.clone(),
            translation: entry.translation.clone(),
            plural_translations: entry.plural_translations.clone(),
            references: entry.references.clone(),
            comments: entry.comments.clone(),
            extracted_comments: entry.extracted_comments.clone(),
            is_disabled: entry.is_disabled,
            has_original_translation: false,
            requires_translating: false,
        }
    }

    pub fn to_entry(&self) -> Entry {
        Entry {
            context: self.context.clone(),
            original: self.original.clone(),
            original_plural: self.original_plural.clone(),
            translation: self.translation.clone(),
            plural_translations: self.plural_translations.clone(),
            references: self.references.clone(),
            comments: self.comments.clone(),
            extracted_comments: self.extracted_comments.clone(),
            is_disabled: self.is_disabled,
        }
    }
}
