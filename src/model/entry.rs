use serde::{Deserialize, Serialize};

/// Source location a message was extracted from.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Reference {
    pub file: String,

    #[serde(default)]
    pub line: Option<u32>,
}

impl Reference {
    pub fn new(file: impl Into<String>, line: Option<u32>) -> Self {
        Self {
            file: file.into(),
            line,
        }
    }
}

/// One translatable message. Locale and domain belong to the owning catalog.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct Entry {
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
}

impl Entry {
    pub fn new(context: Option<&str>, original: impl Into<String>) -> Self {
        Self {
            context: context.map(str::to_string),
            original: original.into(),
            ..Self::default()
        }
    }

    pub fn with_plural(mut self, original_plural: impl Into<String>) -> Self {
        self.original_plural = Some(original_plural.into());
        self
    }

    pub fn with_translation(mut self, translation: impl Into<String>) -> Self {
        self.translation = translation.into();
        self
    }

    pub fn with_plural_translations<I, S>(mut self, forms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.plural_translations = forms.into_iter().map(Into::into).collect();
        self
    }

    pub fn has_translation(&self) -> bool {
        !self.translation.is_empty()
    }

    pub fn has_plural(&self) -> bool {
        self.original_plural
            .as_deref()
            .map(|p| !p.is_empty())
            .unwrap_or(false)
    }

    pub fn non_empty_plural_translations(&self) -> usize {
        self.plural_translations
            .iter()
            .filter(|t| !t.is_empty())
            .count()
    }

    /// Lays `incoming` over `self` and returns the merged value.
    ///
    /// Stored translations survive unless the incoming entry carries
    /// non-empty ones. Source metadata (references, comments, disabled state)
    /// always comes from the incoming entry.
    pub fn merged_with(&self, incoming: &Entry) -> Entry {
        let translation = if incoming.has_translation() {
            incoming.translation.clone()
        } else {
            self.translation.clone()
        };

        let plural_translations = if incoming.non_empty_plural_translations() > 0 {
            incoming.plural_translations.clone()
        } else {
            self.plural_translations.clone()
        };

        let original_plural = if incoming.has_plural() {
            incoming.original_plural.clone()
        } else {
            self.original_plural.clone()
        };

        Entry {
            context: self.context.clone(),
            original: self.original.clone(),
            original_plural,
            translation,
            plural_translations,
            references: incoming.references.clone(),
            comments: incoming.comments.clone(),
            extracted_comments: incoming.extracted_comments.clone(),
            is_disabled: incoming.is_disabled,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stored() -> Entry {
        Entry {
            references: vec![Reference::new("old.php", Some(3))],
            comments: vec!["old note".into()],
            ..Entry::new(Some("menu"), "File")
                .with_plural("Files")
                .with_translation("Failas")
                .with_plural_translations(["Failas", "Failai", "Failų"])
        }
    }

    #[test]
    fn has_plural_ignores_empty_plural_text() {
        assert!(!Entry::new(None, "x").has_plural());
        assert!(!Entry::new(None, "x").with_plural("").has_plural());
        assert!(Entry::new(None, "x").with_plural("xs").has_plural());
    }

    #[test]
    fn merge_keeps_stored_translation_when_incoming_is_empty() {
        let incoming = Entry {
            references: vec![Reference::new("new.php", Some(10))],
            ..Entry::new(Some("menu"), "File")
        };

        let merged = stored().merged_with(&incoming);

        assert_eq!(merged.translation, "Failas");
        assert_eq!(merged.plural_translations, vec!["Failas", "Failai", "Failų"]);
        assert_eq!(merged.original_plural.as_deref(), Some("Files"));
        assert_eq!(merged.references, vec![Reference::new("new.php", Some(10))]);
        assert!(merged.comments.is_empty());
    }

    #[test]
    fn merge_takes_incoming_translation_when_present() {
        let incoming = Entry::new(Some("menu"), "File")
            .with_translation("Byla")
            .with_plural_translations(["Byla", "", ""]);

        let merged = stored().merged_with(&incoming);

        assert_eq!(merged.translation, "Byla");
        assert_eq!(merged.plural_translations, vec!["Byla", "", ""]);
    }

    #[test]
    fn merge_does_not_touch_inputs() {
        let base = stored();
        let incoming = Entry::new(Some("menu"), "File").with_translation("Byla");
        let before = (base.clone(), incoming.clone());

        let _ = base.merged_with(&incoming);

        assert_eq!((base, incoming), before);
    }
}
