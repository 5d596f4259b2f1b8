use std::collections::HashMap;
use std::sync::Mutex;

use tracing::{debug, info, warn};

use crate::error::{Result, StorageError};
use crate::model::{Catalog, Entry, MessageRecord};
use crate::repository::{MessageRepository, RepoResult};
use crate::services::fingerprint;
use crate::services::plural::{GettextPluralRules, PluralRuleProvider};

/// Coordinates merging extracted messages into a repository and reading
/// them back as catalogs.
pub struct MessageStorage<R, P = GettextPluralRules> {
    repository: R,
    plural_rules: P,
    plural_counts: Mutex<HashMap<String, usize>>,
}

impl<R: MessageRepository> MessageStorage<R> {
    pub fn new(repository: R) -> Self {
        Self::with_plural_rules(repository, GettextPluralRules)
    }
}

impl<R: MessageRepository, P: PluralRuleProvider> MessageStorage<R, P> {
    pub fn with_plural_rules(repository: R, plural_rules: P) -> Self {
        Self {
            repository,
            plural_rules,
            plural_counts: Mutex::new(HashMap::new()),
        }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Saves every entry of `catalog` in order.
    ///
    /// Entries are not written as one transaction: when entry N fails, the
    /// entries before it stay persisted.
    pub fn save_catalog(&self, catalog: &Catalog) -> Result<()> {
        let locale = catalog.locale.as_str();
        let domain = catalog.domain.as_str();

        if locale.trim().is_empty() {
            warn!(domain, "rejected catalog without locale");
            return Err(StorageError::InvalidTranslation("catalog has no locale".into()));
        }
        if domain.trim().is_empty() {
            warn!(locale, "rejected catalog without domain");
            return Err(StorageError::InvalidTranslation("catalog has no domain".into()));
        }

        self.get_plural_count(locale)?;

        for entry in catalog {
            self.save_single(locale, domain, entry)?;
        }

        info!(locale, domain, entries = catalog.len(), "catalog saved");
        Ok(())
    }

    /// Merges one entry into its stored record and persists the result.
    pub fn save_single(&self, locale: &str, domain: &str, entry: &Entry) -> Result<()> {
        let plural_count = self.get_plural_count(locale)?;

        let key = fingerprint::key(locale, domain, entry.context.as_deref(), &entry.original);

        let merged = match self.repository.get_single(&key)? {
            Some(existing) => existing.to_entry().merged_with(entry),
            None => entry.clone(),
        };

        let mut record = MessageRecord::from_entry(locale, domain, &merged);
        record.is_disabled = entry.is_disabled;
        record.has_original_translation = merged.has_translation();
        record.requires_translating = requires_translating(&merged, plural_count);

        debug!(
            key = %record.key,
            locale,
            domain,
            requires_translating = record.requires_translating,
            disabled = record.is_disabled,
            "saving message"
        );

        self.repository.save(&record)?;
        Ok(())
    }

    /// Number of plural categories for `locale`, memoized for the process lifetime.
    pub fn get_plural_count(&self, locale: &str) -> Result<usize> {
        // A poisoned cache still holds valid counts.
        let mut cache = self
            .plural_counts
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        if let Some(&count) = cache.get(locale) {
            return Ok(count);
        }

        let count = self.plural_rules.categories_for(locale)?;
        cache.insert(locale.to_string(), count);
        Ok(count)
    }

    pub fn get_all(&self, locale: &str, domain: &str) -> Result<Catalog> {
        self.assemble(locale, domain, self.repository.get_all(locale, domain))
    }

    pub fn get_all_enabled(&self, locale: &str, domain: &str) -> Result<Catalog> {
        self.assemble(locale, domain, self.repository.get_enabled(locale, domain))
    }

    pub fn get_enabled_translated(&self, locale: &str, domain: &str) -> Result<Catalog> {
        self.assemble(locale, domain, self.repository.get_enabled_translated(locale, domain))
    }

    pub fn get_requires_translating(&self, locale: &str, domain: &str) -> Result<Catalog> {
        self.assemble(locale, domain, self.repository.get_requires_translating(locale, domain))
    }

    pub fn disable_all_in_domain(&self, locale: &str, domain: &str) -> Result<()> {
        self.repository.disable_all(locale, domain)?;
        info!(locale, domain, "domain disabled");
        Ok(())
    }

    fn assemble(
        &self,
        locale: &str,
        domain: &str,
        records: RepoResult<Vec<MessageRecord>>,
    ) -> Result<Catalog> {
        let mut catalog = Catalog::new(locale, domain);
        catalog.entries = records?.iter().map(MessageRecord::to_entry).collect();
        Ok(catalog)
    }
}

/// True while a message still needs a translator.
pub fn requires_translating(entry: &Entry, plural_count: usize) -> bool {
    if !entry.has_translation() {
        return true;
    }
    entry.has_plural() && entry.non_empty_plural_translations() != plural_count
}
