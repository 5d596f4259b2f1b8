pub mod json_file;
pub mod memory;

use crate::error::RepositoryError;
use crate::model::MessageRecord;

pub use json_file::JsonFileRepository;
pub use memory::InMemoryRepository;

pub type RepoResult<T> = Result<T, RepositoryError>;

/// System of record for message records, keyed by fingerprint.
///
/// Query methods return records of one (locale, domain) pair in the order
/// they were first stored.
pub trait MessageRepository {
    fn get_single(&self, key: &str) -> RepoResult<Option<MessageRecord>>;

    /// Insert, or replace the record with the same key in place.
    fn save(&self, record: &MessageRecord) -> RepoResult<()>;

    fn get_all(&self, locale: &str, domain: &str) -> RepoResult<Vec<MessageRecord>>;

    fn get_enabled(&self, locale: &str, domain: &str) -> RepoResult<Vec<MessageRecord>>;

    fn get_enabled_translated(&self, locale: &str, domain: &str)
        -> RepoResult<Vec<MessageRecord>>;

    fn get_requires_translating(
        &self,
        locale: &str,
        domain: &str,
    ) -> RepoResult<Vec<MessageRecord>>;

    fn disable_all(&self, locale: &str, domain: &str) -> RepoResult<()>;
}

/// Record predicates shared by the bundled adapters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordFilter {
    All,
    Enabled,
    EnabledTranslated,
    RequiresTranslating,
}

impl RecordFilter {
    pub fn matches(self, record: &MessageRecord, locale: &str, domain: &str) -> bool {
        if record.locale != locale || record.domain != domain {
            return false;
        }

        match self {
            RecordFilter::All => true,
            RecordFilter::Enabled => !record.is_disabled,
            RecordFilter::EnabledTranslated => {
                !record.is_disabled && record.has_original_translation
            }
            RecordFilter::RequiresTranslating => {
                !record.is_disabled && record.requires_translating
            }
        }
    }

    pub fn apply(
        self,
        records: &[MessageRecord],
        locale: &str,
        domain: &str,
    ) -> Vec<MessageRecord> {
        records
            .iter()
            .filter(|r| self.matches(r, locale, domain))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Entry;

    fn record(locale: &str, disabled: bool, translated: bool, requires: bool) -> MessageRecord {
        let mut r = MessageRecord::from_entry(locale, "core", &Entry::new(None, "Save"));
        r.is_disabled = disabled;
        r.has_original_translation = translated;
        r.requires_translating = requires;
        r
    }

    #[test]
    fn filters_scope_to_locale_and_domain() {
        let r = record("lt", false, true, false);
        assert!(RecordFilter::All.matches(&r, "lt", "core"));
        assert!(!RecordFilter::All.matches(&r, "lv", "core"));
        assert!(!RecordFilter::All.matches(&r, "lt", "admin"));
    }

    #[test]
    fn filter_matrix() {
        let translated = record("lt", false, true, false);
        let missing_forms = record("lt", false, true, true);
        let pending = record("lt", false, false, true);
        let disabled = record("lt", true, true, true);

        assert!(RecordFilter::Enabled.matches(&translated, "lt", "core"));
        assert!(!RecordFilter::Enabled.matches(&disabled, "lt", "core"));

        assert!(RecordFilter::EnabledTranslated.matches(&translated, "lt", "core"));
        assert!(RecordFilter::EnabledTranslated.matches(&missing_forms, "lt", "core"));
        assert!(!RecordFilter::EnabledTranslated.matches(&pending, "lt", "core"));
        assert!(!RecordFilter::EnabledTranslated.matches(&disabled, "lt", "core"));

        assert!(RecordFilter::RequiresTranslating.matches(&pending, "lt", "core"));
        assert!(RecordFilter::RequiresTranslating.matches(&missing_forms, "lt", "core"));
        assert!(!RecordFilter::RequiresTranslating.matches(&translated, "lt", "core"));
        assert!(!RecordFilter::RequiresTranslating.matches(&disabled, "lt", "core"));
    }
}
