use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::{MessageRepository, RecordFilter, RepoResult};
use crate::error::RepositoryError;
use crate::model::MessageRecord;

/// Process-local repository. Records are kept in insertion order.
#[derive(Debug, Default)]
pub struct InMemoryRepository {
    records: RwLock<Vec<MessageRecord>>,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.read().map(|r| r.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn read(&self) -> RepoResult<RwLockReadGuard<'_, Vec<MessageRecord>>> {
        self.records.read().map_err(poisoned)
    }

    fn write(&self) -> RepoResult<RwLockWriteGuard<'_, Vec<MessageRecord>>> {
        self.records.write().map_err(poisoned)
    }

    fn query(
        &self,
        filter: RecordFilter,
        locale: &str,
        domain: &str,
    ) -> RepoResult<Vec<MessageRecord>> {
        Ok(filter.apply(&self.read()?, locale, domain))
    }
}

fn poisoned<T>(_: PoisonError<T>) -> RepositoryError {
    RepositoryError::Backend("in-memory store lock poisoned".into())
}

impl MessageRepository for InMemoryRepository {
    fn get_single(&self, key: &str) -> RepoResult<Option<MessageRecord>> {
        Ok(self.read()?.iter().find(|r| r.key == key).cloned())
    }

    fn save(&self, record: &MessageRecord) -> RepoResult<()> {
        let mut records = self.write()?;
        match records.iter_mut().find(|r| r.key == record.key) {
            Some(existing) => *existing = record.clone(),
            None => records.push(record.clone()),
        }
        Ok(())
    }

    fn get_all(&self, locale: &str, domain: &str) -> RepoResult<Vec<MessageRecord>> {
        self.query(RecordFilter::All, locale, domain)
    }

    fn get_enabled(&self, locale: &str, domain: &str) -> RepoResult<Vec<MessageRecord>> {
        self.query(RecordFilter::Enabled, locale, domain)
    }

    fn get_enabled_translated(&self, locale: &str, domain: &str) -> RepoResult<Vec<MessageRecord>> {
        self.query(RecordFilter::EnabledTranslated, locale, domain)
    }

    fn get_requires_translating(
        &self,
        locale: &str,
        domain: &str,
    ) -> RepoResult<Vec<MessageRecord>> {
        self.query(RecordFilter::RequiresTranslating, locale, domain)
    }

    fn disable_all(&self, locale: &str, domain: &str) -> RepoResult<()> {
        for r in self.write()?.iter_mut() {
            if r.locale == locale && r.domain == domain {
                r.is_disabled = true;
            }
        }
        Ok(())
    }
}
