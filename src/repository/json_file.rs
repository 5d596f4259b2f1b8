use std::{
    fs,
    path::{Path, PathBuf},
    sync::{Mutex, MutexGuard},
};

use super::{MessageRepository, RecordFilter, RepoResult};
use crate::error::RepositoryError;
use crate::model::MessageRecord;

/// Repository backed by a single JSON array file.
///
/// The file is re-read on every call and replaced by rename on every
/// mutation, so readers see either the old or the new store, never a gap.
/// Several processes may point at the same path (last writer wins).
/// Record order is first-insertion order.
#[derive(Debug)]
pub struct JsonFileRepository {
    path: PathBuf,
    lock: Mutex<()>,
}

impl JsonFileRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    fn guard(&self) -> RepoResult<MutexGuard<'_, ()>> {
        self.lock
            .lock()
            .map_err(|_| RepositoryError::Backend("json store lock poisoned".into()))
    }

    fn read(&self) -> RepoResult<Vec<MessageRecord>> {
        let _guard = self.guard()?;
        self.load()
    }

    fn load(&self) -> RepoResult<Vec<MessageRecord>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let data = fs::read_to_string(&self.path)?;
        if data.trim().is_empty() {
            return Ok(Vec::new());
        }

        let records: Vec<MessageRecord> = serde_json::from_str(&data)?;
        Ok(records)
    }

    fn store(&self, records: &[MessageRecord]) -> RepoResult<()> {
        let json = serde_json::to_string_pretty(records)?;
        write_atomic(&self.path, json.as_bytes())?;
        tracing::trace!(path = %self.path.display(), records = records.len(), "store written");
        Ok(())
    }

    fn mutate<F>(&self, f: F) -> RepoResult<()>
    where
        F: FnOnce(&mut Vec<MessageRecord>),
    {
        let _guard = self.guard()?;

        let mut records = self.load()?;
        f(&mut records);
        self.store(&records)
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

impl MessageRepository for JsonFileRepository {
    fn get_single(&self, key: &str) -> RepoResult<Option<MessageRecord>> {
        Ok(self.read()?.into_iter().find(|r| r.key == key))
    }

    fn save(&self, record: &MessageRecord) -> RepoResult<()> {
        self.mutate(|records| match records.iter_mut().find(|r| r.key == record.key) {
            Some(existing) => *existing = record.clone(),
            None => records.push(record.clone()),
        })
    }

    fn get_all(&self, locale: &str, domain: &str) -> RepoResult<Vec<MessageRecord>> {
        self.query(RecordFilter::All, locale, domain)
    }

    fn get_enabled(&self, locale: &str, domain: &str) -> RepoResult<Vec<MessageRecord>> {
        self.query(RecordFilter::Enabled, locale, domain)
    }

    fn get_enabled_translated(
        &self,
        locale: &str,
        domain: &str,
    ) -> RepoResult<Vec<MessageRecord>> {
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
        self.mutate(|records| {
            for r in records.iter_mut() {
                if r.locale == locale && r.domain == domain {
                    r.is_disabled = true;
                }
            }
        })
    }
}

fn write_atomic(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let tmp = tmp_path(path);

    if let Some(parent) = tmp.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    fs::write(&tmp, bytes)?;

    // rename replaces the target in one step
    fs::rename(&tmp, path)
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut p = path.to_path_buf();
    let file_name = match path.file_name().and_then(|s| s.to_str()) {
        Some(n) => n.to_string(),
        None => "messages.json".to_string(),
    };
    p.set_file_name(format!("{file_name}.tmp"));
    p
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Entry;

    fn record(original: &str) -> MessageRecord {
        MessageRecord::from_entry("lt", "core", &Entry::new(None, original))
    }

    #[test]
    fn missing_file_is_an_empty_store() {
        let dir = tempfile::tempdir().unwrap();
        let repo = JsonFileRepository::new(dir.path().join("messages.json"));

        assert!(repo.get_all("lt", "core").unwrap().is_empty());
        assert!(repo.get_single("abc").unwrap().is_none());
    }

    #[test]
    fn records_persist_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("messages.json");

        let repo = JsonFileRepository::new(&path);
        repo.save(&record("a")).unwrap();
        repo.save(&record("b")).unwrap();
        assert!(!dir.path().join("nested").join("messages.json.tmp").exists());

        let reopened = JsonFileRepository::new(&path);
        let all = reopened.get_all("lt", "core").unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].original, "a");
        assert_eq!(reopened.get_single(&all[1].key).unwrap(), Some(record("b")));
    }

    #[test]
    fn save_replaces_existing_key() {
        let dir = tempfile::tempdir().unwrap();
        let repo = JsonFileRepository::new(dir.path().join("messages.json"));

        repo.save(&record("a")).unwrap();
        let mut changed = record("a");
        changed.translation = "A".into();
        repo.save(&changed).unwrap();

        let all = repo.get_all("lt", "core").unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].translation, "A");
    }

    #[test]
    fn corrupted_file_is_a_json_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("messages.json");
        fs::write(&path, "{ not json").unwrap();

        let repo = JsonFileRepository::new(&path);
        let err = repo.get_all("lt", "core").unwrap_err();
        assert!(matches!(err, RepositoryError::Json(_)));
    }

    #[test]
    fn readers_never_miss_a_stored_record_during_rewrites() {
        let dir = tempfile::tempdir().unwrap();
        let repo = JsonFileRepository::new(dir.path().join("messages.json"));
        let rec = record("a");
        repo.save(&rec).unwrap();

        let missed = std::thread::scope(|s| {
            s.spawn(|| {
                for _ in 0..500 {
                    repo.save(&rec).unwrap();
                }
            });

            (0..500)
                .filter(|_| repo.get_single(&rec.key).unwrap().is_none())
                .count()
        });

        assert_eq!(missed, 0);
    }

    #[test]
    fn rewrite_leaves_no_tmp_file_behind() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("messages.json");
        let repo = JsonFileRepository::new(&path);

        repo.save(&record("a")).unwrap();
        repo.save(&record("b")).unwrap();

        assert!(path.exists());
        assert!(!dir.path().join("messages.json.tmp").exists());
    }

    #[test]
    fn disable_all_is_persisted() {
        let dir = tempfile::tempdir().unwrap();
        let repo = JsonFileRepository::new(dir.path().join("messages.json"));
        repo.save(&record("a")).unwrap();

        repo.disable_all("lt", "core").unwrap();

        assert!(repo.get_enabled("lt", "core").unwrap().is_empty());
        assert!(repo.get_all("lt", "core").unwrap()[0].is_disabled);
    }
}
