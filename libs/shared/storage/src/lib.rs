use std::io::ErrorKind;
use std::marker::PhantomData;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use shared_config::AppConfig;

/// Durable key-value store of record lists. One key holds one whole list;
/// every save overwrites the previous contents for that key. There is no
/// partial update and no multi-writer coordination.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Raw payload for `key`, or `None` when the key has never been written.
    async fn load_raw(&self, key: &str) -> Result<Option<Vec<u8>>>;

    async fn save_raw(&self, key: &str, payload: Vec<u8>) -> Result<()>;
}

/// File-backed store: each key is a `<key>.json` file under the data dir.
pub struct JsonFileStore {
    root: PathBuf,
}

impl JsonFileStore {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            root: config.data_dir.clone(),
        }
    }

    pub fn at(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", key))
    }
}

#[async_trait]
impl RecordStore for JsonFileStore {
    async fn load_raw(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let path = self.path_for(key);
        match tokio::fs::read(&path).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e).with_context(|| format!("Failed to read {}", path.display())),
        }
    }

    async fn save_raw(&self, key: &str, payload: Vec<u8>) -> Result<()> {
        tokio::fs::create_dir_all(&self.root)
            .await
            .with_context(|| format!("Failed to create data dir {}", self.root.display()))?;

        // Write to a sibling temp file, then rename, so readers never see a
        // half-written list.
        let path = self.path_for(key);
        let tmp = self.root.join(format!(".{}.json.tmp", key));
        tokio::fs::write(&tmp, &payload)
            .await
            .with_context(|| format!("Failed to write {}", tmp.display()))?;
        tokio::fs::rename(&tmp, &path)
            .await
            .with_context(|| format!("Failed to replace {}", path.display()))?;

        debug!("Saved {} bytes to {}", payload.len(), path.display());
        Ok(())
    }
}

/// Typed view over a single store key holding a JSON array of records.
pub struct Repository<T> {
    store: Arc<dyn RecordStore>,
    key: &'static str,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Repository<T>
where
    T: Serialize + DeserializeOwned,
{
    pub fn new(store: Arc<dyn RecordStore>, key: &'static str) -> Self {
        Self {
            store,
            key,
            _marker: PhantomData,
        }
    }

    /// An absent key reads as an empty list.
    pub async fn load(&self) -> Result<Vec<T>> {
        match self.store.load_raw(self.key).await? {
            Some(bytes) => serde_json::from_slice(&bytes)
                .with_context(|| format!("Corrupt record list for key '{}'", self.key)),
            None => Ok(Vec::new()),
        }
    }

    /// Persists the whole list, replacing whatever the key held before.
    pub async fn save(&self, records: &[T]) -> Result<()> {
        let payload = serde_json::to_vec_pretty(records)
            .with_context(|| format!("Failed to serialize record list for key '{}'", self.key))?;
        self.store.save_raw(self.key, payload).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Note {
        id: u32,
        body: String,
    }

    fn note(id: u32, body: &str) -> Note {
        Note {
            id,
            body: body.to_string(),
        }
    }

    #[tokio::test]
    async fn absent_key_loads_as_empty_list() {
        let dir = tempfile::tempdir().unwrap();
        let store: Arc<dyn RecordStore> = Arc::new(JsonFileStore::at(dir.path()));
        let repo: Repository<Note> = Repository::new(store, "notes");

        let records = repo.load().await.unwrap();
        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn saved_records_survive_a_new_store_instance() {
        let dir = tempfile::tempdir().unwrap();

        let store: Arc<dyn RecordStore> = Arc::new(JsonFileStore::at(dir.path()));
        let repo: Repository<Note> = Repository::new(store, "notes");
        repo.save(&[note(1, "first"), note(2, "second")])
            .await
            .unwrap();

        let reopened: Arc<dyn RecordStore> = Arc::new(JsonFileStore::at(dir.path()));
        let repo: Repository<Note> = Repository::new(reopened, "notes");
        let records = repo.load().await.unwrap();
        assert_eq!(records, vec![note(1, "first"), note(2, "second")]);
    }

    #[tokio::test]
    async fn save_replaces_the_whole_list() {
        let dir = tempfile::tempdir().unwrap();
        let store: Arc<dyn RecordStore> = Arc::new(JsonFileStore::at(dir.path()));
        let repo: Repository<Note> = Repository::new(store, "notes");

        repo.save(&[note(1, "first")]).await.unwrap();
        repo.save(&[note(2, "second")]).await.unwrap();

        let records = repo.load().await.unwrap();
        assert_eq!(records, vec![note(2, "second")]);
    }

    #[tokio::test]
    async fn keys_are_independent() {
        let dir = tempfile::tempdir().unwrap();
        let store: Arc<dyn RecordStore> = Arc::new(JsonFileStore::at(dir.path()));

        let notes: Repository<Note> = Repository::new(Arc::clone(&store), "notes");
        notes.save(&[note(1, "first")]).await.unwrap();

        let drafts: Repository<Note> = Repository::new(store, "drafts");
        assert!(drafts.load().await.unwrap().is_empty());
    }
}
