use std::{
    collections::BTreeMap,
    io::ErrorKind,
    path::{Path, PathBuf},
    sync::Arc,
};

use anyhow::Context;
use harbor_storage_contracts::KeyValueStore;
use tokio::sync::Mutex;
use tracing::{debug, warn};

type Entries = BTreeMap<String, String>;

/// Key-value store backed by a single JSON object file.
///
/// Writes go to a temporary file next to the target which is then renamed
/// over it, so readers never observe a partially written file.
#[derive(Debug, Clone)]
pub struct FileStore {
    inner: Arc<Inner>,
}

#[derive(Debug)]
struct Inner {
    path: PathBuf,
    lock: Mutex<()>,
}

#[derive(Debug)]
pub struct FileStoreConfig {
    pub path: PathBuf,
}

impl FileStore {
    pub async fn open(config: &FileStoreConfig) -> anyhow::Result<Self> {
        if let Some(parent) = config.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        Ok(Self {
            inner: Arc::new(Inner {
                path: config.path.clone(),
                lock: Mutex::new(()),
            }),
        })
    }

    pub fn path(&self) -> &Path {
        &self.inner.path
    }

    async fn read_content(&self) -> anyhow::Result<Option<String>> {
        match tokio::fs::read_to_string(&self.inner.path).await {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err).with_context(|| {
                format!("Failed to read store file {}", self.inner.path.display())
            }),
        }
    }

    fn parse_entries(&self, content: &str) -> anyhow::Result<Entries> {
        serde_json::from_str(content).with_context(|| {
            format!("Failed to parse store file {}", self.inner.path.display())
        })
    }

    async fn read_entries(&self) -> anyhow::Result<Entries> {
        match self.read_content().await? {
            Some(content) => self.parse_entries(&content),
            None => Ok(Entries::new()),
        }
    }

    async fn write_entries(&self, entries: &Entries) -> anyhow::Result<()> {
        let content = serde_json::to_vec_pretty(entries).context("Failed to serialize store")?;

        let mut tmp = self.inner.path.clone().into_os_string();
        tmp.push(format!(".{}.tmp", uuid::Uuid::new_v4().simple()));
        let tmp = PathBuf::from(tmp);

        tokio::fs::write(&tmp, content)
            .await
            .with_context(|| format!("Failed to write {}", tmp.display()))?;

        if let Err(err) = tokio::fs::rename(&tmp, &self.inner.path).await {
            let _ = tokio::fs::remove_file(&tmp).await;
            return Err(err).with_context(|| {
                format!("Failed to replace store file {}", self.inner.path.display())
            });
        }

        Ok(())
    }
}

impl KeyValueStore for FileStore {
    #[tracing::instrument(level = "trace", skip(self))]
    async fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
        let _guard = self.inner.lock.lock().await;
        let mut entries = self.read_entries().await?;
        Ok(entries.remove(key))
    }

    #[tracing::instrument(level = "trace", skip(self, value), fields(len = value.len()))]
    async fn set(&self, key: &str, value: &str) -> anyhow::Result<()> {
        let _guard = self.inner.lock.lock().await;
        // Corrupt contents are overwritten rather than blocking writes.
        let mut entries = match self.read_content().await? {
            Some(content) => self.parse_entries(&content).unwrap_or_else(|err| {
                warn!("Discarding unreadable store contents: {err:#}");
                Entries::new()
            }),
            None => Entries::new(),
        };
        entries.insert(key.into(), value.into());
        self.write_entries(&entries).await?;
        debug!(key, "store updated");
        Ok(())
    }
}
