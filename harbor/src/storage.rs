use harbor_config::StorageConfig;
use harbor_storage_file::{FileStore, FileStoreConfig};

pub async fn open(config: &StorageConfig) -> anyhow::Result<FileStore> {
    FileStore::open(&FileStoreConfig {
        path: config.path.clone(),
    })
    .await
}
