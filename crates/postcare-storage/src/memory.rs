use std::collections::BTreeMap;
use std::sync::Arc;

use tokio::sync::Mutex;

use crate::error::StorageError;

/// In-process document map with the same semantics as the S3 backend.
///
/// Used for local runs (`POSTCARE_STORAGE=memory`) and tests. Clones share the
/// same underlying map.
#[derive(Clone, Default)]
pub struct MemoryStore {
    objects: Arc<Mutex<BTreeMap<String, Vec<u8>>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn get(&self, key: &str) -> Result<Vec<u8>, StorageError> {
        self.objects
            .lock()
            .await
            .get(key)
            .cloned()
            .ok_or_else(|| StorageError::NotFound {
                key: key.to_string(),
            })
    }

    pub async fn put(&self, key: &str, body: Vec<u8>) {
        self.objects.lock().await.insert(key.to_string(), body);
    }

    /// Insert only if `key` is vacant. The check and the insert happen under
    /// one lock acquisition.
    pub async fn put_if_absent(&self, key: &str, body: Vec<u8>) -> Result<(), StorageError> {
        let mut objects = self.objects.lock().await;
        if objects.contains_key(key) {
            return Err(StorageError::AlreadyExists {
                key: key.to_string(),
            });
        }
        objects.insert(key.to_string(), body);
        Ok(())
    }

    pub async fn list(&self, prefix: &str) -> Vec<String> {
        self.objects
            .lock()
            .await
            .range(prefix.to_string()..)
            .take_while(|(key, _)| key.starts_with(prefix))
            .map(|(key, _)| key.clone())
            .collect()
    }
}
