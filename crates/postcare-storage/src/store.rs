use aws_sdk_s3::Client;

use crate::error::StorageError;
use crate::memory::MemoryStore;
use crate::objects;

/// A key-addressed document store.
#[derive(Clone)]
pub enum DocumentStore {
    S3 { client: Client, bucket: String },
    Memory(MemoryStore),
}

impl DocumentStore {
    pub fn s3(client: Client, bucket: impl Into<String>) -> Self {
        Self::S3 {
            client,
            bucket: bucket.into(),
        }
    }

    pub fn in_memory() -> Self {
        Self::Memory(MemoryStore::new())
    }

    /// Fetch the raw body stored at `key`.
    pub async fn get(&self, key: &str) -> Result<Vec<u8>, StorageError> {
        match self {
            Self::S3 { client, bucket } => objects::get_object(client, bucket, key).await,
            Self::Memory(store) => store.get(key).await,
        }
    }

    /// Write `body` at `key`, replacing anything already there.
    pub async fn put(&self, key: &str, body: Vec<u8>) -> Result<(), StorageError> {
        match self {
            Self::S3 { client, bucket } => objects::put_object(client, bucket, key, body).await,
            Self::Memory(store) => {
                store.put(key, body).await;
                Ok(())
            }
        }
    }

    /// Write `body` at `key` only if the key is vacant.
    ///
    /// Fails with [`StorageError::AlreadyExists`] otherwise. The backend
    /// evaluates the condition as part of the write.
    pub async fn put_if_absent(&self, key: &str, body: Vec<u8>) -> Result<(), StorageError> {
        match self {
            Self::S3 { client, bucket } => {
                objects::put_object_if_absent(client, bucket, key, body).await
            }
            Self::Memory(store) => store.put_if_absent(key, body).await,
        }
    }

    /// List keys under `prefix`.
    pub async fn list(&self, prefix: &str) -> Result<Vec<String>, StorageError> {
        match self {
            Self::S3 { client, bucket } => objects::list_objects(client, bucket, prefix).await,
            Self::Memory(store) => Ok(store.list(prefix).await),
        }
    }

    /// Short backend name for logs.
    pub fn backend(&self) -> &'static str {
        match self {
            Self::S3 { .. } => "s3",
            Self::Memory(_) => "memory",
        }
    }
}
