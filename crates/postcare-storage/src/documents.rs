use serde::{Serialize, de::DeserializeOwned};

use crate::error::StorageError;
use crate::store::DocumentStore;

/// Load a JSON document.
pub async fn load_json<T: DeserializeOwned>(
    store: &DocumentStore,
    key: &str,
) -> Result<T, StorageError> {
    let body = store.get(key).await?;
    Ok(serde_json::from_slice(&body)?)
}

/// Load a JSON document, mapping a missing key to `None`.
pub async fn find_json<T: DeserializeOwned>(
    store: &DocumentStore,
    key: &str,
) -> Result<Option<T>, StorageError> {
    match load_json(store, key).await {
        Ok(value) => Ok(Some(value)),
        Err(StorageError::NotFound { .. }) => Ok(None),
        Err(e) => Err(e),
    }
}

/// Save a JSON document, overwriting any existing one.
pub async fn save_json<T: Serialize>(
    store: &DocumentStore,
    key: &str,
    value: &T,
) -> Result<(), StorageError> {
    let body = serde_json::to_vec(value)?;
    store.put(key, body).await
}

/// Create a JSON document. Fails with `StorageError::AlreadyExists` if the key
/// is taken.
pub async fn create_json<T: Serialize>(
    store: &DocumentStore,
    key: &str,
    value: &T,
) -> Result<(), StorageError> {
    let body = serde_json::to_vec(value)?;
    store.put_if_absent(key, body).await
}

/// Load every JSON document under `prefix`, in key order.
pub async fn load_all_json<T: DeserializeOwned>(
    store: &DocumentStore,
    prefix: &str,
) -> Result<Vec<T>, StorageError> {
    let keys = store.list(prefix).await?;

    let mut values = Vec::with_capacity(keys.len());
    for key in &keys {
        values.push(load_json(store, key).await?);
    }
    Ok(values)
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    use super::*;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Note {
        text: String,
    }

    fn note(text: &str) -> Note {
        Note {
            text: text.to_string(),
        }
    }

    #[tokio::test]
    async fn find_json_maps_missing_to_none() {
        let store = DocumentStore::in_memory();
        let found: Option<Note> = find_json(&store, "notes/1.json").await.unwrap();
        assert!(found.is_none());

        save_json(&store, "notes/1.json", &note("hi")).await.unwrap();
        let found: Option<Note> = find_json(&store, "notes/1.json").await.unwrap();
        assert_eq!(found, Some(note("hi")));
    }

    #[tokio::test]
    async fn create_json_does_not_overwrite() {
        let store = DocumentStore::in_memory();
        create_json(&store, "notes/1.json", &note("first")).await.unwrap();

        let err = create_json(&store, "notes/1.json", &note("second"))
            .await
            .unwrap_err();
        assert!(matches!(err, StorageError::AlreadyExists { .. }));

        let stored: Note = load_json(&store, "notes/1.json").await.unwrap();
        assert_eq!(stored, note("first"));
    }

    #[tokio::test]
    async fn corrupt_document_is_a_serialization_error() {
        let store = DocumentStore::in_memory();
        store.put("notes/bad.json", b"{not json".to_vec()).await.unwrap();

        let err = load_json::<Note>(&store, "notes/bad.json").await.unwrap_err();
        assert!(matches!(err, StorageError::Serialization(_)));
    }

    #[tokio::test]
    async fn load_all_json_reads_prefix() {
        let store = DocumentStore::in_memory();
        save_json(&store, "notes/a.json", &note("a")).await.unwrap();
        save_json(&store, "notes/b.json", &note("b")).await.unwrap();
        save_json(&store, "other/c.json", &note("c")).await.unwrap();

        let notes: Vec<Note> = load_all_json(&store, "notes/").await.unwrap();
        assert_eq!(notes, vec![note("a"), note("b")]);
    }
}
