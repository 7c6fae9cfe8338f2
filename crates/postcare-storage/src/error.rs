use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("object not found: {key}")]
    NotFound { key: String },

    #[error("object already exists: {key}")]
    AlreadyExists { key: String },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("S3 GetObject error: {0}")]
    GetObject(String),

    #[error("S3 PutObject error: {0}")]
    PutObject(String),

    #[error("S3 ListObjects error: {0}")]
    ListObjects(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_key() {
        let err = StorageError::AlreadyExists {
            key: "checkins/p/2024-01-02.json".to_string(),
        };
        assert_eq!(err.to_string(), "object already exists: checkins/p/2024-01-02.json");

        let err = StorageError::NotFound {
            key: "patients/p.json".to_string(),
        };
        assert_eq!(err.to_string(), "object not found: patients/p.json");
    }
}
