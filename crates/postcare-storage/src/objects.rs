use aws_sdk_s3::Client;
use aws_sdk_s3::error::ProvideErrorMetadata;
use aws_sdk_s3::operation::put_object::builders::PutObjectFluentBuilder;
use aws_smithy_types::byte_stream::ByteStream;

use crate::error::StorageError;

const JSON: &str = "application/json";

/// Fetch an object's body.
pub async fn get_object(client: &Client, bucket: &str, key: &str) -> Result<Vec<u8>, StorageError> {
    let resp = client
        .get_object()
        .bucket(bucket)
        .key(key)
        .send()
        .await
        .map_err(|e| {
            let err = e.into_service_error();
            if err.is_no_such_key() {
                StorageError::NotFound {
                    key: key.to_string(),
                }
            } else {
                StorageError::GetObject(err.to_string())
            }
        })?;

    let bytes = resp
        .body
        .collect()
        .await
        .map_err(|e| StorageError::GetObject(e.to_string()))?
        .into_bytes();

    Ok(bytes.to_vec())
}

fn put_request(client: &Client, bucket: &str, key: &str, body: Vec<u8>) -> PutObjectFluentBuilder {
    client
        .put_object()
        .bucket(bucket)
        .key(key)
        .content_type(JSON)
        .body(ByteStream::from(body))
}

/// Write an object, replacing any existing one.
pub async fn put_object(
    client: &Client,
    bucket: &str,
    key: &str,
    body: Vec<u8>,
) -> Result<(), StorageError> {
    put_request(client, bucket, key, body)
        .send()
        .await
        .map_err(|e| StorageError::PutObject(e.into_service_error().to_string()))?;
    Ok(())
}

/// Write an object only if nothing exists at `key` (`If-None-Match: *`).
///
/// S3 evaluates the condition as part of the write, so of two racing writers
/// exactly one succeeds and the other gets `StorageError::AlreadyExists`.
pub async fn put_object_if_absent(
    client: &Client,
    bucket: &str,
    key: &str,
    body: Vec<u8>,
) -> Result<(), StorageError> {
    put_request(client, bucket, key, body)
        .if_none_match("*")
        .send()
        .await
        .map_err(|e| {
            let err = e.into_service_error();
            // 412 when the key exists, 409 when a concurrent conditional write won
            match err.code() {
                Some("PreconditionFailed") | Some("ConditionalRequestConflict") => {
                    StorageError::AlreadyExists {
                        key: key.to_string(),
                    }
                }
                _ => StorageError::PutObject(err.to_string()),
            }
        })?;
    Ok(())
}

/// List every key under `prefix`, following continuation tokens.
pub async fn list_objects(
    client: &Client,
    bucket: &str,
    prefix: &str,
) -> Result<Vec<String>, StorageError> {
    let mut keys = Vec::new();
    let mut continuation_token: Option<String> = None;

    loop {
        let mut req = client
            .list_objects_v2()
            .bucket(bucket)
            .prefix(prefix);

        if let Some(token) = &continuation_token {
            req = req.continuation_token(token);
        }

        let resp = req
            .send()
            .await
            .map_err(|e| StorageError::ListObjects(e.into_service_error().to_string()))?;

        for obj in resp.contents() {
            if let Some(key) = obj.key() {
                keys.push(key.to_string());
            }
        }

        if resp.is_truncated() == Some(true) {
            continuation_token = resp.next_continuation_token().map(|s| s.to_string());
        } else {
            break;
        }
    }

    Ok(keys)
}
