use aws_sdk_s3::Client;
use aws_smithy_types::byte_stream::ByteStream;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::StorageError;

/// A decoded document together with the ETag it was read at.
pub struct Doc<T> {
    pub value: T,
    pub etag: String,
}

/// Typed JSON document operations against one bucket. Cheap to clone; all
/// call sites in this system share a single bucket.
#[derive(Clone)]
pub struct Store {
    client: Client,
    bucket: String,
}

impl Store {
    pub fn new(client: Client, bucket: impl Into<String>) -> Self {
        Self {
            client,
            bucket: bucket.into(),
        }
    }

    /// Fetch and decode one document. Missing keys map to
    /// [`StorageError::NotFound`].
    pub async fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Doc<T>, StorageError> {
        let resp = self
            .client
            .get_object()
            .bucket(&self.bucket)
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

        let etag = resp.e_tag().unwrap_or_default().to_string();
        let body = resp
            .body
            .collect()
            .await
            .map_err(|e| StorageError::GetObject(e.to_string()))?
            .into_bytes();

        let value = serde_json::from_slice(&body)?;
        Ok(Doc { value, etag })
    }

    /// Whether a document exists at `key`.
    pub async fn exists(&self, key: &str) -> Result<bool, StorageError> {
        match self.get::<serde_json::Value>(key).await {
            Ok(_) => Ok(true),
            Err(StorageError::NotFound { .. }) => Ok(false),
            Err(e) => Err(e),
        }
    }

    /// Write one document as pretty-printed JSON. Returns the new ETag.
    pub async fn put<T: Serialize>(&self, key: &str, value: &T) -> Result<String, StorageError> {
        let body = serde_json::to_vec_pretty(value)?;
        let resp = self
            .client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .content_type("application/json")
            .body(ByteStream::from(body))
            .send()
            .await
            .map_err(|e| StorageError::PutObject(e.into_service_error().to_string()))?;

        tracing::debug!(key, "document written");
        Ok(resp.e_tag().unwrap_or_default().to_string())
    }

    /// Write one document with an If-Match precondition (ETag optimistic
    /// locking). Returns [`StorageError::PreconditionFailed`] when another
    /// writer got there first.
    pub async fn put_if_match<T: Serialize>(
        &self,
        key: &str,
        value: &T,
        expected_etag: &str,
    ) -> Result<String, StorageError> {
        let body = serde_json::to_vec_pretty(value)?;
        let resp = self
            .client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .content_type("application/json")
            .body(ByteStream::from(body))
            .if_match(expected_etag)
            .send()
            .await
            .map_err(|e| {
                let err = e.into_service_error();
                // S3 reports 412 Precondition Failed when If-Match misses
                if err.to_string().contains("PreconditionFailed") {
                    StorageError::PreconditionFailed {
                        key: key.to_string(),
                    }
                } else {
                    StorageError::PutObject(err.to_string())
                }
            })?;

        Ok(resp.e_tag().unwrap_or_default().to_string())
    }

    pub async fn delete(&self, key: &str) -> Result<(), StorageError> {
        self.client
            .delete_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| StorageError::DeleteObject(e.into_service_error().to_string()))?;

        tracing::debug!(key, "document deleted");
        Ok(())
    }

    /// List all keys under a prefix, following continuation tokens.
    pub async fn list(&self, prefix: &str) -> Result<Vec<String>, StorageError> {
        let mut keys = Vec::new();
        let mut continuation_token: Option<String> = None;

        loop {
            let mut req = self
                .client
                .list_objects_v2()
                .bucket(&self.bucket)
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

    /// Fetch and decode every document under a prefix.
    pub async fn list_all<T: DeserializeOwned>(
        &self,
        prefix: &str,
    ) -> Result<Vec<T>, StorageError> {
        let keys = self.list(prefix).await?;
        let mut values = Vec::with_capacity(keys.len());
        for key in &keys {
            values.push(self.get(key).await?.value);
        }
        Ok(values)
    }
}
