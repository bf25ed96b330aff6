// src/storage/http.rs
use reqwest::blocking::Client;
use reqwest::StatusCode;
use std::time::Duration;

use super::{validate_path, ObjectStore, StorageError};

/// Bucket behind a Supabase-compatible storage REST API.
pub struct HttpBucketStore {
    client: Client,
    endpoint: String,
    bucket: String,
    api_key: Option<String>,
}

impl HttpBucketStore {
    pub fn new(endpoint: &str, bucket: &str, api_key: Option<String>) -> Result<Self, StorageError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(60))
            .build()
            .map_err(|e| StorageError::Network(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: endpoint.trim_end_matches('/').to_string(),
            bucket: bucket.to_string(),
            api_key,
        })
    }

    fn object_url(&self, path: &str) -> String {
        format!("{}/storage/v1/object/{}/{}", self.endpoint, self.bucket, path)
    }
}

impl ObjectStore for HttpBucketStore {
    fn bucket(&self) -> &str {
        &self.bucket
    }

    fn put(&self, path: &str, bytes: &[u8], content_type: &str) -> Result<(), StorageError> {
        validate_path(path)?;

        let mut req = self
            .client
            .post(self.object_url(path))
            .header("Content-Type", content_type)
            .header("x-upsert", "false")
            .body(bytes.to_vec());
        if let Some(key) = &self.api_key {
            req = req.bearer_auth(key).header("apikey", key);
        }

        let resp = req
            .send()
            .map_err(|e| StorageError::Network(e.to_string()))?;

        let status = resp.status();
        if status.is_success() {
            Ok(())
        } else {
            let message = resp.text().unwrap_or_else(|_| "(no body)".to_string());
            Err(StorageError::Rejected {
                status: status.as_u16(),
                message,
            })
        }
    }

    fn get(&self, path: &str) -> Result<Option<Vec<u8>>, StorageError> {
        validate_path(path)?;

        let resp = self
            .client
            .get(self.public_url(path))
            .send()
            .map_err(|e| StorageError::Network(e.to_string()))?;

        match resp.status() {
            StatusCode::NOT_FOUND | StatusCode::BAD_REQUEST => Ok(None),
            s if s.is_success() => resp
                .bytes()
                .map(|b| Some(b.to_vec()))
                .map_err(|e| StorageError::Network(e.to_string())),
            s => Err(StorageError::Rejected {
                status: s.as_u16(),
                message: resp.text().unwrap_or_default(),
            }),
        }
    }

    fn public_url(&self, path: &str) -> String {
        format!(
            "{}/storage/v1/object/public/{}/{}",
            self.endpoint, self.bucket, path
        )
    }
}
