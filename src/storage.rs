//! Storage backends for rendered offer documents.

use std::path::PathBuf;

use async_trait::async_trait;
use aws_sdk_s3::Client;
use aws_sdk_s3::config::{Builder as S3ConfigBuilder, Credentials, Region};
use aws_sdk_s3::primitives::ByteStream;
use thiserror::Error;

use crate::config::S3Settings;

#[derive(Debug, Error)]
pub enum ArtifactStoreError {
    #[error("failed to write artifact: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to upload artifact: {0}")]
    Upload(String),
}

/// Reference to a stored offer document.
#[derive(Debug, Clone)]
pub struct StoredArtifact {
    pub filename: String,
    /// Public download URL when the artifact lives in an object store.
    pub url: Option<String>,
}

/// Persists rendered offer documents.
#[async_trait]
pub trait ArtifactStore: Send + Sync {
    async fn put(&self, filename: &str, bytes: Vec<u8>) -> Result<StoredArtifact, ArtifactStoreError>;
}

/// Writes artifacts into a directory served by the HTTP layer.
pub struct LocalDirStore {
    dir: PathBuf,
}

impl LocalDirStore {
    /// Creates the store, ensuring the target directory exists.
    pub fn new(dir: impl Into<PathBuf>) -> std::io::Result<Self> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }
}

#[async_trait]
impl ArtifactStore for LocalDirStore {
    async fn put(
        &self,
        filename: &str,
        bytes: Vec<u8>,
    ) -> Result<StoredArtifact, ArtifactStoreError> {
        std::fs::write(self.dir.join(filename), &bytes)?;

        Ok(StoredArtifact {
            filename: filename.to_string(),
            url: None,
        })
    }
}

/// Uploads artifacts to an S3 compatible bucket under `offers/`.
pub struct S3ObjectStore {
    client: Client,
    bucket: String,
    public_base_url: String,
}

impl S3ObjectStore {
    pub async fn connect(settings: &S3Settings) -> Self {
        let base_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .endpoint_url(&settings.endpoint)
            .region(Region::new("auto"))
            .credentials_provider(Credentials::new(
                settings.access_key.clone(),
                settings.secret_key.clone(),
                None,
                None,
                "static",
            ))
            .load()
            .await;

        // Path style addressing keeps non-AWS endpoints like MinIO working.
        let s3_config = S3ConfigBuilder::from(&base_config)
            .force_path_style(true)
            .build();

        Self {
            client: Client::from_conf(s3_config),
            bucket: settings.bucket.clone(),
            public_base_url: settings.public_base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl ArtifactStore for S3ObjectStore {
    async fn put(
        &self,
        filename: &str,
        bytes: Vec<u8>,
    ) -> Result<StoredArtifact, ArtifactStoreError> {
        let key = format!("offers/{filename}");

        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(&key)
            .body(ByteStream::from(bytes))
            .send()
            .await
            .map_err(|err| ArtifactStoreError::Upload(err.to_string()))?;

        Ok(StoredArtifact {
            filename: filename.to_string(),
            url: Some(format!("{}/{key}", self.public_base_url)),
        })
    }
}
