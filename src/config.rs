use std::env;
use std::path::PathBuf;

/// Settings shared with request handlers.
#[derive(Clone)]
pub struct ServerConfig {
    /// Shared secret expected in the `x-admin-password` header.
    pub admin_password: String,
}

/// Connection settings for an S3 compatible object store.
#[derive(Debug, Clone)]
pub struct S3Settings {
    pub endpoint: String,
    pub bucket: String,
    pub access_key: String,
    pub secret_key: String,
    pub public_base_url: String,
}

/// Artifact storage backend selected by the deployment environment.
#[derive(Debug, Clone)]
pub enum StorageSettings {
    Local { offers_dir: PathBuf },
    S3(S3Settings),
}

impl StorageSettings {
    /// Picks the S3 store when the full credential set is configured,
    /// a local directory otherwise.
    pub fn from_env() -> Self {
        let s3 = (
            env::var("S3_ENDPOINT"),
            env::var("S3_BUCKET"),
            env::var("S3_ACCESS_KEY"),
            env::var("S3_SECRET_KEY"),
            env::var("S3_PUBLIC_URL"),
        );

        if let (Ok(endpoint), Ok(bucket), Ok(access_key), Ok(secret_key), Ok(public_base_url)) = s3
        {
            return StorageSettings::S3(S3Settings {
                endpoint,
                bucket,
                access_key,
                secret_key,
                public_base_url,
            });
        }

        let offers_dir = env::var("OFFERS_DIR").unwrap_or("generated_offers".to_string());
        StorageSettings::Local {
            offers_dir: offers_dir.into(),
        }
    }
}
