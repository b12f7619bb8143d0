//! Upload collaborator - public URLs and storage names for custom emoji images
//!
//! Only naming lives here. Moving bytes to disk or S3 belongs to the upload
//! subsystem.

use std::path::Path;
use std::sync::Arc;

use emoji_common::{StorageConfig, UploadBackendKind};
use emoji_core::Snowflake;

/// Public location of stored custom emoji images
pub trait UploadBackend: Send + Sync {
    /// Public URL of a stored emoji image
    fn emoji_url(&self, emoji_file_name: &str, realm_id: Snowflake) -> String;
}

/// Images served by the application itself
#[derive(Debug, Clone, Default)]
pub struct LocalUploadBackend {
    base_url: String,
}

impl LocalUploadBackend {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

impl UploadBackend for LocalUploadBackend {
    fn emoji_url(&self, emoji_file_name: &str, realm_id: Snowflake) -> String {
        format!(
            "{}/user_avatars/{realm_id}/emoji/{emoji_file_name}",
            self.base_url
        )
    }
}

/// Images served straight from an S3 bucket
#[derive(Debug, Clone)]
pub struct S3UploadBackend {
    bucket: String,
}

impl S3UploadBackend {
    pub fn new(bucket: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
        }
    }
}

impl UploadBackend for S3UploadBackend {
    fn emoji_url(&self, emoji_file_name: &str, realm_id: Snowflake) -> String {
        format!(
            "https://{}.s3.amazonaws.com/{realm_id}/emoji/{emoji_file_name}",
            self.bucket
        )
    }
}

/// Build the configured backend
///
/// `EmojiConfig` guarantees a bucket when the S3 backend is selected. A
/// missing bucket falls back to local serving.
pub fn upload_backend(config: &StorageConfig) -> Arc<dyn UploadBackend> {
    match (config.backend, &config.s3_avatar_bucket) {
        (UploadBackendKind::S3, Some(bucket)) => Arc::new(S3UploadBackend::new(bucket.clone())),
        _ => Arc::new(LocalUploadBackend::new(config.base_url.clone())),
    }
}

/// Storage name for an uploaded emoji image: the emoji name plus the upload's extension
///
/// `("uploads/Parrot.GIF", "party_parrot")` becomes `"party_parrot.GIF"`.
pub fn emoji_file_name(uploaded_file_name: &str, emoji_name: &str) -> String {
    match Path::new(uploaded_file_name)
        .extension()
        .and_then(|ext| ext.to_str())
    {
        Some(ext) => format!("{emoji_name}.{ext}"),
        None => emoji_name.to_string(),
    }
}
