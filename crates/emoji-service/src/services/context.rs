//! Service context - dependency container for services
//!
//! Holds the shared emoji catalog and the upload backend.

use std::sync::Arc;

use emoji_common::EmojiConfig;
use tracing::info;

use crate::catalog::EmojiCatalog;
use crate::upload::{upload_backend, UploadBackend};

use super::error::ServiceResult;

/// Service context containing all dependencies
///
/// Cheap to clone; everything inside is immutable and shared.
#[derive(Clone)]
pub struct EmojiContext {
    catalog: Arc<EmojiCatalog>,
    upload: Arc<dyn UploadBackend>,
}

impl EmojiContext {
    /// Create a new service context
    pub fn new(catalog: Arc<EmojiCatalog>, upload: Arc<dyn UploadBackend>) -> Self {
        Self { catalog, upload }
    }

    /// Load the catalog and pick the upload backend described by `config`
    ///
    /// # Errors
    /// Fails if the emoji catalog cannot be loaded.
    pub fn from_config(config: &EmojiConfig) -> ServiceResult<Self> {
        let catalog = EmojiCatalog::load(&config.catalog)?;
        let upload = upload_backend(&config.storage);
        info!(backend = ?config.storage.backend, "Emoji context ready");
        Ok(Self::new(Arc::new(catalog), upload))
    }

    /// Get the emoji catalog
    #[inline]
    pub fn catalog(&self) -> &EmojiCatalog {
        &self.catalog
    }

    /// Get the upload backend
    #[inline]
    pub fn upload(&self) -> &dyn UploadBackend {
        self.upload.as_ref()
    }
}

impl std::fmt::Debug for EmojiContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmojiContext")
            .field("catalog_len", &self.catalog.len())
            .finish_non_exhaustive()
    }
}
