//! Test helpers for integration tests
//!
//! Locates the bundled catalog, builds service contexts, and writes temporary
//! catalog files.

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};

use anyhow::Result;
use emoji_common::CatalogConfig;
use emoji_service::{EmojiCatalog, EmojiContext, LocalUploadBackend};

/// Counter for unique temporary directories
static DIR_COUNTER: AtomicU32 = AtomicU32::new(0);

/// Directory holding the bundled sample catalog
pub fn data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../data/emoji")
}

/// Load the bundled sample catalog
pub fn bundled_catalog() -> Result<EmojiCatalog> {
    Ok(EmojiCatalog::load(&CatalogConfig::in_dir(data_dir()))?)
}

/// Service context over the bundled catalog with local uploads
pub fn test_context() -> Result<EmojiContext> {
    Ok(EmojiContext::new(
        Arc::new(bundled_catalog()?),
        Arc::new(LocalUploadBackend::new("http://localhost:9991")),
    ))
}

/// Write catalog files with the given contents into a fresh directory
pub fn write_catalog(name_to_codepoint: &str, codepoint_to_name: &str) -> Result<PathBuf> {
    let dir = std::env::temp_dir().join(format!(
        "emoji-integration-{}-{}",
        std::process::id(),
        DIR_COUNTER.fetch_add(1, Ordering::SeqCst)
    ));
    fs::create_dir_all(&dir)?;
    fs::write(dir.join("name_to_codepoint.json"), name_to_codepoint)?;
    fs::write(dir.join("codepoint_to_name.json"), codepoint_to_name)?;
    Ok(dir)
}
