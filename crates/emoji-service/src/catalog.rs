//! Unicode emoji catalog
//!
//! Two generated lookup tables: emoji name to codepoint (the primary direction)
//! and codepoint to canonical name. Several names may share a codepoint, e.g.
//! `+1` and `thumbs_up`. The catalog is loaded once at startup and never
//! changes afterwards; services share it through an `Arc`.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use emoji_common::CatalogConfig;
use tracing::{info, instrument, warn};

/// Immutable Unicode emoji lookup tables
#[derive(Debug, Clone, Default)]
pub struct EmojiCatalog {
    name_to_codepoint: HashMap<String, String>,
    codepoint_to_name: HashMap<String, String>,
}

impl EmojiCatalog {
    /// Build a catalog from in-memory tables
    pub fn from_maps(
        name_to_codepoint: HashMap<String, String>,
        codepoint_to_name: HashMap<String, String>,
    ) -> Self {
        Self {
            name_to_codepoint,
            codepoint_to_name,
        }
    }

    /// Load both tables from the configured JSON files
    ///
    /// # Errors
    /// Fails if either file is missing, unreadable, or not a JSON object of
    /// strings. Callers treat this as fatal.
    #[instrument(skip(config), fields(
        name_to_codepoint = %config.name_to_codepoint_path.display(),
        codepoint_to_name = %config.codepoint_to_name_path.display(),
    ))]
    pub fn load(config: &CatalogConfig) -> Result<Self, CatalogError> {
        let name_to_codepoint = read_table(&config.name_to_codepoint_path)?;
        let codepoint_to_name = read_table(&config.codepoint_to_name_path)?;

        let dangling = name_to_codepoint
            .values()
            .filter(|codepoint| !codepoint_to_name.contains_key(*codepoint))
            .count();
        if dangling > 0 {
            warn!(dangling, "Emoji names map to codepoints missing from the inverse table");
        }

        let catalog = Self::from_maps(name_to_codepoint, codepoint_to_name);
        info!(
            names = catalog.len(),
            codepoints = catalog.codepoint_to_name.len(),
            "Emoji catalog loaded"
        );
        Ok(catalog)
    }

    /// Codepoint for an emoji name
    #[inline]
    pub fn codepoint_for(&self, name: &str) -> Option<&str> {
        self.name_to_codepoint.get(name).map(String::as_str)
    }

    /// Canonical name for a codepoint; only used to check codepoint validity
    #[inline]
    pub fn name_for(&self, codepoint: &str) -> Option<&str> {
        self.codepoint_to_name.get(codepoint).map(String::as_str)
    }

    /// Number of known emoji names
    pub fn len(&self) -> usize {
        self.name_to_codepoint.len()
    }

    pub fn is_empty(&self) -> bool {
        self.name_to_codepoint.is_empty()
    }
}

fn read_table(path: &Path) -> Result<HashMap<String, String>, CatalogError> {
    let raw = fs::read_to_string(path).map_err(|source| CatalogError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| CatalogError::Malformed {
        path: path.to_path_buf(),
        source,
    })
}

/// Catalog loading errors
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Failed to read emoji data file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed emoji data file {}: {source}", path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
