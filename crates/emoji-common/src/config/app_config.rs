//! Application configuration structs
//!
//! Loads configuration from environment variables (and a `.env` file if present).

use serde::Deserialize;
use std::env;
use std::path::PathBuf;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct EmojiConfig {
    pub app: AppSettings,
    pub catalog: CatalogConfig,
    pub storage: StorageConfig,
}

/// General application settings
#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_app_name")]
    pub name: String,
    #[serde(default = "default_env")]
    pub env: Environment,
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }
}

/// Location of the generated Unicode emoji catalog
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogConfig {
    /// JSON object mapping emoji name to codepoint
    pub name_to_codepoint_path: PathBuf,
    /// JSON object mapping codepoint to canonical emoji name
    pub codepoint_to_name_path: PathBuf,
}

impl CatalogConfig {
    /// Catalog files with their generated names inside `dir`
    #[must_use]
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        Self {
            name_to_codepoint_path: dir.join("name_to_codepoint.json"),
            codepoint_to_name_path: dir.join("codepoint_to_name.json"),
        }
    }
}

/// Where custom emoji images are served from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum UploadBackendKind {
    #[default]
    Local,
    S3,
}

/// Upload storage configuration
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    #[serde(default)]
    pub backend: UploadBackendKind,
    /// Prefix for locally served uploads, e.g. `https://chat.example.com`
    #[serde(default)]
    pub base_url: String,
    /// Bucket holding avatars and emoji; required for the S3 backend
    #[serde(default)]
    pub s3_avatar_bucket: Option<String>,
}

// Default value functions
fn default_app_name() -> String {
    "emoji-service".to_string()
}

fn default_env() -> Environment {
    Environment::Development
}

fn default_emoji_data_dir() -> String {
    "static/generated/emoji".to_string()
}

impl EmojiConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if a variable holds an invalid value, or if the S3
    /// backend is selected without a bucket.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let env = match lookup("APP_ENV") {
            Some(s) => match s.to_lowercase().as_str() {
                "production" => Environment::Production,
                "staging" => Environment::Staging,
                "development" => Environment::Development,
                _ => return Err(ConfigError::InvalidValue("APP_ENV", s)),
            },
            None => default_env(),
        };

        let data_dir = lookup("EMOJI_DATA_DIR").unwrap_or_else(default_emoji_data_dir);
        let mut catalog = CatalogConfig::in_dir(data_dir);
        if let Some(path) = lookup("EMOJI_NAME_TO_CODEPOINT_PATH") {
            catalog.name_to_codepoint_path = PathBuf::from(path);
        }
        if let Some(path) = lookup("EMOJI_CODEPOINT_TO_NAME_PATH") {
            catalog.codepoint_to_name_path = PathBuf::from(path);
        }

        let backend = match lookup("UPLOAD_BACKEND") {
            Some(s) => match s.to_lowercase().as_str() {
                "local" => UploadBackendKind::Local,
                "s3" => UploadBackendKind::S3,
                _ => return Err(ConfigError::InvalidValue("UPLOAD_BACKEND", s)),
            },
            None => UploadBackendKind::default(),
        };
        let s3_avatar_bucket = lookup("S3_AVATAR_BUCKET").filter(|s| !s.is_empty());
        if backend == UploadBackendKind::S3 && s3_avatar_bucket.is_none() {
            return Err(ConfigError::MissingVar("S3_AVATAR_BUCKET"));
        }

        Ok(Self {
            app: AppSettings {
                name: lookup("APP_NAME").unwrap_or_else(default_app_name),
                env,
            },
            catalog,
            storage: StorageConfig {
                backend,
                base_url: lookup("UPLOAD_BASE_URL")
                    .map(|s| s.trim_end_matches('/').to_string())
                    .unwrap_or_default(),
                s3_avatar_bucket,
            },
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}
