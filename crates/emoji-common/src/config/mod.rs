//! Configuration structs

mod app_config;

pub use app_config::{
    AppSettings, CatalogConfig, ConfigError, EmojiConfig, Environment, StorageConfig,
    UploadBackendKind,
};
