//! # emoji-service
//!
//! Application layer: the Unicode emoji catalog, emoji resolution and reaction
//! validation, custom emoji administration checks, and request DTOs.

pub mod catalog;
pub mod dto;
pub mod services;
pub mod upload;

pub use catalog::{CatalogError, EmojiCatalog};
pub use services::{
    check_valid_emoji_name, EmojiAdminService, EmojiContext, EmojiResolver, EmojiService,
    NewCustomEmoji, ReactionService, ReactionValidator, ResolvedEmoji, ServiceError,
    ServiceResult,
};
pub use upload::{
    emoji_file_name, upload_backend, LocalUploadBackend, S3UploadBackend, UploadBackend,
};
