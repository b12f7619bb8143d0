//! # emoji-core
//!
//! Domain layer for organization emoji: realms, custom emoji, actors, reactions,
//! and the collaborator traits the service layer depends on.
//! This crate has zero dependencies on infrastructure (file system, storage, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{CustomEmoji, Reaction, Realm, UserProfile};
pub use error::{DomainError, DomainResult};
pub use traits::{CustomEmojiMap, RealmEmojiSource};
pub use value_objects::{
    is_extra_emoji, EmojiType, EmojiTypeParseError, Snowflake, EXTRA_EMOJI_NAMES,
};
