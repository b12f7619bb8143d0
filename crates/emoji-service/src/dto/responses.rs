//! Response DTOs
//!
//! All response DTOs implement `Serialize` for JSON output.

use emoji_core::{CustomEmoji, Snowflake};
use serde::Serialize;

/// A realm's custom emoji as shown to clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CustomEmojiResponse {
    pub id: Snowflake,
    pub name: String,
    pub source_url: String,
    pub deactivated: bool,
    pub author_id: Option<Snowflake>,
}

impl CustomEmojiResponse {
    /// Build from an entity and its already resolved public URL
    pub fn new(emoji: &CustomEmoji, source_url: String) -> Self {
        Self {
            id: emoji.id,
            name: emoji.name.clone(),
            source_url,
            deactivated: emoji.deactivated,
            author_id: emoji.author_id,
        }
    }
}
