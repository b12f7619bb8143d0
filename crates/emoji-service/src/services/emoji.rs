//! Emoji service
//!
//! Public URLs and storage names for custom emoji images.

use emoji_core::{CustomEmoji, RealmEmojiSource, Snowflake};

use crate::dto::CustomEmojiResponse;
use crate::upload;

use super::context::EmojiContext;

/// Custom emoji lookup service
pub struct EmojiService<'a> {
    ctx: &'a EmojiContext,
}

impl<'a> EmojiService<'a> {
    /// Create a new EmojiService
    pub fn new(ctx: &'a EmojiContext) -> Self {
        Self { ctx }
    }

    /// Public URL of a stored emoji image
    pub fn emoji_url(&self, emoji_file_name: &str, realm_id: Snowflake) -> String {
        self.ctx.upload().emoji_url(emoji_file_name, realm_id)
    }

    /// Storage name for an uploaded emoji image
    pub fn emoji_file_name(&self, uploaded_file_name: &str, emoji_name: &str) -> String {
        upload::emoji_file_name(uploaded_file_name, emoji_name)
    }

    /// Client view of one custom emoji
    pub fn describe(
        &self,
        realm: &dyn RealmEmojiSource,
        emoji: &CustomEmoji,
    ) -> CustomEmojiResponse {
        CustomEmojiResponse::new(emoji, self.emoji_url(&emoji.file_name, realm.realm_id()))
    }

    /// Every custom emoji of the realm, deactivated ones included, sorted by name
    pub fn list_realm_emoji(&self, realm: &dyn RealmEmojiSource) -> Vec<CustomEmojiResponse> {
        let mut emoji: Vec<_> = realm
            .custom_emoji()
            .values()
            .map(|emoji| self.describe(realm, emoji))
            .collect();
        emoji.sort_by(|a, b| a.name.cmp(&b.name));
        emoji
    }
}
