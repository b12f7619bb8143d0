//! Realm emoji source - read access to an organization's custom emoji
//!
//! The persistence layer owns realms and their emoji. The domain only needs a
//! consistent, read-only view of one realm for the duration of a request.

use std::collections::HashMap;

use crate::entities::CustomEmoji;
use crate::value_objects::Snowflake;

/// Custom emoji of one realm, keyed by name
pub type CustomEmojiMap = HashMap<String, CustomEmoji>;

pub trait RealmEmojiSource: Send + Sync {
    /// Realm identifier, used to build emoji URLs
    fn realm_id(&self) -> Snowflake;

    /// Every custom emoji of the realm, deactivated ones included
    fn custom_emoji(&self) -> &CustomEmojiMap;

    /// Whether only administrators may add or remove custom emoji
    fn restrict_emoji_creation_to_admins(&self) -> bool;

    /// Find a custom emoji by name, deactivated or not
    fn find_emoji(&self, name: &str) -> Option<&CustomEmoji> {
        self.custom_emoji().get(name)
    }

    /// Find a custom emoji that can still be used for new reactions
    fn active_emoji(&self, name: &str) -> Option<&CustomEmoji> {
        self.find_emoji(name).filter(|emoji| emoji.is_active())
    }
}
