//! Realm entity - an organization and the custom emoji it owns

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::entities::CustomEmoji;
use crate::traits::{CustomEmojiMap, RealmEmojiSource};
use crate::value_objects::Snowflake;

/// Realm (organization) entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Realm {
    pub id: Snowflake,
    pub name: String,
    /// When set, only realm administrators may add or remove custom emoji
    pub restrict_emoji_creation_to_admins: bool,
    /// Custom emoji keyed by name, deactivated ones included
    pub emoji: CustomEmojiMap,
    pub created_at: DateTime<Utc>,
}

impl Realm {
    /// Create a new Realm with no custom emoji
    pub fn new(id: Snowflake, name: String) -> Self {
        Self {
            id,
            name,
            restrict_emoji_creation_to_admins: false,
            emoji: HashMap::new(),
            created_at: Utc::now(),
        }
    }

    /// Add or replace a custom emoji, keyed by its name
    pub fn insert_emoji(&mut self, emoji: CustomEmoji) -> Option<CustomEmoji> {
        self.emoji.insert(emoji.name.clone(), emoji)
    }

    /// Builder-style variant of [`Realm::insert_emoji`]
    #[must_use]
    pub fn with_emoji(mut self, emoji: CustomEmoji) -> Self {
        self.insert_emoji(emoji);
        self
    }

    /// Update the emoji creation policy
    pub fn set_restrict_emoji_creation_to_admins(&mut self, restrict: bool) {
        self.restrict_emoji_creation_to_admins = restrict;
    }

    /// Deactivate the named emoji. Returns false if the realm has no such emoji.
    pub fn deactivate_emoji(&mut self, name: &str) -> bool {
        match self.emoji.get_mut(name) {
            Some(emoji) => {
                emoji.deactivate();
                true
            }
            None => false,
        }
    }
}

impl RealmEmojiSource for Realm {
    fn realm_id(&self) -> Snowflake {
        self.id
    }

    fn custom_emoji(&self) -> &CustomEmojiMap {
        &self.emoji
    }

    fn restrict_emoji_creation_to_admins(&self) -> bool {
        self.restrict_emoji_creation_to_admins
    }
}
