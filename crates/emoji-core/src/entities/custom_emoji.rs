//! Custom emoji entity - an image-backed emoji owned by a single realm

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::Snowflake;

/// Realm-scoped custom emoji
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomEmoji {
    pub id: Snowflake,
    pub realm_id: Snowflake,
    /// Unique within the realm; doubles as the reaction code
    pub name: String,
    /// Stored image file name, see `emoji_file_name`
    pub file_name: String,
    /// Weak reference to the creating user
    pub author_id: Option<Snowflake>,
    pub deactivated: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CustomEmoji {
    /// Create a new, active CustomEmoji
    pub fn new(
        id: Snowflake,
        realm_id: Snowflake,
        name: String,
        file_name: String,
        author_id: Option<Snowflake>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            realm_id,
            name,
            file_name,
            author_id,
            deactivated: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Check if the emoji can be used for new reactions
    #[inline]
    pub fn is_active(&self) -> bool {
        !self.deactivated
    }

    /// Check if `user_id` created this emoji. Author-less emoji belong to nobody.
    #[inline]
    pub fn is_authored_by(&self, user_id: Snowflake) -> bool {
        self.author_id == Some(user_id)
    }

    /// Deactivate the emoji. There is no way back.
    pub fn deactivate(&mut self) {
        self.deactivated = true;
        self.updated_at = Utc::now();
    }
}
