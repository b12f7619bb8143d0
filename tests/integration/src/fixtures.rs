//! Test fixtures and data generators
//!
//! Provides reusable realms and users for integration tests.

use std::sync::atomic::{AtomicI64, Ordering};

use emoji_core::{CustomEmoji, Realm, Snowflake, UserProfile};

/// Counter for unique test ids
static COUNTER: AtomicI64 = AtomicI64::new(1);

/// Get a unique id for test data
pub fn unique_id() -> Snowflake {
    Snowflake::new(COUNTER.fetch_add(1, Ordering::SeqCst))
}

/// A realm with its members
pub struct TestRealm {
    pub realm: Realm,
    pub admin: UserProfile,
    pub hamlet: UserProfile,
    pub othello: UserProfile,
}

impl TestRealm {
    /// Fresh realm with an admin and two members, no custom emoji
    pub fn new() -> Self {
        let realm_id = unique_id();
        Self {
            realm: Realm::new(realm_id, format!("realm{realm_id}")),
            admin: UserProfile::admin(unique_id(), realm_id, "Iago".to_string()),
            hamlet: UserProfile::new(unique_id(), realm_id, "King Hamlet".to_string()),
            othello: UserProfile::new(unique_id(), realm_id, "Othello".to_string()),
        }
    }

    /// Store a custom emoji as if `author` had uploaded `<name>.png`
    pub fn add_emoji(&mut self, name: &str, author: Option<&UserProfile>) -> &CustomEmoji {
        let emoji = CustomEmoji::new(
            unique_id(),
            self.realm.id,
            name.to_string(),
            format!("{name}.png"),
            author.map(|user| user.id),
        );
        self.realm.insert_emoji(emoji);
        &self.realm.emoji[name]
    }
}

impl Default for TestRealm {
    fn default() -> Self {
        Self::new()
    }
}
