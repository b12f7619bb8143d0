//! Reaction - the validated (name, code, type) emoji reference
//!
//! Invariants, enforced by the reaction validator rather than the constructor:
//! - custom and extra emoji: `emoji_code == emoji_name`
//! - unicode emoji: `emoji_code` is the catalog codepoint of `emoji_name`

use serde::{Deserialize, Serialize};

use crate::value_objects::EmojiType;

/// Emoji reference stored on messages and sent to clients
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Reaction {
    pub emoji_name: String,
    pub emoji_code: String,
    #[serde(rename = "reaction_type")]
    pub emoji_type: EmojiType,
}

impl Reaction {
    /// Create a new Reaction
    pub fn new(emoji_name: String, emoji_code: String, emoji_type: EmojiType) -> Self {
        Self {
            emoji_name,
            emoji_code,
            emoji_type,
        }
    }
}
