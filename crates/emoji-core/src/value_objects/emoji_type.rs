//! Emoji type - which namespace an emoji code belongs to

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Built-in emoji that live outside both the Unicode catalog and any realm.
pub const EXTRA_EMOJI_NAMES: &[&str] = &["zulip"];

/// Check whether `name` is one of the built-in extra emoji
#[inline]
pub fn is_extra_emoji(name: &str) -> bool {
    EXTRA_EMOJI_NAMES.contains(&name)
}

/// The three emoji namespaces a reaction can refer to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmojiType {
    /// Realm-scoped, image-backed emoji; code equals name
    #[serde(alias = "realm_emoji")]
    CustomEmoji,
    /// Built-in extra emoji; code equals name
    #[serde(alias = "zulip_extra_emoji")]
    ExtraEmoji,
    /// Standard Unicode emoji; code is the catalog codepoint
    UnicodeEmoji,
}

impl EmojiType {
    /// Wire name used in requests and stored reactions
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CustomEmoji => "custom_emoji",
            Self::ExtraEmoji => "extra_emoji",
            Self::UnicodeEmoji => "unicode_emoji",
        }
    }
}

impl fmt::Display for EmojiType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error when a string names no known emoji type
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown emoji type: {0}")]
pub struct EmojiTypeParseError(pub String);

impl FromStr for EmojiType {
    type Err = EmojiTypeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "custom_emoji" | "realm_emoji" => Ok(Self::CustomEmoji),
            "extra_emoji" | "zulip_extra_emoji" => Ok(Self::ExtraEmoji),
            "unicode_emoji" => Ok(Self::UnicodeEmoji),
            other => Err(EmojiTypeParseError(other.to_string())),
        }
    }
}
