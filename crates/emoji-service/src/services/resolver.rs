//! Emoji resolver
//!
//! Maps a typed emoji name to its canonical code and type. Sources are checked
//! in a fixed order and the first match wins:
//!
//! 1. active custom emoji of the realm
//! 2. built-in extra emoji
//! 3. Unicode catalog
//!
//! A realm can therefore shadow `zulip` or any Unicode name with its own emoji.

use emoji_core::{is_extra_emoji, DomainError, EmojiType, RealmEmojiSource, Reaction};
use tracing::{debug, instrument};

use super::context::EmojiContext;
use super::error::ServiceResult;

/// Code and type an emoji name resolved to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedEmoji {
    pub emoji_code: String,
    pub emoji_type: EmojiType,
}

impl ResolvedEmoji {
    /// Pair with the name that was resolved
    pub fn into_reaction(self, emoji_name: impl Into<String>) -> Reaction {
        Reaction::new(emoji_name.into(), self.emoji_code, self.emoji_type)
    }
}

/// Emoji name resolver
pub struct EmojiResolver<'a> {
    ctx: &'a EmojiContext,
}

impl<'a> EmojiResolver<'a> {
    /// Create a new EmojiResolver
    pub fn new(ctx: &'a EmojiContext) -> Self {
        Self { ctx }
    }

    /// Resolve an emoji name within a realm
    #[instrument(skip(self, realm), fields(realm_id = %realm.realm_id()))]
    pub fn resolve(
        &self,
        realm: &dyn RealmEmojiSource,
        emoji_name: &str,
    ) -> ServiceResult<ResolvedEmoji> {
        let resolved = if realm.active_emoji(emoji_name).is_some() {
            ResolvedEmoji {
                emoji_code: emoji_name.to_string(),
                emoji_type: EmojiType::CustomEmoji,
            }
        } else if is_extra_emoji(emoji_name) {
            ResolvedEmoji {
                emoji_code: emoji_name.to_string(),
                emoji_type: EmojiType::ExtraEmoji,
            }
        } else if let Some(codepoint) = self.ctx.catalog().codepoint_for(emoji_name) {
            ResolvedEmoji {
                emoji_code: codepoint.to_string(),
                emoji_type: EmojiType::UnicodeEmoji,
            }
        } else {
            debug!("Unknown emoji name");
            return Err(DomainError::EmojiNotFound(emoji_name.to_string()).into());
        };

        debug!(
            emoji_code = %resolved.emoji_code,
            emoji_type = %resolved.emoji_type,
            "Emoji resolved"
        );
        Ok(resolved)
    }

    /// Check that an emoji name resolves, discarding the result
    pub fn check_valid_emoji(
        &self,
        realm: &dyn RealmEmojiSource,
        emoji_name: &str,
    ) -> ServiceResult<()> {
        self.resolve(realm, emoji_name).map(|_| ())
    }
}
