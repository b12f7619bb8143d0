//! Reaction validator
//!
//! Re-checks a client-claimed `(name, code, type)` triple against the catalog and
//! the realm's custom emoji, independently of the resolver. The claimed type
//! decides which namespace is consulted; custom emoji are looked up by code,
//! deactivated ones included.

use std::str::FromStr;

use emoji_core::{is_extra_emoji, DomainError, EmojiType, RealmEmojiSource};
use tracing::{debug, instrument};

use super::context::EmojiContext;
use super::error::ServiceResult;

/// Validator for emoji references arriving from clients
pub struct ReactionValidator<'a> {
    ctx: &'a EmojiContext,
}

impl<'a> ReactionValidator<'a> {
    /// Create a new ReactionValidator
    pub fn new(ctx: &'a EmojiContext) -> Self {
        Self { ctx }
    }

    /// Check whether a triple may be used for a new reaction in `realm`
    #[instrument(skip(self, realm), fields(realm_id = %realm.realm_id()))]
    pub fn validate_reaction(
        &self,
        realm: &dyn RealmEmojiSource,
        emoji_name: &str,
        emoji_code: &str,
        emoji_type: &str,
    ) -> ServiceResult<()> {
        let emoji_type =
            EmojiType::from_str(emoji_type).map_err(|_| DomainError::InvalidEmojiType)?;

        match emoji_type {
            EmojiType::CustomEmoji => {
                let emoji = realm
                    .find_emoji(emoji_code)
                    .ok_or(DomainError::InvalidCustomEmoji)?;
                if emoji.deactivated {
                    return Err(DomainError::DeactivatedEmoji.into());
                }
                if emoji_name != emoji_code {
                    return Err(DomainError::InvalidEmojiName.into());
                }
            }
            EmojiType::ExtraEmoji => {
                if !is_extra_emoji(emoji_code) {
                    return Err(DomainError::InvalidEmojiCode.into());
                }
                if emoji_name != emoji_code {
                    return Err(DomainError::InvalidEmojiName.into());
                }
            }
            EmojiType::UnicodeEmoji => {
                let catalog = self.ctx.catalog();
                if catalog.name_for(emoji_code).is_none() {
                    return Err(DomainError::InvalidEmojiCode.into());
                }
                if catalog.codepoint_for(emoji_name) != Some(emoji_code) {
                    return Err(DomainError::InvalidEmojiName.into());
                }
            }
        }

        debug!(%emoji_type, "Reaction emoji accepted");
        Ok(())
    }
}
