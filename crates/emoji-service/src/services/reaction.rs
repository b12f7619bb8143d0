//! Reaction service
//!
//! Turns an add-reaction request into a validated emoji reference.

use emoji_core::{DomainError, EmojiType, RealmEmojiSource, Reaction};
use tracing::{info, instrument};
use validator::Validate;

use crate::dto::AddReactionRequest;

use super::context::EmojiContext;
use super::error::ServiceResult;
use super::resolver::{EmojiResolver, ResolvedEmoji};
use super::validator::ReactionValidator;

/// Reaction service
pub struct ReactionService<'a> {
    ctx: &'a EmojiContext,
}

impl<'a> ReactionService<'a> {
    /// Create a new ReactionService
    pub fn new(ctx: &'a EmojiContext) -> Self {
        Self { ctx }
    }

    /// Build the reaction a request asks for
    ///
    /// A request without a code is resolved by name first; any claimed type is
    /// then ignored. The resulting triple is always validated, so a resolved
    /// reaction goes through both checks.
    #[instrument(skip(self, realm, request), fields(
        realm_id = %realm.realm_id(),
        emoji_name = %request.emoji_name,
    ))]
    pub fn build_reaction(
        &self,
        realm: &dyn RealmEmojiSource,
        request: &AddReactionRequest,
    ) -> ServiceResult<Reaction> {
        request.validate()?;

        let resolved = match &request.emoji_code {
            Some(code) => {
                let emoji_type = match request.reaction_type.as_deref() {
                    Some(claimed) => claimed
                        .parse::<EmojiType>()
                        .map_err(|_| DomainError::InvalidEmojiType)?,
                    None => EmojiType::UnicodeEmoji,
                };
                ResolvedEmoji {
                    emoji_code: code.clone(),
                    emoji_type,
                }
            }
            None => EmojiResolver::new(self.ctx).resolve(realm, &request.emoji_name)?,
        };

        ReactionValidator::new(self.ctx).validate_reaction(
            realm,
            &request.emoji_name,
            &resolved.emoji_code,
            resolved.emoji_type.as_str(),
        )?;

        let reaction = resolved.into_reaction(request.emoji_name.as_str());

        info!(
            emoji_code = %reaction.emoji_code,
            emoji_type = %reaction.emoji_type,
            "Reaction built"
        );
        Ok(reaction)
    }
}
