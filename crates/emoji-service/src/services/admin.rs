//! Custom emoji administration
//!
//! Decides who may add or remove custom emoji. Rules, in order:
//! - realm administrators may always administer emoji
//! - with `restrict_emoji_creation_to_admins`, nobody else may
//! - anyone may add a new emoji
//! - only the author may remove an existing one

use emoji_core::{CustomEmoji, DomainError, RealmEmojiSource, UserProfile};
use tracing::{debug, info, instrument};
use validator::Validate;

use crate::dto::CreateCustomEmojiRequest;
use crate::upload::emoji_file_name;

use super::context::EmojiContext;
use super::error::ServiceResult;
use super::naming::check_valid_emoji_name;

/// A custom emoji that passed every creation check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCustomEmoji {
    pub name: String,
    /// Storage name for the uploaded image
    pub file_name: String,
    /// Public URL the image will be served from once stored
    pub source_url: String,
}

/// Custom emoji administration service
pub struct EmojiAdminService<'a> {
    ctx: &'a EmojiContext,
}

impl<'a> EmojiAdminService<'a> {
    /// Create a new EmojiAdminService
    pub fn new(ctx: &'a EmojiContext) -> Self {
        Self { ctx }
    }

    /// Check whether `user` may administer `emoji_name`, or add emoji if `None`
    #[instrument(skip(self, user, realm), fields(user_id = %user.id, realm_id = %realm.realm_id()))]
    pub fn check_emoji_admin(
        &self,
        user: &UserProfile,
        realm: &dyn RealmEmojiSource,
        emoji_name: Option<&str>,
    ) -> ServiceResult<()> {
        if user.is_realm_admin() {
            return Ok(());
        }
        if realm.restrict_emoji_creation_to_admins() {
            debug!("Emoji administration restricted to admins");
            return Err(DomainError::MustBeOrganizationAdmin.into());
        }

        let Some(emoji_name) = emoji_name else {
            return Ok(());
        };

        let is_author = realm
            .find_emoji(emoji_name)
            .is_some_and(|emoji| emoji.is_authored_by(user.id));
        if !is_author {
            debug!("Not the emoji author");
            return Err(DomainError::MustBeAdminOrEmojiAuthor.into());
        }
        Ok(())
    }

    /// Run every check for adding a custom emoji
    ///
    /// Returns the validated name with its storage file name. Nothing is stored.
    #[instrument(
        skip(self, user, realm, request),
        fields(user_id = %user.id, name = %request.name)
    )]
    pub fn check_add_custom_emoji(
        &self,
        user: &UserProfile,
        realm: &dyn RealmEmojiSource,
        request: &CreateCustomEmojiRequest,
    ) -> ServiceResult<NewCustomEmoji> {
        self.check_emoji_admin(user, realm, None)?;
        check_valid_emoji_name(&request.name)?;
        request.validate()?;

        // Deactivated names may be reused
        if realm.active_emoji(&request.name).is_some() {
            return Err(DomainError::EmojiNameTaken.into());
        }

        let file_name = emoji_file_name(&request.file_name, &request.name);
        let new_emoji = NewCustomEmoji {
            name: request.name.clone(),
            source_url: self.ctx.upload().emoji_url(&file_name, realm.realm_id()),
            file_name,
        };
        info!(file_name = %new_emoji.file_name, "Custom emoji accepted");
        Ok(new_emoji)
    }

    /// Run every check for removing (deactivating) a custom emoji
    #[instrument(skip(self, user, realm), fields(user_id = %user.id))]
    pub fn check_remove_custom_emoji<'r>(
        &self,
        user: &UserProfile,
        realm: &'r dyn RealmEmojiSource,
        emoji_name: &str,
    ) -> ServiceResult<&'r CustomEmoji> {
        let emoji = realm
            .active_emoji(emoji_name)
            .ok_or_else(|| DomainError::EmojiNotFound(emoji_name.to_string()))?;
        self.check_emoji_admin(user, realm, Some(emoji_name))?;

        info!(emoji_id = %emoji.id, "Custom emoji removal allowed");
        Ok(emoji)
    }
}
