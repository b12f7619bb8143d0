//! Domain errors - error types for emoji resolution, validation, and administration
//!
//! The `Display` text of every variant is shown to end users verbatim.

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Emoji '{0}' does not exist")]
    EmojiNotFound(String),

    // =========================================================================
    // Reaction Validation Errors
    // =========================================================================
    #[error("Invalid custom emoji.")]
    InvalidCustomEmoji,

    #[error("This custom emoji has been deactivated.")]
    DeactivatedEmoji,

    #[error("Invalid emoji name.")]
    InvalidEmojiName,

    #[error("Invalid emoji code.")]
    InvalidEmojiCode,

    #[error("Invalid emoji type.")]
    InvalidEmojiType,

    // =========================================================================
    // Naming Policy Errors
    // =========================================================================
    #[error("Invalid characters in emoji name")]
    InvalidEmojiNameCharacters,

    #[error("A custom emoji with this name already exists.")]
    EmojiNameTaken,

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("Must be an organization administrator")]
    MustBeOrganizationAdmin,

    #[error("Must be an organization administrator or emoji author")]
    MustBeAdminOrEmojiAuthor,
}

impl DomainError {
    /// Get an error code string for logs
    pub fn code(&self) -> &'static str {
        match self {
            Self::EmojiNotFound(_) => "UNKNOWN_EMOJI",

            Self::InvalidCustomEmoji => "INVALID_CUSTOM_EMOJI",
            Self::DeactivatedEmoji => "DEACTIVATED_EMOJI",
            Self::InvalidEmojiName => "INVALID_EMOJI_NAME",
            Self::InvalidEmojiCode => "INVALID_EMOJI_CODE",
            Self::InvalidEmojiType => "INVALID_EMOJI_TYPE",

            Self::InvalidEmojiNameCharacters => "INVALID_EMOJI_NAME",
            Self::EmojiNameTaken => "EMOJI_NAME_TAKEN",

            Self::MustBeOrganizationAdmin => "MUST_BE_ADMIN",
            Self::MustBeAdminOrEmojiAuthor => "MUST_BE_ADMIN_OR_AUTHOR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::EmojiNotFound(_))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidCustomEmoji
                | Self::DeactivatedEmoji
                | Self::InvalidEmojiName
                | Self::InvalidEmojiCode
                | Self::InvalidEmojiType
                | Self::InvalidEmojiNameCharacters
                | Self::EmojiNameTaken
        )
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(
            self,
            Self::MustBeOrganizationAdmin | Self::MustBeAdminOrEmojiAuthor
        )
    }
}

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
