//! Request DTOs
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.
//! Field checks here are about shape only; emoji semantics live in the services.

use serde::Deserialize;
use validator::Validate;

// ============================================================================
// Reaction Requests
// ============================================================================

/// Add reaction request
///
/// Clients either send just a name, which is then resolved, or a full
/// `(name, code, type)` triple, which is validated as claimed.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AddReactionRequest {
    #[validate(length(min = 1, max = 60, message = "Emoji name must be 1-60 characters"))]
    pub emoji_name: String,

    #[validate(length(max = 80, message = "Emoji code must be at most 80 characters"))]
    pub emoji_code: Option<String>,

    /// Defaults to `unicode_emoji` when a code is given
    pub reaction_type: Option<String>,
}

impl AddReactionRequest {
    /// Request carrying only an emoji name
    pub fn by_name(emoji_name: impl Into<String>) -> Self {
        Self {
            emoji_name: emoji_name.into(),
            emoji_code: None,
            reaction_type: None,
        }
    }

    /// Request carrying a full emoji reference
    pub fn with_code(
        emoji_name: impl Into<String>,
        emoji_code: impl Into<String>,
        reaction_type: Option<&str>,
    ) -> Self {
        Self {
            emoji_name: emoji_name.into(),
            emoji_code: Some(emoji_code.into()),
            reaction_type: reaction_type.map(str::to_string),
        }
    }
}

// ============================================================================
// Custom Emoji Requests
// ============================================================================

/// Upload a new custom emoji
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCustomEmojiRequest {
    #[validate(length(min = 1, max = 60, message = "Emoji name must be 1-60 characters"))]
    pub name: String,

    /// Original name of the uploaded image file
    #[validate(length(min = 1, max = 255, message = "File name must be 1-255 characters"))]
    pub file_name: String,
}
