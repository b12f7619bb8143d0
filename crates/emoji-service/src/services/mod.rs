//! Business logic services
//!
//! Emoji resolution, reaction validation, and custom emoji administration.
//! Every service borrows an [`EmojiContext`] and performs no I/O.

pub mod admin;
pub mod context;
pub mod emoji;
pub mod error;
pub mod naming;
pub mod reaction;
pub mod resolver;
pub mod validator;

// Re-export all services for convenience
pub use admin::{EmojiAdminService, NewCustomEmoji};
pub use context::EmojiContext;
pub use emoji::EmojiService;
pub use error::{ServiceError, ServiceResult};
pub use naming::check_valid_emoji_name;
pub use reaction::ReactionService;
pub use resolver::{EmojiResolver, ResolvedEmoji};
pub use validator::ReactionValidator;
