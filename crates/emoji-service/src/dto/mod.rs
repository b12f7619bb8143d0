//! Data transfer objects for emoji requests and responses
//!
//! - Request DTOs with validation for client input
//! - Response DTOs for serializing realm emoji

pub mod requests;
pub mod responses;

pub use requests::{AddReactionRequest, CreateCustomEmojiRequest};
pub use responses::CustomEmojiResponse;
