//! Domain entities - core business objects

mod custom_emoji;
mod reaction;
mod realm;
mod user;

pub use custom_emoji::CustomEmoji;
pub use reaction::Reaction;
pub use realm::Realm;
pub use user::UserProfile;
