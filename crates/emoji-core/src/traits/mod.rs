//! Collaborator traits (ports) - what the emoji services need from the outside

mod realm;

pub use realm::{CustomEmojiMap, RealmEmojiSource};
