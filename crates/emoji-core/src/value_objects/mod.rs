//! Value objects - immutable types that represent domain concepts

mod emoji_type;
mod snowflake;

pub use emoji_type::{is_extra_emoji, EmojiType, EmojiTypeParseError, EXTRA_EMOJI_NAMES};
pub use snowflake::Snowflake;
