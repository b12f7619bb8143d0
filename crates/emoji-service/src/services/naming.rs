//! Custom emoji naming policy

use std::sync::LazyLock;

use emoji_core::DomainError;
use regex::Regex;

// One or more of [0-9a-z.\-_], not ending in '.', '-' or '_'
static EMOJI_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9a-z.\-_]*[0-9a-z]$").unwrap());

/// Check a proposed custom emoji name against the naming policy
pub fn check_valid_emoji_name(emoji_name: &str) -> Result<(), DomainError> {
    if EMOJI_NAME_RE.is_match(emoji_name) {
        Ok(())
    } else {
        Err(DomainError::InvalidEmojiNameCharacters)
    }
}
