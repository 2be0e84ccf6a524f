use anyhow::{anyhow, Result};
use teloxide::types::UserId;

/// Longest text Telegram accepts in a single message.
pub const MAX_MESSAGE_LEN: usize = 4096;

/// Parses the comma-separated `ADMIN_IDS` value.
///
/// Blank and unparsable entries are skipped, as are duplicates. Only positive
/// ids can belong to a user, so negative entries are rejected too.
pub fn parse_admin_ids(raw: &str) -> Vec<UserId> {
    let mut ids = Vec::new();
    for entry in raw.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        match entry.parse::<u64>() {
            Ok(id) if id > 0 => {
                let id = UserId(id);
                if !ids.contains(&id) {
                    ids.push(id);
                }
            }
            _ => tracing::warn!("Skipping invalid ADMIN_IDS entry '{}'", entry),
        }
    }
    ids
}

pub fn validate_telegram_chat_id(chat_id: i64) -> Result<()> {
    // Telegram chat IDs should be non-zero
    if chat_id == 0 {
        return Err(anyhow!("Chat ID cannot be zero"));
    }

    // Users and bots fit in 52 bits
    if chat_id > 0xF_FFFF_FFFF_FFFF {
        return Err(anyhow!("Invalid user chat ID range"));
    }

    // Channels and supergroups live around -100xxxxxxxxxx
    if chat_id < -2_000_000_000_000 {
        return Err(anyhow!("Chat ID out of valid range"));
    }

    Ok(())
}

/// Checks the body of a `/post` broadcast and returns it trimmed.
pub fn validate_post_text(text: &str) -> Result<&str> {
    let text = text.trim();

    if text.is_empty() {
        return Err(anyhow!("Post text cannot be empty"));
    }

    if text.chars().count() > MAX_MESSAGE_LEN {
        return Err(anyhow!(
            "Post text cannot be longer than {} characters",
            MAX_MESSAGE_LEN
        ));
    }

    Ok(text)
}
