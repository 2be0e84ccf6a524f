use anyhow::{anyhow, Result};
use std::env;
use teloxide::types::{ChatId, UserId};
use url::Url;

use crate::utils::validation::{parse_admin_ids, validate_telegram_chat_id};

#[derive(Debug, Clone)]
pub struct Config {
    pub telegram_bot_token: String,
    /// Static allow-list of administrator identities.
    pub admin_ids: Vec<UserId>,
    /// Broadcast target for `/post`; `None` when `CHANNEL_ID` is unset or `0`.
    pub channel_id: Option<ChatId>,
    pub http_port: u16,
    pub contact_url: Option<Url>,
    pub channel_url: Option<Url>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let token = env::var("TELEGRAM_BOT_TOKEN")
            .map_err(|_| anyhow!("TELEGRAM_BOT_TOKEN must be set"))?;

        if token.trim().is_empty() {
            return Err(anyhow!("TELEGRAM_BOT_TOKEN must be set"));
        }

        let admin_ids = parse_admin_ids(&env::var("ADMIN_IDS").unwrap_or_default());
        if admin_ids.is_empty() {
            tracing::warn!("ADMIN_IDS is empty, nobody will receive orders or messages");
        }

        let channel_id = match env::var("CHANNEL_ID") {
            Ok(raw) if !raw.trim().is_empty() => {
                let id: i64 = raw
                    .trim()
                    .parse()
                    .map_err(|_| anyhow!("Invalid CHANNEL_ID"))?;
                if id == 0 {
                    None
                } else {
                    validate_telegram_chat_id(id).map_err(|e| anyhow!("Invalid CHANNEL_ID: {e}"))?;
                    Some(ChatId(id))
                }
            }
            _ => None,
        };

        let port_str = env::var("HTTP_PORT").unwrap_or_else(|_| "3000".to_string());
        let http_port = port_str
            .trim()
            .parse()
            .map_err(|_| anyhow!("Invalid HTTP_PORT"))?;

        Ok(Config {
            telegram_bot_token: token,
            admin_ids,
            channel_id,
            http_port,
            contact_url: optional_url("CONTACT_URL")?,
            channel_url: optional_url("CHANNEL_URL")?,
        })
    }
}

fn optional_url(var: &str) -> Result<Option<Url>> {
    match env::var(var) {
        Ok(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|e| anyhow!("Invalid {var}: {e}")),
        _ => Ok(None),
    }
}
