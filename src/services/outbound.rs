use anyhow::Result;
use async_trait::async_trait;
use teloxide::prelude::*;
use teloxide::types::{InputFile, ParseMode};

use crate::bot::callback_data::reply_keyboard;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Photo,
    Document,
}

/// A file already stored on Telegram, referenced by its file id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Media {
    pub kind: MediaKind,
    pub file_id: String,
    pub caption: Option<String>,
}

/// Single-attempt delivery of messages to a chat.
///
/// Errors are returned to the caller as-is; nothing here retries.
#[async_trait]
pub trait Outbound: Send + Sync {
    /// Sends `text` exactly as given, with no markup parsing.
    async fn deliver(&self, chat: ChatId, text: &str) -> Result<()>;

    /// Sends an HTML formatted message.
    async fn deliver_html(&self, chat: ChatId, html: &str) -> Result<()>;

    /// Sends an HTML formatted message with a reply button that arms `target`.
    async fn deliver_with_reply_trigger(&self, chat: ChatId, html: &str, target: ChatId) -> Result<()>;

    /// Re-sends a photo or document with `caption`.
    async fn deliver_media(&self, chat: ChatId, media: &Media, caption: &str) -> Result<()>;
}

pub struct TelegramOutbound {
    bot: Bot,
}

impl TelegramOutbound {
    pub fn new(bot: Bot) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl Outbound for TelegramOutbound {
    async fn deliver(&self, chat: ChatId, text: &str) -> Result<()> {
        self.bot.send_message(chat, text).await?;
        Ok(())
    }

    async fn deliver_html(&self, chat: ChatId, html: &str) -> Result<()> {
        self.bot
            .send_message(chat, html)
            .parse_mode(ParseMode::Html)
            .await?;
        Ok(())
    }

    async fn deliver_with_reply_trigger(&self, chat: ChatId, html: &str, target: ChatId) -> Result<()> {
        self.bot
            .send_message(chat, html)
            .parse_mode(ParseMode::Html)
            .reply_markup(reply_keyboard(target))
            .await?;
        Ok(())
    }

    async fn deliver_media(&self, chat: ChatId, media: &Media, caption: &str) -> Result<()> {
        let file = InputFile::file_id(media.file_id.clone());
        match media.kind {
            MediaKind::Photo => {
                self.bot.send_photo(chat, file).caption(caption).await?;
            }
            MediaKind::Document => {
                self.bot.send_document(chat, file).caption(caption).await?;
            }
        }
        Ok(())
    }
}
