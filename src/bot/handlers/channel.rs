use teloxide::prelude::*;
use teloxide::types::ParseMode;

use crate::bot::handlers::HandlerResult;

/// Answers `/channel_id` posted in a channel where the bot is an administrator.
pub async fn channel_post_handler(bot: Bot, msg: Message) -> HandlerResult {
    if msg.text().map(str::trim) != Some("/channel_id") {
        return Ok(());
    }

    tracing::info!("Channel id requested in chat {}", msg.chat.id.0);
    bot.send_message(msg.chat.id, format!("Channel id: <code>{}</code>", msg.chat.id.0))
        .parse_mode(ParseMode::Html)
        .await?;
    Ok(())
}
