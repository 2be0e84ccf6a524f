use teloxide::prelude::*;

use crate::bot::handlers::HandlerResult;
use crate::config::Config;
use crate::services::outbound::Outbound;
use crate::services::reply_router::ReplyRouter;
use crate::utils::{
    feedback::CommandFeedback,
    logging::{log_command_error, log_command_success},
    validation::validate_post_text,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostOutcome {
    Unauthorized,
    MissingText,
    ChannelNotConfigured,
    Published(ChatId),
    Failed(String),
}

/// Publishes `text` to the broadcast channel on behalf of an administrator.
pub async fn publish_post(
    outbound: &dyn Outbound,
    is_admin: bool,
    channel: Option<ChatId>,
    text: &str,
) -> PostOutcome {
    if !is_admin {
        return PostOutcome::Unauthorized;
    }

    let Ok(text) = validate_post_text(text) else {
        return PostOutcome::MissingText;
    };

    let Some(channel) = channel else {
        return PostOutcome::ChannelNotConfigured;
    };

    match outbound.deliver_html(channel, text).await {
        Ok(()) => PostOutcome::Published(channel),
        Err(e) => PostOutcome::Failed(e.to_string()),
    }
}

pub async fn handle_post(
    bot: Bot,
    msg: Message,
    text: String,
    router: &ReplyRouter,
    config: &Config,
) -> HandlerResult {
    let feedback = CommandFeedback::new(bot, msg.chat.id);
    let Some(user) = msg.from() else {
        return Ok(());
    };
    let username = user.username.as_deref().unwrap_or("unknown");

    let outcome = publish_post(
        router.outbound().as_ref(),
        router.is_admin(user.id),
        config.channel_id,
        &text,
    )
    .await;

    match outcome {
        PostOutcome::Unauthorized => {
            tracing::warn!("/post rejected for non-admin {} ({})", username, user.id.0);
            feedback.error("Insufficient permissions.").await?;
        }
        PostOutcome::MissingText => {
            feedback
                .validation_error("Nothing to post.", "/post <text>")
                .await?;
        }
        PostOutcome::ChannelNotConfigured => {
            feedback.warning("CHANNEL_ID is not configured.").await?;
        }
        PostOutcome::Published(channel) => {
            log_command_success(
                "/post",
                username,
                user.id.0,
                msg.chat.id.0,
                Some(&format!("published to {}", channel.0)),
            );
            feedback.success("Posted to the channel.").await?;
        }
        PostOutcome::Failed(reason) => {
            log_command_error("/post", username, user.id.0, msg.chat.id.0, &reason);
            feedback.error(&format!("Could not post: {reason}")).await?;
        }
    }

    Ok(())
}
