use std::sync::Arc;

use teloxide::prelude::*;
use teloxide::types::Chat;
use teloxide::utils::html;

use crate::bot::commands::prices::ORDER_PROMPT;
use crate::bot::handlers::general_message::extract_media;
use crate::bot::handlers::{HandlerResult, OrderDialogue, OrderState};
use crate::services::outbound::Media;
use crate::services::reply_router::{Actor, ReplyRouter};
use crate::utils::logging::log_relay;

pub async fn start_order(bot: Bot, chat_id: ChatId, dialogue: OrderDialogue) -> HandlerResult {
    bot.send_message(chat_id, ORDER_PROMPT).await?;
    dialogue.update(OrderState::AwaitingDetails).await?;
    Ok(())
}

pub async fn cancel_order(bot: Bot, chat_id: ChatId, dialogue: OrderDialogue) -> HandlerResult {
    dialogue.exit().await?;
    bot.send_message(chat_id, "Okay, cancelled. Send /order whenever you are ready 👌")
        .await?;
    Ok(())
}

/// Relays the message that describes an order, then ends the dialogue.
pub async fn order_details(
    bot: Bot,
    msg: Message,
    dialogue: OrderDialogue,
    router: Arc<ReplyRouter>,
) -> HandlerResult {
    let Some(user) = msg.from() else {
        return Ok(());
    };

    let actor = Actor::from_user(user);
    let media = extract_media(&msg);
    let relay = relay_order(
        &router,
        &actor,
        msg.chat.id,
        chat_kind_label(&msg.chat),
        media.as_ref(),
        msg.text(),
    )
    .await;

    let reached = match relay {
        OrderRelay::NeedsDetails => {
            bot.send_message(
                msg.chat.id,
                "Please describe the order in a message or attach a photo or a document. /cancel to stop.",
            )
            .await?;
            return Ok(());
        }
        OrderRelay::Relayed { reached } => reached,
    };

    let ack = if reached > 0 || router.admins().is_empty() {
        "Got it! Your order has been passed to the admins 💌 We will get in touch soon."
    } else {
        "Sorry, your order could not be delivered right now. Please try again later."
    };
    bot.send_message(msg.chat.id, ack).await?;
    dialogue.exit().await?;
    Ok(())
}

/// Result of handing an order message to the administrators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderRelay {
    /// Nothing usable in the message; the user is asked again.
    NeedsDetails,
    /// `reached` counts administrators who got the order card.
    Relayed { reached: usize },
}

/// Sends an order card with a reply button to every administrator, followed by
/// the attachment or the order text.
pub async fn relay_order(
    router: &ReplyRouter,
    actor: &Actor,
    chat_id: ChatId,
    chat_kind: &str,
    media: Option<&Media>,
    text: Option<&str>,
) -> OrderRelay {
    let text = text.map(str::trim);
    if media.is_none() && text.map_or(true, |t| t.is_empty() || t.starts_with('/')) {
        return OrderRelay::NeedsDetails;
    }

    let card = order_card(actor, chat_id, chat_kind);
    let reached = router.notify_admins(&card, Some(chat_id)).await;
    log_relay("order", chat_id.0, reached, router.admins().len());

    match media {
        Some(media) => {
            let forwarded = router.forward_media_to_admins(media, "order").await;
            log_relay("order media", chat_id.0, forwarded, router.admins().len());
        }
        None => {
            let body = format!("Order text:\n{}", html::escape(text.unwrap_or_default()));
            router.notify_admins(&body, None).await;
        }
    }

    OrderRelay::Relayed { reached }
}

pub fn chat_kind_label(chat: &Chat) -> &'static str {
    if chat.is_private() {
        "private"
    } else if chat.is_channel() {
        "channel"
    } else if chat.is_supergroup() {
        "supergroup"
    } else {
        "group"
    }
}

pub fn order_card(actor: &Actor, chat_id: ChatId, chat_kind: &str) -> String {
    format!(
        "<b>New order</b>\n\
         From: <code>{}</code> (id: <code>{}</code>, {})\n\
         Chat: <code>{}</code> (id: <code>{}</code>)\n\
         Attachments follow below, or the order text in the next message.",
        html::escape(&actor.full_name),
        actor.id.0,
        html::escape(&actor.username_label()),
        chat_kind,
        chat_id.0
    )
}
