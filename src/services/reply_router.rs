//! Routes classified user actions between end users and administrators.
//!
//! Every inbound action falls into one of three paths:
//!
//! 1. An administrator pressed "Reply" under a card: arm reply mode for them.
//! 2. An administrator sent plain text: consume their pending target and
//!    deliver the text there, or tell them nothing is pending.
//! 3. Anyone else wrote to the bot: send a card with a reply button to every
//!    administrator and acknowledge the user.
//!
//! The pending target is removed before delivery is attempted, so a failed
//! send never leaves the administrator in reply mode.

use std::sync::Arc;

use teloxide::types::{ChatId, User, UserId};
use teloxide::utils::html;

use crate::services::outbound::{Media, MediaKind, Outbound};
use crate::services::pending_replies::PendingReplies;
use crate::utils::feedback::{format_feedback, FeedbackType};
use crate::utils::logging::{log_relay, log_reply_event, log_reply_failure};

/// Who performed an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    pub id: UserId,
    pub full_name: String,
    pub username: Option<String>,
}

impl Actor {
    pub fn from_user(user: &User) -> Self {
        Self {
            id: user.id,
            full_name: user.full_name(),
            username: user.username.clone(),
        }
    }

    pub fn username_label(&self) -> String {
        match &self.username {
            Some(username) => format!("@{username}"),
            None => "(no username)".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionPayload {
    /// The reply button under a card, carrying the chat it answers.
    ReplyTrigger { target: ChatId },
    /// Plain text message.
    Text(String),
    /// Photo or document, caption included.
    Media(Media),
}

/// A message or button press already classified by the dispatcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InboundAction {
    pub actor: Actor,
    /// Chat the action happened in.
    pub chat_id: ChatId,
    /// Reply buttons are only honoured in a private chat with the bot.
    pub private_chat: bool,
    pub payload: ActionPayload,
}

/// What `ReplyRouter::route` did with an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteOutcome {
    /// The administrator is now in reply mode for this chat.
    Armed(ChatId),
    /// The pending reply was sent to this chat.
    Delivered(ChatId),
    /// The pending target was consumed but the send failed.
    DeliveryFailed { target: ChatId, reason: String },
    /// An administrator wrote with no reply armed.
    NothingPending,
    /// A user message was relayed; `reached` counts administrators who got the card.
    Relayed { reached: usize },
    /// Nothing was done, e.g. a reply press from a non-administrator.
    Ignored,
}

/// Routes actions against the administrator allow-list and their pending replies.
pub struct ReplyRouter {
    admins: Vec<UserId>,
    pending: Arc<PendingReplies>,
    outbound: Arc<dyn Outbound>,
}

impl ReplyRouter {
    pub fn new(admins: Vec<UserId>, pending: Arc<PendingReplies>, outbound: Arc<dyn Outbound>) -> Self {
        Self {
            admins,
            pending,
            outbound,
        }
    }

    pub fn is_admin(&self, user_id: UserId) -> bool {
        self.admins.contains(&user_id)
    }

    pub fn admins(&self) -> &[UserId] {
        &self.admins
    }

    pub fn pending(&self) -> &Arc<PendingReplies> {
        &self.pending
    }

    pub fn outbound(&self) -> &Arc<dyn Outbound> {
        &self.outbound
    }

    pub async fn route(&self, action: InboundAction) -> RouteOutcome {
        let is_admin = self.is_admin(action.actor.id);

        match action.payload {
            ActionPayload::ReplyTrigger { target } => {
                if !is_admin || !action.private_chat {
                    tracing::warn!(
                        "Ignoring reply trigger for chat {} from user {} (admin: {}, private: {})",
                        target.0,
                        action.actor.id.0,
                        is_admin,
                        action.private_chat
                    );
                    return RouteOutcome::Ignored;
                }
                self.arm(action.actor.id, action.chat_id, target).await
            }
            ActionPayload::Text(text) if is_admin => {
                self.deliver_reply(action.actor.id, action.chat_id, &text).await
            }
            ActionPayload::Media(_) if is_admin => {
                tracing::debug!("Ignoring media from admin {}", action.actor.id.0);
                RouteOutcome::Ignored
            }
            payload => self.relay_user_message(&action.actor, action.chat_id, payload).await,
        }
    }

    async fn arm(&self, admin: UserId, admin_chat: ChatId, target: ChatId) -> RouteOutcome {
        self.pending.arm(admin, target);
        log_reply_event("armed", admin.0, Some(target.0));

        let prompt = format!(
            "{} Type your message and I will send it to the user (chat_id <code>{}</code>).",
            FeedbackType::Prompt.emoji(),
            target.0
        );
        self.notify(admin_chat, &prompt).await;
        RouteOutcome::Armed(target)
    }

    async fn deliver_reply(&self, admin: UserId, admin_chat: ChatId, text: &str) -> RouteOutcome {
        let Some(target) = self.pending.consume(admin) else {
            log_reply_event("nothing pending", admin.0, None);
            let hint = format_feedback(
                FeedbackType::Info,
                "Press «💬 Reply» under a user's card first, then type your message.",
            );
            self.notify(admin_chat, &hint).await;
            return RouteOutcome::NothingPending;
        };
        log_reply_event("consumed", admin.0, Some(target.0));

        match self.outbound.deliver(target, text).await {
            Ok(()) => {
                log_reply_event("delivered", admin.0, Some(target.0));
                self.notify(admin_chat, &format_feedback(FeedbackType::Success, "Sent."))
                    .await;
                RouteOutcome::Delivered(target)
            }
            Err(e) => {
                let reason = e.to_string();
                log_reply_failure(admin.0, target.0, &reason);
                let notice = format_feedback(FeedbackType::Error, &format!("Could not send: {reason}"));
                self.notify(admin_chat, &notice).await;
                RouteOutcome::DeliveryFailed { target, reason }
            }
        }
    }

    async fn relay_user_message(&self, actor: &Actor, chat: ChatId, payload: ActionPayload) -> RouteOutcome {
        let text = match &payload {
            ActionPayload::Text(text) => text.trim().to_string(),
            ActionPayload::Media(media) => media.caption.as_deref().unwrap_or("").trim().to_string(),
            ActionPayload::ReplyTrigger { .. } => return RouteOutcome::Ignored,
        };

        let card = incoming_message_card(actor, chat, &text);
        let reached = self.notify_admins(&card, Some(chat)).await;
        log_relay("message", chat.0, reached, self.admins.len());

        if let ActionPayload::Media(media) = &payload {
            let forwarded = self.forward_media_to_admins(media, "message").await;
            log_relay("media", chat.0, forwarded, self.admins.len());
        }

        let ack = if reached > 0 || self.admins.is_empty() {
            "Thank you! Your message has been passed to the administrator 💌"
        } else {
            "Sorry, your message could not be delivered right now. Please try again later."
        };
        self.notify(chat, ack).await;

        RouteOutcome::Relayed { reached }
    }

    /// Sends `html` to every administrator, with a reply button for `reply_target` if given.
    ///
    /// Returns how many administrators it reached. An empty allow-list is logged and
    /// treated as a no-op.
    pub async fn notify_admins(&self, html: &str, reply_target: Option<ChatId>) -> usize {
        if self.admins.is_empty() {
            tracing::warn!("ADMIN_IDS is empty, no one to notify");
            return 0;
        }

        let mut reached = 0;
        for admin in &self.admins {
            let chat = admin_chat(*admin);
            let result = match reply_target {
                Some(target) => self.outbound.deliver_with_reply_trigger(chat, html, target).await,
                None => self.outbound.deliver_html(chat, html).await,
            };
            match result {
                Ok(()) => reached += 1,
                Err(e) => tracing::error!("Failed to notify admin {}: {}", admin.0, e),
            }
        }
        reached
    }

    /// Re-sends a photo or document to every administrator.
    ///
    /// Without a caption the media is labelled by `origin`, e.g. "Photo from the order".
    pub async fn forward_media_to_admins(&self, media: &Media, origin: &str) -> usize {
        let caption = match media.caption.as_deref().map(str::trim) {
            Some(caption) if !caption.is_empty() => caption.to_string(),
            _ => default_caption(media.kind, origin),
        };

        let mut reached = 0;
        for admin in &self.admins {
            match self.outbound.deliver_media(admin_chat(*admin), media, &caption).await {
                Ok(()) => reached += 1,
                Err(e) => tracing::error!("Failed to forward media to admin {}: {}", admin.0, e),
            }
        }
        reached
    }

    async fn notify(&self, chat: ChatId, html: &str) {
        if let Err(e) = self.outbound.deliver_html(chat, html).await {
            tracing::warn!("Failed to send notice to chat {}: {}", chat.0, e);
        }
    }
}

fn default_caption(kind: MediaKind, origin: &str) -> String {
    let kind = match kind {
        MediaKind::Photo => "Photo",
        MediaKind::Document => "Document",
    };
    format!("{kind} from the {origin}")
}

/// Private chat id of a user.
pub fn admin_chat(admin: UserId) -> ChatId {
    ChatId(admin.0 as i64)
}

/// Card announcing a user's message to administrators.
pub fn incoming_message_card(actor: &Actor, chat: ChatId, text: &str) -> String {
    let text = if text.is_empty() { "(empty)" } else { text };
    format!(
        "<b>Incoming message</b>\n\
         • Name: <code>{}</code>\n\
         • Username: {}\n\
         • User ID: <code>{}</code>\n\
         • Chat ID: <code>{}</code>\n\n\
         Text: {}",
        html::escape(&actor.full_name),
        html::escape(&actor.username_label()),
        actor.id.0,
        chat.0,
        html::escape(text)
    )
}
