#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use kira_studio_bot::services::outbound::{Media, Outbound};
use kira_studio_bot::services::pending_replies::PendingReplies;
use kira_studio_bot::services::reply_router::{ActionPayload, Actor, InboundAction, ReplyRouter};
use teloxide::types::{ChatId, UserId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sent {
    Text { chat: ChatId, text: String },
    Html { chat: ChatId, html: String },
    WithReplyTrigger { chat: ChatId, html: String, target: ChatId },
    Media { chat: ChatId, file_id: String, caption: String },
}

impl Sent {
    pub fn chat(&self) -> ChatId {
        match self {
            Sent::Text { chat, .. }
            | Sent::Html { chat, .. }
            | Sent::WithReplyTrigger { chat, .. }
            | Sent::Media { chat, .. } => *chat,
        }
    }
}

/// Records every delivery; chats registered with `fail_for` get a transport error instead.
#[derive(Default)]
pub struct RecordingOutbound {
    sent: Mutex<Vec<Sent>>,
    failing: Mutex<HashSet<ChatId>>,
}

impl RecordingOutbound {
    pub fn fail_for(&self, chat: ChatId) {
        self.failing.lock().unwrap().insert(chat);
    }

    pub fn sent(&self) -> Vec<Sent> {
        self.sent.lock().unwrap().clone()
    }

    pub fn sent_to(&self, chat: ChatId) -> Vec<Sent> {
        self.sent().into_iter().filter(|s| s.chat() == chat).collect()
    }

    fn record(&self, sent: Sent) -> Result<()> {
        if self.failing.lock().unwrap().contains(&sent.chat()) {
            return Err(anyhow!("Forbidden: bot was blocked by the user"));
        }
        self.sent.lock().unwrap().push(sent);
        Ok(())
    }
}

#[async_trait]
impl Outbound for RecordingOutbound {
    async fn deliver(&self, chat: ChatId, text: &str) -> Result<()> {
        self.record(Sent::Text { chat, text: text.to_string() })
    }

    async fn deliver_html(&self, chat: ChatId, html: &str) -> Result<()> {
        self.record(Sent::Html { chat, html: html.to_string() })
    }

    async fn deliver_with_reply_trigger(&self, chat: ChatId, html: &str, target: ChatId) -> Result<()> {
        self.record(Sent::WithReplyTrigger {
            chat,
            html: html.to_string(),
            target,
        })
    }

    async fn deliver_media(&self, chat: ChatId, media: &Media, caption: &str) -> Result<()> {
        self.record(Sent::Media {
            chat,
            file_id: media.file_id.clone(),
            caption: caption.to_string(),
        })
    }
}

pub const ADMIN: UserId = UserId(100);
pub const OTHER_ADMIN: UserId = UserId(200);

pub fn admin_chat(admin: UserId) -> ChatId {
    ChatId(admin.0 as i64)
}

pub fn create_router(admins: Vec<UserId>) -> (ReplyRouter, Arc<RecordingOutbound>) {
    let outbound = Arc::new(RecordingOutbound::default());
    let router = ReplyRouter::new(admins, Arc::new(PendingReplies::new()), outbound.clone());
    (router, outbound)
}

pub fn actor(id: UserId) -> Actor {
    Actor {
        id,
        full_name: format!("User {}", id.0),
        username: Some(format!("user{}", id.0)),
    }
}

/// Private-chat action, where the chat id equals the user id.
pub fn private_action(user: UserId, payload: ActionPayload) -> InboundAction {
    InboundAction {
        actor: actor(user),
        chat_id: admin_chat(user),
        private_chat: true,
        payload,
    }
}

pub fn text(user: UserId, text: &str) -> InboundAction {
    private_action(user, ActionPayload::Text(text.to_string()))
}

pub fn reply_trigger(admin: UserId, target: i64) -> InboundAction {
    private_action(
        admin,
        ActionPayload::ReplyTrigger {
            target: ChatId(target),
        },
    )
}
