use std::sync::Arc;

use teloxide::prelude::*;

use crate::bot::handlers::HandlerResult;
use crate::services::outbound::{Media, MediaKind};
use crate::services::reply_router::{ActionPayload, Actor, InboundAction, ReplyRouter};
use crate::utils::feedback::CommandFeedback;

/// Photo (largest size) or document carried by `msg`.
pub fn extract_media(msg: &Message) -> Option<Media> {
    let caption = msg.caption().map(str::to_string);

    if let Some(photo) = msg.photo().and_then(|sizes| sizes.last()) {
        return Some(Media {
            kind: MediaKind::Photo,
            file_id: photo.file.id.clone(),
            caption,
        });
    }

    msg.document().map(|document| Media {
        kind: MediaKind::Document,
        file_id: document.file.id.clone(),
        caption,
    })
}

/// Classifies a non-command message and hands it to the reply router.
pub async fn handle_general_message(
    bot: Bot,
    msg: Message,
    router: Arc<ReplyRouter>,
) -> HandlerResult {
    let Some(user) = msg.from() else {
        return Ok(());
    };

    let payload = if let Some(text) = msg.text() {
        if text.starts_with('/') {
            let error_msg = format!(
                "Unknown command: {}",
                text.split_whitespace().next().unwrap_or(text)
            );
            CommandFeedback::new(bot, msg.chat.id)
                .validation_error(&error_msg, "/help lists the available commands.")
                .await?;
            return Ok(());
        }
        ActionPayload::Text(text.to_string())
    } else if let Some(media) = extract_media(&msg) {
        ActionPayload::Media(media)
    } else {
        // Stickers, voice notes and the like are not relayed
        return Ok(());
    };

    let action = InboundAction {
        actor: Actor::from_user(user),
        chat_id: msg.chat.id,
        private_chat: msg.chat.is_private(),
        payload,
    };
    let outcome = router.route(action).await;
    tracing::debug!("Message from user {} in chat {} routed: {:?}", user.id.0, msg.chat.id.0, outcome);

    Ok(())
}
