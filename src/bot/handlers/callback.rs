use std::sync::Arc;

use teloxide::prelude::*;
use teloxide::types::ParseMode;
use teloxide::{ApiError, RequestError};

use crate::bot::callback_data::CallbackAction;
use crate::bot::commands::prices;
use crate::bot::handlers::{order, HandlerResult, OrderDialogue};
use crate::config::Config;
use crate::services::reply_router::{ActionPayload, Actor, InboundAction, ReplyRouter};

pub async fn callback_handler(
    bot: Bot,
    q: CallbackQuery,
    dialogue: OrderDialogue,
    router: Arc<ReplyRouter>,
    config: Arc<Config>,
) -> HandlerResult {
    // Stop the client-side spinner; the press is handled even if this fails
    if let Err(e) = bot.answer_callback_query(q.id.clone()).await {
        tracing::warn!("Failed to answer callback query {}: {}", q.id, e);
    }

    let user_id = q.from.id.0;
    let username = q.from.username.as_deref().unwrap_or("unknown");
    let Some(data) = q.data.as_deref() else {
        return Ok(());
    };
    let Some(message) = q.message.as_ref() else {
        return Ok(());
    };

    tracing::info!(
        "Callback received: '{}' from user {} ({}) in chat {}",
        data, username, user_id, message.chat.id.0
    );

    let Some(action) = CallbackAction::parse(data) else {
        tracing::warn!("Unknown callback data '{}' from user {}", data, user_id);
        return Ok(());
    };

    match action {
        CallbackAction::Reply(target) => {
            let action = reply_trigger_action(
                Actor::from_user(&q.from),
                message.chat.id,
                message.chat.is_private(),
                target,
            );
            let outcome = router.route(action).await;
            tracing::debug!("Reply trigger from user {} routed: {:?}", user_id, outcome);
        }
        CallbackAction::Menu(menu) => {
            let result = bot
                .edit_message_text(message.chat.id, message.id, prices::build_prices_text())
                .parse_mode(ParseMode::Html)
                .reply_markup(prices::menu_keyboard(menu, &config))
                .await;
            match result {
                // Pressing the button of the screen already shown
                Ok(_) | Err(RequestError::Api(ApiError::MessageNotModified)) => {}
                Err(e) => return Err(e.into()),
            }
        }
        CallbackAction::Package(package) => {
            bot.send_message(message.chat.id, prices::package_order_template(package))
                .await?;
        }
        CallbackAction::Order => {
            order::start_order(bot, message.chat.id, dialogue).await?;
        }
    }

    Ok(())
}

/// Turns a press of the reply button under a card into a routable action.
pub fn reply_trigger_action(actor: Actor, chat_id: ChatId, private_chat: bool, target: ChatId) -> InboundAction {
    InboundAction {
        actor,
        chat_id,
        private_chat,
        payload: ActionPayload::ReplyTrigger { target },
    }
}
