use std::sync::Arc;

use teloxide::prelude::*;
use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup, ParseMode};
use teloxide::utils::command::BotCommands;

use crate::bot::callback_data::{CallbackAction, Menu};
use crate::bot::commands::{post, prices, Command};
use crate::bot::handlers::{order, HandlerResult, OrderDialogue};
use crate::config::Config;
use crate::services::reply_router::ReplyRouter;
use crate::utils::logging::log_command_start;

pub async fn command_handler(
    bot: Bot,
    msg: Message,
    cmd: Command,
    dialogue: OrderDialogue,
    router: Arc<ReplyRouter>,
    config: Arc<Config>,
) -> HandlerResult {
    if let Some(user) = msg.from() {
        log_command_start(
            cmd.name(),
            user.username.as_deref().unwrap_or("unknown"),
            user.id.0,
            msg.chat.id.0,
            None,
        );
    }

    match cmd {
        Command::Help => {
            bot.send_message(msg.chat.id, Command::descriptions().to_string()).await?;
        }
        Command::Start => {
            let name = msg
                .from()
                .map(|u| u.first_name.clone())
                .filter(|name| !name.is_empty())
                .unwrap_or_else(|| "friend".to_string());
            let keyboard = InlineKeyboardMarkup::new(vec![vec![InlineKeyboardButton::callback(
                "Place an order",
                CallbackAction::Order.encode(),
            )]]);
            bot.send_message(
                msg.chat.id,
                format!(
                    "Hi, {name}! I'm the Kira Studio bot. I can help you order a neuro photoshoot, \
                     art portraits and content for social media.\n\n\
                     Commands:\n\
                     • /order — place an order\n\
                     • /prices — services and prices\n\
                     • or just write what you need and we will answer\n"
                ),
            )
            .reply_markup(keyboard)
            .await?;
        }
        Command::Prices => {
            bot.send_message(
                msg.chat.id,
                prices::build_prices_text() + "\nSend /order and tell us what you need, we will help you choose 🙌",
            )
            .parse_mode(ParseMode::Html)
            .reply_markup(prices::menu_keyboard(Menu::Main, &config))
            .await?;
        }
        Command::Order => {
            order::start_order(bot, msg.chat.id, dialogue).await?;
        }
        Command::Cancel => {
            order::cancel_order(bot, msg.chat.id, dialogue).await?;
        }
        Command::MyId => {
            bot.send_message(msg.chat.id, format!("Your chat id: <code>{}</code>", msg.chat.id.0))
                .parse_mode(ParseMode::Html)
                .await?;
        }
        Command::Post(text) => {
            post::handle_post(bot, msg, text, &router, &config).await?;
        }
    }
    Ok(())
}
