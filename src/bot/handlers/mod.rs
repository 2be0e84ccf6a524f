pub mod callback;
pub mod channel;
pub mod general_message;
pub mod message;
pub mod order;

use std::sync::Arc;

use teloxide::{
    dispatching::{dialogue, dialogue::InMemStorage, UpdateFilterExt, UpdateHandler},
    prelude::*,
};

use crate::bot::commands::Command;
use crate::config::Config;
use crate::services::reply_router::ReplyRouter;

pub type HandlerError = Box<dyn std::error::Error + Send + Sync + 'static>;
pub type HandlerResult = Result<(), HandlerError>;
pub type OrderDialogue = Dialogue<OrderState, InMemStorage<OrderState>>;

/// Per-chat order dialogue.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum OrderState {
    #[default]
    Idle,
    AwaitingDetails,
}

pub struct BotHandler {
    pub router: Arc<ReplyRouter>,
    pub config: Arc<Config>,
}

impl BotHandler {
    pub fn new(router: Arc<ReplyRouter>, config: Arc<Config>) -> Self {
        Self { router, config }
    }

    /// Values injected into every endpoint.
    pub fn dependencies(&self) -> DependencyMap {
        let storage: Arc<InMemStorage<OrderState>> = InMemStorage::new();
        dptree::deps![storage, self.router.clone(), self.config.clone()]
    }

    pub fn schema(&self) -> UpdateHandler<HandlerError> {
        use dptree::case;

        let command_handler = teloxide::filter_command::<Command, _>().endpoint(message::command_handler);

        let message_handler = Update::filter_message()
            .branch(command_handler)
            .branch(case![OrderState::AwaitingDetails].endpoint(order::order_details))
            .branch(dptree::endpoint(general_message::handle_general_message));

        let callback_handler = Update::filter_callback_query().endpoint(callback::callback_handler);

        dptree::entry()
            .branch(Update::filter_channel_post().endpoint(channel::channel_post_handler))
            .branch(
                dialogue::enter::<Update, InMemStorage<OrderState>, OrderState, _>()
                    .branch(message_handler)
                    .branch(callback_handler),
            )
    }
}
