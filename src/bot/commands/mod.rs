pub mod post;
pub mod prices;

use teloxide::utils::command::BotCommands;

#[derive(BotCommands, Clone)]
#[command(rename_rule = "lowercase", description = "Kira Studio Bot commands:")]
pub enum Command {
    #[command(description = "Display this help message")]
    Help,
    #[command(description = "Start the bot")]
    Start,
    #[command(description = "Show services and prices")]
    Prices,
    #[command(description = "Place an order")]
    Order,
    #[command(description = "Cancel the current order")]
    Cancel,
    #[command(description = "Show the id of this chat")]
    MyId,
    #[command(description = "Publish a post to the channel (admins only)")]
    Post(String),
}

impl Command {
    /// Name used in log lines.
    pub fn name(&self) -> &'static str {
        match self {
            Command::Help => "/help",
            Command::Start => "/start",
            Command::Prices => "/prices",
            Command::Order => "/order",
            Command::Cancel => "/cancel",
            Command::MyId => "/myid",
            Command::Post(_) => "/post",
        }
    }
}
