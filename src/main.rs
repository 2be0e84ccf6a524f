//! # Kira Studio Bot Main Entry Point
//!
//! Initializes logging, loads configuration, wires the reply router to the
//! Telegram client, and runs the bot next to the health server.

use anyhow::Result;
use std::sync::Arc;
use teloxide::prelude::*;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use kira_studio_bot::bot::handlers::BotHandler;
use kira_studio_bot::config::Config;
use kira_studio_bot::services::health::HealthService;
use kira_studio_bot::services::outbound::TelegramOutbound;
use kira_studio_bot::services::pending_replies::PendingReplies;
use kira_studio_bot::services::reply_router::ReplyRouter;
use kira_studio_bot::utils::logging::log_system_event;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "kira_studio_bot=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Arc::new(Config::from_env()?);

    info!("Starting Kira Studio Bot v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "Configuration loaded - Admins: {}, Channel: {}, HTTP Port: {}",
        config.admin_ids.len(),
        config
            .channel_id
            .map_or_else(|| "not set".to_string(), |id| id.0.to_string()),
        config.http_port
    );

    // Initialize bot and reply routing
    info!("Initializing Telegram bot...");
    let bot = Bot::new(&config.telegram_bot_token);
    let pending = Arc::new(PendingReplies::new());
    let router = Arc::new(ReplyRouter::new(
        config.admin_ids.clone(),
        pending.clone(),
        Arc::new(TelegramOutbound::new(bot.clone())),
    ));
    let handler = BotHandler::new(router, config.clone());
    info!("Telegram bot initialized successfully");

    // Initialize health service
    let health_service = HealthService::new(pending, config.admin_ids.len());
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.http_port))
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind to port {}: {}", config.http_port, e))?;

    info!("Health check server starting on port {}", config.http_port);

    // Run both the bot and health server concurrently
    let bot_task = tokio::spawn(async move {
        Dispatcher::builder(bot, handler.schema())
            .dependencies(handler.dependencies())
            .error_handler(LoggingErrorHandler::with_custom_text(
                "An error has occurred in the dispatcher",
            ))
            .enable_ctrlc_handler()
            .build()
            .dispatch()
            .await;
    });

    let health_task = tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, health_service.router).await {
            tracing::error!("Health server error: {}", e);
        }
    });

    // Wait for either task to complete (which would indicate shutdown)
    tokio::select! {
        result1 = bot_task => {
            if let Err(e) = result1 {
                tracing::error!("Bot task error: {}", e);
            }
        }
        result2 = health_task => {
            if let Err(e) = result2 {
                tracing::error!("Health task error: {}", e);
            }
        }
    }

    log_system_event("Application stopped", None);
    Ok(())
}
