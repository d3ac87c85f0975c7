//! Game Price Watch Bot for Telegram - Main executable
//!
//! This is the entry point for the Telegram bot application that lets users
//! look up current game deals on gg.deals, keep a persistent watchlist and
//! receive alerts when a game drops below their target price.
use anyhow::Context;
use dotenv::dotenv;
use gamedeals_bot::{PriceWatchService, Router, ServiceContainer, TelegramRouter};
use log::{error, info, warn};
use sqlx::sqlite::SqlitePoolOptions;
use std::env;
use std::sync::Arc;
use teloxide::Bot;
use tokio;

/// Application entry point
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenv().ok();

    // Initialize logging with default level of "info"
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    info!(
        "Starting Game Price Watch Telegram Bot v{}",
        gamedeals_bot::VERSION
    );

    // Load and validate environment variables
    let bot_token = env::var("TELEGRAM_BOT_TOKEN")
        .context("TELEGRAM_BOT_TOKEN must be set in environment variables")?;

    env::var("GGDEALS_API_KEY")
        .context("GGDEALS_API_KEY must be set in environment variables")?;

    let database_url =
        env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://game_watchlist.db?mode=rwc".to_string());

    // Create Telegram bot instance
    let bot = Bot::new(bot_token);

    // Setup database connection pool
    info!("Connecting to database...");
    let db_pool = SqlitePoolOptions::new()
        .max_connections(10)
        .connect(&database_url)
        .await
        .context("Failed to create database connection pool")?;

    // Run database migrations
    info!("Running database migrations...");
    sqlx::migrate!("./migrations")
        .run(&db_pool)
        .await
        .context("Failed to run migrations")?;
    info!("Migrations completed successfully");

    // Initialize the application components
    info!("Initializing bot application...");
    let services = Arc::new(ServiceContainer::new(Arc::new(db_pool)));

    // Probe the price API at startup; a bad key is only visible in the logs
    info!("Testing gg.deals API connection...");
    if services.price_service().test_connection().await {
        info!("gg.deals API connection successful");
    } else {
        warn!("Could not establish connection to the gg.deals API; check your API key");
    }

    // Start price watch background service
    info!("Starting price watch background service...");
    let mut price_watch_service = PriceWatchService::new(services.clone(), bot.clone());
    if let Err(e) = price_watch_service.start().await {
        error!("Failed to start price watch service: {}", e);
    } else {
        info!("Price watch service started successfully");
    }

    // Get the handler from the router
    let router = TelegramRouter::new(services);
    let handler = router.setup_handlers();

    // Build dispatcher with control-C handling
    let mut dispatcher = teloxide::dispatching::Dispatcher::builder(bot, handler)
        .enable_ctrlc_handler()
        .build();

    info!("Bot is running! Press Ctrl+C to stop.");
    dispatcher.dispatch().await;

    // Stop price watch service
    info!("Stopping price watch service...");
    price_watch_service.stop().await;

    Ok(())
}
