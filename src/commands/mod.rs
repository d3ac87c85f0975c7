use anyhow::Result;
use std::sync::Arc;
use teloxide::prelude::*;

use crate::di::ServiceContainer;

pub mod apitest;
pub mod help;
pub mod prices;
pub mod search;
pub mod start;
pub mod unwatch;
pub mod watch;
pub mod watchlist;

/// Trait that defines a command handler
pub trait CommandHandler {
    /// The command name in lowercase
    fn command_name() -> &'static str;

    /// The command description for help
    fn description() -> &'static str;

    /// Execute the command
    async fn execute(
        bot: Bot,
        msg: Message,
        telegram_id: i64,
        services: Arc<ServiceContainer>,
    ) -> Result<()>;
}

/// Register all command handlers in the command system
pub fn register_commands() -> Vec<(&'static str, &'static str)> {
    vec![
        (
            start::StartCommand::command_name(),
            start::StartCommand::description(),
        ),
        (
            search::SearchCommand::command_name(),
            search::SearchCommand::description(),
        ),
        (
            prices::PricesCommand::command_name(),
            prices::PricesCommand::description(),
        ),
        (
            watch::WatchCommand::command_name(),
            watch::WatchCommand::description(),
        ),
        (
            unwatch::UnwatchCommand::command_name(),
            unwatch::UnwatchCommand::description(),
        ),
        (
            watchlist::WatchlistCommand::command_name(),
            watchlist::WatchlistCommand::description(),
        ),
        (
            apitest::ApiTestCommand::command_name(),
            apitest::ApiTestCommand::description(),
        ),
        (
            help::HelpCommand::command_name(),
            help::HelpCommand::description(),
        ),
    ]
}

/// Bot Commands enum for teloxide command filter
#[derive(teloxide::utils::command::BotCommands, Clone, Debug)]
#[command(rename_rule = "lowercase", description = "Available commands:")]
pub enum BotCommands {
    #[command(description = "start the bot and show available commands")]
    Start,
    #[command(description = "search for games by name")]
    Search,
    #[command(description = "get current prices for a game by Steam App ID")]
    Prices,
    #[command(description = "add a game to your watchlist")]
    Watch,
    #[command(description = "remove a game from your watchlist")]
    Unwatch,
    #[command(description = "show your watchlist with current prices")]
    Watchlist,
    #[command(description = "test the price API connection (admin only)")]
    ApiTest,
    #[command(description = "display this help message")]
    Help,
}
