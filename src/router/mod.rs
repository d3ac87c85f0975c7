use async_trait::async_trait;
use log::error;
use std::sync::Arc;
use teloxide::{dispatching::UpdateHandler, prelude::*};

use crate::commands::{self, BotCommands, CommandHandler};
use crate::di::ServiceContainer;

// Base router trait
#[async_trait]
pub trait Router: Send + Sync {
    fn setup_handlers(&self) -> UpdateHandler<anyhow::Error>;
}

// Command router implementation
pub struct TelegramRouter {
    services: Arc<ServiceContainer>,
}

impl TelegramRouter {
    pub fn new(services: Arc<ServiceContainer>) -> Self {
        Self { services }
    }
}

// Handler errors stop at the dispatch boundary: log, send a generic reply
async fn reply_on_failure(
    bot: Bot,
    chat_id: ChatId,
    result: anyhow::Result<()>,
) -> anyhow::Result<()> {
    if let Err(e) = result {
        error!("Command handler failed: {:#}", e);
        bot.send_message(chat_id, "An error occurred while processing the command.")
            .await?;
    }

    Ok(())
}

#[async_trait]
impl Router for TelegramRouter {
    fn setup_handlers(&self) -> UpdateHandler<anyhow::Error> {
        use dptree::case;
        use teloxide::dispatching::UpdateFilterExt;

        let services_for_start = self.services.clone();
        let services_for_search = self.services.clone();
        let services_for_prices = self.services.clone();
        let services_for_watch = self.services.clone();
        let services_for_unwatch = self.services.clone();
        let services_for_watchlist = self.services.clone();
        let services_for_apitest = self.services.clone();
        let services_for_help = self.services.clone();

        // Use BotCommands enum with teloxide's command filter
        let command_handler = teloxide::filter_command::<BotCommands, _>()
            .branch(
                case![BotCommands::Start].endpoint(move |bot: Bot, msg: Message| {
                    let services = services_for_start.clone();
                    let telegram_id = msg.from().map_or(0, |user| user.id.0 as i64);
                    let chat_id = msg.chat.id;
                    async move {
                        let result = commands::start::StartCommand::execute(
                            bot.clone(),
                            msg,
                            telegram_id,
                            services,
                        )
                        .await;
                        reply_on_failure(bot, chat_id, result).await
                    }
                }),
            )
            .branch(
                case![BotCommands::Search].endpoint(move |bot: Bot, msg: Message| {
                    let services = services_for_search.clone();
                    let telegram_id = msg.from().map_or(0, |user| user.id.0 as i64);
                    let chat_id = msg.chat.id;
                    async move {
                        let result = commands::search::SearchCommand::execute(
                            bot.clone(),
                            msg,
                            telegram_id,
                            services,
                        )
                        .await;
                        reply_on_failure(bot, chat_id, result).await
                    }
                }),
            )
            .branch(
                case![BotCommands::Prices].endpoint(move |bot: Bot, msg: Message| {
                    let services = services_for_prices.clone();
                    let telegram_id = msg.from().map_or(0, |user| user.id.0 as i64);
                    let chat_id = msg.chat.id;
                    async move {
                        let result = commands::prices::PricesCommand::execute(
                            bot.clone(),
                            msg,
                            telegram_id,
                            services,
                        )
                        .await;
                        reply_on_failure(bot, chat_id, result).await
                    }
                }),
            )
            .branch(
                case![BotCommands::Watch].endpoint(move |bot: Bot, msg: Message| {
                    let services = services_for_watch.clone();
                    let telegram_id = msg.from().map_or(0, |user| user.id.0 as i64);
                    let chat_id = msg.chat.id;
                    async move {
                        let result = commands::watch::WatchCommand::execute(
                            bot.clone(),
                            msg,
                            telegram_id,
                            services,
                        )
                        .await;
                        reply_on_failure(bot, chat_id, result).await
                    }
                }),
            )
            .branch(
                case![BotCommands::Unwatch].endpoint(move |bot: Bot, msg: Message| {
                    let services = services_for_unwatch.clone();
                    let telegram_id = msg.from().map_or(0, |user| user.id.0 as i64);
                    let chat_id = msg.chat.id;
                    async move {
                        let result = commands::unwatch::UnwatchCommand::execute(
                            bot.clone(),
                            msg,
                            telegram_id,
                            services,
                        )
                        .await;
                        reply_on_failure(bot, chat_id, result).await
                    }
                }),
            )
            .branch(
                case![BotCommands::Watchlist].endpoint(move |bot: Bot, msg: Message| {
                    let services = services_for_watchlist.clone();
                    let telegram_id = msg.from().map_or(0, |user| user.id.0 as i64);
                    let chat_id = msg.chat.id;
                    async move {
                        let result = commands::watchlist::WatchlistCommand::execute(
                            bot.clone(),
                            msg,
                            telegram_id,
                            services,
                        )
                        .await;
                        reply_on_failure(bot, chat_id, result).await
                    }
                }),
            )
            .branch(
                case![BotCommands::ApiTest].endpoint(move |bot: Bot, msg: Message| {
                    let services = services_for_apitest.clone();
                    let telegram_id = msg.from().map_or(0, |user| user.id.0 as i64);
                    let chat_id = msg.chat.id;
                    async move {
                        let result = commands::apitest::ApiTestCommand::execute(
                            bot.clone(),
                            msg,
                            telegram_id,
                            services,
                        )
                        .await;
                        reply_on_failure(bot, chat_id, result).await
                    }
                }),
            )
            .branch(
                case![BotCommands::Help].endpoint(move |bot: Bot, msg: Message| {
                    let services = services_for_help.clone();
                    let telegram_id = msg.from().map_or(0, |user| user.id.0 as i64);
                    let chat_id = msg.chat.id;
                    async move {
                        let result = commands::help::HelpCommand::execute(
                            bot.clone(),
                            msg,
                            telegram_id,
                            services,
                        )
                        .await;
                        reply_on_failure(bot, chat_id, result).await
                    }
                }),
            );

        Update::filter_message().branch(command_handler)
    }
}
