use anyhow::Result;
use log::info;
use std::sync::Arc;
use teloxide::prelude::*;

use super::CommandHandler;
use crate::di::ServiceContainer;
use crate::interactor::watchlist_interactor::WatchlistInteractorImpl;
use crate::presenter::watchlist_presenter::{WatchlistPresenter, WatchlistPresenterImpl};
use crate::view::watchlist_view::TelegramWatchlistView;

pub struct UnwatchCommand;

impl CommandHandler for UnwatchCommand {
    fn command_name() -> &'static str {
        "unwatch"
    }

    fn description() -> &'static str {
        "remove a game from your watchlist"
    }

    async fn execute(
        bot: Bot,
        msg: Message,
        telegram_id: i64,
        services: Arc<ServiceContainer>,
    ) -> Result<()> {
        let command_parts: Vec<&str> = msg.text().unwrap_or("").split_whitespace().collect();
        let chat_id = msg.chat.id;

        if command_parts.len() < 2 {
            bot.send_message(
                chat_id,
                "Use the command in this format: /unwatch <steam_app_id>\n\nExample: /unwatch 730",
            )
            .await?;

            return Ok(());
        }

        let app_id = command_parts[1];

        info!(
            "Unwatch command received for app {} from Telegram ID: {}",
            app_id, telegram_id
        );

        let db_pool = services.db_pool();
        let price_service = services.price_service();

        let interactor = Arc::new(WatchlistInteractorImpl::new(db_pool, price_service.clone()));
        let view = Arc::new(TelegramWatchlistView::new(bot, chat_id));
        let presenter = WatchlistPresenterImpl::new(interactor, view, price_service);

        presenter.remove_game(telegram_id, app_id).await
    }
}
