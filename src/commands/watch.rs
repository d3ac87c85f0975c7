use anyhow::Result;
use log::info;
use std::sync::Arc;
use teloxide::prelude::*;

use super::CommandHandler;
use crate::di::ServiceContainer;
use crate::interactor::watchlist_interactor::WatchlistInteractorImpl;
use crate::presenter::watchlist_presenter::{WatchlistPresenter, WatchlistPresenterImpl};
use crate::utils::parse_watch_args;
use crate::view::watchlist_view::TelegramWatchlistView;

pub struct WatchCommand;

impl CommandHandler for WatchCommand {
    fn command_name() -> &'static str {
        "watch"
    }

    fn description() -> &'static str {
        "add a game to your watchlist"
    }

    async fn execute(
        bot: Bot,
        msg: Message,
        telegram_id: i64,
        services: Arc<ServiceContainer>,
    ) -> Result<()> {
        let text = msg.text().unwrap_or("");
        let chat_id = msg.chat.id;

        let args_text = text
            .split_once(char::is_whitespace)
            .map(|(_, rest)| rest)
            .unwrap_or("");

        let Some(args) = parse_watch_args(args_text) else {
            bot.send_message(
                chat_id,
                "Use the command in this format: /watch <steam_app_id> [target_price] [region] [custom name]\n\nExample: /watch 730 15 us",
            )
            .await?;

            return Ok(());
        };

        info!(
            "Watch command received for app {} from Telegram ID: {}",
            args.app_id, telegram_id
        );

        let db_pool = services.db_pool();
        let price_service = services.price_service();

        let interactor = Arc::new(WatchlistInteractorImpl::new(db_pool, price_service.clone()));
        let view = Arc::new(TelegramWatchlistView::new(bot, chat_id));
        let presenter = WatchlistPresenterImpl::new(interactor, view, price_service);

        presenter.add_game(telegram_id, chat_id.0, &args).await
    }
}
