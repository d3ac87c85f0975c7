use anyhow::Result;
use log::info;
use std::sync::Arc;
use teloxide::prelude::*;

use super::CommandHandler;
use crate::di::ServiceContainer;
use crate::interactor::watchlist_interactor::WatchlistInteractorImpl;
use crate::presenter::watchlist_presenter::{WatchlistPresenter, WatchlistPresenterImpl};
use crate::utils::validate_region;
use crate::view::watchlist_view::TelegramWatchlistView;

pub struct WatchlistCommand;

impl CommandHandler for WatchlistCommand {
    fn command_name() -> &'static str {
        "watchlist"
    }

    fn description() -> &'static str {
        "show your watchlist with current prices"
    }

    async fn execute(
        bot: Bot,
        msg: Message,
        telegram_id: i64,
        services: Arc<ServiceContainer>,
    ) -> Result<()> {
        let command_parts: Vec<&str> = msg.text().unwrap_or("").split_whitespace().collect();
        let chat_id = msg.chat.id;

        let region = command_parts
            .get(1)
            .copied()
            .filter(|region| validate_region(region))
            .unwrap_or("us");

        info!(
            "Watchlist command received from Telegram ID: {}",
            telegram_id
        );

        let db_pool = services.db_pool();
        let price_service = services.price_service();

        let interactor = Arc::new(WatchlistInteractorImpl::new(db_pool, price_service.clone()));
        let view = Arc::new(TelegramWatchlistView::new(bot, chat_id));
        let presenter = WatchlistPresenterImpl::new(interactor, view, price_service);

        presenter.show_watchlist(telegram_id, region).await
    }
}
