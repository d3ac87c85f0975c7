use anyhow::Result;
use log::info;
use std::sync::Arc;
use teloxide::prelude::*;

use super::CommandHandler;
use crate::di::ServiceContainer;
use crate::interactor::price_interactor::PriceInteractorImpl;
use crate::presenter::price_presenter::{PricePresenter, PricePresenterImpl};
use crate::utils::validate_region;
use crate::view::price_view::TelegramPriceView;

pub struct PricesCommand;

impl CommandHandler for PricesCommand {
    fn command_name() -> &'static str {
        "prices"
    }

    fn description() -> &'static str {
        "get current prices for a game by Steam App ID"
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
                "Use the command in this format: /prices <steam_app_id> [region]\n\nExample: /prices 730 us",
            )
            .await?;

            return Ok(());
        }

        let app_id = command_parts[1];
        let region = command_parts
            .get(2)
            .copied()
            .filter(|region| validate_region(region))
            .unwrap_or("us");

        info!(
            "Prices command received for app {} from Telegram ID: {}",
            app_id, telegram_id
        );

        let price_service = services.price_service();
        let interactor = Arc::new(PriceInteractorImpl::new(price_service));
        let view = Arc::new(TelegramPriceView::new(bot, chat_id));
        let presenter = PricePresenterImpl::new(interactor, view);

        presenter.show_game_prices(app_id, region).await
    }
}
