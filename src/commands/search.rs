use anyhow::Result;
use log::info;
use std::sync::Arc;
use teloxide::prelude::*;

use super::CommandHandler;
use crate::di::ServiceContainer;
use crate::interactor::search_interactor::SearchInteractorImpl;
use crate::presenter::search_presenter::{SearchPresenter, SearchPresenterImpl};
use crate::view::search_view::TelegramSearchView;

pub struct SearchCommand;

impl CommandHandler for SearchCommand {
    fn command_name() -> &'static str {
        "search"
    }

    fn description() -> &'static str {
        "search for games by name"
    }

    async fn execute(
        bot: Bot,
        msg: Message,
        telegram_id: i64,
        _services: Arc<ServiceContainer>,
    ) -> Result<()> {
        let command_parts: Vec<&str> = msg.text().unwrap_or("").split_whitespace().collect();
        let chat_id = msg.chat.id;

        if command_parts.len() < 2 {
            bot.send_message(
                chat_id,
                "Use the command in this format: /search <game name>\n\nExample: /search portal",
            )
            .await?;

            return Ok(());
        }

        let query = command_parts[1..].join(" ");

        info!(
            "Search command received for '{}' from Telegram ID: {}",
            query, telegram_id
        );

        let interactor = Arc::new(SearchInteractorImpl);
        let view = Arc::new(TelegramSearchView::new(bot, chat_id));
        let presenter = SearchPresenterImpl::new(interactor, view);

        presenter.search(&query).await
    }
}
