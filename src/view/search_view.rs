use crate::interactor::search_interactor::GameRef;
use anyhow::Result;
use async_trait::async_trait;
use teloxide::{prelude::*, types::ParseMode, Bot};

#[async_trait]
pub trait SearchView: Send + Sync {
    async fn display_results(&self, query: &str, games: Vec<GameRef>) -> Result<()>;
    async fn display_no_results(&self, query: &str) -> Result<()>;
}

pub struct TelegramSearchView {
    bot: Bot,
    chat_id: ChatId,
}

impl TelegramSearchView {
    pub fn new(bot: Bot, chat_id: ChatId) -> Self {
        Self { bot, chat_id }
    }
}

#[async_trait]
impl SearchView for TelegramSearchView {
    async fn display_results(&self, query: &str, games: Vec<GameRef>) -> Result<()> {
        let mut text = format!("<b>Search Results for '{}'</b>\n", query);

        for (index, game) in games.iter().enumerate() {
            text.push_str(&format!(
                "\n{}. <b>{}</b>\nSteam App ID: <code>{}</code>",
                index + 1,
                game.name,
                game.app_id
            ));
        }

        text.push_str(
            "\n\nNote: search covers common Steam games. Use a Steam App ID for precise results.",
        );

        self.bot
            .send_message(self.chat_id, text)
            .parse_mode(ParseMode::Html)
            .await?;

        Ok(())
    }

    async fn display_no_results(&self, query: &str) -> Result<()> {
        self.bot
            .send_message(
                self.chat_id,
                format!(
                    "No games found for '{}'. Try searching for popular games like 'Counter-Strike', 'Dota' or 'Portal'.",
                    query
                ),
            )
            .await?;

        Ok(())
    }
}
