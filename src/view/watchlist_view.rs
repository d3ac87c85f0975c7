use crate::entity::Subscription;
use crate::ggdeals::models::GameDeal;
use anyhow::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use teloxide::{prelude::*, types::ParseMode, Bot};

#[async_trait]
pub trait WatchlistView: Send + Sync {
    async fn display_watchlist(
        &self,
        watchlist: Vec<Subscription>,
        deals: HashMap<String, GameDeal>,
        region: &str,
    ) -> Result<()>;
    async fn display_empty_watchlist(&self) -> Result<()>;
    async fn display_watch_added(&self, subscription: &Subscription, deal: &GameDeal)
        -> Result<()>;
    async fn display_watch_failed(&self, error_message: String) -> Result<()>;
    async fn display_unwatched(&self, app_id: &str) -> Result<()>;
    async fn display_not_watched(&self, app_id: &str) -> Result<()>;
    async fn display_error(&self, error_message: String) -> Result<()>;
}

pub struct TelegramWatchlistView {
    bot: Bot,
    chat_id: ChatId,
}

impl TelegramWatchlistView {
    pub fn new(bot: Bot, chat_id: ChatId) -> Self {
        Self { bot, chat_id }
    }
}

#[async_trait]
impl WatchlistView for TelegramWatchlistView {
    async fn display_watchlist(
        &self,
        watchlist: Vec<Subscription>,
        deals: HashMap<String, GameDeal>,
        region: &str,
    ) -> Result<()> {
        if watchlist.is_empty() {
            return self.display_empty_watchlist().await;
        }

        let mut text = String::from("<b>Your Watchlist</b>\n");

        for subscription in &watchlist {
            let current_price_text = deals
                .get(&subscription.app_id)
                .and_then(|deal| {
                    deal.prices.best_price().map(|(best, source)| {
                        format!(
                            "Current best: {:.2} {} ({})",
                            best, deal.prices.currency, source
                        )
                    })
                })
                .unwrap_or_else(|| "No current price data".to_string());

            text.push_str(&format!(
                "\n<b>{}</b>\nSteam App ID: <code>{}</code>\n{}",
                subscription.game_title, subscription.app_id, current_price_text
            ));

            let currency = deals
                .get(&subscription.app_id)
                .map(|deal| deal.prices.currency.as_str())
                .unwrap_or("USD");
            if let Some(target) = subscription.format_target(currency) {
                text.push_str(&format!("\nTarget: {}", target));
            }

            text.push('\n');
        }

        text.push_str(&format!("\nRegion: {}", region.to_uppercase()));

        self.bot
            .send_message(self.chat_id, text)
            .parse_mode(ParseMode::Html)
            .await?;

        Ok(())
    }

    async fn display_empty_watchlist(&self) -> Result<()> {
        self.bot
            .send_message(
                self.chat_id,
                "Your watchlist is empty. Use /watch <app_id> [target_price] [region] [name] to add games!",
            )
            .await?;

        Ok(())
    }

    async fn display_watch_added(
        &self,
        subscription: &Subscription,
        deal: &GameDeal,
    ) -> Result<()> {
        let target_text = subscription
            .format_target(&deal.prices.currency)
            .map(|target| format!(" (target: {})", target))
            .unwrap_or_default();

        self.bot
            .send_message(
                self.chat_id,
                format!(
                    "✅ Added <b>{}</b> (App ID: <code>{}</code>) to your watchlist{}!",
                    subscription.game_title, subscription.app_id, target_text
                ),
            )
            .parse_mode(ParseMode::Html)
            .await?;

        Ok(())
    }

    async fn display_watch_failed(&self, error_message: String) -> Result<()> {
        self.bot
            .send_message(self.chat_id, format!("❌ {}", error_message))
            .await?;

        Ok(())
    }

    async fn display_unwatched(&self, app_id: &str) -> Result<()> {
        self.bot
            .send_message(
                self.chat_id,
                format!("✅ Game with App ID {} removed from your watchlist!", app_id),
            )
            .await?;

        Ok(())
    }

    async fn display_not_watched(&self, app_id: &str) -> Result<()> {
        self.bot
            .send_message(
                self.chat_id,
                format!("App ID {} not found in your watchlist.", app_id),
            )
            .await?;

        Ok(())
    }

    async fn display_error(&self, error_message: String) -> Result<()> {
        self.bot
            .send_message(self.chat_id, format!("Error: {}", error_message))
            .await?;

        Ok(())
    }
}
