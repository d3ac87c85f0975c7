use crate::ggdeals::models::GameDeal;
use crate::utils::format_price;
use anyhow::Result;
use async_trait::async_trait;
use teloxide::{prelude::*, types::ParseMode, Bot};

#[async_trait]
pub trait PriceView: Send + Sync {
    async fn display_prices(&self, app_id: &str, deal: &GameDeal, region: &str) -> Result<()>;
    async fn display_not_found(&self, app_id: &str) -> Result<()>;
    async fn display_error(&self, error_message: String) -> Result<()>;
}

pub struct TelegramPriceView {
    bot: Bot,
    chat_id: ChatId,
}

impl TelegramPriceView {
    pub fn new(bot: Bot, chat_id: ChatId) -> Self {
        Self { bot, chat_id }
    }
}

#[async_trait]
impl PriceView for TelegramPriceView {
    async fn display_prices(&self, app_id: &str, deal: &GameDeal, region: &str) -> Result<()> {
        let prices = &deal.prices;
        let currency = prices.currency.as_str();
        let title = deal
            .title
            .clone()
            .unwrap_or_else(|| format!("Steam Game {}", app_id));

        let mut text = format!(
            "<b>{}</b>\nSteam App ID: <code>{}</code>\n\n\
             • Current Retail: {}\n\
             • Current Keyshops: {}",
            title,
            app_id,
            format_price(prices.current_retail, currency),
            format_price(prices.current_keyshops, currency),
        );

        if let Some(low) = prices.historical_low_retail {
            text.push_str(&format!(
                "\n• Historical Low (Retail): {}",
                format_price(Some(low), currency)
            ));
        }

        if let Some(low) = prices.historical_low_keyshops {
            text.push_str(&format!(
                "\n• Historical Low (Keyshops): {}",
                format_price(Some(low), currency)
            ));
        }

        if let Some(url) = &deal.url {
            text.push_str(&format!("\n\n<a href=\"{}\">View all deals on gg.deals</a>", url));
        }

        text.push_str(&format!(
            "\n\nRegion: {} | Currency: {}",
            region.to_uppercase(),
            currency
        ));

        self.bot
            .send_message(self.chat_id, text)
            .parse_mode(ParseMode::Html)
            .await?;

        Ok(())
    }

    async fn display_not_found(&self, app_id: &str) -> Result<()> {
        self.bot
            .send_message(
                self.chat_id,
                format!(
                    "No price data found for Steam App ID: `{}`. Please verify the App ID is correct.",
                    app_id
                ),
            )
            .await?;

        Ok(())
    }

    async fn display_error(&self, error_message: String) -> Result<()> {
        self.bot
            .send_message(self.chat_id, format!("Error getting prices: {}", error_message))
            .await?;

        Ok(())
    }
}
