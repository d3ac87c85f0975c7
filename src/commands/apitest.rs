use anyhow::Result;
use log::info;
use std::sync::Arc;
use teloxide::prelude::*;

use super::CommandHandler;
use crate::di::ServiceContainer;

pub struct ApiTestCommand;

impl CommandHandler for ApiTestCommand {
    fn command_name() -> &'static str {
        "apitest"
    }

    fn description() -> &'static str {
        "test the price API connection (admin only)"
    }

    async fn execute(
        bot: Bot,
        msg: Message,
        telegram_id: i64,
        services: Arc<ServiceContainer>,
    ) -> Result<()> {
        let chat_id = msg.chat.id;

        if !services.config().is_admin(telegram_id) {
            bot.send_message(chat_id, "❌ This command requires administrator permissions.")
                .await?;

            return Ok(());
        }

        info!(
            "API connectivity test requested by Telegram ID: {}",
            telegram_id
        );

        bot.send_message(chat_id, "🔍 Testing API connection...")
            .await?;

        if services.price_service().test_connection().await {
            bot.send_message(chat_id, "✅ API connection successful!")
                .await?;
        } else {
            bot.send_message(chat_id, "❌ API connection failed. Check bot logs for details.")
                .await?;
        }

        Ok(())
    }
}
