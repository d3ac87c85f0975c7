use anyhow::Result;
use log::info;
use std::sync::Arc;
use teloxide::{prelude::*, types::ParseMode};

use super::{register_commands, CommandHandler};
use crate::di::ServiceContainer;

pub struct StartCommand;

impl CommandHandler for StartCommand {
    fn command_name() -> &'static str {
        "start"
    }

    fn description() -> &'static str {
        "start the bot and show available commands"
    }

    async fn execute(
        bot: Bot,
        msg: Message,
        telegram_id: i64,
        _services: Arc<ServiceContainer>,
    ) -> Result<()> {
        info!("Start command received from Telegram ID: {}", telegram_id);

        let mut text = String::from(
            "<b>Hello!</b> I watch game prices on gg.deals and alert you when a \
             game drops below your target price.\n\nAvailable commands:\n",
        );
        for (name, description) in register_commands() {
            text.push_str(&format!("/{} - {}\n", name, description));
        }

        bot.send_message(msg.chat.id, text)
            .parse_mode(ParseMode::Html)
            .await?;

        Ok(())
    }
}
