use anyhow::Result;
use std::sync::Arc;
use teloxide::prelude::*;

use super::{register_commands, CommandHandler};
use crate::di::ServiceContainer;

pub struct HelpCommand;

impl CommandHandler for HelpCommand {
    fn command_name() -> &'static str {
        "help"
    }

    fn description() -> &'static str {
        "display this help message"
    }

    async fn execute(
        bot: Bot,
        msg: Message,
        _telegram_id: i64,
        _services: Arc<ServiceContainer>,
    ) -> Result<()> {
        let mut text = String::from("Available commands:\n");
        for (name, description) in register_commands() {
            text.push_str(&format!("/{} - {}\n", name, description));
        }

        bot.send_message(msg.chat.id, text).await?;

        Ok(())
    }
}
