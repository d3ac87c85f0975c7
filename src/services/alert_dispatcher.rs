use crate::entity::PriceAlert;
use log::{error, info};
use teloxide::{prelude::*, types::ParseMode, Bot};

/// Delivers price alerts to the chat each subscription was created in.
/// Delivery failures are logged and dropped, never raised to the caller.
pub struct AlertDispatcher {
    bot: Bot,
}

impl AlertDispatcher {
    pub fn new(bot: Bot) -> Self {
        Self { bot }
    }

    pub async fn dispatch(&self, alert: &PriceAlert) {
        let message = Self::format_alert(alert);

        match self
            .bot
            .send_message(ChatId(alert.chat_id), message)
            .parse_mode(ParseMode::Html)
            .await
        {
            Ok(_) => info!(
                "Sent price alert for {} to user {}",
                alert.game_title, alert.user_id
            ),
            Err(e) => error!(
                "Failed to send price alert for {} to user {}: {}",
                alert.game_title, alert.user_id, e
            ),
        }
    }

    fn format_alert(alert: &PriceAlert) -> String {
        let mut text = format!(
            "🚨 <b>Price Alert!</b> <a href=\"tg://user?id={}\">🔔</a>\n\n\
             <b>{}</b> has reached your target price!\n\n\
             • Current best: <b>{:.2} {}</b> ({})\n\
             • Your target: {:.2} {}\n\
             • Steam App ID: <code>{}</code>",
            alert.user_id,
            alert.game_title,
            alert.best_price,
            alert.currency,
            alert.source.store_label(),
            alert.target_price,
            alert.currency,
            alert.app_id,
        );

        if let Some(url) = &alert.url {
            text.push_str(&format!(
                "\n\n<a href=\"{}\">View all deals on gg.deals</a>",
                url
            ));
        }

        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ggdeals::models::PriceSource;

    fn alert(url: Option<&str>) -> PriceAlert {
        PriceAlert {
            chat_id: 100,
            user_id: 7,
            app_id: "730".to_string(),
            game_title: "Counter-Strike 2".to_string(),
            best_price: 12.0,
            source: PriceSource::Keyshop,
            currency: "USD".to_string(),
            target_price: 15.0,
            url: url.map(|u| u.to_string()),
        }
    }

    #[test]
    fn test_format_alert_contains_prices_and_target() {
        let text =
            AlertDispatcher::format_alert(&alert(Some("https://gg.deals/game/counter-strike-2/")));

        assert!(text.contains("Counter-Strike 2"));
        assert!(text.contains("12.00 USD"));
        assert!(text.contains("Key shops"));
        assert!(text.contains("15.00 USD"));
        assert!(text.contains("https://gg.deals/game/counter-strike-2/"));
    }

    #[test]
    fn test_format_alert_without_url() {
        let text = AlertDispatcher::format_alert(&alert(None));
        assert!(!text.contains("View all deals"));
    }
}
