use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One watchlist row: a user tracking a game in a chat.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Subscription {
    pub user_id: i64,
    pub app_id: String,
    pub game_title: String,
    pub chat_id: i64,
    pub target_price: Option<f64>,
    pub region: String,
    pub added_at: DateTime<Utc>,
}

impl Subscription {
    // Format the target for display
    pub fn format_target(&self, currency: &str) -> Option<String> {
        self.target_price
            .map(|target| format!("{:.2} {}", target, currency))
    }
}

/// Projection of a subscription used by the monitoring pass, grouped by app id.
#[derive(Debug, Clone)]
pub struct Watcher {
    pub user_id: i64,
    pub game_title: String,
    pub chat_id: i64,
    pub target_price: Option<f64>,
    pub region: String,
}

impl From<Subscription> for Watcher {
    fn from(sub: Subscription) -> Self {
        Self {
            user_id: sub.user_id,
            game_title: sub.game_title,
            chat_id: sub.chat_id,
            target_price: sub.target_price,
            region: sub.region,
        }
    }
}
