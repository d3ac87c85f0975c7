use crate::ggdeals::models::PriceSource;

/// A price drop that qualified against a subscription's target, ready to be
/// delivered. Built fresh every monitoring cycle, never persisted.
#[derive(Debug, Clone)]
pub struct PriceAlert {
    pub chat_id: i64,
    pub user_id: i64,
    pub app_id: String,
    pub game_title: String,
    pub best_price: f64,
    pub source: PriceSource,
    pub currency: String,
    pub target_price: f64,
    pub url: Option<String>,
}
