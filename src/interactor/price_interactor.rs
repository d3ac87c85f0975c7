use crate::ggdeals::models::GameDeal;
use crate::ggdeals::price_service::PriceService;
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

#[async_trait]
pub trait PriceInteractor: Send + Sync {
    /// Current quote for one game; `None` when the API has no data for it.
    async fn get_game_prices(&self, app_id: &str, region: &str) -> Result<Option<GameDeal>>;
}

pub struct PriceInteractorImpl {
    price_service: Arc<dyn PriceService + Send + Sync>,
}

impl PriceInteractorImpl {
    pub fn new(price_service: Arc<dyn PriceService + Send + Sync>) -> Self {
        Self { price_service }
    }
}

#[async_trait]
impl PriceInteractor for PriceInteractorImpl {
    async fn get_game_prices(&self, app_id: &str, region: &str) -> Result<Option<GameDeal>> {
        let deals = self
            .price_service
            .fetch_prices(&[app_id.to_string()], region, true)
            .await;

        Ok(deals.get(app_id).cloned())
    }
}
