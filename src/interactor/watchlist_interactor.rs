use crate::entity::{BotError, Subscription};
use crate::ggdeals::models::GameDeal;
use crate::ggdeals::price_service::PriceService;
use crate::interactor::db;
use crate::utils::validate_app_id;
use anyhow::{anyhow, Result};
use async_trait::async_trait;
use sqlx::SqlitePool;
use std::sync::Arc;

#[async_trait]
pub trait WatchlistInteractor: Send + Sync {
    async fn get_watchlist(&self, user_id: i64) -> Result<Vec<Subscription>>;
    async fn watch_game(
        &self,
        user_id: i64,
        chat_id: i64,
        app_id: &str,
        target_price: Option<f64>,
        region: &str,
        custom_name: Option<&str>,
    ) -> Result<(Subscription, GameDeal)>;
    async fn unwatch_game(&self, user_id: i64, app_id: &str) -> Result<bool>;
}

pub struct WatchlistInteractorImpl {
    db_pool: Arc<SqlitePool>,
    price_service: Arc<dyn PriceService + Send + Sync>,
}

impl WatchlistInteractorImpl {
    pub fn new(
        db_pool: Arc<SqlitePool>,
        price_service: Arc<dyn PriceService + Send + Sync>,
    ) -> Self {
        Self {
            db_pool,
            price_service,
        }
    }
}

#[async_trait]
impl WatchlistInteractor for WatchlistInteractorImpl {
    async fn get_watchlist(&self, user_id: i64) -> Result<Vec<Subscription>> {
        db::get_watchlist(&self.db_pool, user_id)
            .await
            .map_err(|e| anyhow!("Failed to get watchlist: {}", e))
    }

    async fn watch_game(
        &self,
        user_id: i64,
        chat_id: i64,
        app_id: &str,
        target_price: Option<f64>,
        region: &str,
        custom_name: Option<&str>,
    ) -> Result<(Subscription, GameDeal)> {
        if !validate_app_id(app_id) {
            return Err(BotError::InvalidAppId(app_id.to_string()).into());
        }

        if matches!(target_price, Some(target) if target < 0.0) {
            return Err(BotError::InvalidTargetPrice.into());
        }

        // Confirm the API knows this app id before persisting anything
        let deals = self
            .price_service
            .fetch_prices(&[app_id.to_string()], region, true)
            .await;

        let deal = deals
            .get(app_id)
            .cloned()
            .ok_or_else(|| BotError::GameNotFound(app_id.to_string()))?;

        let game_title = custom_name
            .map(|name| name.to_string())
            .or_else(|| deal.title.clone())
            .unwrap_or_else(|| format!("Steam Game {}", app_id));

        db::add_to_watchlist(
            &self.db_pool,
            user_id,
            app_id,
            &game_title,
            chat_id,
            target_price,
            region,
        )
        .await
        .map_err(BotError::Database)?;

        let subscription = db::get_watchlist(&self.db_pool, user_id)
            .await
            .map_err(BotError::Database)?
            .into_iter()
            .find(|sub| sub.app_id == app_id)
            .ok_or_else(|| anyhow!("Failed to find watchlist entry after adding"))?;

        Ok((subscription, deal))
    }

    async fn unwatch_game(&self, user_id: i64, app_id: &str) -> Result<bool> {
        db::remove_from_watchlist(&self.db_pool, user_id, app_id)
            .await
            .map_err(|e| anyhow!("Failed to remove from watchlist: {}", e))
    }
}
