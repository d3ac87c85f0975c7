use std::sync::Arc;

use sqlx::SqlitePool;

use crate::ggdeals::price_service::{GgDealsPriceService, PriceService};
use crate::ggdeals::Config;

/// ServiceContainer provides access to core application dependencies
pub struct ServiceContainer {
    // Core services
    db_pool: Arc<SqlitePool>,

    // Price service with its shared quote cache
    price_service: Arc<dyn PriceService + Send + Sync>,

    // Configuration
    config: Config,
}

impl ServiceContainer {
    /// Create a new service container with essential dependencies
    pub fn new(db_pool: Arc<SqlitePool>) -> Self {
        let config = Config::from_env();

        let price_service = Arc::new(GgDealsPriceService::new(config.clone()))
            as Arc<dyn PriceService + Send + Sync>;

        Self {
            db_pool,
            price_service,
            config,
        }
    }

    // Accessor methods

    pub fn db_pool(&self) -> Arc<SqlitePool> {
        self.db_pool.clone()
    }

    pub fn price_service(&self) -> Arc<dyn PriceService + Send + Sync> {
        self.price_service.clone()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}
