use async_trait::async_trait;
use log::{error, info};
use reqwest::Client;
use std::collections::HashMap;
use std::time::Duration;

use crate::ggdeals::cache::TtlCache;
use crate::ggdeals::models::{GameDeal, PriceResponse};
use crate::ggdeals::Config;

/// How long a batch quote stays fresh
const CACHE_TTL: Duration = Duration::from_secs(300);

/// App id used by the connectivity probe (Counter-Strike 2)
const PROBE_APP_ID: &str = "730";

/// Quote source for current game prices.
///
/// Fetch failures never cross this boundary: they are logged and surface as
/// an empty result, and callers treat a missing app id as "no data".
#[async_trait]
pub trait PriceService: Send + Sync {
    /// Fetch current quotes for a batch of app ids in one request.
    async fn fetch_prices(
        &self,
        app_ids: &[String],
        region: &str,
        use_cache: bool,
    ) -> HashMap<String, GameDeal>;

    /// Probe the API with a known app id.
    async fn test_connection(&self) -> bool;
}

/// Price service backed by the gg.deals v1 batch endpoint
pub struct GgDealsPriceService {
    http_client: Client,
    config: Config,
    cache: TtlCache<HashMap<String, GameDeal>>,
}

impl GgDealsPriceService {
    pub fn new(config: Config) -> Self {
        let http_client = Client::builder()
            .user_agent(concat!("gamedeals-bot/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            http_client,
            config,
            cache: TtlCache::new(CACHE_TTL),
        }
    }

    // Keys are built from the sorted id set, so batch order does not matter
    fn cache_key(sorted_ids: &[String], region: &str) -> String {
        format!("prices_{}_{}", sorted_ids.join(","), region)
    }

    /// One GET covering the whole batch. Network, status and parse failures
    /// all collapse to `None` after logging.
    async fn request_prices(&self, app_ids: &[String], region: &str) -> Option<PriceResponse> {
        let response = match self
            .http_client
            .get(&self.config.price_api_url)
            .query(&[
                ("ids", app_ids.join(",").as_str()),
                ("region", region),
                ("key", self.config.api_key.as_str()),
            ])
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                error!("Price API request failed: {}", e);
                return None;
            }
        };

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            error!("Price API error {}: {}", status, body);
            return None;
        }

        match response.json::<PriceResponse>().await {
            Ok(parsed) => Some(parsed),
            Err(e) => {
                error!("Failed to parse price response: {}", e);
                None
            }
        }
    }
}

#[async_trait]
impl PriceService for GgDealsPriceService {
    async fn fetch_prices(
        &self,
        app_ids: &[String],
        region: &str,
        use_cache: bool,
    ) -> HashMap<String, GameDeal> {
        if app_ids.is_empty() {
            return HashMap::new();
        }

        let mut sorted_ids = app_ids.to_vec();
        sorted_ids.sort();

        let key = Self::cache_key(&sorted_ids, region);
        if use_cache {
            if let Some(cached) = self.cache.get(&key) {
                return cached;
            }
        }

        let Some(parsed) = self.request_prices(&sorted_ids, region).await else {
            return HashMap::new();
        };

        if !parsed.success {
            error!(
                "Price API returned success=false for ids [{}]",
                sorted_ids.join(",")
            );
            return HashMap::new();
        }

        let deals: HashMap<String, GameDeal> = parsed
            .data
            .into_iter()
            .filter_map(|(app_id, deal)| deal.map(|deal| (app_id, deal)))
            .collect();

        self.cache.insert(key, deals.clone());
        deals
    }

    async fn test_connection(&self) -> bool {
        info!("Testing price API endpoint: {}", self.config.price_api_url);

        match self
            .request_prices(&[PROBE_APP_ID.to_string()], "us")
            .await
        {
            Some(parsed) if parsed.success => true,
            Some(_) => {
                error!("gg.deals API returned success=false during connectivity test");
                false
            }
            None => false,
        }
    }
}
