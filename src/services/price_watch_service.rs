use crate::di::ServiceContainer;
use crate::entity::{PriceAlert, Watcher};
use crate::ggdeals::models::GameDeal;
use crate::ggdeals::price_service::PriceService;
use crate::interactor::db;
use crate::services::alert_dispatcher::AlertDispatcher;
use anyhow::Result;
use log::{debug, error, info, warn};
use sqlx::SqlitePool;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use teloxide::Bot;
use tokio::select;
use tokio::sync::mpsc;
use tokio::time::{interval, Instant};

/// How often the monitoring pass runs
const CHECK_INTERVAL: Duration = Duration::from_secs(30 * 60);

/// Region used for background checks; per-user regions only apply on demand
const MONITOR_REGION: &str = "us";

pub struct PriceWatchService {
    services: Arc<ServiceContainer>,
    bot: Bot,
    stop_tx: Option<mpsc::Sender<()>>,
}

impl PriceWatchService {
    pub fn new(services: Arc<ServiceContainer>, bot: Bot) -> Self {
        Self {
            services,
            bot,
            stop_tx: None,
        }
    }

    // Start the background service that checks prices against targets
    pub async fn start(&mut self) -> Result<()> {
        if self.stop_tx.is_some() {
            warn!("Price watch service is already running");
            return Ok(());
        }

        // Create a channel for stopping the service
        let (stop_tx, mut stop_rx) = mpsc::channel::<()>(1);
        self.stop_tx = Some(stop_tx);

        let services_clone = self.services.clone();
        let bot_clone = self.bot.clone();

        // Spawn a new async task that runs independently
        tokio::spawn(async move {
            let mut interval = interval(CHECK_INTERVAL);
            let mut last_run = Instant::now();

            loop {
                select! {
                    // When the interval ticks, run one reconciliation cycle
                    _ = interval.tick() => {
                        let elapsed = last_run.elapsed();
                        debug!("Running price check (last run: {:.2?} ago)", elapsed);

                        if let Err(e) = Self::run_price_check(&services_clone, &bot_clone).await {
                            error!("Error during price monitoring: {}", e);
                        }

                        last_run = Instant::now();
                    }
                    // When we receive a stop signal, exit the loop
                    _ = stop_rx.recv() => {
                        info!("Stopping price watch service");
                        break;
                    }
                }
            }
        });

        info!("Price watch service started");
        Ok(())
    }

    // Stop the background service
    pub async fn stop(&mut self) {
        if let Some(tx) = self.stop_tx.take() {
            let _ = tx.send(()).await;
            info!("Price watch service stop signal sent");
        }
    }

    async fn run_price_check(services: &Arc<ServiceContainer>, bot: &Bot) -> Result<()> {
        let db_pool = services.db_pool();
        let price_service = services.price_service();

        let alerts = Self::collect_alerts(&db_pool, price_service.as_ref()).await?;
        if alerts.is_empty() {
            return Ok(());
        }

        let dispatcher = AlertDispatcher::new(bot.clone());
        let count = alerts.len();

        for alert in &alerts {
            dispatcher.dispatch(alert).await;
        }

        info!("Price check completed, {} alert(s) sent", count);
        Ok(())
    }

    /// One reconciliation pass: snapshot the watchlist, fetch a fresh batch
    /// quote for every distinct app id and diff it against the targets.
    async fn collect_alerts(
        db_pool: &SqlitePool,
        price_service: &dyn PriceService,
    ) -> Result<Vec<PriceAlert>> {
        let watched_games = db::get_all_watched_games(db_pool).await?;

        if watched_games.is_empty() {
            debug!("Watchlist is empty, skipping price check");
            return Ok(Vec::new());
        }

        let mut app_ids: Vec<String> = watched_games.keys().cloned().collect();
        app_ids.sort();

        info!("Checking prices for {} watched game(s)", app_ids.len());

        // The monitoring pass never reads the quote cache
        let deals = price_service
            .fetch_prices(&app_ids, MONITOR_REGION, false)
            .await;

        if deals.is_empty() {
            error!("Failed to get price data during monitoring, skipping cycle");
            return Ok(Vec::new());
        }

        Ok(build_alerts(&watched_games, &deals))
    }
}

/// Games absent from the fetched data are skipped for all their watchers, and
/// a watcher without a target never alerts. There is no suppression between
/// cycles: a price that stays below target alerts again every cycle.
fn build_alerts(
    watched_games: &HashMap<String, Vec<Watcher>>,
    deals: &HashMap<String, GameDeal>,
) -> Vec<PriceAlert> {
    let mut alerts = Vec::new();

    for (app_id, watchers) in watched_games {
        let Some(deal) = deals.get(app_id) else {
            continue;
        };
        let Some((best_price, source)) = deal.prices.best_price() else {
            continue;
        };

        for watcher in watchers {
            let Some(target_price) = watcher.target_price else {
                continue;
            };

            if best_price <= target_price {
                alerts.push(PriceAlert {
                    chat_id: watcher.chat_id,
                    user_id: watcher.user_id,
                    app_id: app_id.clone(),
                    game_title: watcher.game_title.clone(),
                    best_price,
                    source,
                    currency: deal.prices.currency.clone(),
                    target_price,
                    url: deal.url.clone(),
                });
            }
        }
    }

    alerts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ggdeals::models::{DealPrices, PriceSource};
    use async_trait::async_trait;
    use sqlx::sqlite::SqlitePoolOptions;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct StubPriceService {
        deals: HashMap<String, GameDeal>,
        calls: AtomicUsize,
    }

    impl StubPriceService {
        fn with_deals(deals: HashMap<String, GameDeal>) -> Self {
            Self {
                deals,
                calls: AtomicUsize::new(0),
            }
        }

        fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl PriceService for StubPriceService {
        async fn fetch_prices(
            &self,
            _app_ids: &[String],
            _region: &str,
            _use_cache: bool,
        ) -> HashMap<String, GameDeal> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.deals.clone()
        }

        async fn test_connection(&self) -> bool {
            true
        }
    }

    fn deal(retail: Option<f64>, keyshops: Option<f64>) -> GameDeal {
        GameDeal {
            title: Some("Counter-Strike 2".to_string()),
            prices: DealPrices {
                current_retail: retail,
                current_keyshops: keyshops,
                ..DealPrices::default()
            },
            url: Some("https://gg.deals/game/counter-strike-2/".to_string()),
        }
    }

    fn watcher(user_id: i64, target_price: Option<f64>) -> Watcher {
        Watcher {
            user_id,
            game_title: "Counter-Strike 2".to_string(),
            chat_id: 100,
            target_price,
            region: "us".to_string(),
        }
    }

    async fn test_pool() -> SqlitePool {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        sqlx::migrate!("./migrations").run(&pool).await.unwrap();
        pool
    }

    #[test]
    fn test_alert_fires_when_target_met() {
        let watched = HashMap::from([("730".to_string(), vec![watcher(1, Some(15.0))])]);
        let deals = HashMap::from([("730".to_string(), deal(Some(12.0), None))]);

        let alerts = build_alerts(&watched, &deals);
        assert_eq!(alerts.len(), 1);

        let alert = &alerts[0];
        assert_eq!(alert.best_price, 12.0);
        assert_eq!(alert.target_price, 15.0);
        assert_eq!(alert.source, PriceSource::Retail);
        assert_eq!(alert.chat_id, 100);
    }

    #[test]
    fn test_no_alert_above_target() {
        let watched = HashMap::from([("730".to_string(), vec![watcher(1, Some(15.0))])]);
        let deals = HashMap::from([("730".to_string(), deal(Some(20.0), None))]);

        assert!(build_alerts(&watched, &deals).is_empty());
    }

    #[test]
    fn test_no_alert_without_target() {
        let watched = HashMap::from([("730".to_string(), vec![watcher(1, None)])]);
        let deals = HashMap::from([("730".to_string(), deal(Some(1.0), None))]);

        assert!(build_alerts(&watched, &deals).is_empty());
    }

    #[test]
    fn test_alert_uses_cheapest_source() {
        let watched = HashMap::from([("730".to_string(), vec![watcher(1, Some(15.0))])]);
        let deals = HashMap::from([("730".to_string(), deal(Some(12.0), Some(9.5)))]);

        let alerts = build_alerts(&watched, &deals);
        assert_eq!(alerts[0].best_price, 9.5);
        assert_eq!(alerts[0].source, PriceSource::Keyshop);
    }

    #[test]
    fn test_games_missing_from_response_are_skipped() {
        let watched = HashMap::from([
            ("730".to_string(), vec![watcher(1, Some(15.0))]),
            ("570".to_string(), vec![watcher(2, Some(5.0))]),
        ]);
        // Only one of the two watched games came back with data
        let deals = HashMap::from([("730".to_string(), deal(Some(12.0), None))]);

        let alerts = build_alerts(&watched, &deals);
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].app_id, "730");
    }

    #[test]
    fn test_game_without_usable_price_is_skipped() {
        let watched = HashMap::from([("730".to_string(), vec![watcher(1, Some(15.0))])]);
        let deals = HashMap::from([("730".to_string(), deal(None, None))]);

        assert!(build_alerts(&watched, &deals).is_empty());
    }

    #[test]
    fn test_every_qualifying_watcher_alerts() {
        let watched = HashMap::from([(
            "730".to_string(),
            vec![watcher(1, Some(15.0)), watcher(2, Some(10.0)), watcher(3, Some(5.0))],
        )]);
        let deals = HashMap::from([("730".to_string(), deal(Some(8.0), None))]);

        let alerts = build_alerts(&watched, &deals);
        assert_eq!(alerts.len(), 2);
    }

    #[tokio::test]
    async fn test_empty_watchlist_skips_fetch() {
        let pool = test_pool().await;
        let stub = StubPriceService::with_deals(HashMap::new());

        let alerts = PriceWatchService::collect_alerts(&pool, &stub).await.unwrap();

        assert!(alerts.is_empty());
        assert_eq!(stub.call_count(), 0);
    }

    #[tokio::test]
    async fn test_failed_batch_fetch_skips_cycle() {
        let pool = test_pool().await;
        db::add_to_watchlist(&pool, 1, "730", "Counter-Strike 2", 100, Some(15.0), "us")
            .await
            .unwrap();

        let stub = StubPriceService::with_deals(HashMap::new());
        let alerts = PriceWatchService::collect_alerts(&pool, &stub).await.unwrap();

        assert!(alerts.is_empty());
        assert_eq!(stub.call_count(), 1);
    }

    #[tokio::test]
    async fn test_cycle_produces_alert_for_met_target() {
        let pool = test_pool().await;
        db::add_to_watchlist(&pool, 1, "730", "Counter-Strike 2", 100, Some(15.0), "us")
            .await
            .unwrap();

        let stub = StubPriceService::with_deals(HashMap::from([(
            "730".to_string(),
            deal(Some(12.0), None),
        )]));
        let alerts = PriceWatchService::collect_alerts(&pool, &stub).await.unwrap();

        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].best_price, 12.0);
        assert_eq!(alerts[0].user_id, 1);
    }
}
