use crate::ggdeals::price_service::PriceService;
use crate::interactor::watchlist_interactor::WatchlistInteractor;
use crate::utils::WatchArgs;
use crate::view::watchlist_view::WatchlistView;
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

const DEFAULT_REGION: &str = "us";

#[async_trait]
pub trait WatchlistPresenter: Send + Sync {
    async fn show_watchlist(&self, user_id: i64, region: &str) -> Result<()>;
    async fn add_game(&self, user_id: i64, chat_id: i64, args: &WatchArgs) -> Result<()>;
    async fn remove_game(&self, user_id: i64, app_id: &str) -> Result<()>;
}

pub struct WatchlistPresenterImpl<I, V> {
    interactor: Arc<I>,
    view: Arc<V>,
    price_service: Arc<dyn PriceService + Send + Sync>,
}

impl<I, V> WatchlistPresenterImpl<I, V>
where
    I: WatchlistInteractor,
    V: WatchlistView,
{
    pub fn new(
        interactor: Arc<I>,
        view: Arc<V>,
        price_service: Arc<dyn PriceService + Send + Sync>,
    ) -> Self {
        Self {
            interactor,
            view,
            price_service,
        }
    }
}

#[async_trait]
impl<I, V> WatchlistPresenter for WatchlistPresenterImpl<I, V>
where
    I: WatchlistInteractor + Send + Sync,
    V: WatchlistView + Send + Sync,
{
    async fn show_watchlist(&self, user_id: i64, region: &str) -> Result<()> {
        match self.interactor.get_watchlist(user_id).await {
            Ok(watchlist) if watchlist.is_empty() => {
                self.view.display_empty_watchlist().await?;
            }
            Ok(watchlist) => {
                // One cached batch quote covers the whole list
                let app_ids: Vec<String> =
                    watchlist.iter().map(|sub| sub.app_id.clone()).collect();
                let deals = self.price_service.fetch_prices(&app_ids, region, true).await;

                self.view.display_watchlist(watchlist, deals, region).await?;
            }
            Err(e) => {
                self.view.display_error(e.to_string()).await?;
            }
        }

        Ok(())
    }

    async fn add_game(&self, user_id: i64, chat_id: i64, args: &WatchArgs) -> Result<()> {
        let region = args.region.as_deref().unwrap_or(DEFAULT_REGION);

        match self
            .interactor
            .watch_game(
                user_id,
                chat_id,
                &args.app_id,
                args.target_price,
                region,
                args.custom_name.as_deref(),
            )
            .await
        {
            Ok((subscription, deal)) => {
                self.view.display_watch_added(&subscription, &deal).await?;
            }
            Err(e) => {
                self.view.display_watch_failed(e.to_string()).await?;
            }
        }

        Ok(())
    }

    async fn remove_game(&self, user_id: i64, app_id: &str) -> Result<()> {
        match self.interactor.unwatch_game(user_id, app_id).await {
            Ok(true) => {
                self.view.display_unwatched(app_id).await?;
            }
            Ok(false) => {
                self.view.display_not_watched(app_id).await?;
            }
            Err(e) => {
                self.view.display_error(e.to_string()).await?;
            }
        }

        Ok(())
    }
}
