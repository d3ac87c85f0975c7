use crate::interactor::price_interactor::PriceInteractor;
use crate::view::price_view::PriceView;
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

#[async_trait]
pub trait PricePresenter: Send + Sync {
    async fn show_game_prices(&self, app_id: &str, region: &str) -> Result<()>;
}

pub struct PricePresenterImpl<I, V> {
    interactor: Arc<I>,
    view: Arc<V>,
}

impl<I, V> PricePresenterImpl<I, V>
where
    I: PriceInteractor,
    V: PriceView,
{
    pub fn new(interactor: Arc<I>, view: Arc<V>) -> Self {
        Self { interactor, view }
    }
}

#[async_trait]
impl<I, V> PricePresenter for PricePresenterImpl<I, V>
where
    I: PriceInteractor + Send + Sync,
    V: PriceView + Send + Sync,
{
    async fn show_game_prices(&self, app_id: &str, region: &str) -> Result<()> {
        match self.interactor.get_game_prices(app_id, region).await {
            Ok(Some(deal)) => {
                self.view.display_prices(app_id, &deal, region).await?;
            }
            Ok(None) => {
                self.view.display_not_found(app_id).await?;
            }
            Err(e) => {
                self.view.display_error(e.to_string()).await?;
            }
        }

        Ok(())
    }
}
