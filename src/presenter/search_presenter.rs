use crate::interactor::search_interactor::SearchInteractor;
use crate::view::search_view::SearchView;
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

#[async_trait]
pub trait SearchPresenter: Send + Sync {
    async fn search(&self, query: &str) -> Result<()>;
}

pub struct SearchPresenterImpl<I, V> {
    interactor: Arc<I>,
    view: Arc<V>,
}

impl<I, V> SearchPresenterImpl<I, V>
where
    I: SearchInteractor,
    V: SearchView,
{
    pub fn new(interactor: Arc<I>, view: Arc<V>) -> Self {
        Self { interactor, view }
    }
}

#[async_trait]
impl<I, V> SearchPresenter for SearchPresenterImpl<I, V>
where
    I: SearchInteractor + Send + Sync,
    V: SearchView + Send + Sync,
{
    async fn search(&self, query: &str) -> Result<()> {
        let games = self.interactor.search_games(query).await;

        if games.is_empty() {
            self.view.display_no_results(query).await?;
        } else {
            self.view.display_results(query, games).await?;
        }

        Ok(())
    }
}
