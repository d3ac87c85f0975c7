use async_trait::async_trait;

pub mod price_presenter;
pub mod search_presenter;
pub mod watchlist_presenter;

// Base presenter trait
#[async_trait]
pub trait Presenter: Send + Sync {
    // Each presenter implementation will define its specific methods
}
