use async_trait::async_trait;

pub mod price_view;
pub mod search_view;
pub mod watchlist_view;

// Base view trait
#[async_trait]
pub trait View: Send + Sync {
    // Each view implementation will define its specific methods
}
