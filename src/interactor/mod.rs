use async_trait::async_trait;

pub mod db;
pub mod price_interactor;
pub mod search_interactor;
pub mod watchlist_interactor;

// Base interactor trait
#[async_trait]
pub trait Interactor: Send + Sync {
    // Each interactor implementation will define its specific methods
}
