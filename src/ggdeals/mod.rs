pub mod cache;
pub mod config;
pub mod models;
pub mod price_service;

pub use cache::TtlCache;
pub use config::Config;
pub use models::{DealPrices, GameDeal, PriceResponse, PriceSource};
pub use price_service::{GgDealsPriceService, PriceService};
