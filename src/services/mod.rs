pub mod alert_dispatcher;
pub mod price_watch_service;

pub use alert_dispatcher::AlertDispatcher;
pub use price_watch_service::PriceWatchService;
