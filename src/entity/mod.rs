mod alert;
mod bot_error;
mod subscription;

pub use alert::PriceAlert;
pub use bot_error::BotError;
pub use subscription::{Subscription, Watcher};
