#[derive(Debug, thiserror::Error)]
pub enum BotError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Price API error: {0}")]
    PriceApi(String),

    #[error("Telegram API error: {0}")]
    TelegramApi(#[from] teloxide::RequestError),

    #[error("No price data found for Steam App ID: {0}")]
    GameNotFound(String),

    #[error("Invalid Steam App ID: {0}")]
    InvalidAppId(String),

    #[error("Target price must be a non-negative number")]
    InvalidTargetPrice,
}
