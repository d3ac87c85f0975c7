/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// URL for the gg.deals batch price endpoint
    pub price_api_url: String,

    /// API key issued by gg.deals
    pub api_key: String,

    /// Telegram user ids allowed to run admin commands
    pub admin_ids: Vec<i64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            price_api_url: "https://api.gg.deals/v1/prices/by-steam-app-id/".to_string(),
            api_key: String::new(),
            admin_ids: Vec::new(),
        }
    }
}

impl Config {
    /// Creates a configuration from environment variables
    pub fn from_env() -> Self {
        use std::env;

        Self {
            price_api_url: env::var("GGDEALS_API_URL")
                .unwrap_or_else(|_| "https://api.gg.deals/v1/prices/by-steam-app-id/".to_string()),
            api_key: env::var("GGDEALS_API_KEY").unwrap_or_default(),
            admin_ids: env::var("BOT_ADMIN_IDS")
                .map(|ids| {
                    ids.split(',')
                        .filter_map(|id| id.trim().parse::<i64>().ok())
                        .collect()
                })
                .unwrap_or_default(),
        }
    }

    pub fn is_admin(&self, user_id: i64) -> bool {
        self.admin_ids.contains(&user_id)
    }
}
