use serde::{Deserialize, Deserializer};
use std::collections::HashMap;
use std::fmt;

/// Envelope returned by the prices endpoint. Unknown app ids come back as
/// explicit nulls inside `data`.
#[derive(Debug, Clone, Deserialize)]
pub struct PriceResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub data: HashMap<String, Option<GameDeal>>,
}

/// Per-game payload: title, the current/historical quotes and the deals page.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GameDeal {
    pub title: Option<String>,
    #[serde(default)]
    pub prices: DealPrices,
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DealPrices {
    #[serde(default, deserialize_with = "de_price")]
    pub current_retail: Option<f64>,
    #[serde(default, deserialize_with = "de_price")]
    pub current_keyshops: Option<f64>,
    #[serde(default, deserialize_with = "de_price")]
    pub historical_low_retail: Option<f64>,
    #[serde(default, deserialize_with = "de_price")]
    pub historical_low_keyshops: Option<f64>,
    #[serde(default = "default_currency")]
    pub currency: String,
}

/// Which kind of store produced the best quote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceSource {
    Retail,
    Keyshop,
}

impl PriceSource {
    // Label used in alert messages
    pub fn store_label(&self) -> &'static str {
        match self {
            PriceSource::Retail => "Retail stores",
            PriceSource::Keyshop => "Key shops",
        }
    }
}

impl fmt::Display for PriceSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PriceSource::Retail => write!(f, "Retail"),
            PriceSource::Keyshop => write!(f, "Keyshop"),
        }
    }
}

impl DealPrices {
    /// The best currently available price: the cheaper of retail and keyshop
    /// when both are quoted, whichever one is quoted otherwise.
    pub fn best_price(&self) -> Option<(f64, PriceSource)> {
        match (self.current_retail, self.current_keyshops) {
            (Some(retail), Some(keyshops)) => {
                if retail <= keyshops {
                    Some((retail, PriceSource::Retail))
                } else {
                    Some((keyshops, PriceSource::Keyshop))
                }
            }
            (Some(retail), None) => Some((retail, PriceSource::Retail)),
            (None, Some(keyshops)) => Some((keyshops, PriceSource::Keyshop)),
            (None, None) => None,
        }
    }
}

fn default_currency() -> String {
    "USD".to_string()
}

// The API quotes prices as strings ("12.49") or bare numbers depending on the
// field; both decode to the same thing.
fn de_price<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;

    Ok(match value {
        Some(serde_json::Value::Number(number)) => number.as_f64(),
        Some(serde_json::Value::String(text)) => text.parse::<f64>().ok(),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prices(retail: Option<f64>, keyshops: Option<f64>) -> DealPrices {
        DealPrices {
            current_retail: retail,
            current_keyshops: keyshops,
            ..DealPrices::default()
        }
    }

    #[test]
    fn test_best_price_prefers_cheaper_keyshop() {
        let (price, source) = prices(Some(10.0), Some(8.0)).best_price().unwrap();
        assert_eq!(price, 8.0);
        assert_eq!(source, PriceSource::Keyshop);
    }

    #[test]
    fn test_best_price_ties_go_to_retail() {
        let (price, source) = prices(Some(10.0), Some(10.0)).best_price().unwrap();
        assert_eq!(price, 10.0);
        assert_eq!(source, PriceSource::Retail);
    }

    #[test]
    fn test_best_price_with_only_retail() {
        let (price, source) = prices(Some(10.0), None).best_price().unwrap();
        assert_eq!(price, 10.0);
        assert_eq!(source, PriceSource::Retail);
    }

    #[test]
    fn test_best_price_without_quotes() {
        assert!(prices(None, None).best_price().is_none());
    }

    #[test]
    fn test_deserialize_string_and_number_prices() {
        let deal: GameDeal = serde_json::from_str(
            r#"{
                "title": "Portal 2",
                "prices": {
                    "currentRetail": "9.99",
                    "currentKeyshops": 7.5,
                    "historicalLowRetail": null,
                    "currency": "EUR"
                },
                "url": "https://gg.deals/game/portal-2/"
            }"#,
        )
        .unwrap();

        assert_eq!(deal.title.as_deref(), Some("Portal 2"));
        assert_eq!(deal.prices.current_retail, Some(9.99));
        assert_eq!(deal.prices.current_keyshops, Some(7.5));
        assert_eq!(deal.prices.historical_low_retail, None);
        assert_eq!(deal.prices.historical_low_keyshops, None);
        assert_eq!(deal.prices.currency, "EUR");
    }

    #[test]
    fn test_deserialize_envelope_with_null_entries() {
        let response: PriceResponse = serde_json::from_str(
            r#"{"success": true, "data": {"730": {"title": "Counter-Strike 2"}, "999": null}}"#,
        )
        .unwrap();

        assert!(response.success);
        assert!(response.data.get("730").unwrap().is_some());
        assert!(response.data.get("999").unwrap().is_none());
    }

    #[test]
    fn test_unparsable_price_becomes_none() {
        let deal: GameDeal =
            serde_json::from_str(r#"{"prices": {"currentRetail": "free"}}"#).unwrap();
        assert_eq!(deal.prices.current_retail, None);
        assert_eq!(deal.prices.currency, "USD");
    }
}
