use lazy_static::lazy_static;
use regex::Regex;

// Validate a Steam app id (numeric storefront identifier)
pub fn validate_app_id(app_id: &str) -> bool {
    lazy_static! {
        static ref RE: Regex = Regex::new(r"^\d{1,10}$").unwrap();
    }

    RE.is_match(app_id)
}

// Validate a short locale code like "us" or "eu"
pub fn validate_region(region: &str) -> bool {
    lazy_static! {
        static ref RE: Regex = Regex::new(r"^[a-z]{2,3}$").unwrap();
    }

    RE.is_match(region)
}

// Format an optional quote for display
pub fn format_price(price: Option<f64>, currency: &str) -> String {
    match price {
        Some(price) => format!("{:.2} {}", price, currency),
        None => "Not available".to_string(),
    }
}

/// Arguments accepted by the watch command:
/// `<app_id> [target_price] [region] [custom name...]`
#[derive(Debug, Clone, PartialEq)]
pub struct WatchArgs {
    pub app_id: String,
    pub target_price: Option<f64>,
    pub region: Option<String>,
    pub custom_name: Option<String>,
}

/// Parse the free-form tail of a watch command. Returns `None` when no app id
/// was given; everything after the recognized positional arguments becomes
/// the custom display name.
pub fn parse_watch_args(input: &str) -> Option<WatchArgs> {
    let mut parts = input.split_whitespace();
    let app_id = parts.next()?.to_string();
    let rest: Vec<&str> = parts.collect();

    let mut index = 0;
    let mut target_price = None;
    let mut region = None;

    if let Some(price) = rest.get(index).and_then(|part| part.parse::<f64>().ok()) {
        target_price = Some(price);
        index += 1;
    }

    if let Some(code) = rest.get(index).filter(|part| validate_region(part)) {
        region = Some(code.to_string());
        index += 1;
    }

    let custom_name = if rest.len() > index {
        Some(rest[index..].join(" "))
    } else {
        None
    };

    Some(WatchArgs {
        app_id,
        target_price,
        region,
        custom_name,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_app_id() {
        assert!(validate_app_id("730"));
        assert!(validate_app_id("413150"));
        assert!(!validate_app_id(""));
        assert!(!validate_app_id("73a0"));
        assert!(!validate_app_id("-730"));
    }

    #[test]
    fn test_validate_region() {
        assert!(validate_region("us"));
        assert!(validate_region("eu"));
        assert!(!validate_region("US"));
        assert!(!validate_region("america"));
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(Some(12.5), "USD"), "12.50 USD");
        assert_eq!(format_price(None, "USD"), "Not available");
    }

    #[test]
    fn test_parse_watch_args_full() {
        let args = parse_watch_args("730 15.5 eu Counter Strike").unwrap();
        assert_eq!(args.app_id, "730");
        assert_eq!(args.target_price, Some(15.5));
        assert_eq!(args.region.as_deref(), Some("eu"));
        assert_eq!(args.custom_name.as_deref(), Some("Counter Strike"));
    }

    #[test]
    fn test_parse_watch_args_app_id_only() {
        let args = parse_watch_args("730").unwrap();
        assert_eq!(args.app_id, "730");
        assert_eq!(args.target_price, None);
        assert_eq!(args.region, None);
        assert_eq!(args.custom_name, None);
    }

    #[test]
    fn test_parse_watch_args_region_without_target() {
        let args = parse_watch_args("730 eu").unwrap();
        assert_eq!(args.target_price, None);
        assert_eq!(args.region.as_deref(), Some("eu"));
    }

    #[test]
    fn test_parse_watch_args_name_without_region() {
        let args = parse_watch_args("620 9.99 Portal Two").unwrap();
        assert_eq!(args.target_price, Some(9.99));
        assert_eq!(args.region, None);
        assert_eq!(args.custom_name.as_deref(), Some("Portal Two"));
    }

    #[test]
    fn test_parse_watch_args_empty_input() {
        assert!(parse_watch_args("").is_none());
        assert!(parse_watch_args("   ").is_none());
    }
}
