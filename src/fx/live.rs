//! Async fetcher for a USD-base exchange-rate quote sheet.
//!
//! This is the collaborator-side helper the pure engine deliberately
//! excludes: fetch a [`LiveRates`] snapshot once per session, then pass
//! it into [`crate::fx::resolve_rate`] / [`crate::gst::compute_invoice`]
//! as an immutable argument.

use std::collections::HashMap;
use std::fmt;

use rust_decimal::Decimal;
use serde::Deserialize;

use super::resolve::LiveRates;
use crate::core::Currency;

/// Error from the rates feed.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub enum RatesFeedError {
    /// Network or HTTP error.
    Network(String),
    /// The feed returned an error status or payload.
    ApiError(String),
    /// Failed to parse the response.
    ParseError(String),
}

impl fmt::Display for RatesFeedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Network(e) => write!(f, "rates feed network error: {e}"),
            Self::ApiError(e) => write!(f, "rates feed API error: {e}"),
            Self::ParseError(e) => write!(f, "rates feed parse error: {e}"),
        }
    }
}

impl std::error::Error for RatesFeedError {}

const DEFAULT_FEED_URL: &str = "https://open.er-api.com/v6/latest/USD";

/// Feed response: `rates` maps ISO codes to units per 1 USD.
#[derive(Debug, Deserialize)]
struct RatesApiResponse {
    result: Option<String>,
    #[serde(alias = "conversion_rates")]
    rates: Option<HashMap<String, f64>>,
}

/// Fetch the default public USD-base quote sheet.
///
/// This function is async and requires network access. Only currencies
/// in the configured [`Currency`] set are kept; everything else in the
/// feed is ignored.
pub async fn fetch_live_rates() -> Result<LiveRates, RatesFeedError> {
    fetch_live_rates_from(DEFAULT_FEED_URL).await
}

/// Fetch a USD-base quote sheet from a specific URL (e.g. a mirror or a
/// recorded fixture server in tests).
pub async fn fetch_live_rates_from(url: &str) -> Result<LiveRates, RatesFeedError> {
    let client = reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(30))
        .build()
        .map_err(|e| RatesFeedError::Network(e.to_string()))?;

    let resp = client
        .get(url)
        .send()
        .await
        .map_err(|e| RatesFeedError::Network(e.to_string()))?;

    let status = resp.status();
    let body = resp
        .text()
        .await
        .map_err(|e| RatesFeedError::Network(e.to_string()))?;

    if !status.is_success() {
        return Err(RatesFeedError::ApiError(format!("HTTP {status}: {body}")));
    }

    let api_resp: RatesApiResponse = serde_json::from_str(&body)
        .map_err(|e: serde_json::Error| RatesFeedError::ParseError(e.to_string()))?;

    if let Some(result) = &api_resp.result {
        if result != "success" {
            return Err(RatesFeedError::ApiError(format!("feed result: {result}")));
        }
    }

    let rates = api_resp
        .rates
        .ok_or_else(|| RatesFeedError::ParseError("response has no rates table".into()))?;

    snapshot_from_quotes(&rates)
}

/// Build a snapshot from raw feed quotes, keeping only configured
/// currencies.
fn snapshot_from_quotes(rates: &HashMap<String, f64>) -> Result<LiveRates, RatesFeedError> {
    let mut table = LiveRates::new();
    for currency in Currency::ALL {
        let Some(&quote) = rates.get(currency.code()) else {
            continue;
        };
        let quote = Decimal::try_from(quote)
            .map_err(|e| RatesFeedError::ParseError(format!("{}: {e}", currency.code())))?;
        table
            .insert(currency, quote)
            .map_err(|e| RatesFeedError::ParseError(e.to_string()))?;
    }
    if table.is_empty() {
        return Err(RatesFeedError::ParseError(
            "feed quoted none of the configured currencies".into(),
        ));
    }
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn feed_url_is_https() {
        assert!(DEFAULT_FEED_URL.starts_with("https://"));
    }

    #[test]
    fn response_deserialization() {
        let json = r#"{"result":"success","rates":{"USD":1,"INR":83.12,"EUR":0.92,"JPY":151.4}}"#;
        let resp: RatesApiResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.result.as_deref(), Some("success"));
        let rates = resp.rates.unwrap();
        assert_eq!(rates.get("INR"), Some(&83.12));
    }

    #[test]
    fn snapshot_keeps_only_configured_currencies() {
        let mut rates = HashMap::new();
        rates.insert("USD".to_string(), 1.0);
        rates.insert("INR".to_string(), 83.0);
        rates.insert("JPY".to_string(), 151.4);

        let table = snapshot_from_quotes(&rates).unwrap();
        assert_eq!(table.quote(Currency::Inr), Some(dec!(83)));
        assert_eq!(table.quote(Currency::Usd), Some(dec!(1)));
        assert_eq!(table.quote(Currency::Eur), None);
    }

    #[test]
    fn snapshot_rejects_empty_overlap() {
        let mut rates = HashMap::new();
        rates.insert("JPY".to_string(), 151.4);
        assert!(snapshot_from_quotes(&rates).is_err());
    }
}
