//! CoinGecko API provider
//!
//! Implementation of `QuoteSource` for the CoinGecko markets endpoint
//! (<https://www.coingecko.com/en/api>).

use coinpocket::data::AssetQuote;
use log::debug;
use serde::Deserialize;

use crate::config::providers::{COINGECKO_DEFAULT_SERVER, VS_CURRENCY};
use crate::error::Result;
use crate::network::HttpClient;

use super::traits::QuoteSource;

// =============================================================================
// Internal API response types (serde)
// =============================================================================

#[derive(Debug, Deserialize)]
struct CgMarket {
    id: String,
    #[serde(default)]
    symbol: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    image: Option<String>,
    #[serde(default)]
    current_price: Option<f64>,
    #[serde(default)]
    price_change_percentage_24h: Option<f64>,
}

impl From<CgMarket> for AssetQuote {
    fn from(m: CgMarket) -> Self {
        // Freshly listed or delisted coins report null prices
        AssetQuote::new(m.id, m.symbol, m.name)
            .with_price(
                m.current_price.unwrap_or(0.0),
                m.price_change_percentage_24h.unwrap_or(0.0),
            )
            .with_image(m.image.unwrap_or_default())
    }
}

// =============================================================================
// CoinGeckoProvider
// =============================================================================

/// CoinGecko markets provider
pub struct CoinGeckoProvider {
    client: HttpClient,
    base_url: String,
}

impl CoinGeckoProvider {
    /// Create a provider using the public API
    pub fn new() -> Result<Self> {
        Self::with_base_url(COINGECKO_DEFAULT_SERVER)
    }

    /// Create a provider with a custom base URL (for testing or proxies)
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        Ok(Self {
            client: HttpClient::new()?,
            base_url: base_url.into(),
        })
    }

    fn markets(&self, params: &[(&str, &str)]) -> Result<Vec<AssetQuote>> {
        let url = format!("{}/api/v3/coins/markets", self.base_url);
        let markets: Vec<CgMarket> = self.client.get_json(&url, params)?;
        debug!("CoinGecko returned {} markets", markets.len());
        Ok(markets.into_iter().map(AssetQuote::from).collect())
    }
}

impl QuoteSource for CoinGeckoProvider {
    fn name(&self) -> &'static str {
        "CoinGecko"
    }

    fn top_by_market_cap(&self, limit: usize) -> Result<Vec<AssetQuote>> {
        let per_page = limit.to_string();
        self.markets(&[
            ("vs_currency", VS_CURRENCY),
            ("order", "market_cap_desc"),
            ("per_page", &per_page),
            ("page", "1"),
        ])
    }

    fn by_ids(&self, ids: &[String]) -> Result<Vec<AssetQuote>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let ids = ids.join(",");
        self.markets(&[("vs_currency", VS_CURRENCY), ("ids", &ids)])
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const MARKETS_FIXTURE: &str = r#"[
        {
            "id": "bitcoin",
            "symbol": "btc",
            "name": "Bitcoin",
            "image": "https://assets.coingecko.com/coins/images/1/large/bitcoin.png",
            "current_price": 64123.5,
            "market_cap": 1262000000000,
            "price_change_percentage_24h": 1.8734
        },
        {
            "id": "tether",
            "symbol": "usdt",
            "name": "Tether",
            "image": "https://assets.coingecko.com/coins/images/325/large/Tether.png",
            "current_price": 0.9998,
            "price_change_percentage_24h": -0.0123
        }
    ]"#;

    fn parse(json: &str) -> Vec<AssetQuote> {
        let markets: Vec<CgMarket> = serde_json::from_str(json).unwrap();
        markets.into_iter().map(AssetQuote::from).collect()
    }

    #[test]
    fn test_parse_markets() {
        let quotes = parse(MARKETS_FIXTURE);
        assert_eq!(quotes.len(), 2);

        assert_eq!(quotes[0].id, "bitcoin");
        assert_eq!(quotes[0].ticker(), "BTC");
        assert_eq!(quotes[0].name, "Bitcoin");
        assert_eq!(quotes[0].current_price, 64123.5);
        assert!(quotes[0].image.ends_with("bitcoin.png"));

        assert_eq!(quotes[1].id, "tether");
        assert!(quotes[1].price_change_percentage_24h < 0.0);
    }

    #[test]
    fn test_null_prices_become_zero() {
        let quotes = parse(
            r#"[{"id":"newcoin","symbol":"new","name":"New Coin","image":null,
                "current_price":null,"price_change_percentage_24h":null}]"#,
        );
        assert_eq!(quotes[0].current_price, 0.0);
        assert_eq!(quotes[0].price_change_percentage_24h, 0.0);
        assert_eq!(quotes[0].image, "");
    }

    #[test]
    fn test_missing_optional_fields() {
        let quotes = parse(r#"[{"id":"bare"}]"#);
        assert_eq!(quotes[0].id, "bare");
        assert_eq!(quotes[0].symbol, "");
    }

    #[test]
    fn test_by_ids_empty_skips_request() {
        // Unroutable base URL: any request would fail
        let provider = CoinGeckoProvider::with_base_url("http://invalid.invalid.invalid").unwrap();
        assert!(provider.by_ids(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_unreachable_server_errors() {
        let provider = CoinGeckoProvider::with_base_url("http://invalid.invalid.invalid").unwrap();
        assert!(provider.top_by_market_cap(10).is_err());
        assert!(provider.by_ids(&["bitcoin".to_string()]).is_err());
    }

    #[test]
    fn test_provider_name() {
        let provider = CoinGeckoProvider::new().unwrap();
        assert_eq!(provider.name(), "CoinGecko");
    }
}
