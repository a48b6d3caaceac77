//! Remote data source traits
//!
//! Defines the interfaces for price quotes and current weather.

use coinpocket::data::AssetQuote;

use crate::error::Result;

use super::types::WeatherSnapshot;

/// A source of current asset prices
pub trait QuoteSource: Send + Sync {
    /// Display name for the source (e.g., "CoinGecko")
    fn name(&self) -> &'static str;

    /// The `limit` largest assets by market capitalization
    fn top_by_market_cap(&self, limit: usize) -> Result<Vec<AssetQuote>>;

    /// Quotes for the given asset ids
    ///
    /// Unknown ids are simply missing from the result. An empty id list
    /// returns an empty result without contacting the source.
    fn by_ids(&self, ids: &[String]) -> Result<Vec<AssetQuote>>;
}

/// A source of current weather
pub trait WeatherSource: Send + Sync {
    /// Current conditions at a coordinate pair
    fn current(&self, latitude: f64, longitude: f64) -> Result<WeatherSnapshot>;
}
