//! Common data types
//!
//! The favorite set and the quote record shared by stores and screens.

use serde::{Deserialize, Serialize};

// =============================================================================
// AssetQuote - current market data for one asset
// =============================================================================

/// Current price and metadata for one asset
///
/// Fetched fresh on every screen activation; never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetQuote {
    /// Stable asset identifier (e.g. "bitcoin")
    pub id: String,
    /// Ticker symbol as reported (e.g. "btc")
    pub symbol: String,
    /// Display name (e.g. "Bitcoin")
    pub name: String,
    /// Logo URL
    #[serde(default)]
    pub image: String,
    /// Price in USD, never negative
    pub current_price: f64,
    /// Signed 24 hour change in percent
    pub price_change_percentage_24h: f64,
}

impl AssetQuote {
    pub fn new(id: impl Into<String>, symbol: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            symbol: symbol.into(),
            name: name.into(),
            image: String::new(),
            current_price: 0.0,
            price_change_percentage_24h: 0.0,
        }
    }

    /// Set price and 24h change (negative prices are clamped to zero)
    pub fn with_price(mut self, price: f64, change_24h: f64) -> Self {
        self.current_price = price.max(0.0);
        self.price_change_percentage_24h = change_24h;
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    /// Upper-case ticker for display
    pub fn ticker(&self) -> String {
        self.symbol.to_uppercase()
    }

    /// Direction of the 24h change
    pub fn trend(&self) -> Trend {
        if self.price_change_percentage_24h >= 0.0 {
            Trend::Up
        } else {
            Trend::Down
        }
    }

    /// e.g. "▲2.35%" or "▼0.10%"
    pub fn change_label(&self) -> String {
        format!(
            "{}{:.2}%",
            self.trend().icon(),
            self.price_change_percentage_24h.abs()
        )
    }
}

/// Direction of a price change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
}

impl Trend {
    /// Marker rendered next to the change
    pub fn icon(&self) -> &'static str {
        match self {
            Trend::Up => "▲",
            Trend::Down => "▼",
        }
    }
}

// =============================================================================
// FavoriteSet - ordered, duplicate-free list of asset ids
// =============================================================================

/// Ordered set of favorited asset identifiers
///
/// Serializes as a plain JSON array of strings. Duplicates in the input are
/// collapsed on deserialization, keeping the first occurrence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct FavoriteSet {
    ids: Vec<String>,
}

impl FavoriteSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check membership
    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|i| i == id)
    }

    /// Append `id` unless it is already present; returns whether it was added
    pub fn insert(&mut self, id: &str) -> bool {
        if self.contains(id) {
            return false;
        }
        self.ids.push(id.to_string());
        true
    }

    /// Remove `id`; returns whether it was present
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.ids.len();
        self.ids.retain(|i| i != id);
        self.ids.len() != before
    }

    /// Identifiers in insertion order
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl From<Vec<String>> for FavoriteSet {
    fn from(ids: Vec<String>) -> Self {
        let mut set = FavoriteSet::new();
        for id in ids {
            set.insert(&id);
        }
        set
    }
}

impl From<FavoriteSet> for Vec<String> {
    fn from(set: FavoriteSet) -> Self {
        set.ids
    }
}

impl<'a> FromIterator<&'a str> for FavoriteSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut set = FavoriteSet::new();
        for id in iter {
            set.insert(id);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_is_idempotent() {
        let mut set = FavoriteSet::new();
        assert!(set.insert("bitcoin"));
        assert!(!set.insert("bitcoin"));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_insertion_order_kept() {
        let set: FavoriteSet = ["solana", "bitcoin", "ethereum"].into_iter().collect();
        assert_eq!(set.ids(), ["solana", "bitcoin", "ethereum"]);
    }

    #[test]
    fn test_remove() {
        let mut set: FavoriteSet = ["bitcoin", "ethereum"].into_iter().collect();
        assert!(set.remove("bitcoin"));
        assert!(!set.remove("bitcoin"));
        assert_eq!(set.ids(), ["ethereum"]);
    }

    #[test]
    fn test_serializes_as_plain_array() {
        let set: FavoriteSet = ["bitcoin", "ethereum"].into_iter().collect();
        assert_eq!(serde_json::to_string(&set).unwrap(), r#"["bitcoin","ethereum"]"#);
        assert_eq!(serde_json::to_string(&FavoriteSet::new()).unwrap(), "[]");
    }

    #[test]
    fn test_deserialize_collapses_duplicates() {
        let set: FavoriteSet = serde_json::from_str(r#"["bitcoin","tether","bitcoin"]"#).unwrap();
        assert_eq!(set.ids(), ["bitcoin", "tether"]);
    }

    #[test]
    fn test_quote_trend_and_label() {
        let up = AssetQuote::new("bitcoin", "btc", "Bitcoin").with_price(64000.0, 2.346);
        assert_eq!(up.trend(), Trend::Up);
        assert_eq!(up.change_label(), "▲2.35%");
        assert_eq!(up.ticker(), "BTC");

        let down = AssetQuote::new("tether", "usdt", "Tether").with_price(1.0, -0.1);
        assert_eq!(down.trend(), Trend::Down);
        assert_eq!(down.change_label(), "▼0.10%");
    }

    #[test]
    fn test_quote_price_never_negative() {
        let q = AssetQuote::new("x", "x", "X").with_price(-5.0, 0.0);
        assert_eq!(q.current_price, 0.0);
    }
}
