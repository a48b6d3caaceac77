//! Remote data providers
//!
//! Price quotes (CoinGecko) and current weather (OpenWeather).

pub mod coingecko;
pub mod openweather;
pub mod traits;
pub mod types;

// Re-exports
pub use coingecko::CoinGeckoProvider;
pub use openweather::OpenWeatherProvider;
pub use traits::{QuoteSource, WeatherSource};
pub use types::{icon_url, WeatherSnapshot};
