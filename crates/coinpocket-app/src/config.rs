//! Configuration constants for coinpocket app services

/// Network-related configuration
pub mod network {
    /// User agent for HTTP requests
    pub const USER_AGENT: &str = concat!("Coinpocket/", env!("CARGO_PKG_VERSION"));

    /// Connection timeout in seconds
    pub const CONNECT_TIMEOUT_SECS: u64 = 10;

    /// Read timeout in seconds
    pub const READ_TIMEOUT_SECS: u64 = 30;
}

/// Provider-related configuration
pub mod providers {
    /// CoinGecko public API
    pub const COINGECKO_DEFAULT_SERVER: &str = "https://api.coingecko.com";

    /// Quote currency for all prices
    pub const VS_CURRENCY: &str = "usd";

    /// OpenWeather public API
    pub const OPENWEATHER_DEFAULT_SERVER: &str = "https://api.openweathermap.org";

    /// Weather icon URL template prefix
    pub const OPENWEATHER_ICON_BASE: &str = "https://openweathermap.org/img/wn";

    /// Environment variable holding the OpenWeather API key
    pub const OPENWEATHER_API_KEY_ENV: &str = "OPENWEATHER_API_KEY";
}

/// UI-related configuration
pub mod ui {
    /// Number of assets on the top-by-market-cap list
    pub const TOP_PAGE_SIZE: usize = 10;

    /// Main button text while settings have unsaved edits
    pub const SAVE_BUTTON_TEXT: &str = "Save Settings";
}
