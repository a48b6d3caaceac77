//! Configuration constants for the coinpocket core

/// Application metadata
pub mod app {
    /// Application name (used for config directory, etc.)
    pub const NAME: &str = "coinpocket";

    /// Subdirectory of the config dir that emulates host cloud storage
    pub const CLOUD_DIR: &str = "cloud";
}

/// Host cloud storage keys and limits
pub mod storage {
    /// Key holding the JSON array of favorited asset ids
    pub const FAVORITES_KEY: &str = "favorite_coins";

    /// Key holding the JSON settings record
    pub const SETTINGS_KEY: &str = "app_settings";

    /// Maximum key length accepted by the host
    pub const MAX_KEY_LEN: usize = 128;
}

/// Confirmation prompt configuration
pub mod popup {
    /// How long a confirmation prompt may stay unanswered before it counts
    /// as dismissed
    pub const CONFIRM_TIMEOUT_SECS: u64 = 60;
}

/// Feedback channel configuration
pub mod feedback {
    /// Pending feedback signals kept before new ones are dropped
    pub const CHANNEL_CAPACITY: usize = 32;
}
