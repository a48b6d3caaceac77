//! User data
//!
//! Favorites, settings, and the quote record they refer to.

pub mod favorites;
pub mod settings;
pub mod types;

// Re-export common types
pub use favorites::{FavoritesStore, RemoveOutcome, ToggleOutcome};
pub use settings::{CommitOutcome, EditState, SettingKey, Settings, SettingsStore};
pub use types::{AssetQuote, FavoriteSet, Trend};
