//! Favorites screen
//!
//! Lists current quotes for the favorited assets. Removing from here always
//! asks for confirmation.

use std::sync::Arc;

use coinpocket::data::{AssetQuote, FavoritesStore, RemoveOutcome};
use log::warn;

use crate::providers::QuoteSource;

pub struct FavoritesScreen {
    source: Arc<dyn QuoteSource>,
    favorites: Arc<FavoritesStore>,
    quotes: Vec<AssetQuote>,
    loaded: bool,
}

impl FavoritesScreen {
    pub fn new(source: Arc<dyn QuoteSource>, favorites: Arc<FavoritesStore>) -> Self {
        Self {
            source,
            favorites,
            quotes: Vec::new(),
            loaded: false,
        }
    }

    /// Fetch quotes for the favorited ids
    ///
    /// A failed fetch leaves the list empty; the failure is only logged.
    pub fn activate(&mut self) {
        let ids = self.favorites.ids();
        self.quotes = if ids.is_empty() {
            Vec::new()
        } else {
            match self.source.by_ids(&ids) {
                Ok(quotes) => quotes,
                Err(e) => {
                    warn!("Failed to fetch favorite quotes: {e}");
                    Vec::new()
                }
            }
        };
        self.loaded = true;
    }

    pub fn is_loading(&self) -> bool {
        !self.loaded
    }

    /// True when there are no favorites at all (not merely no quotes)
    pub fn has_no_favorites(&self) -> bool {
        self.favorites.is_empty()
    }

    pub fn quotes(&self) -> &[AssetQuote] {
        &self.quotes
    }

    /// Remove an asset after confirmation and drop its row
    pub fn remove(&mut self, asset_id: &str) -> RemoveOutcome {
        let outcome = self.favorites.remove(asset_id);
        if outcome == RemoveOutcome::Removed {
            self.quotes.retain(|q| q.id != asset_id);
        }
        outcome
    }
}
