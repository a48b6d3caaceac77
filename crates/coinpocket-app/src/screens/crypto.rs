//! Home screen: top assets by market cap
//!
//! Tapping a row toggles the asset in the favorites.

use std::sync::Arc;

use coinpocket::data::{AssetQuote, FavoritesStore, ToggleOutcome};
use coinpocket::host::HostCapabilities;
use log::warn;

use crate::config::ui::TOP_PAGE_SIZE;
use crate::providers::QuoteSource;

use super::ProfileView;

/// Message shown instead of the list when prices cannot be fetched
pub const LOAD_ERROR: &str = "Failed to load prices";

/// A quote together with its favorite flag
#[derive(Debug, Clone, PartialEq)]
pub struct QuoteRow<'a> {
    pub quote: &'a AssetQuote,
    pub is_favorite: bool,
}

pub struct CryptoScreen {
    host: HostCapabilities,
    source: Arc<dyn QuoteSource>,
    favorites: Arc<FavoritesStore>,
    quotes: Vec<AssetQuote>,
    error: Option<String>,
    loaded: bool,
}

impl CryptoScreen {
    pub fn new(
        host: HostCapabilities,
        source: Arc<dyn QuoteSource>,
        favorites: Arc<FavoritesStore>,
    ) -> Self {
        Self {
            host,
            source,
            favorites,
            quotes: Vec::new(),
            error: None,
            loaded: false,
        }
    }

    /// Fetch the current top list
    pub fn activate(&mut self) {
        match self.source.top_by_market_cap(TOP_PAGE_SIZE) {
            Ok(quotes) => {
                self.quotes = quotes;
                self.error = None;
            }
            Err(e) => {
                warn!("{} top list failed: {e}", self.source.name());
                self.quotes.clear();
                self.error = Some(LOAD_ERROR.to_string());
            }
        }
        self.loaded = true;
    }

    /// Re-issue the fetch
    pub fn refresh(&mut self) {
        self.activate();
    }

    pub fn is_loading(&self) -> bool {
        !self.loaded
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn quotes(&self) -> &[AssetQuote] {
        &self.quotes
    }

    /// Rows to render, in list order
    pub fn rows(&self) -> Vec<QuoteRow<'_>> {
        self.quotes
            .iter()
            .map(|quote| QuoteRow {
                quote,
                is_favorite: self.favorites.contains(&quote.id),
            })
            .collect()
    }

    /// Toggle the row at `index`, `None` if there is no such row
    pub fn toggle(&self, index: usize) -> Option<ToggleOutcome> {
        let quote = self.quotes.get(index)?;
        Some(self.favorites.toggle(quote))
    }

    /// Toggle the row for `asset_id`, `None` if it is not listed
    pub fn toggle_id(&self, asset_id: &str) -> Option<ToggleOutcome> {
        let quote = self.quotes.iter().find(|q| q.id == asset_id)?;
        Some(self.favorites.toggle(quote))
    }

    pub fn profile(&self) -> ProfileView {
        ProfileView::from_user(self.host.user().as_ref())
    }
}
