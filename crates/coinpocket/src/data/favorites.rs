//! Favorites management
//!
//! Owns the favorite set and keeps it synchronized with host cloud storage.
//!
//! Every mutation writes the whole set as one blob while still holding the
//! lock that guarded the mutation, so the stored blob always matches the
//! in-memory set once a mutation returns. The lock is never held while a
//! confirmation popup is open.

use std::sync::{Mutex, MutexGuard};

use log::{debug, warn};

use crate::config::storage::FAVORITES_KEY;
use crate::data::types::{AssetQuote, FavoriteSet};
use crate::host::{
    ButtonType, Feedback, HostCapabilities, ImpactStyle, NotificationType, PopupButton,
    PopupParams,
};
use crate::storage::blob;

/// Result of `FavoritesStore::toggle`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// The asset is now a favorite
    Added,
    /// The asset was a favorite and has been removed
    Removed,
    /// The add confirmation was declined or dismissed; nothing changed
    Declined,
}

/// Result of `FavoritesStore::remove`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveOutcome {
    Removed,
    /// The removal confirmation was declined or dismissed; nothing changed
    Declined,
    /// Confirmed, but the asset was not a favorite
    NotFavorite,
}

const ADD_BUTTON: &str = "add";
const REMOVE_BUTTON: &str = "remove";
const CANCEL_BUTTON: &str = "cancel";

fn add_confirmation(name: &str) -> PopupParams {
    PopupParams::new("Add to Favorites", format!("Add {name} to your watchlist?"))
        .button(PopupButton::new(ADD_BUTTON, ButtonType::Default).with_text("Add"))
        .button(PopupButton::new(CANCEL_BUTTON, ButtonType::Cancel))
}

fn remove_confirmation() -> PopupParams {
    PopupParams::new(
        "Remove from Favorites",
        "Are you sure you want to remove this coin?",
    )
    .button(PopupButton::new(REMOVE_BUTTON, ButtonType::Destructive).with_text("Remove"))
    .button(PopupButton::new(CANCEL_BUTTON, ButtonType::Cancel))
}

/// The user's favorite assets
pub struct FavoritesStore {
    host: HostCapabilities,
    favorites: Mutex<FavoriteSet>,
}

impl FavoritesStore {
    /// Load favorites from host storage
    ///
    /// Missing storage, a read failure, or a corrupt blob all yield an empty
    /// set.
    pub fn load(host: HostCapabilities) -> Self {
        let favorites: FavoriteSet = blob::load_or_default(host.storage.as_deref(), FAVORITES_KEY);
        debug!("Loaded {} favorites", favorites.len());
        Self {
            host,
            favorites: Mutex::new(favorites),
        }
    }

    fn lock(&self) -> MutexGuard<'_, FavoriteSet> {
        self.favorites.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Write the whole set; failures are logged and otherwise ignored
    fn persist(&self, favorites: &FavoriteSet) {
        match blob::store(self.host.storage.as_deref(), FAVORITES_KEY, favorites) {
            Ok(true) => {}
            Ok(false) => debug!("No cloud storage, favorites kept in memory only"),
            Err(e) => warn!("Failed to save favorites: {e}"),
        }
    }

    /// Add or remove an asset
    ///
    /// Removal applies immediately. Adding asks for confirmation first; a host
    /// without popups counts as confirmed.
    pub fn toggle(&self, quote: &AssetQuote) -> ToggleOutcome {
        self.host.feedback(Feedback::Impact(ImpactStyle::Light));

        {
            let mut favorites = self.lock();
            if favorites.remove(&quote.id) {
                self.persist(&favorites);
                drop(favorites);
                self.host
                    .feedback(Feedback::Notification(NotificationType::Warning));
                return ToggleOutcome::Removed;
            }
        }

        if !self.host.confirm(add_confirmation(&quote.name), ADD_BUTTON) {
            return ToggleOutcome::Declined;
        }

        {
            let mut favorites = self.lock();
            // An overlapping toggle may have added it while the popup was open
            if !favorites.insert(&quote.id) {
                debug!("{} was added concurrently", quote.id);
            }
            self.persist(&favorites);
        }
        self.host
            .feedback(Feedback::Notification(NotificationType::Success));
        ToggleOutcome::Added
    }

    /// Remove an asset after an explicit destructive confirmation
    pub fn remove(&self, asset_id: &str) -> RemoveOutcome {
        if !self.host.confirm(remove_confirmation(), REMOVE_BUTTON) {
            return RemoveOutcome::Declined;
        }

        {
            let mut favorites = self.lock();
            if !favorites.remove(asset_id) {
                return RemoveOutcome::NotFavorite;
            }
            self.persist(&favorites);
        }
        self.host
            .feedback(Feedback::Notification(NotificationType::Success));
        RemoveOutcome::Removed
    }

    /// Favorited ids in insertion order
    pub fn ids(&self) -> Vec<String> {
        self.lock().ids().to_vec()
    }

    /// Snapshot of the current set
    pub fn snapshot(&self) -> FavoriteSet {
        self.lock().clone()
    }

    pub fn contains(&self, asset_id: &str) -> bool {
        self.lock().contains(asset_id)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}
