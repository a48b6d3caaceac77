//! Settings screen
//!
//! Edits are buffered in a `SettingsStore`; the host main button acts as the
//! save action and is only shown while there are unsaved edits.

use coinpocket::data::{CommitOutcome, SettingKey, Settings, SettingsStore};
use coinpocket::error::Result;
use coinpocket::host::{
    ButtonType, Feedback, HostCapabilities, ImpactStyle, MainButtonParams, NotificationType,
    PopupButton, PopupOutcome, PopupParams,
};
use log::warn;

use crate::config::ui::SAVE_BUTTON_TEXT;

use super::ProfileView;

pub struct SettingsScreen {
    host: HostCapabilities,
    store: SettingsStore,
    save_visible: bool,
}

impl SettingsScreen {
    /// Load settings and hide the save action
    pub fn new(host: HostCapabilities) -> Self {
        let store = SettingsStore::load(host.clone());
        let mut screen = Self {
            host,
            store,
            save_visible: false,
        };
        screen.sync_main_button();
        screen
    }

    fn sync_main_button(&mut self) {
        self.save_visible = self.store.is_dirty();
        let params = if self.save_visible {
            MainButtonParams::shown(SAVE_BUTTON_TEXT)
        } else {
            MainButtonParams::hidden()
        };
        self.host.set_main_button(params);
    }

    pub fn settings(&self) -> Settings {
        self.store.current()
    }

    pub fn is_dirty(&self) -> bool {
        self.store.is_dirty()
    }

    /// Whether the save action is currently offered
    pub fn save_visible(&self) -> bool {
        self.save_visible
    }

    pub fn edit(&mut self, key: SettingKey, value: bool) {
        self.store.edit(key, value);
        self.sync_main_button();
    }

    /// Main button pressed
    ///
    /// Ignored unless the save action is visible.
    pub fn save(&mut self) -> CommitOutcome {
        if !self.save_visible {
            return CommitOutcome::Unchanged;
        }
        let outcome = self.store.commit();
        self.sync_main_button();
        outcome
    }

    pub fn account(&self) -> ProfileView {
        ProfileView::from_user(self.host.user().as_ref())
    }

    /// Demo: fire an impact
    pub fn test_impact(&self, style: ImpactStyle) {
        self.host.feedback(Feedback::Impact(style));
    }

    /// Demo: fire an outcome notification
    pub fn test_notification(&self, kind: NotificationType) {
        self.host.feedback(Feedback::Notification(kind));
    }

    /// Demo: show a popup with one button of each kind
    ///
    /// Returns `Dismissed` on hosts without popups.
    pub fn test_popup(&self) -> Result<PopupOutcome> {
        let Some(popup) = &self.host.popup else {
            return Ok(PopupOutcome::Dismissed);
        };
        popup.show(
            PopupParams::new("Test Popup", "This demonstrates the native Telegram popup.")
                .button(PopupButton::new("action", ButtonType::Default).with_text("Action"))
                .button(PopupButton::new("destructive", ButtonType::Destructive).with_text("Delete"))
                .button(PopupButton::new("cancel", ButtonType::Cancel)),
        )
    }
}

impl Drop for SettingsScreen {
    fn drop(&mut self) {
        self.host.set_main_button(MainButtonParams::hidden());
        if self.store.is_dirty() {
            // Leaving the screen discards edits without asking
            warn!(
                "Discarding unsaved settings edits: {:?} (saved: {:?})",
                self.store.current(),
                self.store.persisted()
            );
        }
    }
}
