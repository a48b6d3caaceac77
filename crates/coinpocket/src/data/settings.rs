//! Application settings management
//!
//! User preferences, buffered until an explicit save.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::config::storage::SETTINGS_KEY;
use crate::host::{
    ButtonType, Feedback, HostCapabilities, NotificationType, PopupButton, PopupParams,
};
use crate::storage::blob;

/// User preferences
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Vibration feedback on actions
    #[serde(default = "default_true")]
    pub haptic_enabled: bool,

    /// Price alerts and updates
    #[serde(default = "default_true")]
    pub notifications_enabled: bool,
}

fn default_true() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            haptic_enabled: true,
            notifications_enabled: true,
        }
    }
}

impl Settings {
    pub fn get(&self, key: SettingKey) -> bool {
        match key {
            SettingKey::HapticEnabled => self.haptic_enabled,
            SettingKey::NotificationsEnabled => self.notifications_enabled,
        }
    }

    pub fn set(&mut self, key: SettingKey, value: bool) {
        match key {
            SettingKey::HapticEnabled => self.haptic_enabled = value,
            SettingKey::NotificationsEnabled => self.notifications_enabled = value,
        }
    }
}

/// A single editable preference
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingKey {
    HapticEnabled,
    NotificationsEnabled,
}

impl SettingKey {
    pub const ALL: [SettingKey; 2] = [SettingKey::HapticEnabled, SettingKey::NotificationsEnabled];

    /// Field name in the stored record
    pub fn as_str(&self) -> &'static str {
        match self {
            SettingKey::HapticEnabled => "hapticEnabled",
            SettingKey::NotificationsEnabled => "notificationsEnabled",
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            SettingKey::HapticEnabled => "Haptic Feedback",
            SettingKey::NotificationsEnabled => "Notifications",
        }
    }
}

impl std::str::FromStr for SettingKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hapticEnabled" | "haptic" | "haptics" => Ok(SettingKey::HapticEnabled),
            "notificationsEnabled" | "notifications" => Ok(SettingKey::NotificationsEnabled),
            other => Err(format!(
                "unknown setting {other:?} (expected hapticEnabled or notificationsEnabled)"
            )),
        }
    }
}

/// Whether the edit buffer differs from what was last saved in this session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditState {
    #[default]
    Clean,
    Dirty,
}

/// Result of `SettingsStore::commit`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitOutcome {
    /// The buffer was written (or kept in memory on a host without storage)
    Saved,
    /// Nothing to save
    Unchanged,
    /// Writing failed; the edits are still pending
    Failed,
}

fn saved_acknowledgment() -> PopupParams {
    PopupParams::new("Settings Saved", "Your preferences have been saved.")
        .button(PopupButton::new("ok", ButtonType::Ok))
}

/// Settings with an edit buffer
///
/// Edits stay in memory until `commit`. Dropping the store with pending
/// edits discards them.
pub struct SettingsStore {
    host: HostCapabilities,
    persisted: Settings,
    buffer: Settings,
    state: EditState,
}

impl SettingsStore {
    /// Load settings from host storage, falling back to defaults
    pub fn load(host: HostCapabilities) -> Self {
        let persisted: Settings = blob::load_or_default(host.storage.as_deref(), SETTINGS_KEY);
        debug!("Loaded settings {persisted:?}");
        Self {
            host,
            persisted,
            buffer: persisted,
            state: EditState::Clean,
        }
    }

    /// Change one preference in the edit buffer
    ///
    /// Emits a selection tick when the buffer currently has haptics enabled.
    pub fn edit(&mut self, key: SettingKey, value: bool) {
        if self.buffer.haptic_enabled {
            self.host.feedback(Feedback::SelectionChanged);
        }
        self.buffer.set(key, value);
        self.state = EditState::Dirty;
    }

    /// Save the edit buffer as one record
    pub fn commit(&mut self) -> CommitOutcome {
        if self.state == EditState::Clean {
            return CommitOutcome::Unchanged;
        }

        match blob::store(self.host.storage.as_deref(), SETTINGS_KEY, &self.buffer) {
            Ok(true) => info!("Settings saved"),
            Ok(false) => debug!("No cloud storage, settings kept for this session only"),
            Err(e) => {
                warn!("Failed to save settings: {e}");
                return CommitOutcome::Failed;
            }
        }

        self.host.acknowledge(saved_acknowledgment());
        if self.buffer.haptic_enabled {
            self.host
                .feedback(Feedback::Notification(NotificationType::Success));
        }
        self.persisted = self.buffer;
        self.state = EditState::Clean;
        CommitOutcome::Saved
    }

    /// Settings including pending edits
    pub fn current(&self) -> Settings {
        self.buffer
    }

    /// Settings as last loaded or saved
    pub fn persisted(&self) -> Settings {
        self.persisted
    }

    pub fn state(&self) -> EditState {
        self.state
    }

    pub fn is_dirty(&self) -> bool {
        self.state == EditState::Dirty
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Result;
    use crate::host::{HapticFeedback, Popup, PopupOutcome};
    use crate::storage::MemoryStorage;
    use std::sync::{Arc, Mutex};

    #[derive(Default)]
    struct RecordingPopup(Mutex<Vec<PopupParams>>);

    impl Popup for RecordingPopup {
        fn show(&self, params: PopupParams) -> Result<PopupOutcome> {
            self.0.lock().unwrap().push(params);
            Ok(PopupOutcome::Pressed("ok".into()))
        }
    }

    #[derive(Default)]
    struct RecordingHaptics(Mutex<Vec<Feedback>>);

    impl HapticFeedback for RecordingHaptics {
        fn emit(&self, feedback: Feedback) {
            self.0.lock().unwrap().push(feedback);
        }
    }

    fn host(storage: &Arc<MemoryStorage>) -> HostCapabilities {
        HostCapabilities::new().with_storage(storage.clone())
    }

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert!(settings.haptic_enabled);
        assert!(settings.notifications_enabled);
    }

    #[test]
    fn test_serialized_field_names() {
        let settings = Settings {
            haptic_enabled: false,
            notifications_enabled: true,
        };
        assert_eq!(
            serde_json::to_string(&settings).unwrap(),
            r#"{"hapticEnabled":false,"notificationsEnabled":true}"#
        );
    }

    #[test]
    fn test_load_defaults_when_absent() {
        let storage = Arc::new(MemoryStorage::new());
        let store = SettingsStore::load(host(&storage));
        assert_eq!(store.current(), Settings::default());
        assert_eq!(store.state(), EditState::Clean);
    }

    #[test]
    fn test_load_corrupt_fails_open() {
        let storage = Arc::new(MemoryStorage::new());
        storage.insert_raw(SETTINGS_KEY, "{\"hapticEnabled\": \"yes\"");
        let store = SettingsStore::load(host(&storage));
        assert_eq!(store.current(), Settings::default());
    }

    #[test]
    fn test_load_partial_record() {
        let storage = Arc::new(MemoryStorage::new());
        storage.insert_raw(SETTINGS_KEY, r#"{"notificationsEnabled":false}"#);
        let store = SettingsStore::load(host(&storage));
        assert!(store.current().haptic_enabled);
        assert!(!store.current().notifications_enabled);
    }

    #[test]
    fn test_edit_marks_dirty() {
        let storage = Arc::new(MemoryStorage::new());
        let mut store = SettingsStore::load(host(&storage));

        store.edit(SettingKey::NotificationsEnabled, false);
        assert!(store.is_dirty());
        assert!(!store.current().notifications_enabled);
        assert!(store.persisted().notifications_enabled);
        assert_eq!(storage.write_count(), 0);
    }

    #[test]
    fn test_discarded_edits_are_not_visible_after_reload() {
        let storage = Arc::new(MemoryStorage::new());
        {
            let mut store = SettingsStore::load(host(&storage));
            store.edit(SettingKey::NotificationsEnabled, false);
        }
        let store = SettingsStore::load(host(&storage));
        assert_eq!(
            store.current(),
            Settings {
                haptic_enabled: true,
                notifications_enabled: true
            }
        );
    }

    #[test]
    fn test_commit_writes_both_fields_together() {
        let storage = Arc::new(MemoryStorage::new());
        let mut store = SettingsStore::load(host(&storage));

        store.edit(SettingKey::HapticEnabled, false);
        store.edit(SettingKey::NotificationsEnabled, false);
        assert_eq!(store.commit(), CommitOutcome::Saved);

        assert_eq!(storage.write_count(), 1);
        assert_eq!(
            storage.raw(SETTINGS_KEY).as_deref(),
            Some(r#"{"hapticEnabled":false,"notificationsEnabled":false}"#)
        );
        assert_eq!(store.state(), EditState::Clean);

        let reloaded = SettingsStore::load(host(&storage));
        assert!(!reloaded.current().haptic_enabled);
        assert!(!reloaded.current().notifications_enabled);
    }

    #[test]
    fn test_commit_when_clean_is_noop() {
        let storage = Arc::new(MemoryStorage::new());
        let mut store = SettingsStore::load(host(&storage));
        assert_eq!(store.commit(), CommitOutcome::Unchanged);
        assert_eq!(storage.write_count(), 0);
    }

    #[test]
    fn test_commit_failure_stays_dirty() {
        let storage = Arc::new(MemoryStorage::new());
        let mut store = SettingsStore::load(host(&storage));
        store.edit(SettingKey::HapticEnabled, false);

        storage.set_failing(true);
        assert_eq!(store.commit(), CommitOutcome::Failed);
        assert!(store.is_dirty());
        assert!(store.persisted().haptic_enabled);

        storage.set_failing(false);
        assert_eq!(store.commit(), CommitOutcome::Saved);
        assert!(!store.is_dirty());
    }

    #[test]
    fn test_commit_without_storage_still_cleans() {
        let mut store = SettingsStore::load(HostCapabilities::new());
        store.edit(SettingKey::HapticEnabled, false);
        assert_eq!(store.commit(), CommitOutcome::Saved);
        assert!(!store.is_dirty());
    }

    #[test]
    fn test_commit_shows_acknowledgment() {
        let storage = Arc::new(MemoryStorage::new());
        let popup = Arc::new(RecordingPopup::default());
        let mut store = SettingsStore::load(host(&storage).with_popup(popup.clone()));

        store.edit(SettingKey::NotificationsEnabled, false);
        store.commit();

        let shown = popup.0.lock().unwrap();
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].title, "Settings Saved");
        assert_eq!(shown[0].buttons[0].button_type, ButtonType::Ok);
    }

    #[test]
    fn test_haptics_follow_live_buffer() {
        let storage = Arc::new(MemoryStorage::new());
        let haptics = Arc::new(RecordingHaptics::default());
        let mut store = SettingsStore::load(host(&storage).with_haptics(haptics.clone()));

        // Buffer has haptics on: tick
        store.edit(SettingKey::HapticEnabled, false);
        // Buffer now has haptics off: no tick, even though persisted value is on
        store.edit(SettingKey::NotificationsEnabled, false);
        // No success feedback on commit either
        store.commit();

        assert_eq!(*haptics.0.lock().unwrap(), vec![Feedback::SelectionChanged]);
    }

    #[test]
    fn test_commit_success_feedback() {
        let storage = Arc::new(MemoryStorage::new());
        let haptics = Arc::new(RecordingHaptics::default());
        let mut store = SettingsStore::load(host(&storage).with_haptics(haptics.clone()));

        store.edit(SettingKey::NotificationsEnabled, false);
        store.commit();

        assert_eq!(
            *haptics.0.lock().unwrap(),
            vec![
                Feedback::SelectionChanged,
                Feedback::Notification(NotificationType::Success)
            ]
        );
    }

    #[test]
    fn test_setting_key_parse() {
        assert_eq!("hapticEnabled".parse::<SettingKey>(), Ok(SettingKey::HapticEnabled));
        assert_eq!("notifications".parse::<SettingKey>(), Ok(SettingKey::NotificationsEnabled));
        assert!("volume".parse::<SettingKey>().is_err());
    }
}
