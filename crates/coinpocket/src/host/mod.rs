//! Host platform capabilities
//!
//! The host SDK exposes storage, popups, haptics, a main button, location and
//! identity. Any of them may be missing on a given client, so they are
//! injected as optional trait objects.

pub mod feedback;
pub mod popup;
pub mod traits;
pub mod types;

// Re-exports
pub use feedback::{spawn_feedback_worker, FeedbackChannel};
pub use popup::{ChannelPopup, PopupRequest};
pub use traits::{CloudStorage, HapticFeedback, InitData, LocationManager, MainButton, Popup};
pub use types::{
    ButtonType, Feedback, ImpactStyle, LocationSample, MainButtonParams, NotificationType,
    PopupButton, PopupOutcome, PopupParams, TelegramUser,
};

use std::sync::Arc;

use log::warn;

/// The set of capabilities available on the current host
///
/// Cheap to clone; every field is shared.
#[derive(Clone, Default)]
pub struct HostCapabilities {
    pub storage: Option<Arc<dyn CloudStorage>>,
    pub popup: Option<Arc<dyn Popup>>,
    pub haptics: Option<Arc<dyn HapticFeedback>>,
    pub main_button: Option<Arc<dyn MainButton>>,
    pub location: Option<Arc<dyn LocationManager>>,
    pub init_data: Option<Arc<dyn InitData>>,
}

impl HostCapabilities {
    /// A host with no capabilities at all
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_storage(mut self, storage: Arc<dyn CloudStorage>) -> Self {
        self.storage = Some(storage);
        self
    }

    pub fn with_popup(mut self, popup: Arc<dyn Popup>) -> Self {
        self.popup = Some(popup);
        self
    }

    pub fn with_haptics(mut self, haptics: Arc<dyn HapticFeedback>) -> Self {
        self.haptics = Some(haptics);
        self
    }

    pub fn with_main_button(mut self, main_button: Arc<dyn MainButton>) -> Self {
        self.main_button = Some(main_button);
        self
    }

    pub fn with_location(mut self, location: Arc<dyn LocationManager>) -> Self {
        self.location = Some(location);
        self
    }

    pub fn with_init_data(mut self, init_data: Arc<dyn InitData>) -> Self {
        self.init_data = Some(init_data);
        self
    }

    /// Emit a feedback signal if haptics are available
    pub fn feedback(&self, feedback: Feedback) {
        if let Some(haptics) = &self.haptics {
            haptics.emit(feedback);
        }
    }

    /// Set main button parameters if the host has one
    pub fn set_main_button(&self, params: MainButtonParams) {
        if let Some(button) = &self.main_button {
            button.set_params(params);
        }
    }

    /// The launching user, if the host provides identity
    pub fn user(&self) -> Option<TelegramUser> {
        self.init_data.as_ref().and_then(|d| d.user())
    }

    /// Ask the user to confirm by pressing the button `accept_id`
    ///
    /// Returns `true` when no popup capability exists. A popup error counts
    /// as dismissal.
    pub fn confirm(&self, params: PopupParams, accept_id: &str) -> bool {
        let Some(popup) = &self.popup else {
            return true;
        };
        match popup.show(params) {
            Ok(outcome) => outcome.is_pressed(accept_id),
            Err(e) => {
                warn!("Confirmation popup failed: {e}");
                false
            }
        }
    }

    /// Show an acknowledgment popup and ignore how it is closed
    pub fn acknowledge(&self, params: PopupParams) {
        if let Some(popup) = &self.popup {
            if let Err(e) = popup.show(params) {
                warn!("Popup failed: {e}");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{CoreError, Result};
    use std::sync::Mutex;

    struct FixedPopup(PopupOutcome);

    impl Popup for FixedPopup {
        fn show(&self, _params: PopupParams) -> Result<PopupOutcome> {
            Ok(self.0.clone())
        }
    }

    struct BrokenPopup;

    impl Popup for BrokenPopup {
        fn show(&self, _params: PopupParams) -> Result<PopupOutcome> {
            Err(CoreError::Config("popup closed".into()))
        }
    }

    #[derive(Default)]
    struct RecordingHaptics(Mutex<Vec<Feedback>>);

    impl HapticFeedback for RecordingHaptics {
        fn emit(&self, feedback: Feedback) {
            self.0.lock().unwrap().push(feedback);
        }
    }

    fn params() -> PopupParams {
        PopupParams::new("Title", "Message")
            .button(PopupButton::new("yes", ButtonType::Default).with_text("Yes"))
            .button(PopupButton::new("cancel", ButtonType::Cancel))
    }

    #[test]
    fn test_confirm_without_popup_proceeds() {
        assert!(HostCapabilities::new().confirm(params(), "yes"));
    }

    #[test]
    fn test_confirm_pressed() {
        let host = HostCapabilities::new()
            .with_popup(Arc::new(FixedPopup(PopupOutcome::Pressed("yes".into()))));
        assert!(host.confirm(params(), "yes"));
    }

    #[test]
    fn test_confirm_cancel_and_dismiss() {
        let host = HostCapabilities::new()
            .with_popup(Arc::new(FixedPopup(PopupOutcome::Pressed("cancel".into()))));
        assert!(!host.confirm(params(), "yes"));

        let host = HostCapabilities::new().with_popup(Arc::new(FixedPopup(PopupOutcome::Dismissed)));
        assert!(!host.confirm(params(), "yes"));
    }

    #[test]
    fn test_confirm_error_counts_as_dismissal() {
        let host = HostCapabilities::new().with_popup(Arc::new(BrokenPopup));
        assert!(!host.confirm(params(), "yes"));
    }

    #[test]
    fn test_feedback_routed_when_available() {
        let haptics = Arc::new(RecordingHaptics::default());
        let host = HostCapabilities::new().with_haptics(haptics.clone());
        host.feedback(Feedback::Impact(ImpactStyle::Light));
        assert_eq!(
            *haptics.0.lock().unwrap(),
            vec![Feedback::Impact(ImpactStyle::Light)]
        );

        // No haptics: silently ignored
        HostCapabilities::new().feedback(Feedback::SelectionChanged);
    }
}
