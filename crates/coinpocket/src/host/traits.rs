//! Host capability traits
//!
//! Each SDK capability the app relies on is a separate trait so that a host
//! can provide any subset of them.

use crate::error::Result;

use super::types::{
    Feedback, LocationSample, MainButtonParams, PopupOutcome, PopupParams, TelegramUser,
};

/// Key/value storage synchronized by the host
///
/// Values are opaque strings. Capacity and availability are not guaranteed.
pub trait CloudStorage: Send + Sync {
    /// Read the value stored under `key`, `None` if nothing is stored
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    fn set_item(&self, key: &str, value: &str) -> Result<()>;
}

/// Native blocking popup
pub trait Popup: Send + Sync {
    /// Show a popup and wait until it is resolved
    fn show(&self, params: PopupParams) -> Result<PopupOutcome>;
}

/// Haptic feedback engine
///
/// Fire-and-forget: implementations must not block for long and must not
/// report failures.
pub trait HapticFeedback: Send + Sync {
    fn emit(&self, feedback: Feedback);
}

/// The host's bottom action button
pub trait MainButton: Send + Sync {
    fn set_params(&self, params: MainButtonParams);
}

/// Device location access
pub trait LocationManager: Send + Sync {
    /// Prepare the capability for use
    fn mount(&self) -> Result<()> {
        Ok(())
    }

    /// Release the capability
    fn unmount(&self) {}

    /// Ask the device for its location, `None` if the user denied it
    fn request_location(&self) -> Result<Option<LocationSample>>;
}

/// Launch parameters signed by the host
pub trait InitData: Send + Sync {
    fn user(&self) -> Option<TelegramUser>;
}
