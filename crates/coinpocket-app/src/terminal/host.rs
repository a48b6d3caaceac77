//! Host capabilities backed by the local process

use coinpocket::error::Result;
use coinpocket::host::{
    Feedback, HapticFeedback, InitData, LocationManager, LocationSample, TelegramUser,
};
use log::debug;

/// Logs feedback signals instead of vibrating
pub struct LogHaptics;

impl HapticFeedback for LogHaptics {
    fn emit(&self, feedback: Feedback) {
        debug!("haptic: {feedback:?}");
    }
}

/// Location fixed at startup, e.g. from command-line arguments
pub struct FixedLocation {
    sample: Option<LocationSample>,
}

impl FixedLocation {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            sample: Some(LocationSample::new(latitude, longitude)),
        }
    }

    /// A location manager whose every request is denied
    pub fn denied() -> Self {
        Self { sample: None }
    }
}

impl LocationManager for FixedLocation {
    fn request_location(&self) -> Result<Option<LocationSample>> {
        Ok(self.sample)
    }
}

/// Launching user taken from `COINPOCKET_USER_*` variables
///
/// `COINPOCKET_USER_ID` and `COINPOCKET_USER_FIRST_NAME` are required; the
/// last name, username and premium flag are optional.
pub struct EnvInitData {
    user: Option<TelegramUser>,
}

impl EnvInitData {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |suffix: &str| {
            lookup(&format!("COINPOCKET_USER_{suffix}")).filter(|v| !v.trim().is_empty())
        };

        let user = match (var("ID").and_then(|id| id.trim().parse().ok()), var("FIRST_NAME")) {
            (Some(id), Some(first_name)) => Some(TelegramUser {
                id,
                first_name,
                last_name: var("LAST_NAME"),
                username: var("USERNAME"),
                photo_url: None,
                is_premium: var("PREMIUM").is_some_and(|v| matches!(v.as_str(), "1" | "true")),
            }),
            _ => None,
        };
        Self { user }
    }
}

impl InitData for EnvInitData {
    fn user(&self) -> Option<TelegramUser> {
        self.user.clone()
    }
}
