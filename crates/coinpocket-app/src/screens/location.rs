//! Location screen
//!
//! Shows the device location and the current weather there. The location
//! capability is mounted for as long as the screen exists.

use std::sync::Arc;

use coinpocket::host::{
    Feedback, HostCapabilities, ImpactStyle, LocationManager, LocationSample, NotificationType,
};
use log::warn;

use crate::providers::{WeatherSnapshot, WeatherSource};

pub const NOT_SUPPORTED: &str = "Location not supported in this Telegram version";
pub const MOUNT_FAILED: &str = "Failed to initialize location manager";
pub const NOT_READY: &str = "Location manager not ready";
pub const DENIED: &str = "Location request denied or failed";

pub struct LocationScreen {
    host: HostCapabilities,
    weather_source: Arc<dyn WeatherSource>,
    /// Mounted location capability, if any
    manager: Option<Arc<dyn LocationManager>>,
    location: Option<LocationSample>,
    location_error: Option<String>,
    weather: Option<WeatherSnapshot>,
    weather_error: Option<String>,
}

impl LocationScreen {
    /// Mount the location capability
    pub fn new(host: HostCapabilities, weather_source: Arc<dyn WeatherSource>) -> Self {
        let (manager, location_error) = match host.location.clone() {
            None => (None, Some(NOT_SUPPORTED.to_string())),
            Some(manager) => match manager.mount() {
                Ok(()) => (Some(manager), None),
                Err(e) => {
                    warn!("Location mount failed: {e}");
                    (None, Some(MOUNT_FAILED.to_string()))
                }
            },
        };

        Self {
            host,
            weather_source,
            manager,
            location: None,
            location_error,
            weather: None,
            weather_error: None,
        }
    }

    /// Whether the host can provide a location at all
    pub fn is_supported(&self) -> bool {
        self.manager.is_some()
    }

    pub fn location(&self) -> Option<LocationSample> {
        self.location
    }

    pub fn location_error(&self) -> Option<&str> {
        self.location_error.as_deref()
    }

    pub fn weather(&self) -> Option<&WeatherSnapshot> {
        self.weather.as_ref()
    }

    /// Weather error, only meaningful once a location is known
    pub fn weather_error(&self) -> Option<&str> {
        self.location.and(self.weather_error.as_deref())
    }

    /// Ask for the device location, then fetch weather for it
    pub fn request_location(&mut self) {
        let Some(manager) = &self.manager else {
            self.location_error = Some(NOT_READY.to_string());
            return;
        };

        self.location_error = None;
        match manager.request_location() {
            Ok(Some(sample)) => {
                self.location = Some(sample);
                self.host
                    .feedback(Feedback::Notification(NotificationType::Success));
                self.fetch_weather();
            }
            Ok(None) => self.location_failed(DENIED.to_string()),
            Err(e) => self.location_failed(e.to_string()),
        }
    }

    fn location_failed(&mut self, message: String) {
        self.location_error = Some(message);
        self.host
            .feedback(Feedback::Notification(NotificationType::Error));
    }

    /// Refresh button on the location section
    pub fn refresh_location(&mut self) {
        self.host.feedback(Feedback::Impact(ImpactStyle::Light));
        self.request_location();
    }

    /// Refresh button on the weather section
    pub fn refresh_weather(&mut self) {
        self.host.feedback(Feedback::Impact(ImpactStyle::Light));
        self.fetch_weather();
    }

    fn fetch_weather(&mut self) {
        let Some(location) = self.location else {
            return;
        };
        match self
            .weather_source
            .current(location.latitude, location.longitude)
        {
            Ok(weather) => {
                self.weather = Some(weather);
                self.weather_error = None;
            }
            Err(e) => {
                warn!("Weather fetch failed: {e}");
                self.weather_error = Some(e.to_string());
            }
        }
    }
}

impl Drop for LocationScreen {
    fn drop(&mut self) {
        if let Some(manager) = &self.manager {
            manager.unmount();
        }
    }
}
