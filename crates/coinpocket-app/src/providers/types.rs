//! Shared provider types

use crate::config::providers::OPENWEATHER_ICON_BASE;

/// Current weather at a location
///
/// Temperatures are whole degrees Celsius and humidity a whole percentage.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherSnapshot {
    pub temperature: i32,
    pub feels_like: i32,
    pub humidity: u8,
    /// Meters per second
    pub wind_speed: f64,
    pub description: String,
    /// Provider icon token (e.g. "01d")
    pub icon: String,
    pub location_name: String,
}

impl WeatherSnapshot {
    /// URL of the icon image for this snapshot
    pub fn icon_url(&self) -> String {
        icon_url(&self.icon)
    }

    /// Description with its first letter capitalized
    pub fn headline(&self) -> String {
        let mut chars = self.description.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

/// Icon image URL for an icon token
pub fn icon_url(token: &str) -> String {
    format!("{OPENWEATHER_ICON_BASE}/{token}@2x.png")
}
