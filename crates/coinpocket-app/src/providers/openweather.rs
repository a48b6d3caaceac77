//! OpenWeather API provider
//!
//! Implementation of `WeatherSource` for the OpenWeather current weather
//! endpoint (<https://openweathermap.org/current>).

use serde::Deserialize;

use crate::config::providers::OPENWEATHER_DEFAULT_SERVER;
use crate::error::{AppError, Result};
use crate::network::HttpClient;

use super::traits::WeatherSource;
use super::types::WeatherSnapshot;

const DEFAULT_DESCRIPTION: &str = "Unknown";
const DEFAULT_ICON: &str = "01d";

// =============================================================================
// Internal API response types (serde)
// =============================================================================

#[derive(Debug, Deserialize)]
struct OwResponse {
    main: OwMain,
    #[serde(default)]
    wind: OwWind,
    #[serde(default)]
    weather: Vec<OwCondition>,
    #[serde(default)]
    name: String,
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    feels_like: f64,
    humidity: f64,
}

#[derive(Debug, Default, Deserialize)]
struct OwWind {
    #[serde(default)]
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct OwCondition {
    #[serde(default)]
    description: String,
    #[serde(default)]
    icon: String,
}

impl From<OwResponse> for WeatherSnapshot {
    fn from(r: OwResponse) -> Self {
        let condition = r.weather.into_iter().next();
        let (description, icon) = match condition {
            Some(c) => (
                non_empty_or(c.description, DEFAULT_DESCRIPTION),
                non_empty_or(c.icon, DEFAULT_ICON),
            ),
            None => (DEFAULT_DESCRIPTION.to_string(), DEFAULT_ICON.to_string()),
        };

        WeatherSnapshot {
            temperature: r.main.temp.round() as i32,
            feels_like: r.main.feels_like.round() as i32,
            humidity: r.main.humidity.round().clamp(0.0, 100.0) as u8,
            wind_speed: r.wind.speed,
            description,
            icon,
            location_name: r.name,
        }
    }
}

fn non_empty_or(s: String, fallback: &str) -> String {
    if s.trim().is_empty() {
        fallback.to_string()
    } else {
        s
    }
}

// =============================================================================
// OpenWeatherProvider
// =============================================================================

/// OpenWeather current conditions provider
pub struct OpenWeatherProvider {
    client: HttpClient,
    base_url: String,
    api_key: Option<String>,
}

impl OpenWeatherProvider {
    /// Create a provider using the public API
    ///
    /// A missing or blank key is accepted here and reported on first use.
    pub fn new(api_key: Option<String>) -> Result<Self> {
        Self::with_base_url(OPENWEATHER_DEFAULT_SERVER, api_key)
    }

    /// Create a provider with a custom base URL (for testing or proxies)
    pub fn with_base_url(base_url: impl Into<String>, api_key: Option<String>) -> Result<Self> {
        Ok(Self {
            client: HttpClient::new()?,
            base_url: base_url.into(),
            api_key: api_key.filter(|k| !k.trim().is_empty()),
        })
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }
}

impl WeatherSource for OpenWeatherProvider {
    fn current(&self, latitude: f64, longitude: f64) -> Result<WeatherSnapshot> {
        let Some(api_key) = &self.api_key else {
            return Err(AppError::Config("Weather API key not configured".to_string()));
        };

        let url = format!("{}/data/2.5/weather", self.base_url);
        let lat = latitude.to_string();
        let lon = longitude.to_string();
        let response: OwResponse = self.client.get_json(
            &url,
            &[
                ("lat", &lat),
                ("lon", &lon),
                ("appid", api_key.as_str()),
                ("units", "metric"),
            ],
        )?;
        Ok(response.into())
    }
}

// =============================================================================
// Tests
// =============================================================================
