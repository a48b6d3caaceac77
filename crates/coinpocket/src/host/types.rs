//! Host capability types
//!
//! Value types exchanged with the host SDK capabilities.

use serde::{Deserialize, Serialize};

// =============================================================================
// Popup
// =============================================================================

/// Semantic role of a popup button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonType {
    Default,
    Destructive,
    Cancel,
    Ok,
    Close,
}

impl ButtonType {
    /// Label the host renders when a button carries no text of its own
    pub fn default_label(&self) -> &'static str {
        match self {
            ButtonType::Default => "",
            ButtonType::Destructive => "",
            ButtonType::Cancel => "Cancel",
            ButtonType::Ok => "OK",
            ButtonType::Close => "Close",
        }
    }
}

/// A single popup button
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PopupButton {
    /// Identifier returned when the button is pressed
    pub id: String,
    /// Semantic role
    #[serde(rename = "type")]
    pub button_type: ButtonType,
    /// Button text; `ok`, `close` and `cancel` buttons may omit it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl PopupButton {
    /// Create a button without custom text
    pub fn new(id: impl Into<String>, button_type: ButtonType) -> Self {
        Self {
            id: id.into(),
            button_type,
            text: None,
        }
    }

    /// Set the button text
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Text to display for this button
    pub fn label(&self) -> &str {
        match &self.text {
            Some(text) => text,
            None => self.button_type.default_label(),
        }
    }
}

/// Parameters of a native popup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PopupParams {
    pub title: String,
    pub message: String,
    pub buttons: Vec<PopupButton>,
}

impl PopupParams {
    /// Create popup parameters with no buttons yet
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            buttons: Vec::new(),
        }
    }

    /// Append a button
    pub fn button(mut self, button: PopupButton) -> Self {
        self.buttons.push(button);
        self
    }
}

/// How a popup was resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PopupOutcome {
    /// A button with this id was pressed
    Pressed(String),
    /// The popup was closed without pressing a button
    Dismissed,
}

impl PopupOutcome {
    /// Check whether the button with `id` was pressed
    pub fn is_pressed(&self, id: &str) -> bool {
        matches!(self, PopupOutcome::Pressed(pressed) if pressed == id)
    }
}

// =============================================================================
// Haptic feedback
// =============================================================================

/// Impact strength
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImpactStyle {
    Light,
    Medium,
    Heavy,
    Rigid,
    Soft,
}

/// Outcome notification kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationType {
    Success,
    Warning,
    Error,
}

/// A fire-and-forget feedback signal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    Impact(ImpactStyle),
    Notification(NotificationType),
    SelectionChanged,
}

// =============================================================================
// Main button
// =============================================================================

/// Parameters of the host's bottom action button
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MainButtonParams {
    pub text: String,
    pub visible: bool,
    pub enabled: bool,
}

impl MainButtonParams {
    /// A visible, enabled button with the given text
    pub fn shown(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            visible: true,
            enabled: true,
        }
    }

    /// A hidden button
    pub fn hidden() -> Self {
        Self::default()
    }
}

// =============================================================================
// Identity and location
// =============================================================================

/// The user the host launched the app for
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TelegramUser {
    pub id: i64,
    pub first_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    #[serde(default)]
    pub is_premium: bool,
}

impl TelegramUser {
    /// "First Last", or just the first name
    pub fn display_name(&self) -> String {
        match &self.last_name {
            Some(last) if !last.is_empty() => format!("{} {}", self.first_name, last),
            _ => self.first_name.clone(),
        }
    }

    /// "@username", if the user has one
    pub fn handle(&self) -> Option<String> {
        self.username.as_ref().map(|u| format!("@{u}"))
    }
}

/// A device location reading
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocationSample {
    pub latitude: f64,
    pub longitude: f64,
    /// Horizontal accuracy in meters, if reported
    pub accuracy: Option<f64>,
}

impl LocationSample {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            accuracy: None,
        }
    }
}
