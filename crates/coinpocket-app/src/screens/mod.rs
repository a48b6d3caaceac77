//! Screen view models
//!
//! Each screen holds what it displays and forwards user gestures to the core
//! stores. Rendering is left to the frontend.

pub mod crypto;
pub mod favorites;
pub mod location;
pub mod settings;

pub use crypto::{CryptoScreen, QuoteRow};
pub use favorites::FavoritesScreen;
pub use location::LocationScreen;
pub use settings::SettingsScreen;

use coinpocket::host::TelegramUser;

/// Profile header shown on the home and settings screens
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileView {
    pub display_name: String,
    pub subtitle: String,
    pub user_id: Option<i64>,
    pub is_premium: bool,
}

impl ProfileView {
    pub fn from_user(user: Option<&TelegramUser>) -> Self {
        match user {
            Some(user) => Self {
                display_name: user.display_name(),
                subtitle: user.handle().unwrap_or_else(|| "Telegram User".to_string()),
                user_id: Some(user.id),
                is_premium: user.is_premium,
            },
            None => Self {
                display_name: "Guest".to_string(),
                subtitle: "Telegram User".to_string(),
                user_id: None,
                is_premium: false,
            },
        }
    }
}

/// Price formatted for display, e.g. "$64,123.5"
pub fn format_price(price: f64) -> String {
    let rounded = (price * 100.0).round() / 100.0;
    let whole = rounded.trunc() as u64;
    let cents = ((rounded - rounded.trunc()) * 100.0).round() as u64;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    if cents == 0 {
        format!("${grouped}")
    } else if cents % 10 == 0 {
        format!("${grouped}.{}", cents / 10)
    } else {
        format!("${grouped}.{cents:02}")
    }
}
