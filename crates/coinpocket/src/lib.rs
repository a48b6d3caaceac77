//! Coinpocket: favorites and settings core
//!
//! Host capability traits, key/value storage backends, and the two stores
//! that keep user state synchronized with host persistence.
//!
//! ## Quick start
//!
//! ```no_run
//! use coinpocket::data::{FavoritesStore, SettingsStore};
//! use coinpocket::host::HostCapabilities;
//! ```

pub mod config;
pub mod data;
pub mod error;
pub mod host;
pub mod storage;
