//! Coinpocket App Services
//!
//! Quote and weather providers, screen view models, and terminal host
//! adapters. Depends on the `coinpocket` core crate.

pub mod config;
pub mod error;
pub mod network;
pub mod providers;
pub mod screens;
pub mod terminal;
