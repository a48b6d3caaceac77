//! Networking utilities
//!
//! Shared HTTP client used by all providers.

pub mod client;

pub use client::HttpClient;
