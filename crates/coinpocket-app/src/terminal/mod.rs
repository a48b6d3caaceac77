//! Terminal host
//!
//! Implements the host capabilities for a plain terminal session.

pub mod host;
pub mod popup;

pub use host::{EnvInitData, FixedLocation, LogHaptics};
pub use popup::{prompt, spawn_line_reader, TerminalPopup};
