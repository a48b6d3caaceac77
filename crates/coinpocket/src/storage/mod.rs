//! Cloud storage backends
//!
//! Implementations of `CloudStorage` plus the JSON blob helpers the stores
//! use to read and write whole documents.

pub mod blob;
pub mod file;
pub mod memory;

// Re-exports
pub use file::FileStorage;
pub use memory::MemoryStorage;

use crate::config::storage::MAX_KEY_LEN;
use crate::error::{CoreError, Result};

/// Check a key against the host's key rules
///
/// Keys are 1 to 128 characters from `A-Z`, `a-z`, `0-9`, `_` and `-`.
pub fn validate_key(key: &str) -> Result<()> {
    let valid = !key.is_empty()
        && key.len() <= MAX_KEY_LEN
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if valid {
        Ok(())
    } else {
        Err(CoreError::InvalidKey(key.to_string()))
    }
}
