//! JSON blob encoding with fail-open decoding
//!
//! Stored values are whole JSON documents. Reading never fails: a missing,
//! empty or undecodable blob yields the type's default.

use log::warn;
use serde::{de::DeserializeOwned, Serialize};

use crate::error::Result;
use crate::host::CloudStorage;

/// Encode a value as a compact JSON blob
pub fn encode<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string(value)?)
}

/// Decode a blob, falling back to `T::default()` when it is absent or invalid
pub fn decode_or_default<T: DeserializeOwned + Default>(key: &str, blob: Option<&str>) -> T {
    let Some(blob) = blob else {
        return T::default();
    };
    if blob.trim().is_empty() {
        return T::default();
    }
    match serde_json::from_str(blob) {
        Ok(value) => value,
        Err(e) => {
            warn!("Stored value for {key:?} is corrupt, using default: {e}");
            T::default()
        }
    }
}

/// Read and decode `key` from optional storage, failing open on every error
pub fn load_or_default<T: DeserializeOwned + Default>(
    storage: Option<&dyn CloudStorage>,
    key: &str,
) -> T {
    let Some(storage) = storage else {
        return T::default();
    };
    match storage.get_item(key) {
        Ok(blob) => decode_or_default(key, blob.as_deref()),
        Err(e) => {
            warn!("Failed to read {key:?} from storage, using default: {e}");
            T::default()
        }
    }
}

/// Encode and write `value` under `key`
///
/// Returns `Ok(false)` without writing when no storage is available.
pub fn store<T: Serialize>(storage: Option<&dyn CloudStorage>, key: &str, value: &T) -> Result<bool> {
    let Some(storage) = storage else {
        return Ok(false);
    };
    storage.set_item(key, &encode(value)?)?;
    Ok(true)
}
