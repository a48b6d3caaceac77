//! File-backed cloud storage
//!
//! Emulates host cloud storage on disk: one file per key inside a directory.

use crate::config::app::{CLOUD_DIR, NAME};
use crate::error::{CoreError, Result};
use crate::host::CloudStorage;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::validate_key;

/// Get the default storage directory path
pub fn default_dir() -> Result<PathBuf> {
    dirs::config_dir()
        .map(|p| p.join(NAME).join(CLOUD_DIR))
        .ok_or_else(|| CoreError::Config(
            "Could not determine config directory. HOME environment variable may not be set.".to_string()
        ))
}

/// Map an I/O failure on `path` to a storage error
fn io_error(action: &str, path: &Path, e: std::io::Error) -> CoreError {
    let reason = match e.kind() {
        ErrorKind::PermissionDenied => "permission denied".to_string(),
        ErrorKind::ReadOnlyFilesystem => "filesystem is read-only".to_string(),
        _ => e.to_string(),
    };
    CoreError::Storage(format!("Cannot {action} {}: {reason}", path.display()))
}

/// Cloud storage kept as plain files in a directory
///
/// Each key lives in `{key}.json`. Writes go to a temporary sibling first
/// and are renamed into place, so a reader never sees half a value.
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Open storage in the default config directory
    pub fn new() -> Result<Self> {
        Self::with_dir(default_dir()?)
    }

    /// Open storage in a custom directory (for testing or `--data-dir`)
    pub fn with_dir(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|e| io_error("create directory", &dir, e))?;
        Ok(Self { dir })
    }

    /// Directory holding the stored values
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> Result<PathBuf> {
        validate_key(key)?;
        Ok(self.dir.join(format!("{key}.json")))
    }

    fn read_key(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(io_error("read", &path, e)),
        }
    }

    fn write_key(&self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key)?;
        let staged = path.with_extension("json.tmp");
        fs::write(&staged, value).map_err(|e| io_error("write", &staged, e))?;
        fs::rename(&staged, &path).map_err(|e| {
            let _ = fs::remove_file(&staged);
            io_error("replace", &path, e)
        })
    }
}

impl CloudStorage for FileStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        // Empty file is treated as non-existent
        Ok(self.read_key(key)?.filter(|content| !content.trim().is_empty()))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.write_key(key, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env::temp_dir;
    use std::sync::atomic::{AtomicU32, Ordering};

    static TEST_COUNTER: AtomicU32 = AtomicU32::new(0);

    fn temp_storage() -> FileStorage {
        let id = TEST_COUNTER.fetch_add(1, Ordering::SeqCst);
        let dir = temp_dir().join(format!("coinpocket_file_test_{}_{}", std::process::id(), id));
        FileStorage::with_dir(dir).unwrap()
    }

    fn cleanup(storage: FileStorage) {
        let _ = fs::remove_dir_all(storage.dir());
    }

    #[test]
    fn test_set_and_get() {
        let storage = temp_storage();
        storage.set_item("favorite_coins", r#"["bitcoin"]"#).unwrap();
        assert_eq!(
            storage.get_item("favorite_coins").unwrap(),
            Some(r#"["bitcoin"]"#.to_string())
        );
        cleanup(storage);
    }

    #[test]
    fn test_get_missing_key() {
        let storage = temp_storage();
        assert_eq!(storage.get_item("app_settings").unwrap(), None);
        cleanup(storage);
    }

    #[test]
    fn test_empty_file_is_absent() {
        let storage = temp_storage();
        fs::write(storage.dir().join("app_settings.json"), "  \n").unwrap();
        assert_eq!(storage.get_item("app_settings").unwrap(), None);
        cleanup(storage);
    }

    #[test]
    fn test_overwrite() {
        let storage = temp_storage();
        storage.set_item("k", "1").unwrap();
        storage.set_item("k", "2").unwrap();
        assert_eq!(storage.get_item("k").unwrap(), Some("2".to_string()));
        cleanup(storage);
    }

    #[test]
    fn test_write_leaves_no_staged_file() {
        let storage = temp_storage();
        storage.set_item("favorite_coins", "[]").unwrap();
        let names: Vec<String> = fs::read_dir(storage.dir())
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["favorite_coins.json"]);
        cleanup(storage);
    }

    #[test]
    fn test_write_error_names_the_file() {
        let storage = temp_storage();
        fs::remove_dir_all(storage.dir()).unwrap();
        match storage.set_item("app_settings", "{}") {
            Err(CoreError::Storage(msg)) => assert!(msg.contains("app_settings.json"), "{msg}"),
            other => panic!("expected storage error, got {other:?}"),
        }
    }

    #[test]
    fn test_rejects_path_like_keys() {
        let storage = temp_storage();
        assert!(matches!(
            storage.set_item("../escape", "x"),
            Err(CoreError::InvalidKey(_))
        ));
        assert!(storage.get_item("a/b").is_err());
        cleanup(storage);
    }

    #[test]
    fn test_creates_nested_dir() {
        let id = TEST_COUNTER.fetch_add(1, Ordering::SeqCst);
        let root = temp_dir().join(format!("coinpocket_file_test_nested_{}", id));
        let storage = FileStorage::with_dir(root.join("a").join("b")).unwrap();
        assert!(storage.dir().exists());
        let _ = fs::remove_dir_all(&root);
    }
}
