//! Atomic JSON persistence for configuration files.
//!
//! Writes go to a temp file with a unique PID+TID suffix, are synced to
//! disk, and land via atomic rename — a half-written `config.json` must
//! never be observable, even if the process dies mid-save.

use crate::error::{OffBookError, Result};
use serde::{de::DeserializeOwned, Serialize};
use std::fs::{self, File, OpenOptions};
use std::io::{Read, Write};
use std::path::Path;
use std::process;
use tracing::debug;

/// Read and parse a JSON file.
///
/// Returns `None` if the file doesn't exist, or an error if parsing fails.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>> {
    if !path.exists() {
        return Ok(None);
    }

    let mut file =
        File::open(path).map_err(|e| OffBookError::io_with_path(e, path))?;

    let mut contents = String::new();
    file.read_to_string(&mut contents)
        .map_err(|e| OffBookError::io_with_path(e, path))?;

    let data: T = serde_json::from_str(&contents).map_err(|e| OffBookError::Json {
        message: format!("Failed to parse {}: {}", path.display(), e),
        source: Some(e),
    })?;

    Ok(Some(data))
}

/// Write data to a JSON file atomically.
pub fn write_json<T: Serialize>(path: &Path, data: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.exists() {
            fs::create_dir_all(parent)
                .map_err(|e| OffBookError::io_with_path(e, parent))?;
        }
    }

    // Unique per writer, so concurrent saves never clobber each other's
    // temp files.
    let temp_path = path.with_extension(format!(
        "json.{}.{}.tmp",
        process::id(),
        thread_id()
    ));

    let serialized =
        serde_json::to_string_pretty(data).map_err(|e| OffBookError::Json {
            message: format!("Failed to serialize data: {}", e),
            source: Some(e),
        })?;

    {
        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&temp_path)
            .map_err(|e| OffBookError::io_with_path(e, &temp_path))?;

        file.write_all(serialized.as_bytes())
            .map_err(|e| OffBookError::io_with_path(e, &temp_path))?;

        // Data must reach disk before the rename makes it visible.
        file.sync_all()
            .map_err(|e| OffBookError::io_with_path(e, &temp_path))?;
    }

    fs::rename(&temp_path, path).map_err(|e| OffBookError::Io {
        message: format!(
            "Failed to rename {} to {}",
            temp_path.display(),
            path.display()
        ),
        path: Some(path.to_path_buf()),
        source: Some(e),
    })?;

    debug!("Atomically wrote {}", path.display());
    Ok(())
}

/// Get a unique numeric identifier for the current thread.
fn thread_id() -> u64 {
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};
    let mut hasher = DefaultHasher::new();
    format!("{:?}", std::thread::current().id()).hash(&mut hasher);
    hasher.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};
    use tempfile::TempDir;

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct TestData {
        name: String,
        value: i32,
    }

    #[test]
    fn test_write_and_read() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("test.json");

        let data = TestData {
            name: "test".to_string(),
            value: 42,
        };

        write_json(&path, &data).unwrap();
        assert!(path.exists());

        let read_back: Option<TestData> = read_json(&path).unwrap();
        assert_eq!(read_back, Some(data));
    }

    #[test]
    fn test_read_nonexistent() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nonexistent.json");

        let result: Option<TestData> = read_json(&path).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_read_corrupt_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("corrupt.json");
        fs::write(&path, "{not json").unwrap();

        let result: Result<Option<TestData>> = read_json(&path);
        assert!(matches!(result, Err(OffBookError::Json { .. })));
    }

    #[test]
    fn test_write_creates_directories() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("dir").join("test.json");

        let data = TestData {
            name: "nested".to_string(),
            value: 99,
        };

        write_json(&path, &data).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_no_temp_file_left_behind() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("test.json");

        let data = TestData {
            name: "clean".to_string(),
            value: 1,
        };
        write_json(&path, &data).unwrap();

        let leftovers: Vec<_> = fs::read_dir(temp_dir.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.path() != path)
            .collect();
        assert!(leftovers.is_empty(), "leftover files: {:?}", leftovers);
    }
}
