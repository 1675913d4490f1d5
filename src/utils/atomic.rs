//! Atomic file writes.
//!
//! Content lands in a temp file next to the target and is renamed over it,
//! so readers see either the old file or the new one, never a torn write.

use std::io;
use std::path::Path;
use tempfile::NamedTempFile;

/// Write `content` to `path` atomically, creating missing parent directories.
///
/// # Errors
///
/// Returns an `io::Error` if the path has no parent, the parent cannot be
/// created, or the temp file cannot be written or persisted.
pub async fn atomic_write(path: &Path, content: &str) -> io::Result<()> {
    let parent = path
        .parent()
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "Path has no parent directory"))?
        .to_path_buf();
    tokio::fs::create_dir_all(&parent).await?;

    let target_path = path.to_path_buf();
    let content_owned = content.to_string();

    // tempfile is synchronous
    tokio::task::spawn_blocking(move || -> io::Result<()> {
        use std::io::Write;

        let mut temp_file = NamedTempFile::new_in(&parent)?;
        temp_file.write_all(content_owned.as_bytes())?;
        temp_file.flush()?;
        temp_file.persist(&target_path)?;
        Ok(())
    })
    .await
    .map_err(io::Error::other)?
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_atomic_write_creates_missing_parents() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("nested").join("profiles.json");

        atomic_write(&file_path, r#"{"users": []}"#).await.unwrap();

        let content = std::fs::read_to_string(&file_path).unwrap();
        assert_eq!(content, r#"{"users": []}"#);
    }

    #[tokio::test]
    async fn test_atomic_write_replaces_existing() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("profiles.json");
        std::fs::write(&file_path, "old").unwrap();

        atomic_write(&file_path, "new").await.unwrap();

        assert_eq!(std::fs::read_to_string(&file_path).unwrap(), "new");
        let count = std::fs::read_dir(temp_dir.path()).unwrap().count();
        assert_eq!(count, 1, "temp file should have been renamed away");
    }

    #[tokio::test]
    async fn test_atomic_write_fails_when_parent_is_a_file() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("blocker");
        std::fs::write(&blocker, "x").unwrap();

        let result = atomic_write(&blocker.join("profiles.json"), "content").await;
        assert!(result.is_err());
    }
}
