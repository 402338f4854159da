//! Local-disk storage for completion photos.
//!
//! Files are written under `<upload_dir>/completions/<order_id>/` with a
//! random name and served back by the static `/uploads` route, so the URL
//! returned to clients is `<public_base_url>/completions/<order_id>/<file>`.

use std::path::{Path, PathBuf};

use flowerdesk_core::types::DbId;

use crate::config::StorageConfig;

/// Sub-directory holding completion photos.
const COMPLETIONS_DIR: &str = "completions";

/// Writes uploaded photos to disk and maps them to public URLs.
#[derive(Debug, Clone)]
pub struct PhotoStorage {
    root: PathBuf,
    public_base_url: String,
}

/// A photo that has been written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredPhoto {
    pub path: PathBuf,
    pub url: String,
}

impl PhotoStorage {
    pub fn new(config: &StorageConfig) -> Self {
        Self {
            root: config.upload_dir.clone(),
            public_base_url: config.public_base_url.clone(),
        }
    }

    /// Directory served at the public base URL.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Write one completion photo and return where it landed.
    pub async fn store_completion_photo(
        &self,
        order_id: DbId,
        extension: &str,
        data: &[u8],
    ) -> std::io::Result<StoredPhoto> {
        let dir = self.root.join(COMPLETIONS_DIR).join(order_id.to_string());
        tokio::fs::create_dir_all(&dir).await?;

        let file_name = format!("{}.{extension}", uuid::Uuid::new_v4());
        let path = dir.join(&file_name);
        tokio::fs::write(&path, data).await?;

        tracing::debug!(order_id, path = %path.display(), bytes = data.len(), "Stored completion photo");

        Ok(StoredPhoto {
            url: format!(
                "{}/{COMPLETIONS_DIR}/{order_id}/{file_name}",
                self.public_base_url
            ),
            path,
        })
    }

    /// Best-effort removal of photos written for a submission that failed.
    pub async fn discard(&self, photos: &[StoredPhoto]) {
        for photo in photos {
            if let Err(e) = tokio::fs::remove_file(&photo.path).await {
                tracing::warn!(path = %photo.path.display(), error = %e, "Failed to remove orphaned photo");
            }
        }
    }

    /// Confirm the upload directory can be created and written.
    pub async fn check_writable(&self) -> std::io::Result<String> {
        tokio::fs::create_dir_all(&self.root).await?;
        let marker = self.root.join(format!(".write-check-{}", uuid::Uuid::new_v4()));
        tokio::fs::write(&marker, b"ok").await?;
        tokio::fs::remove_file(&marker).await?;
        Ok(format!("{} is writable", self.root.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn storage(dir: &Path) -> PhotoStorage {
        PhotoStorage::new(&StorageConfig {
            upload_dir: dir.to_path_buf(),
            public_base_url: "/uploads".into(),
        })
    }

    #[tokio::test]
    async fn stores_photo_under_order_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let storage = storage(tmp.path());

        let stored = storage
            .store_completion_photo(42, "jpg", b"jpeg-bytes")
            .await
            .unwrap();

        assert!(stored.url.starts_with("/uploads/completions/42/"));
        assert!(stored.url.ends_with(".jpg"));
        assert!(stored.path.starts_with(tmp.path().join("completions").join("42")));
        assert_eq!(tokio::fs::read(&stored.path).await.unwrap(), b"jpeg-bytes");
    }

    #[tokio::test]
    async fn discard_removes_files() {
        let tmp = tempfile::tempdir().unwrap();
        let storage = storage(tmp.path());
        let stored = storage.store_completion_photo(1, "png", b"x").await.unwrap();

        storage.discard(std::slice::from_ref(&stored)).await;

        assert!(!stored.path.exists());
    }

    #[tokio::test]
    async fn writable_check_leaves_no_marker_file() {
        let tmp = tempfile::tempdir().unwrap();
        let storage = storage(&tmp.path().join("nested"));

        let detail = storage.check_writable().await.unwrap();

        assert!(detail.ends_with("is writable"));
        let leftovers = std::fs::read_dir(tmp.path().join("nested")).unwrap().count();
        assert_eq!(leftovers, 0);
    }
}
