//! Image uploads attached to listings.
//!
//! Files land in `<public_dir>/uploads` and are addressed publicly as
//! `/uploads/<file>`. Only `image/*` content under the size limit is kept.

use std::path::{Path, PathBuf};

use chrono::Utc;
use rand::Rng;
use tokio::fs;
use tracing::{info, warn};

use crate::errors::ServiceError;

pub const PUBLIC_PREFIX: &str = "/uploads/";

/// A file written by [`ImageStore::save`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoredImage {
    pub file_name: String,
    pub url: String,
}

#[derive(Clone, Debug)]
pub struct ImageStore {
    dir: PathBuf,
    max_bytes: usize,
}

impl ImageStore {
    pub fn new<P: Into<PathBuf>>(dir: P, max_bytes: usize) -> Self {
        Self { dir: dir.into(), max_bytes }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn max_bytes(&self) -> usize {
        self.max_bytes
    }

    /// Reject anything that is not `image/*` or is larger than the limit.
    pub fn check(&self, content_type: Option<&str>, size: usize) -> Result<(), ServiceError> {
        if !content_type.is_some_and(|ct| ct.starts_with("image/")) {
            return Err(ServiceError::UploadRejected("Not an image! Please upload only images.".into()));
        }
        if size > self.max_bytes {
            return Err(ServiceError::UploadRejected(format!(
                "File too large (limit {} bytes)",
                self.max_bytes
            )));
        }
        Ok(())
    }

    /// Write the upload under a generated `field-<millis>-<random>.<ext>` name.
    pub async fn save(
        &self,
        field_name: &str,
        original_name: Option<&str>,
        content_type: Option<&str>,
        bytes: &[u8],
    ) -> Result<StoredImage, ServiceError> {
        self.check(content_type, bytes.len())?;
        fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| ServiceError::persist(&self.dir, e))?;

        let file_name = generate_file_name(field_name, original_name);
        let path = self.dir.join(&file_name);
        fs::write(&path, bytes)
            .await
            .map_err(|e| ServiceError::persist(&path, e))?;
        info!(file = %file_name, size = bytes.len(), "image stored");

        Ok(StoredImage { url: format!("{PUBLIC_PREFIX}{file_name}"), file_name })
    }

    /// Delete the file behind a `/uploads/...` URL if it exists. Failures are
    /// logged, never returned.
    pub async fn remove_by_url(&self, url: &str) {
        let Some(name) = url.strip_prefix(PUBLIC_PREFIX) else {
            warn!(%url, "image url outside upload directory; not deleting");
            return;
        };
        let name = name.split(['?', '#']).next().unwrap_or_default();
        if name.is_empty() || name.contains('/') || name.contains('\\') || name.contains("..") {
            warn!(%url, "refusing to delete suspicious image path");
            return;
        }

        let path = self.dir.join(name);
        if fs::metadata(&path).await.is_err() {
            return;
        }
        match fs::remove_file(&path).await {
            Ok(()) => info!(file = %name, "image deleted"),
            Err(e) => warn!(file = %name, error = %e, "image delete failed"),
        }
    }
}

fn generate_file_name(field_name: &str, original_name: Option<&str>) -> String {
    let suffix: u32 = rand::thread_rng().gen_range(0..=1_000_000_000);
    let ext = original_name
        .and_then(|n| Path::new(n).extension())
        .and_then(|e| e.to_str())
        .map(|e| format!(".{e}"))
        .unwrap_or_default();
    format!("{}-{}-{}{}", field_name, Utc::now().timestamp_millis(), suffix, ext)
}
