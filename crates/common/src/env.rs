//! Environment/runtime helpers
//!
//! Sanity checks to ensure expected directories exist at startup.

use tracing::{info, warn};

/// Ensure the data and upload directories exist; warn when the public
/// directory is missing since static assets will then 404.
pub async fn ensure_env(public_dir: &str, upload_dir: &str, data_dir: &str) -> anyhow::Result<()> {
    if tokio::fs::metadata(public_dir).await.is_err() {
        warn!(%public_dir, "public directory not found; static assets may 404");
    }
    for dir in [data_dir, upload_dir] {
        tokio::fs::create_dir_all(dir)
            .await
            .map_err(|e| anyhow::anyhow!("cannot create {dir}: {e}"))?;
    }
    info!(%data_dir, %upload_dir, "runtime directories ready");
    Ok(())
}
