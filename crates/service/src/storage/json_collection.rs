use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
    sync::Arc,
};

use serde::{de::DeserializeOwned, Serialize};
use tokio::{fs, sync::RwLock};
use tracing::{debug, error, info};

use crate::errors::ServiceError;

/// Ordered records mirrored to a single JSON array file.
///
/// The vector is private: callers go through `append`, `remove`, `find` and
/// `list`. Every mutation rewrites the whole file (pretty-printed) while the
/// write lock is held, so two mutations never interleave their writes. A
/// failed write is reported but the in-memory change is kept; memory is then
/// ahead of disk until the next successful persist.
pub struct JsonCollection<T> {
    items: RwLock<Vec<T>>,
    file_path: PathBuf,
}

impl<T> JsonCollection<T>
where
    T: Serialize + DeserializeOwned + Clone + Send + Sync,
{
    /// Load the collection from `path`, creating the file with `[]` if missing.
    /// A file that is present but does not parse is reported as `CorruptState`
    /// and left untouched.
    pub async fn load<P: Into<PathBuf>>(path: P) -> Result<Arc<Self>, ServiceError> {
        let file_path = path.into();
        if let Some(parent) = file_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| ServiceError::persist(&file_path, e))?;
        }

        let items: Vec<T> = match fs::read(&file_path).await {
            Ok(bytes) => {
                let items: Vec<T> = serde_json::from_slice(&bytes).map_err(|e| {
                    error!(path = %file_path.display(), error = %e, "collection file does not parse");
                    ServiceError::CorruptState { path: file_path.clone(), reason: e.to_string() }
                })?;
                info!(path = %file_path.display(), count = items.len(), "collection loaded");
                items
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                write_items::<T>(&file_path, &[]).await?;
                info!(path = %file_path.display(), "collection file not found; created empty");
                Vec::new()
            }
            Err(e) => {
                return Err(ServiceError::CorruptState {
                    path: file_path,
                    reason: format!("unreadable: {e}"),
                })
            }
        };

        Ok(Arc::new(Self { items: RwLock::new(items), file_path }))
    }

    /// Push a record and persist the full sequence.
    pub async fn append(&self, record: T) -> Result<(), ServiceError> {
        let mut items = self.items.write().await;
        items.push(record);
        self.persist(&items).await
    }

    /// Drop every record matching `pred` and persist; returns how many went.
    /// The file is rewritten even when nothing matched.
    pub async fn remove<F>(&self, pred: F) -> Result<usize, ServiceError>
    where
        F: Fn(&T) -> bool,
    {
        let mut items = self.items.write().await;
        let before = items.len();
        items.retain(|r| !pred(r));
        let removed = before - items.len();
        self.persist(&items).await?;
        Ok(removed)
    }

    /// First record matching `pred`, in insertion order.
    pub async fn find<F>(&self, pred: F) -> Option<T>
    where
        F: Fn(&T) -> bool,
    {
        let items = self.items.read().await;
        items.iter().find(|r| pred(r)).cloned()
    }

    /// Snapshot of all records in insertion order.
    pub async fn list(&self) -> Vec<T> {
        self.items.read().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.items.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.items.read().await.is_empty()
    }

    async fn persist(&self, items: &[T]) -> Result<(), ServiceError> {
        match write_items(&self.file_path, items).await {
            Ok(()) => {
                debug!(path = %self.file_path.display(), count = items.len(), "collection persisted");
                Ok(())
            }
            Err(e) => {
                error!(path = %self.file_path.display(), error = %e, "collection persist failed; memory is ahead of disk");
                Err(e)
            }
        }
    }
}

async fn write_items<T: Serialize>(path: &Path, items: &[T]) -> Result<(), ServiceError> {
    let data = serde_json::to_vec_pretty(items).map_err(|e| ServiceError::persist(path, e))?;
    fs::write(path, data).await.map_err(|e| ServiceError::persist(path, e))
}
