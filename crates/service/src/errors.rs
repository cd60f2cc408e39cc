use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{0}")]
    Validation(String),
    /// The backing file exists but is not a JSON array of records.
    #[error("corrupt collection file {path}: {reason}")]
    CorruptState { path: PathBuf, reason: String },
    /// Writing the collection failed; the in-memory change is already applied.
    #[error("persist failed for {path}: {reason}")]
    Persist { path: PathBuf, reason: String },
    #[error("upload rejected: {0}")]
    UploadRejected(String),
    #[error("model error: {0}")]
    Model(#[from] models::errors::ModelError),
}

impl ServiceError {
    pub(crate) fn persist(path: &std::path::Path, reason: impl ToString) -> Self {
        Self::Persist { path: path.to_path_buf(), reason: reason.to_string() }
    }
}
