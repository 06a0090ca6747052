/// Errors from object store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// I/O error from the underlying storage backend.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The operation was canceled before completion (deadline or caller
    /// cancellation honored by the backend).
    #[error("store operation canceled")]
    Canceled,

    /// Backend-specific failure that is not an I/O error.
    #[error("store backend error: {0}")]
    Backend(String),
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
