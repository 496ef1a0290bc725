use thiserror::Error;

/// Backend-layer error type for durable [`PermissionManager`] implementations.
///
/// [`PermissionManager`]: crate::PermissionManager
pub type BackendError = Box<dyn std::error::Error + Send + Sync>;

/// Crate result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by this crate.
#[derive(Debug, Error)]
pub enum Error {
    /// Backend error wrapper.
    #[error("backend error: {0}")]
    Backend(#[source] BackendError),
    /// Role argument failed validation.
    #[error("invalid role: {0}")]
    InvalidRole(String),
    /// Resource argument failed validation.
    #[error("invalid resource: {0}")]
    InvalidResource(String),
    /// Action argument failed validation.
    #[error("invalid action: {0}")]
    InvalidAction(String),
}

impl From<BackendError> for Error {
    fn from(error: BackendError) -> Self {
        Self::Backend(error)
    }
}
