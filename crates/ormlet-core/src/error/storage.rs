use super::Error;

/// Error from the execution collaborator.
///
/// Connectivity failures, constraint violations, malformed SQL. Propagated
/// unchanged up through the persister and entity manager; the unit of work is
/// abandoned and the caller must start a new one.
#[derive(Debug)]
pub(super) struct StorageError {
    inner: Box<dyn std::error::Error + Send + Sync>,
}

impl std::error::Error for StorageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.inner.source()
    }
}

impl core::fmt::Display for StorageError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.inner, f)
    }
}

impl Error {
    /// Creates an error from a storage-level failure.
    ///
    /// Accepts either a message or an underlying error from the connection
    /// implementation.
    pub fn storage(err: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Error {
        Error::from(super::ErrorKind::Storage(StorageError { inner: err.into() }))
    }

    /// Returns `true` if this error is a storage error.
    pub fn is_storage(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::Storage(_))
    }
}
