use super::Error;

/// Error when a type carries no persistence metadata.
///
/// This occurs when an operation names a type that was never registered with
/// the entity manager. It is raised before any SQL is built or executed and
/// is never retried.
#[derive(Debug)]
pub(super) struct InvalidEntityError {
    message: Box<str>,
}

impl std::error::Error for InvalidEntityError {}

impl core::fmt::Display for InvalidEntityError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid entity: {}", self.message)
    }
}

impl Error {
    /// Creates an invalid entity error.
    pub fn invalid_entity(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidEntity(InvalidEntityError {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is an invalid entity error.
    pub fn is_invalid_entity(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidEntity(_))
    }
}
