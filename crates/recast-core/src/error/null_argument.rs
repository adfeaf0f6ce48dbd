use super::Error;

/// Error when a required argument is absent.
///
/// Raised by `Mapper::map` when it is called without a source instance.
#[derive(Debug, Clone)]
pub(super) struct NullArgument {
    name: Box<str>,
}

impl std::error::Error for NullArgument {}

impl core::fmt::Display for NullArgument {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "argument `{}` must not be absent", self.name)
    }
}

impl Error {
    /// Creates a null argument error for the argument called `name`.
    pub fn null_argument(name: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::NullArgument(NullArgument {
            name: name.into().into(),
        }))
    }

    /// Returns `true` if this error is a null argument error.
    pub fn is_null_argument(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::NullArgument(_))
    }
}
