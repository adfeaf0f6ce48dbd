use super::Error;

/// Error when an argument is present but cannot be used.
///
/// Plan resolution raises this when it is handed an absent shape for either
/// side of a type pair. Shapes obtained through `Record::shape` are always
/// present, so the public mapping path never produces it.
#[derive(Debug, Clone)]
pub(super) struct InvalidArgument {
    name: Box<str>,
    reason: Box<str>,
}

impl std::error::Error for InvalidArgument {}

impl core::fmt::Display for InvalidArgument {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid argument `{}`: {}", self.name, self.reason)
    }
}

impl Error {
    /// Creates an invalid argument error.
    pub fn invalid_argument(name: impl Into<String>, reason: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidArgument(InvalidArgument {
            name: name.into().into(),
            reason: reason.into().into(),
        }))
    }

    /// Returns `true` if this error is an invalid argument error.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidArgument(_))
    }
}
