//! Values that may have degraded to a fallback

/// Outcome of an operation that never fails, but may substitute a default.
///
/// Loading the manifest and looking up package versions both return this so
/// callers can tell a real value from a stand-in without handling errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolved<T> {
    /// The value was read or fetched successfully
    Found(T),
    /// Something went wrong and the default was used instead
    Fallback(T),
}

impl<T> Resolved<T> {
    /// Build a `Resolved` from a result, using `fallback` on error
    pub fn from_result<E>(result: Result<T, E>, fallback: impl FnOnce() -> T) -> Self {
        match result {
            Ok(value) => Self::Found(value),
            Err(_) => Self::Fallback(fallback()),
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback(_))
    }

    pub fn value(&self) -> &T {
        match self {
            Self::Found(value) | Self::Fallback(value) => value,
        }
    }

    pub fn into_inner(self) -> T {
        match self {
            Self::Found(value) | Self::Fallback(value) => value,
        }
    }
}
