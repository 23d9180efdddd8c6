use std::fmt;

/// Errors reported by the fallible operations of a [`List`](crate::List).
///
/// A returned error always leaves the list exactly as it was before the call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The list holds no element.
    Empty,
    /// `index` does not address a position of a list of length `len`.
    OutOfRange { index: usize, len: usize },
    /// The range `start..end` is reversed, empty where a non-empty range is
    /// required, or overlaps the target position.
    InvalidRange { start: usize, end: usize },
    /// A non-cyclic cursor move would pass through the ghost node.
    Boundary,
}

pub type Result<T> = std::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Error::Empty => f.write_str("the list is empty"),
            Error::OutOfRange { index, len } => {
                write!(f, "index {} is out of range for a list of length {}", index, len)
            }
            Error::InvalidRange { start, end } => write!(f, "invalid range {}..{}", start, end),
            Error::Boundary => f.write_str("cursor move across the ghost node"),
        }
    }
}

impl std::error::Error for Error {}
