use std::fmt;

/// Errors that can occur when operating on a [`List`](crate::List).
///
/// Every operation returning a `ListError` fails before touching the list,
/// so the list is unchanged when an error is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListError {
    /// `pop_front` or `pop_back` was called on an empty list.
    Underflow,

    /// The off-the-end position was dereferenced, `front` or `back` was
    /// called on an empty list, or a cursor was moved backward past the
    /// first element.
    OutOfRange,

    /// The position names a node that was removed, or that belongs to
    /// another list.
    InvalidPosition,
}

impl fmt::Display for ListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListError::Underflow => f.write_str("pop from an empty list"),
            ListError::OutOfRange => f.write_str("position out of range"),
            ListError::InvalidPosition => f.write_str("stale or foreign position"),
        }
    }
}

impl std::error::Error for ListError {}
