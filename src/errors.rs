use std::fmt;

/// Errors returned by the fallible operations of [`StaticVec`](crate::StaticVec)
/// and [`AlignedArray`](crate::AlignedArray).
///
/// Every variant is recoverable: the container is left exactly as it was
/// before the failing call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// An element was added while every cell was already live.
    CapacityExceeded { capacity: usize },
    /// A checked access used `index >= len`.
    ///
    /// For a vector `len` is its live-count, for raw storage it is the capacity.
    IndexOutOfRange { index: usize, len: usize },
    /// `front`/`back` on a vector holding no elements.
    EmptyContainer,
}

impl Error {
    #[inline]
    pub(crate) const fn out_of_range(index: usize, len: usize) -> Self {
        Self::IndexOutOfRange { index, len }
    }

    #[inline]
    pub(crate) const fn full(capacity: usize) -> Self {
        Self::CapacityExceeded { capacity }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CapacityExceeded { capacity } => write!(f, "capacity of {capacity} exceeded"),
            Self::IndexOutOfRange { index, len } => {
                write!(f, "index {index} out of range for length {len}")
            }
            Self::EmptyContainer => write!(f, "container is empty"),
        }
    }
}

impl std::error::Error for Error {}
