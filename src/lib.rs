//! Fixed-capacity vectors stored inline, without heap allocation.
//!
//! [`AlignedArray<T, N>`] reserves correctly aligned, uninitialized memory for
//! `N` values and leaves liveness entirely to its owner. [`StaticVec<T, N>`]
//! is that owner: it tracks how many leading cells are live and is the only
//! thing that constructs or destroys elements in them.
//!
//! Running out of room is never silent. Fallible operations return
//! [`Error`], and the panicking conveniences mirror [`Vec`]'s.
//!
//! ```
//! use boundvec::{Error, StaticVec};
//!
//! let mut vec = StaticVec::<&str, 2>::new();
//! vec.push("a");
//! vec.push("b");
//! assert_eq!(vec.try_push("c"), Err(Error::CapacityExceeded { capacity: 2 }));
//! ```

mod aligned;
mod staticvec;
#[cfg(feature = "serde")]
mod serde;

pub(crate) mod errors;

pub use aligned::AlignedArray;
pub use errors::Error;
pub use staticvec::{Drain, IntoIter, StaticVec};
