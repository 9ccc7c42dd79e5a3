//! A generic set of distinct values, built from sequences that may contain duplicates.
//!
//! ```
//! use container::{set, Set};
//!
//! let letters = Set::of(["a", "b", "b"]);
//! assert_eq!(letters, set!["b", "a"]);
//! assert_eq!(letters.len(), 2);
//! ```

pub mod error;
pub mod params;
pub mod seq;
pub mod set;

pub use error::Error;
pub use seq::Seq;
pub use set::Set;

/// Builds a [`Set`] from a variadic list of elements. Duplicated elements are only kept once.
///
/// ```
/// use container::set;
/// let s = set![1, 2, 2, 3];
/// assert_eq!(s.len(), 3);
///
/// let empty: container::Set<u8> = set![];
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! set {
    () => {
        $crate::set::Set::new()
    };
    ($($elem:expr),+ $(,)?) => {
        $crate::set::Set::of([$($elem),+])
    };
}
