use crate::Set;
use std::hash::Hash;

/// A trait implemented by most collection of elements, the objective being to
/// allow quite broad pattern on the calling side.
///
/// ```
/// use container::{Seq, Set};
/// fn distinct(items: impl Seq<u32>) -> usize {
///     items.to_set().len()
/// }
/// assert_eq!(distinct([1, 3, 3]), 2);
/// assert_eq!(distinct(vec![3, 4, 5]), 3);
/// assert_eq!(distinct(Set::of([7])), 1);
/// ```
pub trait Seq<T> {
    fn to_vec(self) -> Vec<T>;
    fn to_set(self) -> Set<T>
    where
        T: Hash + Eq;
}

impl<Collection, T> Seq<T> for Collection
where
    Collection: IntoIterator<Item = T>,
{
    fn to_vec(self) -> Vec<T> {
        self.into_iter().collect()
    }

    fn to_set(self) -> Set<T>
    where
        T: Hash + Eq,
    {
        Set::of(self)
    }
}
