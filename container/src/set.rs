use crate::error::Error;
use crate::params::PRESIZE;
use hashbrown::hash_map;
use hashbrown::HashMap;
use itertools::Itertools;
use std::borrow::Borrow;
use std::fmt::{Debug, Display, Formatter};
use std::hash::Hash;

/// Value associated to every key of the underlying map. Its only role is to record that the key is present.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
struct Present;

/// An unordered collection of distinct values.
///
/// The set is a map from each of its members to a marker value, so a value appears at most once
/// regardless of how many times it was supplied at construction.
/// No order is attached to the members: iteration order is arbitrary and two sets are equal iff they have
/// the same members.
///
/// # Example
/// ```
/// use container::Set;
/// let set = Set::of(["a", "b", "b"]);
/// assert_eq!(set.len(), 2);
/// assert!(set.contains("a"));
/// assert!(set.contains("b"));
/// assert_eq!(set, Set::of(["b", "a"]));
/// ```
pub struct Set<T> {
    members: HashMap<T, Present>,
}

impl<T> Set<T> {
    /// Creates an empty set.
    pub fn new() -> Self {
        Set {
            members: HashMap::default(),
        }
    }

    /// Number of distinct members.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Iterates over the members, in no particular order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            keys: self.members.keys(),
        }
    }

    /// Returns all members sorted in increasing order.
    /// Unlike iteration, the result only depends on the members of the set.
    pub fn into_sorted(self) -> Vec<T>
    where
        T: Ord,
    {
        let mut elements: Vec<T> = self.members.into_keys().collect();
        elements.sort();
        elements
    }
}

impl<T: Hash + Eq> Set<T> {
    /// Builds the set of all distinct values in `elements`.
    ///
    /// Duplicates are accepted and collapsed: `Set::of([a, b, b])` and `Set::of([a, b])` are equal.
    /// An empty input yields an empty set.
    pub fn of(elements: impl IntoIterator<Item = T>) -> Self {
        let elements = elements.into_iter();
        let mut members: HashMap<T, Present> = HashMap::default();
        if PRESIZE.get() {
            // lower bound only, duplicates may make it an over-approximation
            members.reserve(elements.size_hint().0);
        }
        let mut supplied = 0usize;
        for e in elements {
            supplied += 1;
            members.insert(e, Present);
        }
        tracing::trace!(supplied, distinct = members.len(), "set constructed");
        Set { members }
    }

    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.members.contains_key(value)
    }
}

impl<T> Default for Set<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for Set<T> {
    fn clone(&self) -> Self {
        Set {
            members: self.members.clone(),
        }
    }
}

/// Structural equality: two sets are equal iff they have exactly the same members.
impl<T: Hash + Eq> PartialEq for Set<T> {
    fn eq(&self, other: &Self) -> bool {
        self.members == other.members
    }
}
impl<T: Hash + Eq> Eq for Set<T> {}

impl<T: Debug> Debug for Set<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.members.keys()).finish()
    }
}

impl<T: Display> Display for Set<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{{}}}", self.iter().format(", "))
    }
}

impl<T: Hash + Eq> FromIterator<T> for Set<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Set::of(iter)
    }
}

impl<T: Hash + Eq, const N: usize> From<[T; N]> for Set<T> {
    fn from(elements: [T; N]) -> Self {
        Set::of(elements)
    }
}

impl<T: Hash + Eq> From<Vec<T>> for Set<T> {
    fn from(elements: Vec<T>) -> Self {
        Set::of(elements)
    }
}

/// Extracts the members of a set whose cardinality is known in advance.
/// The members are placed in the array in an arbitrary order.
///
/// ```
/// use container::Set;
/// let [single] = <[&str; 1]>::try_from(Set::of(["x", "x"])).unwrap();
/// assert_eq!(single, "x");
/// assert!(<[&str; 2]>::try_from(Set::of(["x", "x"])).is_err());
/// ```
impl<T, const N: usize> TryFrom<Set<T>> for [T; N] {
    type Error = Error;

    fn try_from(set: Set<T>) -> Result<Self, Self::Error> {
        let found = set.len();
        let elements: Vec<T> = set.members.into_keys().collect();
        elements
            .try_into()
            .map_err(|_| Error::Cardinality { expected: N, found })
    }
}

/// Borrowing iterator over the members of a [`Set`].
pub struct Iter<'a, T> {
    keys: hash_map::Keys<'a, T, Present>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.keys.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.keys.size_hint()
    }
}
impl<T> ExactSizeIterator for Iter<'_, T> {}

/// Owning iterator over the members of a [`Set`].
pub struct IntoIter<T> {
    keys: hash_map::IntoKeys<T, Present>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.keys.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.keys.size_hint()
    }
}
impl<T> ExactSizeIterator for IntoIter<T> {}

impl<'a, T> IntoIterator for &'a Set<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for Set<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            keys: self.members.into_keys(),
        }
    }
}
