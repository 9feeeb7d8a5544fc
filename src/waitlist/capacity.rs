use core::hash::{BuildHasher, Hash};

use hashbrown::{DefaultHashBuilder, HashMap};

use super::WaitList;
use crate::raw::{Id, Weights};

impl<K> WaitList<K, DefaultHashBuilder> {
    /// Creates an empty list with room for at least `capacity` keys.
    ///
    /// # Examples
    ///
    /// ```
    /// use waitlist::WaitList;
    ///
    /// let list: WaitList<i32> = WaitList::with_capacity(16);
    /// assert!(list.is_empty());
    /// assert!(list.capacity() >= 16);
    /// ```
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, DefaultHashBuilder::default())
    }
}

impl<K, S> WaitList<K, S> {
    /// Creates an empty list that hashes keys with `hash_builder`.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::hash::RandomState;
    /// use waitlist::WaitList;
    ///
    /// let mut list = WaitList::with_hasher(RandomState::new());
    /// list.insert("Mike");
    /// assert_eq!(list.rank("Mike"), Ok(1));
    /// ```
    #[must_use]
    pub fn with_hasher(hash_builder: S) -> Self {
        Self::with_capacity_and_hasher(0, hash_builder)
    }

    /// Creates an empty list with room for at least `capacity` keys, hashing keys with
    /// `hash_builder`.
    #[must_use]
    pub fn with_capacity_and_hasher(capacity: usize, hash_builder: S) -> Self {
        WaitList {
            ids: HashMap::with_capacity_and_hasher(capacity, hash_builder),
            keys: HashMap::with_capacity(capacity),
            weights: Weights::with_capacity(capacity),
            next_id: Id::FIRST,
        }
    }

    /// Returns how many keys the list can hold without reallocating.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.ids.capacity().min(self.keys.capacity())
    }

    /// Returns the list's [`BuildHasher`].
    #[must_use]
    pub fn hasher(&self) -> &S {
        self.ids.hasher()
    }
}

impl<K, S> WaitList<K, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    /// Reserves room for at least `additional` more keys.
    ///
    /// # Panics
    ///
    /// Panics if the new allocation size overflows `usize`.
    ///
    /// # Examples
    ///
    /// ```
    /// use waitlist::WaitList;
    ///
    /// let mut list: WaitList<i32> = WaitList::new();
    /// list.reserve(10);
    /// assert!(list.capacity() >= 10);
    /// ```
    pub fn reserve(&mut self, additional: usize) {
        self.ids.reserve(additional);
        self.keys.reserve(additional);
        self.weights.reserve(additional);
    }

    /// Shrinks the list's storage as much as possible.
    ///
    /// # Examples
    ///
    /// ```
    /// use waitlist::WaitList;
    ///
    /// let mut list: WaitList<i32> = WaitList::with_capacity(100);
    /// list.insert(1);
    /// list.shrink_to_fit();
    /// assert!(list.capacity() >= 1);
    /// ```
    pub fn shrink_to_fit(&mut self) {
        self.ids.shrink_to_fit();
        self.keys.shrink_to_fit();
        self.weights.shrink_to_fit();
    }
}
