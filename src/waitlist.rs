use core::borrow::Borrow;
use core::fmt;
use core::hash::{BuildHasher, Hash};
use core::iter::FusedIterator;

use hashbrown::hash_map::Entry;
use hashbrown::{DefaultHashBuilder, HashMap};

use crate::NotFound;
use crate::raw::{Id, LiveIds, Weights};

mod capacity;
mod order_statistic;

/// A set of unique keys kept in the order they were inserted.
///
/// Keys join at the back, may leave from any position, and report their current one-based
/// position in line without a scan. Every key receives a permanent id when it is inserted; ids
/// only ever grow, so a key that leaves and comes back is placed behind everyone already waiting.
///
/// Positions are answered by a sparse Fenwick tree keyed by id. Only ids that aggregate at least
/// one live key hold an entry, so memory follows the number of keys in line rather than the
/// number of keys that have ever passed through.
///
/// | Operation                          | Cost                         |
/// |------------------------------------|------------------------------|
/// | [`insert`](WaitList::insert)       | O(1) amortized               |
/// | [`remove`](WaitList::remove)       | O(log m)                     |
/// | [`rank`](WaitList::rank)           | O(log m)                     |
/// | [`get_by_rank`](WaitList::get_by_rank) | O(log m)                 |
/// | [`iter`](WaitList::iter)           | O(n log m) for the full pass |
///
/// where `n` is [`len`](WaitList::len) and `m` is the number of keys ever inserted.
///
/// It is a logic error for a key to be modified in such a way that its hash, as determined by the
/// [`Hash`] trait, or its equality, as determined by the [`Eq`] trait, changes while it is in the
/// list.
///
/// # Examples
///
/// ```
/// use waitlist::WaitList;
///
/// let mut list = WaitList::new();
///
/// list.insert("Mike");
/// list.insert("Jill");
/// list.insert("Bill");
/// list.insert("Mike"); // already waiting, no-op
///
/// assert_eq!(list.rank("Bill"), Ok(3));
///
/// list.remove("Jill").unwrap();
/// list.insert("Jill"); // back of the line
///
/// let order: Vec<_> = list.iter().collect();
/// assert_eq!(order, [(1, &"Mike"), (2, &"Bill"), (3, &"Jill")]);
/// ```
#[derive(Clone)]
pub struct WaitList<K, S = DefaultHashBuilder> {
    ids: HashMap<K, Id, S>,
    keys: HashMap<Id, K>,
    weights: Weights,
    next_id: Id,
}

/// An iterator over the keys of a `WaitList` paired with their ranks.
///
/// This `struct` is created by the [`iter`] method on [`WaitList`].
/// See its documentation for more.
///
/// # Examples
///
/// ```
/// use waitlist::WaitList;
///
/// let list = WaitList::from([30, 10, 20]);
/// let mut iter = list.iter();
/// assert_eq!(iter.next(), Some((1, &30)));
/// assert_eq!(iter.len(), 2);
/// ```
///
/// [`iter`]: WaitList::iter
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Iter<'a, K: 'a> {
    ids: LiveIds<'a>,
    keys: &'a HashMap<Id, K>,
}

impl<K> WaitList<K, DefaultHashBuilder> {
    /// Makes a new, empty `WaitList`.
    ///
    /// # Examples
    ///
    /// ```
    /// use waitlist::WaitList;
    ///
    /// let mut list = WaitList::new();
    ///
    /// // keys can now be inserted into the empty list
    /// list.insert(1);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub fn new() -> Self {
        Self::with_hasher(DefaultHashBuilder::default())
    }
}

impl<K, S> WaitList<K, S> {
    /// Returns the number of keys waiting.
    ///
    /// # Examples
    ///
    /// ```
    /// use waitlist::WaitList;
    ///
    /// let mut a = WaitList::new();
    /// assert_eq!(a.len(), 0);
    /// a.insert(1);
    /// assert_eq!(a.len(), 1);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Returns `true` if no keys are waiting.
    ///
    /// # Examples
    ///
    /// ```
    /// use waitlist::WaitList;
    ///
    /// let mut a = WaitList::new();
    /// assert!(a.is_empty());
    /// a.insert(1);
    /// assert!(!a.is_empty());
    /// ```
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Removes every key.
    ///
    /// Ids keep counting from where they were, so keys inserted afterwards never share an id
    /// with a key that was cleared.
    ///
    /// # Examples
    ///
    /// ```
    /// use waitlist::WaitList;
    ///
    /// let mut list = WaitList::from([1, 2]);
    /// list.clear();
    /// assert!(list.is_empty());
    /// assert_eq!(list.try_rank(&1), 0);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(n)
    pub fn clear(&mut self) {
        self.ids.clear();
        self.keys.clear();
        self.weights.clear();
    }

    /// Gets an iterator that visits the keys in line order, each paired with its one-based rank.
    ///
    /// Ranks are emitted densely as `1, 2, ..., len()`. Each call starts a fresh pass over the
    /// current contents.
    ///
    /// # Examples
    ///
    /// ```
    /// use waitlist::WaitList;
    ///
    /// let mut list = WaitList::from(['a', 'b', 'c']);
    /// list.remove(&'b').unwrap();
    ///
    /// let mut iter = list.iter();
    /// assert_eq!(iter.next(), Some((1, &'a')));
    /// assert_eq!(iter.next(), Some((2, &'c')));
    /// assert_eq!(iter.next(), None);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1) to create the iterator. Ranges of ids with no live key are skipped with a single
    /// lookup, so a full pass costs O(n log m) no matter how many keys have already left.
    pub fn iter(&self) -> Iter<'_, K> {
        Iter {
            ids: LiveIds::new(&self.weights, self.next_id.to_usize(), self.len()),
            keys: &self.keys,
        }
    }

    /// Returns the key at the front of the line.
    ///
    /// # Examples
    ///
    /// ```
    /// use waitlist::WaitList;
    ///
    /// let mut list = WaitList::new();
    /// assert_eq!(list.first(), None);
    /// list.insert("Mike");
    /// list.insert("Jill");
    /// assert_eq!(list.first(), Some(&"Mike"));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log m)
    #[must_use]
    pub fn first(&self) -> Option<&K> {
        self.get_by_rank(1)
    }

    /// Returns the key at the back of the line.
    ///
    /// # Examples
    ///
    /// ```
    /// use waitlist::WaitList;
    ///
    /// let list = WaitList::from(["Mike", "Jill"]);
    /// assert_eq!(list.last(), Some(&"Jill"));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log m)
    #[must_use]
    pub fn last(&self) -> Option<&K> {
        self.get_by_rank(self.len())
    }

    fn key(&self, id: Id) -> &K {
        self.keys.get(&id).expect("`WaitList::key()` - live id has no key!")
    }
}

impl<K, S> WaitList<K, S>
where
    K: Hash + Eq + Clone,
    S: BuildHasher,
{
    /// Adds a key to the back of the line.
    ///
    /// Returns whether the key was newly inserted. A key that is already waiting keeps its place
    /// and nothing changes.
    ///
    /// # Panics
    ///
    /// Panics if the list has handed out `usize::MAX - 1` ids.
    ///
    /// # Examples
    ///
    /// ```
    /// use waitlist::WaitList;
    ///
    /// let mut list = WaitList::new();
    ///
    /// assert!(list.insert("Mike"));
    /// assert!(list.insert("Jill"));
    /// assert!(!list.insert("Mike"));
    /// assert_eq!(list.len(), 2);
    /// assert_eq!(list.rank("Mike"), Ok(1));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1) amortized. The new id's weight is derived from the ids just below it, never from a
    /// full prefix sum.
    pub fn insert(&mut self, key: K) -> bool {
        let Entry::Vacant(entry) = self.ids.entry(key) else {
            return false;
        };
        let id = self.next_id;
        self.next_id = id.successor();
        self.weights.push(id.to_usize());
        self.keys.insert(id, entry.key().clone());
        entry.insert(id);
        true
    }

    /// Returns `true` if the key is waiting.
    ///
    /// The key may be any borrowed form of the list's key type, but [`Hash`] and [`Eq`] on the
    /// borrowed form *must* match those for the key type.
    ///
    /// # Examples
    ///
    /// ```
    /// use waitlist::WaitList;
    ///
    /// let list = WaitList::from([1, 2, 3]);
    /// assert_eq!(list.contains(&1), true);
    /// assert_eq!(list.contains(&4), false);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1)
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.ids.contains_key(key)
    }

    /// Removes a key from the line, wherever it is.
    ///
    /// Everyone behind it moves up one place.
    ///
    /// # Errors
    ///
    /// Returns [`NotFound`] if the key is not waiting. The list is left unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use waitlist::{NotFound, WaitList};
    ///
    /// let mut list = WaitList::from(["Mike", "Jill", "Bill"]);
    ///
    /// assert_eq!(list.remove("Jill"), Ok(()));
    /// assert_eq!(list.remove("Jill"), Err(NotFound));
    /// assert_eq!(list.rank("Bill"), Ok(2));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log m)
    pub fn remove<Q>(&mut self, key: &Q) -> Result<(), NotFound>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let id = self.ids.remove(key).ok_or(NotFound)?;
        self.retire(id);
        Ok(())
    }

    /// Removes a key from the line if it is waiting.
    ///
    /// Returns whether the key was present. Unlike [`remove`](WaitList::remove), an absent key
    /// is not an error.
    ///
    /// # Examples
    ///
    /// ```
    /// use waitlist::WaitList;
    ///
    /// let mut list = WaitList::from([1, 2]);
    /// assert!(list.discard(&1));
    /// assert!(!list.discard(&1));
    /// assert_eq!(list.len(), 1);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log m)
    pub fn discard<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.take(key).is_some()
    }

    /// Removes a key from the line and returns it, if it was waiting.
    ///
    /// # Examples
    ///
    /// ```
    /// use waitlist::WaitList;
    ///
    /// let mut list = WaitList::from([String::from("Mike")]);
    /// assert_eq!(list.take("Mike"), Some(String::from("Mike")));
    /// assert_eq!(list.take("Mike"), None);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log m)
    pub fn take<Q>(&mut self, key: &Q) -> Option<K>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let id = self.ids.remove(key)?;
        Some(self.retire(id))
    }

    /// Removes and returns the key at the front of the line.
    ///
    /// # Examples
    ///
    /// ```
    /// use waitlist::WaitList;
    ///
    /// let mut list = WaitList::from(["Mike", "Jill"]);
    /// assert_eq!(list.pop_first(), Some("Mike"));
    /// assert_eq!(list.rank("Jill"), Ok(1));
    /// assert_eq!(list.pop_first(), Some("Jill"));
    /// assert_eq!(list.pop_first(), None);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log m)
    pub fn pop_first(&mut self) -> Option<K> {
        let id = Id::from_usize(self.weights.select(1, self.next_id.to_usize())?);
        let key = self.retire(id);
        self.ids.remove(&key);
        Some(key)
    }

    /// Drops `id` from the reverse map and the weight table. The caller owns the forward map.
    fn retire(&mut self, id: Id) -> K {
        let key = self.keys.remove(&id).expect("`WaitList::retire()` - live id has no key!");
        self.weights.retire(id.to_usize(), self.next_id.to_usize());
        key
    }
}

impl<K: PartialEq, S> PartialEq for WaitList<K, S> {
    /// Two lists are equal when they hold equal keys in the same order. Ids are not compared.
    fn eq(&self, other: &WaitList<K, S>) -> bool {
        self.len() == other.len() && self.iter().zip(other.iter()).all(|((_, a), (_, b))| a == b)
    }
}

impl<K: Eq, S> Eq for WaitList<K, S> {}

impl<K: fmt::Debug, S> fmt::Debug for WaitList<K, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter().map(|(_, key)| key)).finish()
    }
}

impl<K, S: Default> Default for WaitList<K, S> {
    fn default() -> Self {
        WaitList::with_hasher(S::default())
    }
}

impl<K, S> FromIterator<K> for WaitList<K, S>
where
    K: Hash + Eq + Clone,
    S: BuildHasher + Default,
{
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut list = WaitList::default();
        list.extend(iter);
        list
    }
}

impl<K, S> Extend<K> for WaitList<K, S>
where
    K: Hash + Eq + Clone,
    S: BuildHasher,
{
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<'a, K, S> Extend<&'a K> for WaitList<K, S>
where
    K: 'a + Hash + Eq + Copy,
    S: BuildHasher,
{
    fn extend<I: IntoIterator<Item = &'a K>>(&mut self, iter: I) {
        for &key in iter {
            self.insert(key);
        }
    }
}

impl<K: Hash + Eq + Clone, const N: usize> From<[K; N]> for WaitList<K, DefaultHashBuilder> {
    /// Inserts the keys in array order, ignoring duplicates.
    ///
    /// ```
    /// use waitlist::WaitList;
    ///
    /// let list = WaitList::from([3, 1, 3, 2]);
    /// assert_eq!(list.iter().map(|(_, k)| *k).collect::<Vec<_>>(), [3, 1, 2]);
    /// ```
    fn from(keys: [K; N]) -> Self {
        WaitList::from_iter(keys)
    }
}

impl<'a, K, S> IntoIterator for &'a WaitList<K, S> {
    type Item = (usize, &'a K);
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Iter<'a, K> {
        self.iter()
    }
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = (usize, &'a K);

    fn next(&mut self) -> Option<(usize, &'a K)> {
        let (rank, id) = self.ids.next()?;
        let key = self.keys.get(&Id::from_usize(id)).expect("`Iter::next()` - live id has no key!");
        Some((rank, key))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.ids.size_hint()
    }
}

impl<K> ExactSizeIterator for Iter<'_, K> {
    fn len(&self) -> usize {
        self.ids.len()
    }
}

impl<K> FusedIterator for Iter<'_, K> {}

impl<K> Clone for Iter<'_, K> {
    fn clone(&self) -> Self {
        Iter {
            ids: self.ids.clone(),
            keys: self.keys,
        }
    }
}

impl<K: fmt::Debug> fmt::Debug for Iter<'_, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}
