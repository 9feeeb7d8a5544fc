use core::borrow::Borrow;
use core::hash::{BuildHasher, Hash};
use core::ops::Index;

use super::WaitList;
use crate::raw::Id;
use crate::{NotFound, Rank};

impl<K, S> WaitList<K, S> {
    /// Returns the key at one-based position `rank`.
    ///
    /// Returns `None` for rank 0 or any rank past [`len`](WaitList::len).
    ///
    /// # Complexity
    ///
    /// O(log m), where m is the number of keys ever inserted.
    ///
    /// # Examples
    ///
    /// ```
    /// use waitlist::WaitList;
    ///
    /// let mut list = WaitList::from([10, 20, 30]);
    /// list.remove(&10).unwrap();
    ///
    /// assert_eq!(list.get_by_rank(1), Some(&20));
    /// assert_eq!(list.get_by_rank(2), Some(&30));
    /// assert!(list.get_by_rank(0).is_none());
    /// assert!(list.get_by_rank(3).is_none());
    /// ```
    #[must_use]
    pub fn get_by_rank(&self, rank: usize) -> Option<&K> {
        let id = self.weights.select(rank, self.next_id.to_usize())?;
        Some(self.key(Id::from_usize(id)))
    }
}

impl<K, S> WaitList<K, S>
where
    K: Hash + Eq + Clone,
    S: BuildHasher,
{
    /// Returns the one-based position of `key` in line.
    ///
    /// # Errors
    ///
    /// Returns [`NotFound`] if the key is not waiting.
    ///
    /// # Complexity
    ///
    /// O(log m), where m is the number of keys ever inserted.
    ///
    /// # Examples
    ///
    /// ```
    /// use waitlist::{NotFound, WaitList};
    ///
    /// let list = WaitList::from(["Mike", "Jill"]);
    ///
    /// assert_eq!(list.rank("Jill"), Ok(2));
    /// assert_eq!(list.rank("Bill"), Err(NotFound));
    /// ```
    pub fn rank<Q>(&self, key: &Q) -> Result<usize, NotFound>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let id = self.ids.get(key).ok_or(NotFound)?;
        Ok(self.weights.prefix_sum(id.to_usize()))
    }

    /// Like [`rank`](WaitList::rank), but returns 0 for a key that is not waiting.
    ///
    /// # Examples
    ///
    /// ```
    /// use waitlist::WaitList;
    ///
    /// let list = WaitList::from(["Mike", "Jill"]);
    ///
    /// assert_eq!(list.try_rank("Jill"), 2);
    /// assert_eq!(list.try_rank("Bill"), 0);
    /// ```
    #[must_use]
    pub fn try_rank<Q>(&self, key: &Q) -> usize
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.rank(key).unwrap_or(0)
    }
}

/// Indexes into the list by one-based rank.
///
/// # Panics
///
/// Panics if `rank` is 0 or greater than the list's length.
///
/// # Examples
///
/// ```
/// use waitlist::{Rank, WaitList};
///
/// let list = WaitList::from([10, 20, 30]);
/// assert_eq!(list[Rank(2)], 20);
/// ```
impl<K, S> Index<Rank> for WaitList<K, S> {
    type Output = K;

    fn index(&self, rank: Rank) -> &Self::Output {
        self.get_by_rank(rank.0).expect("index out of bounds")
    }
}
