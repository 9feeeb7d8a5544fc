/// A one-based position in the waitlist.
///
/// Rank 1 is the front of the line. This is the same numbering returned by
/// [`WaitList::rank`](crate::WaitList::rank) and yielded by
/// [`WaitList::iter`](crate::WaitList::iter).
///
/// # Examples
///
/// ```
/// use waitlist::{Rank, WaitList};
///
/// let list = WaitList::from(["Mike", "Jill"]);
///
/// assert_eq!(list[Rank(1)], "Mike");
/// assert_eq!(list[Rank(2)], "Jill");
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Rank(pub usize);
