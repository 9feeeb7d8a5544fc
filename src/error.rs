//! Errors returned by [`WaitList`](crate::WaitList) operations.

/// The key is not in the waitlist.
///
/// Returned by [`WaitList::remove`](crate::WaitList::remove) and
/// [`WaitList::rank`](crate::WaitList::rank). Their non-failing counterparts,
/// [`discard`](crate::WaitList::discard) and [`try_rank`](crate::WaitList::try_rank),
/// never produce it.
///
/// # Examples
///
/// ```
/// use waitlist::{NotFound, WaitList};
///
/// let mut list: WaitList<&str> = WaitList::new();
/// assert_eq!(list.remove("Mike"), Err(NotFound));
/// assert_eq!(NotFound.to_string(), "key not found in waitlist");
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, thiserror::Error)]
#[error("key not found in waitlist")]
pub struct NotFound;
