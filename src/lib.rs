//! An insertion-ordered membership index for Rust.
//!
//! This crate provides [`WaitList`], a set of unique keys kept in the order they arrived. Keys
//! join at the back, may leave from any position, and can report their current place in line
//! without scanning the keys ahead of them:
//!
//! - [`insert`](WaitList::insert) - Join the back of the line, O(1) amortized
//! - [`remove`](WaitList::remove) - Leave from anywhere, O(log m)
//! - [`rank`](WaitList::rank) - Current one-based position of a key, O(log m)
//! - [`iter`](WaitList::iter) - Every key in line order with its position
//!
//! # Example
//!
//! ```
//! use waitlist::{NotFound, Rank, WaitList};
//!
//! let mut line = WaitList::new();
//! line.insert("Mike");
//! line.insert("Jill");
//! line.insert("Bill");
//!
//! assert_eq!(line.rank("Bill"), Ok(3));
//!
//! // Jill steps out and comes back: she goes to the end.
//! line.remove("Jill")?;
//! line.insert("Raymond");
//! line.insert("Jill");
//!
//! assert_eq!(line.rank("Bill"), Ok(2));
//! assert_eq!(line.rank("Raymond"), Ok(3));
//! assert_eq!(line[Rank(4)], "Jill");
//! assert_eq!(line.try_rank("Nobody"), 0);
//!
//! for (position, name) in &line {
//!     println!("{position}: {name}");
//! }
//! # Ok::<(), NotFound>(())
//! ```
//!
//! # Features
//!
//! - **`no_std` compatible** - Only requires `alloc`, no standard library dependency
//! - **Stable order** - Keys that never leave keep their relative order forever
//! - **O(log m) positions** - Rank queries walk a sparse Fenwick tree instead of the line
//!
//! # Implementation
//!
//! Every key receives an id from a counter that only moves forward, so ids order keys by arrival
//! and are never reused. A sparse Fenwick tree keyed by id stores, for each node, how many live
//! keys fall in the id range that node aggregates. A key's position is the prefix sum up to its
//! id, and nodes whose count drops to zero are deleted, so the table shrinks as keys leave.
//! Traversal bisects the id space and skips any range whose prefix counts show no live key.

#![no_std]
// These forbid rules and lint groups are meant to be very restrictive.
#![forbid(unsafe_code)]
#![forbid(keyword_idents)]
#![forbid(non_ascii_idents)]
#![forbid(unreachable_pub)]
#![warn(clippy::all)]
#![warn(clippy::cargo)]
#![warn(clippy::pedantic)]
// Enable coverage attributes for nightly builds.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

extern crate alloc;

mod error;
mod order_statistic;
mod raw;

pub mod waitlist;

pub use error::NotFound;
pub use order_statistic::Rank;
pub use waitlist::WaitList;
