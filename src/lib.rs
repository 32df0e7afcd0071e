//! This crate provides an index-addressable doubly-linked list whose nodes are
//! owned by an arena.
//!
//! The [`List`] allows inserting, removing, replacing and swapping elements at
//! any position addressed by a zero-based index. Pushing and popping at either
//! end take constant time; every positional operation resolves its node by
//! walking from whichever end of the list is closer, so it takes
//! *O*(min(*i*, *n* - *i*)) time.
//!
//! Here is a quick example showing how the list works.
//!
//! ```
//! use bidir_list::List;
//!
//! let mut list = List::from([5, 3, 8, 1, 9]);
//!
//! list.sort();
//! assert_eq!(list, List::from([1, 3, 5, 8, 9]));
//! assert_eq!(list.position(&8), Some(3));
//! assert_eq!(list.count(&3), 1);
//!
//! assert_eq!(list.remove(0), Ok(1));
//! list.push_front(0);
//! list.reverse();
//! assert_eq!(list.to_string(), "[9, 8, 5, 3, 0]");
//! ```
//!
//! # Memory Layout
//!
//! The nodes live in a single vector of slots. Links between nodes are slot
//! indices rather than pointers, so the list needs no `unsafe` code:
//! ```text
//!              slot 2                slot 0                slot 3
//!            ┌───────────┐         ┌───────────┐         ┌───────────┐
//!   head ──→ │   next    │ ──────→ │   next    │ ──────→ │   next    │ ──→ None
//!            ├───────────┤         ├───────────┤         ├───────────┤
//!   None ←── │   prev    │ ←────── │   prev    │ ←────── │   prev    │ ←── tail
//!            ├───────────┤         ├───────────┤         ├───────────┤
//!            │ element T │         │ element T │         │ element T │
//!            └───────────┘         └───────────┘         └───────────┘
//!
//!   free ──→ slot 1 ──→ None         (vacant slots are threaded on a free list)
//! ```
//! The `List` contains:
//! - the slot vector, where each slot is either an occupied node or a vacant
//!   entry on the free list;
//! - `head` and `tail`, the slots of the first and last node, both `None`
//!   exactly when the list is empty;
//! - the length `len`.
//!
//! Removed slots are reused by later insertions before the vector grows.
//!
//! # Errors
//!
//! Positional operations return [`ListError::OutOfRange`] for a bad position,
//! and operations that need at least one element (popping, [`List::render`])
//! return [`ListError::EmptyContainer`] on an empty list. A failing call never
//! modifies the list.
//!
//! ```
//! use bidir_list::{List, ListError};
//!
//! let mut list: List<i32> = List::new();
//! assert_eq!(list.pop_back(), Err(ListError::EmptyContainer));
//! assert_eq!(list.get(0), Err(ListError::OutOfRange { position: 0, len: 0 }));
//! assert_eq!(list.insert(0, 7), Ok(()));
//! ```
//!
//! # Sorting
//!
//! [`List::sort`] and friends reorder the elements in place with a quicksort
//! that works directly on ranges of nodes. Only the element values move; the
//! links of the list are never rewritten. The sort is not stable.
//!
//! ```
//! use bidir_list::List;
//!
//! let mut list = List::from([2, 7, 1, 8, 2, 8]);
//! list.sort_by(|a, b| b.cmp(a));
//! assert_eq!(Vec::from_iter(list), vec![8, 8, 7, 2, 2, 1]);
//! ```
//!
//! # Features
//!
//! - `tracing` (default): emit [`tracing`](https://docs.rs/tracing) events
//!   when sorting, clearing and validating.
//!
//! [`List`]: crate::List
//! [`ListError::OutOfRange`]: crate::ListError::OutOfRange
//! [`ListError::EmptyContainer`]: crate::ListError::EmptyContainer
//! [`List::render`]: crate::List::render
//! [`List::sort`]: crate::List::sort
#![forbid(unsafe_code)]

#[doc(inline)]
pub use error::{InvariantError, ListError, Result};
#[doc(inline)]
pub use list::iterator::{IntoIter, Iter, IterMut};
#[doc(inline)]
pub use list::List;

pub mod error;
pub mod list;
