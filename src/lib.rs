//! This crate provides a doubly-linked sequence container whose nodes are owned
//! by an arena, with positions that are checked on every use.
//!
//! The [`List`] allows inserting and removing elements at both ends, and before
//! any [`Position`], in constant time. In compromise, reaching the element at a
//! given index takes *O*(*n*) time.
//!
//! Here is a quick example showing how the list works.
//!
//! ```
//! use dlist::{List, ListError};
//!
//! let mut list = List::from([1, 2, 4]);
//!
//! let four = list.prev_position(list.end()).unwrap();
//! list.insert(four, 3).unwrap(); // insert 3 before 4
//! assert_eq!(list, List::from([1, 2, 3, 4]));
//!
//! let next = list.erase(list.begin()).unwrap(); // erase 1
//! assert_eq!(list.get(next), Ok(&2));
//!
//! // `four` still names 4, and `end` is never dereferenceable
//! assert_eq!(list.get(four), Ok(&4));
//! assert_eq!(list.get(list.end()), Err(ListError::OutOfRange));
//! ```
//!
//! # Memory Layout
//!
//! The memory layout of the list is like the following graph:
//! ```text
//!                    arena slots (any order)
//!    ┌──────────────┬──────────────┬──────────────┬─────┐
//!    │   slot 0     │   slot 1     │   slot 2     │ ... │
//!    │ prev: 2      │ prev: -      │ prev: 1      │     │
//!    │ next: -      │ next: 2      │ next: 0      │     │
//!    │ stamp, T     │ stamp, T     │ stamp, T     │     │
//!    └──────────────┴──────────────┴──────────────┴─────┘
//!           ↑              ↑
//!         tail           head           list order: 1 → 2 → 0
//! ╔═══════════╗
//! ║   nodes   ║  the arena
//! ╟───────────╢
//! ║ head/tail ║  `None` when the list is empty
//! ╟───────────╢
//! ║    len    ║
//! ╚═══════════╝
//!     List
//! ```
//! Every node lives in one arena owned by the `List`. The `prev` and `next`
//! links of a node are slot indices, absent past either end of the list, so
//! links never own anything and each node is released exactly once.
//!
//! Each node also carries a stamp that no other node ever gets. A [`Position`]
//! records both the slot and the stamp of its node, so a position whose element
//! was erased, or that came from another list, is rejected with
//! [`ListError::InvalidPosition`] even if its slot got reused.
//!
//! # Iteration
//!
//! Iterating over a list is by the [`Iter`] and [`IterMut`] iterators. These are
//! double-ended iterators and iterate the list like an array (fused and non-cyclic).
//! [`IterMut`] provides mutability of the elements (but not the linked structure of
//! the list).
//!
//! ## Examples
//!
//! ```
//! use dlist::List;
//!
//! let mut list = List::from([1, 2, 3]);
//! let mut iter = list.iter();
//! assert_eq!(iter.next(), Some(&1));
//! assert_eq!(iter.next_back(), Some(&3));
//! assert_eq!(iter.next(), Some(&2));
//! assert_eq!(iter.next(), None);
//! assert_eq!(iter.next(), None); // Fused
//!
//! list.iter_mut().for_each(|item| *item *= 2);
//! assert_eq!(Vec::from_iter(list), vec![2, 4, 6]);
//! ```
//!
//! # Cursors
//!
//! A [`Cursor`] walks a list it borrows. In a list with length *n*, there are
//! *n* + 1 locations for a cursor: the *n* elements and the off-the-end position.
//! Moving forward from the off-the-end position stays there, and moving backward
//! from the first element fails with [`ListError::OutOfRange`].
//!
//! [`CursorMut`] provides ways to mutate the list at the cursor:
//! - [`insert`]: insert a new item before the cursor;
//! - [`remove`]: remove the item at the cursor;
//!
//! ## Examples
//!
//! ```
//! use dlist::{List, ListError};
//!
//! let mut list = List::from([1, 2, 3, 4]);
//!
//! let mut cursor = list.cursor_start_mut();
//!
//! cursor.insert(5); // becomes [5, 1, 2, 3, 4], points to 1
//! assert_eq!(cursor.current(), Ok(&1));
//!
//! cursor.move_next();
//! cursor.move_next();
//! assert_eq!(cursor.remove(), Some(3)); // becomes [5, 1, 2, 4], points to 4
//! assert_eq!(cursor.current(), Ok(&4));
//!
//! cursor.move_to_start();
//! assert_eq!(cursor.move_prev(), Err(ListError::OutOfRange));
//!
//! assert_eq!(Vec::from_iter(list), vec![5, 1, 2, 4]);
//! ```
//!
//! # Features
//!
//! - `strict-invariants`: walk the whole list after every structural change and
//!   panic if any link is broken. Meant for debugging only, since it turns
//!   constant-time operations into linear ones.
//!
//! The crate logs through the [`log`](https://docs.rs/log) facade at the `trace`
//! and `debug` levels; nothing is printed unless the application installs a logger.
//!
//! [`insert`]: crate::CursorMut::insert
//! [`remove`]: crate::CursorMut::remove

#[doc(inline)]
pub use error::ListError;
#[doc(inline)]
pub use list::cursor::{Cursor, CursorMut, NodeRef, Position};
#[doc(inline)]
pub use list::iterator::{IntoIter, Iter, IterMut};
#[doc(inline)]
pub use list::List;

mod error;
pub mod list;
