//! This crate provides a doubly-linked list with owned nodes, implemented as a
//! cyclic list around a payload-less ghost node.
//!
//! The [`List`] inserts and erases elements at a known position in constant
//! time, and expresses every reordering (splice, merge, sort, reverse) as
//! relinking of existing nodes: elements are never copied or moved in memory
//! once they are in the list.
//!
//! Here is a quick example showing how the list works.
//!
//! ```
//! use splice_list::{list, List};
//!
//! let mut list = list![1, 2, 3, 4];
//!
//! let mut cursor = list.cursor_start_mut();
//!
//! cursor.insert(0); // insert 0 at the beginning of the list
//! assert_eq!(cursor.current(), Some(&1));
//! assert_eq!(cursor.view(), &list![0, 1, 2, 3, 4]);
//!
//! cursor.seek_to(3).unwrap(); // move the cursor to position 3, and removes it.
//! assert_eq!(cursor.remove(), Some(3));
//! assert_eq!(cursor.view(), &list![0, 1, 2, 4]);
//!
//! let mut other = list![7, 8, 9];
//! list.splice_range(1, &mut other, 1..).unwrap();
//! assert_eq!(list, list![0, 8, 9, 1, 2, 4]);
//! assert_eq!(other, list![7]);
//! ```
//!
//! # Memory Layout
//!
//! ```text
//!          ┌─────────────────────────────────────────────────────────────────────┐
//!          ↓                                                     (Ghost) Node N  │
//!    ╔═══════════╗           ╔═══════════╗                        ┌───────────┐  │
//!    ║   next    ║ ────────→ ║   next    ║ ────────→ ┄┄ ────────→ │   next    │ ─┘
//!    ╟───────────╢           ╟───────────╢     Node 2, 3, ...     ├───────────┤
//! ┌─ ║   prev    ║ ←──────── ║   prev    ║ ←──────── ┄┄ ←──────── │   prev    │
//! │  ╟───────────╢           ╟───────────╢                        ├───────────┤
//! │  ║ payload T ║           ║ payload T ║                        ┊No payload ┊
//! │  ╚═══════════╝           ╚═══════════╝                        └╌╌╌╌╌╌╌╌╌╌╌┘
//! │      Node 0                  Node 1                               ↑   ↑
//! └───────────────────────────────────────────────────────────────────┘   │
//! ╔═══════════╗                                                           │
//! ║   ghost   ║ ──────────────────────────────────────────────────────────┘
//! ╟───────────╢
//! ║    len    ║
//! ╚═══════════╝
//!     List
//! ```
//!
//! The ghost node is allocated once per list, so moving a `List` value is
//! *O*(1) and never invalidates the links. In a list with length *n*, the
//! nodes are indexed by 0, 1, ..., *n* - 1, and the ghost node is always
//! indexed by *n*.
//!
//! # Positions and Errors
//!
//! Positions are plain indices into the list, and ranges are Rust ranges of
//! positions. Operations that can be misused return a [`Result`] with an
//! [`Error`], and leave the list untouched when they fail:
//!
//! ```
//! use splice_list::{list, Error, List};
//!
//! let mut list: List<i32> = list![1, 2, 3];
//! assert_eq!(list.remove(3), Err(Error::OutOfRange { index: 3, len: 3 }));
//! assert_eq!(list.erase_range(2..1), Err(Error::InvalidRange { start: 2, end: 1 }));
//! assert_eq!(List::<i32>::new().try_pop_front(), Err(Error::Empty));
//! assert_eq!(list.len(), 3);
//! ```
//!
//! # Cursors
//!
//! [`Cursor`] and [`CursorMut`] reference one node of a list, move in both
//! directions, and pass through the ghost node cyclically. A [`CursorMut`]
//! edits the list around itself:
//! - [`insert`]: insert a new item before the cursor;
//! - [`remove`]: remove the item at the cursor;
//! - [`backspace`]: remove the item before the cursor;
//! - [`split`]: split the list into a new one, from the cursor position to the end;
//! - [`splice`]: splice another list before the cursor position;
//!
//! # Algorithms
//!
//! [`merge`](List::merge), [`sort`](List::sort), [`reverse`](List::reverse),
//! [`unique`](List::unique) and [`remove_if`](List::remove_if) all work by
//! relinking nodes.
//!
//! ```
//! use splice_list::list;
//!
//! let mut list = list![3, 1, 3, 2, 2];
//! list.sort();
//! assert_eq!(list.unique(), 2);
//!
//! let mut evens = list![0, 2, 4];
//! list.merge(&mut evens);
//! assert_eq!(list, list![0, 1, 2, 2, 3, 4]);
//!
//! list.reverse();
//! assert_eq!(list.remove_if(|x| x % 2 == 0), 4);
//! assert_eq!(list, list![3, 1]);
//! ```
//!
//! # Features
//!
//! - `check-links`: keep the link consistency assertions of the node
//!   primitives in release builds. They always run with `debug_assertions`.
//!
//! [`List`]: crate::List
//! [`Cursor`]: crate::list::cursor::Cursor
//! [`CursorMut`]: crate::list::cursor::CursorMut
//! [`insert`]: crate::list::cursor::CursorMut::insert
//! [`remove`]: crate::list::cursor::CursorMut::remove
//! [`backspace`]: crate::list::cursor::CursorMut::backspace
//! [`split`]: crate::list::cursor::CursorMut::split
//! [`splice`]: crate::list::cursor::CursorMut::splice

#[doc(inline)]
pub use error::{Error, Result};
#[doc(inline)]
pub use list::iterator::{IntoIter, Iter, IterMut};
#[doc(inline)]
pub use list::List;

pub mod error;
pub mod list;

/// Creates a [`List`] containing the arguments, like `vec!`.
///
/// # Examples
///
/// ```
/// use splice_list::{list, List};
///
/// let list = list![1, 2, 3];
/// assert_eq!(list, List::from([1, 2, 3]));
///
/// let list = list!["x"; 2];
/// assert_eq!(list, List::from(["x", "x"]));
///
/// let list: List<u8> = list![];
/// assert!(list.is_empty());
/// ```
#[macro_export]
macro_rules! list {
    () => {
        $crate::List::new()
    };
    ($elem:expr; $n:expr) => {
        $crate::List::from_elem($elem, $n)
    };
    ($($x:expr),+ $(,)?) => {
        $crate::List::from([$($x),+])
    };
}
