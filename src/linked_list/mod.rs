//! A singly linked list with a before-begin anchor.
//!
//! The list owns every node it links. Nodes are kept in an arena inside the list and
//! addressed by generation-checked ids, so a [`Position`] handed out by the list can be
//! copied freely and outlive mutations without ever dangling: using a position whose node
//! has been removed is reported as an [`Error`] rather than reading freed storage.
//!
//! Insertion and removal happen *after* a position, so the list exposes a sentinel
//! [`before_begin`](LinkedList::before_begin) position that sits in front of the first
//! element.
//!
//! # Examples
//!
//! ```
//! use single_linked_list::linked_list::{ForwardCursor, LinkedList};
//!
//! let mut list = LinkedList::new();
//! list.push_front(3);
//! list.push_front(2);
//! list.push_front(1);
//! assert!(list.iter().eq([1, 2, 3].iter()));
//!
//! let zero = list.insert_after(list.before_begin(), 0).unwrap();
//! assert_eq!(list.get(zero), Ok(&0));
//! assert!(list.iter().eq([0, 1, 2, 3].iter()));
//!
//! list.erase_after(list.before_begin()).unwrap();
//! assert!(list.iter().eq([1, 2, 3].iter()));
//!
//! let mut cursor = list.cursor_front();
//! assert_eq!(cursor.current(), Ok(&1));
//! cursor.move_next().unwrap();
//! assert_eq!(cursor.current(), Ok(&2));
//! ```

mod error;
mod impls;
mod node;
mod position;
mod traits;

pub mod cursor;
pub mod iter;
pub mod list;

#[cfg(test)]
mod tests;

pub use cursor::{Cursor, CursorMut};
pub use error::{Error, Result};
pub use impls::swap;
pub use iter::{IntoIter, Iter, IterMut};
pub use list::LinkedList;
pub use position::Position;
pub use traits::ForwardCursor;
