#![no_std]

extern crate alloc;
#[cfg(test)]
extern crate std;

pub mod linked_list;

pub use linked_list::{Cursor, CursorMut, Error, ForwardCursor, LinkedList, Position, Result, swap};
