//! Positions bound to their list.
//!
//! [`Cursor`] reads, [`CursorMut`] may also change the list at its position. Both implement
//! [`ForwardCursor`], and cursors of either kind compare equal when they sit on the same node.

use core::fmt;

use super::{
    error::Result,
    list::LinkedList,
    position::Position,
    traits::ForwardCursor,
};

/// A read-only cursor over a [`LinkedList`].
pub struct Cursor<'a, T> {
    list: &'a LinkedList<T>,
    position: Position,
}

impl<'a, T> Cursor<'a, T> {
    pub(crate) fn new(list: &'a LinkedList<T>, position: Position) -> Self {
        Cursor { list, position }
    }

    /// Post-increment returning the cursor as it was before the move.
    pub fn step(&mut self) -> Result<Self> {
        let old = *self;
        self.move_next()?;
        Ok(old)
    }

    /// Dereference with the lifetime of the list rather than of the cursor.
    pub fn get(&self) -> Result<&'a T> {
        self.list.get(self.position)
    }
}

impl<T> Clone for Cursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Cursor<'_, T> {}

impl<T> ForwardCursor for Cursor<'_, T> {
    type Item = T;

    fn position(&self) -> Position {
        self.position
    }

    fn move_next(&mut self) -> Result<&mut Self> {
        self.position = self.list.next_position(self.position)?;
        Ok(self)
    }

    fn current(&self) -> Result<&T> {
        self.get()
    }
}

impl<T: fmt::Debug> fmt::Debug for Cursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("position", &self.position)
            .field("current", &self.current().ok())
            .finish()
    }
}

/// A cursor that can modify the [`LinkedList`] it borrows.
pub struct CursorMut<'a, T> {
    list: &'a mut LinkedList<T>,
    position: Position,
}

impl<'a, T> CursorMut<'a, T> {
    pub(crate) fn new(list: &'a mut LinkedList<T>, position: Position) -> Self {
        CursorMut { list, position }
    }

    /// Mutable dereference.
    pub fn current_mut(&mut self) -> Result<&mut T> {
        self.list.get_mut(self.position)
    }

    /// Inserts `value` after the cursor and returns its position. The cursor stays put.
    pub fn insert_after(&mut self, value: T) -> Result<Position> {
        self.list.insert_after(self.position, value)
    }

    /// Removes the element after the cursor and returns the position now following it.
    /// The cursor stays put.
    pub fn erase_after(&mut self) -> Result<Position> {
        self.list.erase_after(self.position)
    }

    /// A read-only view of this cursor.
    pub fn as_cursor(&self) -> Cursor<'_, T> {
        Cursor::new(&*self.list, self.position)
    }
}

impl<T> ForwardCursor for CursorMut<'_, T> {
    type Item = T;

    fn position(&self) -> Position {
        self.position
    }

    fn move_next(&mut self) -> Result<&mut Self> {
        self.position = self.list.next_position(self.position)?;
        Ok(self)
    }

    fn current(&self) -> Result<&T> {
        self.list.get(self.position)
    }
}

impl<T: fmt::Debug> fmt::Debug for CursorMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CursorMut")
            .field("position", &self.position)
            .field("current", &self.current().ok())
            .finish()
    }
}

impl<T> PartialEq for Cursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.position == other.position
    }
}

impl<T> Eq for Cursor<'_, T> {}

impl<T> PartialEq for CursorMut<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.position == other.position
    }
}

impl<T> Eq for CursorMut<'_, T> {}

impl<T> PartialEq<CursorMut<'_, T>> for Cursor<'_, T> {
    fn eq(&self, other: &CursorMut<'_, T>) -> bool {
        self.position == other.position
    }
}

impl<T> PartialEq<Cursor<'_, T>> for CursorMut<'_, T> {
    fn eq(&self, other: &Cursor<'_, T>) -> bool {
        self.position == other.position
    }
}

impl<T> PartialEq<Position> for Cursor<'_, T> {
    fn eq(&self, other: &Position) -> bool {
        self.position == *other
    }
}

impl<T> PartialEq<Position> for CursorMut<'_, T> {
    fn eq(&self, other: &Position) -> bool {
        self.position == *other
    }
}
