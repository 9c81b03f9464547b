use super::{error::Result, node::NodeId, position::Position};

/// Something that owns the link to a following node: either the head sentinel of a list
/// or a node in its chain.
pub(crate) trait Link {
    /// Get the next node in the chain
    fn next(&self) -> Option<NodeId>;

    /// Set the next node in the chain
    fn set_next(&mut self, next: Option<NodeId>);

    /// Replace the next link, returning the old one
    fn replace_next(&mut self, next: Option<NodeId>) -> Option<NodeId> {
        let old = self.next();
        self.set_next(next);
        old
    }
}

/// The forward traversal contract shared by [`Cursor`](super::Cursor) and
/// [`CursorMut`](super::CursorMut).
///
/// A cursor is a position plus a borrow of its list. Advancing or dereferencing a position
/// that cannot be advanced or dereferenced fails with an [`Error`](super::Error) and leaves
/// the cursor where it was.
pub trait ForwardCursor {
    /// The element type of the list.
    type Item;

    /// The position the cursor currently refers to.
    fn position(&self) -> Position;

    /// Pre-increment: move to the following position.
    ///
    /// Moving from the before-begin position yields the first element, or the end if the
    /// list is empty. Fails with [`Error::PastTheEnd`](super::Error::PastTheEnd) at the end.
    fn move_next(&mut self) -> Result<&mut Self>;

    /// Post-increment: move to the following position and return the one held before.
    fn advance(&mut self) -> Result<Position> {
        let old = self.position();
        self.move_next()?;
        Ok(old)
    }

    /// Dereference the cursor.
    fn current(&self) -> Result<&Self::Item>;

    /// Returns `true` if the cursor is past the end.
    fn is_end(&self) -> bool {
        self.position() == Position::END
    }
}
