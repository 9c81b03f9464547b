use super::{
    cursor::{Cursor, CursorMut},
    error::{Error, Result},
    iter::{Iter, IterMut},
    node::{Node, NodeArena, NodeId},
    position::{ListId, Position, Repr},
    traits::Link,
};

/// The before-begin sentinel: the link to the first node, with no value of its own.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct Head {
    first: Option<NodeId>,
}

impl Link for Head {
    #[inline]
    fn next(&self) -> Option<NodeId> {
        self.first
    }

    #[inline]
    fn set_next(&mut self, next: Option<NodeId>) {
        self.first = next;
    }
}

/// A resolved position that something can be linked after.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Anchor {
    Head,
    Node(NodeId),
}

/// Everything `swap` exchanges: the node chain, its count and its identity.
#[derive(Debug)]
pub(crate) struct Chain<T> {
    pub(crate) head: Head,
    pub(crate) len: usize,
    pub(crate) nodes: NodeArena<T>,
    pub(crate) id: ListId,
}

impl<T> Chain<T> {
    fn new() -> Self {
        Chain {
            head: Head::default(),
            len: 0,
            nodes: NodeArena::new(),
            id: ListId::fresh(),
        }
    }
}

/// A singly linked list that owns its nodes.
///
/// Elements are reached through [`Position`]s, which the list hands out and resolves. A
/// position never keeps a node alive; operations given a position that does not satisfy
/// their precondition fail with an [`Error`] before changing anything.
pub struct LinkedList<T> {
    /// Identity of this list's before-begin anchor. Stays with the list through `swap`.
    pub(crate) id: ListId,
    pub(crate) chain: Chain<T>,
}

impl<T> LinkedList<T> {
    /// Creates a new, empty list.
    pub fn new() -> Self {
        LinkedList {
            id: ListId::fresh(),
            chain: Chain::new(),
        }
    }

    /// Number of elements in the list.
    #[inline]
    pub fn len(&self) -> usize {
        self.chain.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.chain.len == 0
    }

    /// Exchanges the contents of two lists in constant time.
    ///
    /// Positions follow the nodes they refer to into the other list; before-begin
    /// positions stay with their own list.
    pub fn swap(&mut self, other: &mut Self) {
        core::mem::swap(&mut self.chain, &mut other.chain);
    }

    /// Replaces the contents of the list with the values of `iter`.
    ///
    /// The new chain is built on its own and adopted only once complete, so if `iter` panics
    /// the list keeps its old contents.
    pub fn assign<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        let mut temp: LinkedList<T> = iter.into_iter().collect();
        self.swap(&mut temp);
    }

    /// The anchor in front of the first element. It can be inserted and erased after, and
    /// advanced, but never dereferenced.
    #[inline]
    pub fn before_begin(&self) -> Position {
        Position::before_begin(self.id)
    }

    /// Position of the first element, or the end if the list is empty.
    #[inline]
    pub fn begin(&self) -> Position {
        Position::from_link(self.chain.id, self.chain.head.next())
    }

    /// The past-the-end position.
    #[inline]
    pub fn end(&self) -> Position {
        Position::END
    }

    /// Returns the element at `pos`.
    pub fn get(&self, pos: Position) -> Result<&T> {
        match self.resolve(pos)? {
            Anchor::Head => Err(Error::BeforeBegin),
            Anchor::Node(id) => self
                .chain
                .nodes
                .get(id)
                .map(|node| &node.value)
                .ok_or(Error::StalePosition),
        }
    }

    /// Returns the element at `pos` mutably.
    pub fn get_mut(&mut self, pos: Position) -> Result<&mut T> {
        match self.resolve(pos)? {
            Anchor::Head => Err(Error::BeforeBegin),
            Anchor::Node(id) => self
                .chain
                .nodes
                .get_mut(id)
                .map(|node| &mut node.value)
                .ok_or(Error::StalePosition),
        }
    }

    /// The position following `pos`.
    pub fn next_position(&self, pos: Position) -> Result<Position> {
        let anchor = self.resolve(pos)?;
        Ok(Position::from_link(self.chain.id, self.link_of(anchor)))
    }

    pub fn front(&self) -> Option<&T> {
        let first = self.chain.head.next()?;
        self.chain.nodes.get(first).map(|node| &node.value)
    }

    pub fn front_mut(&mut self) -> Option<&mut T> {
        let first = self.chain.head.next()?;
        self.chain.nodes.get_mut(first).map(|node| &mut node.value)
    }

    /// Inserts `value` as the new first element.
    pub fn push_front(&mut self, value: T) {
        let id = self.chain.nodes.insert(Node::new(value, self.chain.head.next()));
        self.link_after(Anchor::Head, id);
    }

    /// Inserts `value` as the new first element, reporting allocation failure instead of
    /// aborting. On [`Error::AllocFailed`] the list is unchanged and `value` is dropped.
    pub fn try_push_front(&mut self, value: T) -> Result<()> {
        self.insert_after(self.before_begin(), value).map(|_| ())
    }

    /// Inserts `value` right after `pos` and returns the position of the new element.
    ///
    /// `pos` may be the before-begin anchor. Node storage is reserved before anything is
    /// linked: on [`Error::AllocFailed`] the list is unchanged and `value` is dropped.
    pub fn insert_after(&mut self, pos: Position, value: T) -> Result<Position> {
        let anchor = self.resolve(pos)?;
        let next = self.link_of(anchor);
        let id = self
            .chain
            .nodes
            .try_insert(Node::new(value, next))
            .map_err(Error::AllocFailed)?;
        self.link_after(anchor, id);
        Ok(Position::node(self.chain.id, id))
    }

    /// Removes the element right after `pos` and returns the position that now follows
    /// `pos`.
    pub fn erase_after(&mut self, pos: Position) -> Result<Position> {
        let anchor = self.resolve(pos)?;
        let removed = self.unlink_after(anchor).ok_or(Error::NoSuccessor)?;
        Ok(Position::from_link(self.chain.id, removed.next()))
    }

    /// Removes the first element and returns it.
    pub fn pop_front(&mut self) -> Result<T> {
        self.unlink_after(Anchor::Head)
            .map(|node| node.value)
            .ok_or(Error::Empty)
    }

    /// Removes every element and releases the node storage.
    pub fn clear(&mut self) {
        self.chain.head.set_next(None);
        self.chain.len = 0;
        self.chain.nodes.clear();
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.chain)
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(&mut self.chain)
    }

    /// A read-only cursor at `pos`. The position is checked when the cursor is used.
    pub fn cursor(&self, pos: Position) -> Cursor<'_, T> {
        Cursor::new(self, pos)
    }

    pub fn cursor_front(&self) -> Cursor<'_, T> {
        Cursor::new(self, self.begin())
    }

    pub fn cursor_before_begin(&self) -> Cursor<'_, T> {
        Cursor::new(self, self.before_begin())
    }

    /// A mutable cursor at `pos`. The position is checked when the cursor is used.
    pub fn cursor_mut(&mut self, pos: Position) -> CursorMut<'_, T> {
        CursorMut::new(self, pos)
    }

    pub fn cursor_front_mut(&mut self) -> CursorMut<'_, T> {
        let begin = self.begin();
        CursorMut::new(self, begin)
    }

    pub fn cursor_before_begin_mut(&mut self) -> CursorMut<'_, T> {
        let before_begin = self.before_begin();
        CursorMut::new(self, before_begin)
    }

    /// Checks that `pos` names the anchor or a live node of this list.
    pub(crate) fn resolve(&self, pos: Position) -> Result<Anchor> {
        match pos.repr() {
            Repr::End => Err(Error::PastTheEnd),
            Repr::BeforeBegin(list) if list == self.id => Ok(Anchor::Head),
            Repr::Node(chain, id) if chain == self.chain.id => {
                if self.chain.nodes.contains(id) {
                    Ok(Anchor::Node(id))
                } else {
                    Err(Error::StalePosition)
                }
            }
            Repr::BeforeBegin(_) | Repr::Node(..) => Err(Error::ForeignPosition),
        }
    }

    fn link_of(&self, anchor: Anchor) -> Option<NodeId> {
        match anchor {
            Anchor::Head => self.chain.head.next(),
            Anchor::Node(id) => self.chain.nodes.get(id).and_then(Link::next),
        }
    }

    fn replace_link(&mut self, anchor: Anchor, next: Option<NodeId>) -> Option<NodeId> {
        match anchor {
            Anchor::Head => self.chain.head.replace_next(next),
            Anchor::Node(id) => match self.chain.nodes.get_mut(id) {
                Some(node) => node.replace_next(next),
                None => unreachable!("resolved anchor {id:?} is not in the list"),
            },
        }
    }

    /// Links the already stored node `id` after `anchor`. The node's own link must already
    /// point at the anchor's old successor.
    fn link_after(&mut self, anchor: Anchor, id: NodeId) {
        let old = self.replace_link(anchor, Some(id));
        debug_assert_eq!(self.chain.nodes.get(id).and_then(Link::next), old);
        self.chain.len += 1;
    }

    /// Unlinks and frees the node after `anchor`, if there is one.
    fn unlink_after(&mut self, anchor: Anchor) -> Option<Node<T>> {
        let target = self.link_of(anchor)?;
        let removed = match self.chain.nodes.remove(target) {
            Some(node) => node,
            None => unreachable!("linked node {target:?} is not in the arena"),
        };
        self.replace_link(anchor, removed.next());
        self.chain.len -= 1;
        Some(removed)
    }

    /// Appends the values of `iter` to an empty list in order.
    pub(crate) fn fill<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        debug_assert!(self.is_empty());
        let mut tail = Anchor::Head;
        for value in iter {
            let id = self.chain.nodes.insert(Node::new(value, None));
            self.link_after(tail, id);
            tail = Anchor::Node(id);
        }
    }
}
