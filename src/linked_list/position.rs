use core::sync::atomic::{AtomicUsize, Ordering};

use super::node::NodeId;

/// Identity of a list anchor or of a node chain. Chain ids travel through `swap`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct ListId(usize);

impl ListId {
    pub(crate) fn fresh() -> Self {
        static NEXT: AtomicUsize = AtomicUsize::new(0);
        ListId(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

/// A non-owning reference to a place in a [`LinkedList`](super::LinkedList).
///
/// A position is either past the end, the before-begin anchor of a list, or a node of a
/// list. Positions are plain values: copying one never touches the list, and a position
/// stays valid to hold after its node is gone. Resolving such a position afterwards fails
/// with [`Error::StalePosition`](super::Error::StalePosition).
///
/// Two positions are equal iff they refer to the same node. Every past-the-end position is
/// equal to every other, and is also what [`Position::default`] returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    repr: Repr,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub(crate) enum Repr {
    #[default]
    End,
    BeforeBegin(ListId),
    Node(ListId, NodeId),
}

impl Position {
    /// The past-the-end position.
    pub const END: Position = Position { repr: Repr::End };

    pub(crate) fn before_begin(list: ListId) -> Self {
        Position {
            repr: Repr::BeforeBegin(list),
        }
    }

    pub(crate) fn node(list: ListId, node: NodeId) -> Self {
        Position {
            repr: Repr::Node(list, node),
        }
    }

    /// The position of `node`, or the end if there is none.
    pub(crate) fn from_link(list: ListId, node: Option<NodeId>) -> Self {
        node.map_or(Position::END, |node| Position::node(list, node))
    }

    pub(crate) fn repr(self) -> Repr {
        self.repr
    }

    /// Returns `true` for the past-the-end position.
    pub fn is_end(self) -> bool {
        self.repr == Repr::End
    }

    /// Returns `true` for a before-begin anchor.
    pub fn is_before_begin(self) -> bool {
        matches!(self.repr, Repr::BeforeBegin(_))
    }
}
