use alloc::collections::TryReserveError;
use alloc::vec::Vec;

use super::traits::Link;

/// Identifies a node inside one [`NodeArena`].
///
/// The generation distinguishes the current occupant of a slot from earlier ones, so an id
/// kept across a removal no longer resolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct NodeId {
    index: usize,
    generation: u32,
}

/// A value together with the ownership link to its successor.
#[derive(Debug)]
pub(crate) struct Node<T> {
    pub(crate) value: T,
    next: Option<NodeId>,
}

impl<T> Node<T> {
    pub(crate) fn new(value: T, next: Option<NodeId>) -> Self {
        Self { value, next }
    }
}

impl<T> Link for Node<T> {
    #[inline]
    fn next(&self) -> Option<NodeId> {
        self.next
    }

    #[inline]
    fn set_next(&mut self, next: Option<NodeId>) {
        self.next = next;
    }
}

#[derive(Debug)]
pub(crate) enum Slot<T> {
    Occupied { generation: u32, node: Node<T> },
    Vacant { generation: u32, next_free: Option<usize> },
}

impl<T> Slot<T> {
    fn generation(&self) -> u32 {
        match self {
            Slot::Occupied { generation, .. } | Slot::Vacant { generation, .. } => *generation,
        }
    }
}

/// Flat storage for the nodes of one list.
///
/// Vacated slots are threaded onto a free-list and reused before the arena grows.
#[derive(Debug)]
pub(crate) struct NodeArena<T> {
    slots: Vec<Slot<T>>,
    free: Option<usize>,
    /// Generation given to slots created from now on. Kept above every generation handed
    /// out earlier so that ids survive `clear` as stale rather than aliasing new nodes.
    fresh_generation: u32,
}

impl<T> NodeArena<T> {
    pub(crate) const fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: None,
            fresh_generation: 0,
        }
    }

    pub(crate) fn get(&self, id: NodeId) -> Option<&Node<T>> {
        match self.slots.get(id.index)? {
            Slot::Occupied { generation, node } if *generation == id.generation => Some(node),
            _ => None,
        }
    }

    pub(crate) fn get_mut(&mut self, id: NodeId) -> Option<&mut Node<T>> {
        match self.slots.get_mut(id.index)? {
            Slot::Occupied { generation, node } if *generation == id.generation => Some(node),
            _ => None,
        }
    }

    pub(crate) fn contains(&self, id: NodeId) -> bool {
        self.get(id).is_some()
    }

    /// Stores `node` and returns its id. Aborts on allocation failure like `Vec::push`.
    pub(crate) fn insert(&mut self, node: Node<T>) -> NodeId {
        match self.free {
            Some(index) => self.occupy(index, node),
            None => self.push_slot(node),
        }
    }

    /// Stores `node`, reporting allocation failure instead of aborting. On failure the
    /// arena is unchanged and the node is dropped.
    pub(crate) fn try_insert(&mut self, node: Node<T>) -> core::result::Result<NodeId, TryReserveError> {
        if let Some(index) = self.free {
            return Ok(self.occupy(index, node));
        }
        self.slots.try_reserve(1)?;
        Ok(self.push_slot(node))
    }

    /// Removes the node behind `id`, returning it if `id` was live.
    pub(crate) fn remove(&mut self, id: NodeId) -> Option<Node<T>> {
        if !self.contains(id) {
            return None;
        }
        let vacant = Slot::Vacant {
            generation: id.generation.wrapping_add(1),
            next_free: self.free,
        };
        match core::mem::replace(&mut self.slots[id.index], vacant) {
            Slot::Occupied { node, .. } => {
                self.free = Some(id.index);
                Some(node)
            }
            Slot::Vacant { .. } => unreachable!("slot checked as occupied"),
        }
    }

    /// Drops every node and releases the backing allocation.
    pub(crate) fn clear(&mut self) {
        let highest = self
            .slots
            .iter()
            .map(Slot::generation)
            .fold(self.fresh_generation, u32::max);
        self.fresh_generation = highest.wrapping_add(1);
        self.free = None;
        drop(core::mem::take(&mut self.slots));
    }

    /// Base pointer and length of the slot storage, for iterators that hand out disjoint
    /// mutable borrows.
    pub(crate) fn raw_slots(&mut self) -> (*mut Slot<T>, usize) {
        (self.slots.as_mut_ptr(), self.slots.len())
    }

    fn occupy(&mut self, index: usize, node: Node<T>) -> NodeId {
        let slot = &mut self.slots[index];
        let (generation, next_free) = match *slot {
            Slot::Vacant { generation, next_free } => (generation, next_free),
            Slot::Occupied { .. } => unreachable!("free-list points at an occupied slot"),
        };
        *slot = Slot::Occupied { generation, node };
        self.free = next_free;
        NodeId { index, generation }
    }

    fn push_slot(&mut self, node: Node<T>) -> NodeId {
        let index = self.slots.len();
        let generation = self.fresh_generation;
        self.slots.push(Slot::Occupied { generation, node });
        NodeId { index, generation }
    }
}

/// Resolves `id` against raw slot storage.
///
/// # Safety
///
/// `base` and `len` must come from [`NodeArena::raw_slots`] of an arena that is still
/// exclusively borrowed, and no other reference to the same slot may be alive while the
/// returned one is.
pub(crate) unsafe fn node_at<'a, T>(base: *mut Slot<T>, len: usize, id: NodeId) -> Option<&'a mut Node<T>> {
    if id.index >= len {
        return None;
    }
    match unsafe { &mut *base.add(id.index) } {
        Slot::Occupied { generation, node } if *generation == id.generation => Some(node),
        _ => None,
    }
}
