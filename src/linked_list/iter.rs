use core::{iter::FusedIterator, marker::PhantomData};

use super::{
    list::{Chain, LinkedList},
    node::{self, NodeArena, NodeId, Slot},
    traits::Link,
};

/// An iterator over shared references to the elements of a [`LinkedList`].
pub struct Iter<'a, T> {
    nodes: &'a NodeArena<T>,
    current: Option<NodeId>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(chain: &'a Chain<T>) -> Self {
        Self {
            nodes: &chain.nodes,
            current: chain.head.next(),
            remaining: chain.len,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.nodes.get(self.current?)?;
        self.current = node.next();
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes,
            current: self.current,
            remaining: self.remaining,
        }
    }
}

/// An iterator over mutable references to the elements of a [`LinkedList`].
pub struct IterMut<'a, T> {
    slots: *mut Slot<T>,
    slot_count: usize,
    current: Option<NodeId>,
    remaining: usize,
    _marker: PhantomData<&'a mut T>,
}

impl<'a, T> IterMut<'a, T> {
    pub(crate) fn new(chain: &'a mut Chain<T>) -> Self {
        let (slots, slot_count) = chain.nodes.raw_slots();
        Self {
            slots,
            slot_count,
            current: chain.head.next(),
            remaining: chain.len,
            _marker: PhantomData,
        }
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        // SAFETY: the chain is exclusively borrowed for 'a and never visits a node twice,
        // so every reference handed out points at a distinct slot.
        let node = unsafe { node::node_at(self.slots, self.slot_count, self.current?) }?;
        self.current = node.next();
        self.remaining -= 1;
        Some(&mut node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}

impl<T> FusedIterator for IterMut<'_, T> {}

unsafe impl<T: Send> Send for IterMut<'_, T> {}
unsafe impl<T: Sync> Sync for IterMut<'_, T> {}

/// An owning iterator over the elements of a [`LinkedList`], front to back.
pub struct IntoIter<T> {
    list: LinkedList<T>,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(list: LinkedList<T>) -> Self {
        Self { list }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.list.pop_front().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len(), Some(self.list.len()))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}
