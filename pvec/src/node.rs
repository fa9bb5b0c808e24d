//! Tree nodes and the tagged slot model.
//!
//! A node is an optional value stored at the node itself plus up to `B`
//! tagged slots. Nodes are immutable once published: every constructor here
//! produces a fresh node, and the put engine only ever mutates copies it has
//! just made.

use std::sync::Arc;

use imbl_sized_chunks::Chunk;

/// A single child position in a node.
///
/// Slots introduced by growth start out [`Slot::Empty`]; the put engine tags
/// them as values or branches before the containing node is published.
#[derive(Debug, Clone)]
pub(crate) enum Slot<T, const B: usize, const D: usize> {
    Empty,
    Value(T),
    Branch(Arc<Node<T, B, D>>),
}

/// A trie node.
///
/// `own_value` holds the value of the index whose digit path terminates
/// exactly at this node, distinct from the values held in its slots. It is
/// populated when the node is created (possibly by promoting a shorter
/// index's value during a value-to-branch slot promotion) and never changes
/// afterwards; "updating" it means building a replacement node.
#[derive(Debug, Clone)]
pub(crate) struct Node<T, const B: usize, const D: usize> {
    pub(crate) own_value: Option<T>,
    pub(crate) slots: Chunk<Slot<T, B, D>, B>,
}

impl<T, const B: usize, const D: usize> Node<T, B, D> {
    /// Root of the empty vector: no slots, no own value.
    pub(crate) fn empty() -> Self {
        Self {
            own_value: None,
            slots: Chunk::new(),
        }
    }

    /// Fresh node with `slot_count` empty slots.
    pub(crate) fn with_slots(slot_count: usize, own_value: Option<T>) -> Self {
        debug_assert!(slot_count <= B);
        let mut slots = Chunk::new();
        for _ in 0..slot_count {
            slots.push_back(Slot::Empty);
        }
        Self { own_value, slots }
    }

    pub(crate) fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Extend an unpublished copy with empty slots up to `slot_count`.
    ///
    /// This is the growing half of the copy constructors: callers clone an
    /// existing node first and tag the newly introduced slots before the
    /// node is published.
    pub(crate) fn grow_to(&mut self, slot_count: usize) {
        debug_assert!(slot_count <= B);
        while self.slots.len() < slot_count {
            self.slots.push_back(Slot::Empty);
        }
    }
}

impl<T: Clone, const B: usize, const D: usize> Node<T, B, D> {
    /// Shape-preserving copy with the own value replaced.
    ///
    /// Children keep being shared; only this node is duplicated.
    pub(crate) fn copy_with_own_value(&self, value: T) -> Self {
        let mut copy = self.clone();
        copy.own_value = Some(value);
        copy
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_slots_zero_fills() {
        let node: Node<u32, 3, 10> = Node::with_slots(3, Some(7));
        assert_eq!(node.slot_count(), 3);
        assert_eq!(node.own_value, Some(7));
        assert!(node.slots.iter().all(|s| matches!(s, Slot::Empty)));
    }

    #[test]
    fn grow_keeps_existing_slots() {
        let mut node: Node<u32, 3, 10> = Node::with_slots(1, None);
        node.slots[0] = Slot::Value(42);
        node.grow_to(3);
        assert_eq!(node.slot_count(), 3);
        assert!(matches!(node.slots[0], Slot::Value(42)));
        assert!(matches!(node.slots[1], Slot::Empty));
        assert!(matches!(node.slots[2], Slot::Empty));
    }

    #[test]
    fn copy_with_own_value_shares_children() {
        let child = Arc::new(Node::<u32, 3, 10>::with_slots(2, Some(1)));
        let mut node: Node<u32, 3, 10> = Node::with_slots(1, None);
        node.slots[0] = Slot::Branch(Arc::clone(&child));

        let copy = node.copy_with_own_value(9);
        assert_eq!(copy.own_value, Some(9));
        assert_eq!(node.own_value, None);
        let Slot::Branch(copied_child) = &copy.slots[0] else {
            panic!("slot tag changed");
        };
        assert!(Arc::ptr_eq(copied_child, &child));
    }
}
