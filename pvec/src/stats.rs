//! Structural statistics for vector trees.
//!
//! One read-only traversal over the node DAG. Useful for:
//! - verifying structural sharing between versions in tests
//! - understanding how sparse puts shape the tree
//! - sizing intuition in the demo driver

use std::sync::Arc;

use crate::node::{Node, Slot};
use crate::vector::Vector;

/// Aggregate structure counts for one vector version.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TreeStats {
    /// Nodes reachable from the root, the root included.
    pub node_count: usize,
    /// Stored values: tagged value slots plus node own values.
    pub value_count: usize,
    /// Allocated slots across all nodes.
    pub allocated_slots: usize,
    /// Allocated slots tagged as branches.
    pub branch_slots: usize,
    /// Allocated slots holding nothing.
    pub empty_slots: usize,
    /// Nodes also referenced from outside this version (`Arc` strong count
    /// above one), i.e. structure shared with other handles.
    pub shared_nodes: usize,
    /// Longest root-to-node path, in edges.
    pub max_depth: usize,
}

impl<T, const B: usize, const D: usize> Vector<T, B, D> {
    /// Gather structure counts with a read-only traversal.
    pub fn stats(&self) -> TreeStats {
        let mut stats = TreeStats::default();
        collect(&self.root, 0, &mut stats);
        stats
    }
}

fn collect<T, const B: usize, const D: usize>(
    node: &Arc<Node<T, B, D>>,
    depth: usize,
    stats: &mut TreeStats,
) {
    stats.node_count += 1;
    stats.max_depth = stats.max_depth.max(depth);
    if Arc::strong_count(node) > 1 {
        stats.shared_nodes += 1;
    }
    if node.own_value.is_some() {
        stats.value_count += 1;
    }
    stats.allocated_slots += node.slot_count();
    for slot in node.slots.iter() {
        match slot {
            Slot::Branch(child) => {
                stats.branch_slots += 1;
                collect(child, depth + 1, stats);
            }
            Slot::Value(_) => stats.value_count += 1,
            Slot::Empty => stats.empty_slots += 1,
        }
    }
}
