//! The vector handle and the put/get engines.

use std::sync::Arc;

use log::trace;

use crate::digits::{tree_capacity, DigitPath};
use crate::error::IndexError;
use crate::node::{Node, Slot};

/// A persistent, index-addressed vector backed by a shallow mixed-radix trie.
///
/// Updates never mutate nodes reachable from an existing handle: `put` and
/// `push` rebuild only the nodes on the root-to-index path and share every
/// other subtree with the version they were derived from. Any number of
/// readers holding distinct (including historical) handles can read
/// concurrently without coordination.
///
/// ## Type parameters
///
/// - `T`: the element type. Reads need nothing of it; writes need
///   `T: Clone` because values sitting on the copied path are duplicated
///   into the new nodes. Use `T = Arc<U>` for cheap by-reference sharing.
/// - `B`: branching factor, `2..=256`.
/// - `D`: maximum digit-path depth; the highest representable index is
///   `B^D - 1` and operations beyond it are rejected explicitly.
///
/// ## Examples
///
/// ```rust
/// use pvec::Vector;
///
/// let v0: Vector<&str> = Vector::new();
/// let v1 = v0.put(0, "A").unwrap();
/// let v2 = v1.push("B").unwrap();
///
/// assert_eq!(v2.get(0), Ok(Some(&"A")));
/// assert_eq!(v2.get(1), Ok(Some(&"B")));
/// assert_eq!(v2.len(), 2);
/// assert_eq!(v1.len(), 1);
/// ```
#[derive(Debug)]
pub struct Vector<T, const B: usize = 3, const D: usize = 10> {
    pub(crate) root: Arc<Node<T, B, D>>,
    pub(crate) length: usize,
}

/// Raw structural outcome of resolving an index against the tree, before any
/// length-based classification.
///
/// [`Vector::get`] collapses everything but `Value` into "not set"; the
/// distinction stays observable here for diagnostics and tests.
#[derive(Debug, PartialEq, Eq)]
pub enum Probe<'a, T> {
    /// A value is stored at the index: either directly in a slot, or as the
    /// own value of the branch node the digit path ends on.
    Value(&'a T),
    /// The path resolves to an allocated position holding nothing: an empty
    /// slot, or a branch node without an own value.
    Hole,
    /// The slot position lies beyond what the ancestor node has allocated
    /// (or the index cannot be encoded at all).
    Unallocated,
    /// A value or empty slot was reached while digits remained: the stored
    /// structure is shallower than the index's digit path.
    PrematureEnd,
}

impl<T, const B: usize, const D: usize> Clone for Vector<T, B, D> {
    /// O(1): the new handle shares the entire tree with `self`.
    fn clone(&self) -> Self {
        Self {
            root: Arc::clone(&self.root),
            length: self.length,
        }
    }
}

impl<T, const B: usize, const D: usize> Default for Vector<T, B, D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const B: usize, const D: usize> Vector<T, B, D> {
    /// Highest representable index plus one, i.e. `B^D`.
    pub const CAPACITY: usize = tree_capacity(B, D);

    /// The zero-length vector: a root with no slots and no own value.
    pub fn new() -> Self {
        const {
            assert!(B >= 2, "branching factor must be at least 2");
            assert!(B <= 256, "digits are stored as u8, so B must be at most 256");
            assert!(D >= 1, "maximum depth must be at least 1");
        }
        Self {
            root: Arc::new(Node::empty()),
            length: 0,
        }
    }

    /// Length of the vector.
    ///
    /// An upper bound on the highest index ever assigned plus one: sparse
    /// `put` calls make it overcount, and the unwritten interior indices
    /// read back as not set. It never decreases across operations.
    pub fn len(&self) -> usize {
        self.length
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Read the value at `index`.
    ///
    /// `Ok(None)` is the *not set* outcome: the index is below [`len`] but
    /// was never written. Errors are reserved for indices the vector cannot
    /// hold ([`IndexError::Unrepresentable`]) or has not reached
    /// ([`IndexError::OutOfRange`]).
    ///
    /// [`len`]: Vector::len
    pub fn get(&self, index: usize) -> Result<Option<&T>, IndexError> {
        if index >= Self::CAPACITY {
            return Err(IndexError::Unrepresentable {
                index,
                max: Self::CAPACITY - 1,
            });
        }
        if index >= self.length {
            return Err(IndexError::OutOfRange {
                index,
                length: self.length,
            });
        }
        match self.probe(index) {
            Probe::Value(value) => Ok(Some(value)),
            Probe::Hole | Probe::Unallocated | Probe::PrematureEnd => Ok(None),
        }
    }

    /// Resolve `index` against the tree structure, ignoring the length.
    ///
    /// This is the raw inspection hook behind [`get`], the tree dump and the
    /// tests; it reports *why* an index has no value instead of collapsing
    /// the outcomes. Allocation-free.
    ///
    /// [`get`]: Vector::get
    pub fn probe(&self, index: usize) -> Probe<'_, T> {
        // Fast path: the index addresses a root slot directly.
        if index < B {
            return Self::resolve_final(&self.root, index);
        }

        let Ok(path) = DigitPath::<B, D>::encode(index) else {
            return Probe::Unallocated;
        };
        let digits = path.digits();
        let mut node = self.root.as_ref();
        for (pos, &digit) in digits.iter().enumerate() {
            let si = digit as usize;
            if pos + 1 == digits.len() {
                return Self::resolve_final(node, si);
            }
            if si >= node.slot_count() {
                return Probe::Unallocated;
            }
            match &node.slots[si] {
                Slot::Branch(child) => node = child.as_ref(),
                Slot::Value(_) | Slot::Empty => return Probe::PrematureEnd,
            }
        }
        unreachable!("digit paths are never empty")
    }

    /// Resolve the last digit of a path within `node`.
    ///
    /// A branch slot at the final position means the index's value lives in
    /// the child's own-value slot; this mirrors what the put engine writes.
    fn resolve_final(node: &Node<T, B, D>, si: usize) -> Probe<'_, T> {
        if si >= node.slot_count() {
            return Probe::Unallocated;
        }
        match &node.slots[si] {
            Slot::Branch(child) => match &child.own_value {
                Some(value) => Probe::Value(value),
                None => Probe::Hole,
            },
            Slot::Value(value) => Probe::Value(value),
            Slot::Empty => Probe::Hole,
        }
    }
}

impl<T: Clone, const B: usize, const D: usize> Vector<T, B, D> {
    /// Return a new vector with `value` stored at `index`.
    ///
    /// The input vector is untouched; the result shares every subtree off
    /// the root-to-index path with it. The result's length is
    /// `max(self.len(), index + 1)`; a put past the current end leaves a
    /// sparse gap that reads back as not set.
    pub fn put(&self, index: usize, value: T) -> Result<Self, IndexError> {
        if index >= Self::CAPACITY {
            return Err(IndexError::Unrepresentable {
                index,
                max: Self::CAPACITY - 1,
            });
        }
        let root = if index < B {
            self.put_root(index, value)
        } else {
            let path = DigitPath::<B, D>::encode(index)?;
            Self::put_digits(Some(&self.root), None, path.digits(), value)
        };
        Ok(Self {
            root: Arc::new(root),
            length: self.length.max(index + 1),
        })
    }

    /// Return a new vector with `value` appended at index `self.len()`.
    ///
    /// Rejected with [`IndexError::Unrepresentable`] once the vector holds
    /// `B^D` entries.
    pub fn push(&self, value: T) -> Result<Self, IndexError> {
        if self.length >= Self::CAPACITY {
            return Err(IndexError::Unrepresentable {
                index: self.length,
                max: Self::CAPACITY - 1,
            });
        }
        let root = if self.length < B && self.root.slot_count() == self.length {
            // Fast path: the next index lands exactly on the root's next
            // unallocated slot. Grow the copy by one and tag it, no digit
            // computation.
            let mut root = (*self.root).clone();
            root.slots.push_back(Slot::Value(value));
            root
        } else if self.length < B {
            self.put_root(self.length, value)
        } else {
            let path = DigitPath::<B, D>::encode(self.length)?;
            Self::put_digits(Some(&self.root), None, path.digits(), value)
        };
        Ok(Self {
            root: Arc::new(root),
            length: self.length + 1,
        })
    }

    /// Root fast path for `put`: `index` addresses a root slot directly, so
    /// the digit encoder is skipped entirely.
    fn put_root(&self, index: usize, value: T) -> Node<T, B, D> {
        debug_assert!(index < B);
        let mut root = (*self.root).clone();
        if index < root.slot_count() {
            let replacement = match &root.slots[index] {
                // Deeper structure already hangs here; the value for this
                // index belongs in the child's own-value slot.
                Slot::Branch(child) => {
                    Slot::Branch(Arc::new(child.copy_with_own_value(value)))
                }
                Slot::Value(_) => {
                    trace!("replacing value at index {index}");
                    Slot::Value(value)
                }
                Slot::Empty => Slot::Value(value),
            };
            root.slots[index] = replacement;
        } else {
            root.grow_to(index + 1);
            root.slots[index] = Slot::Value(value);
        }
        root
    }

    /// Deep put: consume the digit path most-significant-first, copying the
    /// node at each position and recursing into (or creating) the child for
    /// the next digit.
    ///
    /// `node` is the existing node at this path position, if any. `carried`
    /// is a value promoted out of the parent's slot and is only ever passed
    /// together with `node = None`; it becomes the own value of the node
    /// created here, so the shorter index keeps its value across the
    /// promotion.
    fn put_digits(
        node: Option<&Node<T, B, D>>,
        carried: Option<T>,
        digits: &[u8],
        value: T,
    ) -> Node<T, B, D> {
        let (&digit, rest) = digits.split_first().expect("digit paths are never empty");
        let si = digit as usize;

        let mut new = match node {
            Some(existing) => {
                let mut copy = existing.clone();
                copy.grow_to(si + 1);
                copy
            }
            None => Node::with_slots(si + 1, carried),
        };

        let slot = if rest.is_empty() {
            match &new.slots[si] {
                // The path ends where deeper structure already hangs; write
                // into the child's own-value slot and keep its subtree.
                Slot::Branch(child) => {
                    Slot::Branch(Arc::new(child.copy_with_own_value(value)))
                }
                Slot::Value(_) => {
                    trace!("replacing value at slot {si}");
                    Slot::Value(value)
                }
                Slot::Empty => Slot::Value(value),
            }
        } else {
            let child = match &new.slots[si] {
                Slot::Branch(child) => Self::put_digits(Some(child.as_ref()), None, rest, value),
                // Promotion: this slot's value moves into the own-value of
                // the branch node that replaces it.
                Slot::Value(old) => Self::put_digits(None, Some(old.clone()), rest, value),
                Slot::Empty => Self::put_digits(None, None, rest, value),
            };
            Slot::Branch(Arc::new(child))
        };
        new.slots[si] = slot;
        new
    }
}
