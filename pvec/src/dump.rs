//! Read-only diagnostic rendering of the tree structure.
//!
//! Purely an external collaborator: it consumes the raw structure and has no
//! effect on the algorithms. Own values and slot tags are printed per node,
//! with unallocated slot positions marked up to the branching factor.

use std::fmt;

use crate::node::{Node, Slot};
use crate::vector::Vector;

/// Displayable dump of a vector's tree, created by [`Vector::dump`].
pub struct TreeDump<'a, T, const B: usize, const D: usize> {
    vector: &'a Vector<T, B, D>,
}

impl<T, const B: usize, const D: usize> Vector<T, B, D> {
    /// Diagnostic tree dump; render it with `{}`.
    ///
    /// ```rust
    /// use pvec::Vector;
    ///
    /// let v: Vector<&str> = Vector::new().put(0, "A").unwrap();
    /// println!("{}", v.dump());
    /// ```
    pub fn dump(&self) -> TreeDump<'_, T, B, D> {
        TreeDump { vector: self }
    }
}

impl<T: fmt::Debug, const B: usize, const D: usize> fmt::Display for TreeDump<'_, T, B, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_node(f, &self.vector.root, 0)
    }
}

fn write_node<T: fmt::Debug, const B: usize, const D: usize>(
    f: &mut fmt::Formatter<'_>,
    node: &Node<T, B, D>,
    level: usize,
) -> fmt::Result {
    match &node.own_value {
        Some(value) => write!(f, "({value:?}")?,
        None => write!(f, "(-")?,
    }

    let indent = (level + 1) * 2;
    for (i, slot) in node.slots.iter().enumerate() {
        write!(f, "\n{:indent$}[{i}] = ", "")?;
        match slot {
            Slot::Branch(child) => write_node(f, child, level + 1)?,
            Slot::Value(value) => write!(f, "{value:?}")?,
            Slot::Empty => write!(f, "-")?,
        }
    }
    for i in node.slots.len()..B {
        write!(f, "\n{:indent$}[{i}] x", "")?;
    }

    write!(f, "\n{:outdent$})", "", outdent = level * 2)
}

#[cfg(test)]
mod tests {
    use crate::vector::Vector;

    #[test]
    fn renders_values_and_unallocated_slots() {
        let v: Vector<&str> = Vector::new().put(0, "A").unwrap();
        let out = v.dump().to_string();
        assert!(out.contains("[0] = \"A\""));
        assert!(out.contains("[1] x"));
        assert!(out.contains("[2] x"));
    }

    #[test]
    fn renders_branches_and_holes() {
        let v: Vector<&str> = Vector::new().put(4, "E").unwrap();
        let out = v.dump().to_string();
        // root slot 0 is an allocated hole, slot 1 a branch without own value
        assert!(out.contains("[0] = -"));
        assert!(out.contains("[1] = (-"));
        assert!(out.contains("[1] = \"E\""));
    }

    #[test]
    fn renders_promoted_own_value() {
        let v: Vector<&str> = Vector::new().put(1, "b").unwrap();
        let v = v.put(103, "X").unwrap();
        let out = v.dump().to_string();
        assert!(out.contains("(\"b\""));
        assert!(out.contains("\"X\""));
    }
}
