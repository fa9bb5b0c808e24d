//! Persistent index-addressed vectors over a shallow mixed-radix trie.
//!
//! Every update returns a new [`Vector`] without mutating any node reachable
//! from a previously returned handle: only the nodes on the root-to-index
//! path are rebuilt, and every other subtree is shared by reference. This
//! makes historical versions free to keep around and safe to read from any
//! thread.
//!
//! ## Features
//!
//! - **O(1) versioning**: cloning a handle shares the entire tree
//! - **Copy-on-write updates**: at most `D` node constructions per
//!   `put`/`push`, independent of the vector's size
//! - **Sparse indices**: `put` past the end leaves holes that read back as
//!   not set, never as errors
//! - **Variable-depth paths**: an index whose digit path is a prefix of a
//!   longer one stores its value on the interior node itself
//!
//! ## Example
//!
//! ```rust
//! use pvec::Vector;
//!
//! let v0: Vector<&str> = Vector::new();
//! let v1 = v0.put(0, "A").unwrap();
//! let v2 = v1.put(103, "X").unwrap();
//!
//! assert_eq!(v2.get(0), Ok(Some(&"A")));
//! assert_eq!(v2.get(103), Ok(Some(&"X")));
//! assert_eq!(v2.get(50), Ok(None)); // sparse hole
//! assert_eq!(v2.len(), 104);
//!
//! // v1 is untouched by the update derived from it
//! assert_eq!(v1.len(), 1);
//! assert_eq!(v1.get(0), Ok(Some(&"A")));
//! ```

mod digits;
pub mod dump;
pub mod error;
mod node;
pub mod stats;
pub mod vector;

pub use dump::TreeDump;
pub use error::IndexError;
pub use stats::TreeStats;
pub use vector::{Probe, Vector};
