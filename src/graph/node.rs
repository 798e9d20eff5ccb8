//! Dense vertex index used by the graph algorithms.
//!
//! Every vertex added to a [`Graph`](crate::Graph) receives the next [`NodeId`],
//! starting at 0. The index-level algorithms in [`crate::graph::algorithms`] work
//! exclusively on `NodeId`s; the key-level methods on `Graph` translate back to the
//! caller's keys.

use std::fmt;

/// A strongly-typed index of a vertex within one graph.
///
/// `NodeId` wraps a `usize`, preventing accidental mixing of vertex indices with
/// colors, distances or other integers. Indices follow construction order, so
/// iterating `0..vertex_count` visits vertices in the order they were added, which
/// is the order every deterministic algorithm in this crate relies on.
///
/// # Examples
///
/// ```rust
/// use graphcore::{Graph, NodeId};
///
/// let mut graph: Graph<&str> = Graph::directed();
/// let a = graph.add_vertex("A")?;
/// let b = graph.add_vertex("B")?;
///
/// assert_eq!(a, NodeId::new(0));
/// assert_eq!(b.index(), 1);
/// assert_eq!(graph.key(b), Some(&"B"));
/// # Ok::<(), graphcore::Error>(())
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Creates a new `NodeId` from a raw index value.
    ///
    /// Normal usage obtains `NodeId` values from [`Graph::add_vertex`](crate::Graph::add_vertex)
    /// or [`Graph::node_id`](crate::Graph::node_id).
    #[must_use]
    #[inline]
    pub const fn new(index: usize) -> Self {
        NodeId(index)
    }

    /// Returns the raw index value, usable to index per-vertex vectors.
    #[must_use]
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

impl From<usize> for NodeId {
    #[inline]
    fn from(index: usize) -> Self {
        NodeId(index)
    }
}

impl From<NodeId> for usize {
    #[inline]
    fn from(node: NodeId) -> Self {
        node.0
    }
}
