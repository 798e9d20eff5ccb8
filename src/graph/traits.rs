//! Trait definitions for graph abstractions.
//!
//! The index-level algorithms in [`crate::graph::algorithms`] are written against
//! these traits instead of a concrete graph type, so any structure that can report
//! its vertices and adjacency can reuse them.
//!
//! # Architecture
//!
//! - [`GraphBase`] - Vertex count, vertex iteration and directedness
//! - [`Successors`] - Forward adjacency (outgoing arcs)
//! - [`Predecessors`] - Backward adjacency (incoming arcs)
//! - [`WeightedSuccessors`] - Forward adjacency annotated with edge weights
//! - [`Weight`] - Numeric edge payloads accepted by the weighted algorithms
//!
//! For undirected graphs every edge is visible in both directions through
//! [`Successors`], and [`Predecessors`] reports the same neighbors.

use std::fmt::Debug;

use num_traits::{CheckedAdd, Zero};

use crate::graph::NodeId;

/// Base trait providing core graph properties.
pub trait GraphBase {
    /// Returns the number of vertices in the graph.
    fn node_count(&self) -> usize;

    /// Returns an iterator over all vertex identifiers, in construction order.
    fn node_ids(&self) -> impl Iterator<Item = NodeId>;

    /// Returns `true` if edges only run from source to target.
    fn is_directed(&self) -> bool;
}

/// Trait for graphs that support forward edge traversal.
///
/// # Examples
///
/// ```rust
/// use graphcore::{Graph, NodeId, Successors};
///
/// let mut graph: Graph<char> = Graph::directed();
/// let a = graph.add_vertex('A')?;
/// let b = graph.add_vertex('B')?;
/// let c = graph.add_vertex('C')?;
/// graph.add_edge(&'A', &'B', ())?;
/// graph.add_edge(&'A', &'C', ())?;
///
/// let successors: Vec<NodeId> = graph.successors(a).collect();
/// assert_eq!(successors, vec![b, c]);
/// # Ok::<(), graphcore::Error>(())
/// ```
pub trait Successors: GraphBase {
    /// Returns an iterator over the successors of `node`, in adjacency insertion order.
    ///
    /// # Panics
    ///
    /// May panic if `node` is not a valid vertex in the graph.
    fn successors(&self, node: NodeId) -> impl Iterator<Item = NodeId>;
}

/// Trait for graphs that support backward edge traversal.
pub trait Predecessors: GraphBase {
    /// Returns an iterator over the vertices with an arc into `node`.
    ///
    /// # Panics
    ///
    /// May panic if `node` is not a valid vertex in the graph.
    fn predecessors(&self, node: NodeId) -> impl Iterator<Item = NodeId>;
}

/// Trait for graphs whose edges carry a numeric weight.
pub trait WeightedSuccessors: Successors {
    /// The edge weight type.
    type Weight: Weight;

    /// Returns `(successor, weight)` pairs for `node`, in adjacency insertion order.
    ///
    /// # Panics
    ///
    /// May panic if `node` is not a valid vertex in the graph.
    fn weighted_successors(&self, node: NodeId) -> impl Iterator<Item = (NodeId, Self::Weight)>;
}

/// Numeric edge weight.
///
/// Implemented for all primitive integers and floats. Path lengths are accumulated
/// with [`Weight::checked_sum`] starting from [`Zero::zero`]; "infinity" is never
/// materialized, unreachable entries are reported as `None` instead.
pub trait Weight: Copy + PartialOrd + Zero + Debug {
    /// Returns `true` if the weight is `>= 0`.
    ///
    /// NaN is neither negative nor non-negative and yields `false`.
    #[inline]
    fn is_non_negative(&self) -> bool {
        *self >= Self::zero()
    }

    /// Adds two weights, returning `None` if the sum leaves the type's range.
    ///
    /// Floats never fail: an out-of-range sum becomes an infinity, which still
    /// compares above every finite weight.
    fn checked_sum(self, other: Self) -> Option<Self>;
}

/// Implements [`Weight`] for integer types through [`CheckedAdd`].
macro_rules! impl_integer_weight {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Weight for $ty {
                #[inline]
                fn checked_sum(self, other: Self) -> Option<Self> {
                    CheckedAdd::checked_add(&self, &other)
                }
            }
        )*
    };
}

impl_integer_weight!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

impl Weight for f32 {
    #[inline]
    fn checked_sum(self, other: Self) -> Option<Self> {
        Some(self + other)
    }
}

impl Weight for f64 {
    #[inline]
    fn checked_sum(self, other: Self) -> Option<Self> {
        Some(self + other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // A minimal edge-list graph to check the traits are usable without `Graph`
    struct EdgeList {
        node_count: usize,
        edges: Vec<(NodeId, NodeId, u32)>,
    }

    impl GraphBase for EdgeList {
        fn node_count(&self) -> usize {
            self.node_count
        }

        fn node_ids(&self) -> impl Iterator<Item = NodeId> {
            (0..self.node_count).map(NodeId::new)
        }

        fn is_directed(&self) -> bool {
            true
        }
    }

    impl Successors for EdgeList {
        fn successors(&self, node: NodeId) -> impl Iterator<Item = NodeId> {
            self.weighted_successors(node).map(|(target, _)| target)
        }
    }

    impl Predecessors for EdgeList {
        fn predecessors(&self, node: NodeId) -> impl Iterator<Item = NodeId> {
            self.edges
                .iter()
                .filter(move |(_, dst, _)| *dst == node)
                .map(|(src, _, _)| *src)
        }
    }

    impl WeightedSuccessors for EdgeList {
        type Weight = u32;

        fn weighted_successors(&self, node: NodeId) -> impl Iterator<Item = (NodeId, u32)> {
            self.edges
                .iter()
                .filter(move |(src, _, _)| *src == node)
                .map(|(_, dst, w)| (*dst, *w))
        }
    }

    fn create_edge_list() -> EdgeList {
        EdgeList {
            node_count: 3,
            edges: vec![
                (NodeId::new(0), NodeId::new(1), 5),
                (NodeId::new(0), NodeId::new(2), 7),
                (NodeId::new(1), NodeId::new(2), 1),
            ],
        }
    }

    #[test]
    fn test_successors_and_predecessors() {
        let graph = create_edge_list();

        let succ: Vec<NodeId> = graph.successors(NodeId::new(0)).collect();
        assert_eq!(succ, vec![NodeId::new(1), NodeId::new(2)]);

        let pred: Vec<NodeId> = graph.predecessors(NodeId::new(2)).collect();
        assert_eq!(pred, vec![NodeId::new(0), NodeId::new(1)]);
    }

    #[test]
    fn test_weighted_successors() {
        let graph = create_edge_list();
        let weighted: Vec<(NodeId, u32)> = graph.weighted_successors(NodeId::new(0)).collect();
        assert_eq!(weighted, vec![(NodeId::new(1), 5), (NodeId::new(2), 7)]);
    }

    #[test]
    fn test_weight_sign() {
        assert!(0.0f64.is_non_negative());
        assert!(3i64.is_non_negative());
        assert!(!(-1i32).is_non_negative());
        assert!(!f64::NAN.is_non_negative());
        assert!(7u8.is_non_negative());
    }

    #[test]
    fn test_weight_checked_sum() {
        assert_eq!(3u32.checked_sum(4), Some(7));
        assert_eq!(3_000_000_000u32.checked_sum(3_000_000_000), None);
        assert_eq!(i8::MIN.checked_sum(-1), None);
        assert_eq!((-5i64).checked_sum(2), Some(-3));
        assert_eq!(f64::MAX.checked_sum(f64::MAX), Some(f64::INFINITY));
        assert_eq!(1.5f32.checked_sum(0.25), Some(1.75));
    }
}
