//! Minimum spanning trees.
//!
//! Both algorithms work on the underlying undirected graph: an arc of a directed
//! graph connects its endpoints in either direction. Self-loops can never join two
//! components and are ignored.
//!
//! # Algorithms
//!
//! - [`kruskal`] - Sort all edges once, accept each one that joins two components
//!   of a [`DisjointSet`]
//! - [`prim`] - Grow one tree from a start vertex, always attaching the vertex with
//!   the cheapest connecting edge, using [`BinaryMinHeap`] with lazy deletion
//!
//! Weights may be negative. Weights that cannot be ordered (NaN) are rejected, as
//! is a tree whose total weight leaves the weight type's range.

use std::cmp::Ordering;

use log::debug;
use num_traits::Zero;

use crate::{
    disjoint_set::DisjointSet,
    graph::{NodeId, Weight, WeightedSuccessors},
    heap::BinaryMinHeap,
    Error, Result,
};

/// The edges of a spanning tree and their total weight.
///
/// `N` is the vertex representation: [`NodeId`] from the index-level functions in
/// this module, the caller's key from the methods on [`Graph`](crate::Graph).
#[derive(Debug, Clone, PartialEq)]
pub struct SpanningTree<N, W> {
    /// Tree edges as `(u, v, weight)`, in the order they were selected
    pub edges: Vec<(N, N, W)>,
    /// Sum of all edge weights
    pub total_weight: W,
}

impl<N, W> SpanningTree<N, W> {
    /// Converts the vertex representation of every edge.
    pub fn map_vertices<M>(self, mut f: impl FnMut(N) -> M) -> SpanningTree<M, W> {
        SpanningTree {
            edges: self
                .edges
                .into_iter()
                .map(|(u, v, weight)| (f(u), f(v), weight))
                .collect(),
            total_weight: self.total_weight,
        }
    }

    /// Returns `true` if the tree contains an edge between `a` and `b`, in either
    /// orientation.
    #[must_use]
    pub fn contains_edge(&self, a: &N, b: &N) -> bool
    where
        N: PartialEq,
    {
        self.edges
            .iter()
            .any(|(u, v, _)| (u == a && v == b) || (u == b && v == a))
    }
}

fn check_comparable<G: WeightedSuccessors>(graph: &G) -> Result<()> {
    for source in graph.node_ids() {
        for (target, weight) in graph.weighted_successors(source) {
            if weight.partial_cmp(&weight).is_none() {
                return Err(Error::InvalidEdgeWeight(format!(
                    "{weight:?} on edge {source} -> {target} cannot be ordered"
                )));
            }
        }
    }
    Ok(())
}

fn add_to_total<W: Weight>(total: W, weight: W) -> Result<W> {
    total.checked_sum(weight).ok_or_else(|| {
        Error::InvalidEdgeWeight(format!(
            "spanning tree total overflows adding {weight:?} to {total:?}"
        ))
    })
}

/// Computes a minimum spanning tree with Kruskal's algorithm.
///
/// Every edge is collected once (an undirected edge from its lower-indexed
/// endpoint), sorted by weight with a stable sort so ties keep vertex then
/// adjacency order, and accepted if its endpoints are still in different sets.
/// Selection stops as soon as `V - 1` edges are accepted.
///
/// # Errors
///
/// - [`Error::EmptyStructure`] if the graph has no vertices
/// - [`Error::InvalidEdgeWeight`] if a weight cannot be ordered, or the total
///   weight leaves the weight type's range
/// - [`Error::DisconnectedGraph`] if the edges run out before the tree spans every
///   vertex; `reached` counts the vertices joined to the first vertex
///
/// # Complexity
///
/// - Time: O(E log E)
/// - Space: O(V + E)
///
/// # Examples
///
/// ```rust
/// use graphcore::{graph::algorithms::kruskal, WeightedGraph};
///
/// let mut graph: WeightedGraph<char, u32> = WeightedGraph::undirected();
/// let a = graph.add_vertex('A')?;
/// let b = graph.add_vertex('B')?;
/// let c = graph.add_vertex('C')?;
/// graph.add_edge(&'A', &'B', 3)?;
/// graph.add_edge(&'B', &'C', 1)?;
/// graph.add_edge(&'A', &'C', 2)?;
///
/// let tree = kruskal(&graph)?;
/// assert_eq!(tree.edges, vec![(b, c, 1), (a, c, 2)]);
/// assert_eq!(tree.total_weight, 3);
/// # Ok::<(), graphcore::Error>(())
/// ```
pub fn kruskal<G: WeightedSuccessors>(graph: &G) -> Result<SpanningTree<NodeId, G::Weight>> {
    let node_count = graph.node_count();
    if node_count == 0 {
        return Err(Error::EmptyStructure);
    }
    check_comparable(graph)?;

    let directed = graph.is_directed();
    let mut edges: Vec<(NodeId, NodeId, G::Weight)> = Vec::new();
    for source in graph.node_ids() {
        for (target, weight) in graph.weighted_successors(source) {
            if source == target || (!directed && target < source) {
                continue;
            }
            edges.push((source, target, weight));
        }
    }
    edges.sort_by(|a, b| a.2.partial_cmp(&b.2).unwrap_or(Ordering::Equal));

    let mut sets = DisjointSet::new(node_count);
    let mut tree = Vec::with_capacity(node_count - 1);
    let mut total_weight = G::Weight::zero();

    for (u, v, weight) in edges {
        if tree.len() == node_count - 1 {
            break;
        }
        if sets.union(u.index(), v.index()) {
            tree.push((u, v, weight));
            total_weight = add_to_total(total_weight, weight)?;
        }
    }

    if tree.len() < node_count - 1 {
        let reached = (0..node_count).filter(|&i| sets.connected(0, i)).count();
        return Err(Error::DisconnectedGraph {
            reached,
            total: node_count,
        });
    }

    debug!("kruskal selected {} edges, total {total_weight:?}", tree.len());
    Ok(SpanningTree {
        edges: tree,
        total_weight,
    })
}

/// Computes a minimum spanning tree with Prim's algorithm, growing from `start`.
///
/// Each vertex outside the tree keeps its cheapest known connecting edge. The heap
/// holds `(weight, vertex)` entries, so equal weights are extracted in
/// construction order; entries made stale by a cheaper edge are skipped when
/// popped. Tree edges are reported as `(parent, vertex, weight)` in the order the
/// vertices joined the tree.
///
/// # Errors
///
/// - [`Error::EmptyStructure`] if the graph has no vertices
/// - [`Error::MissingVertex`] if `start` is out of range
/// - [`Error::InvalidEdgeWeight`] if a weight cannot be ordered, or the total
///   weight leaves the weight type's range
/// - [`Error::DisconnectedGraph`] if some vertex cannot be reached from `start`
///
/// # Complexity
///
/// - Time: O(E log E)
/// - Space: O(V + E)
pub fn prim<G: WeightedSuccessors>(graph: &G, start: NodeId) -> Result<SpanningTree<NodeId, G::Weight>> {
    let node_count = graph.node_count();
    if node_count == 0 {
        return Err(Error::EmptyStructure);
    }
    if start.index() >= node_count {
        return Err(Error::MissingVertex(start.to_string()));
    }
    check_comparable(graph)?;

    // Undirected view of the graph
    let directed = graph.is_directed();
    let mut adjacency: Vec<Vec<(NodeId, G::Weight)>> = vec![Vec::new(); node_count];
    for source in graph.node_ids() {
        for (target, weight) in graph.weighted_successors(source) {
            if source == target {
                continue;
            }
            adjacency[source.index()].push((target, weight));
            if directed {
                adjacency[target.index()].push((source, weight));
            }
        }
    }

    let mut in_tree = vec![false; node_count];
    let mut best: Vec<Option<G::Weight>> = vec![None; node_count];
    let mut parent: Vec<Option<NodeId>> = vec![None; node_count];
    let mut heap = BinaryMinHeap::with_capacity(node_count);

    let mut tree = Vec::with_capacity(node_count - 1);
    let mut total_weight = G::Weight::zero();
    let mut reached = 0;

    best[start.index()] = Some(G::Weight::zero());
    heap.insert((G::Weight::zero(), start));

    while let Ok((weight, node)) = heap.delete_min() {
        if in_tree[node.index()] {
            continue;
        }
        in_tree[node.index()] = true;
        reached += 1;

        if let Some(from) = parent[node.index()] {
            tree.push((from, node, weight));
            total_weight = add_to_total(total_weight, weight)?;
        }

        for &(next, edge_weight) in &adjacency[node.index()] {
            if in_tree[next.index()] {
                continue;
            }
            let cheaper = best[next.index()].map_or(true, |current| edge_weight < current);
            if cheaper {
                best[next.index()] = Some(edge_weight);
                parent[next.index()] = Some(node);
                heap.insert((edge_weight, next));
            }
        }
    }

    if reached < node_count {
        return Err(Error::DisconnectedGraph {
            reached,
            total: node_count,
        });
    }

    debug!("prim spanned {reached} vertices from {start}, total {total_weight:?}");
    Ok(SpanningTree {
        edges: tree,
        total_weight,
    })
}
