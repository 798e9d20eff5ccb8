//! Single-source shortest paths with Dijkstra's algorithm.
//!
//! The loop mirrors [`prim`](super::prim): extract the cheapest open vertex from a
//! [`BinaryMinHeap`], settle it, relax its outgoing edges. The value tracked per
//! vertex is the total distance from the source instead of the weight of one
//! connecting edge.
//!
//! Dijkstra's algorithm is only correct for non-negative weights, so [`dijkstra`]
//! checks every edge before doing any work. A relaxation whose distance would leave
//! the weight type's range is skipped, so a vertex reachable only through such
//! paths is reported as unreachable.

use log::debug;
use num_traits::Zero;

use crate::{
    graph::{NodeId, Weight, WeightedSuccessors},
    heap::BinaryMinHeap,
    Error, Result,
};

/// A path together with its total weight.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightedPath<N, W> {
    /// Vertices from source to target, both included
    pub vertices: Vec<N>,
    /// Sum of the edge weights along the path
    pub distance: W,
}

/// Distances and predecessor links produced by one Dijkstra run.
///
/// Only settled vertices report a distance. When the run stopped early at a
/// target, vertices farther away than the target are not settled and report
/// `None`, exactly like unreachable ones.
#[derive(Debug, Clone)]
pub struct ShortestPaths<W> {
    source: NodeId,
    distances: Vec<Option<W>>,
    previous: Vec<Option<NodeId>>,
    settled: Vec<bool>,
}

impl<W: Weight> ShortestPaths<W> {
    /// Returns the vertex the run started from.
    #[must_use]
    pub fn source(&self) -> NodeId {
        self.source
    }

    /// Returns the shortest distance from the source to `node`, if settled.
    #[must_use]
    pub fn distance(&self, node: NodeId) -> Option<W> {
        if *self.settled.get(node.index())? {
            self.distances[node.index()]
        } else {
            None
        }
    }

    /// Returns the shortest path from the source to `node`, if settled.
    #[must_use]
    pub fn path_to(&self, node: NodeId) -> Option<Vec<NodeId>> {
        if !*self.settled.get(node.index())? {
            return None;
        }

        let mut path = vec![node];
        let mut current = node;
        while let Some(prev) = self.previous[current.index()] {
            path.push(prev);
            current = prev;
        }
        path.reverse();
        Some(path)
    }

    /// Returns the number of settled vertices.
    #[must_use]
    pub fn settled_count(&self) -> usize {
        self.settled.iter().filter(|&&settled| settled).count()
    }
}

/// Returns the first edge whose weight is negative or NaN, in vertex then
/// adjacency order.
pub fn find_negative_edge<G: WeightedSuccessors>(graph: &G) -> Option<(NodeId, NodeId, G::Weight)> {
    graph.node_ids().find_map(|source| {
        graph
            .weighted_successors(source)
            .find(|(_, weight)| !weight.is_non_negative())
            .map(|(target, weight)| (source, target, weight))
    })
}

/// Runs Dijkstra's algorithm from `start`.
///
/// With `target` set, the run stops as soon as the target is settled; otherwise
/// every reachable vertex is settled. Ties between equal distances are broken by
/// construction order.
///
/// # Errors
///
/// - [`Error::MissingVertex`] if `start` or `target` is out of range
/// - [`Error::InvalidEdgeWeight`] if any edge weight is negative or NaN
///
/// # Complexity
///
/// - Time: O(E log E)
/// - Space: O(V + E)
///
/// # Examples
///
/// ```rust
/// use graphcore::{graph::algorithms::dijkstra, WeightedGraph};
///
/// let mut graph: WeightedGraph<&str, u32> = WeightedGraph::directed();
/// let a = graph.add_vertex("A")?;
/// let b = graph.add_vertex("B")?;
/// let c = graph.add_vertex("C")?;
/// graph.add_edge(&"A", &"B", 2)?;
/// graph.add_edge(&"B", &"C", 2)?;
/// graph.add_edge(&"A", &"C", 5)?;
///
/// let paths = dijkstra(&graph, a, None)?;
/// assert_eq!(paths.distance(c), Some(4));
/// assert_eq!(paths.path_to(c), Some(vec![a, b, c]));
/// # Ok::<(), graphcore::Error>(())
/// ```
pub fn dijkstra<G: WeightedSuccessors>(
    graph: &G,
    start: NodeId,
    target: Option<NodeId>,
) -> Result<ShortestPaths<G::Weight>> {
    let node_count = graph.node_count();
    for node in std::iter::once(start).chain(target) {
        if node.index() >= node_count {
            return Err(Error::MissingVertex(node.to_string()));
        }
    }

    if let Some((source, dest, weight)) = find_negative_edge(graph) {
        return Err(Error::InvalidEdgeWeight(format!(
            "{weight:?} on edge {source} -> {dest}"
        )));
    }

    Ok(dijkstra_unchecked(graph, start, target))
}

/// Dijkstra's algorithm without range or weight checks.
///
/// Callers must have validated `start` and rejected negative weights.
pub(crate) fn dijkstra_unchecked<G: WeightedSuccessors>(
    graph: &G,
    start: NodeId,
    target: Option<NodeId>,
) -> ShortestPaths<G::Weight> {
    let node_count = graph.node_count();
    let mut distances: Vec<Option<G::Weight>> = vec![None; node_count];
    let mut previous: Vec<Option<NodeId>> = vec![None; node_count];
    let mut settled = vec![false; node_count];
    let mut heap = BinaryMinHeap::with_capacity(node_count);

    distances[start.index()] = Some(G::Weight::zero());
    heap.insert((G::Weight::zero(), start));

    while let Ok((distance, node)) = heap.delete_min() {
        if settled[node.index()] {
            continue;
        }
        settled[node.index()] = true;

        if Some(node) == target {
            break;
        }

        for (next, weight) in graph.weighted_successors(node) {
            if settled[next.index()] {
                continue;
            }
            // A sum past the weight type's range cannot be a shortest distance
            let Some(candidate) = distance.checked_sum(weight) else {
                continue;
            };
            let shorter = distances[next.index()].map_or(true, |current| candidate < current);
            if shorter {
                distances[next.index()] = Some(candidate);
                previous[next.index()] = Some(node);
                heap.insert((candidate, next));
            }
        }
    }

    let paths = ShortestPaths {
        source: start,
        distances,
        previous,
        settled,
    };
    debug!("dijkstra from {start} settled {} vertices", paths.settled_count());
    paths
}
