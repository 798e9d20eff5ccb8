//! All-pairs shortest paths with the Floyd-Warshall algorithm.
//!
//! Time O(V³), memory O(V²). The matrix is seeded from the adjacency (zero on the
//! diagonal, each edge weight at its cell, `None` for "no path yet") and then
//! relaxed once per intermediate vertex:
//!
//! ```text
//! for k: for i: for j:
//!     dist[i][j] = min(dist[i][j], dist[i][k] + dist[k][j])
//! ```
//!
//! Negative edge weights are fine. A negative cycle drives some diagonal entry
//! below zero, which is reported as an error. A sum that leaves the weight type's
//! range is never taken, so a pair connected only through such paths stays `None`.

use std::hash::Hash;

use indexmap::IndexSet;
use log::debug;
use num_traits::Zero;

use crate::{
    graph::{NodeId, Weight, WeightedSuccessors},
    Error, Result,
};

/// Shortest distances between every ordered pair of vertices.
///
/// Rows and columns follow vertex construction order. `None` means the column
/// vertex is unreachable from the row vertex.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix<N: Hash + Eq, W> {
    vertices: IndexSet<N>,
    distances: Vec<Vec<Option<W>>>,
}

impl<N: Hash + Eq, W: Weight> DistanceMatrix<N, W> {
    /// Returns the number of vertices (rows and columns).
    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns `true` if the matrix has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns the row and column labels in order.
    pub fn vertices(&self) -> impl Iterator<Item = &N> + '_ {
        self.vertices.iter()
    }

    /// Returns the shortest distance from `from` to `to`.
    ///
    /// `None` if either vertex is unknown or `to` is unreachable from `from`.
    #[must_use]
    pub fn distance(&self, from: &N, to: &N) -> Option<W> {
        let row = self.vertices.get_index_of(from)?;
        let column = self.vertices.get_index_of(to)?;
        self.distances[row][column]
    }

    /// Returns the distances from `from` to every vertex, in column order.
    #[must_use]
    pub fn row(&self, from: &N) -> Option<&[Option<W>]> {
        let row = self.vertices.get_index_of(from)?;
        Some(&self.distances[row])
    }

    /// Returns `true` if `distance(a, b) == distance(b, a)` for every pair.
    ///
    /// Always holds for undirected graphs.
    #[must_use]
    pub fn is_symmetric(&self) -> bool {
        let n = self.distances.len();
        (0..n).all(|i| (0..i).all(|j| self.distances[i][j] == self.distances[j][i]))
    }

    /// Returns the first vertex whose distance to itself is negative, which only
    /// happens when it lies on a negative cycle.
    #[must_use]
    pub fn negative_cycle(&self) -> Option<&N> {
        let zero = W::zero();
        self.distances
            .iter()
            .enumerate()
            .find(|(i, row)| row[*i].is_some_and(|d| d < zero))
            .and_then(|(i, _)| self.vertices.get_index(i))
    }

    /// Relabels rows and columns.
    pub fn map_vertices<M: Hash + Eq>(self, f: impl FnMut(N) -> M) -> DistanceMatrix<M, W> {
        DistanceMatrix {
            vertices: self.vertices.into_iter().map(f).collect(),
            distances: self.distances,
        }
    }
}

/// Computes the distance matrix, including negative diagonal entries.
pub(crate) fn all_pairs_unchecked<G: WeightedSuccessors>(graph: &G) -> DistanceMatrix<NodeId, G::Weight> {
    let n = graph.node_count();
    let mut dist: Vec<Vec<Option<G::Weight>>> = vec![vec![None; n]; n];

    for source in graph.node_ids() {
        let i = source.index();
        dist[i][i] = Some(G::Weight::zero());
        for (target, weight) in graph.weighted_successors(source) {
            let j = target.index();
            // A self-loop only matters when it is negative
            let cheaper = dist[i][j].map_or(true, |current| weight < current);
            if cheaper {
                dist[i][j] = Some(weight);
            }
        }
    }

    for k in 0..n {
        for i in 0..n {
            let Some(via) = dist[i][k] else {
                continue;
            };
            for j in 0..n {
                let Some(rest) = dist[k][j] else {
                    continue;
                };
                let Some(candidate) = via.checked_sum(rest) else {
                    continue;
                };
                if dist[i][j].map_or(true, |current| candidate < current) {
                    dist[i][j] = Some(candidate);
                }
            }
        }
    }

    DistanceMatrix {
        vertices: graph.node_ids().collect(),
        distances: dist,
    }
}

/// Computes the shortest distance between every ordered pair of vertices.
///
/// # Errors
///
/// - [`Error::EmptyStructure`] if the graph has no vertices
/// - [`Error::InvalidEdgeWeight`] if the graph contains a negative cycle
///
/// # Examples
///
/// ```rust
/// use graphcore::{graph::algorithms::floyd_warshall, WeightedGraph};
///
/// let mut graph: WeightedGraph<&str, i32> = WeightedGraph::directed();
/// let a = graph.add_vertex("A")?;
/// let b = graph.add_vertex("B")?;
/// let c = graph.add_vertex("C")?;
/// graph.add_edge(&"A", &"B", 4)?;
/// graph.add_edge(&"B", &"C", -1)?;
/// graph.add_edge(&"A", &"C", 5)?;
///
/// let matrix = floyd_warshall(&graph)?;
/// assert_eq!(matrix.distance(&a, &c), Some(3));
/// assert_eq!(matrix.distance(&c, &a), None);
/// assert_eq!(matrix.distance(&b, &b), Some(0));
/// # Ok::<(), graphcore::Error>(())
/// ```
pub fn floyd_warshall<G: WeightedSuccessors>(graph: &G) -> Result<DistanceMatrix<NodeId, G::Weight>> {
    if graph.node_count() == 0 {
        return Err(Error::EmptyStructure);
    }

    let matrix = all_pairs_unchecked(graph);
    if let Some(node) = matrix.negative_cycle() {
        return Err(Error::InvalidEdgeWeight(format!(
            "negative cycle through {node}"
        )));
    }

    debug!("floyd-warshall computed {0}x{0} distances", matrix.len());
    Ok(matrix)
}
