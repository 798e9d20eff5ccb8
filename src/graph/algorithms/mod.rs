//! Graph algorithms on [`NodeId`]s.
//!
//! Every function here is generic over the traits in [`crate::graph`], so it runs on
//! [`Graph`](crate::Graph) as well as on any other structure that implements them.
//! The key-level methods on `Graph` wrap these functions, validate keys and map
//! results back to keys.
//!
//! # Available Algorithms
//!
//! ## Traversal
//!
//! - [`dfs`] - Depth-first search traversal
//! - [`bfs`] - Breadth-first search traversal
//! - [`postorder`] / [`reverse_postorder`] / [`postorder_all`] - Post-order traversals
//!
//! ## Unweighted Paths
//!
//! - [`shortest_path`] - Fewest-edges path by breadth-first search
//! - [`vertices_at_distance`] - Vertices exactly k edges away
//! - [`find_path`] - Some path by depth-first search
//!
//! ## Structure
//!
//! - [`has_cycle`] / [`find_cycle`] / [`find_directed_cycle`] - Cycle detection
//! - [`topological_sort`] - Reversed post-order of an acyclic graph
//! - [`connected_components`] - Weakly connected components
//! - [`is_bipartite`] - Two-coloring check
//! - [`greedy_coloring`] - First-fit vertex coloring
//!
//! ## Weighted
//!
//! - [`kruskal`] / [`prim`] - Minimum spanning trees
//! - [`dijkstra`] - Single-source shortest paths
//! - [`floyd_warshall`] - All-pairs shortest paths
//!
//! # Algorithm Selection
//!
//! | Algorithm | Time Complexity | Use Case |
//! |-----------|-----------------|----------|
//! | DFS/BFS | O(V + E) | General traversal |
//! | Cycle detection | O(V + E) | Validating DAG inputs |
//! | Topological Sort | O(V + E) | Dependency ordering |
//! | Components / Bipartite | O(V + E) | Connectivity analysis |
//! | Greedy Coloring | O(V + E) | Scheduling, register allocation |
//! | Kruskal | O(E log E) | MST on sparse edge lists |
//! | Prim | O(E log E) | MST grown from one vertex |
//! | Dijkstra | O(E log E) | Non-negative shortest paths |
//! | Floyd-Warshall | O(V³) | All pairs, negative weights allowed |
//!
//! # Examples
//!
//! ```rust
//! use graphcore::{graph::algorithms, Graph, NodeId};
//!
//! let mut graph: Graph<&str> = Graph::directed();
//! let a = graph.add_vertex("A")?;
//! let b = graph.add_vertex("B")?;
//! let c = graph.add_vertex("C")?;
//! graph.add_edge(&"A", &"B", ())?;
//! graph.add_edge(&"B", &"C", ())?;
//!
//! let order: Vec<NodeId> = algorithms::dfs(&graph, a).collect();
//! assert_eq!(order, vec![a, b, c]);
//! assert!(!algorithms::has_cycle(&graph));
//! assert_eq!(algorithms::topological_sort(&graph), Some(vec![a, b, c]));
//! # Ok::<(), graphcore::Error>(())
//! ```

mod all_pairs;
mod coloring;
mod components;
mod cycles;
mod mst;
mod paths;
mod shortest_path;
mod topological;
mod traversal;

pub use all_pairs::{floyd_warshall, DistanceMatrix};
pub use coloring::greedy_coloring;
pub use components::{connected_components, is_bipartite};
pub use cycles::{find_cycle, find_directed_cycle, has_cycle};
pub use mst::{kruskal, prim, SpanningTree};
pub use paths::{find_path, shortest_path, vertices_at_distance};
pub use shortest_path::{dijkstra, find_negative_edge, ShortestPaths, WeightedPath};
pub use topological::topological_sort;
pub use traversal::{bfs, dfs, postorder, postorder_all, reverse_postorder, BfsIterator, DfsIterator};

pub(crate) use all_pairs::all_pairs_unchecked;
pub(crate) use shortest_path::dijkstra_unchecked;

use crate::graph::{NodeId, Predecessors, Successors};

/// Neighbors of `node` in the underlying undirected graph.
///
/// Successors first, then (for directed graphs) predecessors. A vertex joined by
/// arcs in both directions appears twice, which callers tolerate.
pub(crate) fn adjacent<G>(graph: &G, node: NodeId) -> Vec<NodeId>
where
    G: Successors + Predecessors,
{
    let mut neighbors: Vec<NodeId> = graph.successors(node).collect();
    if graph.is_directed() {
        neighbors.extend(graph.predecessors(node));
    }
    neighbors
}
