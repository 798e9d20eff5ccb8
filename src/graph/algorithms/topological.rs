//! Topological sorting for directed acyclic graphs (DAGs).
//!
//! A topological ordering lists the vertices so that for every arc (u, v), u comes
//! before v. The ordering here is the reversed depth-first post-order over all
//! vertices, computed only after the graph has been confirmed acyclic.
//!
//! # Use Cases
//!
//! - Dependency resolution (build systems, package managers)
//! - Task scheduling with precedence constraints

use log::debug;

use crate::graph::{
    algorithms::{cycles::find_directed_cycle, traversal::postorder_all},
    NodeId, Successors,
};

/// Computes a topological ordering of all vertices.
///
/// Every adjacency entry is treated as an arc, so an undirected graph with at
/// least one edge has no ordering.
///
/// # Returns
///
/// `Some(order)` if the graph is acyclic, `None` if it contains a cycle.
///
/// # Complexity
///
/// - Time: O(V + E)
/// - Space: O(V + E)
///
/// # Examples
///
/// ```rust
/// use graphcore::{graph::algorithms::topological_sort, Graph};
///
/// // A -> B -> D, A -> C -> D
/// let mut graph: Graph<&str> = Graph::directed();
/// let a = graph.add_vertex("A")?;
/// let b = graph.add_vertex("B")?;
/// let c = graph.add_vertex("C")?;
/// let d = graph.add_vertex("D")?;
/// graph.add_edge(&"A", &"B", ())?;
/// graph.add_edge(&"A", &"C", ())?;
/// graph.add_edge(&"B", &"D", ())?;
/// graph.add_edge(&"C", &"D", ())?;
///
/// let order = topological_sort(&graph).unwrap();
/// assert_eq!(order, vec![a, c, b, d]);
/// # Ok::<(), graphcore::Error>(())
/// ```
pub fn topological_sort<G: Successors>(graph: &G) -> Option<Vec<NodeId>> {
    if let Some(cycle) = find_directed_cycle(graph) {
        debug!("topological sort rejected, cycle of {} arcs", cycle.len() - 1);
        return None;
    }

    let mut order = postorder_all(graph);
    order.reverse();
    Some(order)
}
