//! Connectivity: connected components and bipartiteness.
//!
//! Both algorithms look at the underlying undirected graph. For directed graphs a
//! vertex's neighbors are its successors followed by its predecessors, so the
//! components reported are the weakly connected ones.

use std::collections::VecDeque;

use log::debug;

use crate::graph::{algorithms::adjacent, NodeId, Predecessors, Successors};

/// Partitions the vertices into connected components.
///
/// A breadth-first search starts from every vertex not yet assigned to a component.
/// Components are returned in the order of their first vertex; members follow
/// discovery order.
///
/// # Examples
///
/// ```rust
/// use graphcore::{graph::algorithms::connected_components, Graph, NodeId};
///
/// let mut graph: Graph<u32> = Graph::undirected();
/// for id in 0..5 {
///     graph.add_vertex(id)?;
/// }
/// graph.add_edge(&0, &3, ())?;
/// graph.add_edge(&1, &4, ())?;
///
/// let components = connected_components(&graph);
/// assert_eq!(components.len(), 3);
/// assert_eq!(components[0], vec![NodeId::new(0), NodeId::new(3)]);
/// assert_eq!(components[2], vec![NodeId::new(2)]);
/// # Ok::<(), graphcore::Error>(())
/// ```
pub fn connected_components<G>(graph: &G) -> Vec<Vec<NodeId>>
where
    G: Successors + Predecessors,
{
    let mut visited = vec![false; graph.node_count()];
    let mut components = Vec::new();

    for root in graph.node_ids() {
        if visited[root.index()] {
            continue;
        }
        visited[root.index()] = true;

        let mut members = Vec::new();
        let mut queue = VecDeque::from([root]);
        while let Some(node) = queue.pop_front() {
            members.push(node);
            for next in adjacent(graph, node) {
                if !visited[next.index()] {
                    visited[next.index()] = true;
                    queue.push_back(next);
                }
            }
        }
        components.push(members);
    }

    components
}

/// Checks whether the vertices can be two-colored so that no edge joins two
/// vertices of the same color.
///
/// Each component is colored by breadth-first search from its first vertex; the
/// check fails the moment an edge joins two equally colored vertices. A self-loop
/// therefore makes the graph non-bipartite. The empty graph is bipartite.
pub fn is_bipartite<G>(graph: &G) -> bool
where
    G: Successors + Predecessors,
{
    let mut side: Vec<Option<bool>> = vec![None; graph.node_count()];

    for root in graph.node_ids() {
        if side[root.index()].is_some() {
            continue;
        }
        side[root.index()] = Some(false);

        let mut queue = VecDeque::from([root]);
        while let Some(node) = queue.pop_front() {
            let color = side[node.index()].unwrap_or_default();
            for next in adjacent(graph, node) {
                match side[next.index()] {
                    None => {
                        side[next.index()] = Some(!color);
                        queue.push_back(next);
                    }
                    Some(other) if other == color => {
                        debug!("not bipartite, {node} and {next} share a side");
                        return false;
                    }
                    Some(_) => {}
                }
            }
        }
    }

    true
}
