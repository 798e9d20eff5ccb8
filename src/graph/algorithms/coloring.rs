//! Greedy vertex coloring.

use crate::graph::{algorithms::adjacent, NodeId, Predecessors, Successors};

/// Assigns each vertex the smallest color not used by an already colored neighbor.
///
/// Vertices are processed in construction order and neighbors are taken in both
/// directions, so adjacent vertices never share a color. The result is indexed by
/// [`NodeId`]. The number of colors used depends on the vertex order and is not
/// guaranteed to be minimal; it never exceeds the maximum degree plus one.
///
/// A vertex with a self-loop is its own neighbor but is not colored yet when its
/// neighbors are inspected, so the loop is ignored.
///
/// # Examples
///
/// ```rust
/// use graphcore::{graph::algorithms::greedy_coloring, Graph};
///
/// // Triangle plus a pendant vertex
/// let mut graph: Graph<char> = Graph::undirected();
/// for id in ['A', 'B', 'C', 'D'] {
///     graph.add_vertex(id)?;
/// }
/// graph.add_edge(&'A', &'B', ())?;
/// graph.add_edge(&'B', &'C', ())?;
/// graph.add_edge(&'C', &'A', ())?;
/// graph.add_edge(&'C', &'D', ())?;
///
/// assert_eq!(greedy_coloring(&graph), vec![0, 1, 2, 0]);
/// # Ok::<(), graphcore::Error>(())
/// ```
pub fn greedy_coloring<G>(graph: &G) -> Vec<usize>
where
    G: Successors + Predecessors,
{
    let node_count = graph.node_count();
    let mut colors: Vec<Option<usize>> = vec![None; node_count];

    for node in graph.node_ids() {
        let neighbors: Vec<NodeId> = adjacent(graph, node);

        // At most `neighbors.len()` colors are taken, so one of the first
        // `neighbors.len() + 1` is free
        let mut taken = vec![false; neighbors.len() + 1];
        for neighbor in neighbors {
            if let Some(color) = colors[neighbor.index()] {
                if color < taken.len() {
                    taken[color] = true;
                }
            }
        }

        let color = taken.iter().position(|used| !used).unwrap_or(taken.len());
        colors[node.index()] = Some(color);
    }

    colors.into_iter().map(Option::unwrap_or_default).collect()
}
