//! Cycle detection.
//!
//! Depth-first search with two markers per vertex: `visited` (seen in any search so
//! far) and `on_path` (on the current root-to-vertex path). An edge into a vertex
//! that is still on the path closes a cycle; an edge into a vertex that was
//! visited and has since been left does not.
//!
//! The search keeps its own stack of frames instead of recursing, so path length is
//! bounded by memory rather than by the thread's stack size.
//!
//! Every vertex is tried as a root, so cycles in any component are found.

use crate::graph::{NodeId, Successors};

struct Frame {
    node: NodeId,
    parent: Option<NodeId>,
    successors: Vec<NodeId>,
    cursor: usize,
}

impl Frame {
    fn new<G: Successors>(graph: &G, node: NodeId, parent: Option<NodeId>) -> Self {
        Frame {
            node,
            parent,
            successors: graph.successors(node).collect(),
            cursor: 0,
        }
    }
}

/// Runs the search over every component.
///
/// With `arcs` set, every adjacency entry is an arc, including the mirror entry
/// an undirected edge leaves at its far endpoint. Without it, the entry leading
/// straight back to the vertex a step came from is skipped.
fn search<G: Successors>(graph: &G, arcs: bool) -> Option<Vec<NodeId>> {
    let node_count = graph.node_count();
    let mut visited = vec![false; node_count];
    let mut on_path = vec![false; node_count];

    for root in graph.node_ids() {
        if visited[root.index()] {
            continue;
        }
        visited[root.index()] = true;
        on_path[root.index()] = true;
        let mut stack = vec![Frame::new(graph, root, None)];

        while let Some(frame) = stack.last_mut() {
            let Some(&succ) = frame.successors.get(frame.cursor) else {
                on_path[frame.node.index()] = false;
                stack.pop();
                continue;
            };
            frame.cursor += 1;
            let node = frame.node;

            if !arcs && frame.parent == Some(succ) {
                continue;
            }

            if on_path[succ.index()] {
                let from = stack.iter().position(|f| f.node == succ)?;
                let mut cycle: Vec<NodeId> = stack[from..].iter().map(|f| f.node).collect();
                cycle.push(succ);
                return Some(cycle);
            }

            if !visited[succ.index()] {
                visited[succ.index()] = true;
                on_path[succ.index()] = true;
                stack.push(Frame::new(graph, succ, Some(node)));
            }
        }
    }

    None
}

/// Checks whether the graph contains any cycle.
///
/// Directed graphs are searched for directed cycles. Undirected graphs ignore the
/// edge back to the vertex a step came from, so a single edge is not a cycle but a
/// self-loop is.
///
/// # Complexity
///
/// - Time: O(V + E)
/// - Space: O(V + E)
///
/// # Examples
///
/// ```rust
/// use graphcore::{graph::algorithms::has_cycle, Graph};
///
/// let mut graph: Graph<char> = Graph::undirected();
/// for id in ['A', 'B', 'C'] {
///     graph.add_vertex(id)?;
/// }
/// graph.add_edge(&'A', &'B', ())?;
/// graph.add_edge(&'B', &'C', ())?;
/// assert!(!has_cycle(&graph));
///
/// graph.add_edge(&'C', &'A', ())?;
/// assert!(has_cycle(&graph));
/// # Ok::<(), graphcore::Error>(())
/// ```
pub fn has_cycle<G: Successors>(graph: &G) -> bool {
    find_cycle(graph).is_some()
}

/// Finds a cycle if one exists, honouring the graph's directedness.
///
/// # Returns
///
/// The vertices of the cycle in traversal order, starting and ending with the same
/// vertex, or `None` if the graph is acyclic.
pub fn find_cycle<G: Successors>(graph: &G) -> Option<Vec<NodeId>> {
    search(graph, graph.is_directed())
}

/// Finds a cycle treating every adjacency entry as an arc.
///
/// For directed graphs this is the same as [`find_cycle`]. For undirected graphs
/// any edge between two distinct vertices yields a two-vertex cycle, which is what
/// ordering algorithms that follow arcs must reject.
pub fn find_directed_cycle<G: Successors>(graph: &G) -> Option<Vec<NodeId>> {
    search(graph, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Graph;

    fn create_graph(
        directed: bool,
        vertices: &[&'static str],
        edges: &[(&'static str, &'static str)],
    ) -> Graph<&'static str> {
        let mut graph = Graph::new(directed);
        for &id in vertices {
            graph.add_vertex(id).unwrap();
        }
        for (from, to) in edges {
            graph.add_edge(from, to, ()).unwrap();
        }
        graph
    }

    fn ids(raw: &[usize]) -> Vec<NodeId> {
        raw.iter().copied().map(NodeId::new).collect()
    }

    #[test]
    fn test_directed_linear_has_no_cycle() {
        let graph = create_graph(true, &["A", "B", "C"], &[("A", "B"), ("B", "C")]);
        assert!(!has_cycle(&graph));
        assert_eq!(find_cycle(&graph), None);
    }

    #[test]
    fn test_directed_cycle_is_closed() {
        let graph = create_graph(
            true,
            &["A", "B", "C", "D"],
            &[("A", "B"), ("B", "C"), ("C", "D"), ("D", "B")],
        );
        assert_eq!(find_cycle(&graph), Some(ids(&[1, 2, 3, 1])));
    }

    #[test]
    fn test_directed_diamond_is_acyclic() {
        // D is reached twice but never while still on the path
        let graph = create_graph(
            true,
            &["A", "B", "C", "D"],
            &[("A", "B"), ("A", "C"), ("B", "D"), ("C", "D")],
        );
        assert!(!has_cycle(&graph));
    }

    #[test]
    fn test_cycle_in_later_component() {
        let graph = create_graph(
            true,
            &["A", "B", "X", "Y"],
            &[("A", "B"), ("X", "Y"), ("Y", "X")],
        );
        assert_eq!(find_cycle(&graph), Some(ids(&[2, 3, 2])));
    }

    #[test]
    fn test_cross_edge_into_closed_component_is_not_a_cycle() {
        let graph = create_graph(true, &["A", "B", "C"], &[("A", "B"), ("C", "B")]);
        assert!(!has_cycle(&graph));
    }

    #[test]
    fn test_undirected_single_edge_is_not_a_cycle() {
        let graph = create_graph(false, &["A", "B"], &[("A", "B")]);
        assert!(!has_cycle(&graph));
        assert_eq!(find_directed_cycle(&graph), Some(ids(&[0, 1, 0])));
    }

    #[test]
    fn test_undirected_tree_is_acyclic() {
        let graph = create_graph(
            false,
            &["A", "B", "C", "D", "E"],
            &[("A", "B"), ("A", "C"), ("C", "D"), ("C", "E")],
        );
        assert!(!has_cycle(&graph));
    }

    #[test]
    fn test_undirected_triangle() {
        let graph = create_graph(
            false,
            &["A", "B", "C"],
            &[("A", "B"), ("B", "C"), ("C", "A")],
        );
        assert_eq!(find_cycle(&graph), Some(ids(&[0, 1, 2, 0])));
    }

    #[test]
    fn test_self_loop_is_a_cycle() {
        let graph = create_graph(false, &["A", "B"], &[("A", "B"), ("B", "B")]);
        assert_eq!(find_cycle(&graph), Some(ids(&[1, 1])));

        let graph = create_graph(true, &["A"], &[("A", "A")]);
        assert!(has_cycle(&graph));
    }

    #[test]
    fn test_empty_graph() {
        let graph: Graph<u32> = Graph::directed();
        assert!(!has_cycle(&graph));
    }
}
