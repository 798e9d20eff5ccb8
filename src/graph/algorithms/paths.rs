//! Unweighted path queries.
//!
//! Every function here measures distance in edges (hops) and follows the
//! adjacency order of [`Successors`] for tie-breaks.

use std::collections::VecDeque;

use crate::graph::{NodeId, Successors};

/// Walks `previous` links back from `target` and returns the path from the root.
fn reconstruct(previous: &[Option<NodeId>], target: NodeId) -> Vec<NodeId> {
    let mut path = vec![target];
    let mut current = target;
    while let Some(prev) = previous[current.index()] {
        path.push(prev);
        current = prev;
    }
    path.reverse();
    path
}

/// Finds a path with the fewest edges from `start` to `target`.
///
/// Breadth-first search records the vertex each vertex was first discovered from
/// and stops as soon as `target` is discovered. Among equally short paths the one
/// found first under adjacency order wins.
///
/// # Returns
///
/// The path including both endpoints (`[start]` when `start == target`), or `None`
/// if `target` is unreachable or either vertex is out of range.
///
/// # Examples
///
/// ```rust
/// use graphcore::{graph::algorithms::shortest_path, Graph};
///
/// let mut graph: Graph<u8> = Graph::undirected();
/// let a = graph.add_vertex(1)?;
/// let b = graph.add_vertex(2)?;
/// let c = graph.add_vertex(3)?;
/// graph.add_edge(&1, &2, ())?;
/// graph.add_edge(&2, &3, ())?;
/// graph.add_edge(&1, &3, ())?;
///
/// assert_eq!(shortest_path(&graph, a, c), Some(vec![a, c]));
/// assert_eq!(shortest_path(&graph, b, b), Some(vec![b]));
/// # Ok::<(), graphcore::Error>(())
/// ```
pub fn shortest_path<G: Successors>(graph: &G, start: NodeId, target: NodeId) -> Option<Vec<NodeId>> {
    let node_count = graph.node_count();
    if start.index() >= node_count || target.index() >= node_count {
        return None;
    }
    if start == target {
        return Some(vec![start]);
    }

    let mut visited = vec![false; node_count];
    let mut previous: Vec<Option<NodeId>> = vec![None; node_count];
    let mut queue = VecDeque::from([start]);
    visited[start.index()] = true;

    while let Some(node) = queue.pop_front() {
        for succ in graph.successors(node) {
            if visited[succ.index()] {
                continue;
            }
            visited[succ.index()] = true;
            previous[succ.index()] = Some(node);

            if succ == target {
                return Some(reconstruct(&previous, target));
            }
            queue.push_back(succ);
        }
    }

    None
}

/// Returns the vertices whose shortest hop distance from `start` is exactly
/// `distance`.
///
/// The search advances one full layer at a time, so every vertex of a layer is
/// known before the next layer is built. Vertices appear in discovery order. A
/// distance of 0 returns `[start]`; a distance beyond the farthest reachable
/// vertex returns an empty list.
pub fn vertices_at_distance<G: Successors>(graph: &G, start: NodeId, distance: usize) -> Vec<NodeId> {
    let node_count = graph.node_count();
    if start.index() >= node_count {
        return Vec::new();
    }

    let mut visited = vec![false; node_count];
    visited[start.index()] = true;
    let mut layer = vec![start];

    for _ in 0..distance {
        let mut next = Vec::new();
        for &node in &layer {
            for succ in graph.successors(node) {
                if !visited[succ.index()] {
                    visited[succ.index()] = true;
                    next.push(succ);
                }
            }
        }

        if next.is_empty() {
            return next;
        }
        layer = next;
    }

    layer
}

/// Finds some path from `start` to `target` by depth-first search.
///
/// The path follows the first branch under adjacency order that reaches `target`;
/// it is not necessarily the shortest.
pub fn find_path<G: Successors>(graph: &G, start: NodeId, target: NodeId) -> Option<Vec<NodeId>> {
    let node_count = graph.node_count();
    if start.index() >= node_count || target.index() >= node_count {
        return None;
    }

    let mut visited = vec![false; node_count];
    let mut previous: Vec<Option<NodeId>> = vec![None; node_count];
    let mut stack = vec![(start, None)];

    while let Some((node, from)) = stack.pop() {
        if visited[node.index()] {
            continue;
        }
        visited[node.index()] = true;
        previous[node.index()] = from;

        if node == target {
            return Some(reconstruct(&previous, target));
        }

        let successors: Vec<NodeId> = graph.successors(node).collect();
        for &succ in successors.iter().rev() {
            if !visited[succ.index()] {
                stack.push((succ, Some(node)));
            }
        }
    }

    None
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

    // A - B - D - E
    //  \     /
    //   - C -
    fn create_two_route_graph() -> Graph<&'static str> {
        create_graph(
            false,
            &["A", "B", "C", "D", "E"],
            &[("A", "B"), ("A", "C"), ("B", "D"), ("C", "D"), ("D", "E")],
        )
    }

    #[test]
    fn test_shortest_path_prefers_first_discovered() {
        let graph = create_two_route_graph();
        let path = shortest_path(&graph, NodeId::new(0), NodeId::new(4));
        assert_eq!(path, Some(ids(&[0, 1, 3, 4])));
    }

    #[test]
    fn test_shortest_path_unreachable() {
        let graph = create_graph(true, &["A", "B"], &[("B", "A")]);
        assert_eq!(shortest_path(&graph, NodeId::new(0), NodeId::new(1)), None);
        assert_eq!(shortest_path(&graph, NodeId::new(1), NodeId::new(0)), Some(ids(&[1, 0])));
    }

    #[test]
    fn test_vertices_at_distance() {
        let graph = create_two_route_graph();
        let start = NodeId::new(0);

        assert_eq!(vertices_at_distance(&graph, start, 0), ids(&[0]));
        assert_eq!(vertices_at_distance(&graph, start, 1), ids(&[1, 2]));
        assert_eq!(vertices_at_distance(&graph, start, 2), ids(&[3]));
        assert_eq!(vertices_at_distance(&graph, start, 3), ids(&[4]));
        assert!(vertices_at_distance(&graph, start, 4).is_empty());
        assert!(vertices_at_distance(&graph, start, 40).is_empty());
    }

    #[test]
    fn test_vertices_at_distance_uses_shortest_distance() {
        // D is reachable in 2 hops and in 3 hops; it only belongs to layer 2
        let graph = create_graph(
            true,
            &["A", "B", "C", "D"],
            &[("A", "B"), ("B", "C"), ("C", "D"), ("A", "D")],
        );
        assert_eq!(vertices_at_distance(&graph, NodeId::new(0), 1), ids(&[1, 3]));
        assert_eq!(vertices_at_distance(&graph, NodeId::new(0), 2), ids(&[2]));
        assert!(vertices_at_distance(&graph, NodeId::new(0), 3).is_empty());
    }

    #[test]
    fn test_find_path_follows_first_branch() {
        let graph = create_graph(
            true,
            &["A", "B", "C", "D"],
            &[("A", "B"), ("B", "C"), ("C", "D"), ("A", "D")],
        );
        assert_eq!(
            find_path(&graph, NodeId::new(0), NodeId::new(3)),
            Some(ids(&[0, 1, 2, 3]))
        );
        assert_eq!(find_path(&graph, NodeId::new(3), NodeId::new(0)), None);
        assert_eq!(find_path(&graph, NodeId::new(2), NodeId::new(2)), Some(ids(&[2])));
    }
}
