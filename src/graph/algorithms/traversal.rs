//! Graph traversal algorithms.
//!
//! This module provides depth-first and breadth-first traversal over anything that
//! implements [`Successors`]. These are the building blocks for the path, component
//! and ordering algorithms in the sibling modules.
//!
//! # Algorithms
//!
//! - [`dfs`] - Iterative depth-first search (pre-order)
//! - [`bfs`] - Breadth-first search
//! - [`postorder`] - Depth-first search with post-order visitation
//! - [`reverse_postorder`] - Reverse post-order from one start vertex
//! - [`postorder_all`] - Post-order over every vertex, restarting at each unvisited one
//!
//! # Iteration vs Collection
//!
//! [`dfs`] and [`bfs`] return iterators, so callers that stop early never pay for
//! the rest of the traversal. The post-order functions return vectors since the
//! order is only known once the whole traversal is finished.

use std::collections::VecDeque;

use crate::graph::{NodeId, Successors};

/// Depth-first search iterator over graph vertices.
///
/// Yields each vertex reachable from the start exactly once, in pre-order: a vertex
/// comes before its descendants, and the neighbors of a vertex are explored in
/// adjacency order, matching a recursive depth-first search.
///
/// # Type Parameters
///
/// * `'g` - Lifetime of the graph reference
/// * `G` - Graph type implementing [`Successors`]
pub struct DfsIterator<'g, G: Successors> {
    graph: &'g G,
    stack: Vec<NodeId>,
    visited: Vec<bool>,
}

impl<'g, G: Successors> DfsIterator<'g, G> {
    fn new(graph: &'g G, start: NodeId) -> Self {
        let node_count = graph.node_count();
        if start.index() >= node_count {
            return DfsIterator {
                graph,
                stack: Vec::new(),
                visited: Vec::new(),
            };
        }

        DfsIterator {
            graph,
            stack: vec![start],
            visited: vec![false; node_count],
        }
    }
}

impl<G: Successors> Iterator for DfsIterator<'_, G> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        // A vertex may sit on the stack more than once; only its first pop counts
        let node = loop {
            let node = self.stack.pop()?;
            if !self.visited[node.index()] {
                break node;
            }
        };
        self.visited[node.index()] = true;

        // Push in reverse so the first neighbor is explored first
        let successors: Vec<NodeId> = self.graph.successors(node).collect();
        for &succ in successors.iter().rev() {
            if !self.visited[succ.index()] {
                self.stack.push(succ);
            }
        }

        Some(node)
    }
}

/// Returns a depth-first search iterator starting from the given vertex.
///
/// Vertices not reachable from `start` are not visited. An out-of-range `start`
/// yields nothing.
///
/// # Complexity
///
/// - Time: O(V + E)
/// - Space: O(V + E) for the visited set and stack
///
/// # Examples
///
/// ```rust
/// use graphcore::{graph::algorithms::dfs, Graph, NodeId};
///
/// let mut graph: Graph<&str> = Graph::directed();
/// let a = graph.add_vertex("A")?;
/// let b = graph.add_vertex("B")?;
/// let c = graph.add_vertex("C")?;
/// let d = graph.add_vertex("D")?;
/// graph.add_edge(&"A", &"B", ())?;
/// graph.add_edge(&"A", &"D", ())?;
/// graph.add_edge(&"B", &"C", ())?;
///
/// let order: Vec<NodeId> = dfs(&graph, a).collect();
/// assert_eq!(order, vec![a, b, c, d]);
/// # Ok::<(), graphcore::Error>(())
/// ```
pub fn dfs<G: Successors>(graph: &G, start: NodeId) -> DfsIterator<'_, G> {
    DfsIterator::new(graph, start)
}

/// Breadth-first search iterator over graph vertices.
///
/// Visits every vertex at distance d before any vertex at distance d+1. Within a
/// level, vertices appear in the order they were discovered.
///
/// # Type Parameters
///
/// * `'g` - Lifetime of the graph reference
/// * `G` - Graph type implementing [`Successors`]
pub struct BfsIterator<'g, G: Successors> {
    graph: &'g G,
    queue: VecDeque<NodeId>,
    visited: Vec<bool>,
}

impl<'g, G: Successors> BfsIterator<'g, G> {
    fn new(graph: &'g G, start: NodeId) -> Self {
        let node_count = graph.node_count();
        if start.index() >= node_count {
            return BfsIterator {
                graph,
                queue: VecDeque::new(),
                visited: Vec::new(),
            };
        }

        let mut visited = vec![false; node_count];
        visited[start.index()] = true;

        BfsIterator {
            graph,
            queue: VecDeque::from([start]),
            visited,
        }
    }
}

impl<G: Successors> Iterator for BfsIterator<'_, G> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.queue.pop_front()?;

        for succ in self.graph.successors(node) {
            if !self.visited[succ.index()] {
                self.visited[succ.index()] = true;
                self.queue.push_back(succ);
            }
        }

        Some(node)
    }
}

/// Returns a breadth-first search iterator starting from the given vertex.
///
/// # Complexity
///
/// - Time: O(V + E)
/// - Space: O(V) for the visited set and queue
///
/// # Examples
///
/// ```rust
/// use graphcore::{graph::algorithms::bfs, Graph, NodeId};
///
/// let mut graph: Graph<&str> = Graph::directed();
/// let a = graph.add_vertex("A")?;
/// let b = graph.add_vertex("B")?;
/// let c = graph.add_vertex("C")?;
/// let d = graph.add_vertex("D")?;
/// graph.add_edge(&"A", &"B", ())?;
/// graph.add_edge(&"B", &"D", ())?;
/// graph.add_edge(&"A", &"C", ())?;
///
/// let order: Vec<NodeId> = bfs(&graph, a).collect();
/// assert_eq!(order, vec![a, b, c, d]);
/// # Ok::<(), graphcore::Error>(())
/// ```
pub fn bfs<G: Successors>(graph: &G, start: NodeId) -> BfsIterator<'_, G> {
    BfsIterator::new(graph, start)
}

#[derive(Clone, Copy)]
enum State {
    Enter,
    Exit,
}

/// Runs one post-order pass from `start`, skipping and updating `visited`.
fn postorder_into<G: Successors>(
    graph: &G,
    start: NodeId,
    visited: &mut [bool],
    result: &mut Vec<NodeId>,
) {
    let mut stack = vec![(start, State::Enter)];

    while let Some((node, state)) = stack.pop() {
        match state {
            State::Enter => {
                if visited[node.index()] {
                    continue;
                }
                visited[node.index()] = true;

                // Exit is handled after every child has been entered and exited
                stack.push((node, State::Exit));

                let successors: Vec<NodeId> = graph.successors(node).collect();
                for &succ in successors.iter().rev() {
                    if !visited[succ.index()] {
                        stack.push((succ, State::Enter));
                    }
                }
            }
            State::Exit => result.push(node),
        }
    }
}

/// Computes the post-order of the vertices reachable from `start`.
///
/// In post-order a vertex is emitted after all of its descendants.
///
/// # Complexity
///
/// - Time: O(V + E)
/// - Space: O(V + E)
pub fn postorder<G: Successors>(graph: &G, start: NodeId) -> Vec<NodeId> {
    let node_count = graph.node_count();
    if start.index() >= node_count {
        return Vec::new();
    }

    let mut visited = vec![false; node_count];
    let mut result = Vec::with_capacity(node_count);
    postorder_into(graph, start, &mut visited, &mut result);
    result
}

/// Computes the reverse post-order of the vertices reachable from `start`.
///
/// On an acyclic graph every vertex comes before all of its successors.
pub fn reverse_postorder<G: Successors>(graph: &G, start: NodeId) -> Vec<NodeId> {
    let mut result = postorder(graph, start);
    result.reverse();
    result
}

/// Computes a post-order covering every vertex.
///
/// Vertices are tried as roots in construction order; each unvisited one starts a
/// new pass. Reversing the result of an acyclic graph gives a topological order.
pub fn postorder_all<G: Successors>(graph: &G) -> Vec<NodeId> {
    let node_count = graph.node_count();
    let mut visited = vec![false; node_count];
    let mut result = Vec::with_capacity(node_count);

    for root in graph.node_ids() {
        if !visited[root.index()] {
            postorder_into(graph, root, &mut visited, &mut result);
        }
    }

    result
}
