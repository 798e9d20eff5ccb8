//! A single vertex and its adjacency.

use indexmap::IndexMap;

use crate::graph::NodeId;

/// A vertex: the caller's key plus an ordered adjacency map.
///
/// The adjacency maps each neighbor's [`NodeId`] to the edge payload `W` (`()` for
/// unweighted graphs, a numeric weight for weighted ones). There is at most one
/// entry per neighbor, and entries keep the order in which they were first inserted;
/// replacing the payload of an existing edge keeps its position. Traversal
/// tie-breaks and greedy coloring depend on that order.
///
/// Vertices are created only by [`Graph::add_vertex`](crate::Graph::add_vertex) and
/// are read-only to callers.
#[derive(Debug, Clone)]
pub struct Vertex<K, W = ()> {
    id: K,
    neighbors: IndexMap<NodeId, W>,
}

impl<K, W> Vertex<K, W> {
    pub(crate) fn new(id: K) -> Self {
        Vertex {
            id,
            neighbors: IndexMap::new(),
        }
    }

    /// Inserts or replaces the edge to `neighbor`.
    ///
    /// Returns `true` if the neighbor was not adjacent before.
    pub(crate) fn add_neighbor(&mut self, neighbor: NodeId, weight: W) -> bool {
        self.neighbors.insert(neighbor, weight).is_none()
    }

    /// Returns the key identifying this vertex.
    #[must_use]
    pub fn id(&self) -> &K {
        &self.id
    }

    /// Returns the neighbors of this vertex in adjacency insertion order.
    pub fn neighbors(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.neighbors.keys().copied()
    }

    /// Returns `(neighbor, payload)` pairs in adjacency insertion order.
    pub fn neighbors_with_weights(&self) -> impl Iterator<Item = (NodeId, &W)> + '_ {
        self.neighbors.iter().map(|(&node, weight)| (node, weight))
    }

    /// Returns the payload of the edge to `neighbor`, if adjacent.
    #[must_use]
    pub fn weight_to(&self, neighbor: NodeId) -> Option<&W> {
        self.neighbors.get(&neighbor)
    }

    /// Returns `true` if there is an edge from this vertex to `neighbor`.
    #[must_use]
    pub fn has_neighbor(&self, neighbor: NodeId) -> bool {
        self.neighbors.contains_key(&neighbor)
    }

    /// Returns the number of adjacency entries (out-degree for directed graphs).
    #[must_use]
    pub fn degree(&self) -> usize {
        self.neighbors.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_new_has_no_neighbors() {
        let vertex: Vertex<&str> = Vertex::new("A");
        assert_eq!(vertex.id(), &"A");
        assert_eq!(vertex.degree(), 0);
        assert_eq!(vertex.neighbors().count(), 0);
    }

    #[test]
    fn test_vertex_preserves_insertion_order() {
        let mut vertex: Vertex<&str, u32> = Vertex::new("A");
        assert!(vertex.add_neighbor(NodeId::new(3), 30));
        assert!(vertex.add_neighbor(NodeId::new(1), 10));
        assert!(vertex.add_neighbor(NodeId::new(2), 20));

        let order: Vec<NodeId> = vertex.neighbors().collect();
        assert_eq!(order, vec![NodeId::new(3), NodeId::new(1), NodeId::new(2)]);
    }

    #[test]
    fn test_vertex_replacing_weight_keeps_position() {
        let mut vertex: Vertex<&str, u32> = Vertex::new("A");
        vertex.add_neighbor(NodeId::new(1), 10);
        vertex.add_neighbor(NodeId::new(2), 20);

        // Second insert replaces the payload in place
        assert!(!vertex.add_neighbor(NodeId::new(1), 99));
        assert_eq!(vertex.degree(), 2);

        let pairs: Vec<(NodeId, u32)> = vertex
            .neighbors_with_weights()
            .map(|(n, w)| (n, *w))
            .collect();
        assert_eq!(pairs, vec![(NodeId::new(1), 99), (NodeId::new(2), 20)]);
    }

    #[test]
    fn test_vertex_weight_to() {
        let mut vertex: Vertex<char, f64> = Vertex::new('A');
        vertex.add_neighbor(NodeId::new(4), 2.5);

        assert_eq!(vertex.weight_to(NodeId::new(4)), Some(&2.5));
        assert_eq!(vertex.weight_to(NodeId::new(5)), None);
        assert!(vertex.has_neighbor(NodeId::new(4)));
        assert!(!vertex.has_neighbor(NodeId::new(0)));
    }
}
