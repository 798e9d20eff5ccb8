//! Keyed adjacency-list graph.
//!
//! This module provides [`Graph`], the single graph container of the crate. Vertices
//! are identified by caller-chosen keys (`K`) and internally by dense [`NodeId`]s;
//! edges carry a payload `W` that is `()` for unweighted graphs and a numeric
//! [`Weight`] for weighted ones ([`WeightedGraph`]).
//!
//! Key-level algorithm methods live in this module as well: each one validates the
//! keys it receives, runs the index-level implementation from
//! [`crate::graph::algorithms`] and maps the result back to keys.

use std::{fmt, hash::Hash};

use indexmap::IndexMap;
use log::{debug, trace};

use crate::{
    graph::{
        algorithms::{self, DistanceMatrix, SpanningTree, WeightedPath},
        GraphBase, NodeId, Predecessors, Successors, Vertex, Weight, WeightedSuccessors,
    },
    Error, Result,
};

/// A directed or undirected graph with keyed vertices and typed edge payloads.
///
/// `Graph<K, W>` stores:
///
/// - the vertices in insertion order, each reachable by key or by [`NodeId`]
/// - per vertex, an ordered adjacency map neighbor → payload (see [`Vertex`])
/// - per vertex, the list of vertices with an arc into it, so directed graphs can be
///   analysed for weak connectivity
/// - the directedness flag, fixed at construction
///
/// For undirected graphs [`add_edge`](Self::add_edge) inserts both directions in one
/// step, so every adjacency query sees the edge from either endpoint.
///
/// # Type Parameters
///
/// * `K` - The vertex key (e.g. `&str`, `String`, `u32`)
/// * `W` - The edge payload: `()` for unweighted graphs, a [`Weight`] for weighted ones
///
/// # Thread Safety
///
/// `Graph<K, W>` is [`Send`] and [`Sync`] when `K` and `W` are. Construction takes
/// `&mut self` and every query takes `&self`, so the borrow checker already rules
/// out queries racing with mutation.
///
/// # Examples
///
/// ```rust
/// use graphcore::Graph;
///
/// let mut graph: Graph<&str> = Graph::directed();
/// graph.add_vertex("shirt")?;
/// graph.add_vertex("tie")?;
/// graph.add_vertex("jacket")?;
/// graph.add_edge(&"shirt", &"tie", ())?;
/// graph.add_edge(&"tie", &"jacket", ())?;
///
/// assert_eq!(graph.topological_sort()?, vec!["shirt", "tie", "jacket"]);
/// # Ok::<(), graphcore::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Graph<K, W = ()> {
    /// Vertices in insertion order; the position is the vertex's `NodeId`
    vertices: IndexMap<K, Vertex<K, W>>,
    /// Vertices with an arc into each vertex
    incoming: Vec<Vec<NodeId>>,
    /// Logical edge count (undirected pairs count once)
    edge_count: usize,
    directed: bool,
}

/// A graph whose edges carry a numeric weight.
///
/// This is the same type as [`Graph`]; the alias only changes the default payload
/// from `()` to `f64`. The spanning tree and shortest path methods are available
/// for any payload implementing [`Weight`].
pub type WeightedGraph<K, W = f64> = Graph<K, W>;

impl<K, W> Graph<K, W> {
    /// Creates an empty graph.
    ///
    /// # Arguments
    ///
    /// * `directed` - `true` for arcs that run from source to target only
    #[must_use]
    pub fn new(directed: bool) -> Self {
        Graph {
            vertices: IndexMap::new(),
            incoming: Vec::new(),
            edge_count: 0,
            directed,
        }
    }

    /// Creates an empty directed graph.
    #[must_use]
    pub fn directed() -> Self {
        Self::new(true)
    }

    /// Creates an empty undirected graph.
    #[must_use]
    pub fn undirected() -> Self {
        Self::new(false)
    }

    /// Creates an empty graph with room for `vertex_capacity` vertices.
    #[must_use]
    pub fn with_capacity(directed: bool, vertex_capacity: usize) -> Self {
        Graph {
            vertices: IndexMap::with_capacity(vertex_capacity),
            incoming: Vec::with_capacity(vertex_capacity),
            edge_count: 0,
            directed,
        }
    }

    /// Returns `true` if the graph is directed.
    #[must_use]
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Returns the number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of edges.
    ///
    /// Directed graphs count arcs; undirected graphs count each vertex pair once.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Returns `true` if the graph has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns the key of the vertex with the given index.
    #[must_use]
    pub fn key(&self, node: NodeId) -> Option<&K> {
        self.vertices.get_index(node.index()).map(|(key, _)| key)
    }

    /// Returns the vertex with the given index.
    #[must_use]
    pub fn vertex_by_id(&self, node: NodeId) -> Option<&Vertex<K, W>> {
        self.vertices.get_index(node.index()).map(|(_, vertex)| vertex)
    }

    /// Returns all vertices in insertion order.
    pub fn get_vertices(&self) -> impl Iterator<Item = &Vertex<K, W>> + '_ {
        self.vertices.values()
    }

    /// Returns all vertex keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.vertices.keys()
    }

    /// Returns every logical edge as `(source, target, payload)`.
    ///
    /// Undirected edges are reported once, from the endpoint added first.
    pub fn edges(&self) -> impl Iterator<Item = (&K, &K, &W)> + '_ {
        self.edge_ids().filter_map(move |(source, target, weight)| {
            Some((self.key(source)?, self.key(target)?, weight))
        })
    }

    /// Returns every logical edge as `(source, target, payload)` by index.
    pub(crate) fn edge_ids(&self) -> impl Iterator<Item = (NodeId, NodeId, &W)> + '_ {
        self.vertices
            .values()
            .enumerate()
            .flat_map(move |(index, vertex)| {
                let source = NodeId::new(index);
                vertex
                    .neighbors_with_weights()
                    .filter(move |(target, _)| self.directed || source <= *target)
                    .map(move |(target, weight)| (source, target, weight))
            })
    }
}

impl<K, W> Graph<K, W>
where
    K: Hash + Eq + Clone + fmt::Debug,
{
    /// Adds a new vertex with the given key.
    ///
    /// The vertex receives the next sequential [`NodeId`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateVertex`] if a vertex with this key already exists;
    /// the graph is unchanged.
    pub fn add_vertex(&mut self, id: K) -> Result<NodeId> {
        if self.vertices.contains_key(&id) {
            return Err(Error::DuplicateVertex(format!("{id:?}")));
        }

        let node = NodeId::new(self.vertices.len());
        trace!("adding vertex {id:?} as {node}");
        self.vertices.insert(id.clone(), Vertex::new(id));
        self.incoming.push(Vec::new());
        Ok(node)
    }

    /// Adds an edge from `from` to `to` carrying `weight`.
    ///
    /// For undirected graphs the edge is inserted in both directions. If the edge
    /// already exists its payload is replaced and its adjacency position kept.
    ///
    /// # Returns
    ///
    /// * `Ok(true)` if a new edge was added
    /// * `Ok(false)` if an existing edge's payload was replaced
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingVertex`] if either endpoint is absent. Both endpoints
    /// are checked before anything is inserted, so a failed call changes nothing.
    pub fn add_edge(&mut self, from: &K, to: &K, weight: W) -> Result<bool>
    where
        W: Clone,
    {
        let source = self.node_id(from).ok_or_else(|| Error::missing(from))?;
        let target = self.node_id(to).ok_or_else(|| Error::missing(to))?;

        let added = if !self.directed && source != target {
            let forward = self.insert_arc(source, target, weight.clone());
            self.insert_arc(target, source, weight);
            forward
        } else {
            self.insert_arc(source, target, weight)
        };

        if added {
            self.edge_count += 1;
        }
        trace!("adding edge {from:?} -> {to:?} (new: {added})");
        Ok(added)
    }

    fn insert_arc(&mut self, source: NodeId, target: NodeId, weight: W) -> bool {
        let added = self.vertices[source.index()].add_neighbor(target, weight);
        if added {
            self.incoming[target.index()].push(source);
        }
        added
    }

    /// Returns the index of the vertex with the given key.
    #[must_use]
    pub fn node_id(&self, id: &K) -> Option<NodeId> {
        self.vertices.get_index_of(id).map(NodeId::new)
    }

    /// Returns `true` if a vertex with the given key exists.
    #[must_use]
    pub fn contains_id(&self, id: &K) -> bool {
        self.vertices.contains_key(id)
    }

    /// Returns the vertex with the given key.
    #[must_use]
    pub fn vertex(&self, id: &K) -> Option<&Vertex<K, W>> {
        self.vertices.get(id)
    }

    /// Returns the keys of the neighbors of `id`, in adjacency insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingVertex`] if `id` is absent.
    pub fn neighbors(&self, id: &K) -> Result<impl Iterator<Item = &K> + '_> {
        let vertex = self.vertex(id).ok_or_else(|| Error::missing(id))?;
        Ok(vertex.neighbors().filter_map(move |node| self.key(node)))
    }

    /// Returns `(neighbor key, payload)` pairs for `id`, in adjacency insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingVertex`] if `id` is absent.
    pub fn neighbors_with_weights(&self, id: &K) -> Result<impl Iterator<Item = (&K, &W)> + '_> {
        let vertex = self.vertex(id).ok_or_else(|| Error::missing(id))?;
        Ok(vertex
            .neighbors_with_weights()
            .filter_map(move |(node, weight)| Some((self.key(node)?, weight))))
    }

    /// Returns the payload of the edge from `from` to `to`, if it exists.
    #[must_use]
    pub fn edge_weight(&self, from: &K, to: &K) -> Option<&W> {
        let target = self.node_id(to)?;
        self.vertex(from)?.weight_to(target)
    }

    /// Maps a slice of `NodeId`s back to keys.
    ///
    /// Indices that do not belong to this graph are skipped.
    #[must_use]
    pub fn map_nodes_to_keys(&self, nodes: &[NodeId]) -> Vec<K> {
        nodes
            .iter()
            .filter_map(|&node| self.key(node).cloned())
            .collect()
    }

    fn require(&self, id: &K) -> Result<NodeId> {
        self.node_id(id).ok_or_else(|| Error::missing(id))
    }

    fn key_of(&self, node: NodeId) -> K {
        self.vertices[node.index()].id().clone()
    }

    fn key_or_index(&self, node: NodeId) -> String {
        match self.key(node) {
            Some(key) => format!("{key:?}"),
            None => node.to_string(),
        }
    }
}

// Traversal, connectivity, ordering and coloring
impl<K, W> Graph<K, W>
where
    K: Hash + Eq + Clone + fmt::Debug,
{
    /// Returns the vertices reachable from `start` in breadth-first order.
    ///
    /// Each reachable vertex appears exactly once, in the order it was discovered.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingVertex`] if `start` is absent.
    pub fn bfs_traversal(&self, start: &K) -> Result<Vec<K>> {
        let start = self.require(start)?;
        let order: Vec<NodeId> = algorithms::bfs(self, start).collect();
        Ok(self.map_nodes_to_keys(&order))
    }

    /// Returns the vertices reachable from `start` in depth-first pre-order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingVertex`] if `start` is absent.
    pub fn dfs_traversal(&self, start: &K) -> Result<Vec<K>> {
        let start = self.require(start)?;
        let order: Vec<NodeId> = algorithms::dfs(self, start).collect();
        Ok(self.map_nodes_to_keys(&order))
    }

    /// Finds a path with the fewest edges from `start` to `target`.
    ///
    /// Among equally short paths, the first one discovered under adjacency
    /// insertion order wins.
    ///
    /// # Returns
    ///
    /// `Ok(Some(path))` with both endpoints included, or `Ok(None)` if `target` is
    /// unreachable.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingVertex`] if either endpoint is absent.
    pub fn find_shortest_path(&self, start: &K, target: &K) -> Result<Option<Vec<K>>> {
        let start = self.require(start)?;
        let target = self.require(target)?;
        Ok(algorithms::shortest_path(self, start, target).map(|path| self.map_nodes_to_keys(&path)))
    }

    /// Finds some path from `start` to `target` using depth-first search.
    ///
    /// The path is not necessarily the shortest one.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingVertex`] if either endpoint is absent.
    pub fn find_path_dfs(&self, start: &K, target: &K) -> Result<Option<Vec<K>>> {
        let start = self.require(start)?;
        let target = self.require(target)?;
        Ok(algorithms::find_path(self, start, target).map(|path| self.map_nodes_to_keys(&path)))
    }

    /// Returns the vertices whose shortest distance from `start` is exactly `distance`
    /// edges, in discovery order.
    ///
    /// A distance of 0 yields `start` alone.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingVertex`] if `start` is absent.
    pub fn find_vertices_n_away(&self, start: &K, distance: usize) -> Result<Vec<K>> {
        let start = self.require(start)?;
        let layer = algorithms::vertices_at_distance(self, start, distance);
        Ok(self.map_nodes_to_keys(&layer))
    }

    /// Returns `true` if the graph contains a cycle.
    ///
    /// Every component is searched. For undirected graphs the edge back to the
    /// vertex a search step came from does not count; self-loops do.
    #[must_use]
    pub fn contains_cycle(&self) -> bool {
        algorithms::has_cycle(self)
    }

    /// Returns one cycle of the graph as a closed key sequence (first == last).
    #[must_use]
    pub fn find_cycle(&self) -> Option<Vec<K>> {
        algorithms::find_cycle(self).map(|cycle| self.map_nodes_to_keys(&cycle))
    }

    /// Returns `true` if the vertices can be split into two sides with every edge
    /// running between the sides.
    ///
    /// Each connected component is checked independently; directed graphs are
    /// checked on their underlying undirected graph.
    #[must_use]
    pub fn is_bipartite(&self) -> bool {
        algorithms::is_bipartite(self)
    }

    /// Partitions the vertices into connected components.
    ///
    /// Directed graphs yield weakly connected components. Components are ordered by
    /// their first vertex in insertion order; members by discovery order.
    #[must_use]
    pub fn connected_components(&self) -> Vec<Vec<K>> {
        let components = algorithms::connected_components(self);
        debug!("found {} connected components", components.len());
        components
            .iter()
            .map(|component| self.map_nodes_to_keys(component))
            .collect()
    }

    /// Returns the vertices in an order consistent with every edge direction.
    ///
    /// Computed as the reversed depth-first post-order, after cycle detection has
    /// confirmed the graph is acyclic. An undirected edge counts as two opposing
    /// arcs, so only an undirected graph without edges can be sorted.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CycleError`] naming a vertex on a cycle if one exists.
    pub fn topological_sort(&self) -> Result<Vec<K>> {
        if let Some(&on_cycle) = algorithms::find_directed_cycle(self)
            .as_deref()
            .and_then(<[NodeId]>::first)
        {
            return Err(Error::CycleError(self.key_or_index(on_cycle)));
        }

        let mut order = algorithms::postorder_all(self);
        order.reverse();
        Ok(self.map_nodes_to_keys(&order))
    }

    /// Colors the vertices greedily in insertion order.
    ///
    /// Each vertex receives the smallest color not already used by one of its
    /// neighbors (in either direction). The result is deterministic but not
    /// guaranteed to use the minimum number of colors.
    #[must_use]
    pub fn greedy_coloring(&self) -> IndexMap<K, usize> {
        let colors = algorithms::greedy_coloring(self);
        self.vertices
            .keys()
            .cloned()
            .zip(colors)
            .collect()
    }
}

// Spanning trees and shortest paths
impl<K, W> Graph<K, W>
where
    K: Hash + Eq + Clone + fmt::Debug,
    W: Weight,
{
    /// Computes a minimum spanning tree with Kruskal's algorithm.
    ///
    /// Edges are considered in ascending weight order; equal weights keep vertex
    /// then adjacency insertion order. Directed graphs are treated as their
    /// underlying undirected graph.
    ///
    /// # Errors
    ///
    /// - [`Error::EmptyStructure`] if the graph has no vertices
    /// - [`Error::DisconnectedGraph`] if the edges run out before all vertices are
    ///   connected
    pub fn kruskal(&self) -> Result<SpanningTree<K, W>> {
        let tree = algorithms::kruskal(self)?;
        Ok(tree.map_vertices(|node| self.key_of(node)))
    }

    /// Computes a minimum spanning tree with Prim's algorithm, starting from the
    /// first vertex added.
    ///
    /// # Errors
    ///
    /// - [`Error::EmptyStructure`] if the graph has no vertices
    /// - [`Error::DisconnectedGraph`] if some vertex cannot be reached
    pub fn prim(&self) -> Result<SpanningTree<K, W>> {
        let tree = algorithms::prim(self, NodeId::new(0))?;
        Ok(tree.map_vertices(|node| self.key_of(node)))
    }

    /// Computes a minimum spanning tree with Prim's algorithm, starting from `start`.
    ///
    /// # Errors
    ///
    /// - [`Error::MissingVertex`] if `start` is absent
    /// - [`Error::DisconnectedGraph`] if some vertex cannot be reached
    pub fn prim_from(&self, start: &K) -> Result<SpanningTree<K, W>> {
        let start = self.require(start)?;
        let tree = algorithms::prim(self, start)?;
        Ok(tree.map_vertices(|node| self.key_of(node)))
    }

    /// Finds the path of least total weight from `start` to `target` with Dijkstra's
    /// algorithm.
    ///
    /// The search stops as soon as `target` is settled.
    ///
    /// # Returns
    ///
    /// `Ok(Some(path))` with the vertices and total distance, or `Ok(None)` if
    /// `target` is unreachable.
    ///
    /// # Errors
    ///
    /// - [`Error::MissingVertex`] if either endpoint is absent
    /// - [`Error::InvalidEdgeWeight`] if any edge weight is negative or NaN
    pub fn find_weighted_shortest_path(
        &self,
        start: &K,
        target: &K,
    ) -> Result<Option<WeightedPath<K, W>>> {
        let start = self.require(start)?;
        let target = self.require(target)?;
        self.check_non_negative()?;

        let paths = algorithms::dijkstra_unchecked(self, start, Some(target));
        let Some(path) = paths.path_to(target) else {
            return Ok(None);
        };

        let distance = paths.distance(target).unwrap_or_else(W::zero);
        Ok(Some(WeightedPath {
            vertices: self.map_nodes_to_keys(&path),
            distance,
        }))
    }

    /// Returns the least total weight from `start` to every reachable vertex.
    ///
    /// Entries follow vertex insertion order; unreachable vertices are absent.
    ///
    /// # Errors
    ///
    /// - [`Error::MissingVertex`] if `start` is absent
    /// - [`Error::InvalidEdgeWeight`] if any edge weight is negative or NaN
    pub fn shortest_distances(&self, start: &K) -> Result<IndexMap<K, W>> {
        let start = self.require(start)?;
        self.check_non_negative()?;

        let paths = algorithms::dijkstra_unchecked(self, start, None);
        Ok(self
            .node_ids()
            .filter_map(|node| Some((self.key(node)?.clone(), paths.distance(node)?)))
            .collect())
    }

    /// Computes the least total weight between every ordered pair of vertices with
    /// the Floyd-Warshall algorithm.
    ///
    /// Pairs connected only through paths whose total leaves the weight type's
    /// range report no distance.
    ///
    /// # Errors
    ///
    /// - [`Error::EmptyStructure`] if the graph has no vertices
    /// - [`Error::InvalidEdgeWeight`] if the graph contains a negative cycle
    pub fn floyd_warshall(&self) -> Result<DistanceMatrix<K, W>> {
        if self.vertices.is_empty() {
            return Err(Error::EmptyStructure);
        }

        let matrix = algorithms::all_pairs_unchecked(self);
        if let Some(&node) = matrix.negative_cycle() {
            return Err(Error::InvalidEdgeWeight(format!(
                "negative cycle through {}",
                self.key_or_index(node)
            )));
        }

        Ok(matrix.map_vertices(|node| self.key_of(node)))
    }

    fn check_non_negative(&self) -> Result<()> {
        match algorithms::find_negative_edge(self) {
            Some((source, target, weight)) => Err(Error::InvalidEdgeWeight(format!(
                "{weight:?} on edge {} -> {}",
                self.key_or_index(source),
                self.key_or_index(target)
            ))),
            None => Ok(()),
        }
    }
}

impl<K, W> GraphBase for Graph<K, W> {
    fn node_count(&self) -> usize {
        self.vertices.len()
    }

    fn node_ids(&self) -> impl Iterator<Item = NodeId> {
        (0..self.vertices.len()).map(NodeId::new)
    }

    fn is_directed(&self) -> bool {
        self.directed
    }
}

impl<K, W> Successors for Graph<K, W> {
    fn successors(&self, node: NodeId) -> impl Iterator<Item = NodeId> {
        self.vertices[node.index()].neighbors()
    }
}

impl<K, W> Predecessors for Graph<K, W> {
    fn predecessors(&self, node: NodeId) -> impl Iterator<Item = NodeId> {
        self.incoming[node.index()].iter().copied()
    }
}

impl<K, W: Weight> WeightedSuccessors for Graph<K, W> {
    type Weight = W;

    fn weighted_successors(&self, node: NodeId) -> impl Iterator<Item = (NodeId, W)> {
        self.vertices[node.index()]
            .neighbors_with_weights()
            .map(|(target, &weight)| (target, weight))
    }
}

impl<K: fmt::Debug, W> fmt::Display for Graph<K, W> {
    /// Renders `Graph with vertices: [A adjacent to [B, C], ...]`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Graph with vertices: [")?;
        for (position, vertex) in self.vertices.values().enumerate() {
            if position > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{:?} adjacent to [", vertex.id())?;
            for (slot, neighbor) in vertex.neighbors().enumerate() {
                if slot > 0 {
                    write!(f, ", ")?;
                }
                match self.key(neighbor) {
                    Some(key) => write!(f, "{key:?}")?,
                    None => write!(f, "{neighbor}")?,
                }
            }
            write!(f, "]")?;
        }
        write!(f, "]")
    }
}
