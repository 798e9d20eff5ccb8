use thiserror::Error;

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// Every failure is reported synchronously and leaves the structure it was raised from
/// unmodified: a rejected [`crate::Graph::add_edge`] inserts nothing, a failed
/// [`crate::BinaryMinHeap::delete_min`] removes nothing.
///
/// Variants that refer to a vertex carry the offending key rendered with its [`Debug`]
/// representation, so the error type stays independent of the graph's key type.
///
/// # Error Categories
///
/// ## Construction Errors
/// - [`Error::MissingVertex`] - An operation referenced a vertex that is not in the graph
/// - [`Error::DuplicateVertex`] - A vertex with the same key was already added
///
/// ## Structural Errors
/// - [`Error::EmptyStructure`] - Extraction from an empty heap, or an algorithm that needs
///   at least one vertex was run on an empty graph
/// - [`Error::DisconnectedGraph`] - A spanning tree was requested for a disconnected graph
/// - [`Error::CycleError`] - A topological order was requested for a cyclic graph
///
/// ## Weight Errors
/// - [`Error::InvalidEdgeWeight`] - Negative or NaN weight fed to Dijkstra, NaN weight fed
///   to a spanning tree algorithm, a spanning tree total that overflows, or a negative
///   cycle found by Floyd-Warshall
///
/// # Examples
///
/// ```rust
/// use graphcore::{Error, Graph};
///
/// let mut graph: Graph<&str> = Graph::undirected();
/// graph.add_vertex("A")?;
///
/// match graph.add_edge(&"A", &"B", ()) {
///     Err(Error::MissingVertex(key)) => assert_eq!(key, "\"B\""),
///     other => panic!("unexpected result: {other:?}"),
/// }
/// # Ok::<(), graphcore::Error>(())
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The operation referenced a vertex that does not exist in the graph.
    ///
    /// Raised by edge insertion when either endpoint is absent, and by every
    /// key-level query whose start or target vertex is absent.
    #[error("Vertex {0} does not exist in the graph")]
    MissingVertex(String),

    /// A vertex with this key already exists in the graph.
    #[error("Vertex {0} already exists in the graph")]
    DuplicateVertex(String),

    /// The structure is empty.
    ///
    /// Occurs when reading or removing the minimum of an empty heap, or when an
    /// algorithm that needs at least one vertex (spanning trees, Floyd-Warshall) runs
    /// on an empty graph.
    #[error("Structure is empty")]
    EmptyStructure,

    /// The graph is not connected, so no spanning tree exists.
    ///
    /// The associated values are the number of vertices the algorithm managed to
    /// connect and the total number of vertices in the graph.
    #[error("Graph is disconnected - spanned {reached} of {total} vertices")]
    DisconnectedGraph {
        /// Vertices connected by the partial tree
        reached: usize,
        /// Vertices in the graph
        total: usize,
    },

    /// The graph contains a cycle, so no topological order exists.
    ///
    /// The associated value names a vertex that lies on the detected cycle.
    #[error("Graph contains a cycle through vertex {0}")]
    CycleError(String),

    /// An edge weight violates the algorithm's precondition.
    ///
    /// Dijkstra rejects negative (and NaN) weights; Floyd-Warshall rejects graphs
    /// containing a negative cycle. Spanning trees reject NaN weights and totals that
    /// leave the weight type's range.
    #[error("Invalid edge weight - {0}")]
    InvalidEdgeWeight(String),
}

impl Error {
    /// Creates a [`Error::MissingVertex`] for the given key.
    pub(crate) fn missing<K: std::fmt::Debug + ?Sized>(key: &K) -> Self {
        Error::MissingVertex(format!("{key:?}"))
    }
}
