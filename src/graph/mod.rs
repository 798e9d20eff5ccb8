//! Generic graph container and the algorithms that run on it.
//!
//! # Architecture
//!
//! - **Core Types**: [`Graph`], [`Vertex`] and [`NodeId`] hold the structure. One
//!   generic `Graph<K, W>` serves both the unweighted (`W = ()`) and the weighted
//!   ([`WeightedGraph`]) case, so both share a single set of fields and accessors.
//! - **Traits**: [`GraphBase`], [`Successors`], [`Predecessors`] and
//!   [`WeightedSuccessors`] are the seams the algorithms read through.
//! - **Algorithms**: [`algorithms`] implements every algorithm on [`NodeId`]s.
//!   `Graph` wraps them in key-level methods that validate the caller's keys and map
//!   results back to keys.
//!
//! # Design Principles
//!
//! ## Insertion Order Is Observable
//!
//! Vertices keep the order they were added in, and each vertex keeps its neighbors
//! in the order the edges were added. Traversal orders, shortest-path tie-breaks,
//! greedy colors and spanning-tree tie-breaks are all deterministic functions of that
//! order.
//!
//! ## Immutable After Construction
//!
//! Vertices and edges are only ever added through [`Graph::add_vertex`] and
//! [`Graph::add_edge`]. Algorithms borrow the graph immutably and keep their scratch
//! state (visited sets, heaps, union-find forests) local to the call.
//!
//! # Usage Examples
//!
//! ## Unweighted Graph
//!
//! ```rust
//! use graphcore::Graph;
//!
//! let mut graph: Graph<&str> = Graph::undirected();
//! for id in ["A", "B", "C", "D"] {
//!     graph.add_vertex(id)?;
//! }
//! graph.add_edge(&"A", &"B", ())?;
//! graph.add_edge(&"B", &"C", ())?;
//! graph.add_edge(&"C", &"D", ())?;
//!
//! assert_eq!(graph.bfs_traversal(&"A")?, vec!["A", "B", "C", "D"]);
//! assert_eq!(graph.find_shortest_path(&"A", &"D")?, Some(vec!["A", "B", "C", "D"]));
//! assert!(!graph.contains_cycle());
//!
//! graph.add_edge(&"D", &"A", ())?;
//! assert!(graph.contains_cycle());
//! # Ok::<(), graphcore::Error>(())
//! ```
//!
//! ## Weighted Graph
//!
//! ```rust
//! use graphcore::WeightedGraph;
//!
//! let mut graph: WeightedGraph<&str> = WeightedGraph::undirected();
//! for id in ["A", "B", "C"] {
//!     graph.add_vertex(id)?;
//! }
//! graph.add_edge(&"A", &"B", 1.0)?;
//! graph.add_edge(&"B", &"C", 2.0)?;
//! graph.add_edge(&"A", &"C", 5.0)?;
//!
//! let tree = graph.kruskal()?;
//! assert_eq!(tree.total_weight, 3.0);
//!
//! let path = graph.find_weighted_shortest_path(&"A", &"C")?.unwrap();
//! assert_eq!(path.vertices, vec!["A", "B", "C"]);
//! assert_eq!(path.distance, 3.0);
//! # Ok::<(), graphcore::Error>(())
//! ```

mod adjacency;
mod node;
mod traits;
mod vertex;

pub mod algorithms;

pub use adjacency::{Graph, WeightedGraph};
pub use node::NodeId;
pub use traits::{GraphBase, Predecessors, Successors, Weight, WeightedSuccessors};
pub use vertex::Vertex;
