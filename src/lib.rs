// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]

//! # graphcore
//!
//! Directed and undirected graphs with keyed vertices, plus the classic algorithms
//! that run on them: traversal, shortest paths, cycle detection, bipartiteness,
//! connected components, topological ordering, greedy coloring, minimum spanning
//! trees and all-pairs distances. A binary min-heap and a disjoint-set forest are
//! exported alongside, since the weighted algorithms are built on them.
//!
//! ## Features
//!
//! - **Keyed vertices** - Any `Hash + Eq + Clone` type identifies a vertex; results
//!   come back in the same keys
//! - **One graph type** - [`Graph<K, W>`](Graph) carries `()` edges when unweighted and
//!   a numeric [`Weight`] when weighted ([`WeightedGraph`])
//! - **Deterministic** - Vertex and adjacency insertion order decide every
//!   tie-break, so the same construction always yields the same answers
//! - **Explicit failures** - Missing vertices, cycles, disconnected inputs and
//!   invalid weights are reported through [`Error`], never panics
//! - **No recursion limits** - Every depth-first algorithm keeps its own stack
//!
//! ## Quick Start
//!
//! ```rust
//! use graphcore::prelude::*;
//!
//! let mut graph: WeightedGraph<&str> = WeightedGraph::undirected();
//! for city in ["Ashby", "Brill", "Cotton", "Dunmore"] {
//!     graph.add_vertex(city)?;
//! }
//! graph.add_edge(&"Ashby", &"Brill", 4.0)?;
//! graph.add_edge(&"Brill", &"Cotton", 3.0)?;
//! graph.add_edge(&"Ashby", &"Cotton", 9.0)?;
//! graph.add_edge(&"Cotton", &"Dunmore", 1.5)?;
//!
//! let route = graph
//!     .find_weighted_shortest_path(&"Ashby", &"Dunmore")?
//!     .expect("Dunmore is reachable");
//! assert_eq!(route.vertices, vec!["Ashby", "Brill", "Cotton", "Dunmore"]);
//! assert_eq!(route.distance, 8.5);
//!
//! let tree = graph.kruskal()?;
//! assert_eq!(tree.total_weight, 8.5);
//! # Ok::<(), graphcore::Error>(())
//! ```
//!
//! ## Architecture
//!
//! - [`graph`] - The [`Graph`] container, its traits and the index-level
//!   [`algorithms`](graph::algorithms)
//! - [`heap`] - [`BinaryMinHeap`], `heapify` and `heap_sort`
//! - [`disjoint_set`] - [`DisjointSet`] (union-find)
//! - [`prelude`] - Glob import of the common types
//!
//! ## Logging
//!
//! The crate logs through the [`log`] facade: `trace` records for every inserted
//! vertex and edge, `debug` summaries from the algorithms. Nothing is emitted unless
//! the application installs a logger.

mod error;

/// Generic graph container and the algorithms that run on it.
///
/// # Key Types
///
/// - [`graph::Graph`] - Keyed adjacency-list graph, directed or undirected
/// - [`graph::Vertex`] - A vertex with its ordered adjacency
/// - [`graph::NodeId`] - Dense vertex index used by the algorithms
///
/// # Traits
///
/// - [`graph::GraphBase`], [`graph::Successors`], [`graph::Predecessors`],
///   [`graph::WeightedSuccessors`] - Adjacency views the algorithms read through
/// - [`graph::Weight`] - Numeric edge weights
pub mod graph;

/// Array-backed binary min-heap with `heapify` and `heap_sort`.
pub mod heap;

/// Disjoint-set (union-find) forest.
pub mod disjoint_set;

/// Convenient re-exports of the most commonly used types and traits.
///
/// # Example
///
/// ```rust
/// use graphcore::prelude::*;
///
/// let mut graph: Graph<u32> = Graph::directed();
/// graph.add_vertex(1)?;
/// graph.add_vertex(2)?;
/// graph.add_edge(&1, &2, ())?;
/// assert_eq!(graph.topological_sort()?, vec![1, 2]);
/// # Ok::<(), graphcore::Error>(())
/// ```
pub mod prelude;

/// `graphcore` Result type
///
/// A type alias for `std::result::Result<T, Error>` where the error type is always
/// [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// `graphcore` Error type
///
/// The error type for all fallible operations in this crate.
///
/// # Examples
///
/// ```rust
/// use graphcore::{Error, Graph};
///
/// let mut graph: Graph<&str> = Graph::directed();
/// graph.add_vertex("A")?;
/// graph.add_vertex("B")?;
/// graph.add_edge(&"A", &"B", ())?;
/// graph.add_edge(&"B", &"A", ())?;
///
/// match graph.topological_sort() {
///     Ok(order) => println!("order: {order:?}"),
///     Err(Error::CycleError(vertex)) => println!("cycle through {vertex}"),
///     Err(e) => println!("error: {e}"),
/// }
/// # Ok::<(), graphcore::Error>(())
/// ```
pub use error::Error;

pub use disjoint_set::DisjointSet;
pub use graph::{
    Graph, GraphBase, NodeId, Predecessors, Successors, Vertex, Weight, WeightedGraph,
    WeightedSuccessors,
};
pub use heap::BinaryMinHeap;
