//! # graphcore Prelude
//!
//! The most commonly used types and traits of the crate. Import this module to get
//! the graph container, its result types and the supporting data structures in one
//! line.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The error type for all graphcore operations
pub use crate::Error;

/// The result type used throughout graphcore
pub use crate::Result;

// ================================================================================================
// Graph Container
// ================================================================================================

/// Keyed graph container, unweighted and weighted
pub use crate::graph::{Graph, WeightedGraph};

/// Vertex and dense vertex index
pub use crate::graph::{NodeId, Vertex};

// ================================================================================================
// Graph Traits
// ================================================================================================

/// Adjacency views used by the index-level algorithms
pub use crate::graph::{GraphBase, Predecessors, Successors, WeightedSuccessors};

/// Numeric edge weights
pub use crate::graph::Weight;

// ================================================================================================
// Algorithm Results
// ================================================================================================

/// Results of the weighted algorithms
pub use crate::graph::algorithms::{DistanceMatrix, ShortestPaths, SpanningTree, WeightedPath};

// ================================================================================================
// Supporting Data Structures
// ================================================================================================

/// Binary min-heap and its helpers
pub use crate::heap::{heap_sort, heapify, BinaryMinHeap};

/// Union-find forest
pub use crate::disjoint_set::DisjointSet;
