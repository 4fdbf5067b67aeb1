//! # densegraph
//!
//! A dense directed-graph container with deterministic iteration order.
//!
//! Vertex ids are assigned contiguously from 0, edges are ordered pairs of
//! ids with duplicate detection, and every iteration surface (vertices,
//! edges, adjacency) enumerates in ascending order.

pub mod graph;

// Re-export commonly used types
pub use graph::descriptors::{EdgeDescriptor, VertexId};
pub use graph::directed::DirectedGraph;
pub use graph::errors::GraphError;
