//! The directed-graph container and its supporting types.
//!
//! This module provides:
//! - **descriptors**: Vertex and edge descriptor newtypes
//! - **directed**: The `DirectedGraph` container and its lazy iterators
//! - **errors**: Error types for fallible lookups

pub mod descriptors;
pub mod directed;
pub mod errors;

pub use descriptors::{EdgeDescriptor, VertexId};
pub use directed::DirectedGraph;
pub use errors::GraphError;
