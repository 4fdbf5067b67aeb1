//! Vertex and edge descriptors.
//!
//! Descriptors are small copyable values. A vertex is identified by a dense
//! integer id, an edge by the ordered pair of its endpoint ids. Both order
//! by id so iteration over them is deterministic.

use std::fmt;

/// A unique identifier for a vertex in the graph.
///
/// Ids are dense and contiguous: the first vertex is 0, and each
/// [`add_vertex`](crate::DirectedGraph::add_vertex) assigns the next unused
/// integer. VertexId implements Ord/PartialOrd for stable, deterministic
/// iteration. Uses u32 internally for efficient storage and indexing.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VertexId(pub u32);

impl VertexId {
    /// The id as a positional index into dense per-vertex storage.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl From<u32> for VertexId {
    fn from(id: u32) -> Self {
        VertexId(id)
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A directed edge, identified by its ordered `(source, target)` pair.
///
/// The descriptor is self-contained: [`source`](Self::source) and
/// [`target`](Self::target) are pure projections that need no access to the
/// graph the edge came from. Two descriptors are equal exactly when they
/// name the same ordered pair, and the derived Ord gives the ascending
/// `(source, target)` order used by edge enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EdgeDescriptor {
    source: VertexId,
    target: VertexId,
}

impl EdgeDescriptor {
    /// Creates the descriptor for the directed edge `source -> target`.
    #[inline]
    pub fn new(source: VertexId, target: VertexId) -> Self {
        Self { source, target }
    }

    /// Source vertex of the edge.
    #[inline]
    pub fn source(self) -> VertexId {
        self.source
    }

    /// Destination vertex of the edge.
    #[inline]
    pub fn target(self) -> VertexId {
        self.target
    }

    /// Returns true when source and target coincide.
    #[inline]
    pub fn is_self_loop(self) -> bool {
        self.source == self.target
    }
}

impl From<(VertexId, VertexId)> for EdgeDescriptor {
    fn from((source, target): (VertexId, VertexId)) -> Self {
        Self::new(source, target)
    }
}

impl fmt::Display for EdgeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.source, self.target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn projections_read_back_the_pair() {
        let ed = EdgeDescriptor::new(VertexId(0), VertexId(1));
        assert_eq!(ed.source(), VertexId(0));
        assert_eq!(ed.target(), VertexId(1));
        assert!(!ed.is_self_loop());
        assert!(EdgeDescriptor::new(VertexId(3), VertexId(3)).is_self_loop());
    }

    #[test]
    fn descriptors_order_by_source_then_target() {
        let a = EdgeDescriptor::new(VertexId(0), VertexId(5));
        let b = EdgeDescriptor::new(VertexId(1), VertexId(0));
        let c = EdgeDescriptor::new(VertexId(1), VertexId(2));
        assert!(a < b);
        assert!(b < c);
    }
}
