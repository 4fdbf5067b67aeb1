//! The dense directed-graph container.
//!
//! `DirectedGraph` stores one sorted adjacency row per vertex in contiguous
//! storage. Vertex ids are dense (0..count), so a row is found by direct
//! indexing rather than a hash lookup, and the sorted rows double as the
//! duplicate-edge index and as the deterministic enumeration order.

use smallvec::SmallVec;

use super::descriptors::{EdgeDescriptor, VertexId};
use super::errors::GraphError;

/// Maximum size for inline storage in an adjacency row.
const INLINE_ADJACENCY: usize = 8;

/// A sorted row of outgoing targets for one vertex.
type AdjacencyRow = SmallVec<[VertexId; INLINE_ADJACENCY]>;

/// A growable directed graph over dense integer vertex ids.
///
/// - Vertices are identified by contiguous ids starting at 0;
///   [`add_vertex`](Self::add_vertex) assigns the next unused id.
/// - Edges are ordered `(source, target)` pairs. Self-loops are allowed,
///   parallel edges are not: re-inserting a pair is a reported no-op.
/// - [`add_edge`](Self::add_edge) with endpoints past the current count
///   auto-extends the vertex set up to `max(u, v)`.
/// - All iteration is in ascending id order: vertices by id, adjacency rows
///   by target id, edges by `(source, target)`.
///
/// The graph only ever grows; there is no vertex or edge removal. Cloning
/// copies all storage, so a clone and its original never share state.
///
/// # Example
///
/// ```
/// use densegraph::DirectedGraph;
///
/// let mut g = DirectedGraph::new();
/// let u = g.add_vertex();
/// let v = g.add_vertex();
/// let (ed, inserted) = g.add_edge(u, v);
/// assert!(inserted);
/// assert_eq!(ed.source(), u);
/// assert_eq!(ed.target(), v);
/// assert_eq!(g.num_vertices(), 2);
/// assert_eq!(g.num_edges(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DirectedGraph {
    /// One sorted row of outgoing targets per vertex, indexed by vertex id.
    adjacency: Vec<AdjacencyRow>,
    /// Total edge count, kept in step with the rows for O(1) `num_edges`.
    edge_count: usize,
}

impl DirectedGraph {
    /// Creates an empty graph with no vertices and no edges.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty graph with row storage preallocated for `vertices`.
    pub fn with_capacity(vertices: usize) -> Self {
        Self {
            adjacency: Vec::with_capacity(vertices),
            edge_count: 0,
        }
    }

    /// Adds a vertex and returns its freshly assigned id.
    ///
    /// The id equals the vertex count before the call; the new vertex starts
    /// with an empty adjacency row. Never fails.
    pub fn add_vertex(&mut self) -> VertexId {
        let id = VertexId(self.adjacency.len() as u32);
        self.adjacency.push(AdjacencyRow::new());
        id
    }

    /// Adds the directed edge `u -> v`.
    ///
    /// Endpoints need not exist yet: the vertex set first grows so that every
    /// id up to `max(u, v)` is present. Then, if the pair is already an edge,
    /// nothing further changes and the flag is `false`; otherwise `v` is
    /// inserted into `u`'s row at its sorted position and the flag is `true`.
    /// Either way the returned descriptor names the pair. Never fails.
    pub fn add_edge(&mut self, u: VertexId, v: VertexId) -> (EdgeDescriptor, bool) {
        self.grow_to_include(u.max(v));

        let descriptor = EdgeDescriptor::new(u, v);
        let row = &mut self.adjacency[u.index()];
        match row.binary_search(&v) {
            Ok(_) => (descriptor, false),
            Err(pos) => {
                row.insert(pos, v);
                self.edge_count += 1;
                (descriptor, true)
            }
        }
    }

    /// Looks up the edge `u -> v` without mutating anything.
    ///
    /// The flag is `true` iff the pair is in the edge set; unknown endpoints
    /// simply report `false`.
    pub fn edge(&self, u: VertexId, v: VertexId) -> (EdgeDescriptor, bool) {
        let found = self.row(u).binary_search(&v).is_ok();
        (EdgeDescriptor::new(u, v), found)
    }

    /// Returns true when the pair `u -> v` is in the edge set.
    pub fn contains_edge(&self, u: VertexId, v: VertexId) -> bool {
        self.edge(u, v).1
    }

    /// Returns true when `v` is a known vertex id.
    pub fn contains_vertex(&self, v: VertexId) -> bool {
        v.index() < self.adjacency.len()
    }

    /// Iterates over all vertex ids in ascending order.
    ///
    /// The iterator is lazy and restartable; each call starts a fresh pass
    /// over `0..num_vertices()`.
    pub fn vertices(&self) -> impl ExactSizeIterator<Item = VertexId> {
        (0..self.adjacency.len() as u32).map(VertexId)
    }

    /// Iterates over all edges in ascending `(source, target)` order.
    ///
    /// The order is a consequence of walking the sorted adjacency rows by
    /// source id, so no sort step runs at enumeration time. The iterator is
    /// lazy and restartable and reports an exact length of `num_edges()`.
    pub fn edges(&self) -> Edges<'_> {
        Edges {
            rows: &self.adjacency,
            source: 0,
            offset: 0,
            remaining: self.edge_count,
        }
    }

    /// Iterates over the outgoing targets of `v` in ascending order.
    ///
    /// An unknown `v` yields the empty sequence; adjacency queries are total.
    pub fn adjacent_vertices(&self, v: VertexId) -> impl ExactSizeIterator<Item = VertexId> + '_ {
        self.row(v).iter().copied()
    }

    /// Number of vertices, O(1).
    pub fn num_vertices(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of edges, O(1).
    pub fn num_edges(&self) -> usize {
        self.edge_count
    }

    /// Returns true when the graph has no vertices and no edges.
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Number of outgoing edges of `v`, 0 for an unknown id.
    pub fn out_degree(&self, v: VertexId) -> usize {
        self.row(v).len()
    }

    /// Returns the vertex id occupying enumeration position `position`.
    ///
    /// Ids are dense, so the id at position `i` is `i` itself; the lookup
    /// exists so callers written against a positional interface keep working
    /// and get a checked answer. Positions past the current count fail with
    /// [`GraphError::PositionOutOfRange`].
    pub fn vertex(&self, position: usize) -> Result<VertexId, GraphError> {
        if position < self.adjacency.len() {
            Ok(VertexId(position as u32))
        } else {
            Err(GraphError::PositionOutOfRange {
                position,
                len: self.adjacency.len(),
            })
        }
    }

    /// The adjacency row of `v`, empty for an unknown id.
    fn row(&self, v: VertexId) -> &[VertexId] {
        match self.adjacency.get(v.index()) {
            Some(row) => row.as_slice(),
            None => &[],
        }
    }

    /// Grows the vertex set so that every id up to `last` exists.
    fn grow_to_include(&mut self, last: VertexId) {
        let needed = last.index() + 1;
        if needed > self.adjacency.len() {
            #[cfg(feature = "tracing")]
            tracing::trace!(
                from = self.adjacency.len(),
                to = needed,
                "auto-extending vertex set"
            );
            self.adjacency.resize_with(needed, AdjacencyRow::new);
        }
    }
}

/// Lazy iterator over all edges of a [`DirectedGraph`].
///
/// Yields descriptors in ascending `(source, target)` order and knows its
/// exact length up front.
#[derive(Debug, Clone)]
pub struct Edges<'a> {
    rows: &'a [AdjacencyRow],
    source: usize,
    offset: usize,
    remaining: usize,
}

impl Iterator for Edges<'_> {
    type Item = EdgeDescriptor;

    fn next(&mut self) -> Option<EdgeDescriptor> {
        while self.source < self.rows.len() {
            let row = &self.rows[self.source];
            if self.offset < row.len() {
                let target = row[self.offset];
                self.offset += 1;
                self.remaining -= 1;
                return Some(EdgeDescriptor::new(VertexId(self.source as u32), target));
            }
            self.source += 1;
            self.offset = 0;
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Edges<'_> {}

impl std::iter::FusedIterator for Edges<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_vertex_assigns_dense_ids() {
        let mut g = DirectedGraph::new();
        assert_eq!(g.add_vertex(), VertexId(0));
        assert_eq!(g.add_vertex(), VertexId(1));
        assert_eq!(g.add_vertex(), VertexId(2));
        assert_eq!(g.num_vertices(), 3);
        assert_eq!(g.num_edges(), 0);
    }

    #[test]
    fn add_edge_grows_to_cover_both_endpoints() {
        let mut g = DirectedGraph::new();
        let (ed, inserted) = g.add_edge(VertexId(5), VertexId(2));
        assert!(inserted);
        assert_eq!(ed, EdgeDescriptor::new(VertexId(5), VertexId(2)));
        assert_eq!(g.num_vertices(), 6);
        for id in 0..6 {
            assert!(g.contains_vertex(VertexId(id)));
        }
        assert_eq!(g.out_degree(VertexId(5)), 1);
    }

    #[test]
    fn duplicate_edge_is_a_reported_no_op() {
        let mut g = DirectedGraph::new();
        let (first, inserted) = g.add_edge(VertexId(0), VertexId(1));
        assert!(inserted);
        let (second, inserted) = g.add_edge(VertexId(0), VertexId(1));
        assert!(!inserted);
        assert_eq!(first, second);
        assert_eq!(g.num_edges(), 1);
    }

    #[test]
    fn unknown_vertex_has_empty_adjacency() {
        let g = DirectedGraph::new();
        assert_eq!(g.adjacent_vertices(VertexId(7)).count(), 0);
        assert_eq!(g.out_degree(VertexId(7)), 0);
        assert!(!g.contains_edge(VertexId(7), VertexId(7)));
    }

    #[test]
    fn vertex_by_position_checks_the_range() {
        let mut g = DirectedGraph::new();
        g.add_vertex();
        g.add_vertex();
        assert_eq!(g.vertex(1), Ok(VertexId(1)));
        assert_eq!(
            g.vertex(2),
            Err(GraphError::PositionOutOfRange { position: 2, len: 2 })
        );
    }

    #[test]
    fn edges_iterator_reports_exact_length() {
        let mut g = DirectedGraph::new();
        g.add_edge(VertexId(0), VertexId(1));
        g.add_edge(VertexId(2), VertexId(0));
        g.add_edge(VertexId(0), VertexId(2));
        let iter = g.edges();
        assert_eq!(iter.len(), 3);
        assert_eq!(iter.count(), 3);
    }
}
