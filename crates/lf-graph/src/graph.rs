//! The frozen topology.

use lf_core::{EdgeId, VertexId};

use crate::edge::Edge;

/// The graph: a validated, immutable collection of vertices and links.
///
/// The graph stores:
/// - The vertex count (vertices are the integers `[0, V)`).
/// - All edges in a single append-only vector, indexed by [`EdgeId`].
/// - Compact adjacency: for each vertex, the IDs of its incident edges.
///
/// Built once by [`GraphBuilder`](crate::GraphBuilder), then read-only for
/// every analysis. Analyses filter or reinterpret the shared edge array by
/// index instead of rebuilding graph instances.
#[derive(Debug, Clone)]
pub struct Graph {
    pub(crate) vertex_count: usize,
    pub(crate) edges: Vec<Edge>,

    /// Offsets for vertex->edge adjacency: vertex i's incident edges are in
    /// `incident[adj_offsets[i]..adj_offsets[i + 1]]`.
    pub(crate) adj_offsets: Vec<usize>,

    /// Flat list of edge IDs incident to vertices (sorted by vertex then edge
    /// ID for determinism). A self-loop appears once.
    pub(crate) incident: Vec<EdgeId>,
}

impl Graph {
    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// All edges, in insertion order. `EdgeId` indexes into this slice.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Get an edge by ID (returns None if ID out of bounds).
    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(id.index() as usize)
    }

    /// IDs of the edges incident to a given vertex.
    pub fn adj(&self, vertex: VertexId) -> &[EdgeId] {
        let idx = vertex.index() as usize;
        if idx >= self.vertex_count {
            return &[];
        }
        let start = self.adj_offsets[idx];
        let end = self.adj_offsets[idx + 1];
        &self.incident[start..end]
    }

    /// Degree of a vertex (self-loops count once).
    pub fn degree(&self, vertex: VertexId) -> usize {
        self.adj(vertex).len()
    }

    /// True if `vertex` indexes an existing vertex.
    pub fn contains_vertex(&self, vertex: VertexId) -> bool {
        (vertex.index() as usize) < self.vertex_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::GraphBuilder;
    use crate::medium::Medium;
    use lf_core::units::m;
    use lf_core::Id;

    #[test]
    fn adjacency_of_missing_vertex_is_empty() {
        let graph = GraphBuilder::new(2).build().unwrap();
        assert!(graph.adj(Id::from_index(5)).is_empty());
        assert!(!graph.contains_vertex(Id::from_index(5)));
    }

    #[test]
    fn degree_counts_incident_edges() {
        let mut builder = GraphBuilder::new(3);
        let v0 = Id::from_index(0);
        let v1 = Id::from_index(1);
        let v2 = Id::from_index(2);
        builder.add_link(v0, v1, Medium::Copper, 10, m(100.0)).unwrap();
        builder.add_link(v0, v2, Medium::Copper, 5, m(50.0)).unwrap();
        let graph = builder.build().unwrap();

        assert_eq!(graph.degree(v0), 2);
        assert_eq!(graph.degree(v1), 1);
        assert_eq!(graph.degree(v2), 1);
    }
}
