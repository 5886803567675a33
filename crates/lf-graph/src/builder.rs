//! Incremental graph builder.

use lf_core::units::Length;
use lf_core::{EdgeId, LfResult, VertexId};

use crate::edge::Edge;
use crate::error::GraphError;
use crate::graph::Graph;
use crate::medium::Medium;
use crate::validate;

/// Builder for constructing a graph incrementally.
///
/// The vertex count is fixed up front (vertices are `[0, V)`); links are
/// appended with `add_link`, which validates each link as it arrives. Call
/// `build()` to re-validate and freeze the result into an immutable [`Graph`].
#[derive(Debug)]
pub struct GraphBuilder {
    vertex_count: usize,
    edges: Vec<Edge>,
}

impl GraphBuilder {
    /// Create a builder for a graph with the given number of vertices.
    pub fn new(vertex_count: usize) -> Self {
        Self {
            vertex_count,
            edges: Vec::new(),
        }
    }

    /// Append a link between `v` and `w` and return its ID.
    ///
    /// Rejects out-of-range endpoints and negative or non-finite lengths.
    /// Bandwidth is `u32`, so a negative capacity is unrepresentable here;
    /// the loader rejects negative literals before conversion.
    pub fn add_link(
        &mut self,
        v: VertexId,
        w: VertexId,
        medium: Medium,
        bandwidth: u32,
        length: Length,
    ) -> LfResult<EdgeId> {
        for &vertex in &[v, w] {
            if vertex.index() as usize >= self.vertex_count {
                return Err(GraphError::EndpointOutOfRange {
                    vertex,
                    vertex_count: self.vertex_count,
                }
                .into());
            }
        }
        if !length.value.is_finite() {
            return Err(GraphError::NonFiniteLength {
                length_m: length.value,
            }
            .into());
        }
        if length.value < 0.0 {
            return Err(GraphError::NegativeLength {
                length_m: length.value,
            }
            .into());
        }

        let id = EdgeId::from_index(self.edges.len() as u32);
        self.edges.push(Edge {
            v,
            w,
            medium,
            bandwidth,
            length,
        });
        Ok(id)
    }

    /// Build and validate the graph, returning an immutable [`Graph`].
    ///
    /// Re-validates every edge and constructs the compact adjacency lists.
    pub fn build(self) -> LfResult<Graph> {
        validate::validate_edges(self.vertex_count, &self.edges)?;

        let (adj_offsets, incident) = Self::build_adjacency(self.vertex_count, &self.edges);

        validate::validate_adjacency(self.vertex_count, &self.edges, &adj_offsets, &incident)?;

        Ok(Graph {
            vertex_count: self.vertex_count,
            edges: self.edges,
            adj_offsets,
            incident,
        })
    }

    /// Build compact adjacency lists: for each vertex, collect its incident edges.
    fn build_adjacency(vertex_count: usize, edges: &[Edge]) -> (Vec<usize>, Vec<EdgeId>) {
        let mut per_vertex: Vec<Vec<EdgeId>> = vec![Vec::new(); vertex_count];
        for (i, edge) in edges.iter().enumerate() {
            let id = EdgeId::from_index(i as u32);
            per_vertex[edge.v.index() as usize].push(id);
            if edge.w != edge.v {
                per_vertex[edge.w.index() as usize].push(id);
            }
        }

        // Edge IDs arrive in insertion order, so each list is already sorted.
        let mut offsets = Vec::with_capacity(vertex_count + 1);
        let mut incident = Vec::new();
        offsets.push(0);
        for list in &per_vertex {
            incident.extend_from_slice(list);
            offsets.push(incident.len());
        }

        (offsets, incident)
    }
}
