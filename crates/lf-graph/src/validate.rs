//! Graph validation logic.

use lf_core::{EdgeId, LfResult};

use crate::edge::Edge;
use crate::error::GraphError;

/// Validate every edge: endpoints in range, lengths finite and nonnegative.
pub(crate) fn validate_edges(vertex_count: usize, edges: &[Edge]) -> LfResult<()> {
    for edge in edges {
        for vertex in [edge.v, edge.w] {
            if vertex.index() as usize >= vertex_count {
                return Err(GraphError::EndpointOutOfRange {
                    vertex,
                    vertex_count,
                }
                .into());
            }
        }
        if !edge.length.value.is_finite() {
            return Err(GraphError::NonFiniteLength {
                length_m: edge.length.value,
            }
            .into());
        }
        if edge.length.value < 0.0 {
            return Err(GraphError::NegativeLength {
                length_m: edge.length.value,
            }
            .into());
        }
    }
    Ok(())
}

/// Validate adjacency lists for consistency.
pub(crate) fn validate_adjacency(
    vertex_count: usize,
    edges: &[Edge],
    adj_offsets: &[usize],
    incident: &[EdgeId],
) -> LfResult<()> {
    // Offsets array must have one entry per vertex plus a terminator.
    if adj_offsets.len() != vertex_count + 1 {
        return Err(GraphError::InconsistentAdjacency {
            edge: EdgeId::from_index(0),
            vertex: lf_core::VertexId::from_index(0),
        }
        .into());
    }

    // Every listed edge must exist and touch the vertex whose list it is in.
    for v_idx in 0..vertex_count {
        let vertex = lf_core::VertexId::from_index(v_idx as u32);
        let start = adj_offsets[v_idx];
        let end = adj_offsets[v_idx + 1];
        for &edge_id in &incident[start..end] {
            let Some(edge) = edges.get(edge_id.index() as usize) else {
                return Err(GraphError::InconsistentAdjacency {
                    edge: edge_id,
                    vertex,
                }
                .into());
            };
            if edge.v != vertex && edge.w != vertex {
                return Err(GraphError::InconsistentAdjacency {
                    edge: edge_id,
                    vertex,
                }
                .into());
            }
        }
    }

    // Every edge must be listed once per distinct endpoint.
    let mut seen = vec![0_usize; edges.len()];
    for &edge_id in incident {
        seen[edge_id.index() as usize] += 1;
    }
    for (i, edge) in edges.iter().enumerate() {
        let expected = if edge.v == edge.w { 1 } else { 2 };
        if seen[i] != expected {
            return Err(GraphError::InconsistentAdjacency {
                edge: EdgeId::from_index(i as u32),
                vertex: edge.v,
            }
            .into());
        }
    }

    Ok(())
}
