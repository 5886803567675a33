//! Graph-specific error types.

use lf_core::{EdgeId, LfError, VertexId};

/// Graph construction and validation errors.
#[derive(Debug, Clone, PartialEq)]
pub enum GraphError {
    /// An edge endpoint is outside [0, V).
    EndpointOutOfRange { vertex: VertexId, vertex_count: usize },

    /// An edge length is negative.
    NegativeLength { length_m: f64 },

    /// An edge length is NaN or infinite.
    NonFiniteLength { length_m: f64 },

    /// Adjacency list is inconsistent (edge listed under a vertex it does not touch).
    InconsistentAdjacency { edge: EdgeId, vertex: VertexId },
}

impl std::fmt::Display for GraphError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GraphError::EndpointOutOfRange {
                vertex,
                vertex_count,
            } => {
                write!(
                    f,
                    "vertex {} is not between 0 and {}",
                    vertex,
                    vertex_count.saturating_sub(1)
                )
            }
            GraphError::NegativeLength { length_m } => {
                write!(f, "edge length must be nonnegative, got {}", length_m)
            }
            GraphError::NonFiniteLength { length_m } => {
                write!(f, "edge length must be finite, got {}", length_m)
            }
            GraphError::InconsistentAdjacency { edge, vertex } => {
                write!(
                    f,
                    "edge {} in vertex {}'s adjacency list but doesn't touch that vertex",
                    edge, vertex
                )
            }
        }
    }
}

impl std::error::Error for GraphError {}

impl From<GraphError> for LfError {
    fn from(err: GraphError) -> Self {
        LfError::Invariant {
            what: err.to_string(),
        }
    }
}
