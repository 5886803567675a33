//! Error types for analysis operations.

use lf_core::LfError;
use lf_graph::GraphError;
use thiserror::Error;

/// Errors that can occur when setting up or querying an analysis.
///
/// Analyses trust an already-validated [`Graph`](lf_graph::Graph); the only
/// things re-checked here are their own parameters (vertex indices, flow
/// capacities). Unreachability is never an error: it is reported through
/// sentinels (infinite distance, `None` path, component-of-one).
#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("vertex {vertex} is not between 0 and {}", vertex_count.saturating_sub(1))]
    VertexOutOfRange { vertex: u32, vertex_count: usize },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: String },

    #[error("flow edge capacity must be nonnegative and finite, got {capacity}")]
    InvalidCapacity { capacity: f64 },

    #[error("Graph error: {0}")]
    Graph(#[from] GraphError),

    #[error("Core error: {0}")]
    Core(#[from] LfError),
}

pub type AnalysisResult<T> = Result<T, AnalysisError>;

/// Bounds-check an analysis parameter against the graph's vertex count.
pub(crate) fn check_vertex(
    vertex: lf_core::VertexId,
    vertex_count: usize,
) -> AnalysisResult<usize> {
    let idx = vertex.index() as usize;
    if idx >= vertex_count {
        return Err(AnalysisError::VertexOutOfRange {
            vertex: vertex.index(),
            vertex_count,
        });
    }
    Ok(idx)
}
