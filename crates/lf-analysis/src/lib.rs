//! lf-analysis: topology analyses over a frozen linkflow graph.
//!
//! Each analysis takes a `&Graph` and owns every working structure it
//! allocates; nothing is shared between analyses or across calls. All
//! engines are synchronous and run to completion.
//!
//! Provides:
//! - [`ShortestPaths`]: lowest-latency routes (Dijkstra)
//! - [`ConnectedComponents`]: component labeling, optionally filtered
//! - [`FlowNetwork`] / [`MaxFlow`]: max flow and min cut (Ford-Fulkerson)
//! - [`PrimMst`]: minimum-latency spanning tree
//! - [`CutPairs`]: brute-force disconnecting vertex pairs

pub mod connectivity;
pub mod cutpairs;
pub mod error;
pub mod maxflow;
pub mod mst;
pub(crate) mod pq;
pub mod shortest;

// Re-exports for ergonomics
pub use connectivity::ConnectedComponents;
pub use cutpairs::CutPairs;
pub use error::{AnalysisError, AnalysisResult};
pub use maxflow::{FlowEdge, FlowNetwork, MaxFlow};
pub use mst::PrimMst;
pub use shortest::ShortestPaths;
