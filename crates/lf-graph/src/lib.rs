//! lf-graph: graph/model layer for linkflow.
//!
//! Provides:
//! - Core graph data structures (Medium, Edge, Graph)
//! - Incremental graph builder with validation
//! - Compact adjacency for the analysis engines
//!
//! # Example
//!
//! ```
//! use lf_core::{VertexId, units::m};
//! use lf_graph::{GraphBuilder, Medium};
//!
//! let mut builder = GraphBuilder::new(3);
//! builder
//!     .add_link(VertexId::from_index(0), VertexId::from_index(1), Medium::Copper, 10, m(100.0))
//!     .unwrap();
//! builder
//!     .add_link(VertexId::from_index(1), VertexId::from_index(2), Medium::Optical, 10, m(100.0))
//!     .unwrap();
//! let graph = builder.build().unwrap();
//!
//! assert_eq!(graph.vertex_count(), 3);
//! assert_eq!(graph.edge_count(), 2);
//! ```

pub mod builder;
pub mod edge;
pub mod error;
pub mod graph;
pub mod medium;
pub(crate) mod validate;

// Re-exports for ergonomics
pub use builder::GraphBuilder;
pub use edge::Edge;
pub use error::GraphError;
pub use graph::Graph;
pub use medium::Medium;
