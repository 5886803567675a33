//! Minimum-latency spanning tree: eager Prim's algorithm.

use lf_core::{EdgeId, Real, VertexId};
use lf_graph::Graph;
use tracing::debug;

use crate::error::{check_vertex, AnalysisResult};
use crate::pq::IndexMinPq;

/// Spanning tree of minimum total latency, grown from a start vertex.
///
/// Maintains, for every non-tree vertex, the lowest latency of an edge
/// connecting it to the current tree; the key is only updated on strict
/// improvement, so a tie keeps the first edge seen. If the graph is
/// disconnected, the tree spans only the start vertex's component; that is
/// documented behavior, not an error.
#[derive(Debug)]
pub struct PrimMst {
    edges: Vec<EdgeId>,
    weight: Real,
}

impl PrimMst {
    /// Grow the tree from `start`.
    pub fn new(graph: &Graph, start: VertexId) -> AnalysisResult<Self> {
        let s = check_vertex(start, graph.vertex_count())?;

        let vertex_count = graph.vertex_count();
        let mut key = vec![Real::INFINITY; vertex_count];
        let mut edge_to: Vec<Option<EdgeId>> = vec![None; vertex_count];
        let mut in_tree = vec![false; vertex_count];

        let mut pq = IndexMinPq::new(vertex_count);
        key[s] = 0.0;
        pq.insert(s, key[s]);

        let mut edges = Vec::new();
        let mut weight = 0.0;

        while !pq.is_empty() {
            let v = pq.del_min();
            in_tree[v] = true;
            if let Some(edge_id) = edge_to[v] {
                edges.push(edge_id);
                weight += graph.edges()[edge_id.index() as usize].latency().value;
            }

            let vertex = VertexId::from_index(v as u32);
            for &edge_id in graph.adj(vertex) {
                let edge = &graph.edges()[edge_id.index() as usize];
                let w = edge.other(vertex).index() as usize;
                if in_tree[w] {
                    continue;
                }
                let latency = edge.latency().value;
                // Strict improvement only: first edge seen wins a tie.
                if latency < key[w] {
                    key[w] = latency;
                    edge_to[w] = Some(edge_id);
                    if pq.contains(w) {
                        pq.decrease_key(w, latency);
                    } else {
                        pq.insert(w, latency);
                    }
                }
            }
        }

        debug!(
            start = start.index(),
            tree_edges = edges.len(),
            total_latency_s = weight,
            "spanning tree grown"
        );

        Ok(Self { edges, weight })
    }

    /// The tree's edges, in the order they were committed.
    pub fn edges(&self) -> &[EdgeId] {
        &self.edges
    }

    /// Total latency of the tree, in seconds.
    pub fn weight(&self) -> Real {
        self.weight
    }
}
