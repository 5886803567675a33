//! Connected components over the full graph or a filtered view.
//!
//! Filtering happens over the shared immutable edge array by index (a vertex
//! mask plus an edge predicate); no graph instance is ever rebuilt. This is
//! what the cut-pair engine leans on for its per-pair runs.

use lf_core::VertexId;
use lf_graph::{Edge, Graph, Medium};
use tracing::debug;

/// Component labeling of a (possibly filtered) view of the graph.
///
/// Each unmasked vertex gets a component id in `[0, count)`. Masked-out
/// vertices get no id and do not contribute to the count. A vertex with no
/// admitted incident edges forms a component of one; that is a sentinel, not
/// an error.
#[derive(Debug)]
pub struct ConnectedComponents {
    ids: Vec<Option<u32>>,
    count: u32,
}

impl ConnectedComponents {
    /// Components of the full graph.
    pub fn new(graph: &Graph) -> Self {
        Self::with_filter(graph, |_| true, &[])
    }

    /// Components of the subgraph restricted to links of one medium.
    pub fn by_medium(graph: &Graph, medium: Medium) -> Self {
        Self::with_filter(graph, move |edge| edge.medium() == medium, &[])
    }

    /// Components of the subgraph with the given vertices removed, together
    /// with every edge incident to any of them.
    pub fn excluding_vertices(graph: &Graph, excluded: &[VertexId]) -> Self {
        Self::with_filter(graph, |_| true, excluded)
    }

    /// Generic filtered labeling: an edge is present when `admit` accepts it
    /// and neither endpoint is masked; a masked vertex is absent entirely.
    pub fn with_filter(
        graph: &Graph,
        admit: impl Fn(&Edge) -> bool,
        masked: &[VertexId],
    ) -> Self {
        let vertex_count = graph.vertex_count();
        let mut mask = vec![false; vertex_count];
        for &vertex in masked {
            if let Some(slot) = mask.get_mut(vertex.index() as usize) {
                *slot = true;
            }
        }

        let mut ids: Vec<Option<u32>> = vec![None; vertex_count];
        let mut count = 0_u32;
        let mut stack = Vec::new();

        for start in 0..vertex_count {
            if mask[start] || ids[start].is_some() {
                continue;
            }

            // Fresh component: label everything reachable from `start`
            // through admitted edges.
            ids[start] = Some(count);
            stack.push(start);
            while let Some(v) = stack.pop() {
                let vertex = VertexId::from_index(v as u32);
                for &edge_id in graph.adj(vertex) {
                    let edge = &graph.edges()[edge_id.index() as usize];
                    if !admit(edge) {
                        continue;
                    }
                    let w = edge.other(vertex).index() as usize;
                    if mask[w] || ids[w].is_some() {
                        continue;
                    }
                    ids[w] = Some(count);
                    stack.push(w);
                }
            }
            count += 1;
        }

        debug!(
            vertices = vertex_count,
            masked = masked.len(),
            components = count,
            "component labeling finished"
        );

        Self { ids, count }
    }

    /// Number of components among the unmasked vertices.
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Component id of `v`, or `None` if `v` was masked out (or out of range).
    pub fn id(&self, v: VertexId) -> Option<u32> {
        self.ids.get(v.index() as usize).copied().flatten()
    }

    /// True if `v` and `w` are both present and in the same component.
    pub fn connected(&self, v: VertexId, w: VertexId) -> bool {
        match (self.id(v), self.id(w)) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }
}
