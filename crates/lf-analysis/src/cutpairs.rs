//! Brute-force detection of disconnecting vertex pairs.
//!
//! For every unordered pair of distinct vertices, the pair is removed from a
//! filtered view of the shared edge array and the connectivity engine labels
//! the remainder; the pair disconnects the network when more than one
//! component is left. Deliberately O(V^2 * (V+E)): the pairwise enumeration
//! is the specified behavior, not a stand-in for an articulation-point
//! algorithm.

use std::collections::HashSet;

use lf_core::VertexId;
use lf_graph::Graph;
use tracing::debug;

use crate::connectivity::ConnectedComponents;
use crate::error::{check_vertex, AnalysisResult};

/// All vertex pairs whose joint removal disconnects the network.
#[derive(Debug)]
pub struct CutPairs {
    vertex_count: usize,
    pairs: Vec<(VertexId, VertexId)>,
    lookup: HashSet<(u32, u32)>,
}

impl CutPairs {
    /// Enumerate every unordered pair and test it.
    pub fn new(graph: &Graph) -> Self {
        let vertex_count = graph.vertex_count();
        let mut pairs = Vec::new();
        let mut lookup = HashSet::new();

        for i in 0..vertex_count {
            for j in (i + 1)..vertex_count {
                let a = VertexId::from_index(i as u32);
                let b = VertexId::from_index(j as u32);
                let cc = ConnectedComponents::excluding_vertices(graph, &[a, b]);
                if cc.count() > 1 {
                    pairs.push((a, b));
                    lookup.insert((i as u32, j as u32));
                }
            }
        }

        debug!(
            vertices = vertex_count,
            disconnecting_pairs = pairs.len(),
            "cut-pair enumeration finished"
        );

        Self {
            vertex_count,
            pairs,
            lookup,
        }
    }

    /// True if removing both `i` and `j` (and every edge touching either)
    /// leaves more than one component.
    pub fn disconnects(&self, i: VertexId, j: VertexId) -> AnalysisResult<bool> {
        check_vertex(i, self.vertex_count)?;
        check_vertex(j, self.vertex_count)?;
        let (a, b) = if i.index() <= j.index() {
            (i.index(), j.index())
        } else {
            (j.index(), i.index())
        };
        Ok(self.lookup.contains(&(a, b)))
    }

    /// The disconnecting pairs, ordered by first then second vertex.
    pub fn pairs(&self) -> &[(VertexId, VertexId)] {
        &self.pairs
    }
}
