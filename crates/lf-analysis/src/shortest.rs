//! Lowest-latency routes: Dijkstra over latency-weighted edges.

use lf_core::{EdgeId, Real, VertexId};
use lf_graph::Graph;
use tracing::debug;

use crate::error::{check_vertex, AnalysisError, AnalysisResult};
use crate::pq::IndexMinPq;

/// Shortest-path tree from a single source, weighted by link latency.
///
/// Distances are propagation delays in seconds; an unreachable vertex has
/// distance `Real::INFINITY` and no path. The tree is computed once at
/// construction and queried read-only afterwards.
#[derive(Debug)]
pub struct ShortestPaths {
    source: VertexId,
    dist_to: Vec<Real>,
    edge_to: Vec<Option<EdgeId>>,
    /// Upstream endpoint of `edge_to[v]`, recorded at relaxation time so
    /// path reconstruction does not need the graph again.
    parent: Vec<Option<VertexId>>,
}

impl ShortestPaths {
    /// Compute the shortest-path tree from `source` to every other vertex.
    ///
    /// Fails if `source` is out of range or if any edge latency is negative
    /// or non-finite (impossible for a graph built through `GraphBuilder`,
    /// but fatal if it ever happens).
    pub fn new(graph: &Graph, source: VertexId) -> AnalysisResult<Self> {
        let s = check_vertex(source, graph.vertex_count())?;

        for edge in graph.edges() {
            let latency = edge.latency().value;
            if !(latency >= 0.0 && latency.is_finite()) {
                return Err(AnalysisError::InvalidArg {
                    what: format!("edge {edge} has invalid latency {latency}"),
                });
            }
        }

        let vertex_count = graph.vertex_count();
        let mut dist_to = vec![Real::INFINITY; vertex_count];
        let mut edge_to: Vec<Option<EdgeId>> = vec![None; vertex_count];
        let mut parent: Vec<Option<VertexId>> = vec![None; vertex_count];
        dist_to[s] = 0.0;

        // Relax vertices in order of distance from the source.
        let mut pq = IndexMinPq::new(vertex_count);
        pq.insert(s, dist_to[s]);
        while !pq.is_empty() {
            let v = pq.del_min();
            let vertex = VertexId::from_index(v as u32);
            for &edge_id in graph.adj(vertex) {
                let edge = &graph.edges()[edge_id.index() as usize];
                let w = edge.other(vertex).index() as usize;
                let latency = edge.latency().value;
                if dist_to[w] > dist_to[v] + latency {
                    dist_to[w] = dist_to[v] + latency;
                    edge_to[w] = Some(edge_id);
                    parent[w] = Some(vertex);
                    if pq.contains(w) {
                        pq.decrease_key(w, dist_to[w]);
                    } else {
                        pq.insert(w, dist_to[w]);
                    }
                }
            }
        }

        let tree = Self {
            source,
            dist_to,
            edge_to,
            parent,
        };

        // Optimality conditions: a violation is an algorithm defect, fatal in
        // debug builds, never a recoverable user error.
        debug_assert!(
            tree.check(graph).is_ok(),
            "shortest-path optimality check failed: {:?}",
            tree.check(graph)
        );

        debug!(
            source = source.index(),
            reached = tree.dist_to.iter().filter(|d| d.is_finite()).count(),
            vertices = vertex_count,
            "shortest-path tree computed"
        );

        Ok(tree)
    }

    /// The source this tree was computed from.
    pub fn source(&self) -> VertexId {
        self.source
    }

    /// Latency of the lowest-latency path from the source to `v`, in seconds.
    /// `Real::INFINITY` if `v` is unreachable.
    pub fn dist_to(&self, v: VertexId) -> AnalysisResult<Real> {
        let idx = check_vertex(v, self.dist_to.len())?;
        Ok(self.dist_to[idx])
    }

    /// True if any path connects the source to `v`.
    pub fn has_path_to(&self, v: VertexId) -> AnalysisResult<bool> {
        let idx = check_vertex(v, self.dist_to.len())?;
        Ok(self.dist_to[idx] < Real::INFINITY)
    }

    /// The lowest-latency path from the source to `v` as an edge sequence in
    /// source-to-`v` order, or `None` if `v` is unreachable.
    pub fn path_to(&self, v: VertexId) -> AnalysisResult<Option<Vec<EdgeId>>> {
        let idx = check_vertex(v, self.dist_to.len())?;
        if self.dist_to[idx] == Real::INFINITY {
            return Ok(None);
        }
        // Follow predecessor links back to the source, then reverse.
        let mut path = Vec::new();
        let mut x = idx;
        while let Some(edge_id) = self.edge_to[x] {
            path.push(edge_id);
            x = self.parent[x].expect("tree edge has a recorded parent").index() as usize;
        }
        path.reverse();
        Ok(Some(path))
    }

    /// Check optimality conditions:
    /// (i)  for every edge (x, y): dist_to[y] <= dist_to[x] + latency(x, y)
    /// (ii) for every tree edge into y: equality holds exactly
    fn check(&self, graph: &Graph) -> Result<(), String> {
        let s = self.source.index() as usize;
        if self.dist_to[s] != 0.0 || self.edge_to[s].is_some() {
            return Err("dist_to[source] and edge_to[source] inconsistent".into());
        }
        for v in 0..self.dist_to.len() {
            if v == s {
                continue;
            }
            if self.edge_to[v].is_none() && self.dist_to[v] != Real::INFINITY {
                return Err(format!("dist_to[{v}] and edge_to[{v}] inconsistent"));
            }
        }

        for (i, edge) in graph.edges().iter().enumerate() {
            let latency = edge.latency().value;
            let x = edge.either().index() as usize;
            let y = edge.other(edge.either()).index() as usize;
            if self.dist_to[y] > self.dist_to[x] + latency
                || self.dist_to[x] > self.dist_to[y] + latency
            {
                return Err(format!("edge {i} not relaxed"));
            }
        }

        for (y, maybe_edge) in self.edge_to.iter().enumerate() {
            let Some(edge_id) = maybe_edge else { continue };
            let edge = &graph.edges()[edge_id.index() as usize];
            let vertex_y = VertexId::from_index(y as u32);
            if edge.either() != vertex_y && edge.other(edge.either()) != vertex_y {
                return Err(format!("tree edge into {y} does not touch {y}"));
            }
            let x = edge.other(vertex_y).index() as usize;
            if self.dist_to[x] + edge.latency().value != self.dist_to[y] {
                return Err(format!("tree edge into {y} not tight"));
            }
        }
        Ok(())
    }
}
