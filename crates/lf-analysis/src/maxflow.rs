//! Maximum flow and minimum cut: Ford-Fulkerson with BFS path selection.

use std::collections::VecDeque;

use lf_core::{ensure_finite, nearly_equal, EdgeId, Real, Tolerances, VertexId};
use lf_graph::Graph;
use tracing::{debug, trace};

use crate::error::{check_vertex, AnalysisError, AnalysisResult};

/// A directed edge of the flow network with a capacity and a current flow.
///
/// Invariant: `0 <= flow <= capacity`.
#[derive(Debug, Clone)]
pub struct FlowEdge {
    from: VertexId,
    to: VertexId,
    capacity: Real,
    flow: Real,
}

impl FlowEdge {
    /// Tail of this edge (the forward direction is from -> to).
    pub fn from(&self) -> VertexId {
        self.from
    }

    /// Head of this edge.
    pub fn to(&self) -> VertexId {
        self.to
    }

    pub fn capacity(&self) -> Real {
        self.capacity
    }

    pub fn flow(&self) -> Real {
        self.flow
    }

    /// The endpoint of this edge different from the given vertex.
    ///
    /// # Panics
    ///
    /// Panics if `vertex` is not an endpoint; the engine only reaches an
    /// edge through the adjacency of one of its endpoints.
    pub fn other(&self, vertex: VertexId) -> VertexId {
        if vertex == self.from {
            self.to
        } else if vertex == self.to {
            self.from
        } else {
            panic!("vertex {vertex} is not an endpoint of this flow edge")
        }
    }

    /// Residual capacity toward `vertex`: spare forward capacity toward the
    /// head, already-pushed flow back toward the tail.
    pub fn residual_capacity_to(&self, vertex: VertexId) -> Real {
        if vertex == self.to {
            self.capacity - self.flow
        } else {
            self.flow
        }
    }

    fn add_residual_flow_to(&mut self, vertex: VertexId, delta: Real) {
        if vertex == self.to {
            self.flow += delta;
        } else {
            self.flow -= delta;
        }
    }
}

/// A flow network derived from a frozen topology (or built edge by edge in
/// tests).
///
/// Orientation convention for [`FlowNetwork::from_graph`]: the input
/// endpoint order of each topology edge is preserved, i.e. `either()` becomes
/// the tail and `other(either())` the head. Flow-edge indices equal the
/// topology's `EdgeId` indices, so per-link flows can be reported against the
/// original edges.
#[derive(Debug, Clone)]
pub struct FlowNetwork {
    vertex_count: usize,
    edges: Vec<FlowEdge>,
    /// Flow-edge indices incident to each vertex, forward and backward.
    adj: Vec<Vec<usize>>,
}

impl FlowNetwork {
    pub fn new(vertex_count: usize) -> Self {
        Self {
            vertex_count,
            edges: Vec::new(),
            adj: vec![Vec::new(); vertex_count],
        }
    }

    /// One flow edge per topology edge, capacity = bandwidth.
    pub fn from_graph(graph: &Graph) -> Self {
        let mut network = Self::new(graph.vertex_count());
        for edge in graph.edges() {
            let from = edge.either();
            let to = edge.other(from);
            network.push_edge(FlowEdge {
                from,
                to,
                capacity: Real::from(edge.bandwidth()),
                flow: 0.0,
            });
        }
        network
    }

    /// Append a directed edge. Rejects out-of-range endpoints and negative
    /// or non-finite capacities.
    pub fn add_edge(
        &mut self,
        from: VertexId,
        to: VertexId,
        capacity: Real,
    ) -> AnalysisResult<usize> {
        check_vertex(from, self.vertex_count)?;
        check_vertex(to, self.vertex_count)?;
        ensure_finite(capacity, "flow edge capacity")?;
        if capacity < 0.0 {
            return Err(AnalysisError::InvalidCapacity { capacity });
        }
        Ok(self.push_edge(FlowEdge {
            from,
            to,
            capacity,
            flow: 0.0,
        }))
    }

    fn push_edge(&mut self, edge: FlowEdge) -> usize {
        let index = self.edges.len();
        self.adj[edge.from.index() as usize].push(index);
        if edge.to != edge.from {
            self.adj[edge.to.index() as usize].push(index);
        }
        self.edges.push(edge);
        index
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn edges(&self) -> &[FlowEdge] {
        &self.edges
    }

    /// Indices of the flow edges incident to `vertex` (both directions).
    pub fn adj(&self, vertex: VertexId) -> &[usize] {
        self.adj
            .get(vertex.index() as usize)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

/// Maximum flow between a source and a sink, plus the min-cut partition.
///
/// Computed once at construction by repeatedly pushing the bottleneck along
/// a shortest (fewest-hop) augmenting path in the residual graph until none
/// remains. The vertices still reachable from the source in the final
/// residual graph form the source side of the minimum cut.
#[derive(Debug)]
pub struct MaxFlow {
    network: FlowNetwork,
    source: VertexId,
    sink: VertexId,
    value: Real,
    /// Residual reachability from the source after the final iteration.
    marked: Vec<bool>,
}

impl MaxFlow {
    /// Run Ford-Fulkerson from `source` to `sink`, consuming the network.
    pub fn new(
        mut network: FlowNetwork,
        source: VertexId,
        sink: VertexId,
    ) -> AnalysisResult<Self> {
        check_vertex(source, network.vertex_count)?;
        check_vertex(sink, network.vertex_count)?;
        if source == sink {
            return Err(AnalysisError::InvalidArg {
                what: format!("source {source} equals sink"),
            });
        }

        let mut value = 0.0;
        let mut augmentations = 0_usize;
        let (mut marked, mut edge_to) = residual_bfs(&network, source);

        while marked[sink.index() as usize] {
            // Bottleneck along the augmenting path.
            let mut bottleneck = Real::INFINITY;
            let mut v = sink;
            while v != source {
                let index = edge_to[v.index() as usize].expect("marked vertex has a path edge");
                bottleneck = bottleneck.min(network.edges[index].residual_capacity_to(v));
                v = network.edges[index].other(v);
            }

            // Push it: forward residuals shrink, reverse residuals grow.
            let mut v = sink;
            while v != source {
                let index = edge_to[v.index() as usize].expect("marked vertex has a path edge");
                network.edges[index].add_residual_flow_to(v, bottleneck);
                v = network.edges[index].other(v);
            }

            value += bottleneck;
            augmentations += 1;
            trace!(augmentations, bottleneck, total = value, "augmented");

            (marked, edge_to) = residual_bfs(&network, source);
        }

        debug!(
            source = source.index(),
            sink = sink.index(),
            value,
            augmentations,
            "max flow computed"
        );

        let flow = Self {
            network,
            source,
            sink,
            value,
            marked,
        };
        debug_assert!(
            flow.check().is_ok(),
            "max-flow feasibility check failed: {:?}",
            flow.check()
        );
        Ok(flow)
    }

    /// Total flow value. Equals the capacity crossing the reported min cut.
    pub fn value(&self) -> Real {
        self.value
    }

    /// Flow carried on a flow edge. For a network built by
    /// [`FlowNetwork::from_graph`], the `EdgeId` of a topology edge addresses
    /// its flow edge directly.
    pub fn flow_on(&self, edge: EdgeId) -> AnalysisResult<Real> {
        let idx = edge.index() as usize;
        self.network
            .edges
            .get(idx)
            .map(FlowEdge::flow)
            .ok_or(AnalysisError::InvalidArg {
                what: format!("no flow edge with index {idx}"),
            })
    }

    /// True if `v` is on the source side of the minimum cut.
    pub fn in_cut(&self, v: VertexId) -> AnalysisResult<bool> {
        let idx = check_vertex(v, self.network.vertex_count)?;
        Ok(self.marked[idx])
    }

    /// The final flow network, flows included.
    pub fn network(&self) -> &FlowNetwork {
        &self.network
    }

    /// Feasibility conditions: capacity bounds on every edge, conservation
    /// at every non-terminal vertex, value consistent at both terminals.
    fn check(&self) -> Result<(), String> {
        let tol = Tolerances {
            abs: 1e-9,
            rel: 1e-9,
        };

        for (i, edge) in self.network.edges.iter().enumerate() {
            if edge.flow < -tol.abs || edge.flow > edge.capacity + tol.abs {
                return Err(format!("edge {i} violates capacity bounds"));
            }
        }

        for v_idx in 0..self.network.vertex_count {
            let vertex = VertexId::from_index(v_idx as u32);
            if vertex == self.source || vertex == self.sink {
                continue;
            }
            let mut net = 0.0;
            for &index in self.network.adj(vertex) {
                let edge = &self.network.edges[index];
                if vertex == edge.from {
                    net -= edge.flow;
                }
                if vertex == edge.to {
                    net += edge.flow;
                }
            }
            if !nearly_equal(net, 0.0, tol) {
                return Err(format!("flow not conserved at vertex {vertex}"));
            }
        }

        let mut source_net = 0.0;
        for &index in self.network.adj(self.source) {
            let edge = &self.network.edges[index];
            if self.source == edge.from {
                source_net += edge.flow;
            }
            if self.source == edge.to {
                source_net -= edge.flow;
            }
        }
        if !nearly_equal(source_net, self.value, tol) {
            return Err("net source flow does not match value".into());
        }

        if !self.marked[self.source.index() as usize] {
            return Err("source not on source side of cut".into());
        }
        if self.marked[self.sink.index() as usize] {
            return Err("sink on source side of cut".into());
        }
        Ok(())
    }
}

/// Breadth-first search of the residual graph: which vertices can still be
/// reached from `source` through strictly positive residual capacity, and
/// along which edge each was first reached.
fn residual_bfs(network: &FlowNetwork, source: VertexId) -> (Vec<bool>, Vec<Option<usize>>) {
    let mut marked = vec![false; network.vertex_count];
    let mut edge_to: Vec<Option<usize>> = vec![None; network.vertex_count];
    let mut queue = VecDeque::new();

    marked[source.index() as usize] = true;
    queue.push_back(source);
    while let Some(v) = queue.pop_front() {
        for &index in network.adj(v) {
            let edge = &network.edges[index];
            let w = edge.other(v);
            let w_idx = w.index() as usize;
            if edge.residual_capacity_to(w) > 0.0 && !marked[w_idx] {
                marked[w_idx] = true;
                edge_to[w_idx] = Some(index);
                queue.push_back(w);
            }
        }
    }

    (marked, edge_to)
}
