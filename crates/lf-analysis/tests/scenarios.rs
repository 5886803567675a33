//! End-to-end scenarios across the analysis engines.

use lf_analysis::{ConnectedComponents, CutPairs, FlowNetwork, MaxFlow, PrimMst, ShortestPaths};
use lf_core::units::m;
use lf_core::{nearly_equal, Real, Tolerances, VertexId};
use lf_graph::{Graph, GraphBuilder, Medium};

fn v(i: u32) -> VertexId {
    VertexId::from_index(i)
}

/// Vertices {0,1,2,3}; edges (0,1,copper,10,100), (1,2,optical,10,100),
/// (0,3,copper,5,50).
fn reference_network() -> Graph {
    let mut builder = GraphBuilder::new(4);
    builder
        .add_link(v(0), v(1), Medium::Copper, 10, m(100.0))
        .unwrap();
    builder
        .add_link(v(1), v(2), Medium::Optical, 10, m(100.0))
        .unwrap();
    builder
        .add_link(v(0), v(3), Medium::Copper, 5, m(50.0))
        .unwrap();
    builder.build().unwrap()
}

#[test]
fn route_across_mixed_media() {
    let graph = reference_network();
    let sp = ShortestPaths::new(&graph, v(0)).unwrap();

    assert!(sp.has_path_to(v(2)).unwrap());
    let expected = 100.0 / 2.3e8 + 100.0 / 2.0e8;
    assert_eq!(sp.dist_to(v(2)).unwrap(), expected);

    // The reported path carries exactly the latencies that sum to the
    // reported distance.
    let path = sp.path_to(v(2)).unwrap().unwrap();
    let total: Real = path
        .iter()
        .map(|&id| graph.edges()[id.index() as usize].latency().value)
        .sum();
    assert_eq!(total, sp.dist_to(v(2)).unwrap());
}

#[test]
fn triangle_inequality_holds_on_every_edge() {
    let graph = reference_network();
    let sp = ShortestPaths::new(&graph, v(0)).unwrap();

    for edge in graph.edges() {
        let x = edge.either();
        let y = edge.other(x);
        let latency = edge.latency().value;
        assert!(sp.dist_to(y).unwrap() <= sp.dist_to(x).unwrap() + latency);
        assert!(sp.dist_to(x).unwrap() <= sp.dist_to(y).unwrap() + latency);
    }
}

#[test]
fn dropping_a_spur_isolates_its_vertex() {
    // Same network without the (0,3) link: vertex 3 is cut off.
    let mut builder = GraphBuilder::new(4);
    builder
        .add_link(v(0), v(1), Medium::Copper, 10, m(100.0))
        .unwrap();
    builder
        .add_link(v(1), v(2), Medium::Optical, 10, m(100.0))
        .unwrap();
    let graph = builder.build().unwrap();

    let cc = ConnectedComponents::new(&graph);
    assert_eq!(cc.count(), 2);
    assert_ne!(cc.id(v(3)), cc.id(v(0)));
}

#[test]
fn copper_only_view_of_the_reference_network() {
    // Copper edges: 0-1 and 0-3; vertex 2 is only reachable over fiber.
    let cc = ConnectedComponents::by_medium(&reference_network(), Medium::Copper);
    assert_eq!(cc.count(), 2);
    assert!(cc.connected(v(0), v(1)));
    assert!(cc.connected(v(0), v(3)));
    assert!(!cc.connected(v(0), v(2)));
}

#[test]
fn single_edge_max_flow_is_its_bandwidth() {
    let mut builder = GraphBuilder::new(2);
    builder
        .add_link(v(0), v(1), Medium::Copper, 7, m(10.0))
        .unwrap();
    let graph = builder.build().unwrap();

    let flow = MaxFlow::new(FlowNetwork::from_graph(&graph), v(0), v(1)).unwrap();
    assert_eq!(flow.value(), 7.0);
    assert!(flow.in_cut(v(0)).unwrap());
    assert!(!flow.in_cut(v(1)).unwrap());
}

#[test]
fn max_flow_equals_min_cut_capacity_on_the_reference_network() {
    let graph = reference_network();
    let flow = MaxFlow::new(FlowNetwork::from_graph(&graph), v(0), v(2)).unwrap();

    let mut crossing = 0.0;
    for edge in flow.network().edges() {
        if flow.in_cut(edge.from()).unwrap() && !flow.in_cut(edge.to()).unwrap() {
            crossing += edge.capacity();
        }
    }
    assert_eq!(flow.value(), crossing);
    // The 0 -> 2 route is throttled by the shared 10-capacity links.
    assert_eq!(flow.value(), 10.0);
}

#[test]
fn mst_of_the_reference_network_takes_every_edge() {
    // Three edges, four vertices, connected: the tree is the whole network.
    let graph = reference_network();
    let mst = PrimMst::new(&graph, v(0)).unwrap();

    assert_eq!(mst.edges().len(), graph.vertex_count() - 1);
    let expected = 100.0 / 2.3e8 + 100.0 / 2.0e8 + 50.0 / 2.3e8;
    assert!(nearly_equal(mst.weight(), expected, Tolerances::default()));
}

#[test]
fn cut_pairs_of_the_reference_network() {
    // 0 and 1 are the interior of the tree: removing both strands 2 and 3.
    let cut = CutPairs::new(&reference_network());
    assert!(cut.disconnects(v(0), v(1)).unwrap());
    // Removing the two leaves keeps the 0-1 link intact.
    assert!(!cut.disconnects(v(2), v(3)).unwrap());
}

#[test]
fn analyses_share_one_frozen_graph() {
    // Every engine reads the same &Graph; results stay consistent when the
    // analyses are interleaved.
    let graph = reference_network();

    let sp = ShortestPaths::new(&graph, v(0)).unwrap();
    let cc = ConnectedComponents::new(&graph);
    let mst = PrimMst::new(&graph, v(0)).unwrap();
    let flow = MaxFlow::new(FlowNetwork::from_graph(&graph), v(0), v(2)).unwrap();
    let cut = CutPairs::new(&graph);

    assert_eq!(cc.count(), 1);
    assert!(sp.has_path_to(v(3)).unwrap());
    assert_eq!(mst.edges().len(), 3);
    assert_eq!(flow.value(), 10.0);
    assert!(!cut.pairs().is_empty());
    assert_eq!(graph.edge_count(), 3);
}
