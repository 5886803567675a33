//! Integration tests for lf-graph.

use lf_core::units::m;
use lf_core::VertexId;
use lf_graph::{GraphBuilder, Medium};

fn v(i: u32) -> VertexId {
    VertexId::from_index(i)
}

#[test]
fn build_minimal_graph() {
    // Build: 0 --copper-- 1
    let mut builder = GraphBuilder::new(2);
    let e = builder
        .add_link(v(0), v(1), Medium::Copper, 10, m(100.0))
        .unwrap();

    let graph = builder.build().unwrap();

    assert_eq!(graph.vertex_count(), 2);
    assert_eq!(graph.edge_count(), 1);

    // Both endpoints see the edge.
    assert_eq!(graph.adj(v(0)), &[e]);
    assert_eq!(graph.adj(v(1)), &[e]);

    let edge = graph.edge(e).unwrap();
    assert_eq!(edge.either(), v(0));
    assert_eq!(edge.other(v(0)), v(1));
    assert_eq!(edge.medium(), Medium::Copper);
    assert_eq!(edge.bandwidth(), 10);
    assert_eq!(edge.length().value, 100.0);
}

#[test]
fn chain_adjacency() {
    // Build: 0 -- 1 -- 2
    let mut builder = GraphBuilder::new(3);
    let e01 = builder
        .add_link(v(0), v(1), Medium::Copper, 10, m(100.0))
        .unwrap();
    let e12 = builder
        .add_link(v(1), v(2), Medium::Optical, 10, m(100.0))
        .unwrap();

    let graph = builder.build().unwrap();

    assert_eq!(graph.adj(v(0)), &[e01]);
    assert_eq!(graph.adj(v(1)), &[e01, e12]);
    assert_eq!(graph.adj(v(2)), &[e12]);
    assert_eq!(graph.degree(v(1)), 2);
}

#[test]
fn parallel_edges_are_kept() {
    // Two distinct links between the same endpoints are legal topology.
    let mut builder = GraphBuilder::new(2);
    builder
        .add_link(v(0), v(1), Medium::Copper, 10, m(100.0))
        .unwrap();
    builder
        .add_link(v(0), v(1), Medium::Optical, 20, m(80.0))
        .unwrap();

    let graph = builder.build().unwrap();
    assert_eq!(graph.edge_count(), 2);
    assert_eq!(graph.adj(v(0)).len(), 2);
    assert_eq!(graph.adj(v(1)).len(), 2);
}

#[test]
fn empty_graph_builds() {
    let graph = GraphBuilder::new(0).build().unwrap();
    assert_eq!(graph.vertex_count(), 0);
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn rejected_link_leaves_builder_usable() {
    let mut builder = GraphBuilder::new(2);
    assert!(
        builder
            .add_link(v(0), v(5), Medium::Copper, 1, m(1.0))
            .is_err()
    );
    builder
        .add_link(v(0), v(1), Medium::Copper, 1, m(1.0))
        .unwrap();

    let graph = builder.build().unwrap();
    assert_eq!(graph.edge_count(), 1);
}

#[test]
fn graph_is_frozen_view() {
    // Analyses receive &Graph; a clone is an independent snapshot.
    let mut builder = GraphBuilder::new(2);
    builder
        .add_link(v(0), v(1), Medium::Copper, 10, m(100.0))
        .unwrap();
    let graph = builder.build().unwrap();
    let snapshot = graph.clone();

    assert_eq!(snapshot.edge_count(), graph.edge_count());
    assert_eq!(snapshot.adj(v(0)), graph.adj(v(0)));
}
