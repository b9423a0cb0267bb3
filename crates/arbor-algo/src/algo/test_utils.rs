// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

use crate::algo::{AdjacencyMap, CapacityMap, GraphProjection, ProjectionBuilder};
use arbor_common::{HostGraph, NodeId};

/// Host graph with integer ids; every id in `nodes` exists even if isolated.
pub fn build_host_graph(nodes: &[i64], edges: &[(i64, i64, f64)]) -> HostGraph {
    let mut graph = HostGraph::new();
    for &n in nodes {
        graph.add_node(n);
    }
    for &(src, dst, w) in edges {
        graph.add_weighted_edge(src, dst, "weight", w);
    }
    graph
}

fn unit(edges: &[(i64, i64)]) -> Vec<(i64, i64, f64)> {
    edges.iter().map(|&(s, d)| (s, d, 1.0)).collect()
}

/// Directed projection.
pub fn build_test_graph(nodes: &[i64], edges: &[(i64, i64)]) -> GraphProjection {
    ProjectionBuilder::new(&build_host_graph(nodes, &unit(edges)))
        .directed(true)
        .build()
}

/// Undirected projection with a synthesized reverse arc per edge.
pub fn build_symmetric_test_graph(nodes: &[i64], edges: &[(i64, i64)]) -> GraphProjection {
    ProjectionBuilder::new(&build_host_graph(nodes, &unit(edges))).build()
}

/// Truly undirected projection: each edge stored once.
pub fn build_undirected_test_graph(nodes: &[i64], edges: &[(i64, i64)]) -> GraphProjection {
    ProjectionBuilder::new(&build_host_graph(nodes, &unit(edges)))
        .add_reverse_edges(false)
        .build()
}

pub fn build_weighted_test_graph(
    nodes: &[i64],
    edges: &[(i64, i64, f64)],
    directed: bool,
) -> GraphProjection {
    ProjectionBuilder::new(&build_host_graph(nodes, edges))
        .directed(directed)
        .build()
}

pub fn build_adjacency_map(nodes: &[i64], edges: &[(i64, i64, f64)]) -> AdjacencyMap {
    ProjectionBuilder::new(&build_host_graph(nodes, edges)).build_adjacency_map()
}

pub fn build_capacity_map(nodes: &[i64], edges: &[(i64, i64, f64)], reverse: bool) -> CapacityMap {
    ProjectionBuilder::new(&build_host_graph(nodes, edges))
        .add_reverse_edges(reverse)
        .build_capacity_map()
}

/// Collect `(id, value)` pairs into a lookup keyed by integer id.
pub fn by_int<T: Clone>(pairs: &[(NodeId, T)]) -> std::collections::BTreeMap<i64, T> {
    pairs
        .iter()
        .filter_map(|(id, v)| id.as_int().map(|i| (i, v.clone())))
        .collect()
}
