// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Minimum Spanning Tree (MST) Algorithm.
//!
//! Uses Kruskal's algorithm over a truly undirected projection, so each host
//! edge is one candidate. Disconnected graphs yield a spanning forest.

use crate::algo::GraphProjection;
use crate::algo::algorithms::Algorithm;
use arbor_common::EdgeKey;

pub struct MinimumSpanningTree;

#[derive(Debug, Clone, Default)]
pub struct MstConfig {}

pub struct MstResult {
    /// Host edges in the tree, in acceptance order.
    pub edges: Vec<(EdgeKey, f64)>,
    pub total_weight: f64,
}

fn find(parent: &mut [u32], mut x: u32) -> u32 {
    while parent[x as usize] != x {
        parent[x as usize] = parent[parent[x as usize] as usize];
        x = parent[x as usize];
    }
    x
}

fn union(parent: &mut [u32], rank: &mut [u8], x: u32, y: u32) -> bool {
    let px = find(parent, x);
    let py = find(parent, y);
    if px == py {
        return false;
    }
    match rank[px as usize].cmp(&rank[py as usize]) {
        std::cmp::Ordering::Less => parent[px as usize] = py,
        std::cmp::Ordering::Greater => parent[py as usize] = px,
        std::cmp::Ordering::Equal => {
            parent[py as usize] = px;
            rank[px as usize] += 1;
        }
    }
    true
}

impl Algorithm for MinimumSpanningTree {
    type Graph = GraphProjection;
    type Config = MstConfig;
    type Result = MstResult;

    fn name() -> &'static str {
        "mst"
    }

    fn run(graph: &GraphProjection, _config: Self::Config) -> Self::Result {
        let n = graph.vertex_count();

        // Synthesized reverse arcs would duplicate candidates
        let mut candidates: Vec<u32> = graph
            .arcs()
            .iter()
            .enumerate()
            .filter(|(_, a)| !a.synthesized && a.src != a.dst)
            .map(|(i, _)| i as u32)
            .collect();

        // Stable: equal weights keep host insertion order
        candidates.sort_by(|&a, &b| graph.arc(a).weight.total_cmp(&graph.arc(b).weight));

        let mut parent: Vec<u32> = (0..n as u32).collect();
        let mut rank: Vec<u8> = vec![0; n];

        let mut edges = Vec::new();
        let mut total_weight = 0.0;

        for arc_id in candidates {
            let arc = graph.arc(arc_id);
            if union(&mut parent, &mut rank, arc.src, arc.dst) {
                edges.push((arc.origin.clone(), arc.weight));
                total_weight += arc.weight;
            }
        }

        MstResult {
            edges,
            total_weight,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algo::ProjectionBuilder;
    use crate::algo::test_utils::build_host_graph;

    fn undirected(nodes: &[i64], edges: &[(i64, i64, f64)]) -> GraphProjection {
        ProjectionBuilder::new(&build_host_graph(nodes, edges))
            .add_reverse_edges(false)
            .build()
    }

    #[test]
    fn test_mst_simple() {
        // 0-1 (1.0), 1-2 (2.0), 0-2 (10.0)
        // MST should be (0,1) and (1,2) => weight 3.0
        let graph = undirected(&[0, 1, 2], &[(0, 1, 1.0), (1, 2, 2.0), (0, 2, 10.0)]);
        let result = MinimumSpanningTree::run(&graph, MstConfig::default());
        assert_eq!(result.total_weight, 3.0);
        let keys: Vec<EdgeKey> = result.edges.into_iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec![EdgeKey::new(0, 1), EdgeKey::new(1, 2)]);
    }

    #[test]
    fn test_spanning_forest() {
        // Two components: 0-1 and 2-3
        let graph = undirected(&[0, 1, 2, 3], &[(0, 1, 4.0), (3, 2, 1.0)]);
        let result = MinimumSpanningTree::run(&graph, MstConfig::default());
        assert_eq!(result.edges.len(), 2);
        assert_eq!(result.edges[0].0, EdgeKey::new(3, 2));
        assert_eq!(result.total_weight, 5.0);
    }

    #[test]
    fn test_ignores_synthesized_reverse() {
        let graph = ProjectionBuilder::new(&build_host_graph(&[0, 1], &[(0, 1, 1.0)])).build();
        let result = MinimumSpanningTree::run(&graph, MstConfig::default());
        assert_eq!(result.edges.len(), 1);
    }
}
