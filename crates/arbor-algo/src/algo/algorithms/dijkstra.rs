// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Dijkstra's Shortest Path Algorithm.

use crate::algo::GraphProjection;
use crate::algo::algorithms::Algorithm;
use arbor_common::{EdgeKey, NodeId};
use std::cmp::Reverse;
use std::collections::BinaryHeap;

pub struct Dijkstra;

#[derive(Debug, Clone, Default)]
pub struct DijkstraConfig {
    pub source: Option<NodeId>,
    pub target: Option<NodeId>,
}

/// Shortest route to the requested target.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPath {
    /// Nodes from source to target inclusive.
    pub nodes: Vec<NodeId>,
    /// Host edges traversed, in path order.
    pub edges: Vec<EdgeKey>,
    pub cost: f64,
}

pub struct DijkstraResult {
    /// Distances for reachable nodes only.
    pub distances: Vec<(NodeId, f64)>,
    /// `Some` when a target was given and reached.
    pub path: Option<ShortestPath>,
}

impl Algorithm for Dijkstra {
    type Graph = GraphProjection;
    type Config = DijkstraConfig;
    type Result = DijkstraResult;

    fn name() -> &'static str {
        "dijkstra"
    }

    fn run(graph: &GraphProjection, config: Self::Config) -> Self::Result {
        let Some(source_slot) = config.source.as_ref().and_then(|s| graph.to_slot(s)) else {
            return DijkstraResult {
                distances: Vec::new(),
                path: None,
            };
        };

        let n = graph.vertex_count();
        let mut dist = vec![f64::INFINITY; n];
        // Predecessor as (slot, arc_id) so path edges map back to host edges
        let mut prev: Vec<Option<(u32, u32)>> = vec![None; n];
        let mut heap = BinaryHeap::new();

        dist[source_slot as usize] = 0.0;
        heap.push(Reverse((0.0f64.to_bits(), source_slot)));

        while let Some(Reverse((d_bits, u))) = heap.pop() {
            let d = f64::from_bits(d_bits);
            if d > dist[u as usize] {
                continue;
            }

            for (v, arc_id) in graph.neighbors(u) {
                // Negative weights are not meaningful here
                let new_dist = d + graph.arc(arc_id).weight.max(0.0);
                if new_dist < dist[v as usize] {
                    dist[v as usize] = new_dist;
                    prev[v as usize] = Some((u, arc_id));
                    heap.push(Reverse((new_dist.to_bits(), v)));
                }
            }
        }

        let target_slot = config.target.as_ref().and_then(|t| graph.to_slot(t));
        let path = target_slot
            .filter(|&t| dist[t as usize] < f64::INFINITY)
            .map(|t| {
                let mut nodes = vec![graph.to_id(t).clone()];
                let mut edges = Vec::new();
                let mut curr = t;
                while let Some((p, arc_id)) = prev[curr as usize] {
                    edges.push(graph.arc(arc_id).origin.clone());
                    nodes.push(graph.to_id(p).clone());
                    curr = p;
                }
                nodes.reverse();
                edges.reverse();
                ShortestPath {
                    nodes,
                    edges,
                    cost: dist[t as usize],
                }
            });

        let distances = dist
            .into_iter()
            .enumerate()
            .filter(|(_, d)| *d < f64::INFINITY)
            .map(|(slot, d)| (graph.to_id(slot as u32).clone(), d))
            .collect();

        DijkstraResult { distances, path }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algo::test_utils::{build_weighted_test_graph, by_int};

    #[test]
    fn test_dijkstra_prefers_light_detour() {
        // 0 -> 1 (5.0), 0 -> 2 (1.0), 2 -> 1 (1.0), plus isolated 3
        let graph = build_weighted_test_graph(
            &[0, 1, 2, 3],
            &[(0, 1, 5.0), (0, 2, 1.0), (2, 1, 1.0)],
            true,
        );
        let result = Dijkstra::run(
            &graph,
            DijkstraConfig {
                source: Some(NodeId::from(0)),
                target: Some(NodeId::from(1)),
            },
        );

        let dists = by_int(&result.distances);
        assert_eq!(dists.len(), 3);
        assert_eq!(dists[&1], 2.0);
        assert!(!dists.contains_key(&3));

        let path = result.path.unwrap();
        assert_eq!(path.nodes, vec![NodeId::from(0), NodeId::from(2), NodeId::from(1)]);
        assert_eq!(path.edges, vec![EdgeKey::new(0, 2), EdgeKey::new(2, 1)]);
        assert_eq!(path.cost, 2.0);
    }

    #[test]
    fn test_undirected_path_reports_host_edge() {
        // Host edge stored as 1 -> 0, traversed 0 -> 1
        let graph = build_weighted_test_graph(&[0, 1], &[(1, 0, 2.5)], false);
        let result = Dijkstra::run(
            &graph,
            DijkstraConfig {
                source: Some(NodeId::from(0)),
                target: Some(NodeId::from(1)),
            },
        );
        let path = result.path.unwrap();
        assert_eq!(path.edges, vec![EdgeKey::new(1, 0)]);
        assert_eq!(path.cost, 2.5);
    }

    #[test]
    fn test_unreachable_target() {
        let graph = build_weighted_test_graph(&[0, 1], &[], true);
        let result = Dijkstra::run(
            &graph,
            DijkstraConfig {
                source: Some(NodeId::from(0)),
                target: Some(NodeId::from(1)),
            },
        );
        assert!(result.path.is_none());
        assert_eq!(result.distances.len(), 1);
    }
}
