// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Bellman-Ford Algorithm.
//!
//! Computes shortest paths from a source node to all other nodes in a weighted graph.
//! Unlike Dijkstra, it handles negative edge weights.
//! Detects negative cycles.

use crate::algo::GraphProjection;
use crate::algo::algorithms::Algorithm;
use arbor_common::NodeId;

pub struct BellmanFord;

#[derive(Debug, Clone, Default)]
pub struct BellmanFordConfig {
    pub source: Option<NodeId>,
}

pub struct BellmanFordResult {
    /// Distances for reachable nodes; empty when a negative cycle exists.
    pub distances: Vec<(NodeId, f64)>,
    pub has_negative_cycle: bool,
}

impl Algorithm for BellmanFord {
    type Graph = GraphProjection;
    type Config = BellmanFordConfig;
    type Result = BellmanFordResult;

    fn name() -> &'static str {
        "bellman_ford"
    }

    fn run(graph: &GraphProjection, config: Self::Config) -> Self::Result {
        let Some(source_slot) = config.source.as_ref().and_then(|s| graph.to_slot(s)) else {
            return BellmanFordResult {
                distances: Vec::new(),
                has_negative_cycle: false,
            };
        };

        let n = graph.vertex_count();
        let mut dist = vec![f64::INFINITY; n];
        dist[source_slot as usize] = 0.0;

        // Relax V-1 times
        for _ in 0..n.saturating_sub(1) {
            let mut changed = false;
            for arc in graph.arcs() {
                let (u, v) = (arc.src as usize, arc.dst as usize);
                if dist[u] == f64::INFINITY {
                    continue;
                }
                if dist[u] + arc.weight < dist[v] {
                    dist[v] = dist[u] + arc.weight;
                    changed = true;
                }
            }
            if !changed {
                break;
            }
        }

        // Check for negative cycles
        let has_negative_cycle = graph.arcs().iter().any(|arc| {
            let (u, v) = (arc.src as usize, arc.dst as usize);
            dist[u] < f64::INFINITY && dist[u] + arc.weight < dist[v]
        });

        if has_negative_cycle {
            return BellmanFordResult {
                distances: Vec::new(),
                has_negative_cycle: true,
            };
        }

        let distances = dist
            .into_iter()
            .enumerate()
            .filter(|(_, d)| *d < f64::INFINITY)
            .map(|(slot, d)| (graph.to_id(slot as u32).clone(), d))
            .collect();

        BellmanFordResult {
            distances,
            has_negative_cycle: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algo::test_utils::{build_weighted_test_graph, by_int};

    fn source(id: i64) -> BellmanFordConfig {
        BellmanFordConfig {
            source: Some(NodeId::from(id)),
        }
    }

    #[test]
    fn test_bellman_ford_negative_edge() {
        // 0 -> 1 (4.0), 0 -> 2 (5.0), 2 -> 1 (-3.0)
        let graph = build_weighted_test_graph(
            &[0, 1, 2],
            &[(0, 1, 4.0), (0, 2, 5.0), (2, 1, -3.0)],
            true,
        );
        let result = BellmanFord::run(&graph, source(0));

        assert!(!result.has_negative_cycle);
        let dists = by_int(&result.distances);
        assert_eq!(dists[&0], 0.0);
        assert_eq!(dists[&1], 2.0);
        assert_eq!(dists[&2], 5.0);
    }

    #[test]
    fn test_negative_cycle_detected() {
        // 0 -> 1 (1.0), 1 -> 2 (-2.0), 2 -> 1 (1.0)
        let graph = build_weighted_test_graph(
            &[0, 1, 2],
            &[(0, 1, 1.0), (1, 2, -2.0), (2, 1, 1.0)],
            true,
        );
        let result = BellmanFord::run(&graph, source(0));
        assert!(result.has_negative_cycle);
        assert!(result.distances.is_empty());
    }

    #[test]
    fn test_unreachable_nodes_omitted() {
        let graph = build_weighted_test_graph(&[0, 1, 2], &[(0, 1, 1.0)], true);
        let result = BellmanFord::run(&graph, source(0));
        assert_eq!(result.distances.len(), 2);
    }
}
