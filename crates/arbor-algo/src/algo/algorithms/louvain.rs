// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Louvain Community Detection Algorithm (local-move phase).
//!
//! Expects a truly undirected projection: every edge is visible from both
//! endpoints exactly once.

use crate::algo::GraphProjection;
use crate::algo::algorithms::Algorithm;
use arbor_common::NodeId;
use std::collections::BTreeMap;

pub struct Louvain;

#[derive(Debug, Clone)]
pub struct LouvainConfig {
    pub resolution: f64,
    pub max_iterations: usize,
    pub min_modularity_gain: f64,
}

impl Default for LouvainConfig {
    fn default() -> Self {
        Self {
            resolution: 1.0,
            max_iterations: 10,
            min_modularity_gain: 1e-7,
        }
    }
}

pub struct LouvainResult {
    /// Raw community labels; adapters renumber them.
    pub communities: Vec<(NodeId, u64)>,
    pub modularity: f64,
    pub iterations: usize,
}

impl Algorithm for Louvain {
    type Graph = GraphProjection;
    type Config = LouvainConfig;
    type Result = LouvainResult;

    fn name() -> &'static str {
        "louvain"
    }

    fn run(graph: &GraphProjection, config: Self::Config) -> Self::Result {
        let n = graph.vertex_count();
        if n == 0 {
            return LouvainResult {
                communities: Vec::new(),
                modularity: 0.0,
                iterations: 0,
            };
        }

        // Each node starts in its own community
        let mut community: Vec<u32> = (0..n as u32).collect();

        // Weighted degrees (k_i) and total edge weight (m)
        let node_weights: Vec<f64> = (0..n as u32)
            .map(|v| graph.neighbors(v).map(|(_, arc)| graph.arc(arc).weight).sum())
            .collect();
        let m: f64 = node_weights.iter().sum::<f64>() / 2.0;

        let to_result = |community: &[u32], modularity: f64, iterations: usize| LouvainResult {
            communities: community
                .iter()
                .enumerate()
                .map(|(i, &c)| (graph.to_id(i as u32).clone(), c as u64))
                .collect(),
            modularity,
            iterations,
        };

        if m <= 0.0 {
            return to_result(&community, 0.0, 0);
        }

        // Sigma_tot per community
        let mut community_weights = node_weights.clone();
        let mut iterations = 0;

        for _ in 0..config.max_iterations {
            iterations += 1;
            let mut improved = false;

            for v in 0..n as u32 {
                let v_idx = v as usize;
                let current_comm = community[v_idx];
                let v_weight = node_weights[v_idx];

                // k_i,in towards each neighboring community; ordered for stable tie-breaks
                let mut neighbor_comm_weights: BTreeMap<u32, f64> = BTreeMap::new();
                for (u, arc) in graph.neighbors(v) {
                    if u == v {
                        continue;
                    }
                    *neighbor_comm_weights.entry(community[u as usize]).or_insert(0.0) +=
                        graph.arc(arc).weight;
                }

                community_weights[current_comm as usize] -= v_weight;

                let gain = |comm: u32, k_i_in: f64| {
                    k_i_in
                        - community_weights[comm as usize] * v_weight * config.resolution
                            / (2.0 * m)
                };

                let stay_gain = gain(
                    current_comm,
                    neighbor_comm_weights.get(&current_comm).copied().unwrap_or(0.0),
                );
                let mut best_comm = current_comm;
                let mut best_gain = stay_gain;
                for (&target_comm, &k_i_in) in &neighbor_comm_weights {
                    let g = gain(target_comm, k_i_in);
                    if g > best_gain {
                        best_gain = g;
                        best_comm = target_comm;
                    }
                }

                if best_comm != current_comm
                    && (best_gain - stay_gain) / m > config.min_modularity_gain
                {
                    community[v_idx] = best_comm;
                    improved = true;
                }

                community_weights[community[v_idx] as usize] += v_weight;
            }

            if !improved {
                break;
            }
        }

        let q = compute_modularity(graph, &community, &node_weights, m, config.resolution);
        to_result(&community, q, iterations)
    }
}

fn compute_modularity(
    graph: &GraphProjection,
    community: &[u32],
    node_weights: &[f64],
    m: f64,
    resolution: f64,
) -> f64 {
    let mut internal: BTreeMap<u32, f64> = BTreeMap::new();
    let mut total: BTreeMap<u32, f64> = BTreeMap::new();

    for v in 0..graph.vertex_count() as u32 {
        let v_comm = community[v as usize];
        *total.entry(v_comm).or_insert(0.0) += node_weights[v as usize];
        for (u, arc) in graph.neighbors(v) {
            if community[u as usize] == v_comm {
                *internal.entry(v_comm).or_insert(0.0) += graph.arc(arc).weight;
            }
        }
    }

    total
        .iter()
        .map(|(comm, &tot)| {
            let inside = internal.get(comm).copied().unwrap_or(0.0);
            inside / (2.0 * m) - resolution * (tot / (2.0 * m)).powi(2)
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algo::test_utils::{build_undirected_test_graph, by_int};

    fn two_triangles() -> GraphProjection {
        // Triangles {0,1,2} and {3,4,5} joined by the bridge 2 - 3
        build_undirected_test_graph(
            &[0, 1, 2, 3, 4, 5],
            &[(0, 1), (1, 2), (2, 0), (3, 4), (4, 5), (5, 3), (2, 3)],
        )
    }

    #[test]
    fn test_louvain_two_triangles() {
        let result = Louvain::run(&two_triangles(), LouvainConfig::default());
        let map = by_int(&result.communities);

        assert_eq!(map[&0], map[&1]);
        assert_eq!(map[&1], map[&2]);
        assert_eq!(map[&3], map[&4]);
        assert_eq!(map[&4], map[&5]);
        assert_ne!(map[&0], map[&3]);
        // Q = 2 * (6/14 - (7/14)^2)
        assert!((result.modularity - 0.357142857).abs() < 1e-6);
    }

    #[test]
    fn test_edgeless_graph() {
        let graph = build_undirected_test_graph(&[0, 1], &[]);
        let result = Louvain::run(&graph, LouvainConfig::default());
        assert_eq!(result.modularity, 0.0);
        assert_eq!(result.communities.len(), 2);
    }
}
