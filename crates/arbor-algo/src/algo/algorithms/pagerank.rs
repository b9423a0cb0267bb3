// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! PageRank Centrality Algorithm.

use crate::algo::GraphProjection;
use crate::algo::algorithms::Algorithm;
use arbor_common::NodeId;
use rayon::prelude::*;

pub struct PageRank;

#[derive(Debug, Clone)]
pub struct PageRankConfig {
    pub damping_factor: f64,
    pub max_iterations: usize,
    pub tolerance: f64,
}

impl Default for PageRankConfig {
    fn default() -> Self {
        Self {
            damping_factor: 0.85,
            max_iterations: 100,
            tolerance: 1e-6,
        }
    }
}

pub struct PageRankResult {
    pub scores: Vec<(NodeId, f64)>,
    pub iterations: usize,
    pub converged: bool,
}

impl Algorithm for PageRank {
    type Graph = GraphProjection;
    type Config = PageRankConfig;
    type Result = PageRankResult;

    fn name() -> &'static str {
        "pageRank"
    }

    fn run(graph: &GraphProjection, config: Self::Config) -> Self::Result {
        let n = graph.vertex_count();
        if n == 0 {
            return PageRankResult {
                scores: Vec::new(),
                iterations: 0,
                converged: true,
            };
        }

        let d = config.damping_factor;
        let uniform = 1.0 / n as f64;

        let mut scores = vec![uniform; n];
        let mut next = vec![0.0; n];

        let mut iterations = 0;
        let mut converged = false;

        for iter in 0..config.max_iterations {
            iterations = iter + 1;

            // Mass held by dangling nodes is spread uniformly
            let dangling: f64 = (0..n)
                .filter(|&u| graph.out_degree(u as u32) == 0)
                .map(|u| scores[u])
                .sum();
            let base = (1.0 - d) * uniform + d * dangling * uniform;

            // Each vertex sums its in-neighbors in CSR order; no cross-thread reduction
            next.par_iter_mut().enumerate().for_each(|(v, score)| {
                let sum: f64 = graph
                    .in_neighbors(v as u32)
                    .iter()
                    .map(|&u| scores[u as usize] / graph.out_degree(u) as f64)
                    .sum();
                *score = base + d * sum;
            });

            let diff: f64 = scores
                .iter()
                .zip(next.iter())
                .map(|(a, b)| (a - b).abs())
                .sum();

            std::mem::swap(&mut scores, &mut next);

            if diff < config.tolerance {
                converged = true;
                break;
            }
        }

        let results = scores
            .into_iter()
            .enumerate()
            .map(|(slot, score)| (graph.to_id(slot as u32).clone(), score))
            .collect();

        PageRankResult {
            scores: results,
            iterations,
            converged,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algo::test_utils::{build_test_graph, by_int};

    #[test]
    fn test_pagerank_sums_to_one() {
        // 0 -> 1 -> 2 -> 0, 3 -> 0, 2 is not dangling, 4 is dangling
        let graph = build_test_graph(&[0, 1, 2, 3, 4], &[(0, 1), (1, 2), (2, 0), (3, 0), (0, 4)]);
        let result = PageRank::run(&graph, PageRankConfig::default());
        let total: f64 = result.scores.iter().map(|(_, s)| s).sum();
        assert!((total - 1.0).abs() < 1e-6, "total = {total}");
        assert!(result.converged);
    }

    #[test]
    fn test_pagerank_hub_ranks_highest() {
        let graph = build_test_graph(&[0, 1, 2, 3], &[(1, 0), (2, 0), (3, 0)]);
        let result = PageRank::run(&graph, PageRankConfig::default());
        let map = by_int(&result.scores);
        assert!(map[&0] > map[&1]);
        assert!((map[&1] - map[&2]).abs() < 1e-12);
    }

    #[test]
    fn test_pagerank_iteration_cap() {
        let graph = build_test_graph(&[0, 1], &[(0, 1), (1, 0)]);
        let config = PageRankConfig {
            max_iterations: 1,
            tolerance: 0.0,
            ..Default::default()
        };
        let result = PageRank::run(&graph, config);
        assert_eq!(result.iterations, 1);
        assert!(!result.converged);
    }
}
