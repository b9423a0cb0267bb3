// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Eigenvector Centrality Algorithm.
//!
//! Power iteration on `A + I`; the identity shift keeps bipartite graphs from
//! oscillating without changing the dominant eigenvector.

use crate::algo::GraphProjection;
use crate::algo::algorithms::Algorithm;
use arbor_common::NodeId;

pub struct EigenvectorCentrality;

#[derive(Debug, Clone)]
pub struct EigenvectorCentralityConfig {
    pub max_iterations: usize,
    pub tolerance: f64,
}

impl Default for EigenvectorCentralityConfig {
    fn default() -> Self {
        Self {
            max_iterations: 100,
            tolerance: 1e-6,
        }
    }
}

pub struct EigenvectorCentralityResult {
    pub scores: Vec<(NodeId, f64)>,
    pub iterations: usize,
    pub converged: bool,
}

impl Algorithm for EigenvectorCentrality {
    type Graph = GraphProjection;
    type Config = EigenvectorCentralityConfig;
    type Result = EigenvectorCentralityResult;

    fn name() -> &'static str {
        "eigenvector_centrality"
    }

    fn run(graph: &GraphProjection, config: Self::Config) -> Self::Result {
        let n = graph.vertex_count();
        if n == 0 {
            return EigenvectorCentralityResult {
                scores: Vec::new(),
                iterations: 0,
                converged: true,
            };
        }

        let mut x = vec![1.0 / (n as f64).sqrt(); n];
        let mut next_x = vec![0.0; n];
        let mut iterations = 0;
        let mut converged = false;

        for iter in 0..config.max_iterations {
            iterations = iter + 1;
            next_x.copy_from_slice(&x);

            for (u, &x_u) in x.iter().enumerate() {
                if x_u == 0.0 {
                    continue;
                }
                for (v, arc) in graph.neighbors(u as u32) {
                    next_x[v as usize] += x_u * graph.arc(arc).weight;
                }
            }

            let norm = next_x.iter().map(|v| v * v).sum::<f64>().sqrt();
            if norm == 0.0 {
                break;
            }
            for val in &mut next_x {
                *val /= norm;
            }

            let diff: f64 = next_x.iter().zip(&x).map(|(a, b)| (a - b).abs()).sum();
            x.copy_from_slice(&next_x);

            if diff < config.tolerance {
                converged = true;
                break;
            }
        }

        let scores = x
            .into_iter()
            .enumerate()
            .map(|(i, s)| (graph.to_id(i as u32).clone(), s))
            .collect();

        EigenvectorCentralityResult {
            scores,
            iterations,
            converged,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algo::test_utils::{build_symmetric_test_graph, by_int};

    #[test]
    fn test_eigenvector_centrality_triangle_with_tail() {
        // Triangle 0-1-2 with a pendant 3 on node 0
        let graph = build_symmetric_test_graph(&[0, 1, 2, 3], &[(0, 1), (1, 2), (2, 0), (0, 3)]);
        let result = EigenvectorCentrality::run(&graph, EigenvectorCentralityConfig::default());
        let map = by_int(&result.scores);

        assert!(map[&0] > map[&3]);
        assert!(map[&0] > map[&1]);
        assert!((map[&1] - map[&2]).abs() < 1e-9);
        assert!(result.converged);
    }

    #[test]
    fn test_bipartite_converges() {
        // Path 0 - 1: plain power iteration would oscillate
        let graph = build_symmetric_test_graph(&[0, 1], &[(0, 1)]);
        let result = EigenvectorCentrality::run(&graph, EigenvectorCentralityConfig::default());
        assert!(result.converged);
    }
}
