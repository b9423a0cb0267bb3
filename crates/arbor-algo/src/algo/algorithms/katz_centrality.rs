// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Katz Centrality Algorithm.
//!
//! x = alpha * A^T x + beta. `alpha` should stay below `1 / lambda_max`, else
//! the iteration diverges and stops at `max_iterations` unconverged.

use crate::algo::GraphProjection;
use crate::algo::algorithms::Algorithm;
use arbor_common::NodeId;

pub struct KatzCentrality;

#[derive(Debug, Clone)]
pub struct KatzCentralityConfig {
    pub alpha: f64,
    pub beta: f64,
    pub max_iterations: usize,
    pub tolerance: f64,
}

impl Default for KatzCentralityConfig {
    fn default() -> Self {
        Self {
            alpha: 0.1,
            beta: 1.0,
            max_iterations: 100,
            tolerance: 1e-6,
        }
    }
}

pub struct KatzCentralityResult {
    pub scores: Vec<(NodeId, f64)>,
    pub iterations: usize,
    pub converged: bool,
}

impl Algorithm for KatzCentrality {
    type Graph = GraphProjection;
    type Config = KatzCentralityConfig;
    type Result = KatzCentralityResult;

    fn name() -> &'static str {
        "katz_centrality"
    }

    fn run(graph: &GraphProjection, config: Self::Config) -> Self::Result {
        let n = graph.vertex_count();
        if n == 0 {
            return KatzCentralityResult {
                scores: Vec::new(),
                iterations: 0,
                converged: true,
            };
        }

        let mut x = vec![config.beta; n];
        let mut next_x = vec![0.0; n];
        let mut iterations = 0;
        let mut converged = false;

        for iter in 0..config.max_iterations {
            iterations = iter + 1;
            next_x.fill(config.beta);

            for (u, &x_u) in x.iter().enumerate() {
                if x_u == 0.0 {
                    continue;
                }
                for (v, arc) in graph.neighbors(u as u32) {
                    next_x[v as usize] += config.alpha * x_u * graph.arc(arc).weight;
                }
            }

            let diff: f64 = next_x.iter().zip(&x).map(|(a, b)| (a - b).abs()).sum();
            x.copy_from_slice(&next_x);

            if !diff.is_finite() {
                break;
            }
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

        KatzCentralityResult {
            scores,
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
    fn test_katz_centrality_dag() {
        // 1 -> 0: x(1) = beta, x(0) = beta + alpha * x(1)
        let graph = build_test_graph(&[0, 1], &[(1, 0)]);
        let config = KatzCentralityConfig {
            alpha: 0.1,
            beta: 1.0,
            ..Default::default()
        };

        let result = KatzCentrality::run(&graph, config);
        let map = by_int(&result.scores);

        assert!((map[&1] - 1.0).abs() < 1e-6);
        assert!((map[&0] - 1.1).abs() < 1e-6);
        assert!(result.converged);
    }
}
