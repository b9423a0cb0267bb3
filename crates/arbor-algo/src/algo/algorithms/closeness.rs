// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Closeness Centrality Algorithm.

use crate::algo::GraphProjection;
use crate::algo::algorithms::Algorithm;
use arbor_common::NodeId;
use rayon::prelude::*;
use std::collections::VecDeque;

pub struct Closeness;

#[derive(Debug, Clone)]
pub struct ClosenessConfig {
    /// Improved formula for disconnected graphs
    pub wasserman_faust: bool,
}

impl Default for ClosenessConfig {
    fn default() -> Self {
        Self {
            wasserman_faust: true,
        }
    }
}

pub struct ClosenessResult {
    pub scores: Vec<(NodeId, f64)>,
}

impl Algorithm for Closeness {
    type Graph = GraphProjection;
    type Config = ClosenessConfig;
    type Result = ClosenessResult;

    fn name() -> &'static str {
        "closeness"
    }

    fn run(graph: &GraphProjection, config: Self::Config) -> Self::Result {
        let n = graph.vertex_count();
        if n == 0 {
            return ClosenessResult { scores: Vec::new() };
        }

        let mut scores = vec![0.0; n];

        // Independent BFS from every node
        scores.par_iter_mut().enumerate().for_each(|(s, score)| {
            let mut q = VecDeque::with_capacity(n);
            let mut d = vec![-1i64; n];

            d[s] = 0;
            q.push_back(s as u32);

            let mut sum_dist = 0i64;
            let mut reached = 0usize;

            while let Some(u) = q.pop_front() {
                let dist_u = d[u as usize];
                if u as usize != s {
                    sum_dist += dist_u;
                    reached += 1;
                }
                for (v, _) in graph.neighbors(u) {
                    if d[v as usize] == -1 {
                        d[v as usize] = dist_u + 1;
                        q.push_back(v);
                    }
                }
            }

            if sum_dist > 0 && n > 1 {
                *score = if config.wasserman_faust {
                    // (reached / (n-1)) * (reached / sum_dist)
                    (reached as f64).powi(2) / ((n - 1) as f64 * sum_dist as f64)
                } else {
                    reached as f64 / sum_dist as f64
                };
            }
        });

        let results = scores
            .into_iter()
            .enumerate()
            .map(|(i, s)| (graph.to_id(i as u32).clone(), s))
            .collect();

        ClosenessResult { scores: results }
    }
}
