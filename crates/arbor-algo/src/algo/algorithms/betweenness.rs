// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Betweenness Centrality Algorithm (Brandes').

use crate::algo::GraphProjection;
use crate::algo::algorithms::{Algorithm, source_group_size};
use arbor_common::NodeId;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rayon::prelude::*;
use std::collections::VecDeque;

pub struct Betweenness;

#[derive(Debug, Clone)]
pub struct BetweennessConfig {
    pub normalize: bool,
    /// If None, exact computation (all nodes)
    pub sampling_size: Option<usize>,
    pub seed: u64,
    /// Halve the raw scores: every undirected path is seen from both ends.
    pub undirected: bool,
}

impl Default for BetweennessConfig {
    fn default() -> Self {
        Self {
            normalize: true,
            sampling_size: None,
            seed: 42,
            undirected: true,
        }
    }
}

pub struct BetweennessResult {
    pub scores: Vec<(NodeId, f64)>,
}

impl Algorithm for Betweenness {
    type Graph = GraphProjection;
    type Config = BetweennessConfig;
    type Result = BetweennessResult;

    fn name() -> &'static str {
        "betweenness"
    }

    fn run(graph: &GraphProjection, config: Self::Config) -> Self::Result {
        let n = graph.vertex_count();
        if n == 0 {
            return BetweennessResult { scores: Vec::new() };
        }

        // Determine source nodes (all or a seeded sample)
        let mut sources: Vec<u32> = (0..n as u32).collect();
        if let Some(size) = config.sampling_size
            && size < n
        {
            let mut rng = StdRng::seed_from_u64(config.seed);
            sources.shuffle(&mut rng);
            sources.truncate(size);
        }

        // Bounded number of partial sums, folded back in group order
        let partials: Vec<Vec<f64>> = sources
            .par_chunks(source_group_size(sources.len()))
            .map(|group| {
                let mut acc = vec![0.0; n];
                for &s in group {
                    accumulate_from(graph, s, &mut acc);
                }
                acc
            })
            .collect();

        let mut cb = vec![0.0; n];
        for partial in &partials {
            for (x, y) in cb.iter_mut().zip(partial) {
                *x += y;
            }
        }

        if sources.len() < n {
            let scale = n as f64 / sources.len().max(1) as f64;
            for score in cb.iter_mut() {
                *score *= scale;
            }
        }

        if config.undirected {
            for score in cb.iter_mut() {
                *score /= 2.0;
            }
        }

        if config.normalize && n > 2 {
            let pairs = (n - 1) as f64 * (n - 2) as f64;
            let norm_factor = if config.undirected { 2.0 / pairs } else { 1.0 / pairs };
            for score in cb.iter_mut() {
                *score *= norm_factor;
            }
        }

        let results = cb
            .into_iter()
            .enumerate()
            .map(|(i, score)| (graph.to_id(i as u32).clone(), score))
            .collect();

        BetweennessResult { scores: results }
    }
}

/// One Brandes pass from `s`, adding dependencies into `acc`.
fn accumulate_from(graph: &GraphProjection, s: u32, acc: &mut [f64]) {
    let n = graph.vertex_count();
    let mut s_stack = Vec::with_capacity(n);
    let mut q = VecDeque::with_capacity(n);

    // Path counts (sigma) and distances (d)
    let mut d: Vec<i64> = vec![-1; n];
    let mut sigma: Vec<f64> = vec![0.0; n];
    let mut p: Vec<Vec<u32>> = vec![Vec::new(); n];

    sigma[s as usize] = 1.0;
    d[s as usize] = 0;
    q.push_back(s);

    while let Some(v) = q.pop_front() {
        s_stack.push(v);
        let dist_v = d[v as usize];

        for (w, _) in graph.neighbors(v) {
            if d[w as usize] < 0 {
                d[w as usize] = dist_v + 1;
                q.push_back(w);
            }
            if d[w as usize] == dist_v + 1 {
                sigma[w as usize] += sigma[v as usize];
                p[w as usize].push(v);
            }
        }
    }

    let mut delta = vec![0.0; n];
    while let Some(w) = s_stack.pop() {
        for &v in &p[w as usize] {
            if sigma[w as usize] > 0.0 {
                delta[v as usize] +=
                    (sigma[v as usize] / sigma[w as usize]) * (1.0 + delta[w as usize]);
            }
        }
        if w != s {
            acc[w as usize] += delta[w as usize];
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algo::test_utils::{build_symmetric_test_graph, by_int};

    #[test]
    fn test_betweenness_path() {
        // 0 - 1 - 2: only 1 lies between the endpoints
        let graph = build_symmetric_test_graph(&[0, 1, 2], &[(0, 1), (1, 2)]);
        let config = BetweennessConfig {
            normalize: false,
            ..Default::default()
        };
        let result = Betweenness::run(&graph, config);
        let map = by_int(&result.scores);
        assert_eq!(map[&0], 0.0);
        assert!((map[&1] - 1.0).abs() < 1e-9);

        let normalized = by_int(&Betweenness::run(&graph, BetweennessConfig::default()).scores);
        assert!((normalized[&1] - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_betweenness_star() {
        // Center 0 joins 3 leaves: 3 leaf pairs route through it
        let graph = build_symmetric_test_graph(&[0, 1, 2, 3], &[(0, 1), (0, 2), (0, 3)]);
        let config = BetweennessConfig {
            normalize: false,
            ..Default::default()
        };
        let map = by_int(&Betweenness::run(&graph, config).scores);
        assert!((map[&0] - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_sampling_is_seeded() {
        let edges: Vec<(i64, i64)> = (0..20).map(|i| (i, (i + 1) % 20)).collect();
        let nodes: Vec<i64> = (0..20).collect();
        let graph = build_symmetric_test_graph(&nodes, &edges);
        let config = BetweennessConfig {
            sampling_size: Some(5),
            seed: 7,
            ..Default::default()
        };
        let a = Betweenness::run(&graph, config.clone()).scores;
        let b = Betweenness::run(&graph, config).scores;
        assert_eq!(a, b);
    }

    #[test]
    fn test_partial_sums_are_bounded() {
        use crate::algo::algorithms::PARTIAL_SUMS;
        for sources in [1, 15, 16, 17, 64, 1000, 100_003] {
            let size = source_group_size(sources);
            assert!(sources.div_ceil(size) <= PARTIAL_SUMS, "{} sources", sources);
        }
        assert_eq!(source_group_size(0), 1);
    }

    #[test]
    fn test_scores_independent_of_thread_count() {
        let nodes: Vec<i64> = (0..60).collect();
        let edges: Vec<(i64, i64)> = (0..60)
            .flat_map(|i| [(i, (i + 1) % 60), (i, (i * 7 + 3) % 60)])
            .collect();
        let graph = build_symmetric_test_graph(&nodes, &edges);
        let run_on = |threads: usize| {
            rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build()
                .unwrap()
                .install(|| Betweenness::run(&graph, BetweennessConfig::default()).scores)
        };
        assert_eq!(run_on(1), run_on(4));
    }
}
