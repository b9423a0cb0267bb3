// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Harmonic Centrality Algorithm.
//!
//! A variant of Closeness Centrality that deals with infinite distances by summing
//! the inverse of distances: H(u) = sum(1 / d(u, v)) for v != u.
//! Runs Dijkstra over arc weights from every node.

use crate::algo::GraphProjection;
use crate::algo::algorithms::Algorithm;
use arbor_common::NodeId;
use rayon::prelude::*;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

pub struct HarmonicCentrality;

#[derive(Debug, Clone, Default)]
pub struct HarmonicCentralityConfig {}

pub struct HarmonicCentralityResult {
    pub scores: Vec<(NodeId, f64)>,
}

impl Algorithm for HarmonicCentrality {
    type Graph = GraphProjection;
    type Config = HarmonicCentralityConfig;
    type Result = HarmonicCentralityResult;

    fn name() -> &'static str {
        "harmonic_centrality"
    }

    fn run(graph: &GraphProjection, _config: Self::Config) -> Self::Result {
        let n = graph.vertex_count();
        if n == 0 {
            return HarmonicCentralityResult { scores: Vec::new() };
        }

        let scores: Vec<(NodeId, f64)> = (0..n)
            .into_par_iter()
            .map(|i| {
                let score = compute_harmonic_score(graph, i as u32);
                (graph.to_id(i as u32).clone(), score)
            })
            .collect();

        HarmonicCentralityResult { scores }
    }
}

fn compute_harmonic_score(graph: &GraphProjection, start: u32) -> f64 {
    let n = graph.vertex_count();
    let mut dist = vec![f64::INFINITY; n];
    let mut heap = BinaryHeap::new();

    dist[start as usize] = 0.0;
    // Non-negative f64 bit patterns order like the values themselves
    heap.push(Reverse((0.0f64.to_bits(), start)));

    let mut sum_inv_dist = 0.0;

    while let Some(Reverse((d_bits, u))) = heap.pop() {
        let d = f64::from_bits(d_bits);
        if d > dist[u as usize] {
            continue;
        }

        if u != start && d > 0.0 {
            sum_inv_dist += 1.0 / d;
        }

        for (v, arc) in graph.neighbors(u) {
            // Negative weights would break the heap order
            let weight = graph.arc(arc).weight.max(0.0);
            let new_dist = d + weight;
            if new_dist < dist[v as usize] {
                dist[v as usize] = new_dist;
                heap.push(Reverse((new_dist.to_bits(), v)));
            }
        }
    }

    sum_inv_dist
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algo::test_utils::{build_test_graph, build_weighted_test_graph, by_int};

    #[test]
    fn test_harmonic_centrality_simple() {
        // 0 -> 1 -> 2
        // H(0) = 1/1 + 1/2 = 1.5
        // H(1) = 1/1 = 1.0
        // H(2) = 0
        let graph = build_test_graph(&[0, 1, 2], &[(0, 1), (1, 2)]);
        let map = by_int(&HarmonicCentrality::run(&graph, HarmonicCentralityConfig::default()).scores);

        assert!((map[&0] - 1.5).abs() < 1e-6);
        assert!((map[&1] - 1.0).abs() < 1e-6);
        assert!((map[&2] - 0.0).abs() < 1e-6);
    }

    #[test]
    fn test_harmonic_uses_weights() {
        // 0 -(2)- 1 undirected: H = 1/2 on both ends
        let graph = build_weighted_test_graph(&[0, 1], &[(0, 1, 2.0)], false);
        let map = by_int(&HarmonicCentrality::run(&graph, HarmonicCentralityConfig::default()).scores);
        assert!((map[&0] - 0.5).abs() < 1e-9);
        assert!((map[&1] - 0.5).abs() < 1e-9);
    }
}
