// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Triangle Count Algorithm.
//!
//! Per-node counts via sorted neighbor intersection, plus the local
//! clustering coefficient `2T / (d (d - 1))`.

use crate::algo::GraphProjection;
use crate::algo::algorithms::{Algorithm, simple_neighbors};
use arbor_common::NodeId;
use rayon::prelude::*;

pub struct TriangleCount;

#[derive(Debug, Clone, Default)]
pub struct TriangleCountConfig;

pub struct TriangleCountResult {
    pub global_count: u64,
    pub node_counts: Vec<(NodeId, u64)>,
    pub clustering: Vec<(NodeId, f64)>,
    /// Mean local clustering over all nodes.
    pub average_clustering: f64,
}

fn intersection_size(a: &[u32], b: &[u32]) -> u64 {
    let (mut i, mut j, mut count) = (0, 0, 0);
    while i < a.len() && j < b.len() {
        match a[i].cmp(&b[j]) {
            std::cmp::Ordering::Less => i += 1,
            std::cmp::Ordering::Greater => j += 1,
            std::cmp::Ordering::Equal => {
                count += 1;
                i += 1;
                j += 1;
            }
        }
    }
    count
}

impl Algorithm for TriangleCount {
    type Graph = GraphProjection;
    type Config = TriangleCountConfig;
    type Result = TriangleCountResult;

    fn name() -> &'static str {
        "triangleCount"
    }

    fn run(graph: &GraphProjection, _config: Self::Config) -> Self::Result {
        let n = graph.vertex_count();
        let adj = simple_neighbors(graph);

        // count(u) = sum_{v in N(u)} |N(u) ∩ N(v)| / 2
        let mut node_counts = vec![0u64; n];
        node_counts
            .par_iter_mut()
            .enumerate()
            .for_each(|(u, count)| {
                let shared: u64 = adj[u]
                    .iter()
                    .map(|&v| intersection_size(&adj[u], &adj[v as usize]))
                    .sum();
                *count = shared / 2;
            });

        let clustering: Vec<f64> = node_counts
            .iter()
            .zip(adj.iter())
            .map(|(&t, neighbors)| {
                let d = neighbors.len() as f64;
                if d < 2.0 {
                    0.0
                } else {
                    2.0 * t as f64 / (d * (d - 1.0))
                }
            })
            .collect();

        let average_clustering = if n > 0 {
            clustering.iter().sum::<f64>() / n as f64
        } else {
            0.0
        };

        TriangleCountResult {
            global_count: node_counts.iter().sum::<u64>() / 3,
            node_counts: node_counts
                .into_iter()
                .enumerate()
                .map(|(i, c)| (graph.to_id(i as u32).clone(), c))
                .collect(),
            clustering: clustering
                .into_iter()
                .enumerate()
                .map(|(i, c)| (graph.to_id(i as u32).clone(), c))
                .collect(),
            average_clustering,
        }
    }
}
