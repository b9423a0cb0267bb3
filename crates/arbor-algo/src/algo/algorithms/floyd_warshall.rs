// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Floyd-Warshall all-pairs shortest paths, summarized per node.
//!
//! The full distance matrix is never returned; callers get eccentricity,
//! average distance and reach per node plus diameter and radius.

use crate::algo::GraphProjection;
use crate::algo::algorithms::Algorithm;
use arbor_common::NodeId;
use rayon::prelude::*;

pub struct FloydWarshall;

#[derive(Debug, Clone, Default)]
pub struct FloydWarshallConfig {}

#[derive(Debug, Clone, PartialEq)]
pub struct DistanceSummary {
    /// Largest finite distance to another node (0 when none is reachable).
    pub eccentricity: f64,
    /// Mean distance over reachable other nodes (0 when none).
    pub average_distance: f64,
    /// Other nodes reachable from this one.
    pub reachable_count: usize,
}

pub struct FloydWarshallResult {
    pub summaries: Vec<(NodeId, DistanceSummary)>,
    pub diameter: f64,
    /// Smallest eccentricity among nodes that reach anything.
    pub radius: f64,
}

impl Algorithm for FloydWarshall {
    type Graph = GraphProjection;
    type Config = FloydWarshallConfig;
    type Result = FloydWarshallResult;

    fn name() -> &'static str {
        "floyd_warshall"
    }

    fn run(graph: &GraphProjection, _config: Self::Config) -> Self::Result {
        let n = graph.vertex_count();
        let mut dist = vec![vec![f64::INFINITY; n]; n];

        for (i, row) in dist.iter_mut().enumerate() {
            row[i] = 0.0;
        }
        for u in 0..n as u32 {
            for (v, arc_id) in graph.neighbors(u) {
                let w = graph.arc(arc_id).weight;
                let cell = &mut dist[u as usize][v as usize];
                if w < *cell {
                    *cell = w;
                }
            }
        }

        for k in 0..n {
            let row_k = dist[k].clone();
            // Rows are independent for a fixed k
            dist.par_iter_mut().for_each(|row| {
                let d_ik = row[k];
                if d_ik == f64::INFINITY {
                    return;
                }
                for (cell, &d_kj) in row.iter_mut().zip(row_k.iter()) {
                    let through = d_ik + d_kj;
                    if through < *cell {
                        *cell = through;
                    }
                }
            });
        }

        let summaries: Vec<(NodeId, DistanceSummary)> = dist
            .iter()
            .enumerate()
            .map(|(i, row)| {
                let mut eccentricity: f64 = 0.0;
                let mut total = 0.0;
                let mut reachable_count = 0;
                for (j, &d) in row.iter().enumerate() {
                    if j == i || !d.is_finite() {
                        continue;
                    }
                    eccentricity = eccentricity.max(d);
                    total += d;
                    reachable_count += 1;
                }
                let average_distance = if reachable_count > 0 {
                    total / reachable_count as f64
                } else {
                    0.0
                };
                (
                    graph.to_id(i as u32).clone(),
                    DistanceSummary {
                        eccentricity,
                        average_distance,
                        reachable_count,
                    },
                )
            })
            .collect();

        let diameter = summaries
            .iter()
            .map(|(_, s)| s.eccentricity)
            .fold(0.0, f64::max);
        let radius = summaries
            .iter()
            .filter(|(_, s)| s.reachable_count > 0)
            .map(|(_, s)| s.eccentricity)
            .reduce(f64::min)
            .unwrap_or(0.0);

        FloydWarshallResult {
            summaries,
            diameter,
            radius,
        }
    }
}
