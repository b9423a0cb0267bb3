// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Graph Coloring Algorithm (DSatur).
//!
//! Assigns colors (integers) to vertices such that no two adjacent vertices share the same color.
//! Ties on saturation break by degree, then by lowest slot.

use crate::algo::GraphProjection;
use crate::algo::algorithms::{Algorithm, simple_neighbors};
use arbor_common::NodeId;
use std::collections::BTreeSet;

pub struct GraphColoring;

#[derive(Debug, Clone, Default)]
pub struct GraphColoringConfig {}

pub struct GraphColoringResult {
    pub coloring: Vec<(NodeId, u32)>,
    /// Colors used (not necessarily the chromatic number).
    pub color_count: u32,
}

impl Algorithm for GraphColoring {
    type Graph = GraphProjection;
    type Config = GraphColoringConfig;
    type Result = GraphColoringResult;

    fn name() -> &'static str {
        "graph_coloring"
    }

    fn run(graph: &GraphProjection, _config: Self::Config) -> Self::Result {
        let n = graph.vertex_count();
        let adj = simple_neighbors(graph);

        let mut colors: Vec<Option<u32>> = vec![None; n];
        let mut neighbor_colors: Vec<BTreeSet<u32>> = vec![BTreeSet::new(); n];

        for _ in 0..n {
            // Select vertex: max saturation, then max degree
            let next = (0..n)
                .filter(|&i| colors[i].is_none())
                .max_by(|&a, &b| {
                    neighbor_colors[a]
                        .len()
                        .cmp(&neighbor_colors[b].len())
                        .then(adj[a].len().cmp(&adj[b].len()))
                        .then(b.cmp(&a))
                });
            let Some(u) = next else {
                break;
            };

            // Lowest available color
            let mut color = 0;
            while neighbor_colors[u].contains(&color) {
                color += 1;
            }
            colors[u] = Some(color);

            for &v in &adj[u] {
                if colors[v as usize].is_none() {
                    neighbor_colors[v as usize].insert(color);
                }
            }
        }

        let coloring: Vec<(NodeId, u32)> = colors
            .into_iter()
            .enumerate()
            .map(|(i, c)| (graph.to_id(i as u32).clone(), c.unwrap_or(0)))
            .collect();
        let color_count = coloring.iter().map(|(_, c)| c + 1).max().unwrap_or(0);

        GraphColoringResult {
            coloring,
            color_count,
        }
    }
}
