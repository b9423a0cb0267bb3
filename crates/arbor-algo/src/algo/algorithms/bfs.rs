// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Breadth-first search, layer by layer.

use crate::algo::GraphProjection;
use crate::algo::algorithms::Algorithm;
use arbor_common::NodeId;

pub struct Bfs;

#[derive(Debug, Clone, Default)]
pub struct BfsConfig {
    /// Start node; `None` or an unknown id yields an empty result.
    pub source: Option<NodeId>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BfsVisit {
    pub node: NodeId,
    pub level: usize,
    /// Discovery position, starting at 0 for the source.
    pub order: usize,
}

pub struct BfsResult {
    /// Reached nodes in discovery order.
    pub visits: Vec<BfsVisit>,
    pub max_level: usize,
}

impl Algorithm for Bfs {
    type Graph = GraphProjection;
    type Config = BfsConfig;
    type Result = BfsResult;

    fn name() -> &'static str {
        "bfs"
    }

    fn run(graph: &GraphProjection, config: Self::Config) -> Self::Result {
        let empty = BfsResult {
            visits: Vec::new(),
            max_level: 0,
        };
        let Some(start) = config.source.as_ref().and_then(|s| graph.to_slot(s)) else {
            return empty;
        };

        let n = graph.vertex_count();
        let mut discovered = vec![false; n];
        let mut current_layer = vec![start];
        let mut next_layer = Vec::new();
        let mut visits = Vec::new();
        let mut level = 0;

        discovered[start as usize] = true;

        while !current_layer.is_empty() {
            for &node in &current_layer {
                visits.push(BfsVisit {
                    node: graph.to_id(node).clone(),
                    level,
                    order: visits.len(),
                });
                for (neighbor, _) in graph.neighbors(node) {
                    if !discovered[neighbor as usize] {
                        discovered[neighbor as usize] = true;
                        next_layer.push(neighbor);
                    }
                }
            }

            current_layer.clear();
            std::mem::swap(&mut current_layer, &mut next_layer);
            if !current_layer.is_empty() {
                level += 1;
            }
        }

        BfsResult {
            visits,
            max_level: level,
        }
    }
}
