// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Label Propagation Community Detection Algorithm.

use crate::algo::GraphProjection;
use crate::algo::algorithms::Algorithm;
use arbor_common::NodeId;
use rand::SeedableRng;
use rand::prelude::*;
use rand::rngs::StdRng;
use std::collections::BTreeMap;

pub struct LabelPropagation;

#[derive(Debug, Clone)]
pub struct LabelPropagationConfig {
    pub max_iterations: usize,
    /// Seeds node ordering and tie-breaking.
    pub seed: u64,
}

impl Default for LabelPropagationConfig {
    fn default() -> Self {
        Self {
            max_iterations: 100,
            seed: 42,
        }
    }
}

#[derive(Debug)]
pub struct LabelPropagationResult {
    /// Raw community label for each node.
    pub communities: Vec<(NodeId, u64)>,
    pub iterations: usize,
    pub converged: bool,
}

impl Algorithm for LabelPropagation {
    type Graph = GraphProjection;
    type Config = LabelPropagationConfig;
    type Result = LabelPropagationResult;

    fn name() -> &'static str {
        "labelPropagation"
    }

    fn run(graph: &GraphProjection, config: Self::Config) -> Self::Result {
        let num_nodes = graph.vertex_count();
        if num_nodes == 0 {
            return LabelPropagationResult {
                communities: Vec::new(),
                iterations: 0,
                converged: true,
            };
        }

        // Initialize labels with slot
        let mut labels: Vec<u64> = (0..num_nodes as u64).collect();

        let mut converged = false;
        let mut iterations = 0;
        let mut node_indices: Vec<u32> = (0..num_nodes as u32).collect();
        let mut rng = StdRng::seed_from_u64(config.seed);

        while iterations < config.max_iterations {
            let mut changes = 0;

            // Shuffle processing order to prevent oscillation
            node_indices.shuffle(&mut rng);

            for &node_idx in &node_indices {
                let mut label_counts: BTreeMap<u64, usize> = BTreeMap::new();
                for (neighbor_idx, _) in graph.neighbors(node_idx) {
                    if neighbor_idx == node_idx {
                        continue;
                    }
                    *label_counts.entry(labels[neighbor_idx as usize]).or_insert(0) += 1;
                }

                let Some(&max_count) = label_counts.values().max() else {
                    continue;
                };

                let current = labels[node_idx as usize];
                // Keeping the current label when it is among the best avoids flip-flopping
                if label_counts.get(&current) == Some(&max_count) {
                    continue;
                }

                let best_labels: Vec<u64> = label_counts
                    .iter()
                    .filter(|(_, count)| **count == max_count)
                    .map(|(label, _)| *label)
                    .collect();

                if let Some(&new_label) = best_labels.choose(&mut rng) {
                    labels[node_idx as usize] = new_label;
                    changes += 1;
                }
            }

            iterations += 1;
            if changes == 0 {
                converged = true;
                break;
            }
        }

        let communities = labels
            .into_iter()
            .enumerate()
            .map(|(slot, label)| (graph.to_id(slot as u32).clone(), label))
            .collect();

        LabelPropagationResult {
            communities,
            iterations,
            converged,
        }
    }
}
