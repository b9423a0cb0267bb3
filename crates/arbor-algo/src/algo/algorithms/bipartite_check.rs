// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Bipartite Check Algorithm.
//!
//! Checks if a graph is bipartite (2-colorable) using BFS.
//! Returns `true` if bipartite, and the partition (0 or 1) for each node.

use crate::algo::GraphProjection;
use crate::algo::algorithms::Algorithm;
use arbor_common::NodeId;
use std::collections::VecDeque;

pub struct BipartiteCheck;

#[derive(Debug, Clone, Default)]
pub struct BipartiteCheckConfig {}

pub struct BipartiteCheckResult {
    pub is_bipartite: bool,
    /// Side per node; empty when the graph is not bipartite.
    pub partition: Vec<(NodeId, u8)>,
}

/// Two-color the projection by slot. `None` when an odd cycle exists.
pub(crate) fn two_color(graph: &GraphProjection) -> Option<Vec<u8>> {
    let n = graph.vertex_count();
    // 0: uncolored, 1: color A, 2: color B
    let mut colors = vec![0u8; n];

    for start in 0..n {
        if colors[start] != 0 {
            continue;
        }

        let mut queue = VecDeque::from([start as u32]);
        colors[start] = 1;

        while let Some(u) = queue.pop_front() {
            let current = colors[u as usize];
            let next = if current == 1 { 2 } else { 1 };

            for (v, _) in graph.neighbors(u) {
                if colors[v as usize] == 0 {
                    colors[v as usize] = next;
                    queue.push_back(v);
                } else if colors[v as usize] == current {
                    return None;
                }
            }
        }
    }

    Some(colors.into_iter().map(|c| c - 1).collect())
}

impl Algorithm for BipartiteCheck {
    type Graph = GraphProjection;
    type Config = BipartiteCheckConfig;
    type Result = BipartiteCheckResult;

    fn name() -> &'static str {
        "bipartite_check"
    }

    fn run(graph: &GraphProjection, _config: Self::Config) -> Self::Result {
        match two_color(graph) {
            Some(colors) => BipartiteCheckResult {
                is_bipartite: true,
                partition: colors
                    .into_iter()
                    .enumerate()
                    .map(|(i, c)| (graph.to_id(i as u32).clone(), c))
                    .collect(),
            },
            None => BipartiteCheckResult {
                is_bipartite: false,
                partition: Vec::new(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algo::test_utils::{build_undirected_test_graph, by_int};

    #[test]
    fn test_even_cycle_is_bipartite() {
        let graph = build_undirected_test_graph(&[0, 1, 2, 3], &[(0, 1), (1, 2), (2, 3), (3, 0)]);
        let result = BipartiteCheck::run(&graph, BipartiteCheckConfig::default());
        assert!(result.is_bipartite);
        let sides = by_int(&result.partition);
        assert_eq!(sides[&0], 0);
        assert_eq!(sides[&1], 1);
        assert_eq!(sides[&2], 0);
    }

    #[test]
    fn test_triangle_is_not_bipartite() {
        let graph = build_undirected_test_graph(&[0, 1, 2], &[(0, 1), (1, 2), (2, 0)]);
        let result = BipartiteCheck::run(&graph, BipartiteCheckConfig::default());
        assert!(!result.is_bipartite);
        assert!(result.partition.is_empty());
    }

    #[test]
    fn test_self_loop_is_not_bipartite() {
        let graph = build_undirected_test_graph(&[0], &[(0, 0)]);
        assert!(two_color(&graph).is_none());
    }
}
