// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Prim's minimum spanning tree over a symmetric adjacency map.
//!
//! Each component is grown from its smallest node id, giving a spanning
//! forest on disconnected input.

use crate::algo::AdjacencyMap;
use crate::algo::algorithms::Algorithm;
use arbor_common::NodeId;
use std::cmp::{Ordering, Reverse};
use std::collections::{BTreeSet, BinaryHeap};

pub struct Prim;

#[derive(Debug, Clone, Default)]
pub struct PrimConfig {}

pub struct PrimResult {
    /// Tree edges as `(parent, child, weight)` in the order they were added.
    pub edges: Vec<(NodeId, NodeId, f64)>,
    /// Nodes incident to at least one tree edge.
    pub in_tree: BTreeSet<NodeId>,
    pub total_weight: f64,
}

/// Frontier edge ordered by weight, then endpoints.
#[derive(Debug, PartialEq)]
struct Candidate {
    weight: f64,
    from: NodeId,
    to: NodeId,
}

impl Eq for Candidate {}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight
            .total_cmp(&other.weight)
            .then_with(|| self.from.cmp(&other.from))
            .then_with(|| self.to.cmp(&other.to))
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Algorithm for Prim {
    type Graph = AdjacencyMap;
    type Config = PrimConfig;
    type Result = PrimResult;

    fn name() -> &'static str {
        "prim"
    }

    fn run(graph: &AdjacencyMap, _config: Self::Config) -> Self::Result {
        let mut visited: BTreeSet<&NodeId> = BTreeSet::new();
        let mut edges = Vec::new();
        let mut in_tree = BTreeSet::new();
        let mut total_weight = 0.0;

        for root in graph.nodes() {
            if !visited.insert(root) {
                continue;
            }

            let mut heap = BinaryHeap::new();
            let push_frontier = |heap: &mut BinaryHeap<Reverse<Candidate>>, from: &NodeId| {
                for (to, weight) in graph.neighbors(from) {
                    heap.push(Reverse(Candidate {
                        weight,
                        from: from.clone(),
                        to: to.clone(),
                    }));
                }
            };
            push_frontier(&mut heap, root);

            while let Some(Reverse(candidate)) = heap.pop() {
                let Some((to, _)) = graph.0.get_key_value(&candidate.to) else {
                    continue;
                };
                if !visited.insert(to) {
                    continue;
                }
                in_tree.insert(candidate.from.clone());
                in_tree.insert(candidate.to.clone());
                total_weight += candidate.weight;
                push_frontier(&mut heap, to);
                edges.push((candidate.from, candidate.to, candidate.weight));
            }
        }

        PrimResult {
            edges,
            in_tree,
            total_weight,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algo::test_utils::build_adjacency_map;

    #[test]
    fn test_prim_matches_kruskal_weight() {
        // 0-1 (1.0), 1-2 (2.0), 0-2 (10.0), 2-3 (1.5)
        let graph = build_adjacency_map(
            &[0, 1, 2, 3],
            &[(0, 1, 1.0), (1, 2, 2.0), (0, 2, 10.0), (2, 3, 1.5)],
        );
        let result = Prim::run(&graph, PrimConfig::default());
        assert_eq!(result.total_weight, 4.5);
        assert_eq!(result.edges.len(), 3);
        assert_eq!(result.in_tree.len(), 4);
        assert_eq!(
            result.edges[0],
            (NodeId::from(0), NodeId::from(1), 1.0)
        );
    }

    #[test]
    fn test_isolated_node_not_in_tree() {
        let graph = build_adjacency_map(&[0, 1, 2], &[(0, 1, 3.0)]);
        let result = Prim::run(&graph, PrimConfig::default());
        assert_eq!(result.edges.len(), 1);
        assert!(!result.in_tree.contains(&NodeId::from(2)));
    }

    #[test]
    fn test_lighter_direction_wins() {
        let graph = build_adjacency_map(&[0, 1], &[(0, 1, 5.0), (1, 0, 2.0)]);
        let result = Prim::run(&graph, PrimConfig::default());
        assert_eq!(result.total_weight, 2.0);
    }
}
