// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Maximum Bipartite Matching Algorithm (Hopcroft-Karp).
//!
//! Finds the maximum matching in a bipartite graph. A graph that is not
//! bipartite is reported as such with an empty matching.

use crate::algo::GraphProjection;
use crate::algo::algorithms::Algorithm;
use crate::algo::algorithms::bipartite_check::two_color;
use arbor_common::{EdgeKey, NodeId};
use std::collections::VecDeque;

const UNSET: u32 = u32::MAX;

pub struct MaximumMatching;

#[derive(Debug, Clone, Default)]
pub struct MaximumMatchingConfig {}

#[derive(Debug, Clone, PartialEq)]
pub struct MatchedPair {
    /// Endpoint on side 0.
    pub left: NodeId,
    /// Endpoint on side 1.
    pub right: NodeId,
    /// Host edge realizing the pair.
    pub edge: EdgeKey,
}

pub struct MaximumMatchingResult {
    pub is_bipartite: bool,
    pub partition: Vec<(NodeId, u8)>,
    pub matching: Vec<MatchedPair>,
}

impl MaximumMatchingResult {
    pub fn match_count(&self) -> usize {
        self.matching.len()
    }
}

/// Per-phase Hopcroft-Karp state, indexed by slot.
struct Matcher<'g> {
    graph: &'g GraphProjection,
    /// Partner slot and connecting arc for each matched slot.
    mate: Vec<Option<(usize, u32)>>,
    dist: Vec<u32>,
}

impl Matcher<'_> {
    /// Layer free left nodes; true if some augmenting path exists.
    fn bfs(&mut self, left: &[usize]) -> bool {
        let mut queue = VecDeque::new();
        for &u in left {
            if self.mate[u].is_none() {
                self.dist[u] = 0;
                queue.push_back(u);
            } else {
                self.dist[u] = UNSET;
            }
        }

        let mut found = false;
        while let Some(u) = queue.pop_front() {
            for (v, _) in self.graph.neighbors(u as u32) {
                match self.mate[v as usize] {
                    Some((next_u, _)) if self.dist[next_u] == UNSET => {
                        self.dist[next_u] = self.dist[u] + 1;
                        queue.push_back(next_u);
                    }
                    Some(_) => {}
                    None => found = true,
                }
            }
        }
        found
    }

    fn dfs(&mut self, u: usize) -> bool {
        let graph = self.graph;
        for (v, arc_id) in graph.neighbors(u as u32) {
            let v = v as usize;
            let proceed = match self.mate[v] {
                Some((next_u, _)) => self.dist[next_u] == self.dist[u] + 1 && self.dfs(next_u),
                None => true,
            };
            if proceed {
                self.mate[v] = Some((u, arc_id));
                self.mate[u] = Some((v, arc_id));
                return true;
            }
        }
        // Dead end for the rest of this phase
        self.dist[u] = UNSET;
        false
    }
}

impl Algorithm for MaximumMatching {
    type Graph = GraphProjection;
    type Config = MaximumMatchingConfig;
    type Result = MaximumMatchingResult;

    fn name() -> &'static str {
        "max_matching"
    }

    fn run(graph: &GraphProjection, _config: Self::Config) -> Self::Result {
        let Some(colors) = two_color(graph) else {
            return MaximumMatchingResult {
                is_bipartite: false,
                partition: Vec::new(),
                matching: Vec::new(),
            };
        };

        let n = graph.vertex_count();
        let left: Vec<usize> = (0..n).filter(|&i| colors[i] == 0).collect();
        let mut matcher = Matcher {
            graph,
            mate: vec![None; n],
            dist: vec![UNSET; n],
        };

        while matcher.bfs(&left) {
            for &u in &left {
                if matcher.mate[u].is_none() {
                    matcher.dfs(u);
                }
            }
        }

        let matching = left
            .iter()
            .filter_map(|&u| {
                matcher.mate[u].map(|(v, arc_id)| MatchedPair {
                    left: graph.to_id(u as u32).clone(),
                    right: graph.to_id(v as u32).clone(),
                    edge: graph.arc(arc_id).origin.clone(),
                })
            })
            .collect();

        MaximumMatchingResult {
            is_bipartite: true,
            partition: colors
                .into_iter()
                .enumerate()
                .map(|(i, c)| (graph.to_id(i as u32).clone(), c))
                .collect(),
            matching,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algo::test_utils::build_undirected_test_graph;

    #[test]
    fn test_perfect_matching_on_path() {
        // 0 - 1 - 2 - 3: greedy 1-2 would block, maximum is {0-1, 2-3}
        let graph = build_undirected_test_graph(&[0, 1, 2, 3], &[(1, 2), (0, 1), (2, 3)]);
        let result = MaximumMatching::run(&graph, MaximumMatchingConfig::default());
        assert!(result.is_bipartite);
        assert_eq!(result.match_count(), 2);
        let mut edges: Vec<EdgeKey> = result.matching.iter().map(|m| m.edge.clone()).collect();
        edges.sort();
        assert_eq!(edges, vec![EdgeKey::new(0, 1), EdgeKey::new(2, 3)]);
    }

    #[test]
    fn test_star_matches_one() {
        let graph = build_undirected_test_graph(&[0, 1, 2, 3], &[(0, 1), (0, 2), (0, 3)]);
        let result = MaximumMatching::run(&graph, MaximumMatchingConfig::default());
        assert_eq!(result.match_count(), 1);
    }

    #[test]
    fn test_not_bipartite() {
        let graph = build_undirected_test_graph(&[0, 1, 2], &[(0, 1), (1, 2), (2, 0)]);
        let result = MaximumMatching::run(&graph, MaximumMatchingConfig::default());
        assert!(!result.is_bipartite);
        assert_eq!(result.match_count(), 0);
    }
}
