// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Degree Centrality Algorithm.
//!
//! Counts incoming and outgoing arcs per node. On a projection with
//! synthesized reverse arcs both counts equal the undirected degree.

use crate::algo::GraphProjection;
use crate::algo::algorithms::Algorithm;
use arbor_common::NodeId;

pub struct DegreeCentrality;

#[derive(Debug, Clone, Default)]
pub struct DegreeCentralityConfig {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Degrees {
    pub in_degree: u32,
    pub out_degree: u32,
}

impl Degrees {
    pub fn total(&self) -> u32 {
        self.in_degree + self.out_degree
    }
}

pub struct DegreeCentralityResult {
    pub degrees: Vec<(NodeId, Degrees)>,
}

impl Algorithm for DegreeCentrality {
    type Graph = GraphProjection;
    type Config = DegreeCentralityConfig;
    type Result = DegreeCentralityResult;

    fn name() -> &'static str {
        "degree_centrality"
    }

    fn run(graph: &GraphProjection, _config: Self::Config) -> Self::Result {
        let degrees = (0..graph.vertex_count() as u32)
            .map(|i| {
                let counts = if graph.is_directed() {
                    Degrees {
                        in_degree: graph.in_degree(i),
                        out_degree: graph.out_degree(i),
                    }
                } else {
                    let d = graph.degree(i);
                    Degrees {
                        in_degree: d,
                        out_degree: d,
                    }
                };
                (graph.to_id(i).clone(), counts)
            })
            .collect();

        DegreeCentralityResult { degrees }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algo::test_utils::{build_test_graph, build_undirected_test_graph, by_int};

    #[test]
    fn test_degree_directed() {
        // 0 -> 1, 0 -> 2
        let graph = build_test_graph(&[0, 1, 2], &[(0, 1), (0, 2)]);
        let result = DegreeCentrality::run(&graph, DegreeCentralityConfig::default());
        let map = by_int(&result.degrees);

        assert_eq!(map[&0].out_degree, 2);
        assert_eq!(map[&0].in_degree, 0);
        assert_eq!(map[&1].in_degree, 1);
        assert_eq!(map[&2].total(), 1);
    }

    #[test]
    fn test_degree_undirected() {
        let graph = build_undirected_test_graph(&[0, 1, 2], &[(0, 1), (1, 2)]);
        let result = DegreeCentrality::run(&graph, DegreeCentralityConfig::default());
        let map = by_int(&result.degrees);
        assert_eq!(map[&1].in_degree, 2);
        assert_eq!(map[&1].out_degree, 2);
    }
}
