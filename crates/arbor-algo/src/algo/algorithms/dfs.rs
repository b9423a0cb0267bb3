// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Depth-first search with an explicit stack.

use crate::algo::GraphProjection;
use crate::algo::algorithms::Algorithm;
use arbor_common::NodeId;

pub struct Dfs;

#[derive(Debug, Clone, Default)]
pub struct DfsConfig {
    pub source: Option<NodeId>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DfsVisit {
    pub node: NodeId,
    /// Pre-order discovery position.
    pub order: usize,
    /// Depth in the DFS tree.
    pub depth: usize,
}

pub struct DfsResult {
    pub visits: Vec<DfsVisit>,
    pub max_depth: usize,
}

/// Node state during DFS traversal.
#[derive(Clone, Copy, PartialEq, Eq)]
enum NodeColor {
    /// Not yet discovered
    White,
    /// Discovered but not finished (on stack)
    Gray,
    /// Finished processing
    Black,
}

impl Algorithm for Dfs {
    type Graph = GraphProjection;
    type Config = DfsConfig;
    type Result = DfsResult;

    fn name() -> &'static str {
        "dfs"
    }

    fn run(graph: &GraphProjection, config: Self::Config) -> Self::Result {
        let Some(start) = config.source.as_ref().and_then(|s| graph.to_slot(s)) else {
            return DfsResult {
                visits: Vec::new(),
                max_depth: 0,
            };
        };

        let mut color = vec![NodeColor::White; graph.vertex_count()];
        let mut visits = Vec::new();
        let mut max_depth = 0;

        // (node, depth, neighbors already examined)
        let mut stack: Vec<(u32, usize, usize)> = vec![(start, 0, 0)];
        color[start as usize] = NodeColor::Gray;
        visits.push(DfsVisit {
            node: graph.to_id(start).clone(),
            order: 0,
            depth: 0,
        });

        while let Some(frame) = stack.last_mut() {
            let (node, depth) = (frame.0, frame.1);
            let next = graph.neighbors(node).nth(frame.2);
            frame.2 += 1;

            match next {
                Some((neighbor, _)) if color[neighbor as usize] == NodeColor::White => {
                    color[neighbor as usize] = NodeColor::Gray;
                    max_depth = max_depth.max(depth + 1);
                    visits.push(DfsVisit {
                        node: graph.to_id(neighbor).clone(),
                        order: visits.len(),
                        depth: depth + 1,
                    });
                    stack.push((neighbor, depth + 1, 0));
                }
                Some(_) => {}
                None => {
                    color[node as usize] = NodeColor::Black;
                    stack.pop();
                }
            }
        }

        DfsResult { visits, max_depth }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algo::test_utils::build_symmetric_test_graph;

    #[test]
    fn test_dfs_goes_deep_first() {
        // 0 - 1 - 2 and 0 - 3
        let graph = build_symmetric_test_graph(&[0, 1, 2, 3], &[(0, 1), (1, 2), (0, 3)]);
        let result = Dfs::run(
            &graph,
            DfsConfig {
                source: Some(NodeId::from(0)),
            },
        );
        let order: Vec<NodeId> = result.visits.iter().map(|v| v.node.clone()).collect();
        assert_eq!(
            order,
            vec![NodeId::from(0), NodeId::from(1), NodeId::from(2), NodeId::from(3)]
        );
        assert_eq!(result.max_depth, 2);
        assert_eq!(result.visits[3].depth, 1);
    }
}
