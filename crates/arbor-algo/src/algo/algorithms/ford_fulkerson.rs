// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Ford-Fulkerson Algorithm (Edmonds-Karp implementation).
//!
//! Computes maximum flow from source to sink using BFS to find augmenting paths.

use crate::algo::CapacityMap;
use crate::algo::algorithms::Algorithm;
use arbor_common::NodeId;
use std::collections::VecDeque;

/// Residual capacity below this is treated as saturated.
const EPSILON: f64 = 1e-9;

pub struct FordFulkerson;

#[derive(Debug, Clone, Default)]
pub struct FordFulkersonConfig {
    pub source: Option<NodeId>,
    pub sink: Option<NodeId>,
}

pub struct FordFulkersonResult {
    pub max_flow: f64,
    /// Positive flow per capacity-map arc `(from, to, flow)`.
    pub flows: Vec<(NodeId, NodeId, f64)>,
}

#[derive(Clone, Copy)]
struct Edge {
    to: usize,
    rev: usize,
    cap: f64,
    flow: f64,
    /// False for the zero-capacity residual twin.
    forward: bool,
}

/// Residual network over a capacity map with slots in node id order.
pub(crate) struct ResidualNetwork<'a> {
    ids: Vec<&'a NodeId>,
    adj: Vec<Vec<Edge>>,
}

impl<'a> ResidualNetwork<'a> {
    pub(crate) fn new(graph: &'a CapacityMap) -> Self {
        let ids: Vec<&NodeId> = graph.nodes().collect();
        let slot = |id: &NodeId| ids.binary_search(&id).ok();
        let mut adj: Vec<Vec<Edge>> = (0..ids.len()).map(|_| Vec::new()).collect();

        for (u, from) in ids.iter().enumerate() {
            for (to, &cap) in graph.0.get(*from).into_iter().flatten() {
                let Some(v) = slot(to) else {
                    continue;
                };
                let a_len = adj[u].len();
                let b_len = adj[v].len() + usize::from(u == v);
                adj[u].push(Edge {
                    to: v,
                    rev: b_len,
                    cap,
                    flow: 0.0,
                    forward: true,
                });
                adj[v].push(Edge {
                    to: u,
                    rev: a_len,
                    cap: 0.0,
                    flow: 0.0,
                    forward: false,
                });
            }
        }

        Self { ids, adj }
    }

    pub(crate) fn slot(&self, id: &NodeId) -> Option<usize> {
        self.ids.binary_search(&id).ok()
    }

    pub(crate) fn id(&self, slot: usize) -> &'a NodeId {
        self.ids[slot]
    }

    pub(crate) fn len(&self) -> usize {
        self.ids.len()
    }

    /// Run Edmonds-Karp to completion and return the flow value.
    pub(crate) fn max_flow(&mut self, source: usize, sink: usize) -> f64 {
        let n = self.ids.len();
        let mut max_flow = 0.0;

        loop {
            // BFS for augmenting path
            let mut parent: Vec<Option<(usize, usize)>> = vec![None; n]; // (u, edge_index)
            let mut visited = vec![false; n];
            let mut queue = VecDeque::new();
            visited[source] = true;
            queue.push_back(source);

            while let Some(u) = queue.pop_front() {
                if u == sink {
                    break;
                }
                for (idx, e) in self.adj[u].iter().enumerate() {
                    if !visited[e.to] && e.cap - e.flow > EPSILON {
                        visited[e.to] = true;
                        parent[e.to] = Some((u, idx));
                        queue.push_back(e.to);
                    }
                }
            }

            if !visited[sink] {
                break;
            }

            // Path reconstruction and bottleneck
            let mut path = Vec::new();
            let mut v = sink;
            while v != source {
                let Some((u, idx)) = parent[v] else {
                    break;
                };
                path.push((u, idx));
                v = u;
            }
            let path_flow = path
                .iter()
                .map(|&(u, idx)| self.adj[u][idx].cap - self.adj[u][idx].flow)
                .fold(f64::INFINITY, f64::min);
            if !path_flow.is_finite() {
                break;
            }

            // Augment
            for (u, idx) in path {
                let Edge { to, rev, .. } = self.adj[u][idx];
                self.adj[u][idx].flow += path_flow;
                self.adj[to][rev].flow -= path_flow;
            }

            max_flow += path_flow;
        }

        max_flow
    }

    /// Slots reachable from `source` in the residual network.
    pub(crate) fn reachable_from(&self, source: usize) -> Vec<bool> {
        let mut visited = vec![false; self.ids.len()];
        let mut queue = VecDeque::from([source]);
        visited[source] = true;
        while let Some(u) = queue.pop_front() {
            for e in &self.adj[u] {
                if !visited[e.to] && e.cap - e.flow > EPSILON {
                    visited[e.to] = true;
                    queue.push_back(e.to);
                }
            }
        }
        visited
    }

    /// Positive flow on original arcs.
    pub(crate) fn flows(&self) -> Vec<(NodeId, NodeId, f64)> {
        self.adj
            .iter()
            .enumerate()
            .flat_map(|(u, edges)| {
                edges
                    .iter()
                    .filter(|e| e.forward && e.flow > EPSILON)
                    .map(move |e| (self.ids[u].clone(), self.ids[e.to].clone(), e.flow))
            })
            .collect()
    }
}

impl Algorithm for FordFulkerson {
    type Graph = CapacityMap;
    type Config = FordFulkersonConfig;
    type Result = FordFulkersonResult;

    fn name() -> &'static str {
        "ford_fulkerson"
    }

    fn run(graph: &CapacityMap, config: Self::Config) -> Self::Result {
        let empty = FordFulkersonResult {
            max_flow: 0.0,
            flows: Vec::new(),
        };
        let mut network = ResidualNetwork::new(graph);
        let (Some(source), Some(sink)) = (
            config.source.as_ref().and_then(|s| network.slot(s)),
            config.sink.as_ref().and_then(|t| network.slot(t)),
        ) else {
            return empty;
        };
        if source == sink {
            return empty;
        }

        let max_flow = network.max_flow(source, sink);
        FordFulkersonResult {
            max_flow,
            flows: network.flows(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algo::test_utils::build_capacity_map;

    fn config(source: i64, sink: i64) -> FordFulkersonConfig {
        FordFulkersonConfig {
            source: Some(NodeId::from(source)),
            sink: Some(NodeId::from(sink)),
        }
    }

    #[test]
    fn test_ford_fulkerson_simple() {
        // 0 -> 1 (cap 10), 1 -> 2 (cap 5)
        // Max flow 0->2 is 5.
        let graph = build_capacity_map(&[0, 1, 2], &[(0, 1, 10.0), (1, 2, 5.0)], false);
        let result = FordFulkerson::run(&graph, config(0, 2));
        assert_eq!(result.max_flow, 5.0);
        assert_eq!(
            result.flows,
            vec![
                (NodeId::from(0), NodeId::from(1), 5.0),
                (NodeId::from(1), NodeId::from(2), 5.0),
            ]
        );
    }

    #[test]
    fn test_parallel_routes() {
        // Diamond: 0->1 (3), 0->2 (2), 1->3 (2), 2->3 (3), 1->2 (1)
        let graph = build_capacity_map(
            &[0, 1, 2, 3],
            &[(0, 1, 3.0), (0, 2, 2.0), (1, 3, 2.0), (2, 3, 3.0), (1, 2, 1.0)],
            false,
        );
        let result = FordFulkerson::run(&graph, config(0, 3));
        assert_eq!(result.max_flow, 5.0);
    }

    #[test]
    fn test_source_equals_sink() {
        let graph = build_capacity_map(&[0, 1], &[(0, 1, 1.0)], false);
        let result = FordFulkerson::run(&graph, config(0, 0));
        assert_eq!(result.max_flow, 0.0);
        assert!(result.flows.is_empty());
    }
}
