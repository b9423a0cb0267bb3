// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Minimum s-t cut via max-flow/min-cut duality.
//!
//! After the flow saturates, the nodes still reachable from the source in
//! the residual network form the source side of the cut.

use crate::algo::CapacityMap;
use crate::algo::algorithms::Algorithm;
use crate::algo::algorithms::ford_fulkerson::ResidualNetwork;
use arbor_common::NodeId;

pub struct MinCut;

#[derive(Debug, Clone, Default)]
pub struct MinCutConfig {
    pub source: Option<NodeId>,
    pub sink: Option<NodeId>,
}

pub struct MinCutResult {
    pub cut_value: f64,
    /// Side per node: 0 for the source side, 1 for the sink side.
    /// Empty when the cut is undefined (missing endpoint, source == sink).
    pub partition: Vec<(NodeId, u8)>,
}

impl MinCutResult {
    /// Whether `a` and `b` sit on different sides.
    pub fn separates(&self, a: &NodeId, b: &NodeId) -> bool {
        let side = |id: &NodeId| {
            self.partition
                .binary_search_by(|(n, _)| n.cmp(id))
                .ok()
                .map(|i| self.partition[i].1)
        };
        matches!((side(a), side(b)), (Some(x), Some(y)) if x != y)
    }
}

impl Algorithm for MinCut {
    type Graph = CapacityMap;
    type Config = MinCutConfig;
    type Result = MinCutResult;

    fn name() -> &'static str {
        "min_cut"
    }

    fn run(graph: &CapacityMap, config: Self::Config) -> Self::Result {
        let empty = MinCutResult {
            cut_value: 0.0,
            partition: Vec::new(),
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

        let cut_value = network.max_flow(source, sink);
        let source_side = network.reachable_from(source);
        // Slots follow node id order, so the partition is sorted
        let partition = (0..network.len())
            .map(|slot| {
                let side = if source_side[slot] { 0 } else { 1 };
                (network.id(slot).clone(), side)
            })
            .collect();

        MinCutResult {
            cut_value,
            partition,
        }
    }
}
