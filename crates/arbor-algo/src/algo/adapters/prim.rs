// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! `prim` procedure: minimum spanning forest grown node by node.

use super::{WEIGHT_ATTRIBUTE, apply_weight_attribute, weight_attribute_option};
use crate::algo::algorithms::{Prim, PrimConfig, PrimResult};
use crate::algo::options::{OptionsSchema, ResolvedOptions};
use crate::algo::procedure_template::{GenericAlgoProcedure, GraphAlgoAdapter};
use crate::algo::procedures::AlgoContext;
use crate::algo::styles::{SuggestedStyles, edge_highlight_by};
use crate::algo::{AdjacencyMap, ProjectionBuilder};
use arbor_common::{AlgorithmId, EdgeKey, HostGraph, NodeId, Result};
use std::collections::BTreeSet;

pub struct PrimAdapter;

/// Host edge realizing the tree pair `(a, b)` with weight `w`.
///
/// The adjacency map keeps the lighter direction, so the matching host edge
/// is the one in either orientation whose weight equals `w`.
fn host_edge(
    graph: &HostGraph,
    a: &NodeId,
    b: &NodeId,
    w: f64,
    weight_of: impl Fn(&EdgeKey) -> Option<f64>,
) -> Option<EdgeKey> {
    let forward = EdgeKey::new(a.clone(), b.clone());
    let backward = forward.reversed();
    [forward, backward]
        .into_iter()
        .filter(|k| graph.contains_edge(k))
        .find(|k| weight_of(k) == Some(w))
}

impl GraphAlgoAdapter for PrimAdapter {
    const TYPE: &'static str = "prim";
    type Algo = Prim;

    fn options_schema() -> OptionsSchema {
        OptionsSchema::new().option(WEIGHT_ATTRIBUTE, weight_attribute_option())
    }

    fn suggested_styles(id: &AlgorithmId) -> Option<SuggestedStyles> {
        Some(
            SuggestedStyles::new("Highlight minimum spanning tree edges", "spanning-tree")
                .layer(edge_highlight_by(id, "inMST")),
        )
    }

    fn customize_projection<'a>(
        builder: ProjectionBuilder<'a>,
        options: &ResolvedOptions,
    ) -> Result<ProjectionBuilder<'a>> {
        apply_weight_attribute(builder, options, WEIGHT_ATTRIBUTE)
    }

    fn to_config(_graph: &AdjacencyMap, _options: &ResolvedOptions) -> Result<Option<PrimConfig>> {
        Ok(Some(PrimConfig::default()))
    }

    fn write_results(ctx: &mut AlgoContext<'_>, _graph: &AdjacencyMap, result: PrimResult) -> Result<()> {
        let attribute = match ctx.options().get_opt_str(WEIGHT_ATTRIBUTE)? {
            Some(a) if !a.is_empty() => a.to_string(),
            _ => ctx.config().weight_attribute.clone(),
        };
        let default_weight = ctx.config().default_weight;

        let host = ctx.graph();
        let weight_of = |k: &EdgeKey| {
            host.edge(k)
                .map(|e| e.numeric(&attribute).unwrap_or(default_weight))
        };
        let in_tree: BTreeSet<EdgeKey> = result
            .edges
            .iter()
            .filter_map(|(a, b, w)| host_edge(host, a, b, *w, &weight_of))
            .collect();
        let node_ids: Vec<NodeId> = host.nodes().map(|n| n.id().clone()).collect();
        let edge_keys: Vec<EdgeKey> = host.edges().map(|e| e.key().clone()).collect();

        for id in &node_ids {
            ctx.add_node_result(id, "inTree", result.in_tree.contains(id))?;
        }
        for key in &edge_keys {
            ctx.add_edge_result(key, "inMST", in_tree.contains(key))?;
        }
        ctx.add_graph_result("totalWeight", result.total_weight);
        ctx.add_graph_result("edgeCount", result.edges.len());
        Ok(())
    }
}

pub type PrimProcedure = GenericAlgoProcedure<PrimAdapter>;
