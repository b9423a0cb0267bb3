// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! `kruskal` procedure: minimum spanning forest over host edges.

use super::{WEIGHT_ATTRIBUTE, apply_weight_attribute, weight_attribute_option};
use crate::algo::algorithms::{MinimumSpanningTree, MstConfig, MstResult};
use crate::algo::options::{OptionsSchema, ResolvedOptions};
use crate::algo::procedure_template::{GenericAlgoProcedure, GraphAlgoAdapter};
use crate::algo::procedures::AlgoContext;
use crate::algo::styles::{SuggestedStyles, edge_highlight_by};
use crate::algo::{GraphProjection, ProjectionBuilder};
use arbor_common::{AlgorithmId, EdgeKey, Result};
use std::collections::BTreeSet;

pub struct KruskalAdapter;

impl GraphAlgoAdapter for KruskalAdapter {
    const TYPE: &'static str = "kruskal";
    type Algo = MinimumSpanningTree;

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
        apply_weight_attribute(builder.add_reverse_edges(false), options, WEIGHT_ATTRIBUTE)
    }

    fn to_config(_graph: &GraphProjection, _options: &ResolvedOptions) -> Result<Option<MstConfig>> {
        Ok(Some(MstConfig::default()))
    }

    fn write_results(ctx: &mut AlgoContext<'_>, _graph: &GraphProjection, result: MstResult) -> Result<()> {
        let in_tree: BTreeSet<&EdgeKey> = result.edges.iter().map(|(k, _)| k).collect();
        let edge_keys: Vec<EdgeKey> = ctx.graph().edges().map(|e| e.key().clone()).collect();
        for key in &edge_keys {
            ctx.add_edge_result(key, "inMST", in_tree.contains(key))?;
        }
        ctx.add_graph_result("totalWeight", result.total_weight);
        ctx.add_graph_result("edgeCount", result.edges.len());
        Ok(())
    }
}

pub type KruskalProcedure = GenericAlgoProcedure<KruskalAdapter>;
