// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! `bipartite-matching` procedure: two-coloring plus maximum matching.
//!
//! A graph that is not bipartite is a result, not an error:
//! `isBipartite = false` and `matchingSize = 0`.

use crate::algo::algorithms::{MaximumMatching, MaximumMatchingConfig, MaximumMatchingResult};
use crate::algo::options::{OptionsSchema, ResolvedOptions};
use crate::algo::procedure_template::{GenericAlgoProcedure, GraphAlgoAdapter};
use crate::algo::procedures::AlgoContext;
use crate::algo::styles::{SuggestedStyles, edge_highlight_by, node_color_by_category};
use crate::algo::{GraphProjection, ProjectionBuilder};
use arbor_common::{AlgorithmId, EdgeKey, Result};
use std::collections::BTreeSet;

pub struct BipartiteMatchingAdapter;

impl GraphAlgoAdapter for BipartiteMatchingAdapter {
    const TYPE: &'static str = "bipartite-matching";
    type Algo = MaximumMatching;

    fn options_schema() -> OptionsSchema {
        OptionsSchema::new()
    }

    fn suggested_styles(id: &AlgorithmId) -> Option<SuggestedStyles> {
        Some(
            SuggestedStyles::new("Color the two sides and highlight matched edges", "matching")
                .layer(node_color_by_category(id, "partition"))
                .layer(edge_highlight_by(id, "inMatching")),
        )
    }

    fn customize_projection<'a>(
        builder: ProjectionBuilder<'a>,
        _options: &ResolvedOptions,
    ) -> Result<ProjectionBuilder<'a>> {
        Ok(builder.add_reverse_edges(false))
    }

    fn to_config(
        _graph: &GraphProjection,
        _options: &ResolvedOptions,
    ) -> Result<Option<MaximumMatchingConfig>> {
        Ok(Some(MaximumMatchingConfig::default()))
    }

    fn write_results(
        ctx: &mut AlgoContext<'_>,
        _graph: &GraphProjection,
        result: MaximumMatchingResult,
    ) -> Result<()> {
        ctx.add_graph_result("isBipartite", result.is_bipartite);
        ctx.add_graph_result("matchingSize", result.match_count());
        if !result.is_bipartite {
            return Ok(());
        }

        for (id, side) in &result.partition {
            ctx.add_node_result(id, "partition", *side)?;
        }
        for pair in &result.matching {
            ctx.add_node_result(&pair.left, "matchedWith", pair.right.to_json())?;
            ctx.add_node_result(&pair.right, "matchedWith", pair.left.to_json())?;
        }

        let matched: BTreeSet<&EdgeKey> = result.matching.iter().map(|p| &p.edge).collect();
        let edge_keys: Vec<EdgeKey> = ctx.graph().edges().map(|e| e.key().clone()).collect();
        for key in &edge_keys {
            ctx.add_edge_result(key, "inMatching", matched.contains(key))?;
        }
        Ok(())
    }
}

pub type BipartiteMatchingProcedure = GenericAlgoProcedure<BipartiteMatchingAdapter>;
