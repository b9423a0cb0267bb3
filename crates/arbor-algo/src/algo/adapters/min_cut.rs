// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! `min-cut` procedure: minimum s-t cut treating edges as undirected.

use super::{CAPACITY_ATTRIBUTE, apply_weight_attribute, capacity_attribute_option, existing_node};
use crate::algo::algorithms::{MinCut, MinCutConfig, MinCutResult};
use crate::algo::options::{OptionDefinition, OptionsSchema, ResolvedOptions};
use crate::algo::procedure_template::{GenericAlgoProcedure, GraphAlgoAdapter};
use crate::algo::procedures::AlgoContext;
use crate::algo::styles::{SuggestedStyles, edge_highlight_by, node_color_by_category};
use crate::algo::{CapacityMap, ProjectionBuilder};
use arbor_common::{AlgorithmId, EdgeKey, Result};

pub struct MinCutAdapter;

impl GraphAlgoAdapter for MinCutAdapter {
    const TYPE: &'static str = "min-cut";
    type Algo = MinCut;

    fn options_schema() -> OptionsSchema {
        OptionsSchema::new()
            .option(
                "source",
                OptionDefinition::node_id("Source node", "Node kept on side 0").required(),
            )
            .option(
                "sink",
                OptionDefinition::node_id("Sink node", "Node kept on side 1").required(),
            )
            .option(CAPACITY_ATTRIBUTE, capacity_attribute_option())
    }

    fn suggested_styles(id: &AlgorithmId) -> Option<SuggestedStyles> {
        Some(
            SuggestedStyles::new("Show both sides of the cut and the edges crossing it", "flow")
                .layer(node_color_by_category(id, "partition"))
                .layer(edge_highlight_by(id, "inCut")),
        )
    }

    fn customize_projection<'a>(
        builder: ProjectionBuilder<'a>,
        options: &ResolvedOptions,
    ) -> Result<ProjectionBuilder<'a>> {
        apply_weight_attribute(builder.add_reverse_edges(true), options, CAPACITY_ATTRIBUTE)
    }

    fn to_config(graph: &CapacityMap, options: &ResolvedOptions) -> Result<Option<MinCutConfig>> {
        let source = existing_node(options, "source", |id| graph.contains(id))?;
        let sink = existing_node(options, "sink", |id| graph.contains(id))?;
        Ok(match (source, sink) {
            (Some(source), Some(sink)) => Some(MinCutConfig {
                source: Some(source),
                sink: Some(sink),
            }),
            _ => None,
        })
    }

    fn write_results(ctx: &mut AlgoContext<'_>, _graph: &CapacityMap, result: MinCutResult) -> Result<()> {
        ctx.add_graph_result("cutValue", result.cut_value);
        if result.partition.is_empty() {
            return Ok(());
        }

        for (id, side) in &result.partition {
            ctx.add_node_result(id, "partition", *side)?;
        }
        let edge_keys: Vec<EdgeKey> = ctx.graph().edges().map(|e| e.key().clone()).collect();
        for key in &edge_keys {
            ctx.add_edge_result(key, "inCut", result.separates(&key.src, &key.dst))?;
        }
        Ok(())
    }
}

pub type MinCutProcedure = GenericAlgoProcedure<MinCutAdapter>;
