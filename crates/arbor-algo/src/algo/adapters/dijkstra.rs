// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! `dijkstra` procedure: weighted distances and an optional shortest path.

use super::{
    WEIGHT_ATTRIBUTE, apply_weight_attribute, directed_option, existing_node, finite_value,
    source_option, weight_attribute_option,
};
use crate::algo::algorithms::{Dijkstra, DijkstraConfig, DijkstraResult};
use crate::algo::options::{OptionDefinition, OptionsSchema, ResolvedOptions};
use crate::algo::procedure_template::{GenericAlgoProcedure, GraphAlgoAdapter};
use crate::algo::procedures::AlgoContext;
use crate::algo::styles::{SuggestedStyles, edge_highlight_by};
use crate::algo::{GraphProjection, ProjectionBuilder};
use arbor_common::{AlgorithmId, EdgeKey, NodeId, Result};
use std::collections::BTreeSet;

pub struct DijkstraAdapter;

impl GraphAlgoAdapter for DijkstraAdapter {
    const TYPE: &'static str = "dijkstra";
    type Algo = Dijkstra;

    fn options_schema() -> OptionsSchema {
        OptionsSchema::new()
            .option("source", source_option())
            .option(
                "target",
                OptionDefinition::node_id("Target node", "Report the shortest path to this node"),
            )
            .option("directed", directed_option())
            .option(WEIGHT_ATTRIBUTE, weight_attribute_option())
    }

    fn suggested_styles(id: &AlgorithmId) -> Option<SuggestedStyles> {
        Some(
            SuggestedStyles::new("Highlight the shortest path", "path")
                .layer(edge_highlight_by(id, "isInPath")),
        )
    }

    fn customize_projection<'a>(
        builder: ProjectionBuilder<'a>,
        options: &ResolvedOptions,
    ) -> Result<ProjectionBuilder<'a>> {
        let builder = builder.directed(options.get_bool("directed")?);
        apply_weight_attribute(builder, options, WEIGHT_ATTRIBUTE)
    }

    fn to_config(graph: &GraphProjection, options: &ResolvedOptions) -> Result<Option<DijkstraConfig>> {
        let contains = |id: &NodeId| graph.to_slot(id).is_some();
        let Some(source) = existing_node(options, "source", contains)? else {
            return Ok(None);
        };
        let target = match options.get_node_id("target")? {
            None => None,
            Some(_) => match existing_node(options, "target", contains)? {
                Some(target) => Some(target),
                None => return Ok(None),
            },
        };
        Ok(Some(DijkstraConfig {
            source: Some(source),
            target,
        }))
    }

    fn write_results(
        ctx: &mut AlgoContext<'_>,
        _graph: &GraphProjection,
        result: DijkstraResult,
    ) -> Result<()> {
        for (id, distance) in &result.distances {
            let distance = finite_value(ctx, "distance", *distance);
            ctx.add_node_result(id, "distance", distance)?;
        }

        let wants_path = ctx.options().get_node_id("target")?.is_some();
        if !wants_path {
            return Ok(());
        }
        ctx.add_graph_result("targetReached", result.path.is_some());
        let Some(path) = result.path else {
            return Ok(());
        };

        let node_ids: Vec<_> = ctx.graph().nodes().map(|n| n.id().clone()).collect();
        for id in &node_ids {
            let index = path.nodes.iter().position(|n| n == id);
            ctx.add_node_result(id, "isInPath", index.is_some())?;
            if let Some(index) = index {
                ctx.add_node_result(id, "pathIndex", index)?;
            }
        }

        let on_path: BTreeSet<&EdgeKey> = path.edges.iter().collect();
        let edge_keys: Vec<EdgeKey> = ctx.graph().edges().map(|e| e.key().clone()).collect();
        for key in &edge_keys {
            ctx.add_edge_result(key, "isInPath", on_path.contains(key))?;
        }

        let cost = finite_value(ctx, "pathCost", path.cost);
        ctx.add_graph_result("pathCost", cost);
        ctx.add_graph_result("pathLength", path.edges.len());
        Ok(())
    }
}

pub type DijkstraProcedure = GenericAlgoProcedure<DijkstraAdapter>;
