// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! `bellman-ford` procedure: distances under possibly negative weights.

use super::{
    WEIGHT_ATTRIBUTE, apply_weight_attribute, existing_node, finite_value, source_option,
    weight_attribute_option,
};
use crate::algo::algorithms::{BellmanFord, BellmanFordConfig, BellmanFordResult};
use crate::algo::options::{OptionsSchema, ResolvedOptions};
use crate::algo::procedure_template::{GenericAlgoProcedure, GraphAlgoAdapter};
use crate::algo::procedures::AlgoContext;
use crate::algo::{GraphProjection, ProjectionBuilder};
use arbor_common::Result;

pub struct BellmanFordAdapter;

impl GraphAlgoAdapter for BellmanFordAdapter {
    const TYPE: &'static str = "bellman-ford";
    type Algo = BellmanFord;

    fn options_schema() -> OptionsSchema {
        OptionsSchema::new()
            .option("source", source_option())
            .option(WEIGHT_ATTRIBUTE, weight_attribute_option())
    }

    fn customize_projection<'a>(
        builder: ProjectionBuilder<'a>,
        options: &ResolvedOptions,
    ) -> Result<ProjectionBuilder<'a>> {
        apply_weight_attribute(builder.directed(true), options, WEIGHT_ATTRIBUTE)
    }

    fn to_config(graph: &GraphProjection, options: &ResolvedOptions) -> Result<Option<BellmanFordConfig>> {
        let source = existing_node(options, "source", |id| graph.to_slot(id).is_some())?;
        Ok(source.map(|source| BellmanFordConfig {
            source: Some(source),
        }))
    }

    fn write_results(
        ctx: &mut AlgoContext<'_>,
        _graph: &GraphProjection,
        result: BellmanFordResult,
    ) -> Result<()> {
        ctx.add_graph_result("hasNegativeCycle", result.has_negative_cycle);
        if result.has_negative_cycle {
            log::debug!("{}: negative cycle reachable from source", ctx.id());
            return Ok(());
        }
        for (id, distance) in &result.distances {
            let distance = finite_value(ctx, "distance", *distance);
            ctx.add_node_result(id, "distance", distance)?;
        }
        ctx.add_graph_result("reachableCount", result.distances.len());
        Ok(())
    }
}

pub type BellmanFordProcedure = GenericAlgoProcedure<BellmanFordAdapter>;
