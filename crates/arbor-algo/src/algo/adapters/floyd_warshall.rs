// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! `floyd-warshall` procedure: all-pairs distance summaries.

use super::{
    WEIGHT_ATTRIBUTE, apply_weight_attribute, directed_option, finite_value, weight_attribute_option,
};
use crate::algo::algorithms::{FloydWarshall, FloydWarshallConfig, FloydWarshallResult};
use crate::algo::options::{OptionsSchema, ResolvedOptions};
use crate::algo::procedure_template::{GenericAlgoProcedure, GraphAlgoAdapter};
use crate::algo::procedures::AlgoContext;
use crate::algo::{GraphProjection, ProjectionBuilder};
use arbor_common::Result;

pub struct FloydWarshallAdapter;

impl GraphAlgoAdapter for FloydWarshallAdapter {
    const TYPE: &'static str = "floyd-warshall";
    type Algo = FloydWarshall;

    fn options_schema() -> OptionsSchema {
        OptionsSchema::new()
            .option("directed", directed_option())
            .option(WEIGHT_ATTRIBUTE, weight_attribute_option())
    }

    fn customize_projection<'a>(
        builder: ProjectionBuilder<'a>,
        options: &ResolvedOptions,
    ) -> Result<ProjectionBuilder<'a>> {
        let builder = builder.directed(options.get_bool("directed")?);
        apply_weight_attribute(builder, options, WEIGHT_ATTRIBUTE)
    }

    fn to_config(_graph: &GraphProjection, _options: &ResolvedOptions) -> Result<Option<FloydWarshallConfig>> {
        Ok(Some(FloydWarshallConfig::default()))
    }

    fn write_results(
        ctx: &mut AlgoContext<'_>,
        _graph: &GraphProjection,
        result: FloydWarshallResult,
    ) -> Result<()> {
        for (id, summary) in &result.summaries {
            let eccentricity = finite_value(ctx, "eccentricity", summary.eccentricity);
            let average = finite_value(ctx, "averageDistance", summary.average_distance);
            ctx.add_node_result(id, "eccentricity", eccentricity)?;
            ctx.add_node_result(id, "averageDistance", average)?;
            ctx.add_node_result(id, "reachableCount", summary.reachable_count)?;
        }
        let diameter = finite_value(ctx, "diameter", result.diameter);
        let radius = finite_value(ctx, "radius", result.radius);
        ctx.add_graph_result("diameter", diameter);
        ctx.add_graph_result("radius", radius);
        Ok(())
    }
}

pub type FloydWarshallProcedure = GenericAlgoProcedure<FloydWarshallAdapter>;
