// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! `label-propagation` procedure.

use super::{max_iterations_option, seed_option, write_communities};
use crate::algo::algorithms::{LabelPropagation, LabelPropagationConfig, LabelPropagationResult};
use crate::algo::options::{OptionsSchema, ResolvedOptions};
use crate::algo::procedure_template::{GenericAlgoProcedure, GraphAlgoAdapter};
use crate::algo::procedures::AlgoContext;
use crate::algo::styles::{SuggestedStyles, node_color_by_category};
use crate::algo::{GraphProjection, ProjectionBuilder};
use arbor_common::{AlgorithmId, Result};

pub struct LabelPropagationAdapter;

impl GraphAlgoAdapter for LabelPropagationAdapter {
    const TYPE: &'static str = "label-propagation";
    type Algo = LabelPropagation;

    fn options_schema() -> OptionsSchema {
        OptionsSchema::new()
            .option("maxIterations", max_iterations_option(100))
            .option("seed", seed_option())
    }

    fn suggested_styles(id: &AlgorithmId) -> Option<SuggestedStyles> {
        Some(
            SuggestedStyles::new("Color nodes by propagated label", "community")
                .layer(node_color_by_category(id, "communityId")),
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
        options: &ResolvedOptions,
    ) -> Result<Option<LabelPropagationConfig>> {
        Ok(Some(LabelPropagationConfig {
            max_iterations: options.get_usize("maxIterations")?,
            seed: options.get_u64("seed")?,
        }))
    }

    fn write_results(
        ctx: &mut AlgoContext<'_>,
        _graph: &GraphProjection,
        result: LabelPropagationResult,
    ) -> Result<()> {
        write_communities(ctx, &result.communities, "communityId")?;
        ctx.add_graph_result("iterations", result.iterations);
        ctx.add_graph_result("converged", result.converged);
        Ok(())
    }
}

pub type LabelPropagationProcedure = GenericAlgoProcedure<LabelPropagationAdapter>;
