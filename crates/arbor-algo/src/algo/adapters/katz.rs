// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! `katz` procedure.

use super::{max_iterations_option, tolerance_option, write_scores};
use crate::algo::algorithms::{KatzCentrality, KatzCentralityConfig, KatzCentralityResult};
use crate::algo::options::{OptionDefinition, OptionsSchema, ResolvedOptions};
use crate::algo::procedure_template::{GenericAlgoProcedure, GraphAlgoAdapter};
use crate::algo::procedures::AlgoContext;
use crate::algo::styles::{SuggestedStyles, node_size_by};
use crate::algo::{GraphProjection, ProjectionBuilder};
use arbor_common::{AlgorithmId, Result};

pub struct KatzAdapter;

impl GraphAlgoAdapter for KatzAdapter {
    const TYPE: &'static str = "katz";
    type Algo = KatzCentrality;

    fn options_schema() -> OptionsSchema {
        OptionsSchema::new()
            .option(
                "alpha",
                OptionDefinition::number(0.1, "Alpha", "Attenuation per hop")
                    .min(0.0)
                    .max(1.0)
                    .step(0.01),
            )
            .option(
                "beta",
                OptionDefinition::number(1.0, "Beta", "Baseline score every node receives"),
            )
            .option("maxIterations", max_iterations_option(100))
            .option("tolerance", tolerance_option())
    }

    fn suggested_styles(id: &AlgorithmId) -> Option<SuggestedStyles> {
        Some(
            SuggestedStyles::new("Size nodes by Katz centrality", "centrality")
                .layer(node_size_by(id, "katzPct")),
        )
    }

    fn customize_projection<'a>(
        builder: ProjectionBuilder<'a>,
        _options: &ResolvedOptions,
    ) -> Result<ProjectionBuilder<'a>> {
        Ok(builder.directed(true))
    }

    fn to_config(_graph: &GraphProjection, options: &ResolvedOptions) -> Result<Option<KatzCentralityConfig>> {
        Ok(Some(KatzCentralityConfig {
            alpha: options.get_f64("alpha")?,
            beta: options.get_f64("beta")?,
            max_iterations: options.get_usize("maxIterations")?,
            tolerance: options.get_f64("tolerance")?,
        }))
    }

    fn write_results(
        ctx: &mut AlgoContext<'_>,
        _graph: &GraphProjection,
        result: KatzCentralityResult,
    ) -> Result<()> {
        write_scores(ctx, &result.scores, "katz", "katzPct")?;
        ctx.add_graph_result("iterations", result.iterations);
        Ok(())
    }
}

pub type KatzProcedure = GenericAlgoProcedure<KatzAdapter>;
