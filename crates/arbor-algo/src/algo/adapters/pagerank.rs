// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! `pagerank` procedure.

use super::{max_iterations_option, tolerance_option, write_scores};
use crate::algo::algorithms::{PageRank, PageRankConfig, PageRankResult};
use crate::algo::options::{OptionDefinition, OptionsSchema, ResolvedOptions};
use crate::algo::procedure_template::{GenericAlgoProcedure, GraphAlgoAdapter};
use crate::algo::procedures::AlgoContext;
use crate::algo::styles::{SuggestedStyles, node_size_by};
use crate::algo::{GraphProjection, ProjectionBuilder};
use arbor_common::{AlgorithmId, Result};

pub struct PageRankAdapter;

impl GraphAlgoAdapter for PageRankAdapter {
    const TYPE: &'static str = "pagerank";
    type Algo = PageRank;

    fn options_schema() -> OptionsSchema {
        OptionsSchema::new()
            .option(
                "dampingFactor",
                OptionDefinition::number(0.85, "Damping factor", "Probability of following a link")
                    .min(0.0)
                    .max(1.0)
                    .step(0.01),
            )
            .option("maxIterations", max_iterations_option(100))
            .option("tolerance", tolerance_option())
    }

    fn suggested_styles(id: &AlgorithmId) -> Option<SuggestedStyles> {
        Some(
            SuggestedStyles::new("Size nodes by PageRank", "centrality")
                .layer(node_size_by(id, "rankPct")),
        )
    }

    fn customize_projection<'a>(
        builder: ProjectionBuilder<'a>,
        _options: &ResolvedOptions,
    ) -> Result<ProjectionBuilder<'a>> {
        Ok(builder.directed(true))
    }

    fn to_config(_graph: &GraphProjection, options: &ResolvedOptions) -> Result<Option<PageRankConfig>> {
        Ok(Some(PageRankConfig {
            damping_factor: options.get_f64("dampingFactor")?,
            max_iterations: options.get_usize("maxIterations")?,
            tolerance: options.get_f64("tolerance")?,
        }))
    }

    fn write_results(
        ctx: &mut AlgoContext<'_>,
        _graph: &GraphProjection,
        result: PageRankResult,
    ) -> Result<()> {
        write_scores(ctx, &result.scores, "rank", "rankPct")?;
        ctx.add_graph_result("iterations", result.iterations);
        ctx.add_graph_result("converged", result.converged);
        Ok(())
    }
}

pub type PageRankProcedure = GenericAlgoProcedure<PageRankAdapter>;
