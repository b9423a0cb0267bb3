// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! `louvain` procedure: modularity-based community detection.

use super::{max_iterations_option, write_communities};
use crate::algo::algorithms::{Louvain, LouvainConfig, LouvainResult};
use crate::algo::normalize::communities_json;
use crate::algo::options::{OptionDefinition, OptionsSchema, ResolvedOptions};
use crate::algo::procedure_template::{GenericAlgoProcedure, GraphAlgoAdapter};
use crate::algo::procedures::AlgoContext;
use crate::algo::styles::{SuggestedStyles, node_color_by_category};
use crate::algo::{GraphProjection, ProjectionBuilder};
use arbor_common::{AlgorithmId, Result};

pub struct LouvainAdapter;

impl GraphAlgoAdapter for LouvainAdapter {
    const TYPE: &'static str = "louvain";
    type Algo = Louvain;

    fn options_schema() -> OptionsSchema {
        OptionsSchema::new()
            .option(
                "resolution",
                OptionDefinition::number(1.0, "Resolution", "Higher values favor smaller communities")
                    .min(0.0)
                    .step(0.1),
            )
            .option("maxIterations", max_iterations_option(10))
            .option(
                "minModularityGain",
                OptionDefinition::number(1e-7, "Min modularity gain", "Smallest gain that moves a node")
                    .min(0.0)
                    .advanced(),
            )
    }

    fn suggested_styles(id: &AlgorithmId) -> Option<SuggestedStyles> {
        Some(
            SuggestedStyles::new("Color nodes by community", "community")
                .layer(node_color_by_category(id, "communityId")),
        )
    }

    fn customize_projection<'a>(
        builder: ProjectionBuilder<'a>,
        _options: &ResolvedOptions,
    ) -> Result<ProjectionBuilder<'a>> {
        Ok(builder.add_reverse_edges(false))
    }

    fn to_config(_graph: &GraphProjection, options: &ResolvedOptions) -> Result<Option<LouvainConfig>> {
        Ok(Some(LouvainConfig {
            resolution: options.get_f64("resolution")?,
            max_iterations: options.get_usize("maxIterations")?,
            min_modularity_gain: options.get_f64("minModularityGain")?,
        }))
    }

    fn write_results(
        ctx: &mut AlgoContext<'_>,
        _graph: &GraphProjection,
        result: LouvainResult,
    ) -> Result<()> {
        let dense = write_communities(ctx, &result.communities, "communityId")?;
        ctx.add_graph_result("modularity", result.modularity);
        ctx.add_graph_result("communities", communities_json(&dense));
        Ok(())
    }
}

pub type LouvainProcedure = GenericAlgoProcedure<LouvainAdapter>;
