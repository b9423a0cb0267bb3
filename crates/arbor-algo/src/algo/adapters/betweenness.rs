// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! `betweenness` procedure.

use super::{seed_option, write_scores};
use crate::algo::algorithms::{Betweenness, BetweennessConfig, BetweennessResult};
use crate::algo::options::{OptionDefinition, OptionsSchema, ResolvedOptions};
use crate::algo::procedure_template::{GenericAlgoProcedure, GraphAlgoAdapter};
use crate::algo::procedures::AlgoContext;
use crate::algo::styles::{SuggestedStyles, node_size_by};
use crate::algo::GraphProjection;
use arbor_common::{AlgorithmId, Result};

pub struct BetweennessAdapter;

impl GraphAlgoAdapter for BetweennessAdapter {
    const TYPE: &'static str = "betweenness";
    type Algo = Betweenness;

    fn options_schema() -> OptionsSchema {
        OptionsSchema::new()
            .option(
                "normalized",
                OptionDefinition::boolean(true, "Normalized", "Scale by the number of node pairs"),
            )
            .option(
                "sampleSize",
                OptionDefinition::integer(
                    None::<usize>,
                    "Sample size",
                    "Approximate from this many source nodes; unset computes exactly",
                )
                .min(1.0)
                .step(1.0)
                .advanced(),
            )
            .option("seed", seed_option())
    }

    fn suggested_styles(id: &AlgorithmId) -> Option<SuggestedStyles> {
        Some(
            SuggestedStyles::new("Size nodes by how often they bridge shortest paths", "centrality")
                .layer(node_size_by(id, "centralityPct")),
        )
    }

    fn to_config(_graph: &GraphProjection, options: &ResolvedOptions) -> Result<Option<BetweennessConfig>> {
        Ok(Some(BetweennessConfig {
            normalize: options.get_bool("normalized")?,
            sampling_size: options.get_opt_usize("sampleSize")?,
            seed: options.get_u64("seed")?,
            undirected: true,
        }))
    }

    fn write_results(
        ctx: &mut AlgoContext<'_>,
        _graph: &GraphProjection,
        result: BetweennessResult,
    ) -> Result<()> {
        write_scores(ctx, &result.scores, "centrality", "centralityPct")
    }
}

pub type BetweennessProcedure = GenericAlgoProcedure<BetweennessAdapter>;
