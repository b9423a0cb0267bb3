// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! `closeness` procedure.

use super::write_scores;
use crate::algo::algorithms::{Closeness, ClosenessConfig, ClosenessResult};
use crate::algo::options::{OptionDefinition, OptionsSchema, ResolvedOptions};
use crate::algo::procedure_template::{GenericAlgoProcedure, GraphAlgoAdapter};
use crate::algo::procedures::AlgoContext;
use crate::algo::styles::{SuggestedStyles, node_size_by};
use crate::algo::GraphProjection;
use arbor_common::{AlgorithmId, Result};

pub struct ClosenessAdapter;

impl GraphAlgoAdapter for ClosenessAdapter {
    const TYPE: &'static str = "closeness";
    type Algo = Closeness;

    fn options_schema() -> OptionsSchema {
        OptionsSchema::new().option(
            "wassermanFaust",
            OptionDefinition::boolean(
                true,
                "Wasserman-Faust",
                "Scale by reachable fraction so disconnected graphs compare fairly",
            )
            .advanced(),
        )
    }

    fn suggested_styles(id: &AlgorithmId) -> Option<SuggestedStyles> {
        Some(
            SuggestedStyles::new("Size nodes by closeness to all others", "centrality")
                .layer(node_size_by(id, "closenessPct")),
        )
    }

    fn to_config(_graph: &GraphProjection, options: &ResolvedOptions) -> Result<Option<ClosenessConfig>> {
        Ok(Some(ClosenessConfig {
            wasserman_faust: options.get_bool("wassermanFaust")?,
        }))
    }

    fn write_results(
        ctx: &mut AlgoContext<'_>,
        _graph: &GraphProjection,
        result: ClosenessResult,
    ) -> Result<()> {
        write_scores(ctx, &result.scores, "closeness", "closenessPct")
    }
}

pub type ClosenessProcedure = GenericAlgoProcedure<ClosenessAdapter>;
