// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! `eigenvector` procedure.

use super::{max_iterations_option, tolerance_option, write_scores};
use crate::algo::algorithms::{
    EigenvectorCentrality, EigenvectorCentralityConfig, EigenvectorCentralityResult,
};
use crate::algo::options::{OptionsSchema, ResolvedOptions};
use crate::algo::procedure_template::{GenericAlgoProcedure, GraphAlgoAdapter};
use crate::algo::procedures::AlgoContext;
use crate::algo::styles::{SuggestedStyles, node_size_by};
use crate::algo::GraphProjection;
use arbor_common::{AlgorithmId, Result};

pub struct EigenvectorAdapter;

impl GraphAlgoAdapter for EigenvectorAdapter {
    const TYPE: &'static str = "eigenvector";
    type Algo = EigenvectorCentrality;

    fn options_schema() -> OptionsSchema {
        OptionsSchema::new()
            .option("maxIterations", max_iterations_option(100))
            .option("tolerance", tolerance_option())
    }

    fn suggested_styles(id: &AlgorithmId) -> Option<SuggestedStyles> {
        Some(
            SuggestedStyles::new("Size nodes by connection to influential nodes", "centrality")
                .layer(node_size_by(id, "eigenvectorPct")),
        )
    }

    fn to_config(
        _graph: &GraphProjection,
        options: &ResolvedOptions,
    ) -> Result<Option<EigenvectorCentralityConfig>> {
        Ok(Some(EigenvectorCentralityConfig {
            max_iterations: options.get_usize("maxIterations")?,
            tolerance: options.get_f64("tolerance")?,
        }))
    }

    fn write_results(
        ctx: &mut AlgoContext<'_>,
        _graph: &GraphProjection,
        result: EigenvectorCentralityResult,
    ) -> Result<()> {
        write_scores(ctx, &result.scores, "eigenvector", "eigenvectorPct")?;
        ctx.add_graph_result("iterations", result.iterations);
        Ok(())
    }
}

pub type EigenvectorProcedure = GenericAlgoProcedure<EigenvectorAdapter>;
