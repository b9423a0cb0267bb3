// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! `k-core` procedure.

use crate::algo::algorithms::{KCore, KCoreConfig, KCoreResult};
use crate::algo::normalize::min_max_scale;
use crate::algo::options::{OptionDefinition, OptionsSchema, ResolvedOptions};
use crate::algo::procedure_template::{GenericAlgoProcedure, GraphAlgoAdapter};
use crate::algo::procedures::AlgoContext;
use crate::algo::styles::{SuggestedStyles, node_size_by};
use crate::algo::{GraphProjection, ProjectionBuilder};
use arbor_common::{AlgorithmId, Result};

pub struct KCoreAdapter;

impl GraphAlgoAdapter for KCoreAdapter {
    const TYPE: &'static str = "k-core";
    type Algo = KCore;

    fn options_schema() -> OptionsSchema {
        OptionsSchema::new().option(
            "k",
            OptionDefinition::integer(
                None::<usize>,
                "k",
                "Also flag membership in the k-core; unset reports core numbers only",
            )
            .min(0.0)
            .step(1.0),
        )
    }

    fn suggested_styles(id: &AlgorithmId) -> Option<SuggestedStyles> {
        Some(
            SuggestedStyles::new("Size nodes by core number", "structure")
                .layer(node_size_by(id, "coreNumberPct")),
        )
    }

    fn customize_projection<'a>(
        builder: ProjectionBuilder<'a>,
        _options: &ResolvedOptions,
    ) -> Result<ProjectionBuilder<'a>> {
        Ok(builder.add_reverse_edges(false))
    }

    fn to_config(_graph: &GraphProjection, options: &ResolvedOptions) -> Result<Option<KCoreConfig>> {
        Ok(Some(KCoreConfig {
            k: options.get_opt_usize("k")?,
        }))
    }

    fn write_results(ctx: &mut AlgoContext<'_>, _graph: &GraphProjection, result: KCoreResult) -> Result<()> {
        let raw: Vec<f64> = result.core_numbers.iter().map(|(_, c)| *c as f64).collect();
        let pct = min_max_scale(&raw);
        for ((id, core), pct) in result.core_numbers.iter().zip(pct) {
            ctx.add_node_result(id, "coreNumber", *core)?;
            ctx.add_node_result(id, "coreNumberPct", pct)?;
        }
        if let Some(members) = &result.in_core {
            for (id, member) in members {
                ctx.add_node_result(id, "inCore", *member)?;
            }
        }
        ctx.add_graph_result("maxCore", result.max_core);
        Ok(())
    }
}

pub type KCoreProcedure = GenericAlgoProcedure<KCoreAdapter>;
