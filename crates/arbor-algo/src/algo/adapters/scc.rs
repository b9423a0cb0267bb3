// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! `scc` procedure: strongly connected components.

use crate::algo::algorithms::{Scc, SccConfig, SccResult};
use crate::algo::normalize::renumber_communities;
use crate::algo::options::{OptionsSchema, ResolvedOptions};
use crate::algo::procedure_template::{GenericAlgoProcedure, GraphAlgoAdapter};
use crate::algo::procedures::AlgoContext;
use crate::algo::styles::{SuggestedStyles, node_color_by_category};
use crate::algo::{GraphProjection, ProjectionBuilder};
use arbor_common::{AlgorithmId, Result};

pub struct SccAdapter;

impl GraphAlgoAdapter for SccAdapter {
    const TYPE: &'static str = "scc";
    type Algo = Scc;

    fn options_schema() -> OptionsSchema {
        OptionsSchema::new()
    }

    fn suggested_styles(id: &AlgorithmId) -> Option<SuggestedStyles> {
        Some(
            SuggestedStyles::new("Color nodes by strongly connected component", "components")
                .layer(node_color_by_category(id, "componentId")),
        )
    }

    fn customize_projection<'a>(
        builder: ProjectionBuilder<'a>,
        _options: &ResolvedOptions,
    ) -> Result<ProjectionBuilder<'a>> {
        Ok(builder.directed(true))
    }

    fn to_config(_graph: &GraphProjection, _options: &ResolvedOptions) -> Result<Option<SccConfig>> {
        Ok(Some(SccConfig::default()))
    }

    fn write_results(ctx: &mut AlgoContext<'_>, _graph: &GraphProjection, result: SccResult) -> Result<()> {
        // Tarjan numbering depends on traversal order; smallest member is stable
        for (id, component) in renumber_communities(&result.components) {
            ctx.add_node_result(&id, "componentId", component)?;
        }
        ctx.add_graph_result("componentCount", result.component_count);
        Ok(())
    }
}

pub type SccProcedure = GenericAlgoProcedure<SccAdapter>;
