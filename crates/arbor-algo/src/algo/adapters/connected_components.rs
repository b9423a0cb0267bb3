// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! `connected-components` procedure (weakly connected).

use crate::algo::algorithms::{Wcc, WccConfig, WccResult};
use crate::algo::options::{OptionsSchema, ResolvedOptions};
use crate::algo::procedure_template::{GenericAlgoProcedure, GraphAlgoAdapter};
use crate::algo::procedures::AlgoContext;
use crate::algo::styles::{SuggestedStyles, node_color_by_category};
use crate::algo::{GraphProjection, ProjectionBuilder};
use arbor_common::{AlgorithmId, Result};

pub struct ConnectedComponentsAdapter;

impl GraphAlgoAdapter for ConnectedComponentsAdapter {
    const TYPE: &'static str = "connected-components";
    type Algo = Wcc;

    fn options_schema() -> OptionsSchema {
        OptionsSchema::new()
    }

    fn suggested_styles(id: &AlgorithmId) -> Option<SuggestedStyles> {
        Some(
            SuggestedStyles::new("Color nodes by connected component", "components")
                .layer(node_color_by_category(id, "componentId")),
        )
    }

    fn customize_projection<'a>(
        builder: ProjectionBuilder<'a>,
        _options: &ResolvedOptions,
    ) -> Result<ProjectionBuilder<'a>> {
        Ok(builder.add_reverse_edges(false))
    }

    fn to_config(_graph: &GraphProjection, _options: &ResolvedOptions) -> Result<Option<WccConfig>> {
        Ok(Some(WccConfig::default()))
    }

    fn write_results(ctx: &mut AlgoContext<'_>, _graph: &GraphProjection, result: WccResult) -> Result<()> {
        for (id, component) in &result.components {
            ctx.add_node_result(id, "componentId", *component)?;
        }
        ctx.add_graph_result("componentCount", result.component_count);
        ctx.add_graph_result("largestComponentSize", result.largest_component_size);
        Ok(())
    }
}

pub type ConnectedComponentsProcedure = GenericAlgoProcedure<ConnectedComponentsAdapter>;
