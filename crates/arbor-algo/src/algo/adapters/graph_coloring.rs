// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! `graph-coloring` procedure.

use crate::algo::algorithms::{GraphColoring, GraphColoringConfig, GraphColoringResult};
use crate::algo::options::{OptionsSchema, ResolvedOptions};
use crate::algo::procedure_template::{GenericAlgoProcedure, GraphAlgoAdapter};
use crate::algo::procedures::AlgoContext;
use crate::algo::styles::{SuggestedStyles, node_color_by_category};
use crate::algo::{GraphProjection, ProjectionBuilder};
use arbor_common::{AlgorithmId, Result};

pub struct GraphColoringAdapter;

impl GraphAlgoAdapter for GraphColoringAdapter {
    const TYPE: &'static str = "graph-coloring";
    type Algo = GraphColoring;

    fn options_schema() -> OptionsSchema {
        OptionsSchema::new()
    }

    fn suggested_styles(id: &AlgorithmId) -> Option<SuggestedStyles> {
        Some(
            SuggestedStyles::new("Color nodes so that neighbors differ", "structure")
                .layer(node_color_by_category(id, "color")),
        )
    }

    fn customize_projection<'a>(
        builder: ProjectionBuilder<'a>,
        _options: &ResolvedOptions,
    ) -> Result<ProjectionBuilder<'a>> {
        Ok(builder.add_reverse_edges(false))
    }

    fn to_config(_graph: &GraphProjection, _options: &ResolvedOptions) -> Result<Option<GraphColoringConfig>> {
        Ok(Some(GraphColoringConfig::default()))
    }

    fn write_results(
        ctx: &mut AlgoContext<'_>,
        _graph: &GraphProjection,
        result: GraphColoringResult,
    ) -> Result<()> {
        for (id, color) in &result.coloring {
            ctx.add_node_result(id, "color", *color)?;
        }
        ctx.add_graph_result("colorCount", result.color_count);
        Ok(())
    }
}

pub type GraphColoringProcedure = GenericAlgoProcedure<GraphColoringAdapter>;
