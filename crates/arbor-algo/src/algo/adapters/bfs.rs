// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! `bfs` procedure: hop levels from a source node.

use super::{directed_option, existing_node, source_option};
use crate::algo::algorithms::{Bfs, BfsConfig, BfsResult};
use crate::algo::options::{OptionsSchema, ResolvedOptions};
use crate::algo::procedure_template::{GenericAlgoProcedure, GraphAlgoAdapter};
use crate::algo::procedures::AlgoContext;
use crate::algo::styles::{SuggestedStyles, node_color_by_category};
use crate::algo::{GraphProjection, ProjectionBuilder};
use arbor_common::{AlgorithmId, Result};

pub struct BfsAdapter;

impl GraphAlgoAdapter for BfsAdapter {
    const TYPE: &'static str = "bfs";
    type Algo = Bfs;

    fn options_schema() -> OptionsSchema {
        OptionsSchema::new()
            .option("source", source_option())
            .option("directed", directed_option())
    }

    fn suggested_styles(id: &AlgorithmId) -> Option<SuggestedStyles> {
        Some(
            SuggestedStyles::new("Color nodes by hop distance from the source", "traversal")
                .layer(node_color_by_category(id, "level")),
        )
    }

    fn customize_projection<'a>(
        builder: ProjectionBuilder<'a>,
        options: &ResolvedOptions,
    ) -> Result<ProjectionBuilder<'a>> {
        Ok(builder.directed(options.get_bool("directed")?))
    }

    fn to_config(graph: &GraphProjection, options: &ResolvedOptions) -> Result<Option<BfsConfig>> {
        let source = existing_node(options, "source", |id| graph.to_slot(id).is_some())?;
        Ok(source.map(|source| BfsConfig {
            source: Some(source),
        }))
    }

    fn write_results(ctx: &mut AlgoContext<'_>, _graph: &GraphProjection, result: BfsResult) -> Result<()> {
        for visit in &result.visits {
            ctx.add_node_result(&visit.node, "level", visit.level)?;
            ctx.add_node_result(&visit.node, "visitOrder", visit.order)?;
        }
        ctx.add_graph_result("maxLevel", result.max_level);
        ctx.add_graph_result("visitedCount", result.visits.len());
        Ok(())
    }
}

pub type BfsProcedure = GenericAlgoProcedure<BfsAdapter>;
