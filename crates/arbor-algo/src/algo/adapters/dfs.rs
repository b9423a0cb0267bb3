// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! `dfs` procedure: discovery order and tree depth from a source node.

use super::{directed_option, existing_node, source_option};
use crate::algo::algorithms::{Dfs, DfsConfig, DfsResult};
use crate::algo::options::{OptionsSchema, ResolvedOptions};
use crate::algo::procedure_template::{GenericAlgoProcedure, GraphAlgoAdapter};
use crate::algo::procedures::AlgoContext;
use crate::algo::{GraphProjection, ProjectionBuilder};
use arbor_common::Result;

pub struct DfsAdapter;

impl GraphAlgoAdapter for DfsAdapter {
    const TYPE: &'static str = "dfs";
    type Algo = Dfs;

    fn options_schema() -> OptionsSchema {
        OptionsSchema::new()
            .option("source", source_option())
            .option("directed", directed_option())
    }

    fn customize_projection<'a>(
        builder: ProjectionBuilder<'a>,
        options: &ResolvedOptions,
    ) -> Result<ProjectionBuilder<'a>> {
        Ok(builder.directed(options.get_bool("directed")?))
    }

    fn to_config(graph: &GraphProjection, options: &ResolvedOptions) -> Result<Option<DfsConfig>> {
        let source = existing_node(options, "source", |id| graph.to_slot(id).is_some())?;
        Ok(source.map(|source| DfsConfig {
            source: Some(source),
        }))
    }

    fn write_results(ctx: &mut AlgoContext<'_>, _graph: &GraphProjection, result: DfsResult) -> Result<()> {
        for visit in &result.visits {
            ctx.add_node_result(&visit.node, "visitOrder", visit.order)?;
            ctx.add_node_result(&visit.node, "depth", visit.depth)?;
        }
        ctx.add_graph_result("maxDepth", result.max_depth);
        ctx.add_graph_result("visitedCount", result.visits.len());
        Ok(())
    }
}

pub type DfsProcedure = GenericAlgoProcedure<DfsAdapter>;
