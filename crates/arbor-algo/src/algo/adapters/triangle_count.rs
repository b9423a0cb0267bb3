// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! `triangle-count` procedure.

use crate::algo::algorithms::{TriangleCount, TriangleCountConfig, TriangleCountResult};
use crate::algo::options::{OptionsSchema, ResolvedOptions};
use crate::algo::procedure_template::{GenericAlgoProcedure, GraphAlgoAdapter};
use crate::algo::procedures::AlgoContext;
use crate::algo::styles::{SuggestedStyles, node_size_by};
use crate::algo::{GraphProjection, ProjectionBuilder};
use arbor_common::{AlgorithmId, Result};

pub struct TriangleCountAdapter;

impl GraphAlgoAdapter for TriangleCountAdapter {
    const TYPE: &'static str = "triangle-count";
    type Algo = TriangleCount;

    fn options_schema() -> OptionsSchema {
        OptionsSchema::new()
    }

    fn suggested_styles(id: &AlgorithmId) -> Option<SuggestedStyles> {
        Some(
            SuggestedStyles::new("Size nodes by local clustering", "structure")
                .layer(node_size_by(id, "clusteringCoefficient")),
        )
    }

    fn customize_projection<'a>(
        builder: ProjectionBuilder<'a>,
        _options: &ResolvedOptions,
    ) -> Result<ProjectionBuilder<'a>> {
        Ok(builder.add_reverse_edges(false))
    }

    fn to_config(_graph: &GraphProjection, _options: &ResolvedOptions) -> Result<Option<TriangleCountConfig>> {
        Ok(Some(TriangleCountConfig))
    }

    fn write_results(
        ctx: &mut AlgoContext<'_>,
        _graph: &GraphProjection,
        result: TriangleCountResult,
    ) -> Result<()> {
        for (id, count) in &result.node_counts {
            ctx.add_node_result(id, "triangles", *count)?;
        }
        for (id, coefficient) in &result.clustering {
            ctx.add_node_result(id, "clusteringCoefficient", *coefficient)?;
        }
        ctx.add_graph_result("triangleCount", result.global_count);
        ctx.add_graph_result("averageClustering", result.average_clustering);
        Ok(())
    }
}

pub type TriangleCountProcedure = GenericAlgoProcedure<TriangleCountAdapter>;
