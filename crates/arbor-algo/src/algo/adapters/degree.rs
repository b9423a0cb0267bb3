// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! `degree`: in, out and total degree per node.

use crate::algo::algorithms::{
    DegreeCentrality, DegreeCentralityConfig, DegreeCentralityResult, Degrees,
};
use crate::algo::normalize::min_max_scale;
use crate::algo::options::{OptionsSchema, ResolvedOptions};
use crate::algo::procedure_template::{GenericAlgoProcedure, GraphAlgoAdapter};
use crate::algo::procedures::AlgoContext;
use crate::algo::styles::{SuggestedStyles, node_size_by};
use crate::algo::{GraphProjection, ProjectionBuilder};
use arbor_common::{AlgorithmId, Result};

pub struct DegreeAdapter;

impl GraphAlgoAdapter for DegreeAdapter {
    const TYPE: &'static str = "degree";
    type Algo = DegreeCentrality;

    fn options_schema() -> OptionsSchema {
        OptionsSchema::new()
    }

    fn suggested_styles(id: &AlgorithmId) -> Option<SuggestedStyles> {
        Some(
            SuggestedStyles::new("Size nodes by number of connections", "centrality")
                .layer(node_size_by(id, "degreePct")),
        )
    }

    fn customize_projection<'a>(
        builder: ProjectionBuilder<'a>,
        _options: &ResolvedOptions,
    ) -> Result<ProjectionBuilder<'a>> {
        Ok(builder.directed(true))
    }

    fn to_config(_graph: &GraphProjection, _options: &ResolvedOptions) -> Result<Option<DegreeCentralityConfig>> {
        Ok(Some(DegreeCentralityConfig::default()))
    }

    fn write_results(
        ctx: &mut AlgoContext<'_>,
        _graph: &GraphProjection,
        result: DegreeCentralityResult,
    ) -> Result<()> {
        let column = |f: fn(&Degrees) -> u32| -> Vec<f64> {
            result.degrees.iter().map(|(_, d)| f(d) as f64).collect()
        };
        let in_pct = min_max_scale(&column(|d| d.in_degree));
        let out_pct = min_max_scale(&column(|d| d.out_degree));
        let total_pct = min_max_scale(&column(|d| d.total()));

        for (i, (id, d)) in result.degrees.iter().enumerate() {
            ctx.add_node_result(id, "inDegree", d.in_degree)?;
            ctx.add_node_result(id, "outDegree", d.out_degree)?;
            ctx.add_node_result(id, "degree", d.total())?;
            ctx.add_node_result(id, "inDegreePct", in_pct[i])?;
            ctx.add_node_result(id, "outDegreePct", out_pct[i])?;
            ctx.add_node_result(id, "degreePct", total_pct[i])?;
        }

        let max_of = |f: fn(&Degrees) -> u32| {
            result.degrees.iter().map(|(_, d)| f(d)).max().unwrap_or(0)
        };
        ctx.add_graph_result("maxDegree", max_of(|d| d.total()));
        ctx.add_graph_result("maxInDegree", max_of(|d| d.in_degree));
        ctx.add_graph_result("maxOutDegree", max_of(|d| d.out_degree));
        Ok(())
    }
}

pub type DegreeProcedure = GenericAlgoProcedure<DegreeAdapter>;
