// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! `max-flow` procedure: maximum s-t flow along directed host edges.

use super::{CAPACITY_ATTRIBUTE, apply_weight_attribute, capacity_attribute_option, existing_node};
use crate::algo::algorithms::{FordFulkerson, FordFulkersonConfig, FordFulkersonResult};
use crate::algo::normalize::min_max_scale;
use crate::algo::options::{OptionDefinition, OptionsSchema, ResolvedOptions};
use crate::algo::procedure_template::{GenericAlgoProcedure, GraphAlgoAdapter};
use crate::algo::procedures::AlgoContext;
use crate::algo::styles::{SuggestedStyles, StyleLayer, StyleRule};
use crate::algo::{CapacityMap, ProjectionBuilder};
use arbor_common::{AlgorithmId, EdgeKey, Result};
use std::collections::BTreeMap;

pub struct MaxFlowAdapter;

impl GraphAlgoAdapter for MaxFlowAdapter {
    const TYPE: &'static str = "max-flow";
    type Algo = FordFulkerson;

    fn options_schema() -> OptionsSchema {
        OptionsSchema::new()
            .option(
                "source",
                OptionDefinition::node_id("Source node", "Node the flow leaves from").required(),
            )
            .option(
                "sink",
                OptionDefinition::node_id("Sink node", "Node the flow arrives at").required(),
            )
            .option(CAPACITY_ATTRIBUTE, capacity_attribute_option())
    }

    fn suggested_styles(id: &AlgorithmId) -> Option<SuggestedStyles> {
        Some(
            SuggestedStyles::new("Scale edge width by carried flow", "flow").layer(
                StyleLayer::new("Flow", "Edge width by relative flow").edge(
                    StyleRule::new("edge", serde_json::json!({})).calculated(
                        id,
                        &["flowPct"],
                        "style.width",
                        "1 + arguments[0] * 9",
                    ),
                ),
            ),
        )
    }

    fn customize_projection<'a>(
        builder: ProjectionBuilder<'a>,
        options: &ResolvedOptions,
    ) -> Result<ProjectionBuilder<'a>> {
        apply_weight_attribute(builder.add_reverse_edges(false), options, CAPACITY_ATTRIBUTE)
    }

    fn to_config(graph: &CapacityMap, options: &ResolvedOptions) -> Result<Option<FordFulkersonConfig>> {
        let source = existing_node(options, "source", |id| graph.contains(id))?;
        let sink = existing_node(options, "sink", |id| graph.contains(id))?;
        Ok(match (source, sink) {
            (Some(source), Some(sink)) => Some(FordFulkersonConfig {
                source: Some(source),
                sink: Some(sink),
            }),
            _ => None,
        })
    }

    fn write_results(
        ctx: &mut AlgoContext<'_>,
        _graph: &CapacityMap,
        result: FordFulkersonResult,
    ) -> Result<()> {
        ctx.add_graph_result("maxFlow", result.max_flow);
        if ctx.options().get_node_id("source")? == ctx.options().get_node_id("sink")? {
            return Ok(());
        }

        let by_pair: BTreeMap<EdgeKey, f64> = result
            .flows
            .into_iter()
            .map(|(a, b, f)| (EdgeKey::new(a, b), f))
            .collect();
        let edge_keys: Vec<EdgeKey> = ctx.graph().edges().map(|e| e.key().clone()).collect();
        let flows: Vec<f64> = edge_keys
            .iter()
            .map(|k| by_pair.get(k).copied().unwrap_or(0.0))
            .collect();
        let pct = min_max_scale(&flows);

        for ((key, flow), pct) in edge_keys.iter().zip(flows).zip(pct) {
            ctx.add_edge_result(key, "flow", flow)?;
            ctx.add_edge_result(key, "flowPct", pct)?;
        }
        Ok(())
    }
}

pub type MaxFlowProcedure = GenericAlgoProcedure<MaxFlowAdapter>;
