// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Built-in algorithm adapters.
//!
//! Each adapter binds one kernel from `algo::algorithms` to the framework:
//! option schema, projection shape, config mapping and the result keys it
//! writes. Shared option definitions and result writers live here.

use crate::algo::ProjectionBuilder;
use crate::algo::normalize::{
    clamp_finite, count_unique_communities, min_max_scale, renumber_communities,
};
use crate::algo::options::{OptionDefinition, ResolvedOptions};
use crate::algo::procedures::{AlgoContext, AlgoProcedure};
use arbor_common::{NodeId, Result};
use std::sync::Arc;

mod degree;
pub use degree::{DegreeAdapter, DegreeProcedure};

mod pagerank;
pub use pagerank::{PageRankAdapter, PageRankProcedure};

mod betweenness;
pub use betweenness::{BetweennessAdapter, BetweennessProcedure};

mod closeness;
pub use closeness::{ClosenessAdapter, ClosenessProcedure};

mod harmonic;
pub use harmonic::{HarmonicAdapter, HarmonicProcedure};

mod eigenvector;
pub use eigenvector::{EigenvectorAdapter, EigenvectorProcedure};

mod katz;
pub use katz::{KatzAdapter, KatzProcedure};

mod louvain;
pub use louvain::{LouvainAdapter, LouvainProcedure};

mod label_propagation;
pub use label_propagation::{LabelPropagationAdapter, LabelPropagationProcedure};

mod connected_components;
pub use connected_components::{ConnectedComponentsAdapter, ConnectedComponentsProcedure};

mod scc;
pub use scc::{SccAdapter, SccProcedure};

mod bfs;
pub use bfs::{BfsAdapter, BfsProcedure};

mod dfs;
pub use dfs::{DfsAdapter, DfsProcedure};

mod dijkstra;
pub use dijkstra::{DijkstraAdapter, DijkstraProcedure};

mod bellman_ford;
pub use bellman_ford::{BellmanFordAdapter, BellmanFordProcedure};

mod floyd_warshall;
pub use floyd_warshall::{FloydWarshallAdapter, FloydWarshallProcedure};

mod kruskal;
pub use kruskal::{KruskalAdapter, KruskalProcedure};

mod prim;
pub use prim::{PrimAdapter, PrimProcedure};

mod max_flow;
pub use max_flow::{MaxFlowAdapter, MaxFlowProcedure};

mod min_cut;
pub use min_cut::{MinCutAdapter, MinCutProcedure};

mod bipartite_matching;
pub use bipartite_matching::{BipartiteMatchingAdapter, BipartiteMatchingProcedure};

mod kcore;
pub use kcore::{KCoreAdapter, KCoreProcedure};

mod triangle_count;
pub use triangle_count::{TriangleCountAdapter, TriangleCountProcedure};

mod graph_coloring;
pub use graph_coloring::{GraphColoringAdapter, GraphColoringProcedure};

/// Every built-in procedure under `namespace`, in registration order.
pub fn builtin_procedures(namespace: &str) -> Vec<Arc<dyn AlgoProcedure>> {
    vec![
        Arc::new(DegreeProcedure::with_namespace(namespace)),
        Arc::new(PageRankProcedure::with_namespace(namespace)),
        Arc::new(BetweennessProcedure::with_namespace(namespace)),
        Arc::new(ClosenessProcedure::with_namespace(namespace)),
        Arc::new(HarmonicProcedure::with_namespace(namespace)),
        Arc::new(EigenvectorProcedure::with_namespace(namespace)),
        Arc::new(KatzProcedure::with_namespace(namespace)),
        Arc::new(LouvainProcedure::with_namespace(namespace)),
        Arc::new(LabelPropagationProcedure::with_namespace(namespace)),
        Arc::new(ConnectedComponentsProcedure::with_namespace(namespace)),
        Arc::new(SccProcedure::with_namespace(namespace)),
        Arc::new(BfsProcedure::with_namespace(namespace)),
        Arc::new(DfsProcedure::with_namespace(namespace)),
        Arc::new(DijkstraProcedure::with_namespace(namespace)),
        Arc::new(BellmanFordProcedure::with_namespace(namespace)),
        Arc::new(FloydWarshallProcedure::with_namespace(namespace)),
        Arc::new(KruskalProcedure::with_namespace(namespace)),
        Arc::new(PrimProcedure::with_namespace(namespace)),
        Arc::new(MaxFlowProcedure::with_namespace(namespace)),
        Arc::new(MinCutProcedure::with_namespace(namespace)),
        Arc::new(BipartiteMatchingProcedure::with_namespace(namespace)),
        Arc::new(KCoreProcedure::with_namespace(namespace)),
        Arc::new(TriangleCountProcedure::with_namespace(namespace)),
        Arc::new(GraphColoringProcedure::with_namespace(namespace)),
    ]
}

pub(crate) const WEIGHT_ATTRIBUTE: &str = "weightAttribute";
pub(crate) const CAPACITY_ATTRIBUTE: &str = "capacityAttribute";

pub(crate) fn weight_attribute_option() -> OptionDefinition {
    OptionDefinition::string(
        None::<String>,
        "Weight attribute",
        "Edge data key read as weight; unset uses the configured default",
    )
    .advanced()
}

pub(crate) fn capacity_attribute_option() -> OptionDefinition {
    OptionDefinition::string(
        None::<String>,
        "Capacity attribute",
        "Edge data key read as capacity; unset uses the configured default",
    )
    .advanced()
}

/// Point the projection at the edge attribute named by option `name`.
pub(crate) fn apply_weight_attribute<'a>(
    builder: ProjectionBuilder<'a>,
    options: &ResolvedOptions,
    name: &str,
) -> Result<ProjectionBuilder<'a>> {
    Ok(match options.get_opt_str(name)? {
        Some(attribute) if !attribute.is_empty() => builder.weight_attribute(attribute),
        _ => builder,
    })
}

pub(crate) fn max_iterations_option(default: usize) -> OptionDefinition {
    OptionDefinition::integer(default, "Max iterations", "Upper bound on iterations")
        .min(1.0)
        .max(1000.0)
        .step(1.0)
        .advanced()
}

pub(crate) fn tolerance_option() -> OptionDefinition {
    OptionDefinition::number(1e-6, "Tolerance", "Convergence threshold")
        .min(0.0)
        .advanced()
}

pub(crate) fn seed_option() -> OptionDefinition {
    OptionDefinition::integer(42, "Seed", "Random seed; equal seeds give equal results")
        .min(0.0)
        .step(1.0)
        .advanced()
}

pub(crate) fn source_option() -> OptionDefinition {
    OptionDefinition::node_id("Source node", "Node the computation starts from").required()
}

pub(crate) fn directed_option() -> OptionDefinition {
    OptionDefinition::boolean(false, "Directed", "Follow edges only from source to target")
}

/// Read a node option, treating an id that is not in `contains` as absent.
pub(crate) fn existing_node(
    options: &ResolvedOptions,
    name: &str,
    contains: impl Fn(&NodeId) -> bool,
) -> Result<Option<NodeId>> {
    let node = options.get_node_id(name)?;
    match node {
        Some(id) if contains(&id) => Ok(Some(id)),
        Some(id) => {
            log::debug!("Option '{}' names node {} which is not in the graph", name, id);
            Ok(None)
        }
        None => Ok(None),
    }
}

/// Clamp a numeric result before it reaches the result tree, warning when
/// the kernel produced a non-finite value.
pub(crate) fn finite_value(ctx: &AlgoContext<'_>, key: &str, value: f64) -> f64 {
    if !value.is_finite() {
        log::warn!("{}: non-finite {} value {} clamped", ctx.id(), key, value);
    }
    clamp_finite(value)
}

/// Write raw scores under `key` and their min-max scaling under `pct_key`.
/// Non-finite scores are clamped before scaling.
pub(crate) fn write_scores(
    ctx: &mut AlgoContext<'_>,
    scores: &[(NodeId, f64)],
    key: &str,
    pct_key: &str,
) -> Result<()> {
    let non_finite = scores.iter().filter(|(_, s)| !s.is_finite()).count();
    if non_finite > 0 {
        log::warn!("{}: {} non-finite {} scores clamped", ctx.id(), non_finite, key);
    }
    let raw: Vec<f64> = scores.iter().map(|(_, s)| clamp_finite(*s)).collect();
    let pct = min_max_scale(&raw);
    for (((id, _), score), pct) in scores.iter().zip(&raw).zip(pct) {
        ctx.add_node_result(id, key, *score)?;
        ctx.add_node_result(id, pct_key, pct)?;
    }
    Ok(())
}

/// Renumber raw labels densely, write them under `key` and return the
/// renumbered assignment.
pub(crate) fn write_communities(
    ctx: &mut AlgoContext<'_>,
    raw: &[(NodeId, u64)],
    key: &str,
) -> Result<Vec<(NodeId, u64)>> {
    let dense = renumber_communities(raw);
    for (id, community) in &dense {
        ctx.add_node_result(id, key, *community)?;
    }
    ctx.add_graph_result("communityCount", count_unique_communities(&dense));
    Ok(dense)
}
