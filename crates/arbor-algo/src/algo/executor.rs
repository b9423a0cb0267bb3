// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Async execution against a graph shared between tasks.
//!
//! Options are validated on the calling task so an invalid option fails
//! before anything is scheduled. The run itself happens on the blocking
//! pool while holding the graph's write lock: at most one algorithm writes
//! a shared graph at any time, which is the single-writer contract for
//! shared use. Readers block until the run completes.

use crate::algo::options::{OptionLayers, Options, resolve_layered};
use crate::algo::procedures::{AlgoProcedure, AlgorithmInstance, ResultsView};
use crate::algo::AlgorithmRegistry;
use anyhow::Context;
use arbor_common::{ArborConfig, HostGraph, Result};
use parking_lot::RwLock;
use std::sync::Arc;

/// A host graph shared between tasks.
pub type SharedGraph = Arc<RwLock<HostGraph>>;

pub fn shared(graph: HostGraph) -> SharedGraph {
    Arc::new(RwLock::new(graph))
}

/// Look up `namespace:type` in `registry` and run it on `graph`.
///
/// Returns `Ok(None)` for an unknown key, otherwise the view of the
/// algorithm's own results after the run.
pub async fn run_shared(
    registry: &AlgorithmRegistry,
    graph: &SharedGraph,
    namespace: &str,
    algorithm_type: &str,
    options: Options,
) -> Result<Option<ResultsView>> {
    let Some(procedure) = registry.get_class(namespace, algorithm_type) else {
        return Ok(None);
    };
    run_procedure_shared(procedure, registry.config.clone(), graph, options)
        .await
        .map(Some)
}

/// Run one procedure on `graph` on the blocking pool.
pub async fn run_procedure_shared(
    procedure: Arc<dyn AlgoProcedure>,
    config: Arc<ArborConfig>,
    graph: &SharedGraph,
    options: Options,
) -> Result<ResultsView> {
    // Validation happens here so a bad option never reaches the pool.
    resolve_layered(
        &procedure.options_schema(),
        OptionLayers {
            legacy: None,
            provided: &options,
            global: Some(&config.option_defaults),
        },
    )?;

    let id = procedure.id();
    let graph = graph.clone();
    tokio::task::spawn_blocking(move || -> Result<ResultsView> {
        let mut guard = graph.write();
        let mut instance = AlgorithmInstance::new(procedure, &mut *guard, options, config)?;
        instance.run()?;
        Ok(instance.own_results())
    })
    .await
    .with_context(|| format!("{} task failed", id))?
}
