// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Algorithm procedure interface.
//!
//! Procedures are registered with `AlgorithmRegistry` under their
//! [`AlgorithmId`] and instantiated against a [`HostGraph`] with a set of
//! options. An instance owns exactly one subtree of every result tree in the
//! graph (the one keyed by its identity) and rewrites it on every run.
//!
//! # Single writer
//!
//! An [`AlgorithmInstance`] holds `&mut HostGraph` for its whole life, so the
//! borrow checker rules out two instances writing the same graph at once.
//! Shared graphs go through `executor::run_shared`, which holds the graph's
//! write lock for the duration of a run.

use crate::algo::options::{OptionLayers, Options, OptionsSchema, ResolvedOptions, resolve_layered};
use crate::algo::styles::SuggestedStyles;
use arbor_common::{
    AlgorithmId, ArborConfig, EdgeKey, HostGraph, NodeId, ResultBag, ResultTree, Result,
};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use serde_json::Value;
use std::sync::Arc;
use std::time::Instant;

/// The contract every algorithm implements.
pub trait AlgoProcedure: Send + Sync {
    /// Static identity; the registry key is derived from it.
    fn id(&self) -> AlgorithmId;

    /// Declared options. Empty when the algorithm takes none.
    fn options_schema(&self) -> OptionsSchema {
        OptionsSchema::new()
    }

    /// Optional visualization hint for a styling layer.
    fn suggested_styles(&self) -> Option<SuggestedStyles> {
        None
    }

    /// Compute and write results through `ctx`.
    ///
    /// The caller has already cleared this algorithm's subtree.
    fn run(&self, ctx: &mut AlgoContext<'_>) -> Result<()>;
}

/// Execution context handed to [`AlgoProcedure::run`].
pub struct AlgoContext<'g> {
    graph: &'g mut HostGraph,
    id: AlgorithmId,
    options: ResolvedOptions,
    config: Arc<ArborConfig>,
}

impl<'g> AlgoContext<'g> {
    pub fn new(
        graph: &'g mut HostGraph,
        id: AlgorithmId,
        options: ResolvedOptions,
        config: Arc<ArborConfig>,
    ) -> Self {
        Self {
            graph,
            id,
            options,
            config,
        }
    }

    pub fn id(&self) -> &AlgorithmId {
        &self.id
    }

    pub fn options(&self) -> &ResolvedOptions {
        &self.options
    }

    pub fn config(&self) -> &ArborConfig {
        &self.config
    }

    pub fn graph(&self) -> &HostGraph {
        &*self.graph
    }

    /// Write `key` under this algorithm's subtree on a node.
    pub fn add_node_result(&mut self, node: &NodeId, key: &str, value: impl Into<Value>) -> Result<()> {
        self.graph.set_node_result(node, &self.id, key, value.into())
    }

    pub fn add_edge_result(&mut self, edge: &EdgeKey, key: &str, value: impl Into<Value>) -> Result<()> {
        self.graph.set_edge_result(edge, &self.id, key, value.into())
    }

    pub fn add_graph_result(&mut self, key: &str, value: impl Into<Value>) {
        self.graph
            .graph_results_mut()
            .set(&self.id, key, value.into());
    }

    /// Drop everything this algorithm wrote on nodes, edges and the graph.
    pub fn clear_results(&mut self) {
        self.graph.clear_results(&self.id);
    }

    pub fn results(&self) -> ResultsView {
        ResultsView::collect(&*self.graph, None)
    }
}

/// Lifecycle of an [`AlgorithmInstance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlgorithmState {
    /// Options resolved and validated.
    Constructed,
    /// Legacy overrides applied on top of the resolved options.
    Configured,
    /// At least one run completed.
    Ran,
}

/// A procedure bound to a graph and a validated option set.
pub struct AlgorithmInstance<'g> {
    procedure: Arc<dyn AlgoProcedure>,
    graph: &'g mut HostGraph,
    schema: OptionsSchema,
    provided: Options,
    legacy: Option<Options>,
    options: ResolvedOptions,
    config: Arc<ArborConfig>,
    state: AlgorithmState,
}

impl<'g> AlgorithmInstance<'g> {
    /// Resolve `provided` against the procedure's schema.
    ///
    /// Invalid options fail here, before any computation.
    pub fn new(
        procedure: Arc<dyn AlgoProcedure>,
        graph: &'g mut HostGraph,
        provided: Options,
        config: Arc<ArborConfig>,
    ) -> Result<Self> {
        let schema = procedure.options_schema();
        let options = resolve_layered(
            &schema,
            OptionLayers {
                legacy: None,
                provided: &provided,
                global: Some(&config.option_defaults),
            },
        )?;
        Ok(Self {
            procedure,
            graph,
            schema,
            provided,
            legacy: None,
            options,
            config,
            state: AlgorithmState::Constructed,
        })
    }

    pub fn id(&self) -> AlgorithmId {
        self.procedure.id()
    }

    pub fn state(&self) -> AlgorithmState {
        self.state
    }

    pub fn options(&self) -> &ResolvedOptions {
        &self.options
    }

    pub fn options_schema(&self) -> &OptionsSchema {
        &self.schema
    }

    pub fn procedure(&self) -> &Arc<dyn AlgoProcedure> {
        &self.procedure
    }

    pub fn graph(&self) -> &HostGraph {
        &*self.graph
    }

    /// Legacy override path. Overrides accumulate across calls and take
    /// precedence over construction options. On failure the previous
    /// options stay in effect.
    pub fn configure(&mut self, overrides: Options) -> Result<()> {
        let mut legacy = self.legacy.clone().unwrap_or_default();
        for (name, value) in overrides.iter() {
            legacy.insert(name, value.clone());
        }
        self.options = resolve_layered(
            &self.schema,
            OptionLayers {
                legacy: Some(&legacy),
                provided: &self.provided,
                global: Some(&self.config.option_defaults),
            },
        )?;
        self.legacy = Some(legacy);
        if self.state == AlgorithmState::Constructed {
            self.state = AlgorithmState::Configured;
        }
        Ok(())
    }

    /// Recompute from scratch. This algorithm's previous results are removed
    /// first, so a re-run overwrites instead of merging.
    pub fn run(&mut self) -> Result<()> {
        let id = self.procedure.id();
        let start = Instant::now();
        log::debug!(
            "Running {} on {} nodes / {} edges",
            id,
            self.graph.node_count(),
            self.graph.edge_count()
        );

        let mut ctx = AlgoContext::new(
            &mut *self.graph,
            id.clone(),
            self.options.clone(),
            self.config.clone(),
        );
        ctx.clear_results();
        self.procedure.run(&mut ctx)?;

        self.state = AlgorithmState::Ran;
        log::debug!("{} finished in {:?}", id, start.elapsed());
        Ok(())
    }

    /// Combined view over every node, edge and the graph.
    pub fn results(&self) -> ResultsView {
        ResultsView::collect(&*self.graph, None)
    }

    /// Like [`results`](Self::results), restricted to this algorithm's subtree.
    pub fn own_results(&self) -> ResultsView {
        ResultsView::collect(&*self.graph, Some(&self.procedure.id()))
    }

    pub fn add_node_result(&mut self, node: &NodeId, key: &str, value: impl Into<Value>) -> Result<()> {
        self.graph
            .set_node_result(node, &self.procedure.id(), key, value.into())
    }

    pub fn add_edge_result(&mut self, edge: &EdgeKey, key: &str, value: impl Into<Value>) -> Result<()> {
        self.graph
            .set_edge_result(edge, &self.procedure.id(), key, value.into())
    }

    pub fn add_graph_result(&mut self, key: &str, value: impl Into<Value>) {
        let id = self.procedure.id();
        self.graph.graph_results_mut().set(&id, key, value.into());
    }
}

/// Aggregated `{node, edge, graph}` view of result trees.
///
/// Entities are listed in graph insertion order; entities without any
/// result are omitted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultsView {
    pub node: Vec<(NodeId, ResultTree)>,
    pub edge: Vec<(EdgeKey, ResultTree)>,
    pub graph: ResultTree,
}

impl ResultsView {
    /// Walk `graph`, optionally keeping only the subtree owned by `only`.
    pub fn collect(graph: &HostGraph, only: Option<&AlgorithmId>) -> Self {
        let project = |tree: &ResultTree| -> ResultTree {
            match only {
                None => tree.clone(),
                Some(id) => {
                    let mut filtered = ResultTree::new();
                    if let Some(bag) = tree.subtree(id) {
                        for (k, v) in bag {
                            filtered.set(id, k.clone(), v.clone());
                        }
                    }
                    filtered
                }
            }
        };

        let node = graph
            .nodes()
            .map(|n| (n.id().clone(), project(&n.algorithm_results)))
            .filter(|(_, t)| !t.is_empty())
            .collect();
        let edge = graph
            .edges()
            .map(|e| (e.key().clone(), project(&e.algorithm_results)))
            .filter(|(_, t)| !t.is_empty())
            .collect();

        Self {
            node,
            edge,
            graph: project(graph.graph_results()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.node.is_empty() && self.edge.is_empty() && self.graph.is_empty()
    }

    pub fn node(&self, id: &NodeId) -> Option<&ResultTree> {
        self.node.iter().find(|(n, _)| n == id).map(|(_, t)| t)
    }

    pub fn edge(&self, key: &EdgeKey) -> Option<&ResultTree> {
        self.edge.iter().find(|(k, _)| k == key).map(|(_, t)| t)
    }

    /// One algorithm's bag on one node.
    pub fn node_bag(&self, id: &NodeId, algorithm: &AlgorithmId) -> Option<&ResultBag> {
        self.node(id).and_then(|t| t.subtree(algorithm))
    }

    pub fn edge_bag(&self, key: &EdgeKey, algorithm: &AlgorithmId) -> Option<&ResultBag> {
        self.edge(key).and_then(|t| t.subtree(algorithm))
    }

    pub fn to_json(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}

struct Entries<'a, K>(&'a [(K, ResultTree)]);

impl<K: std::fmt::Display> Serialize for Entries<'_, K> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (k, tree) in self.0 {
            map.serialize_entry(&k.to_string(), tree)?;
        }
        map.end()
    }
}

impl Serialize for ResultsView {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(3))?;
        map.serialize_entry("node", &Entries(&self.node))?;
        map.serialize_entry("edge", &Entries(&self.edge))?;
        map.serialize_entry("graph", &self.graph)?;
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algo::options::OptionDefinition;
    use arbor_common::ArborError;
    use serde_json::json;

    /// Writes a constant node score scaled by `factor`.
    struct Constant;

    impl AlgoProcedure for Constant {
        fn id(&self) -> AlgorithmId {
            AlgorithmId::new("test", "constant")
        }

        fn options_schema(&self) -> OptionsSchema {
            OptionsSchema::new().option(
                "factor",
                OptionDefinition::number(1.0, "Factor", "").min(0.0).max(10.0),
            )
        }

        fn run(&self, ctx: &mut AlgoContext<'_>) -> Result<()> {
            let factor = ctx.options().get_f64("factor")?;
            let ids: Vec<NodeId> = ctx.graph().nodes().map(|n| n.id().clone()).collect();
            for id in ids {
                ctx.add_node_result(&id, "score", factor)?;
            }
            ctx.add_graph_result("count", ctx.graph().node_count());
            Ok(())
        }
    }

    fn graph() -> HostGraph {
        let mut g = HostGraph::new();
        g.add_edge("a", "b");
        g
    }

    #[test]
    fn test_lifecycle() {
        let mut g = graph();
        let mut inst = AlgorithmInstance::new(
            Arc::new(Constant),
            &mut g,
            Options::new(),
            Arc::new(ArborConfig::default()),
        )
        .unwrap();
        assert_eq!(inst.state(), AlgorithmState::Constructed);

        inst.configure(Options::new().set("factor", 3.0)).unwrap();
        assert_eq!(inst.state(), AlgorithmState::Configured);

        inst.run().unwrap();
        assert_eq!(inst.state(), AlgorithmState::Ran);

        let view = inst.results();
        let id = AlgorithmId::new("test", "constant");
        assert_eq!(view.node_bag(&NodeId::from("a"), &id).unwrap()["score"], json!(3.0));
        assert_eq!(view.graph.get(&id, "count"), Some(&json!(2)));
    }

    #[test]
    fn test_configure_failure_keeps_previous_options() {
        let mut g = graph();
        let mut inst = AlgorithmInstance::new(
            Arc::new(Constant),
            &mut g,
            Options::new().set("factor", 2.0),
            Arc::new(ArborConfig::default()),
        )
        .unwrap();
        assert!(inst.configure(Options::new().set("factor", 11.0)).is_err());
        assert_eq!(inst.options().get_f64("factor").unwrap(), 2.0);
        assert_eq!(inst.state(), AlgorithmState::Constructed);
    }

    #[test]
    fn test_invalid_options_fail_construction() {
        let mut g = graph();
        let err = AlgorithmInstance::new(
            Arc::new(Constant),
            &mut g,
            Options::new().set("factor", -1.0),
            Arc::new(ArborConfig::default()),
        )
        .err()
        .unwrap();
        assert!(matches!(err, ArborError::OptionValidation { ref option, .. } if option == "factor"));
    }

    #[test]
    fn test_rerun_overwrites_stale_keys() {
        let mut g = graph();
        let id = AlgorithmId::new("test", "constant");
        g.set_node_result(&NodeId::from("a"), &id, "stale", json!(true))
            .unwrap();

        let mut inst = AlgorithmInstance::new(
            Arc::new(Constant),
            &mut g,
            Options::new(),
            Arc::new(ArborConfig::default()),
        )
        .unwrap();
        inst.run().unwrap();
        let bag = inst.results().node_bag(&NodeId::from("a"), &id).cloned().unwrap();
        assert!(!bag.contains_key("stale"));
    }

    #[test]
    fn test_unknown_node_write_fails() {
        let mut g = graph();
        let mut inst = AlgorithmInstance::new(
            Arc::new(Constant),
            &mut g,
            Options::new(),
            Arc::new(ArborConfig::default()),
        )
        .unwrap();
        let err = inst.add_node_result(&NodeId::from("zzz"), "x", 1).unwrap_err();
        assert!(matches!(err, ArborError::NodeNotFound { .. }));
    }

    #[test]
    fn test_results_view_shape() {
        let mut g = graph();
        let id = AlgorithmId::new("test", "constant");
        g.set_edge_result(&EdgeKey::new("a", "b"), &id, "w", json!(1))
            .unwrap();
        let view = ResultsView::collect(&g, None);
        assert_eq!(
            view.to_json(),
            json!({
                "node": {},
                "edge": { "a->b": { "test": { "constant": { "w": 1 } } } },
                "graph": {}
            })
        );
    }

    #[test]
    fn test_own_results_filters_other_algorithms() {
        let mut g = graph();
        let other = AlgorithmId::new("test", "other");
        g.set_node_result(&NodeId::from("b"), &other, "x", json!(1))
            .unwrap();
        let mut inst = AlgorithmInstance::new(
            Arc::new(Constant),
            &mut g,
            Options::new(),
            Arc::new(ArborConfig::default()),
        )
        .unwrap();
        inst.run().unwrap();
        let own = inst.own_results();
        assert!(own.node(&NodeId::from("b")).unwrap().subtree(&other).is_none());
        assert!(inst.results().node(&NodeId::from("b")).unwrap().subtree(&other).is_some());
    }
}
