// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Graph Algorithm Execution Framework
//!
//! This module runs graph algorithms against a [`HostGraph`] and stores
//! their outputs in per-entity result trees under
//! `algorithmResults.<namespace>.<type>.<key>`.
//!
//! # Architecture
//!
//! - **Registry**: [`AlgorithmRegistry`] maps `namespace:type` to a
//!   procedure and builds validated [`AlgorithmInstance`]s.
//!
//! - **Projection**: [`ProjectionBuilder`] reshapes the host graph into the
//!   directed/undirected/weighted form a kernel needs.
//!
//! - **Adapters**: one per built-in algorithm, binding a kernel from
//!   [`algorithms`] to its options and result keys.
//!
//! # Example
//!
//! ```ignore
//! use arbor_algo::algo::{AlgorithmRegistry, Options};
//!
//! let registry = AlgorithmRegistry::new();
//! let mut instance = registry
//!     .get(&mut graph, "arbor", "pagerank", Options::new().set("dampingFactor", 0.9))?
//!     .expect("pagerank is built in");
//! instance.run()?;
//! let view = instance.results();
//! ```

mod id_map;
pub mod projection;

pub mod adapters;
pub mod algorithms;
pub mod executor;
pub mod normalize;
pub mod options;
pub mod procedure_template;
pub mod procedures;
pub mod styles;

pub use id_map::IdMap;
pub use options::{
    OptionDefinition, OptionLayers, OptionType, Options, OptionsSchema, ResolvedOptions,
    SelectOption, resolve_layered, resolve_options, validate_option,
};
pub use procedures::{AlgoContext, AlgoProcedure, AlgorithmInstance, AlgorithmState, ResultsView};
pub use projection::{
    AdjacencyMap, CapacityMap, Converted, GraphProjection, ProjectedArc, ProjectionBuilder,
    ProjectionConfig,
};
pub use styles::SuggestedStyles;

#[cfg(test)]
pub mod test_utils;

use arbor_common::{AlgorithmId, ArborConfig, ArborError, HostGraph, Result};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Algorithm registry for procedure dispatch.
///
/// Keys are `namespace:type`. Registering the same key twice is an error;
/// lookups of unknown keys return `None`.
pub struct AlgorithmRegistry {
    procedures: BTreeMap<String, Arc<dyn AlgoProcedure>>,
    config: Arc<ArborConfig>,
}

impl AlgorithmRegistry {
    /// Registry with every built-in algorithm and the default config.
    pub fn new() -> Self {
        Self::with_config(ArborConfig::default())
    }

    /// Registry with every built-in algorithm registered under
    /// `config.namespace`.
    pub fn with_config(config: ArborConfig) -> Self {
        let procedures = adapters::builtin_procedures(&config.namespace)
            .into_iter()
            .map(|p| (p.id().registry_key(), p))
            .collect();
        Self {
            procedures,
            config: Arc::new(config),
        }
    }

    /// Registry without any algorithm.
    pub fn empty() -> Self {
        Self::empty_with_config(ArborConfig::default())
    }

    pub fn empty_with_config(config: ArborConfig) -> Self {
        Self {
            procedures: BTreeMap::new(),
            config: Arc::new(config),
        }
    }

    pub fn config(&self) -> &ArborConfig {
        &self.config
    }

    pub fn register(&mut self, procedure: Arc<dyn AlgoProcedure>) -> Result<()> {
        let key = procedure.id().registry_key();
        if self.procedures.contains_key(&key) {
            log::warn!("Rejecting duplicate registration of '{}'", key);
            return Err(ArborError::DuplicateAlgorithm { key });
        }
        self.procedures.insert(key, procedure);
        Ok(())
    }

    /// Instantiate `namespace:type` against `graph`.
    ///
    /// Options are validated here; an invalid option fails before any
    /// computation. An unknown key gives `Ok(None)`.
    pub fn get<'g>(
        &self,
        graph: &'g mut HostGraph,
        namespace: &str,
        algorithm_type: &str,
        options: Options,
    ) -> Result<Option<AlgorithmInstance<'g>>> {
        let Some(procedure) = self.get_class(namespace, algorithm_type) else {
            return Ok(None);
        };
        AlgorithmInstance::new(procedure, graph, options, self.config.clone()).map(Some)
    }

    /// The registered procedure itself, for static introspection.
    pub fn get_class(&self, namespace: &str, algorithm_type: &str) -> Option<Arc<dyn AlgoProcedure>> {
        let key = AlgorithmId::new(namespace, algorithm_type).registry_key();
        self.procedures.get(&key).cloned()
    }

    pub fn suggested_styles(&self, namespace: &str, algorithm_type: &str) -> Option<SuggestedStyles> {
        self.get_class(namespace, algorithm_type)
            .and_then(|p| p.suggested_styles())
    }

    /// Registered keys in sorted order.
    pub fn list(&self) -> Vec<&str> {
        self.procedures.keys().map(|s| s.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.procedures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.procedures.is_empty()
    }
}

impl Default for AlgorithmRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algo::adapters::PageRankProcedure;
    use arbor_common::NodeId;

    #[test]
    fn test_builtins_registered() {
        let registry = AlgorithmRegistry::new();
        assert_eq!(registry.len(), 24);
        assert!(registry.list().contains(&"arbor:pagerank"));
        assert!(registry.list().contains(&"arbor:bipartite-matching"));
    }

    #[test]
    fn test_duplicate_registration_rejected() {
        let mut registry = AlgorithmRegistry::new();
        let err = registry
            .register(Arc::new(PageRankProcedure::default()))
            .unwrap_err();
        assert!(matches!(err, ArborError::DuplicateAlgorithm { ref key } if key == "arbor:pagerank"));

        registry
            .register(Arc::new(PageRankProcedure::with_namespace("custom")))
            .unwrap();
        assert!(registry.get_class("custom", "pagerank").is_some());
    }

    #[test]
    fn test_get_class_returns_registered_procedure() {
        let mut registry = AlgorithmRegistry::empty();
        let procedure: Arc<dyn AlgoProcedure> = Arc::new(PageRankProcedure::default());
        registry.register(procedure.clone()).unwrap();
        let found = registry.get_class("arbor", "pagerank").unwrap();
        assert!(Arc::ptr_eq(&found, &procedure));
        assert!(registry.get_class("arbor", "nope").is_none());
        assert!(registry.suggested_styles("arbor", "nope").is_none());
    }

    #[test]
    fn test_get_unknown_is_none() {
        let registry = AlgorithmRegistry::new();
        let mut graph = HostGraph::new();
        assert!(
            registry
                .get(&mut graph, "arbor", "missing", Options::new())
                .unwrap()
                .is_none()
        );
    }

    #[test]
    fn test_configured_namespace() {
        let mut config = ArborConfig::default();
        config.namespace = "lab".to_string();
        let registry = AlgorithmRegistry::with_config(config);
        assert!(registry.get_class("arbor", "degree").is_none());

        let mut graph = HostGraph::new();
        graph.add_edge(1, 2);
        let mut instance = registry
            .get(&mut graph, "lab", "degree", Options::new())
            .unwrap()
            .unwrap();
        instance.run().unwrap();
        let path = "algorithmResults.lab.degree.outDegree";
        assert_eq!(
            graph.lookup_node_path(&NodeId::from(1), path),
            Some(&serde_json::json!(1))
        );
    }
}
