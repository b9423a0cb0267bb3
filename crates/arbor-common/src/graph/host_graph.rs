// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Host graph for algorithm execution.
//!
//! A minimal node/edge store that provides:
//! - O(1) node lookup by id
//! - O(1) edge lookup by (source, destination) key
//! - Insertion-ordered iteration, so conversions are deterministic
//! - A mutable result tree per node, per edge and for the graph itself
//!
//! Algorithms only ever touch the result trees; identity and structure are
//! owned by whoever populates the graph.

use crate::Properties;
use crate::api::error::{ArborError, Result};
use crate::core::id::{AlgorithmId, EdgeKey, NodeId};
use crate::graph::results::ResultTree;
use fxhash::FxBuildHasher;
use serde_json::Value;
use std::collections::HashMap;

/// Type alias for FxHashMap (faster hashing for small keys)
type FxHashMap<K, V> = HashMap<K, V, FxBuildHasher>;

#[derive(Debug, Clone)]
pub struct NodeRecord {
    id: NodeId,
    pub data: Properties,
    pub algorithm_results: ResultTree,
}

impl NodeRecord {
    pub fn id(&self) -> &NodeId {
        &self.id
    }
}

#[derive(Debug, Clone)]
pub struct EdgeRecord {
    key: EdgeKey,
    pub data: Properties,
    pub algorithm_results: ResultTree,
}

impl EdgeRecord {
    pub fn key(&self) -> &EdgeKey {
        &self.key
    }

    pub fn src_id(&self) -> &NodeId {
        &self.key.src
    }

    pub fn dst_id(&self) -> &NodeId {
        &self.key.dst
    }

    /// Numeric attribute from the edge payload, if present.
    pub fn numeric(&self, attribute: &str) -> Option<f64> {
        self.data.get(attribute).and_then(Value::as_f64)
    }
}

/// Graph with insertion-ordered nodes and edges.
#[derive(Debug)]
pub struct HostGraph {
    nodes: Vec<NodeRecord>,
    node_index: FxHashMap<NodeId, usize>,
    edges: Vec<EdgeRecord>,
    edge_index: FxHashMap<EdgeKey, usize>,
    graph_results: ResultTree,
}

impl Default for HostGraph {
    fn default() -> Self {
        Self {
            nodes: Vec::new(),
            node_index: HashMap::with_hasher(FxBuildHasher::default()),
            edges: Vec::new(),
            edge_index: HashMap::with_hasher(FxBuildHasher::default()),
            graph_results: ResultTree::default(),
        }
    }
}

impl HostGraph {
    /// Creates a new empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new graph with pre-allocated capacity.
    pub fn with_capacity(nodes: usize, edges: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(nodes),
            node_index: HashMap::with_capacity_and_hasher(nodes, FxBuildHasher::default()),
            edges: Vec::with_capacity(edges),
            edge_index: HashMap::with_capacity_and_hasher(edges, FxBuildHasher::default()),
            graph_results: ResultTree::default(),
        }
    }

    /// Build a graph from an edge list; endpoints are created on demand.
    pub fn from_edges<I, N>(edges: I) -> Self
    where
        I: IntoIterator<Item = (N, N)>,
        N: Into<NodeId>,
    {
        let mut graph = Self::new();
        for (src, dst) in edges {
            graph.add_edge(src, dst);
        }
        graph
    }

    /// Adds a node. Returns true if the node was newly added.
    pub fn add_node(&mut self, id: impl Into<NodeId>) -> bool {
        self.add_node_with_data(id, Properties::new())
    }

    /// Adds a node with a payload. An existing node keeps its payload.
    pub fn add_node_with_data(&mut self, id: impl Into<NodeId>, data: Properties) -> bool {
        let id = id.into();
        if self.node_index.contains_key(&id) {
            return false;
        }
        self.node_index.insert(id.clone(), self.nodes.len());
        self.nodes.push(NodeRecord {
            id,
            data,
            algorithm_results: ResultTree::default(),
        });
        true
    }

    /// Adds an edge. Nodes are implicitly created if they don't exist.
    /// Returns true if the edge was newly added.
    pub fn add_edge(&mut self, src: impl Into<NodeId>, dst: impl Into<NodeId>) -> bool {
        self.add_edge_with_data(src, dst, Properties::new())
    }

    /// Adds an edge carrying a payload (e.g. a `weight` attribute).
    pub fn add_edge_with_data(
        &mut self,
        src: impl Into<NodeId>,
        dst: impl Into<NodeId>,
        data: Properties,
    ) -> bool {
        let key = EdgeKey::new(src, dst);
        if self.edge_index.contains_key(&key) {
            return false;
        }
        self.add_node(key.src.clone());
        self.add_node(key.dst.clone());

        self.edge_index.insert(key.clone(), self.edges.len());
        self.edges.push(EdgeRecord {
            key,
            data,
            algorithm_results: ResultTree::default(),
        });
        true
    }

    /// Adds an edge with a single numeric weight stored under `attribute`.
    pub fn add_weighted_edge(
        &mut self,
        src: impl Into<NodeId>,
        dst: impl Into<NodeId>,
        attribute: &str,
        weight: f64,
    ) -> bool {
        let mut data = Properties::new();
        data.insert(attribute.to_string(), Value::from(weight));
        self.add_edge_with_data(src, dst, data)
    }

    /// Removes an edge by key. Returns the removed record if found.
    pub fn remove_edge(&mut self, key: &EdgeKey) -> Option<EdgeRecord> {
        let idx = self.edge_index.remove(key)?;
        let record = self.edges.remove(idx);
        self.reindex_edges();
        Some(record)
    }

    /// Removes a node and all its incident edges.
    pub fn remove_node(&mut self, id: &NodeId) -> Option<NodeRecord> {
        let idx = self.node_index.remove(id)?;
        let record = self.nodes.remove(idx);
        for (i, node) in self.nodes.iter().enumerate().skip(idx) {
            self.node_index.insert(node.id.clone(), i);
        }

        let before = self.edges.len();
        self.edges.retain(|e| &e.key.src != id && &e.key.dst != id);
        if self.edges.len() != before {
            self.reindex_edges();
        }
        Some(record)
    }

    fn reindex_edges(&mut self) {
        self.edge_index.clear();
        for (i, edge) in self.edges.iter().enumerate() {
            self.edge_index.insert(edge.key.clone(), i);
        }
    }

    pub fn contains_node(&self, id: &NodeId) -> bool {
        self.node_index.contains_key(id)
    }

    pub fn contains_edge(&self, key: &EdgeKey) -> bool {
        self.edge_index.contains_key(key)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node(&self, id: &NodeId) -> Option<&NodeRecord> {
        self.node_index.get(id).map(|&i| &self.nodes[i])
    }

    pub fn node_mut(&mut self, id: &NodeId) -> Option<&mut NodeRecord> {
        let idx = *self.node_index.get(id)?;
        self.nodes.get_mut(idx)
    }

    pub fn edge(&self, key: &EdgeKey) -> Option<&EdgeRecord> {
        self.edge_index.get(key).map(|&i| &self.edges[i])
    }

    pub fn edge_mut(&mut self, key: &EdgeKey) -> Option<&mut EdgeRecord> {
        let idx = *self.edge_index.get(key)?;
        self.edges.get_mut(idx)
    }

    /// Nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &NodeRecord> {
        self.nodes.iter()
    }

    pub fn nodes_mut(&mut self) -> impl Iterator<Item = &mut NodeRecord> {
        self.nodes.iter_mut()
    }

    /// Edges in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = &EdgeRecord> {
        self.edges.iter()
    }

    pub fn edges_mut(&mut self) -> impl Iterator<Item = &mut EdgeRecord> {
        self.edges.iter_mut()
    }

    pub fn graph_results(&self) -> &ResultTree {
        &self.graph_results
    }

    pub fn graph_results_mut(&mut self) -> &mut ResultTree {
        &mut self.graph_results
    }

    /// Write one node result. Fails if the node is unknown.
    pub fn set_node_result(
        &mut self,
        id: &NodeId,
        algorithm: &AlgorithmId,
        key: &str,
        value: Value,
    ) -> Result<()> {
        let node = self.node_mut(id).ok_or_else(|| ArborError::NodeNotFound {
            id: id.to_string(),
        })?;
        node.algorithm_results.set(algorithm, key, value);
        Ok(())
    }

    /// Write one edge result. Fails if the edge is unknown.
    pub fn set_edge_result(
        &mut self,
        key: &EdgeKey,
        algorithm: &AlgorithmId,
        result_key: &str,
        value: Value,
    ) -> Result<()> {
        let edge = self.edge_mut(key).ok_or_else(|| ArborError::EdgeNotFound {
            src: key.src.to_string(),
            dst: key.dst.to_string(),
        })?;
        edge.algorithm_results.set(algorithm, result_key, value);
        Ok(())
    }

    /// Remove everything `algorithm` wrote on nodes, edges and the graph.
    pub fn clear_results(&mut self, algorithm: &AlgorithmId) {
        for node in &mut self.nodes {
            node.algorithm_results.clear(algorithm);
        }
        for edge in &mut self.edges {
            edge.algorithm_results.clear(algorithm);
        }
        self.graph_results.clear(algorithm);
    }

    /// Resolve a dotted `algorithmResults.*` path on a node.
    pub fn lookup_node_path(&self, id: &NodeId, path: &str) -> Option<&Value> {
        self.node(id)?.algorithm_results.lookup_path(path)
    }

    /// Resolve a dotted `algorithmResults.*` path on an edge.
    pub fn lookup_edge_path(&self, key: &EdgeKey, path: &str) -> Option<&Value> {
        self.edge(key)?.algorithm_results.lookup_path(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_add_and_lookup() {
        let mut graph = HostGraph::new();
        assert!(graph.add_node("a"));
        assert!(!graph.add_node("a"));
        assert!(graph.add_edge("a", "b"));
        assert!(!graph.add_edge("a", "b"));
        assert!(graph.add_edge("b", "a"));

        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 2);
        assert!(graph.contains_edge(&EdgeKey::new("b", "a")));

        let ids: Vec<_> = graph.nodes().map(|n| n.id().clone()).collect();
        assert_eq!(ids, vec![NodeId::from("a"), NodeId::from("b")]);
    }

    #[test]
    fn test_remove_node_drops_incident_edges() {
        let mut graph = HostGraph::from_edges([(1, 2), (2, 3), (3, 1)]);
        graph.remove_node(&NodeId::Int(2));

        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 1);
        assert!(graph.contains_edge(&EdgeKey::new(3, 1)));
        assert!(graph.node(&NodeId::Int(3)).is_some());
        assert!(graph.edge(&EdgeKey::new(3, 1)).is_some());
    }

    #[test]
    fn test_remove_edge_keeps_index_consistent() {
        let mut graph = HostGraph::from_edges([(1, 2), (2, 3), (3, 4)]);
        assert!(graph.remove_edge(&EdgeKey::new(1, 2)).is_some());
        assert!(graph.remove_edge(&EdgeKey::new(1, 2)).is_none());
        assert_eq!(graph.edge(&EdgeKey::new(3, 4)).map(|e| e.src_id()), Some(&NodeId::Int(3)));
    }

    #[test]
    fn test_result_writes() {
        let mut graph = HostGraph::from_edges([("a", "b")]);
        let id = AlgorithmId::new("arbor", "degree");

        graph
            .set_node_result(&NodeId::from("a"), &id, "degree", json!(1))
            .unwrap();
        graph
            .set_edge_result(&EdgeKey::new("a", "b"), &id, "weight", json!(1.0))
            .unwrap();

        let err = graph
            .set_node_result(&NodeId::from("zzz"), &id, "degree", json!(1))
            .unwrap_err();
        assert!(matches!(err, ArborError::NodeNotFound { .. }));

        assert_eq!(
            graph.lookup_node_path(&NodeId::from("a"), "algorithmResults.arbor.degree.degree"),
            Some(&json!(1))
        );

        graph.clear_results(&id);
        assert!(graph.node(&NodeId::from("a")).unwrap().algorithm_results.is_empty());
        assert!(graph.edge(&EdgeKey::new("a", "b")).unwrap().algorithm_results.is_empty());
    }

    #[test]
    fn test_weighted_edge() {
        let mut graph = HostGraph::new();
        graph.add_weighted_edge("a", "b", "cost", 2.5);
        let edge = graph.edge(&EdgeKey::new("a", "b")).unwrap();
        assert_eq!(edge.numeric("cost"), Some(2.5));
        assert_eq!(edge.numeric("weight"), None);
    }
}
