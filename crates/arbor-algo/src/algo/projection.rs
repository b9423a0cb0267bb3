// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Graph Projection - algorithm-ready views of the host graph.
//!
//! The host graph is a plain id-keyed node/edge store. Algorithms need one of
//! three shapes, all produced by [`ProjectionBuilder`]:
//!
//! - [`GraphProjection`]: dense CSR with per-arc weights, directed or truly
//!   undirected, optionally with a synthesized reverse arc per edge.
//! - [`AdjacencyMap`]: symmetric `node -> node -> weight` map.
//! - [`CapacityMap`]: `node -> node -> capacity` map where the reverse
//!   direction is added only on request.
//!
//! Every arc remembers the host [`EdgeKey`] it came from so edge-level outputs
//! (spanning tree membership, flows, cut edges) land on the right host edge.

use crate::algo::IdMap;
use arbor_common::config::{DEFAULT_EDGE_WEIGHT, DEFAULT_WEIGHT_ATTRIBUTE};
use arbor_common::{EdgeKey, HostGraph, NodeId};
use fxhash::FxHashSet;
use std::collections::BTreeMap;

/// Arc list for CSR construction: (source_slot, destination_slot, arc_index).
type ArcList = Vec<(u32, u32, u32)>;

/// Conversion parameters.
#[derive(Debug, Clone)]
pub struct ProjectionConfig {
    /// Treat the host edges as directed (default: false)
    pub directed: bool,
    /// Keep parallel edges between the same pair (default: true)
    pub allow_parallel_edges: bool,
    /// Synthesize `(b,a)` for every `(a,b)` when undirected (default: true)
    pub add_reverse_edges: bool,
    /// Edge-data key read as weight (default: "weight")
    pub weight_attribute: String,
    /// Weight for edges without a numeric value under the key (default: 1.0)
    pub default_weight: f64,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            directed: false,
            allow_parallel_edges: true,
            add_reverse_edges: true,
            weight_attribute: DEFAULT_WEIGHT_ATTRIBUTE.to_string(),
            default_weight: DEFAULT_EDGE_WEIGHT,
        }
    }
}

impl ProjectionConfig {
    /// Directedness of the produced structure: `directed || add_reverse_edges`.
    pub fn internally_directed(&self) -> bool {
        self.directed || self.add_reverse_edges
    }

    /// Whether every edge gets a synthesized reverse arc.
    pub fn synthesizes_reverse(&self) -> bool {
        !self.directed && self.add_reverse_edges
    }
}

/// One arc of a projection.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectedArc {
    pub src: u32,
    pub dst: u32,
    pub weight: f64,
    /// Host edge this arc was produced from.
    pub origin: EdgeKey,
    /// True for a reverse arc synthesized from `origin`.
    pub synthesized: bool,
}

/// Dense CSR representation optimized for algorithm execution.
#[derive(Debug)]
pub struct GraphProjection {
    /// Number of vertices in the projection
    pub(crate) vertex_count: usize,

    /// Outbound arcs: CSR format
    pub(crate) out_offsets: Vec<u32>, // [V+1] vertex slot -> arc start
    pub(crate) out_neighbors: Vec<u32>, // [E] neighbor slots
    pub(crate) out_arcs: Vec<u32>,      // [E] index into `arcs`

    /// Inbound arcs: CSR format
    pub(crate) in_offsets: Vec<u32>,
    pub(crate) in_neighbors: Vec<u32>,
    pub(crate) in_arcs: Vec<u32>,

    pub(crate) arcs: Vec<ProjectedArc>,

    /// Internal directedness (`directed || add_reverse_edges`)
    pub(crate) directed: bool,

    pub(crate) id_map: IdMap,
}

impl GraphProjection {
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Number of arcs (a synthesized reverse arc counts separately).
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.arcs.len()
    }

    /// Whether arcs are one-way. A truly undirected projection stores each
    /// edge once and exposes it from both endpoints via [`neighbors`](Self::neighbors).
    #[inline]
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    #[inline]
    pub fn out_neighbors(&self, slot: u32) -> &[u32] {
        let start = self.out_offsets[slot as usize] as usize;
        let end = self.out_offsets[slot as usize + 1] as usize;
        &self.out_neighbors[start..end]
    }

    #[inline]
    pub fn out_degree(&self, slot: u32) -> u32 {
        self.out_offsets[slot as usize + 1] - self.out_offsets[slot as usize]
    }

    #[inline]
    pub fn in_neighbors(&self, slot: u32) -> &[u32] {
        let start = self.in_offsets[slot as usize] as usize;
        let end = self.in_offsets[slot as usize + 1] as usize;
        &self.in_neighbors[start..end]
    }

    #[inline]
    pub fn in_degree(&self, slot: u32) -> u32 {
        self.in_offsets[slot as usize + 1] - self.in_offsets[slot as usize]
    }

    /// Arc indices of the outbound arcs of `slot`, parallel to [`out_neighbors`](Self::out_neighbors).
    #[inline]
    pub fn out_arc_ids(&self, slot: u32) -> &[u32] {
        let start = self.out_offsets[slot as usize] as usize;
        let end = self.out_offsets[slot as usize + 1] as usize;
        &self.out_arcs[start..end]
    }

    #[inline]
    pub fn in_arc_ids(&self, slot: u32) -> &[u32] {
        let start = self.in_offsets[slot as usize] as usize;
        let end = self.in_offsets[slot as usize + 1] as usize;
        &self.in_arcs[start..end]
    }

    /// Weight of the `edge_idx`-th outbound arc of `slot`.
    #[inline]
    pub fn out_weight(&self, slot: u32, edge_idx: usize) -> f64 {
        self.arcs[self.out_arc_ids(slot)[edge_idx] as usize].weight
    }

    #[inline]
    pub fn arc(&self, arc_id: u32) -> &ProjectedArc {
        &self.arcs[arc_id as usize]
    }

    pub fn arcs(&self) -> &[ProjectedArc] {
        &self.arcs
    }

    /// Traversable neighbors of `slot` as `(neighbor, arc_id)`.
    ///
    /// Outbound arcs only for a directed structure; both endpoints' arcs for a
    /// truly undirected one.
    pub fn neighbors(&self, slot: u32) -> impl Iterator<Item = (u32, u32)> + '_ {
        let outs = self
            .out_neighbors(slot)
            .iter()
            .copied()
            .zip(self.out_arc_ids(slot).iter().copied());
        let (in_nbrs, in_ids): (&[u32], &[u32]) = if self.directed {
            (&[], &[])
        } else {
            (self.in_neighbors(slot), self.in_arc_ids(slot))
        };
        outs.chain(in_nbrs.iter().copied().zip(in_ids.iter().copied()))
    }

    /// Number of traversable neighbors (see [`neighbors`](Self::neighbors)).
    pub fn degree(&self, slot: u32) -> u32 {
        if self.directed {
            self.out_degree(slot)
        } else {
            self.out_degree(slot) + self.in_degree(slot)
        }
    }

    /// Whether `src` can reach `dst` over a single arc.
    pub fn has_arc(&self, src: u32, dst: u32) -> bool {
        self.out_neighbors(src).contains(&dst)
            || (!self.directed && self.in_neighbors(src).contains(&dst))
    }

    #[inline]
    pub fn to_id(&self, slot: u32) -> &NodeId {
        self.id_map.to_id_unchecked(slot)
    }

    #[inline]
    pub fn to_slot(&self, id: &NodeId) -> Option<u32> {
        self.id_map.to_slot(id)
    }

    /// Iterate over all vertices as (slot, id).
    pub fn vertices(&self) -> impl Iterator<Item = (u32, &NodeId)> + '_ {
        self.id_map.iter()
    }
}

/// Symmetric `node -> node -> weight` map.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AdjacencyMap(pub BTreeMap<NodeId, BTreeMap<NodeId, f64>>);

impl AdjacencyMap {
    pub fn nodes(&self) -> impl Iterator<Item = &NodeId> {
        self.0.keys()
    }

    pub fn neighbors(&self, id: &NodeId) -> impl Iterator<Item = (&NodeId, f64)> {
        self.0.get(id).into_iter().flatten().map(|(n, w)| (n, *w))
    }

    pub fn weight(&self, a: &NodeId, b: &NodeId) -> Option<f64> {
        self.0.get(a).and_then(|m| m.get(b)).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// `node -> node -> capacity` map for flow and cut algorithms.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CapacityMap(pub BTreeMap<NodeId, BTreeMap<NodeId, f64>>);

impl CapacityMap {
    pub fn nodes(&self) -> impl Iterator<Item = &NodeId> {
        self.0.keys()
    }

    pub fn capacity(&self, a: &NodeId, b: &NodeId) -> f64 {
        self.0.get(a).and_then(|m| m.get(b)).copied().unwrap_or(0.0)
    }

    pub fn contains(&self, id: &NodeId) -> bool {
        self.0.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Builder for converting a [`HostGraph`] into an algorithm input.
pub struct ProjectionBuilder<'a> {
    graph: &'a HostGraph,
    config: ProjectionConfig,
}

impl<'a> ProjectionBuilder<'a> {
    pub fn new(graph: &'a HostGraph) -> Self {
        Self {
            graph,
            config: ProjectionConfig::default(),
        }
    }

    pub fn with_config(graph: &'a HostGraph, config: ProjectionConfig) -> Self {
        Self { graph, config }
    }

    pub fn config(&self) -> &ProjectionConfig {
        &self.config
    }

    pub fn graph(&self) -> &'a HostGraph {
        self.graph
    }

    pub fn directed(mut self, directed: bool) -> Self {
        self.config.directed = directed;
        self
    }

    pub fn allow_parallel_edges(mut self, allow: bool) -> Self {
        self.config.allow_parallel_edges = allow;
        self
    }

    pub fn add_reverse_edges(mut self, enabled: bool) -> Self {
        self.config.add_reverse_edges = enabled;
        self
    }

    pub fn weight_attribute(mut self, attribute: &str) -> Self {
        self.config.weight_attribute = attribute.to_string();
        self
    }

    pub fn default_weight(mut self, weight: f64) -> Self {
        self.config.default_weight = weight;
        self
    }

    fn id_map(&self) -> IdMap {
        self.graph.nodes().map(|n| n.id().clone()).collect()
    }

    /// Host edges as `(key, weight)` in insertion order.
    fn weighted_edges(&self) -> impl Iterator<Item = (&'a EdgeKey, f64)> + '_ {
        let attribute = self.config.weight_attribute.as_str();
        let default = self.config.default_weight;
        self.graph
            .edges()
            .map(move |e| (e.key(), e.numeric(attribute).unwrap_or(default)))
    }

    /// Build the CSR projection.
    pub fn build(self) -> GraphProjection {
        let id_map = self.id_map();
        let vertex_count = id_map.len();
        let directed = self.config.internally_directed();
        let reverse = self.config.synthesizes_reverse();

        let mut arcs: Vec<ProjectedArc> = Vec::with_capacity(
            self.graph.edge_count() * if reverse { 2 } else { 1 },
        );
        let mut seen: FxHashSet<(u32, u32)> = FxHashSet::default();

        let allow_parallel = self.config.allow_parallel_edges;
        for (key, weight) in self.weighted_edges() {
            let (Some(src), Some(dst)) = (id_map.to_slot(&key.src), id_map.to_slot(&key.dst))
            else {
                continue;
            };
            let mut candidates = vec![(src, dst, false)];
            if reverse && src != dst {
                candidates.push((dst, src, true));
            }
            for (u, v, synthesized) in candidates {
                if !allow_parallel {
                    // A truly undirected structure treats (a,b) and (b,a) as one edge.
                    let pair = if directed { (u, v) } else { (u.min(v), u.max(v)) };
                    if !seen.insert(pair) {
                        continue;
                    }
                }
                arcs.push(ProjectedArc {
                    src: u,
                    dst: v,
                    weight,
                    origin: key.clone(),
                    synthesized,
                });
            }
        }

        let out_list: ArcList = arcs
            .iter()
            .enumerate()
            .map(|(i, a)| (a.src, a.dst, i as u32))
            .collect();
        let in_list: ArcList = arcs
            .iter()
            .enumerate()
            .map(|(i, a)| (a.dst, a.src, i as u32))
            .collect();

        let (out_offsets, out_neighbors, out_arcs) = build_csr(vertex_count, &out_list);
        let (in_offsets, in_neighbors, in_arcs) = build_csr(vertex_count, &in_list);

        GraphProjection {
            vertex_count,
            out_offsets,
            out_neighbors,
            out_arcs,
            in_offsets,
            in_neighbors,
            in_arcs,
            arcs,
            directed,
            id_map,
        }
    }

    /// Build a symmetric adjacency map. Flags other than the weight source are
    /// ignored; when the two directions of a pair disagree the lighter weight wins.
    pub fn build_adjacency_map(self) -> AdjacencyMap {
        let mut map: BTreeMap<NodeId, BTreeMap<NodeId, f64>> = self
            .graph
            .nodes()
            .map(|n| (n.id().clone(), BTreeMap::new()))
            .collect();

        for (key, weight) in self.weighted_edges() {
            for (a, b) in [(&key.src, &key.dst), (&key.dst, &key.src)] {
                let slot = map
                    .entry(a.clone())
                    .or_default()
                    .entry(b.clone())
                    .or_insert(weight);
                if weight < *slot {
                    *slot = weight;
                }
            }
        }
        AdjacencyMap(map)
    }

    /// Build a capacity map. Parallel capacities are summed; the reverse
    /// direction is added only when `add_reverse_edges` is set.
    pub fn build_capacity_map(self) -> CapacityMap {
        let mut map: BTreeMap<NodeId, BTreeMap<NodeId, f64>> = self
            .graph
            .nodes()
            .map(|n| (n.id().clone(), BTreeMap::new()))
            .collect();

        for (key, capacity) in self.weighted_edges() {
            *map.entry(key.src.clone())
                .or_default()
                .entry(key.dst.clone())
                .or_insert(0.0) += capacity;
            if self.config.add_reverse_edges && key.src != key.dst {
                *map.entry(key.dst.clone())
                    .or_default()
                    .entry(key.src.clone())
                    .or_insert(0.0) += capacity;
            }
        }
        CapacityMap(map)
    }
}

/// Algorithm input shapes that can be produced by a [`ProjectionBuilder`].
pub trait Converted: Sized + Send + Sync + 'static {
    fn convert(builder: ProjectionBuilder<'_>) -> Self;

    /// Number of vertices in the converted structure.
    fn node_count(&self) -> usize;
}

impl Converted for GraphProjection {
    fn convert(builder: ProjectionBuilder<'_>) -> Self {
        builder.build()
    }

    fn node_count(&self) -> usize {
        self.vertex_count
    }
}

impl Converted for AdjacencyMap {
    fn convert(builder: ProjectionBuilder<'_>) -> Self {
        builder.build_adjacency_map()
    }

    fn node_count(&self) -> usize {
        self.len()
    }
}

impl Converted for CapacityMap {
    fn convert(builder: ProjectionBuilder<'_>) -> Self {
        builder.build_capacity_map()
    }

    fn node_count(&self) -> usize {
        self.len()
    }
}

/// Build CSR from an arc list.
pub(crate) fn build_csr(vertex_count: usize, arcs: &[(u32, u32, u32)]) -> (Vec<u32>, Vec<u32>, Vec<u32>) {
    if vertex_count == 0 {
        return (vec![0], Vec::new(), Vec::new());
    }

    // Count degrees
    let mut degrees = vec![0u32; vertex_count];
    for &(src, _, _) in arcs {
        degrees[src as usize] += 1;
    }

    // Build offsets (prefix sum)
    let mut offsets = vec![0u32; vertex_count + 1];
    for i in 0..vertex_count {
        offsets[i + 1] = offsets[i] + degrees[i];
    }

    // Fill neighbors; arcs keep their relative order within a vertex
    let mut neighbors = vec![0u32; arcs.len()];
    let mut arc_ids = vec![0u32; arcs.len()];
    let mut current = offsets.clone();

    for &(src, dst, id) in arcs {
        let idx = current[src as usize] as usize;
        neighbors[idx] = dst;
        arc_ids[idx] = id;
        current[src as usize] += 1;
    }

    (offsets, neighbors, arc_ids)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn host() -> HostGraph {
        let mut g = HostGraph::new();
        g.add_weighted_edge("a", "b", "weight", 2.0);
        g.add_edge("b", "c");
        g
    }

    fn slot(p: &GraphProjection, id: &str) -> u32 {
        p.to_slot(&NodeId::from(id)).unwrap()
    }

    #[test]
    fn test_build_csr() {
        // Triangle: 0 -> 1, 1 -> 2, 2 -> 0, plus 0 -> 2
        let arcs = vec![(0, 1, 0), (1, 2, 1), (2, 0, 2), (0, 2, 3)];
        let (offsets, neighbors, ids) = build_csr(3, &arcs);

        assert_eq!(offsets, vec![0, 2, 3, 4]);
        assert_eq!(&neighbors[0..2], &[1, 2]);
        assert_eq!(&ids[0..2], &[0, 3]);
        assert_eq!(&neighbors[2..3], &[2]);
        assert_eq!(&neighbors[3..4], &[0]);
    }

    #[test]
    fn test_reverse_edges_are_synthesized() {
        let p = ProjectionBuilder::new(&host()).build();
        assert!(p.is_directed());
        assert_eq!(p.edge_count(), 4);
        assert!(p.has_arc(slot(&p, "a"), slot(&p, "b")));
        assert!(p.has_arc(slot(&p, "b"), slot(&p, "a")));
        let reverse = p.arcs().iter().find(|a| a.synthesized).unwrap();
        assert_eq!(reverse.origin, EdgeKey::new("a", "b"));
        assert_eq!(reverse.weight, 2.0);
    }

    #[test]
    fn test_true_undirected_stores_once() {
        let p = ProjectionBuilder::new(&host()).add_reverse_edges(false).build();
        assert!(!p.is_directed());
        assert_eq!(p.edge_count(), 2);
        let b = slot(&p, "b");
        let nbrs: Vec<u32> = p.neighbors(b).map(|(n, _)| n).collect();
        assert_eq!(nbrs.len(), 2);
        assert_eq!(p.degree(b), 2);
    }

    #[test]
    fn test_directed_has_no_reverse() {
        let p = ProjectionBuilder::new(&host()).directed(true).build();
        assert!(p.is_directed());
        assert_eq!(p.edge_count(), 2);
        assert!(!p.has_arc(slot(&p, "b"), slot(&p, "a")));
        assert_eq!(p.in_degree(slot(&p, "b")), 1);
    }

    #[test]
    fn test_parallel_edges_suppressed() {
        let mut g = HostGraph::new();
        g.add_edge("a", "b");
        g.add_edge("b", "a");

        let kept = ProjectionBuilder::new(&g).build();
        assert_eq!(kept.edge_count(), 4);

        let deduped = ProjectionBuilder::new(&g).allow_parallel_edges(false).build();
        assert_eq!(deduped.edge_count(), 2);

        let undirected = ProjectionBuilder::new(&g)
            .allow_parallel_edges(false)
            .add_reverse_edges(false)
            .build();
        assert_eq!(undirected.edge_count(), 1);
    }

    #[test]
    fn test_weight_resolution() {
        let mut g = HostGraph::new();
        g.add_weighted_edge("a", "b", "cost", 5.0);
        g.add_edge("b", "c");

        let p = ProjectionBuilder::new(&g).weight_attribute("cost").directed(true).build();
        assert_eq!(p.out_weight(slot(&p, "a"), 0), 5.0);
        assert_eq!(p.out_weight(slot(&p, "b"), 0), 1.0);

        let p = ProjectionBuilder::new(&g).directed(true).default_weight(3.0).build();
        assert_eq!(p.out_weight(slot(&p, "a"), 0), 3.0);
    }

    #[test]
    fn test_adjacency_map_is_symmetric() {
        let mut g = HostGraph::new();
        g.add_weighted_edge("a", "b", "weight", 4.0);
        g.add_weighted_edge("b", "a", "weight", 1.5);
        g.add_node("lonely");

        let map = ProjectionBuilder::new(&g).directed(true).build_adjacency_map();
        let (a, b) = (NodeId::from("a"), NodeId::from("b"));
        assert_eq!(map.weight(&a, &b), Some(1.5));
        assert_eq!(map.weight(&b, &a), Some(1.5));
        assert_eq!(map.neighbors(&NodeId::from("lonely")).count(), 0);
        assert_eq!(map.len(), 3);
    }

    #[test]
    fn test_capacity_map_reverse_on_request() {
        let mut g = HostGraph::new();
        g.add_weighted_edge("s", "t", "weight", 3.0);
        let (s, t) = (NodeId::from("s"), NodeId::from("t"));

        let one_way = ProjectionBuilder::new(&g).add_reverse_edges(false).build_capacity_map();
        assert_eq!(one_way.capacity(&s, &t), 3.0);
        assert_eq!(one_way.capacity(&t, &s), 0.0);

        let both = ProjectionBuilder::new(&g).build_capacity_map();
        assert_eq!(both.capacity(&t, &s), 3.0);
    }

    #[test]
    fn test_empty_graph() {
        let p = ProjectionBuilder::new(&HostGraph::new()).build();
        assert_eq!(p.vertex_count(), 0);
        assert_eq!(p.edge_count(), 0);
    }
}
