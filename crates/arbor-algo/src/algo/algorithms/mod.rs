// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Core algorithm trait and the algorithm kernels.
//!
//! Kernels are pure functions of a converted graph and a config. They never
//! touch the host graph; adapters in `algo::adapters` translate options into
//! configs and results into result-tree writes.

use crate::algo::GraphProjection;
use crate::algo::projection::Converted;
use rayon::prelude::*;

/// Core trait for all graph algorithms.
pub trait Algorithm: Send + Sync {
    /// Input shape the kernel consumes.
    type Graph: Converted;
    /// Algorithm parameters.
    type Config: Default + Clone + Send + 'static;
    /// Result type.
    type Result: Send + 'static;

    /// Algorithm identifier.
    fn name() -> &'static str;

    /// Execute algorithm on a converted graph.
    fn run(graph: &Self::Graph, config: Self::Config) -> Self::Result;
}

/// Upper bound on the per-task accumulators an all-sources kernel keeps
/// alive. Sources split into at most this many contiguous groups whose
/// partial sums are folded in group order, independent of the thread count.
pub(crate) const PARTIAL_SUMS: usize = 16;

/// Contiguous group size splitting `sources` into at most [`PARTIAL_SUMS`]
/// groups.
pub(crate) fn source_group_size(sources: usize) -> usize {
    sources.div_ceil(PARTIAL_SUMS).max(1)
}

/// Sorted, deduplicated neighbor slots per vertex with self-loops removed.
///
/// Structural kernels (cores, triangles, coloring) count each adjacent pair
/// once no matter how many arcs connect it.
pub(crate) fn simple_neighbors(graph: &GraphProjection) -> Vec<Vec<u32>> {
    (0..graph.vertex_count() as u32)
        .into_par_iter()
        .map(|u| {
            let mut neighbors: Vec<u32> = graph
                .neighbors(u)
                .map(|(v, _)| v)
                .filter(|&v| v != u)
                .collect();
            neighbors.sort_unstable();
            neighbors.dedup();
            neighbors
        })
        .collect()
}

mod degree_centrality;
pub use degree_centrality::{
    DegreeCentrality, DegreeCentralityConfig, DegreeCentralityResult, Degrees,
};

mod pagerank;
pub use pagerank::{PageRank, PageRankConfig, PageRankResult};

mod betweenness;
pub use betweenness::{Betweenness, BetweennessConfig, BetweennessResult};

mod closeness;
pub use closeness::{Closeness, ClosenessConfig, ClosenessResult};

mod harmonic_centrality;
pub use harmonic_centrality::{
    HarmonicCentrality, HarmonicCentralityConfig, HarmonicCentralityResult,
};

mod eigenvector_centrality;
pub use eigenvector_centrality::{
    EigenvectorCentrality, EigenvectorCentralityConfig, EigenvectorCentralityResult,
};

mod katz_centrality;
pub use katz_centrality::{KatzCentrality, KatzCentralityConfig, KatzCentralityResult};

mod louvain;
pub use louvain::{Louvain, LouvainConfig, LouvainResult};

mod label_propagation;
pub use label_propagation::{LabelPropagation, LabelPropagationConfig, LabelPropagationResult};

mod wcc;
pub use wcc::{Wcc, WccConfig, WccResult};

mod scc;
pub use scc::{Scc, SccConfig, SccResult};

mod bfs;
pub use bfs::{Bfs, BfsConfig, BfsResult, BfsVisit};

mod dfs;
pub use dfs::{Dfs, DfsConfig, DfsResult, DfsVisit};

mod dijkstra;
pub use dijkstra::{Dijkstra, DijkstraConfig, DijkstraResult, ShortestPath};

mod bellman_ford;
pub use bellman_ford::{BellmanFord, BellmanFordConfig, BellmanFordResult};

mod floyd_warshall;
pub use floyd_warshall::{
    DistanceSummary, FloydWarshall, FloydWarshallConfig, FloydWarshallResult,
};

mod mst;
pub use mst::{MinimumSpanningTree, MstConfig, MstResult};

mod prim;
pub use prim::{Prim, PrimConfig, PrimResult};

mod ford_fulkerson;
pub use ford_fulkerson::{FordFulkerson, FordFulkersonConfig, FordFulkersonResult};

mod min_cut;
pub use min_cut::{MinCut, MinCutConfig, MinCutResult};

mod bipartite_check;
pub use bipartite_check::{BipartiteCheck, BipartiteCheckConfig, BipartiteCheckResult};

mod max_matching;
pub use max_matching::{
    MatchedPair, MaximumMatching, MaximumMatchingConfig, MaximumMatchingResult,
};

mod kcore;
pub use kcore::{KCore, KCoreConfig, KCoreResult};

mod triangle_count;
pub use triangle_count::{TriangleCount, TriangleCountConfig, TriangleCountResult};

mod graph_coloring;
pub use graph_coloring::{GraphColoring, GraphColoringConfig, GraphColoringResult};
