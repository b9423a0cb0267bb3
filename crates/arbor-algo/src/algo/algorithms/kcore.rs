// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! K-Core Decomposition Algorithm.
//!
//! Bucket-based peeling (Batagelj-Zaversnik), O(V + E).

use crate::algo::GraphProjection;
use crate::algo::algorithms::{Algorithm, simple_neighbors};
use arbor_common::NodeId;

pub struct KCore;

#[derive(Debug, Clone, Default)]
pub struct KCoreConfig {
    /// When set, membership in the k-core is reported as well.
    pub k: Option<usize>,
}

pub struct KCoreResult {
    pub core_numbers: Vec<(NodeId, u32)>,
    /// Membership per node when `k` was given.
    pub in_core: Option<Vec<(NodeId, bool)>>,
    pub max_core: u32,
}

impl Algorithm for KCore {
    type Graph = GraphProjection;
    type Config = KCoreConfig;
    type Result = KCoreResult;

    fn name() -> &'static str {
        "kCore"
    }

    fn run(graph: &GraphProjection, config: Self::Config) -> Self::Result {
        let n = graph.vertex_count();
        let adj = simple_neighbors(graph);

        let mut degrees: Vec<u32> = adj.iter().map(|a| a.len() as u32).collect();
        let max_degree = degrees.iter().copied().max().unwrap_or(0);

        // - pos[v]: position of v in sorted array
        // - vert[i]: vertex at position i in sorted array
        // - bin[d]: starting position of degree d in sorted array
        let mut vert = vec![0u32; n];
        let mut pos = vec![0usize; n];
        let mut bin = vec![0usize; max_degree as usize + 1];

        // Histogram
        for &d in &degrees {
            bin[d as usize] += 1;
        }

        // Cumulative sum for start positions
        let mut start = 0;
        for b in &mut bin {
            let num = *b;
            *b = start;
            start += num;
        }

        // Fill array
        for v in 0..n {
            let d = degrees[v] as usize;
            pos[v] = bin[d];
            vert[pos[v]] = v as u32;
            bin[d] += 1;
        }

        // Restore bin starts (shift right)
        for d in (1..=max_degree as usize).rev() {
            bin[d] = bin[d - 1];
        }
        bin[0] = 0;

        // Peeling in ascending current degree
        for i in 0..n {
            let v = vert[i];
            let deg_v = degrees[v as usize];

            for &u in &adj[v as usize] {
                let u_idx = u as usize;
                if degrees[u_idx] > deg_v {
                    let deg_u = degrees[u_idx] as usize;
                    let pos_u = pos[u_idx];
                    let pos_w = bin[deg_u];
                    let w = vert[pos_w]; // First vertex with degree deg_u

                    // Move u to the start of its bin
                    if u != w {
                        pos[u_idx] = pos_w;
                        pos[w as usize] = pos_u;
                        vert[pos_u] = w;
                        vert[pos_w] = u;
                    }

                    bin[deg_u] += 1;
                    degrees[u_idx] -= 1;
                }
            }
        }

        let core_numbers: Vec<(NodeId, u32)> = degrees
            .iter()
            .enumerate()
            .map(|(v, &core)| (graph.to_id(v as u32).clone(), core))
            .collect();
        let in_core = config.k.map(|k| {
            core_numbers
                .iter()
                .map(|(id, core)| (id.clone(), *core as usize >= k))
                .collect()
        });

        KCoreResult {
            max_core: degrees.iter().copied().max().unwrap_or(0),
            core_numbers,
            in_core,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algo::test_utils::{build_undirected_test_graph, by_int};

    #[test]
    fn test_triangle_with_tail() {
        // Triangle 0-1-2 plus tail 2-3
        let graph = build_undirected_test_graph(&[0, 1, 2, 3], &[(0, 1), (1, 2), (2, 0), (2, 3)]);
        let result = KCore::run(&graph, KCoreConfig { k: Some(2) });
        let cores = by_int(&result.core_numbers);

        assert_eq!(cores[&0], 2);
        assert_eq!(cores[&2], 2);
        assert_eq!(cores[&3], 1);
        assert_eq!(result.max_core, 2);

        let members = by_int(&result.in_core.unwrap());
        assert!(members[&1]);
        assert!(!members[&3]);
    }

    #[test]
    fn test_parallel_edges_count_once() {
        let graph = build_undirected_test_graph(&[0, 1], &[(0, 1), (1, 0), (0, 0)]);
        let result = KCore::run(&graph, KCoreConfig::default());
        assert_eq!(result.max_core, 1);
        assert!(result.in_core.is_none());
    }
}
