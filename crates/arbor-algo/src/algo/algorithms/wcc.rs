// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Weakly Connected Components via union-find.

use crate::algo::GraphProjection;
use crate::algo::algorithms::Algorithm;
use arbor_common::NodeId;

pub struct Wcc;

#[derive(Debug, Clone, Default)]
pub struct WccConfig {}

pub struct WccResult {
    /// (node, component_id); ids are dense and follow first appearance in slot order
    pub components: Vec<(NodeId, u64)>,
    pub component_count: usize,
    pub largest_component_size: usize,
}

impl Algorithm for Wcc {
    type Graph = GraphProjection;
    type Config = WccConfig;
    type Result = WccResult;

    fn name() -> &'static str {
        "wcc"
    }

    fn run(graph: &GraphProjection, _config: Self::Config) -> Self::Result {
        let n = graph.vertex_count();
        if n == 0 {
            return WccResult {
                components: Vec::new(),
                component_count: 0,
                largest_component_size: 0,
            };
        }

        let mut parent: Vec<u32> = (0..n as u32).collect();
        let mut rank: Vec<u8> = vec![0; n];

        fn find(parent: &mut [u32], mut x: u32) -> u32 {
            while parent[x as usize] != x {
                parent[x as usize] = parent[parent[x as usize] as usize]; // path compression
                x = parent[x as usize];
            }
            x
        }

        fn union(parent: &mut [u32], rank: &mut [u8], x: u32, y: u32) {
            let px = find(parent, x);
            let py = find(parent, y);
            if px == py {
                return;
            }
            match rank[px as usize].cmp(&rank[py as usize]) {
                std::cmp::Ordering::Less => parent[px as usize] = py,
                std::cmp::Ordering::Greater => parent[py as usize] = px,
                std::cmp::Ordering::Equal => {
                    parent[py as usize] = px;
                    rank[px as usize] += 1;
                }
            }
        }

        // Arc direction is irrelevant for weak connectivity
        for arc in graph.arcs() {
            union(&mut parent, &mut rank, arc.src, arc.dst);
        }

        let mut root_to_id: Vec<Option<u64>> = vec![None; n];
        let mut sizes: Vec<usize> = Vec::new();
        let mut results = Vec::with_capacity(n);
        for slot in 0..n as u32 {
            let root = find(&mut parent, slot) as usize;
            let cid = match root_to_id[root] {
                Some(cid) => cid,
                None => {
                    let cid = sizes.len() as u64;
                    root_to_id[root] = Some(cid);
                    sizes.push(0);
                    cid
                }
            };
            sizes[cid as usize] += 1;
            results.push((graph.to_id(slot).clone(), cid));
        }

        WccResult {
            component_count: sizes.len(),
            largest_component_size: sizes.iter().copied().max().unwrap_or(0),
            components: results,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algo::test_utils::{build_test_graph, by_int};

    #[test]
    fn test_wcc_ignores_direction() {
        // 0 -> 1 <- 2, 3 isolated
        let graph = build_test_graph(&[0, 1, 2, 3], &[(0, 1), (2, 1)]);
        let result = Wcc::run(&graph, WccConfig::default());
        let map = by_int(&result.components);

        assert_eq!(result.component_count, 2);
        assert_eq!(result.largest_component_size, 3);
        assert_eq!(map[&0], 0);
        assert_eq!(map[&2], 0);
        assert_eq!(map[&3], 1);
    }
}
