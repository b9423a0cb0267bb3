// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Strongly Connected Components (SCC) Algorithm using Tarjan's algorithm.

use crate::algo::GraphProjection;
use crate::algo::algorithms::Algorithm;
use arbor_common::NodeId;

pub struct Scc;

#[derive(Debug, Clone, Default)]
pub struct SccConfig {}

pub struct SccResult {
    /// (node, component_id) in Tarjan completion order
    pub components: Vec<(NodeId, u64)>,
    pub component_count: usize,
}

struct TarjanContext<'a> {
    graph: &'a GraphProjection,
    index: usize,
    stack: Vec<u32>,
    on_stack: Vec<bool>,
    indices: Vec<Option<usize>>,
    lowlink: Vec<usize>,
    components: Vec<u32>,
    component_count: usize,
}

impl Algorithm for Scc {
    type Graph = GraphProjection;
    type Config = SccConfig;
    type Result = SccResult;

    fn name() -> &'static str {
        "scc"
    }

    fn run(graph: &GraphProjection, _config: Self::Config) -> Self::Result {
        let n = graph.vertex_count();
        if n == 0 {
            return SccResult {
                components: Vec::new(),
                component_count: 0,
            };
        }

        let mut ctx = TarjanContext {
            graph,
            index: 0,
            stack: Vec::new(),
            on_stack: vec![false; n],
            indices: vec![None; n],
            lowlink: vec![0; n],
            components: vec![0; n],
            component_count: 0,
        };

        for v in 0..n as u32 {
            if ctx.indices[v as usize].is_none() {
                strongconnect(v, &mut ctx);
            }
        }

        let results = ctx
            .components
            .into_iter()
            .enumerate()
            .map(|(i, c)| (graph.to_id(i as u32).clone(), c as u64))
            .collect();

        SccResult {
            components: results,
            component_count: ctx.component_count,
        }
    }
}

/// Iterative Tarjan: an explicit frame stack of (vertex, next neighbor index).
fn strongconnect(root: u32, ctx: &mut TarjanContext) {
    let graph = ctx.graph;
    let mut frames: Vec<(u32, usize)> = vec![(root, 0)];
    visit(root, ctx);

    while let Some(frame) = frames.last_mut() {
        let v = frame.0;
        let neighbors = graph.out_neighbors(v);
        if frame.1 < neighbors.len() {
            let w = neighbors[frame.1];
            frame.1 += 1;
            match ctx.indices[w as usize] {
                None => {
                    visit(w, ctx);
                    frames.push((w, 0));
                }
                Some(w_index) if ctx.on_stack[w as usize] => {
                    ctx.lowlink[v as usize] = ctx.lowlink[v as usize].min(w_index);
                }
                Some(_) => {}
            }
            continue;
        }

        frames.pop();
        if let Some(&(parent, _)) = frames.last() {
            ctx.lowlink[parent as usize] = ctx.lowlink[parent as usize].min(ctx.lowlink[v as usize]);
        }

        if Some(ctx.lowlink[v as usize]) == ctx.indices[v as usize] {
            while let Some(w) = ctx.stack.pop() {
                ctx.on_stack[w as usize] = false;
                ctx.components[w as usize] = ctx.component_count as u32;
                if w == v {
                    break;
                }
            }
            ctx.component_count += 1;
        }
    }
}

fn visit(v: u32, ctx: &mut TarjanContext) {
    ctx.indices[v as usize] = Some(ctx.index);
    ctx.lowlink[v as usize] = ctx.index;
    ctx.index += 1;
    ctx.stack.push(v);
    ctx.on_stack[v as usize] = true;
}
