// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

use arbor_algo::algo::normalize::{min_max_scale, renumber_communities};
use arbor_algo::algo::{
    AlgorithmRegistry, OptionDefinition, Options, ProjectionBuilder, resolve_options,
    validate_option,
};
use arbor_common::{HostGraph, NodeId, OptionValue};
use proptest::prelude::*;

fn edge_list_strategy() -> impl Strategy<Value = Vec<(i64, i64)>> {
    prop::collection::vec((0i64..12, 0i64..12), 0..40)
}

fn host_graph(edges: &[(i64, i64)]) -> HostGraph {
    HostGraph::from_edges(edges.iter().copied())
}

proptest! {
    #[test]
    fn scaled_scores_hit_both_ends(values in prop::collection::vec(-1e6f64..1e6, 1..50)) {
        let scaled = min_max_scale(&values);
        prop_assert_eq!(scaled.len(), values.len());
        prop_assert!(scaled.iter().all(|p| p.is_finite() && (0.0..=1.0).contains(p)));

        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        for (raw, pct) in values.iter().zip(&scaled) {
            if min == max {
                prop_assert_eq!(*pct, 0.0);
            } else if *raw == min {
                prop_assert_eq!(*pct, 0.0);
            } else if *raw == max {
                prop_assert_eq!(*pct, 1.0);
            }
        }
    }

    #[test]
    fn bounds_are_inclusive(min in -1000i32..1000, span in 1i32..1000) {
        let min = f64::from(min);
        let max = min + f64::from(span);
        let definition = OptionDefinition::integer(min, "x", "").min(min).max(max);

        prop_assert!(validate_option("x", &OptionValue::from(min), &definition).is_ok());
        prop_assert!(validate_option("x", &OptionValue::from(max), &definition).is_ok());

        let below = validate_option("x", &OptionValue::from(min - 1.0), &definition).unwrap_err();
        let lower = format!(">= {}", min);
        prop_assert!(below.to_string().contains(&lower), "{}", below);
        let above = validate_option("x", &OptionValue::from(max + 1.0), &definition).unwrap_err();
        let upper = format!("<= {}", max);
        prop_assert!(above.to_string().contains(&upper), "{}", above);
    }

    #[test]
    fn undirected_conversion_adds_reverse_arcs(edges in edge_list_strategy()) {
        let graph = host_graph(&edges);
        let projection = ProjectionBuilder::new(&graph).build();
        for edge in graph.edges() {
            let a = projection.to_slot(&edge.key().src).unwrap();
            let b = projection.to_slot(&edge.key().dst).unwrap();
            let arcs = projection.arcs();
            prop_assert!(arcs.iter().any(|arc| arc.src == a && arc.dst == b));
            prop_assert!(arcs.iter().any(|arc| arc.src == b && arc.dst == a));
        }
    }

    #[test]
    fn conversion_without_reverse_keeps_orientation(edges in edge_list_strategy()) {
        let graph = host_graph(&edges);
        let projection = ProjectionBuilder::new(&graph).add_reverse_edges(false).build();
        prop_assert_eq!(projection.edge_count(), graph.edge_count());
        for arc in projection.arcs() {
            prop_assert!(!arc.synthesized);
            prop_assert_eq!(projection.to_id(arc.src), &arc.origin.src);
            prop_assert_eq!(projection.to_id(arc.dst), &arc.origin.dst);
        }
    }

    #[test]
    fn renumbered_communities_are_dense(labels in prop::collection::vec(0u64..1000, 0..40)) {
        let assignment: Vec<(NodeId, u64)> = labels
            .iter()
            .enumerate()
            .map(|(i, l)| (NodeId::from(i as i64), *l))
            .collect();
        let dense = renumber_communities(&assignment);
        let distinct: std::collections::BTreeSet<u64> = labels.iter().copied().collect();
        let ids: std::collections::BTreeSet<u64> = dense.iter().map(|(_, c)| *c).collect();
        prop_assert_eq!(ids, (0..distinct.len() as u64).collect());
        // Same raw label, same dense id
        for (i, (_, a)) in dense.iter().enumerate() {
            for (j, (_, b)) in dense.iter().enumerate() {
                prop_assert_eq!(labels[i] == labels[j], a == b);
            }
        }
    }

    #[test]
    fn structural_runs_never_fail(edges in edge_list_strategy()) {
        let registry = AlgorithmRegistry::new();
        let mut graph = host_graph(&edges);
        for algo in ["degree", "connected-components", "scc", "k-core", "triangle-count", "graph-coloring", "louvain"] {
            let mut instance = registry
                .get(&mut graph, "arbor", algo, Options::new())
                .unwrap()
                .unwrap();
            prop_assert!(instance.run().is_ok(), "{} failed", algo);
        }
    }
}

#[test]
fn empty_options_resolve_to_defaults() {
    let registry = AlgorithmRegistry::new();
    for key in registry.list() {
        let (namespace, algo) = key.split_once(':').unwrap();
        let schema = registry.get_class(namespace, algo).unwrap().options_schema();
        if schema.iter().any(|(_, d)| d.required) {
            assert!(resolve_options(&schema, &Options::new()).is_err());
            continue;
        }
        let resolved = resolve_options(&schema, &Options::new()).unwrap();
        for (name, default) in schema.defaults() {
            assert_eq!(resolved.get(&name), Some(&default), "{}.{}", key, name);
        }
        assert_eq!(resolved.len(), schema.len());
    }
}
