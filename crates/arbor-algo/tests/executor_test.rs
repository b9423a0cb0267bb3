// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

use arbor_algo::algo::executor::{run_shared, shared};
use arbor_algo::algo::{AlgorithmRegistry, Options};
use arbor_common::{HostGraph, NodeId};
use serde_json::json;
use std::sync::Arc;

fn ring(n: i64) -> HostGraph {
    HostGraph::from_edges((0..n).map(|i| (i, (i + 1) % n)))
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_runs_of_same_algorithm_serialize() -> anyhow::Result<()> {
    let _ = env_logger::builder().is_test(true).try_init();
    let registry = Arc::new(AlgorithmRegistry::new());
    let graph = shared(ring(50));

    let tasks = (0..8).map(|_| {
        let registry = registry.clone();
        let graph = graph.clone();
        tokio::spawn(async move {
            run_shared(&registry, &graph, "arbor", "pagerank", Options::new()).await
        })
    });
    let views = futures::future::join_all(tasks).await;

    let mut rendered = Vec::new();
    for view in views {
        let view = view??.expect("pagerank is registered");
        rendered.push(serde_json::to_string(&view.to_json())?);
    }
    assert!(rendered.windows(2).all(|w| w[0] == w[1]));
    Ok(())
}

#[tokio::test]
async fn test_different_algorithms_share_a_graph() -> anyhow::Result<()> {
    let registry = AlgorithmRegistry::new();
    let graph = shared(ring(6));

    let (degree, bfs) = futures::join!(
        run_shared(&registry, &graph, "arbor", "degree", Options::new()),
        run_shared(
            &registry,
            &graph,
            "arbor",
            "bfs",
            Options::new().set("source", 0)
        ),
    );
    degree?;
    bfs?;

    let g = graph.read();
    let zero = NodeId::from(0);
    assert_eq!(
        g.lookup_node_path(&zero, "algorithmResults.arbor.degree.outDegree"),
        Some(&json!(1))
    );
    assert_eq!(
        g.lookup_node_path(&NodeId::from(3), "algorithmResults.arbor.bfs.level"),
        Some(&json!(3))
    );
    Ok(())
}

#[tokio::test]
async fn test_own_results_only_cover_the_algorithm() -> anyhow::Result<()> {
    let registry = AlgorithmRegistry::new();
    let graph = shared(ring(4));
    run_shared(&registry, &graph, "arbor", "degree", Options::new()).await?;
    let view = run_shared(&registry, &graph, "arbor", "triangle-count", Options::new())
        .await?
        .expect("registered");

    let json = view.to_json();
    assert!(json["node"]["0"]["arbor"].get("degree").is_none());
    assert_eq!(json["graph"]["arbor"]["triangle-count"]["triangleCount"], json!(0));
    Ok(())
}
