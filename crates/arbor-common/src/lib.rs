// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

pub mod api {
    pub mod error;
}

pub mod config;

pub mod core {
    pub mod id;
    pub mod value;
}

pub mod graph {
    pub mod host_graph;
    pub mod results;
}

// Re-exports for convenience
pub use api::error::{ArborError, Result};
pub use config::ArborConfig;
pub use core::id::{AlgorithmId, EdgeKey, NodeId};
pub use core::value::OptionValue;
pub use graph::host_graph::{EdgeRecord, HostGraph, NodeRecord};
pub use graph::results::{ResultBag, ResultTree};

/// Free-form attribute payload carried by nodes and edges.
pub type Properties = serde_json::Map<String, serde_json::Value>;
