// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

pub mod algo;

pub use algo::executor::{SharedGraph, run_shared};
pub use algo::options::{OptionDefinition, Options, OptionsSchema, ResolvedOptions};
pub use algo::procedures::{AlgoContext, AlgoProcedure, AlgorithmInstance, ResultsView};
pub use algo::projection::{GraphProjection, ProjectionBuilder, ProjectionConfig};
pub use algo::styles::SuggestedStyles;
pub use algo::AlgorithmRegistry;
