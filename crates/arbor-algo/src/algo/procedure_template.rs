// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Template for graph algorithm procedures to reduce boilerplate.
//!
//! An adapter describes one algorithm declaratively: its options, how the
//! host graph is projected for it, how resolved options become a kernel
//! config and how the kernel's result lands in the result trees.
//! [`GenericAlgoProcedure`] turns any adapter into an [`AlgoProcedure`].

use crate::algo::algorithms::Algorithm;
use crate::algo::options::{OptionsSchema, ResolvedOptions};
use crate::algo::procedures::{AlgoContext, AlgoProcedure};
use crate::algo::projection::Converted;
use crate::algo::styles::SuggestedStyles;
use crate::algo::ProjectionBuilder;
use arbor_common::config::DEFAULT_NAMESPACE;
use arbor_common::{AlgorithmId, Result};
use std::marker::PhantomData;

/// Kernel input shape of an adapter.
pub type AdapterGraph<A> = <<A as GraphAlgoAdapter>::Algo as Algorithm>::Graph;
/// Kernel config of an adapter.
pub type AdapterConfig<A> = <<A as GraphAlgoAdapter>::Algo as Algorithm>::Config;
/// Kernel result of an adapter.
pub type AdapterResult<A> = <<A as GraphAlgoAdapter>::Algo as Algorithm>::Result;

/// Adapter trait for specific graph algorithms.
pub trait GraphAlgoAdapter: Send + Sync + 'static {
    /// Algorithm type within its namespace (e.g. "pagerank").
    const TYPE: &'static str;

    /// The underlying algorithm.
    type Algo: Algorithm;

    /// Declared options.
    fn options_schema() -> OptionsSchema;

    /// Visualization hint keyed to the registered identity.
    fn suggested_styles(_id: &AlgorithmId) -> Option<SuggestedStyles> {
        None
    }

    /// Customize projection if needed (e.g., weights, directions).
    ///
    /// The builder arrives preconfigured with the global weight attribute
    /// and default weight.
    fn customize_projection<'a>(
        builder: ProjectionBuilder<'a>,
        _options: &ResolvedOptions,
    ) -> Result<ProjectionBuilder<'a>> {
        Ok(builder)
    }

    /// Convert resolved options to the algorithm config.
    ///
    /// `Ok(None)` is a soft no-op: the run succeeds without writing anything
    /// (e.g. the source node is not in the graph).
    fn to_config(
        graph: &AdapterGraph<Self>,
        options: &ResolvedOptions,
    ) -> Result<Option<AdapterConfig<Self>>>;

    /// Write the algorithm result into the result trees.
    fn write_results(
        ctx: &mut AlgoContext<'_>,
        graph: &AdapterGraph<Self>,
        result: AdapterResult<Self>,
    ) -> Result<()>;
}

/// Generic implementation of `AlgoProcedure` for any `GraphAlgoAdapter`.
pub struct GenericAlgoProcedure<A: GraphAlgoAdapter> {
    namespace: String,
    _marker: PhantomData<A>,
}

impl<A: GraphAlgoAdapter> GenericAlgoProcedure<A> {
    pub fn new() -> Self {
        Self::with_namespace(DEFAULT_NAMESPACE)
    }

    /// Register the same adapter under another namespace.
    pub fn with_namespace(namespace: &str) -> Self {
        Self {
            namespace: namespace.to_string(),
            _marker: PhantomData,
        }
    }
}

impl<A: GraphAlgoAdapter> Default for GenericAlgoProcedure<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: GraphAlgoAdapter> AlgoProcedure for GenericAlgoProcedure<A> {
    fn id(&self) -> AlgorithmId {
        AlgorithmId::new(self.namespace.as_str(), A::TYPE)
    }

    fn options_schema(&self) -> OptionsSchema {
        A::options_schema()
    }

    fn suggested_styles(&self) -> Option<SuggestedStyles> {
        A::suggested_styles(&self.id())
    }

    fn run(&self, ctx: &mut AlgoContext<'_>) -> Result<()> {
        if ctx.graph().is_empty() {
            log::debug!("{}: empty graph, nothing to compute", ctx.id());
            return Ok(());
        }

        // 1. Build Projection
        let graph: AdapterGraph<A> = {
            let config = ctx.config();
            let builder = ProjectionBuilder::new(ctx.graph())
                .weight_attribute(&config.weight_attribute)
                .default_weight(config.default_weight);
            let builder = A::customize_projection(builder, ctx.options())?;
            Converted::convert(builder)
        };

        // 2. Run Algorithm
        let Some(config) = A::to_config(&graph, ctx.options())? else {
            log::debug!("{}: preconditions not met, skipping", ctx.id());
            return Ok(());
        };
        let result = A::Algo::run(&graph, config);

        // 3. Write Results
        A::write_results(ctx, &graph, result)
    }
}
