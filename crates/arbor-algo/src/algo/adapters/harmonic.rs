// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! `harmonic` procedure: weighted harmonic centrality.

use super::{WEIGHT_ATTRIBUTE, apply_weight_attribute, weight_attribute_option, write_scores};
use crate::algo::algorithms::{
    HarmonicCentrality, HarmonicCentralityConfig, HarmonicCentralityResult,
};
use crate::algo::options::{OptionsSchema, ResolvedOptions};
use crate::algo::procedure_template::{GenericAlgoProcedure, GraphAlgoAdapter};
use crate::algo::procedures::AlgoContext;
use crate::algo::styles::{SuggestedStyles, node_size_by};
use crate::algo::{GraphProjection, ProjectionBuilder};
use arbor_common::{AlgorithmId, Result};

pub struct HarmonicAdapter;

impl GraphAlgoAdapter for HarmonicAdapter {
    const TYPE: &'static str = "harmonic";
    type Algo = HarmonicCentrality;

    fn options_schema() -> OptionsSchema {
        OptionsSchema::new().option(WEIGHT_ATTRIBUTE, weight_attribute_option())
    }

    fn suggested_styles(id: &AlgorithmId) -> Option<SuggestedStyles> {
        Some(
            SuggestedStyles::new("Size nodes by harmonic centrality", "centrality")
                .layer(node_size_by(id, "harmonicPct")),
        )
    }

    fn customize_projection<'a>(
        builder: ProjectionBuilder<'a>,
        options: &ResolvedOptions,
    ) -> Result<ProjectionBuilder<'a>> {
        apply_weight_attribute(builder, options, WEIGHT_ATTRIBUTE)
    }

    fn to_config(
        _graph: &GraphProjection,
        _options: &ResolvedOptions,
    ) -> Result<Option<HarmonicCentralityConfig>> {
        Ok(Some(HarmonicCentralityConfig::default()))
    }

    fn write_results(
        ctx: &mut AlgoContext<'_>,
        _graph: &GraphProjection,
        result: HarmonicCentralityResult,
    ) -> Result<()> {
        write_scores(ctx, &result.scores, "harmonic", "harmonicPct")
    }
}

pub type HarmonicProcedure = GenericAlgoProcedure<HarmonicAdapter>;
