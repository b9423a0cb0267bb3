// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Shared post-processing for algorithm outputs.
//!
//! Min-max scaling never yields NaN: the range is taken over finite values
//! only, a degenerate range maps everything to 0, and non-finite or missing
//! inputs map to 0 as well.

use arbor_common::NodeId;
use std::collections::{BTreeMap, BTreeSet};

/// Observed finite range of a set of scores.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MinMax {
    pub min: f64,
    pub max: f64,
}

impl MinMax {
    /// Range over the finite values; `None` when there are none.
    pub fn observe<I: IntoIterator<Item = f64>>(values: I) -> Option<Self> {
        values
            .into_iter()
            .filter(|v| v.is_finite())
            .fold(None, |acc, v| match acc {
                None => Some(MinMax { min: v, max: v }),
                Some(m) => Some(MinMax {
                    min: m.min.min(v),
                    max: m.max.max(v),
                }),
            })
    }

    pub fn range(&self) -> f64 {
        self.max - self.min
    }

    /// Scale into `[0, 1]`.
    pub fn scale(&self, value: f64) -> f64 {
        let range = self.range();
        if !value.is_finite() || range <= 0.0 {
            return 0.0;
        }
        if range.is_infinite() {
            // Spans wider than f64::MAX are scaled at half magnitude.
            let half = self.max / 2.0 - self.min / 2.0;
            return ((value / 2.0 - self.min / 2.0) / half).clamp(0.0, 1.0);
        }
        ((value - self.min) / range).clamp(0.0, 1.0)
    }
}

/// Map a raw score onto a finite value: infinities saturate to
/// `±f64::MAX` and NaN becomes 0. Result trees never hold a null score.
pub fn clamp_finite(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(-f64::MAX, f64::MAX)
    }
}

/// Min-max scale a list of scores, preserving order.
pub fn min_max_scale(values: &[f64]) -> Vec<f64> {
    match MinMax::observe(values.iter().copied()) {
        Some(mm) => values.iter().map(|&v| mm.scale(v)).collect(),
        None => vec![0.0; values.len()],
    }
}

/// Min-max scale where some entries received no score; missing maps to 0.
pub fn scale_optional(values: &[Option<f64>]) -> Vec<f64> {
    match MinMax::observe(values.iter().flatten().copied()) {
        Some(mm) => values
            .iter()
            .map(|v| v.map_or(0.0, |v| mm.scale(v)))
            .collect(),
        None => vec![0.0; values.len()],
    }
}

/// Renumber raw community labels densely from 0.
///
/// Communities are ordered by their smallest member id, so the result does
/// not depend on the labels a kernel happened to pick.
pub fn renumber_communities(assignment: &[(NodeId, u64)]) -> Vec<(NodeId, u64)> {
    let mut smallest: BTreeMap<u64, &NodeId> = BTreeMap::new();
    for (id, c) in assignment {
        smallest
            .entry(*c)
            .and_modify(|m| {
                if id < *m {
                    *m = id;
                }
            })
            .or_insert(id);
    }

    let mut order: Vec<(&NodeId, u64)> = smallest.into_iter().map(|(c, m)| (m, c)).collect();
    order.sort();
    let dense: BTreeMap<u64, u64> = order
        .into_iter()
        .enumerate()
        .map(|(i, (_, c))| (c, i as u64))
        .collect();

    assignment
        .iter()
        .map(|(id, c)| (id.clone(), dense[c]))
        .collect()
}

/// Members per community, each list sorted by node id.
pub fn community_members(assignment: &[(NodeId, u64)]) -> BTreeMap<u64, Vec<NodeId>> {
    let mut members: BTreeMap<u64, Vec<NodeId>> = BTreeMap::new();
    for (id, c) in assignment {
        members.entry(*c).or_default().push(id.clone());
    }
    for list in members.values_mut() {
        list.sort();
    }
    members
}

pub fn count_unique_communities(assignment: &[(NodeId, u64)]) -> usize {
    assignment.iter().map(|(_, c)| *c).collect::<BTreeSet<_>>().len()
}

/// JSON array of member arrays, ordered by community id.
pub fn communities_json(assignment: &[(NodeId, u64)]) -> serde_json::Value {
    serde_json::Value::Array(
        community_members(assignment)
            .into_values()
            .map(|members| {
                serde_json::Value::Array(members.iter().map(NodeId::to_json).collect())
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min_max_endpoints() {
        let scaled = min_max_scale(&[2.0, 4.0, 3.0]);
        assert_eq!(scaled, vec![0.0, 1.0, 0.5]);
    }

    #[test]
    fn test_degenerate_range_is_zero() {
        assert_eq!(min_max_scale(&[5.0, 5.0, 5.0]), vec![0.0, 0.0, 0.0]);
        assert_eq!(min_max_scale(&[]), Vec::<f64>::new());
    }

    #[test]
    fn test_non_finite_ignored() {
        let scaled = min_max_scale(&[f64::INFINITY, 1.0, 3.0, f64::NAN]);
        assert_eq!(scaled, vec![0.0, 0.0, 1.0, 0.0]);
        assert!(scaled.iter().all(|v| v.is_finite()));
    }

    #[test]
    fn test_clamp_finite() {
        assert_eq!(clamp_finite(2.5), 2.5);
        assert_eq!(clamp_finite(f64::INFINITY), f64::MAX);
        assert_eq!(clamp_finite(f64::NEG_INFINITY), -f64::MAX);
        assert_eq!(clamp_finite(f64::NAN), 0.0);
    }

    #[test]
    fn test_saturated_span_scales() {
        let raw: Vec<f64> = [f64::NEG_INFINITY, 0.0, f64::INFINITY]
            .into_iter()
            .map(clamp_finite)
            .collect();
        assert_eq!(min_max_scale(&raw), vec![0.0, 0.5, 1.0]);
    }

    #[test]
    fn test_scale_optional() {
        assert_eq!(scale_optional(&[Some(1.0), None, Some(3.0)]), vec![0.0, 0.0, 1.0]);
        assert_eq!(scale_optional(&[None, None]), vec![0.0, 0.0]);
    }

    #[test]
    fn test_renumber_is_label_independent() {
        let a = vec![
            (NodeId::from("b"), 9),
            (NodeId::from("a"), 9),
            (NodeId::from("c"), 4),
        ];
        let b = vec![
            (NodeId::from("c"), 0),
            (NodeId::from("a"), 1),
            (NodeId::from("b"), 1),
        ];
        let ra: BTreeMap<_, _> = renumber_communities(&a).into_iter().collect();
        let rb: BTreeMap<_, _> = renumber_communities(&b).into_iter().collect();
        assert_eq!(ra, rb);
        assert_eq!(ra[&NodeId::from("a")], 0);
        assert_eq!(ra[&NodeId::from("c")], 1);
    }

    #[test]
    fn test_community_members_and_count() {
        let a = vec![
            (NodeId::from("b"), 0),
            (NodeId::from("a"), 0),
            (NodeId::from("c"), 1),
        ];
        assert_eq!(count_unique_communities(&a), 2);
        let members = community_members(&a);
        assert_eq!(members[&0], vec![NodeId::from("a"), NodeId::from("b")]);
        assert_eq!(
            communities_json(&a),
            serde_json::json!([["a", "b"], ["c"]])
        );
    }
}
