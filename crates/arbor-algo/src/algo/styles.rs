// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Suggested visualization descriptors.
//!
//! A descriptor tells a styling layer which result keys an algorithm writes
//! and how they could be mapped to visual properties. The framework never
//! evaluates them; it only guarantees that every calculated input path is
//! reachable after a run.

use arbor_common::AlgorithmId;
use arbor_common::graph::results::result_path;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SuggestedStyles {
    pub description: String,
    pub category: String,
    pub layers: Vec<StyleLayer>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StyleLayer {
    pub metadata: LayerMetadata,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node: Option<StyleRule>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edge: Option<StyleRule>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayerMetadata {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StyleRule {
    pub selector: String,
    pub style: serde_json::Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calculated: Option<CalculatedStyle>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalculatedStyle {
    /// Dotted `algorithmResults.<namespace>.<type>.<key>` paths.
    pub inputs: Vec<String>,
    pub output: String,
    pub expression: String,
}

impl SuggestedStyles {
    pub fn new(description: &str, category: &str) -> Self {
        Self {
            description: description.to_string(),
            category: category.to_string(),
            layers: Vec::new(),
        }
    }

    pub fn layer(mut self, layer: StyleLayer) -> Self {
        self.layers.push(layer);
        self
    }

    /// Every calculated input path across all layers.
    pub fn input_paths(&self) -> impl Iterator<Item = &str> {
        self.layers
            .iter()
            .flat_map(|l| l.node.iter().chain(l.edge.iter()))
            .filter_map(|r| r.calculated.as_ref())
            .flat_map(|c| c.inputs.iter().map(String::as_str))
    }

    /// Node-side calculated input paths.
    pub fn node_input_paths(&self) -> Vec<&str> {
        Self::paths(self.layers.iter().filter_map(|l| l.node.as_ref()))
    }

    /// Edge-side calculated input paths.
    pub fn edge_input_paths(&self) -> Vec<&str> {
        Self::paths(self.layers.iter().filter_map(|l| l.edge.as_ref()))
    }

    fn paths<'a>(rules: impl Iterator<Item = &'a StyleRule>) -> Vec<&'a str> {
        rules
            .filter_map(|r| r.calculated.as_ref())
            .flat_map(|c| c.inputs.iter().map(String::as_str))
            .collect()
    }
}

impl StyleLayer {
    pub fn new(name: &str, description: &str) -> Self {
        Self {
            metadata: LayerMetadata {
                name: name.to_string(),
                description: description.to_string(),
            },
            node: None,
            edge: None,
        }
    }

    pub fn node(mut self, rule: StyleRule) -> Self {
        self.node = Some(rule);
        self
    }

    pub fn edge(mut self, rule: StyleRule) -> Self {
        self.edge = Some(rule);
        self
    }
}

impl StyleRule {
    pub fn new(selector: &str, style: serde_json::Value) -> Self {
        Self {
            selector: selector.to_string(),
            style,
            calculated: None,
        }
    }

    /// Map one result key written by `id` onto `output` via `expression`.
    pub fn calculated(mut self, id: &AlgorithmId, keys: &[&str], output: &str, expression: &str) -> Self {
        self.calculated = Some(CalculatedStyle {
            inputs: keys.iter().map(|k| result_path(id, k)).collect(),
            output: output.to_string(),
            expression: expression.to_string(),
        });
        self
    }
}

/// Node size driven by a `[0, 1]` percentage key.
pub fn node_size_by(id: &AlgorithmId, pct_key: &str) -> StyleLayer {
    StyleLayer::new("Size", "Scale node size by relative score").node(
        StyleRule::new("node", serde_json::json!({})).calculated(
            id,
            &[pct_key],
            "style.size",
            "5 + arguments[0] * 20",
        ),
    )
}

/// Node color by categorical key (community, component, color index).
pub fn node_color_by_category(id: &AlgorithmId, key: &str) -> StyleLayer {
    StyleLayer::new("Color", "Color nodes by category").node(
        StyleRule::new("node", serde_json::json!({})).calculated(
            id,
            &[key],
            "style.color",
            "categorical(arguments[0])",
        ),
    )
}

/// Edge highlight when a boolean key is set.
pub fn edge_highlight_by(id: &AlgorithmId, flag_key: &str) -> StyleLayer {
    StyleLayer::new("Highlight", "Highlight selected edges").edge(
        StyleRule::new("edge", serde_json::json!({})).calculated(
            id,
            &[flag_key],
            "style.color",
            "arguments[0] ? '#e6194b' : '#cccccc'",
        ),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_are_dotted() {
        let id = AlgorithmId::new("arbor", "pagerank");
        let styles = SuggestedStyles::new("PageRank", "centrality").layer(node_size_by(&id, "rankPct"));
        let paths: Vec<&str> = styles.input_paths().collect();
        assert_eq!(paths, vec!["algorithmResults.arbor.pagerank.rankPct"]);
        assert!(styles.edge_input_paths().is_empty());
    }

    #[test]
    fn test_serialization_skips_empty_sides() {
        let id = AlgorithmId::new("arbor", "kruskal");
        let styles = SuggestedStyles::new("MST", "spanning").layer(edge_highlight_by(&id, "inMST"));
        let json = serde_json::to_value(&styles).unwrap();
        let layer = &json["layers"][0];
        assert!(layer.get("node").is_none());
        assert_eq!(
            layer["edge"]["calculated"]["inputs"][0],
            "algorithmResults.arbor.kruskal.inMST"
        );
    }
}
