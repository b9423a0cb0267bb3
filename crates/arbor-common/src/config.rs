// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

use crate::core::value::OptionValue;
use std::collections::BTreeMap;

/// Namespace the built-in algorithms register under.
pub const DEFAULT_NAMESPACE: &str = "arbor";

/// Edge-data key consulted for weights when an algorithm names none.
pub const DEFAULT_WEIGHT_ATTRIBUTE: &str = "weight";

/// Weight used when an edge carries no numeric value under the weight key.
pub const DEFAULT_EDGE_WEIGHT: f64 = 1.0;

#[derive(Clone, Debug)]
pub struct ArborConfig {
    /// Namespace for built-in algorithms (default: "arbor")
    pub namespace: String,

    /// Edge attribute read as weight/capacity (default: "weight")
    pub weight_attribute: String,

    /// Fallback weight for edges without a numeric weight (default: 1.0)
    pub default_weight: f64,

    /// Global option defaults, keyed by option name.
    ///
    /// Lowest-precedence layer of option resolution: only consulted when
    /// neither the caller nor the algorithm schema supplies a value.
    pub option_defaults: BTreeMap<String, OptionValue>,
}

impl Default for ArborConfig {
    fn default() -> Self {
        Self {
            namespace: DEFAULT_NAMESPACE.to_string(),
            weight_attribute: DEFAULT_WEIGHT_ATTRIBUTE.to_string(),
            default_weight: DEFAULT_EDGE_WEIGHT,
            option_defaults: BTreeMap::new(),
        }
    }
}

impl ArborConfig {
    pub fn with_weight_attribute(mut self, attribute: impl Into<String>) -> Self {
        self.weight_attribute = attribute.into();
        self
    }

    pub fn with_default_weight(mut self, weight: f64) -> Self {
        self.default_weight = weight;
        self
    }

    pub fn with_option_default(
        mut self,
        name: impl Into<String>,
        value: impl Into<OptionValue>,
    ) -> Self {
        self.option_defaults.insert(name.into(), value.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ArborConfig::default();
        assert_eq!(config.namespace, "arbor");
        assert_eq!(config.weight_attribute, "weight");
        assert_eq!(config.default_weight, 1.0);
        assert!(config.option_defaults.is_empty());
    }

    #[test]
    fn test_builder() {
        let config = ArborConfig::default()
            .with_weight_attribute("cost")
            .with_option_default("maxIterations", 50);
        assert_eq!(config.weight_attribute, "cost");
        assert_eq!(
            config.option_defaults.get("maxIterations"),
            Some(&OptionValue::Number(50.0))
        );
    }
}
