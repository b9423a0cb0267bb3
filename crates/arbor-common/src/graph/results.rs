// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Namespaced algorithm result trees.
//!
//! Every node, edge and the graph itself carries one [`ResultTree`]. The tree
//! is partitioned by [`AlgorithmId`]: each algorithm owns exactly one
//! [`ResultBag`] and only ever touches that bag, so two algorithms can never
//! collide on a key. Serialized, a tree has the nested shape
//! `namespace -> type -> key -> value`, which is what dotted style paths of
//! the form `algorithmResults.<namespace>.<type>.<key>` address.

use crate::core::id::AlgorithmId;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use serde_json::Value;
use std::collections::BTreeMap;

/// Root segment of every dotted result path.
pub const RESULTS_ROOT: &str = "algorithmResults";

/// Key/value results written by one algorithm on one entity.
pub type ResultBag = BTreeMap<String, Value>;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultTree {
    subtrees: BTreeMap<AlgorithmId, ResultBag>,
}

impl ResultTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.subtrees.is_empty()
    }

    /// Write (or overwrite) one key in the subtree owned by `id`.
    pub fn set(&mut self, id: &AlgorithmId, key: impl Into<String>, value: Value) {
        self.subtrees
            .entry(id.clone())
            .or_default()
            .insert(key.into(), value);
    }

    pub fn get(&self, id: &AlgorithmId, key: &str) -> Option<&Value> {
        self.subtrees.get(id).and_then(|bag| bag.get(key))
    }

    /// The whole subtree owned by `id`.
    pub fn subtree(&self, id: &AlgorithmId) -> Option<&ResultBag> {
        self.subtrees.get(id)
    }

    /// Drop the subtree owned by `id`. Returns whether anything was removed.
    pub fn clear(&mut self, id: &AlgorithmId) -> bool {
        self.subtrees.remove(id).is_some()
    }

    /// Iterate over `(algorithm, bag)` pairs in identity order.
    pub fn iter(&self) -> impl Iterator<Item = (&AlgorithmId, &ResultBag)> {
        self.subtrees.iter()
    }

    /// Resolve a dotted path.
    ///
    /// Accepts both `algorithmResults.<ns>.<type>.<key>` and the relative
    /// form `<ns>.<type>.<key>`.
    pub fn lookup_path(&self, path: &str) -> Option<&Value> {
        let rest = path
            .strip_prefix(RESULTS_ROOT)
            .and_then(|p| p.strip_prefix('.'))
            .unwrap_or(path);
        let mut parts = rest.splitn(3, '.');
        let namespace = parts.next()?;
        let algorithm_type = parts.next()?;
        let key = parts.next()?;
        self.get(&AlgorithmId::new(namespace, algorithm_type), key)
    }

    /// Nested JSON form: `{ namespace: { type: { key: value } } }`.
    pub fn to_json(&self) -> Value {
        let mut root = serde_json::Map::new();
        for (id, bag) in &self.subtrees {
            let ns = root
                .entry(id.namespace.clone())
                .or_insert_with(|| Value::Object(serde_json::Map::new()));
            if let Value::Object(ns) = ns {
                let bag_json: serde_json::Map<String, Value> =
                    bag.iter().map(|(k, v)| (k.clone(), v.clone())).collect();
                ns.insert(id.algorithm_type.clone(), Value::Object(bag_json));
            }
        }
        Value::Object(root)
    }
}

impl Serialize for ResultTree {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        // Group by namespace while streaming to keep ordering stable.
        let mut grouped: BTreeMap<&str, BTreeMap<&str, &ResultBag>> = BTreeMap::new();
        for (id, bag) in &self.subtrees {
            grouped
                .entry(id.namespace.as_str())
                .or_default()
                .insert(id.algorithm_type.as_str(), bag);
        }
        let mut map = serializer.serialize_map(Some(grouped.len()))?;
        for (ns, types) in grouped {
            map.serialize_entry(ns, &types)?;
        }
        map.end()
    }
}

/// Build the dotted path a styling layer uses to read `key` written by `id`.
pub fn result_path(id: &AlgorithmId, key: &str) -> String {
    format!(
        "{}.{}.{}.{}",
        RESULTS_ROOT, id.namespace, id.algorithm_type, key
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_subtrees_are_partitioned() {
        let degree = AlgorithmId::new("arbor", "degree");
        let rank = AlgorithmId::new("arbor", "pagerank");
        let mut tree = ResultTree::new();
        tree.set(&degree, "score", json!(1));
        tree.set(&rank, "score", json!(0.5));

        assert_eq!(tree.get(&degree, "score"), Some(&json!(1)));
        assert_eq!(tree.get(&rank, "score"), Some(&json!(0.5)));

        assert!(tree.clear(&degree));
        assert_eq!(tree.get(&degree, "score"), None);
        assert_eq!(tree.get(&rank, "score"), Some(&json!(0.5)));
    }

    #[test]
    fn test_lookup_path() {
        let id = AlgorithmId::new("arbor", "degree");
        let mut tree = ResultTree::new();
        tree.set(&id, "inDegree", json!(2));

        assert_eq!(
            tree.lookup_path("algorithmResults.arbor.degree.inDegree"),
            Some(&json!(2))
        );
        assert_eq!(tree.lookup_path("arbor.degree.inDegree"), Some(&json!(2)));
        assert_eq!(tree.lookup_path("arbor.degree.missing"), None);
        assert_eq!(tree.lookup_path("arbor.degree"), None);
        assert_eq!(
            result_path(&id, "inDegree"),
            "algorithmResults.arbor.degree.inDegree"
        );
    }

    #[test]
    fn test_serialized_shape() {
        let mut tree = ResultTree::new();
        tree.set(&AlgorithmId::new("arbor", "degree"), "degree", json!(3));
        tree.set(&AlgorithmId::new("arbor", "bfs"), "level", json!(1));
        tree.set(&AlgorithmId::new("custom", "x"), "y", json!(true));

        let expected = json!({
            "arbor": { "bfs": { "level": 1 }, "degree": { "degree": 3 } },
            "custom": { "x": { "y": true } }
        });
        assert_eq!(serde_json::to_value(&tree).unwrap(), expected);
        assert_eq!(tree.to_json(), expected);
    }
}
