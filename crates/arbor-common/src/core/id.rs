// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

use serde::{Deserialize, Serialize};
use std::fmt;

/// Separator between namespace and type in a registry key.
pub const REGISTRY_KEY_SEPARATOR: char = ':';

/// Node identity: a string or an integer, unique within a graph.
///
/// Integer ids order before string ids so that `BTreeMap<NodeId, _>` output
/// is stable regardless of how the host graph was populated.
#[derive(Clone, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NodeId {
    Int(i64),
    Str(String),
}

impl NodeId {
    /// Convert a JSON-ish number into a node id.
    ///
    /// Integral values map to `Int`; anything else keeps its textual form so
    /// it can never collide with an integer id.
    pub fn from_f64(value: f64) -> Self {
        if value.fract() == 0.0 && value >= i64::MIN as f64 && value <= i64::MAX as f64 {
            NodeId::Int(value as i64)
        } else {
            NodeId::Str(value.to_string())
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            NodeId::Int(v) => Some(*v),
            NodeId::Str(_) => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            NodeId::Int(_) => None,
            NodeId::Str(s) => Some(s),
        }
    }

    /// JSON representation used when a node id is stored as a result value.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            NodeId::Int(v) => serde_json::Value::from(*v),
            NodeId::Str(s) => serde_json::Value::from(s.as_str()),
        }
    }
}

impl From<i64> for NodeId {
    fn from(val: i64) -> Self {
        NodeId::Int(val)
    }
}

impl From<i32> for NodeId {
    fn from(val: i32) -> Self {
        NodeId::Int(val as i64)
    }
}

impl From<u32> for NodeId {
    fn from(val: u32) -> Self {
        NodeId::Int(val as i64)
    }
}

impl From<&str> for NodeId {
    fn from(val: &str) -> Self {
        NodeId::Str(val.to_string())
    }
}

impl From<String> for NodeId {
    fn from(val: String) -> Self {
        NodeId::Str(val)
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeId::Int(v) => write!(f, "NodeId({})", v),
            NodeId::Str(s) => write!(f, "NodeId({:?})", s),
        }
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeId::Int(v) => write!(f, "{}", v),
            NodeId::Str(s) => write!(f, "{}", s),
        }
    }
}

/// Edge identity: the ordered (source, destination) pair.
#[derive(Clone, Debug, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
pub struct EdgeKey {
    pub src: NodeId,
    pub dst: NodeId,
}

impl EdgeKey {
    pub fn new(src: impl Into<NodeId>, dst: impl Into<NodeId>) -> Self {
        Self {
            src: src.into(),
            dst: dst.into(),
        }
    }

    /// The same pair with endpoints swapped.
    pub fn reversed(&self) -> Self {
        Self {
            src: self.dst.clone(),
            dst: self.src.clone(),
        }
    }
}

impl fmt::Display for EdgeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{}", self.src, self.dst)
    }
}

/// Algorithm identity: the `(namespace, type)` pair naming a registered algorithm.
#[derive(Clone, Debug, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
pub struct AlgorithmId {
    pub namespace: String,
    #[serde(rename = "type")]
    pub algorithm_type: String,
}

impl AlgorithmId {
    pub fn new(namespace: impl Into<String>, algorithm_type: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            algorithm_type: algorithm_type.into(),
        }
    }

    /// Registry key: namespace and type joined by [`REGISTRY_KEY_SEPARATOR`].
    pub fn registry_key(&self) -> String {
        format!(
            "{}{}{}",
            self.namespace, REGISTRY_KEY_SEPARATOR, self.algorithm_type
        )
    }
}

impl fmt::Display for AlgorithmId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}",
            self.namespace, REGISTRY_KEY_SEPARATOR, self.algorithm_type
        )
    }
}
