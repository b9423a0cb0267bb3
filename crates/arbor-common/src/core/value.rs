// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Option values.
//!
//! Unlike `serde_json::Value`, an [`OptionValue`] can hold `NaN` and the
//! infinities so that option validation can reject them explicitly instead of
//! having them silently collapse to `null` at the JSON boundary.

use crate::core::id::NodeId;
use serde::{Serialize, Serializer};
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum OptionValue {
    Null,
    Bool(bool),
    Number(f64),
    String(String),
}

impl OptionValue {
    pub fn is_null(&self) -> bool {
        matches!(self, OptionValue::Null)
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            OptionValue::Number(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            OptionValue::Bool(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            OptionValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Interpret the value as a node id (strings and numbers only).
    pub fn as_node_id(&self) -> Option<NodeId> {
        match self {
            OptionValue::String(s) => Some(NodeId::Str(s.clone())),
            OptionValue::Number(v) => Some(NodeId::from_f64(*v)),
            _ => None,
        }
    }

    /// Short type name used in validation messages.
    pub fn kind(&self) -> &'static str {
        match self {
            OptionValue::Null => "null",
            OptionValue::Bool(_) => "boolean",
            OptionValue::Number(_) => "number",
            OptionValue::String(_) => "string",
        }
    }

    /// Convert from JSON. Arrays and objects have no option representation.
    pub fn from_json(value: &serde_json::Value) -> Option<Self> {
        match value {
            serde_json::Value::Null => Some(OptionValue::Null),
            serde_json::Value::Bool(b) => Some(OptionValue::Bool(*b)),
            serde_json::Value::Number(n) => n.as_f64().map(OptionValue::Number),
            serde_json::Value::String(s) => Some(OptionValue::String(s.clone())),
            serde_json::Value::Array(_) | serde_json::Value::Object(_) => None,
        }
    }

    /// JSON form; non-finite numbers become `null`.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            OptionValue::Null => serde_json::Value::Null,
            OptionValue::Bool(b) => serde_json::Value::Bool(*b),
            OptionValue::Number(v) => serde_json::Number::from_f64(*v)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            OptionValue::String(s) => serde_json::Value::String(s.clone()),
        }
    }
}

impl Serialize for OptionValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionValue::Null => write!(f, "null"),
            OptionValue::Bool(b) => write!(f, "{}", b),
            OptionValue::Number(v) => write!(f, "{}", v),
            OptionValue::String(s) => write!(f, "{:?}", s),
        }
    }
}

impl From<f64> for OptionValue {
    fn from(val: f64) -> Self {
        OptionValue::Number(val)
    }
}

impl From<i64> for OptionValue {
    fn from(val: i64) -> Self {
        OptionValue::Number(val as f64)
    }
}

impl From<i32> for OptionValue {
    fn from(val: i32) -> Self {
        OptionValue::Number(val as f64)
    }
}

impl From<usize> for OptionValue {
    fn from(val: usize) -> Self {
        OptionValue::Number(val as f64)
    }
}

impl From<bool> for OptionValue {
    fn from(val: bool) -> Self {
        OptionValue::Bool(val)
    }
}

impl From<&str> for OptionValue {
    fn from(val: &str) -> Self {
        OptionValue::String(val.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(val: String) -> Self {
        OptionValue::String(val)
    }
}

impl From<NodeId> for OptionValue {
    fn from(val: NodeId) -> Self {
        match val {
            NodeId::Int(v) => OptionValue::Number(v as f64),
            NodeId::Str(s) => OptionValue::String(s),
        }
    }
}

impl<T: Into<OptionValue>> From<Option<T>> for OptionValue {
    fn from(val: Option<T>) -> Self {
        val.map_or(OptionValue::Null, Into::into)
    }
}
