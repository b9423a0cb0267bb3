// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Typed option schemas shared by every algorithm.
//!
//! An algorithm declares an [`OptionsSchema`]; callers hand in a partial
//! [`Options`] object; resolution merges the layers, validates every value
//! against its [`OptionDefinition`] and produces a complete
//! [`ResolvedOptions`]. Any violation aborts resolution with
//! [`ArborError::OptionValidation`] naming the offending option.

use arbor_common::{ArborError, NodeId, OptionValue, Result};
use serde::Serialize;
use std::collections::BTreeMap;

/// Option type tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum OptionType {
    Number,
    Integer,
    Boolean,
    String,
    Select,
    NodeId,
}

/// One choice of a `select` option.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectOption {
    pub value: OptionValue,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<OptionValue>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Declaration of a single option: type, default and constraints.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionDefinition {
    #[serde(rename = "type")]
    pub option_type: OptionType,
    pub default: OptionValue,
    pub label: String,
    pub description: String,
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step: Option<f64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<SelectOption>,
    pub advanced: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
}

impl OptionDefinition {
    fn base(option_type: OptionType, default: OptionValue, label: &str, description: &str) -> Self {
        Self {
            option_type,
            default,
            label: label.to_string(),
            description: description.to_string(),
            required: false,
            min: None,
            max: None,
            step: None,
            options: Vec::new(),
            advanced: false,
            group: None,
        }
    }

    pub fn number(default: impl Into<OptionValue>, label: &str, description: &str) -> Self {
        Self::base(OptionType::Number, default.into(), label, description)
    }

    pub fn integer(default: impl Into<OptionValue>, label: &str, description: &str) -> Self {
        Self::base(OptionType::Integer, default.into(), label, description)
    }

    pub fn boolean(default: bool, label: &str, description: &str) -> Self {
        Self::base(OptionType::Boolean, default.into(), label, description)
    }

    pub fn string(default: impl Into<OptionValue>, label: &str, description: &str) -> Self {
        Self::base(OptionType::String, default.into(), label, description)
    }

    pub fn select(
        default: impl Into<OptionValue>,
        choices: Vec<SelectOption>,
        label: &str,
        description: &str,
    ) -> Self {
        let mut def = Self::base(OptionType::Select, default.into(), label, description);
        def.options = choices;
        def
    }

    /// A node id option without a default.
    pub fn node_id(label: &str, description: &str) -> Self {
        Self::base(OptionType::NodeId, OptionValue::Null, label, description)
    }

    pub fn min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    pub fn max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }

    pub fn step(mut self, step: f64) -> Self {
        self.step = Some(step);
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn advanced(mut self) -> Self {
        self.advanced = true;
        self
    }

    pub fn group(mut self, group: &str) -> Self {
        self.group = Some(group.to_string());
        self
    }
}

/// Ordered mapping from option name to definition.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct OptionsSchema {
    #[serde(serialize_with = "serialize_ordered")]
    entries: Vec<(String, OptionDefinition)>,
}

fn serialize_ordered<S: serde::Serializer>(
    entries: &[(String, OptionDefinition)],
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    use serde::ser::SerializeMap;
    let mut map = serializer.serialize_map(Some(entries.len()))?;
    for (name, def) in entries {
        map.serialize_entry(name, def)?;
    }
    map.end()
}

impl OptionsSchema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare an option. Redeclaring a name replaces the earlier definition.
    pub fn option(mut self, name: &str, definition: OptionDefinition) -> Self {
        if let Some(slot) = self.entries.iter_mut().find(|(n, _)| n == name) {
            slot.1 = definition;
        } else {
            self.entries.push((name.to_string(), definition));
        }
        self
    }

    pub fn get(&self, name: &str) -> Option<&OptionDefinition> {
        self.entries.iter().find(|(n, _)| n == name).map(|(_, d)| d)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &OptionDefinition)> {
        self.entries.iter().map(|(n, d)| (n.as_str(), d))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Schema defaults, one per declared option.
    pub fn defaults(&self) -> BTreeMap<String, OptionValue> {
        self.entries
            .iter()
            .map(|(n, d)| (n.clone(), d.default.clone()))
            .collect()
    }
}

/// A caller-supplied, possibly partial options object.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Options {
    values: BTreeMap<String, OptionValue>,
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(mut self, name: &str, value: impl Into<OptionValue>) -> Self {
        self.values.insert(name.to_string(), value.into());
        self
    }

    pub fn insert(&mut self, name: &str, value: impl Into<OptionValue>) {
        self.values.insert(name.to_string(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&OptionValue> {
        self.values.get(name)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &OptionValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Build from a plain JSON object.
    ///
    /// Arrays and nested objects have no option representation and are
    /// rejected with an option validation error for that key.
    pub fn from_json(value: &serde_json::Value) -> Result<Self> {
        let obj = value
            .as_object()
            .ok_or_else(|| ArborError::option("<options>", "expected a JSON object"))?;
        let mut options = Options::new();
        for (name, v) in obj {
            let ov = OptionValue::from_json(v).ok_or_else(|| {
                ArborError::option(name.as_str(), "expected a scalar (number, string, boolean or null)")
            })?;
            options.values.insert(name.clone(), ov);
        }
        Ok(options)
    }
}

impl<K: Into<String>, V: Into<OptionValue>> FromIterator<(K, V)> for Options {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Complete, validated options: every schema key is present.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ResolvedOptions {
    values: BTreeMap<String, OptionValue>,
}

impl ResolvedOptions {
    pub fn get(&self, name: &str) -> Option<&OptionValue> {
        self.values.get(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &OptionValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    fn value(&self, name: &str) -> Result<&OptionValue> {
        self.values.get(name).ok_or_else(|| ArborError::UnknownOption {
            option: name.to_string(),
        })
    }

    fn mismatch(name: &str, expected: &str, got: &OptionValue) -> ArborError {
        ArborError::option(name, format!("expected {}, got {}", expected, got.kind()))
    }

    pub fn get_f64(&self, name: &str) -> Result<f64> {
        let v = self.value(name)?;
        v.as_f64().ok_or_else(|| Self::mismatch(name, "number", v))
    }

    pub fn get_opt_f64(&self, name: &str) -> Result<Option<f64>> {
        match self.value(name)? {
            OptionValue::Null => Ok(None),
            v => v.as_f64().map(Some).ok_or_else(|| Self::mismatch(name, "number", v)),
        }
    }

    pub fn get_usize(&self, name: &str) -> Result<usize> {
        let v = self.get_f64(name)?;
        if v < 0.0 {
            return Err(ArborError::option(name, format!("must be >= 0, got {}", v)));
        }
        Ok(v as usize)
    }

    pub fn get_opt_usize(&self, name: &str) -> Result<Option<usize>> {
        match self.get_opt_f64(name)? {
            Some(v) if v < 0.0 => Err(ArborError::option(name, format!("must be >= 0, got {}", v))),
            Some(v) => Ok(Some(v as usize)),
            None => Ok(None),
        }
    }

    pub fn get_u64(&self, name: &str) -> Result<u64> {
        Ok(self.get_usize(name)? as u64)
    }

    pub fn get_bool(&self, name: &str) -> Result<bool> {
        let v = self.value(name)?;
        v.as_bool().ok_or_else(|| Self::mismatch(name, "boolean", v))
    }

    pub fn get_str(&self, name: &str) -> Result<&str> {
        let v = self.value(name)?;
        v.as_str().ok_or_else(|| Self::mismatch(name, "string", v))
    }

    pub fn get_opt_str(&self, name: &str) -> Result<Option<&str>> {
        match self.value(name)? {
            OptionValue::Null => Ok(None),
            v => v.as_str().map(Some).ok_or_else(|| Self::mismatch(name, "string", v)),
        }
    }

    pub fn get_node_id(&self, name: &str) -> Result<Option<NodeId>> {
        match self.value(name)? {
            OptionValue::Null => Ok(None),
            v => v
                .as_node_id()
                .map(Some)
                .ok_or_else(|| Self::mismatch(name, "node id", v)),
        }
    }
}

/// Validate one value against its definition.
///
/// `Null` stands for an absent value and passes unless the option is required.
pub fn validate_option(name: &str, value: &OptionValue, definition: &OptionDefinition) -> Result<()> {
    if value.is_null() {
        if definition.required {
            return Err(ArborError::option(name, "is required"));
        }
        return Ok(());
    }

    match definition.option_type {
        OptionType::Number | OptionType::Integer => {
            let v = match value {
                OptionValue::Number(v) => *v,
                other => {
                    return Err(ArborError::option(
                        name,
                        format!("expected a number, got {}", other.kind()),
                    ));
                }
            };
            if v.is_nan() {
                return Err(ArborError::option(name, "must be a number, got NaN"));
            }
            if v.is_infinite() {
                return Err(ArborError::option(name, format!("must be finite, got {}", v)));
            }
            if definition.option_type == OptionType::Integer && v.fract() != 0.0 {
                return Err(ArborError::option(name, format!("must be an integer, got {}", v)));
            }
            if let Some(min) = definition.min
                && v < min
            {
                return Err(ArborError::option(name, format!("must be >= {}, got {}", min, v)));
            }
            if let Some(max) = definition.max
                && v > max
            {
                return Err(ArborError::option(name, format!("must be <= {}, got {}", max, v)));
            }
            Ok(())
        }
        OptionType::Boolean => match value {
            OptionValue::Bool(_) => Ok(()),
            other => Err(ArborError::option(
                name,
                format!("expected a boolean, got {}", other.kind()),
            )),
        },
        OptionType::String => match value {
            OptionValue::String(_) => Ok(()),
            other => Err(ArborError::option(
                name,
                format!("expected a string, got {}", other.kind()),
            )),
        },
        OptionType::Select => {
            if definition.options.is_empty() {
                return Err(ArborError::option(name, "select option declares no choices"));
            }
            if definition.options.iter().any(|choice| &choice.value == value) {
                Ok(())
            } else {
                let allowed: Vec<String> =
                    definition.options.iter().map(|c| c.value.to_string()).collect();
                Err(ArborError::option(
                    name,
                    format!("must be one of [{}], got {}", allowed.join(", "), value),
                ))
            }
        }
        OptionType::NodeId => match value {
            OptionValue::String(_) => Ok(()),
            OptionValue::Number(v) if v.is_finite() => Ok(()),
            OptionValue::Number(v) => Err(ArborError::option(
                name,
                format!("node id must be finite, got {}", v),
            )),
            other => Err(ArborError::option(
                name,
                format!("expected a node id (string or number), got {}", other.kind()),
            )),
        },
    }
}

/// Option sources, highest precedence first.
#[derive(Debug, Clone, Copy)]
pub struct OptionLayers<'a> {
    /// Legacy `configure()` overrides.
    pub legacy: Option<&'a Options>,
    /// Options supplied at construction.
    pub provided: &'a Options,
    /// Global defaults, consulted only when the schema default is null.
    pub global: Option<&'a BTreeMap<String, OptionValue>>,
}

/// Merge `provided` over the schema defaults and validate every value.
pub fn resolve_options(schema: &OptionsSchema, provided: &Options) -> Result<ResolvedOptions> {
    resolve_layered(
        schema,
        OptionLayers {
            legacy: None,
            provided,
            global: None,
        },
    )
}

/// Non-null value of `name` in one layer.
fn pick<'o>(options: Option<&'o Options>, name: &str) -> Option<&'o OptionValue> {
    options.and_then(|o| o.get(name)).filter(|v| !v.is_null())
}

/// Resolve with explicit precedence:
/// legacy override > provided > schema default > global default.
pub fn resolve_layered(schema: &OptionsSchema, layers: OptionLayers<'_>) -> Result<ResolvedOptions> {
    for (name, _) in layers.provided.iter() {
        if !schema.contains(name) {
            log::warn!("Ignoring option '{}': not declared by the algorithm schema", name);
        }
    }

    let mut values = BTreeMap::new();
    for (name, definition) in schema.iter() {
        let value = pick(layers.legacy, name)
            .or_else(|| pick(Some(layers.provided), name))
            .or_else(|| Some(&definition.default).filter(|v| !v.is_null()))
            .or_else(|| layers.global.and_then(|g| g.get(name)))
            .cloned()
            .unwrap_or(OptionValue::Null);

        validate_option(name, &value, definition)?;
        values.insert(name.to_string(), value);
    }

    Ok(ResolvedOptions { values })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn damping() -> OptionDefinition {
        OptionDefinition::number(0.85, "Damping", "Probability of following a link")
            .min(0.0)
            .max(1.0)
            .step(0.05)
    }

    fn schema() -> OptionsSchema {
        OptionsSchema::new()
            .option("dampingFactor", damping())
            .option(
                "maxIterations",
                OptionDefinition::integer(100, "Max iterations", "Iteration cap")
                    .min(1.0)
                    .max(1000.0),
            )
            .option("normalized", OptionDefinition::boolean(true, "Normalize", ""))
            .option(
                "direction",
                OptionDefinition::select(
                    "out",
                    vec![SelectOption::new("in", "In"), SelectOption::new("out", "Out")],
                    "Direction",
                    "",
                ),
            )
            .option("source", OptionDefinition::node_id("Source", ""))
    }

    fn reason(err: ArborError) -> (String, String) {
        match err {
            ArborError::OptionValidation { option, reason } => (option, reason),
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let def = damping();
        assert!(validate_option("d", &OptionValue::from(0.0), &def).is_ok());
        assert!(validate_option("d", &OptionValue::from(1.0), &def).is_ok());

        let (_, r) = reason(validate_option("d", &OptionValue::from(-1.0), &def).unwrap_err());
        assert!(r.contains(">= 0"), "{r}");
        let (_, r) = reason(validate_option("d", &OptionValue::from(2.0), &def).unwrap_err());
        assert!(r.contains("<= 1"), "{r}");
    }

    #[test]
    fn test_nan_and_infinity_have_distinct_messages() {
        let def = damping();
        let (_, nan) = reason(validate_option("d", &OptionValue::from(f64::NAN), &def).unwrap_err());
        let (_, inf) =
            reason(validate_option("d", &OptionValue::from(f64::INFINITY), &def).unwrap_err());
        assert!(nan.contains("NaN"));
        assert!(inf.contains("finite"));
        assert_ne!(nan, inf);
    }

    #[test]
    fn test_integer_rejects_fraction() {
        let def = OptionDefinition::integer(1, "n", "");
        assert!(validate_option("n", &OptionValue::from(3.0), &def).is_ok());
        let (_, r) = reason(validate_option("n", &OptionValue::from(3.5), &def).unwrap_err());
        assert!(r.contains("integer"));
    }

    #[test]
    fn test_strict_types() {
        let b = OptionDefinition::boolean(true, "b", "");
        assert!(validate_option("b", &OptionValue::from("true"), &b).is_err());
        let s = OptionDefinition::string("x", "s", "");
        assert!(validate_option("s", &OptionValue::from(1.0), &s).is_err());
        let n = OptionDefinition::number(1.0, "n", "");
        assert!(validate_option("n", &OptionValue::from("1"), &n).is_err());
    }

    #[test]
    fn test_select() {
        let s = schema();
        let def = s.get("direction").unwrap();
        assert!(validate_option("direction", &OptionValue::from("in"), def).is_ok());
        let (_, r) =
            reason(validate_option("direction", &OptionValue::from("sideways"), def).unwrap_err());
        assert!(r.contains("one of"));

        let empty = OptionDefinition::select("a", Vec::new(), "x", "");
        assert!(validate_option("x", &OptionValue::from("a"), &empty).is_err());
    }

    #[test]
    fn test_node_id_accepts_string_or_number() {
        let def = OptionDefinition::node_id("Source", "");
        assert!(validate_option("s", &OptionValue::from("a"), &def).is_ok());
        assert!(validate_option("s", &OptionValue::from(3), &def).is_ok());
        assert!(validate_option("s", &OptionValue::from(true), &def).is_err());
    }

    #[test]
    fn test_required() {
        let def = OptionDefinition::node_id("Source", "").required();
        let (_, r) = reason(validate_option("source", &OptionValue::Null, &def).unwrap_err());
        assert!(r.contains("required"));
        let optional = OptionDefinition::node_id("Target", "");
        assert!(validate_option("target", &OptionValue::Null, &optional).is_ok());
    }

    #[test]
    fn test_resolve_empty_gives_defaults() {
        let s = schema();
        let resolved = resolve_options(&s, &Options::new()).unwrap();
        assert_eq!(resolved.len(), s.len());
        for (name, def) in s.iter() {
            assert_eq!(resolved.get(name), Some(&def.default));
        }
    }

    #[test]
    fn test_resolve_reports_offending_key() {
        let err = resolve_options(&schema(), &Options::new().set("dampingFactor", 1.5)).unwrap_err();
        let (option, r) = reason(err);
        assert_eq!(option, "dampingFactor");
        assert!(r.contains("<= 1"));
    }

    #[test]
    fn test_layer_precedence() {
        let s = schema();
        let provided = Options::new().set("maxIterations", 10);
        let legacy = Options::new().set("maxIterations", 20);
        let global: BTreeMap<String, OptionValue> =
            [("source".to_string(), OptionValue::from("g"))].into_iter().collect();

        let resolved = resolve_layered(
            &s,
            OptionLayers {
                legacy: Some(&legacy),
                provided: &provided,
                global: Some(&global),
            },
        )
        .unwrap();
        assert_eq!(resolved.get_usize("maxIterations").unwrap(), 20);
        // Schema default wins over global default.
        assert_eq!(resolved.get_f64("dampingFactor").unwrap(), 0.85);
        // Global default only fills a null schema default.
        assert_eq!(resolved.get_node_id("source").unwrap(), Some(NodeId::from("g")));
    }

    #[test]
    fn test_null_layer_value_falls_through() {
        let s = schema();
        let provided = Options::new()
            .set("maxIterations", 10)
            .set("dampingFactor", 0.5);
        let legacy = Options::new()
            .set("maxIterations", OptionValue::Null)
            .set("normalized", false);

        let resolved = resolve_layered(
            &s,
            OptionLayers {
                legacy: Some(&legacy),
                provided: &provided,
                global: None,
            },
        )
        .unwrap();
        assert_eq!(resolved.get_usize("maxIterations").unwrap(), 10);
        assert_eq!(resolved.get_f64("dampingFactor").unwrap(), 0.5);
        assert!(!resolved.get_bool("normalized").unwrap());
        assert_eq!(resolved.get_str("direction").unwrap(), "out");
    }

    #[test]
    fn test_typed_getters() {
        let resolved = resolve_options(&schema(), &Options::new().set("source", 7)).unwrap();
        assert_eq!(resolved.get_node_id("source").unwrap(), Some(NodeId::Int(7)));
        assert!(resolved.get_bool("normalized").unwrap());
        assert_eq!(resolved.get_str("direction").unwrap(), "out");
        assert!(matches!(
            resolved.get_f64("nope"),
            Err(ArborError::UnknownOption { .. })
        ));
    }

    #[test]
    fn test_from_json() {
        let json = serde_json::json!({ "dampingFactor": 0.5, "source": "a" });
        let opts = Options::from_json(&json).unwrap();
        assert_eq!(opts.get("dampingFactor"), Some(&OptionValue::Number(0.5)));
        assert!(Options::from_json(&serde_json::json!({ "x": [1] })).is_err());
        assert!(Options::from_json(&serde_json::json!(3)).is_err());
    }

    #[test]
    fn test_schema_serializes_in_declaration_order() {
        let json = serde_json::to_string(&schema()).unwrap();
        let damping = json.find("dampingFactor").unwrap();
        let iterations = json.find("maxIterations").unwrap();
        assert!(damping < iterations);
        assert!(json.contains(r#""type":"number""#));
    }
}
