//! Values.yaml parser.
//!
//! Loads the structured values and flattens them into dotted keys
//! (`image.repository`) for the values table.

use std::fmt;
use std::path::Path;

use serde::Serialize;
use serde_yaml::Value;

use crate::chart::comments::ValueDescriptions;
use crate::error::{HelmDocsError, Result};

/// Type column of the values table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueType {
    String,
    Int,
    Float,
    Bool,
    List,
    Object,
}

impl ValueType {
    /// Classify a YAML value. Nulls are documented as strings.
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null | Value::String(_) => ValueType::String,
            Value::Bool(_) => ValueType::Bool,
            Value::Number(n) if n.is_f64() => ValueType::Float,
            Value::Number(_) => ValueType::Int,
            Value::Sequence(_) => ValueType::List,
            Value::Mapping(_) => ValueType::Object,
            Value::Tagged(tagged) => ValueType::of(&tagged.value),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ValueType::String => "string",
            ValueType::Int => "int",
            ValueType::Float => "float",
            ValueType::Bool => "bool",
            ValueType::List => "list",
            ValueType::Object => "object",
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A leaf of the values tree.
#[derive(Debug, Clone, PartialEq)]
pub struct FlatValue {
    /// Dotted path from the root mapping.
    pub key: String,
    pub value_type: ValueType,
    pub value: Value,
}

/// Parse values.yaml content. An empty document is an empty mapping.
pub fn parse_values_yaml(content: &str, path: &Path) -> Result<Value> {
    if is_blank_document(content) {
        return Ok(Value::Mapping(serde_yaml::Mapping::new()));
    }

    let values: Value = serde_yaml::from_str(content).map_err(|e| HelmDocsError::yaml(path, e))?;
    match values {
        Value::Null => Ok(Value::Mapping(serde_yaml::Mapping::new())),
        Value::Mapping(map) => Ok(Value::Mapping(map)),
        other => Err(HelmDocsError::Yaml {
            path: path.to_path_buf(),
            line: None,
            message: format!(
                "expected a mapping at the top level, found {}",
                ValueType::of(&other)
            ),
        }),
    }
}

/// True for documents holding nothing but whitespace and comments.
pub(crate) fn is_blank_document(content: &str) -> bool {
    content.lines().all(|line| {
        let trimmed = line.trim();
        trimmed.is_empty() || trimmed.starts_with('#') || trimmed == "---"
    })
}

/// Parse values.yaml from a file path.
pub fn parse_values_yaml_file(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path).map_err(|e| HelmDocsError::io(path, e))?;
    parse_values_yaml(&content, path)
}

/// Flatten a values tree into leaves, in document order.
///
/// A mapping whose dotted key is documented is kept whole instead of being
/// descended into, so documenting `resources` yields a single `object` row.
pub fn flatten_values(values: &Value, descriptions: &ValueDescriptions) -> Vec<FlatValue> {
    let mut out = Vec::new();
    if let Value::Mapping(map) = values {
        for (key, value) in map {
            flatten_into(&key_text(key), value, descriptions, &mut out);
        }
    }
    out
}

fn flatten_into(
    prefix: &str,
    value: &Value,
    descriptions: &ValueDescriptions,
    out: &mut Vec<FlatValue>,
) {
    match value {
        Value::Mapping(map) if !map.is_empty() && !descriptions.contains_key(prefix) => {
            for (key, child) in map {
                let path = format!("{}.{}", prefix, key_text(key));
                flatten_into(&path, child, descriptions, out);
            }
        }
        _ => out.push(FlatValue {
            key: prefix.to_string(),
            value_type: ValueType::of(value),
            value: value.clone(),
        }),
    }
}

/// Mapping keys as they appear in dotted paths.
fn key_text(key: &Value) -> String {
    match key {
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Null => "null".to_string(),
        other => serde_yaml::to_string(other)
            .map(|s| s.trim_end().to_string())
            .unwrap_or_default(),
    }
}
