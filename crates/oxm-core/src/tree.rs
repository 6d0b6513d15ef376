use serde_yaml::Value;
use std::fmt;

/// Type tag for a document tree node, used by diagnostics and traversal
/// decisions. Number nodes split into integer and float because only the
/// former can carry example data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Null,
    Bool,
    Integer,
    Float,
    String,
    Sequence,
    Mapping,
    Tagged,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NodeKind::Null => "null",
            NodeKind::Bool => "boolean",
            NodeKind::Integer => "integer",
            NodeKind::Float => "float",
            NodeKind::String => "string",
            NodeKind::Sequence => "sequence",
            NodeKind::Mapping => "mapping",
            NodeKind::Tagged => "tagged",
        };
        f.write_str(name)
    }
}

pub fn kind_of(value: &Value) -> NodeKind {
    match value {
        Value::Null => NodeKind::Null,
        Value::Bool(_) => NodeKind::Bool,
        Value::Number(n) => {
            if n.is_f64() {
                NodeKind::Float
            } else {
                NodeKind::Integer
            }
        }
        Value::String(_) => NodeKind::String,
        Value::Sequence(_) => NodeKind::Sequence,
        Value::Mapping(_) => NodeKind::Mapping,
        Value::Tagged(_) => NodeKind::Tagged,
    }
}

/// String form of a scalar mapping key; None for collection-typed keys,
/// which never participate in matching.
fn scalar_key_string(key: &Value) -> Option<String> {
    match key {
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Null => Some("null".to_string()),
        Value::Sequence(_) | Value::Mapping(_) | Value::Tagged(_) => None,
    }
}

/// Recursively convert scalar mapping keys to their string form.
///
/// YAML resolves keys like `200:` or `true:` to numbers and booleans, but
/// extraction and merge match on string keys throughout. Run this on every
/// loaded document before handing it to the extractor or merger. Collection
/// keys are left untouched.
pub fn normalize_keys(value: &mut Value) {
    match value {
        Value::Mapping(map) => {
            let entries = std::mem::take(map);
            for (mut key, mut child) in entries {
                normalize_keys(&mut child);
                if !key.is_string() {
                    if let Some(s) = scalar_key_string(&key) {
                        key = Value::String(s);
                    }
                }
                map.insert(key, child);
            }
        }
        Value::Sequence(items) => {
            for item in items.iter_mut() {
                normalize_keys(item);
            }
        }
        Value::Tagged(tagged) => normalize_keys(&mut tagged.value),
        Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => {}
    }
}
