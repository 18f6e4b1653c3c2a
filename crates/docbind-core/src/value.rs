use indexmap::IndexMap;
use serde::{Deserialize, Serialize, Serializer};

use crate::error::Error;

/// Runtime business data handed to the binder.
///
/// Maps keep insertion order so generic table projection follows the
/// source object's key order.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Seq(Vec<Value>),
    Map(IndexMap<String, Value>),
}

impl Value {
    #[must_use]
    pub fn as_map(&self) -> Option<&IndexMap<String, Value>> {
        match self {
            Value::Map(m) => Some(m),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_seq(&self) -> Option<&[Value]> {
        match self {
            Value::Seq(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Walks a dotted path such as `operations.1.status`.
    ///
    /// Maps descend by key and sequences by all-digit index; a numeric
    /// segment against a map is an ordinary key lookup. Hitting `Null`
    /// part-way, a missing key, an out-of-range index or a scalar yields
    /// `None`.
    #[must_use]
    pub fn resolve(&self, path: &str) -> Option<&Value> {
        let mut current = self;
        for seg in path.split('.') {
            current = match current {
                Value::Null => return None,
                Value::Map(m) => m.get(seg)?,
                Value::Seq(seq) if is_index(seg) => seq.get(seg.parse::<usize>().ok()?)?,
                _ => return None,
            };
        }
        Some(current)
    }

    /// Renderer-facing text for this value. `Null` becomes the empty string;
    /// callers that must omit nulls check [`Value::is_null`] first.
    #[must_use]
    pub fn to_text(&self) -> String {
        match self {
            Value::Null => String::new(),
            Value::Bool(b) => b.to_string(),
            Value::Number(n) => format_number(*n),
            Value::String(s) => s.clone(),
            Value::Seq(_) | Value::Map(_) => self.to_json_compact_string(),
        }
    }

    /// Integral numbers come out as JSON integers (`1`, not `1.0`).
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        match self {
            Value::Null => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(*b),
            Value::Number(n) => {
                if is_integral(*n) {
                    serde_json::Value::from(*n as i64)
                } else {
                    serde_json::Number::from_f64(*n)
                        .map(serde_json::Value::Number)
                        .unwrap_or(serde_json::Value::Null)
                }
            }
            Value::String(s) => serde_json::Value::String(s.clone()),
            Value::Seq(seq) => serde_json::Value::Array(seq.iter().map(Self::to_json_value).collect()),
            Value::Map(m) => serde_json::Value::Object(
                m.iter()
                    .map(|(k, v)| (k.clone(), v.to_json_value()))
                    .collect(),
            ),
        }
    }

    #[must_use]
    pub fn to_json_compact_string(&self) -> String {
        self.to_json_value().to_string()
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self, Error> {
        let v: serde_yaml::Value = serde_yaml::from_str(yaml)?;
        Self::try_from_yaml_value(&v)
    }

    fn try_from_yaml_value(v: &serde_yaml::Value) -> Result<Self, Error> {
        Ok(match v {
            serde_yaml::Value::Null => Value::Null,
            serde_yaml::Value::Bool(b) => Value::Bool(*b),
            serde_yaml::Value::Number(n) => Value::Number(
                n.as_f64()
                    .or_else(|| n.as_i64().map(|i| i as f64))
                    .or_else(|| n.as_u64().map(|u| u as f64))
                    .ok_or(Error::YamlNumber)?,
            ),
            serde_yaml::Value::String(s) => Value::String(s.clone()),
            serde_yaml::Value::Sequence(seq) => Value::Seq(
                seq.iter()
                    .map(Self::try_from_yaml_value)
                    .collect::<Result<_, _>>()?,
            ),
            serde_yaml::Value::Mapping(map) => {
                let mut out = IndexMap::new();
                for (k, vv) in map {
                    let key = match k {
                        serde_yaml::Value::String(key) => key.clone(),
                        serde_yaml::Value::Number(n) => n.to_string(),
                        _ => return Err(Error::NonStringKey),
                    };
                    out.insert(key, Self::try_from_yaml_value(vv)?);
                }
                Value::Map(out)
            }
            serde_yaml::Value::Tagged(_) => return Err(Error::UnsupportedYamlValue),
        })
    }

    pub fn try_from_json_str(s: &str) -> Result<Self, Error> {
        let v: serde_json::Value =
            serde_json::from_str(s).map_err(|e| Error::Json(e.to_string()))?;
        Ok(Self::from_json_value(&v))
    }

    #[must_use]
    pub fn from_json_value(v: &serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(*b),
            serde_json::Value::Number(n) => Value::Number(n.as_f64().unwrap_or(0.0)),
            serde_json::Value::String(s) => Value::String(s.clone()),
            serde_json::Value::Array(a) => {
                Value::Seq(a.iter().map(Self::from_json_value).collect())
            }
            serde_json::Value::Object(o) => {
                let mut m = IndexMap::new();
                for (k, v) in o {
                    m.insert(k.clone(), Self::from_json_value(v));
                }
                Value::Map(m)
            }
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json_value().serialize(serializer)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n as f64)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        Value::from_json_value(&v)
    }
}

fn is_index(seg: &str) -> bool {
    !seg.is_empty() && seg.bytes().all(|b| b.is_ascii_digit())
}

// 2^53: beyond this f64 no longer holds every integer exactly.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_992.0;

fn is_integral(n: f64) -> bool {
    n.is_finite() && n.fract() == 0.0 && n.abs() <= MAX_SAFE_INTEGER
}

/// Formats a number the way the renderer expects to see it typed in:
/// `1` rather than `1.0`, shortest round-trip digits otherwise.
#[must_use]
pub fn format_number(n: f64) -> String {
    if is_integral(n) {
        (n as i64).to_string()
    } else if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        let text = if n > 0.0 { "Infinity" } else { "-Infinity" };
        text.to_string()
    } else {
        n.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(j: serde_json::Value) -> Value {
        Value::from_json_value(&j)
    }

    #[test]
    fn resolves_nested_map_and_index() {
        let obj = v(serde_json::json!({
            "operations": [{ "status": "pending" }, { "status": "done" }]
        }));
        assert_eq!(
            obj.resolve("operations.1.status"),
            Some(&Value::String("done".to_string()))
        );
    }

    #[test]
    fn numeric_segment_on_map_is_key_lookup() {
        let obj = v(serde_json::json!({ "rows": { "0": "zero", "first": "a" } }));
        assert_eq!(obj.resolve("rows.0"), Some(&Value::String("zero".to_string())));
        assert_eq!(obj.resolve("rows.1"), None);
    }

    #[test]
    fn non_digit_segment_on_seq_is_none() {
        let obj = v(serde_json::json!({ "items": ["a", "b"] }));
        assert_eq!(obj.resolve("items.first"), None);
        assert_eq!(obj.resolve("items.-1"), None);
        assert_eq!(obj.resolve("items.1"), Some(&Value::String("b".to_string())));
    }

    #[test]
    fn null_mid_path_short_circuits() {
        let obj = v(serde_json::json!({ "a": null }));
        assert_eq!(obj.resolve("a"), Some(&Value::Null));
        assert_eq!(obj.resolve("a.b"), None);
    }

    #[test]
    fn text_formatting_matches_renderer_expectations() {
        assert_eq!(Value::Number(1.0).to_text(), "1");
        assert_eq!(Value::Number(-0.0).to_text(), "0");
        assert_eq!(Value::Number(1.5).to_text(), "1.5");
        assert_eq!(Value::Bool(false).to_text(), "false");
        assert_eq!(Value::Null.to_text(), "");
        assert_eq!(
            v(serde_json::json!({ "a": 1, "b": [true, "x"] })).to_text(),
            r#"{"a":1,"b":[true,"x"]}"#
        );
    }

    #[test]
    fn json_keeps_key_order() {
        let obj = Value::try_from_json_str(r#"{"z": 1, "a": 2, "m": 3}"#).unwrap();
        let keys: Vec<_> = obj.as_map().unwrap().keys().cloned().collect();
        assert_eq!(keys, vec!["z", "a", "m"]);
    }

    #[test]
    fn yaml_numeric_keys_become_strings() {
        let obj = Value::from_yaml_str("rows:\n  0: first\n").unwrap();
        assert_eq!(obj.resolve("rows.0"), Some(&Value::String("first".to_string())));
    }
}
