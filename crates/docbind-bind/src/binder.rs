use docbind_core::{RegionKind, Template, Value};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::projection::TableProjection;

/// What the renderer receives for one region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum InputValue {
    Text(String),
    Rows(Vec<Vec<String>>),
}

impl InputValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Rows(_) => None,
        }
    }

    pub fn as_rows(&self) -> Option<&[Vec<String>]> {
        match self {
            Self::Rows(rows) => Some(rows),
            Self::Text(_) => None,
        }
    }
}

/// Region name to renderer input, in template order.
pub type RenderInputs = IndexMap<String, InputValue>;

/// Binds `object` to the regions on page 0 of `template`.
///
/// Always returns exactly one input set. Regions whose value is missing or
/// `null` are left out rather than written as empty text, and top-level
/// scalar fields of `object` that no region claimed are appended afterwards.
pub fn bind(template: &Template, object: &Value) -> Vec<RenderInputs> {
    let mut inputs = RenderInputs::new();

    for region in template.first_page() {
        if region.name.is_empty() {
            continue;
        }
        let value = lookup(object, &region.name);
        match &region.kind {
            RegionKind::Table => {
                let rows = match value {
                    Some(Value::Seq(items)) => {
                        let projection = TableProjection::for_region(&region.name);
                        trace!(name = %region.name, ?projection, rows = items.len(), "table rows");
                        projection.rows(items)
                    }
                    Some(other) => {
                        debug!(name = %region.name, got = ?other, "table value is not an array");
                        Vec::new()
                    }
                    None => Vec::new(),
                };
                inputs.insert(region.name.clone(), InputValue::Rows(rows));
            }
            RegionKind::Text
            | RegionKind::Barcode(_)
            | RegionKind::Signature
            | RegionKind::Other(_) => {
                if let Some(v) = value {
                    inputs.insert(region.name.clone(), InputValue::Text(v.to_text()));
                }
            }
        }
    }

    if let Some(fields) = object.as_map() {
        for (key, v) in fields {
            if v.is_null() || matches!(v, Value::Seq(_)) || inputs.contains_key(key) {
                continue;
            }
            inputs.insert(key.clone(), InputValue::Text(v.to_text()));
        }
    }

    vec![inputs]
}

/// A literal top-level key wins; otherwise the name is read as a dotted
/// path. `Null` counts as missing.
fn lookup<'a>(object: &'a Value, name: &str) -> Option<&'a Value> {
    let direct = object.as_map().and_then(|m| m.get(name)).filter(|v| !v.is_null());
    direct
        .or_else(|| object.resolve(name))
        .filter(|v| !v.is_null())
}
