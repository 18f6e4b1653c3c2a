use std::collections::BTreeSet;

use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

lazy_static! {
    pub(crate) static ref PLACEHOLDER: Regex = Regex::new(r"\{\{([^}]+)\}\}").expect("placeholder regex");
}

/// Variable names a stored template refers to, sorted and deduplicated.
///
/// Structured content (a JSON object with a `schemas` array) yields the
/// region names of every page. Anything else is scanned for `{{name}}`
/// placeholders.
pub fn extract_variables(content: &str) -> Vec<String> {
    if let Ok(json) = serde_json::from_str::<serde_json::Value>(content) {
        if let Some(pages) = json.get("schemas").and_then(serde_json::Value::as_array) {
            return pages
                .iter()
                .filter_map(serde_json::Value::as_array)
                .flatten()
                .filter_map(|region| region.get("name")?.as_str())
                .filter(|name| !name.is_empty())
                .map(str::to_string)
                .collect::<BTreeSet<_>>()
                .into_iter()
                .collect();
        }
    }
    debug!("no structured schemas, scanning placeholders");
    PLACEHOLDER
        .captures_iter(content)
        .filter_map(|cap| {
            let name = cap.get(1)?.as_str().trim();
            (!name.is_empty()).then(|| name.to_string())
        })
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
