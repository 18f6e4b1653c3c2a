use serde::{Deserialize, Serialize};

use crate::field::FieldDescriptor;

/// Rows shown for an array table when the config does not say otherwise.
pub const DEFAULT_MAX_ROWS: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableColumn {
    pub key: String,
    pub label: String,
}

impl TableColumn {
    pub fn new(key: &str, label: &str) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
        }
    }
}

/// Renders an array field as a single table region instead of one text
/// region per documented row path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArrayTableConfig {
    pub array_key: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_rows: Option<usize>,
    pub columns: Vec<TableColumn>,
}

impl ArrayTableConfig {
    /// Columns mirror the field's children in declaration order.
    pub fn from_field(field: &FieldDescriptor) -> Option<Self> {
        if !field.is_array() {
            return None;
        }
        Some(Self {
            array_key: field.key.clone(),
            label: field.label.clone(),
            max_rows: None,
            columns: field
                .children()
                .iter()
                .map(|c| TableColumn::new(&c.key, &c.label))
                .collect(),
        })
    }

    pub fn max_rows_or_default(&self) -> usize {
        self.max_rows.unwrap_or(DEFAULT_MAX_ROWS)
    }

    pub fn head(&self) -> Vec<String> {
        self.columns.iter().map(|c| c.label.clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::FieldDescriptor;

    fn items() -> ArrayTableConfig {
        ArrayTableConfig {
            array_key: "items".to_string(),
            label: "明细列表".to_string(),
            max_rows: Some(2),
            columns: vec![
                TableColumn::new("material_code", "物料编码"),
                TableColumn::new("qty", "数量"),
            ],
        }
    }

    #[test]
    fn explicit_max_rows_wins() {
        assert_eq!(items().max_rows_or_default(), 2);
        assert_eq!(items().head(), vec!["物料编码", "数量"]);
    }

    #[test]
    fn derived_config_follows_children() {
        let field = FieldDescriptor::array(
            "items",
            "明细列表",
            vec![
                FieldDescriptor::string("material_code", "物料编码"),
                FieldDescriptor::number("qty", "数量"),
            ],
        );
        let cfg = ArrayTableConfig::from_field(&field).unwrap();
        assert_eq!(cfg.head(), vec!["物料编码", "数量"]);
        assert_eq!(cfg.max_rows_or_default(), DEFAULT_MAX_ROWS);
        assert!(ArrayTableConfig::from_field(&FieldDescriptor::string("code", "x")).is_none());
    }
}
