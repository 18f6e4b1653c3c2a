use serde::{Deserialize, Serialize};

/// Primitive type of a scalar business field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScalarType {
    #[default]
    String,
    Number,
    Date,
    Boolean,
    Image,
    Signature,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Scalar(ScalarType),
    /// Repeated rows; children describe the columns by bare property name.
    ArrayOf(Vec<FieldDescriptor>),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    pub key: String,
    pub label: String,
    pub kind: FieldKind,
}

impl FieldDescriptor {
    pub fn scalar(key: &str, label: &str, ty: ScalarType) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            kind: FieldKind::Scalar(ty),
        }
    }

    pub fn string(key: &str, label: &str) -> Self {
        Self::scalar(key, label, ScalarType::String)
    }

    pub fn number(key: &str, label: &str) -> Self {
        Self::scalar(key, label, ScalarType::Number)
    }

    pub fn date(key: &str, label: &str) -> Self {
        Self::scalar(key, label, ScalarType::Date)
    }

    pub fn array(key: &str, label: &str, children: Vec<FieldDescriptor>) -> Self {
        debug_assert!(!children.is_empty(), "array field {key} needs at least one column");
        Self {
            key: key.to_string(),
            label: label.to_string(),
            kind: FieldKind::ArrayOf(children),
        }
    }

    pub fn is_array(&self) -> bool {
        matches!(self.kind, FieldKind::ArrayOf(_))
    }

    pub fn scalar_type(&self) -> Option<ScalarType> {
        match self.kind {
            FieldKind::Scalar(ty) => Some(ty),
            FieldKind::ArrayOf(_) => None,
        }
    }

    pub fn children(&self) -> &[FieldDescriptor] {
        match &self.kind {
            FieldKind::ArrayOf(children) => children,
            FieldKind::Scalar(_) => &[],
        }
    }

    /// Documentation path of a column, e.g. `operations.0.status`.
    pub fn row_path(&self, index: usize, child: &FieldDescriptor) -> String {
        format!("{}.{}.{}", self.key, index, child.key)
    }
}

/// A pickable variable: one per scalar field, one per array column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariableItem {
    pub key: String,
    pub label: String,
}

impl VariableItem {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentKindCatalog {
    pub kind: String,
    pub display_name: String,
    /// Code of the print template family this kind is filed under.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub print_code: Option<String>,
    pub fields: Vec<FieldDescriptor>,
}

impl DocumentKindCatalog {
    pub fn new(kind: &str, display_name: &str, fields: Vec<FieldDescriptor>) -> Self {
        Self {
            kind: kind.to_string(),
            display_name: display_name.to_string(),
            print_code: None,
            fields,
        }
    }

    pub fn with_print_code(mut self, code: &str) -> Self {
        self.print_code = Some(code.to_string());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_path_joins_parent_index_and_child() {
        let ops = FieldDescriptor::array(
            "operations",
            "工序列表",
            vec![FieldDescriptor::string("status", "工序状态")],
        );
        assert_eq!(ops.row_path(0, &ops.children()[0]), "operations.0.status");
        assert!(ops.is_array());
        assert_eq!(ops.scalar_type(), None);
    }

    #[test]
    fn scalar_has_no_children() {
        let code = FieldDescriptor::string("code", "工单编号");
        assert!(code.children().is_empty());
        assert_eq!(code.scalar_type(), Some(ScalarType::String));
    }
}
