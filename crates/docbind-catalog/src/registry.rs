use indexmap::IndexMap;
use tracing::trace;

use crate::builtin;
use crate::field::{DocumentKindCatalog, FieldDescriptor, VariableItem};
use crate::tables::ArrayTableConfig;
use crate::CatalogError;

/// Every document-kind catalog plus the shared `common` fields.
///
/// Built once and handed to whoever needs it; nothing here is global.
#[derive(Debug, Clone)]
pub struct Catalogs {
    kinds: IndexMap<String, DocumentKindCatalog>,
    common: DocumentKindCatalog,
    tables: IndexMap<String, Vec<ArrayTableConfig>>,
}

impl Catalogs {
    pub fn new(
        kinds: impl IntoIterator<Item = DocumentKindCatalog>,
        common: DocumentKindCatalog,
    ) -> Self {
        Self {
            kinds: kinds.into_iter().map(|c| (c.kind.clone(), c)).collect(),
            common,
            tables: IndexMap::new(),
        }
    }

    pub fn builtin() -> Self {
        let mut catalogs = Self::new(builtin::kinds(), builtin::common());
        for (kind, config) in builtin::tables() {
            catalogs = catalogs.with_table(kind, config);
        }
        catalogs
    }

    /// Registers a table layout for one array field of `kind`.
    pub fn with_table(mut self, kind: &str, config: ArrayTableConfig) -> Self {
        let configs = self.tables.entry(kind.to_string()).or_default();
        configs.retain(|c| c.array_key != config.array_key);
        configs.push(config);
        self
    }

    /// Document kinds in registration order, without `common`.
    pub fn list(&self) -> impl Iterator<Item = &DocumentKindCatalog> {
        self.kinds.values()
    }

    pub fn get(&self, kind: &str) -> Result<&DocumentKindCatalog, CatalogError> {
        self.kinds.get(kind).ok_or_else(|| CatalogError::UnknownKind {
            kind: kind.to_string(),
        })
    }

    pub fn common(&self) -> &DocumentKindCatalog {
        &self.common
    }

    pub fn print_code(&self, kind: &str) -> Option<&str> {
        self.kinds.get(kind)?.print_code.as_deref()
    }

    /// The kind's own fields followed by the common fields, unrenamed.
    pub fn flatten(&self, kind: &str) -> Result<Vec<&FieldDescriptor>, CatalogError> {
        let catalog = self.get(kind)?;
        Ok(catalog.fields.iter().chain(&self.common.fields).collect())
    }

    /// Pickable variables for `kind`. Array fields contribute their columns
    /// at row 0 (`items.0.material_code`) and never themselves.
    pub fn variable_items(&self, kind: &str) -> Result<Vec<VariableItem>, CatalogError> {
        Ok(variable_items_of(self.flatten(kind)?))
    }

    /// Table layouts for every array field of `kind`: registered overrides
    /// first, then ones derived from the remaining array fields.
    pub fn array_tables(&self, kind: &str) -> Result<Vec<ArrayTableConfig>, CatalogError> {
        let fields = self.flatten(kind)?;
        let mut out: Vec<ArrayTableConfig> =
            self.tables.get(kind).cloned().unwrap_or_default();
        for field in fields.into_iter().filter(|f| f.is_array()) {
            if out.iter().any(|c| c.array_key == field.key) {
                continue;
            }
            if let Some(config) = ArrayTableConfig::from_field(field) {
                trace!(kind, array_key = %field.key, "derived table layout");
                out.push(config);
            }
        }
        Ok(out)
    }

    /// Reverse lookup of a variable key by its display label, across every
    /// catalog in registration order, `common` last.
    pub fn key_by_label(&self, label: &str) -> Option<String> {
        self.kinds
            .values()
            .chain(std::iter::once(&self.common))
            .flat_map(|c| variable_items_of(c.fields.iter()))
            .find(|item| item.label == label)
            .map(|item| item.key)
    }
}

fn variable_items_of<'a>(fields: impl IntoIterator<Item = &'a FieldDescriptor>) -> Vec<VariableItem> {
    let mut items = Vec::new();
    for field in fields {
        if field.is_array() {
            for child in field.children() {
                items.push(VariableItem::new(
                    field.row_path(0, child),
                    format!("{}（第1项）", child.label),
                ));
            }
        } else {
            items.push(VariableItem::new(&field.key, &field.label));
        }
    }
    items
}
