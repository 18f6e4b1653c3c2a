//! Static registry of the business fields each printable document kind
//! exposes to templates.

mod builtin;
mod field;
mod registry;
mod tables;

use thiserror::Error;

pub use field::{DocumentKindCatalog, FieldDescriptor, FieldKind, ScalarType, VariableItem};
pub use registry::Catalogs;
pub use tables::{ArrayTableConfig, DEFAULT_MAX_ROWS, TableColumn};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("no field catalog for document kind \"{kind}\"")]
    UnknownKind { kind: String },
}
