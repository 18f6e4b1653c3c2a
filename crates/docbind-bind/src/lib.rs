//! Turns a template plus a business object into renderer inputs, and reads
//! the variable names a stored template uses.

mod binder;
mod extract;
mod legacy;
mod projection;

pub use binder::{bind, InputValue, RenderInputs};
pub use extract::extract_variables;
pub use legacy::{preview_legacy, table_insert_text};
pub use projection::{TableProjection, OPERATION_COLUMNS};
