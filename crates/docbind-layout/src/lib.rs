//! Template authoring helpers: the first-draft skeleton, click-to-place
//! variables and hardening of stored templates.

mod config;
mod placement;
mod sanitize;
mod skeleton;

use thiserror::Error;

pub use config::{SkeletonLayout, Slot};
pub use placement::{grid_position, place_variable};
pub use sanitize::{collapse_repeated_remarks, sanitize, DEFAULT_FONT, TABLE_ROW_HEIGHT};
pub use skeleton::{build_skeleton, is_table_row_key, VariableShape};

#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("invalid layout config: {0}")]
    Config(#[from] serde_yaml::Error),

    #[error("invalid dimension at \"{at}\"")]
    InvalidDimension { at: String },

    #[error("region \"{name}\" is already on the template")]
    DuplicateName { name: String },
}
